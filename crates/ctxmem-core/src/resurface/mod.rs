//! Time-based resurfacing of notes.
//!
//! Two independent policies share the store's timestamps:
//!
//! - **Returning to a file**: when the focused file has notes and its previous
//!   recorded access is at least `return_after` old, a reminder is raised.
//! - **Stale notes**: notes not created or viewed within `stale_after` are
//!   listed on demand.

mod policy;

pub use policy::*;

use std::time::Duration;

use crate::types::{DAY_MS, HOUR_MS, Note, file_name, plural};

/// Label of the reminder button that opens the file's notes.
pub const VIEW_NOTES_ACTION: &str = "View Notes";
/// Label of the reminder button that closes it.
pub const DISMISS_ACTION: &str = "Dismiss";

/// Configuration for resurfacing.
#[derive(Debug, Clone)]
pub struct ResurfaceConfig {
    /// Period of the active-file check.
    pub check_interval: Duration,
    /// Minimum gap since the previous access that triggers a reminder.
    pub return_after: Duration,
    /// Age past which an untouched note is stale.
    pub stale_after: Duration,
}

impl Default for ResurfaceConfig {
    fn default() -> Self {
        Self {
            check_interval: Duration::from_secs(60),
            return_after: Duration::from_millis(DAY_MS as u64),
            stale_after: Duration::from_millis(7 * DAY_MS as u64),
        }
    }
}

impl ResurfaceConfig {
    pub(crate) fn return_after_ms(&self) -> i64 {
        duration_ms(self.return_after)
    }

    pub(crate) fn stale_after_ms(&self) -> i64 {
        duration_ms(self.stale_after)
    }
}

fn duration_ms(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}

/// "Welcome back" reminder for the focused file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub file_path: String,
    pub note_count: usize,
    /// Time since the previous recorded access.
    pub elapsed_ms: i64,
}

impl Reminder {
    pub fn hours_since(&self) -> f64 {
        self.elapsed_ms as f64 / HOUR_MS as f64
    }

    /// Whole days since the previous access; a 24-47 hour gap is day 0.
    pub fn days_since(&self) -> i64 {
        self.elapsed_ms / DAY_MS
    }

    pub fn file_name(&self) -> String {
        file_name(&self.file_path)
    }

    pub fn message(&self) -> String {
        let name = self.file_name();
        let count = self.note_count as i64;
        let days = self.days_since();
        if days == 0 {
            format!(
                "Welcome back to {}! You have {} context note{} here.",
                name,
                count,
                plural(count)
            )
        } else {
            format!(
                "You last worked on {} {} day{} ago. You have {} context note{} here.",
                name,
                days,
                plural(days),
                count,
                plural(count)
            )
        }
    }
}

/// What the user did with a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderAction {
    ViewNotes,
    Dismiss,
}

/// Entry of the stale-notes report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleNote {
    pub file_name: String,
    /// One-based.
    pub display_line: u32,
    pub days_since: i64,
    pub note: Note,
}

impl StaleNote {
    pub(crate) fn new(note: Note, now: i64) -> Self {
        Self {
            file_name: note.file_name(),
            display_line: note.display_line(),
            days_since: (now - note.last_interaction()) / DAY_MS,
            note,
        }
    }

    pub fn content(&self) -> &str {
        &self.note.content
    }

    pub fn label(&self) -> String {
        format!("{} - Line {}", self.file_name, self.display_line)
    }

    pub fn description(&self) -> String {
        format!("{} days ago", self.days_since)
    }
}
