//! Shared types for ctxmem.
//!
//! These types are persisted as JSON inside the key-value store, so field
//! names are camelCase to keep the stored blob stable.

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Milliseconds in one minute.
pub const MINUTE_MS: i64 = 60 * 1000;
/// Milliseconds in one hour.
pub const HOUR_MS: i64 = 60 * MINUTE_MS;
/// Milliseconds in one day.
pub const DAY_MS: i64 = 24 * HOUR_MS;

// ─────────────────────────────────────────────────────────────────────────────
// Notes
// ─────────────────────────────────────────────────────────────────────────────

/// A free-text note attached to one line of a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    /// Absolute path of the annotated file. Renaming the file orphans the note.
    pub file_path: String,
    /// Zero-based line, fixed at creation time.
    pub line_number: u32,
    pub content: String,
    /// Epoch milliseconds.
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_viewed: Option<i64>,
    /// Reserved, no behavior reads it yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Note {
    /// Build a new note with a fresh id.
    pub fn new(
        file_path: impl Into<String>,
        line_number: u32,
        content: impl Into<String>,
        created_at: i64,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            file_path: file_path.into(),
            line_number,
            content: content.into(),
            created_at,
            last_viewed: None,
            tags: None,
        }
    }

    /// Last time the user interacted with the note.
    pub fn last_interaction(&self) -> i64 {
        self.last_viewed.unwrap_or(self.created_at)
    }

    /// Base name of the annotated file.
    pub fn file_name(&self) -> String {
        file_name(&self.file_path)
    }

    /// One-based line for display.
    pub fn display_line(&self) -> u32 {
        self.line_number + 1
    }

    /// Shallow merge: fields present in the patch overwrite, the rest stay.
    ///
    /// `created_at` cannot be patched, and `last_viewed` never goes below it.
    pub fn apply(&mut self, patch: &NotePatch) {
        if let Some(ref file_path) = patch.file_path {
            self.file_path = file_path.clone();
        }
        if let Some(line_number) = patch.line_number {
            self.line_number = line_number;
        }
        if let Some(ref content) = patch.content {
            self.content = content.clone();
        }
        if let Some(last_viewed) = patch.last_viewed {
            self.last_viewed = Some(last_viewed.max(self.created_at));
        }
        if let Some(ref tags) = patch.tags {
            self.tags = Some(tags.clone());
        }
    }
}

/// Partial update for a note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePatch {
    pub file_path: Option<String>,
    pub line_number: Option<u32>,
    pub content: Option<String>,
    pub last_viewed: Option<i64>,
    pub tags: Option<Vec<String>>,
}

impl NotePatch {
    /// Patch that only marks a note as viewed.
    pub fn viewed_at(timestamp: i64) -> Self {
        Self {
            last_viewed: Some(timestamp),
            ..Default::default()
        }
    }
}

/// Last-focus timestamp per file path.
pub type FileAccessRecord = BTreeMap<String, i64>;

// ─────────────────────────────────────────────────────────────────────────────
// Editor
// ─────────────────────────────────────────────────────────────────────────────

/// Focused file and cursor line reported by the host editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorPosition {
    pub file_path: String,
    /// Zero-based.
    pub line: u32,
}

impl EditorPosition {
    pub fn new(file_path: impl Into<String>, line: u32) -> Self {
        Self {
            file_path: file_path.into(),
            line,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Last path component, or the whole string when there is none.
pub fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

/// `"s"` when `count` is not one.
pub fn plural(count: i64) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Local date and time for an epoch-millisecond timestamp.
pub fn format_timestamp(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => millis.to_string(),
    }
}

/// Local date for an epoch-millisecond timestamp.
pub fn format_date(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => millis.to_string(),
    }
}

/// First `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
