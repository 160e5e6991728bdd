//! Resurfacing policy and its periodic runner.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error, info};

use crate::error::Result;
use crate::host::{ActiveEditor, PickItem, Prompter};
use crate::note::{NoteManager, NoteStore};
use crate::types::Note;

use super::{
    DISMISS_ACTION, Reminder, ReminderAction, ResurfaceConfig, StaleNote, VIEW_NOTES_ACTION,
};

/// Decides when to remind the user about notes.
pub struct ResurfacingPolicy {
    store: Arc<NoteStore>,
    config: ResurfaceConfig,
}

/// Handle for a running resurfacing loop.
#[derive(Debug)]
pub struct ResurfacingHandle {
    abort_handle: tokio::task::AbortHandle,
}

impl ResurfacingHandle {
    /// Prevent any further tick. A tick already running finishes.
    pub fn stop(&self) {
        self.abort_handle.abort();
        info!("Stopped resurfacing checks");
    }

    pub fn is_finished(&self) -> bool {
        self.abort_handle.is_finished()
    }
}

impl ResurfacingPolicy {
    pub fn new(store: Arc<NoteStore>, config: ResurfaceConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &ResurfaceConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Returning to a file
    // ─────────────────────────────────────────────────────────────────────────

    /// One pass of the active-file check.
    ///
    /// Records a fresh access for the focused file whenever it has notes, so
    /// the next tick measures against this one rather than the original gap.
    pub fn check_active_file(&self, editor: &dyn ActiveEditor) -> Result<Option<Reminder>> {
        let Some(position) = editor.active_position() else {
            return Ok(None);
        };
        let file_path = position.file_path;

        let notes = self.store.notes_for_file(&file_path)?;
        if notes.is_empty() {
            return Ok(None);
        }

        let Some(previous) = self.store.swap_file_access(&file_path)? else {
            debug!(file = %file_path, "First recorded visit, nothing to resurface");
            return Ok(None);
        };

        let elapsed_ms = self.store.now() - previous;
        if elapsed_ms < self.config.return_after_ms() {
            return Ok(None);
        }

        let reminder = Reminder {
            file_path,
            note_count: notes.len(),
            elapsed_ms,
        };
        info!(
            file = %reminder.file_path,
            note_count = reminder.note_count,
            hours_since = reminder.hours_since(),
            "Returning to file with notes"
        );
        Ok(Some(reminder))
    }

    /// Show a reminder with its actions; "View Notes" opens the file's notes.
    pub fn present_reminder(
        &self,
        reminder: &Reminder,
        manager: &NoteManager,
        editor: &dyn ActiveEditor,
        prompter: &dyn Prompter,
    ) -> Result<ReminderAction> {
        let choice =
            prompter.info_with_actions(&reminder.message(), &[VIEW_NOTES_ACTION, DISMISS_ACTION]);
        if choice == Some(0) {
            manager.view_notes_for_current_file(editor, prompter)?;
            Ok(ReminderAction::ViewNotes)
        } else {
            Ok(ReminderAction::Dismiss)
        }
    }

    /// Run the active-file check now and then once per `check_interval`.
    ///
    /// Reminders are sent on the returned channel. The loop ends when the
    /// handle is stopped or the receiver is dropped. Must be called from
    /// within a tokio runtime.
    pub fn start(
        self: Arc<Self>,
        editor: Arc<dyn ActiveEditor>,
    ) -> (ResurfacingHandle, mpsc::UnboundedReceiver<Reminder>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let period = self.config.check_interval;
        info!(interval_secs = period.as_secs(), "Starting resurfacing checks");

        let policy = Arc::clone(&self);
        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                // First tick completes immediately: the startup check.
                ticker.tick().await;

                match policy.check_active_file(editor.as_ref()) {
                    Ok(Some(reminder)) => {
                        if tx.send(reminder).is_err() {
                            debug!("Reminder receiver dropped, ending resurfacing loop");
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => {
                        error!(error = %e, "Resurfacing check failed");
                    }
                }
            }
        });

        (
            ResurfacingHandle {
                abort_handle: handle.abort_handle(),
            },
            rx,
        )
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Stale notes
    // ─────────────────────────────────────────────────────────────────────────

    /// Notes whose last view (or creation) is older than `stale_after`, in storage order.
    pub fn stale_notes(&self) -> Result<Vec<StaleNote>> {
        let now = self.store.now();
        let cutoff = now - self.config.stale_after_ms();

        Ok(self
            .store
            .all_notes()?
            .into_iter()
            .filter(|note| note.last_interaction() < cutoff)
            .map(|note| StaleNote::new(note, now))
            .collect())
    }

    /// Let the user pick a stale note, jump to it and mark it viewed.
    pub fn show_stale_notes(
        &self,
        editor: &dyn ActiveEditor,
        prompter: &dyn Prompter,
    ) -> Result<Option<Note>> {
        let stale = self.stale_notes()?;
        if stale.is_empty() {
            prompter.info("No stale notes found!");
            return Ok(None);
        }

        let items: Vec<PickItem> = stale
            .iter()
            .map(|entry| {
                PickItem::new(entry.label())
                    .description(entry.description())
                    .detail(entry.content())
            })
            .collect();

        let Some(entry) = prompter
            .pick("Select a note to revisit", &items)
            .and_then(|index| stale.into_iter().nth(index))
        else {
            return Ok(None);
        };

        let manager = NoteManager::new(Arc::clone(&self.store));
        manager.open_note(editor, &entry.note.id)
    }
}
