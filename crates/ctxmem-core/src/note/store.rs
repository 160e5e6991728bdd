//! Note store: the single owner of persisted notes and file access times.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::broadcast;
use tracing::debug;

use crate::clock::Clock;
use crate::db::{self, KeyValueStore};
use crate::error::{Error, Result};
use crate::types::{DAY_MS, FileAccessRecord, HOUR_MS, MINUTE_MS, Note, NotePatch, plural};

/// Key holding the note collection.
pub const NOTES_KEY: &str = "contextNotes";
/// Key holding the file access map.
pub const FILE_ACCESS_KEY: &str = "fileAccess";

const EVENT_CAPACITY: usize = 64;

/// Change notification for presentation adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A note was added, updated or deleted.
    NotesChanged,
    /// A file became the active editor target.
    FileAccessed { file_path: String },
}

/// Owns the note collection and the per-file access record.
///
/// Every mutation is a full read-modify-write of one key, done while holding
/// the store's operation lock, so two operations never interleave.
pub struct NoteStore {
    kv: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    op_lock: Mutex<()>,
    events: broadcast::Sender<StoreEvent>,
}

impl NoteStore {
    pub fn new(kv: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            kv,
            clock,
            op_lock: Mutex::new(()),
            events,
        }
    }

    /// Current time according to the store's clock.
    pub fn now(&self) -> i64 {
        self.clock.now_millis()
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>> {
        self.op_lock.lock().map_err(|_| Error::LockPoisoned)
    }

    fn load_notes(&self) -> Result<Vec<Note>> {
        db::load_or_default(self.kv.as_ref(), NOTES_KEY)
    }

    fn save_notes(&self, notes: &[Note]) -> Result<()> {
        db::save(self.kv.as_ref(), NOTES_KEY, notes)
    }

    fn load_access(&self) -> Result<FileAccessRecord> {
        db::load_or_default(self.kv.as_ref(), FILE_ACCESS_KEY)
    }

    fn emit(&self, event: StoreEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Note queries
    // ─────────────────────────────────────────────────────────────────────────

    /// All notes in insertion order; empty when nothing was stored yet.
    pub fn all_notes(&self) -> Result<Vec<Note>> {
        let _guard = self.lock()?;
        self.load_notes()
    }

    /// Notes of one file, in storage order.
    pub fn notes_for_file(&self, file_path: &str) -> Result<Vec<Note>> {
        Ok(self
            .all_notes()?
            .into_iter()
            .filter(|note| note.file_path == file_path)
            .collect())
    }

    /// Notes of one line of one file, in storage order.
    pub fn notes_for_line(&self, file_path: &str, line_number: u32) -> Result<Vec<Note>> {
        Ok(self
            .notes_for_file(file_path)?
            .into_iter()
            .filter(|note| note.line_number == line_number)
            .collect())
    }

    /// Look a note up by id.
    pub fn note(&self, id: &str) -> Result<Option<Note>> {
        Ok(self.all_notes()?.into_iter().find(|note| note.id == id))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Note mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a note and persist the collection.
    pub fn add_note(&self, note: Note) -> Result<()> {
        {
            let _guard = self.lock()?;
            let mut notes = self.load_notes()?;
            debug!(note_id = %note.id, file = %note.file_path, line = note.line_number, "Adding note");
            notes.push(note);
            self.save_notes(&notes)?;
        }
        self.emit(StoreEvent::NotesChanged);
        Ok(())
    }

    /// Merge `patch` into the note with `id`.
    ///
    /// Returns `false` without touching storage when no such note exists.
    pub fn update_note(&self, id: &str, patch: &NotePatch) -> Result<bool> {
        {
            let _guard = self.lock()?;
            let mut notes = self.load_notes()?;
            let Some(note) = notes.iter_mut().find(|note| note.id == id) else {
                debug!(note_id = %id, "Update skipped, note not found");
                return Ok(false);
            };
            note.apply(patch);
            self.save_notes(&notes)?;
        }
        self.emit(StoreEvent::NotesChanged);
        Ok(true)
    }

    /// Remove the note with `id`. Returns `false` when it was already gone.
    pub fn delete_note(&self, id: &str) -> Result<bool> {
        {
            let _guard = self.lock()?;
            let mut notes = self.load_notes()?;
            let Some(index) = notes.iter().position(|note| note.id == id) else {
                debug!(note_id = %id, "Delete skipped, note not found");
                return Ok(false);
            };
            notes.remove(index);
            self.save_notes(&notes)?;
        }
        self.emit(StoreEvent::NotesChanged);
        Ok(true)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // File access
    // ─────────────────────────────────────────────────────────────────────────

    /// Set the last access of `file_path` to now.
    pub fn record_file_access(&self, file_path: &str) -> Result<()> {
        self.swap_file_access(file_path).map(|_| ())
    }

    /// Set the last access of `file_path` to now, returning the previous one.
    ///
    /// Read and write happen under one lock, so concurrent callers never see
    /// the same previous value.
    pub fn swap_file_access(&self, file_path: &str) -> Result<Option<i64>> {
        let previous = {
            let _guard = self.lock()?;
            let mut access = self.load_access()?;
            let previous = access.insert(file_path.to_string(), self.now());
            db::save(self.kv.as_ref(), FILE_ACCESS_KEY, &access)?;
            previous
        };
        self.emit(StoreEvent::FileAccessed {
            file_path: file_path.to_string(),
        });
        Ok(previous)
    }

    /// Last recorded access of `file_path`.
    pub fn last_access(&self, file_path: &str) -> Result<Option<i64>> {
        let _guard = self.lock()?;
        Ok(self.load_access()?.get(file_path).copied())
    }

    /// Coarse "N units ago" text for the last access of `file_path`.
    pub fn time_since_last_access(&self, file_path: &str) -> Result<Option<String>> {
        Ok(self
            .last_access(file_path)?
            .map(|last| describe_elapsed(self.now() - last)))
    }

    /// Number of files with an access record.
    pub fn tracked_file_count(&self) -> Result<usize> {
        let _guard = self.lock()?;
        Ok(self.load_access()?.len())
    }
}

/// Largest whole unit with a nonzero count: days, hours, minutes, else "just now".
pub fn describe_elapsed(elapsed_ms: i64) -> String {
    let elapsed_ms = elapsed_ms.max(0);
    let days = elapsed_ms / DAY_MS;
    let hours = elapsed_ms / HOUR_MS;
    let minutes = elapsed_ms / MINUTE_MS;

    if days > 0 {
        format!("{} day{} ago", days, plural(days))
    } else if hours > 0 {
        format!("{} hour{} ago", hours, plural(hours))
    } else if minutes > 0 {
        format!("{} minute{} ago", minutes, plural(minutes))
    } else {
        "just now".to_string()
    }
}
