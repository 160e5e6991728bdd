//! Note manager: user-facing note commands.

use std::sync::Arc;

use tracing::info;

use crate::error::{Error, Result};
use crate::host::{ActiveEditor, PickItem, Prompter};
use crate::types::{EditorPosition, Note, NotePatch, format_timestamp, truncate_chars};

use super::NoteStore;

const PREVIEW_CHARS: usize = 50;

/// Creates, lists, opens and deletes notes on behalf of the user.
pub struct NoteManager {
    store: Arc<NoteStore>,
}

impl NoteManager {
    pub fn new(store: Arc<NoteStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<NoteStore> {
        &self.store
    }

    /// Focused position, or a "No active editor" message.
    fn require_position(
        editor: &dyn ActiveEditor,
        prompter: &dyn Prompter,
    ) -> Option<EditorPosition> {
        match editor.active_position().ok_or(Error::NoActiveTarget) {
            Ok(position) => Some(position),
            Err(e) => {
                prompter.error(&e.to_string());
                None
            }
        }
    }

    /// Prompt for text and attach it to the cursor line.
    ///
    /// Returns `None` when there is no editor or the prompt was cancelled.
    pub fn add_note_at_cursor(
        &self,
        editor: &dyn ActiveEditor,
        prompter: &dyn Prompter,
    ) -> Result<Option<Note>> {
        let Some(position) = Self::require_position(editor, prompter) else {
            return Ok(None);
        };

        let content = prompter.input(
            "Enter your context note",
            "Why did you write this? What were you thinking?",
        );
        let Some(content) = content.filter(|text| !text.trim().is_empty()) else {
            return Ok(None);
        };

        let note = self.create_note(&position, content)?;
        prompter.info("Context note added!");
        Ok(Some(note))
    }

    /// Store a note at `position` without prompting.
    pub fn create_note(&self, position: &EditorPosition, content: String) -> Result<Note> {
        let note = Note::new(
            position.file_path.clone(),
            position.line,
            content,
            self.store.now(),
        );
        self.store.add_note(note.clone())?;
        info!(note_id = %note.id, file = %note.file_path, line = note.line_number, "Note created");
        Ok(note)
    }

    /// Let the user pick one of the focused file's notes and jump to it.
    pub fn view_notes_for_current_file(
        &self,
        editor: &dyn ActiveEditor,
        prompter: &dyn Prompter,
    ) -> Result<Option<Note>> {
        let Some(position) = Self::require_position(editor, prompter) else {
            return Ok(None);
        };

        let notes = self.store.notes_for_file(&position.file_path)?;
        if notes.is_empty() {
            prompter.info("No notes for this file");
            return Ok(None);
        }

        let items: Vec<PickItem> = notes
            .iter()
            .map(|note| {
                PickItem::new(format!("Line {}", note.display_line()))
                    .description(format!("{}...", truncate_chars(&note.content, PREVIEW_CHARS)))
                    .detail(format_timestamp(note.created_at))
            })
            .collect();

        let Some(index) = prompter.pick("Select a note to view", &items) else {
            return Ok(None);
        };
        let Some(note) = notes.into_iter().nth(index) else {
            return Ok(None);
        };

        self.mark_viewed(&note.id)?;
        editor.reveal(&note.file_path, note.line_number)?;
        Ok(self.store.note(&note.id)?)
    }

    /// Delete the note under the cursor, asking which one when there are several.
    pub fn delete_note_at_cursor(
        &self,
        editor: &dyn ActiveEditor,
        prompter: &dyn Prompter,
    ) -> Result<Option<Note>> {
        let Some(position) = Self::require_position(editor, prompter) else {
            return Ok(None);
        };

        let mut notes = self
            .store
            .notes_for_line(&position.file_path, position.line)?;

        let target = match notes.len() {
            0 => {
                prompter.info("No notes at this line");
                return Ok(None);
            }
            1 => notes.remove(0),
            _ => {
                let items: Vec<PickItem> = notes
                    .iter()
                    .map(|note| {
                        PickItem::new(truncate_chars(&note.content, PREVIEW_CHARS))
                            .description(format_timestamp(note.created_at))
                    })
                    .collect();
                let Some(index) = prompter.pick("Select a note to delete", &items) else {
                    return Ok(None);
                };
                if index >= notes.len() {
                    return Ok(None);
                }
                notes.remove(index)
            }
        };

        self.store.delete_note(&target.id)?;
        info!(note_id = %target.id, "Note deleted");
        prompter.info("Note deleted");
        Ok(Some(target))
    }

    /// Jump to a note by id and mark it viewed. Unknown ids are ignored.
    pub fn open_note(&self, editor: &dyn ActiveEditor, id: &str) -> Result<Option<Note>> {
        let Some(note) = self.store.note(id)? else {
            return Ok(None);
        };
        editor.reveal(&note.file_path, note.line_number)?;
        self.mark_viewed(&note.id)?;
        Ok(self.store.note(id)?)
    }

    /// Set `last_viewed` to now.
    pub fn mark_viewed(&self, id: &str) -> Result<bool> {
        self.store
            .update_note(id, &NotePatch::viewed_at(self.store.now()))
    }
}
