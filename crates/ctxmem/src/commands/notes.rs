//! Note commands: add, view, delete, open.

use anyhow::{Result, bail};
use colored::Colorize;

use super::{App, touch};
use crate::cli::CursorArgs;
use crate::editor::TerminalEditor;
use crate::prompt::TerminalPrompter;

/// Attach a note to the cursor line, prompting when `text` is omitted.
pub fn add(app: &App, cursor: &CursorArgs, text: Option<String>) -> Result<()> {
    let editor = TerminalEditor::from_args(cursor)?;
    let prompter = TerminalPrompter::with_input(text);

    if let Some(note) = app.manager.add_note_at_cursor(&editor, &prompter)? {
        println!("  {} {}", "ID:".dimmed(), note.id);
    }
    touch(app, &editor)
}

/// Pick one of the focused file's notes and jump to it.
pub fn view(app: &App, cursor: &CursorArgs) -> Result<()> {
    let editor = TerminalEditor::from_args(cursor)?;
    app.manager
        .view_notes_for_current_file(&editor, &TerminalPrompter::new())?;
    touch(app, &editor)
}

/// Delete the note at the cursor line, asking which one when there are several.
pub fn delete(app: &App, cursor: &CursorArgs) -> Result<()> {
    let editor = TerminalEditor::from_args(cursor)?;
    app.manager
        .delete_note_at_cursor(&editor, &TerminalPrompter::new())?;
    touch(app, &editor)
}

/// Jump to a note by ID and mark it viewed.
pub fn open(app: &App, id: &str) -> Result<()> {
    let editor = TerminalEditor::new(None);
    match app.manager.open_note(&editor, id)? {
        Some(note) => {
            println!();
            println!("{}", note.content);
            Ok(())
        }
        None => bail!("Note not found: {}", id),
    }
}
