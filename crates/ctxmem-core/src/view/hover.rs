//! Hover text for a single line.

use crate::error::Result;
use crate::note::NoteStore;
use crate::types::format_timestamp;

/// Markdown for all notes on `line`, or `None` when the line has none.
pub fn hover_for_line(store: &NoteStore, file_path: &str, line: u32) -> Result<Option<String>> {
    let notes = store.notes_for_line(file_path, line)?;
    if notes.is_empty() {
        return Ok(None);
    }

    let mut md = String::from("## 🧠 Context Memory\n\n");
    for (index, note) in notes.iter().enumerate() {
        if index > 0 {
            md.push_str("---\n\n");
        }
        md.push_str(&format!("**Note {}:**\n\n", index + 1));
        md.push_str(&note.content);
        md.push_str("\n\n");
        md.push_str(&format!("*Added: {}*\n\n", format_timestamp(note.created_at)));
        if let Some(last_viewed) = note.last_viewed {
            md.push_str(&format!("*Last viewed: {}*\n\n", format_timestamp(last_viewed)));
        }
    }
    Ok(Some(md))
}
