//! Status bar summary for the focused file.

use crate::error::Result;
use crate::note::NoteStore;
use crate::types::plural;

/// Right-aligned status indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSummary {
    pub text: String,
    pub tooltip: String,
    pub note_count: usize,
}

/// Summary for `file_path`, `None` (hidden) when it has no notes and was never accessed.
pub fn status_for_file(store: &NoteStore, file_path: &str) -> Result<Option<StatusSummary>> {
    let note_count = store.notes_for_file(file_path)?.len();
    let last_access = store.time_since_last_access(file_path)?;

    if note_count == 0 && last_access.is_none() {
        return Ok(None);
    }

    let mut text = String::from("🧠");
    let mut tooltip = String::from("Code Context Memory\n\n");

    if note_count > 0 {
        let count = note_count as i64;
        text.push_str(&format!(" {} note{}", count, plural(count)));
        tooltip.push_str(&format!(
            "{} context note{} in this file\n",
            count,
            plural(count)
        ));
    }
    if let Some(last_access) = last_access {
        tooltip.push_str(&format!("Last accessed: {}", last_access));
    }

    Ok(Some(StatusSummary {
        text,
        tooltip,
        note_count,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{NOW, memory_store};
    use crate::types::{HOUR_MS, Note};

    #[test]
    fn test_hidden_for_unknown_file() {
        let (store, _) = memory_store();
        assert!(status_for_file(&store, "/a.rs").unwrap().is_none());
    }

    #[test]
    fn test_access_only() {
        let (store, clock) = memory_store();
        store.record_file_access("/a.rs").unwrap();
        clock.advance(2 * HOUR_MS);

        let status = status_for_file(&store, "/a.rs").unwrap().unwrap();
        assert_eq!(status.text, "🧠");
        assert_eq!(status.tooltip, "Code Context Memory\n\nLast accessed: 2 hours ago");
        assert_eq!(status.note_count, 0);
    }

    #[test]
    fn test_notes_and_access() {
        let (store, _) = memory_store();
        store.add_note(Note::new("/a.rs", 0, "a", NOW)).unwrap();
        store.add_note(Note::new("/a.rs", 3, "b", NOW)).unwrap();
        store.record_file_access("/a.rs").unwrap();

        let status = status_for_file(&store, "/a.rs").unwrap().unwrap();
        assert_eq!(status.text, "🧠 2 notes");
        assert_eq!(
            status.tooltip,
            "Code Context Memory\n\n2 context notes in this file\nLast accessed: just now"
        );
    }

    #[test]
    fn test_single_note_without_access() {
        let (store, _) = memory_store();
        store.add_note(Note::new("/a.rs", 0, "a", NOW)).unwrap();

        let status = status_for_file(&store, "/a.rs").unwrap().unwrap();
        assert_eq!(status.text, "🧠 1 note");
        assert_eq!(
            status.tooltip,
            "Code Context Memory\n\n1 context note in this file\n"
        );
    }
}
