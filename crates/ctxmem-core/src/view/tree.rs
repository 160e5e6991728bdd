//! Two-level tree: files, then their notes.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::note::NoteStore;
use crate::types::{Note, file_name, format_date, plural, truncate_chars};

const LABEL_CHARS: usize = 40;

/// Top-level node: one annotated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub file_path: String,
    /// Base name.
    pub label: String,
    /// `"N note(s)"`.
    pub description: String,
    pub notes: Vec<NoteNode>,
}

/// Leaf node: one note. Selecting it opens the note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteNode {
    pub note_id: String,
    pub line: u32,
    pub label: String,
    pub tooltip: String,
    /// Creation date.
    pub description: String,
}

impl NoteNode {
    fn from_note(note: &Note) -> Self {
        let preview = truncate_chars(&note.content, LABEL_CHARS);
        let ellipsis = if preview.len() < note.content.len() { "..." } else { "" };
        Self {
            note_id: note.id.clone(),
            line: note.line_number,
            label: format!("Line {}: {}{}", note.display_line(), preview, ellipsis),
            tooltip: note.content.clone(),
            description: format_date(note.created_at),
        }
    }
}

/// All notes grouped by file, files sorted by path and notes by line.
pub fn note_tree(store: &NoteStore) -> Result<Vec<FileNode>> {
    let mut groups: BTreeMap<String, Vec<Note>> = BTreeMap::new();
    for note in store.all_notes()? {
        groups.entry(note.file_path.clone()).or_default().push(note);
    }

    Ok(groups
        .into_iter()
        .map(|(file_path, mut notes)| {
            // Stable: notes on the same line keep storage order.
            notes.sort_by_key(|note| note.line_number);
            let count = notes.len() as i64;
            FileNode {
                label: file_name(&file_path),
                description: format!("{} note{}", count, plural(count)),
                notes: notes.iter().map(NoteNode::from_note).collect(),
                file_path,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{NOW, memory_store};

    #[test]
    fn test_empty_tree() {
        let (store, _) = memory_store();
        assert!(note_tree(&store).unwrap().is_empty());
    }

    #[test]
    fn test_grouping_and_ordering() {
        let (store, _) = memory_store();
        for (file, line, content) in [
            ("/z/main.rs", 9, "later line"),
            ("/a/lib.rs", 0, "only"),
            ("/z/main.rs", 1, "early line"),
            ("/z/main.rs", 9, "same line, added after"),
        ] {
            store.add_note(Note::new(file, line, content, NOW)).unwrap();
        }

        let tree = note_tree(&store).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].file_path, "/a/lib.rs");
        assert_eq!(tree[0].label, "lib.rs");
        assert_eq!(tree[0].description, "1 note");

        let main = &tree[1];
        assert_eq!(main.description, "3 notes");
        let labels: Vec<&str> = main.notes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Line 2: early line",
                "Line 10: later line",
                "Line 10: same line, added after",
            ]
        );
    }

    #[test]
    fn test_long_content_is_truncated() {
        let (store, _) = memory_store();
        let content = "x".repeat(41);
        store.add_note(Note::new("/a.rs", 0, content.clone(), NOW)).unwrap();
        store.add_note(Note::new("/a.rs", 1, "y".repeat(40), NOW)).unwrap();

        let tree = note_tree(&store).unwrap();
        let notes = &tree[0].notes;
        assert_eq!(notes[0].label, format!("Line 1: {}...", "x".repeat(40)));
        assert_eq!(notes[0].tooltip, content);
        assert_eq!(notes[1].label, format!("Line 2: {}", "y".repeat(40)));
    }
}
