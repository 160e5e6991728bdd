//! Gutter markers.

use crate::error::Result;
use crate::note::NoteStore;
use crate::types::{Note, format_timestamp};

/// Marker drawn next to an annotated line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GutterMarker {
    /// Zero-based.
    pub line: u32,
    pub note_id: String,
    /// Markdown shown when hovering the marker.
    pub hover: String,
}

/// One marker per note of `file_path`, in storage order.
///
/// When `line_count` is known, notes past the end of the document are skipped.
pub fn gutter_markers(
    store: &NoteStore,
    file_path: &str,
    line_count: Option<u32>,
) -> Result<Vec<GutterMarker>> {
    Ok(store
        .notes_for_file(file_path)?
        .into_iter()
        .filter(|note| line_count.is_none_or(|count| note.line_number < count))
        .map(|note| GutterMarker {
            line: note.line_number,
            hover: marker_hover(&note),
            note_id: note.id,
        })
        .collect())
}

fn marker_hover(note: &Note) -> String {
    let mut md = String::new();
    md.push_str("### 📝 Context Note\n\n");
    md.push_str(&note.content);
    md.push_str("\n\n---\n\n");
    md.push_str(&format!("*Created: {}*\n\n", format_timestamp(note.created_at)));
    if let Some(last_viewed) = note.last_viewed {
        md.push_str(&format!("*Last viewed: {}*\n\n", format_timestamp(last_viewed)));
    }
    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{NOW, memory_store};
    use crate::types::NotePatch;

    #[test]
    fn test_markers_follow_file_notes() {
        let (store, _) = memory_store();
        let a = Note::new("/a.rs", 2, "first", NOW);
        let b = Note::new("/b.rs", 0, "other file", NOW);
        let c = Note::new("/a.rs", 40, "past the end", NOW);
        for note in [&a, &b, &c] {
            store.add_note(note.clone()).unwrap();
        }

        let markers = gutter_markers(&store, "/a.rs", None).unwrap();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].line, 2);
        assert_eq!(markers[0].note_id, a.id);
        assert!(markers[0].hover.starts_with("### 📝 Context Note\n\nfirst\n\n---"));
        assert!(!markers[0].hover.contains("Last viewed"));

        let clipped = gutter_markers(&store, "/a.rs", Some(10)).unwrap();
        assert_eq!(clipped.len(), 1);
    }

    #[test]
    fn test_marker_shows_last_viewed() {
        let (store, _) = memory_store();
        let note = Note::new("/a.rs", 0, "seen", NOW);
        store.add_note(note.clone()).unwrap();
        store
            .update_note(&note.id, &NotePatch::viewed_at(NOW + 1))
            .unwrap();

        let markers = gutter_markers(&store, "/a.rs", Some(1)).unwrap();
        assert!(markers[0].hover.contains("*Last viewed: "));
    }
}
