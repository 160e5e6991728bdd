//! Seams to the host editor.
//!
//! The core never talks to a UI directly. A host supplies the focused file and
//! cursor through [`ActiveEditor`] and the prompt primitives through
//! [`Prompter`]. Cancelled prompts come back as `None`.

use std::sync::Mutex;

use crate::error::Result;
use crate::types::EditorPosition;

/// Focused file/position provider.
pub trait ActiveEditor: Send + Sync {
    /// Focused file and cursor line, `None` when nothing is focused.
    fn active_position(&self) -> Option<EditorPosition>;

    /// Open `file_path` and move the cursor to the zero-based `line`.
    fn reveal(&self, file_path: &str, line: u32) -> Result<()>;
}

/// One entry of a single-choice picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickItem {
    pub label: String,
    pub description: Option<String>,
    pub detail: Option<String>,
}

impl PickItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
            detail: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// User prompt primitives.
pub trait Prompter {
    /// Free-text input.
    fn input(&self, prompt: &str, placeholder: &str) -> Option<String>;

    /// Pick one item, returning its index.
    fn pick(&self, placeholder: &str, items: &[PickItem]) -> Option<usize>;

    /// Transient informational message.
    fn info(&self, message: &str);

    /// Transient error message.
    fn error(&self, message: &str);

    /// Informational message with buttons, returning the chosen index.
    fn info_with_actions(&self, message: &str, actions: &[&str]) -> Option<usize>;
}

/// Editor whose focus is set explicitly, e.g. from command-line arguments.
#[derive(Debug, Default)]
pub struct FixedEditor {
    position: Mutex<Option<EditorPosition>>,
    revealed: Mutex<Vec<EditorPosition>>,
}

impl FixedEditor {
    pub fn new(position: Option<EditorPosition>) -> Self {
        Self {
            position: Mutex::new(position),
            revealed: Mutex::new(Vec::new()),
        }
    }

    /// Change the focused position.
    pub fn focus(&self, position: Option<EditorPosition>) {
        if let Ok(mut current) = self.position.lock() {
            *current = position;
        }
    }

    /// Positions passed to `reveal`, oldest first.
    pub fn revealed(&self) -> Vec<EditorPosition> {
        self.revealed
            .lock()
            .map(|revealed| revealed.clone())
            .unwrap_or_default()
    }
}

impl ActiveEditor for FixedEditor {
    fn active_position(&self) -> Option<EditorPosition> {
        self.position.lock().ok().and_then(|position| position.clone())
    }

    fn reveal(&self, file_path: &str, line: u32) -> Result<()> {
        let position = EditorPosition::new(file_path, line);
        if let Ok(mut revealed) = self.revealed.lock() {
            revealed.push(position.clone());
        }
        // Revealing a file also focuses it.
        self.focus(Some(position));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_editor_reveal_moves_focus() {
        let editor = FixedEditor::new(None);
        assert!(editor.active_position().is_none());

        editor.reveal("/a.rs", 7).unwrap();
        assert_eq!(
            editor.active_position(),
            Some(EditorPosition::new("/a.rs", 7))
        );
        assert_eq!(editor.revealed(), vec![EditorPosition::new("/a.rs", 7)]);
    }

    #[test]
    fn test_pick_item_builder() {
        let item = PickItem::new("Line 3").description("2 days ago").detail("text");
        assert_eq!(item.label, "Line 3");
        assert_eq!(item.description.as_deref(), Some("2 days ago"));
        assert_eq!(item.detail.as_deref(), Some("text"));
    }
}
