//! Editor stand-in driven by command-line arguments.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use ctxmem_core::EditorPosition;
use ctxmem_core::host::{ActiveEditor, FixedEditor};

use crate::cli::CursorArgs;

/// Focused file from `--file`/`--line`; "revealing" a note prints where to jump.
pub struct TerminalEditor {
    inner: FixedEditor,
}

impl TerminalEditor {
    pub fn new(position: Option<EditorPosition>) -> Self {
        Self {
            inner: FixedEditor::new(position),
        }
    }

    pub fn from_args(args: &CursorArgs) -> Result<Self> {
        Ok(Self::new(position_from_args(args)?))
    }
}

/// Absolute path and zero-based line, `None` when no file was given.
pub fn position_from_args(args: &CursorArgs) -> Result<Option<EditorPosition>> {
    args.file
        .as_deref()
        .map(|file| {
            Ok(EditorPosition::new(
                absolute_path(file)?,
                args.line.saturating_sub(1),
            ))
        })
        .transpose()
}

/// Notes are keyed by absolute path, so every path from the user goes through here.
pub fn absolute_path(file: &Path) -> Result<String> {
    let path = std::path::absolute(file)
        .with_context(|| format!("Invalid path: {}", file.display()))?;
    Ok(path.to_string_lossy().into_owned())
}

impl ActiveEditor for TerminalEditor {
    fn active_position(&self) -> Option<EditorPosition> {
        self.inner.active_position()
    }

    fn reveal(&self, file_path: &str, line: u32) -> ctxmem_core::Result<()> {
        println!("{} {}:{}", "→".cyan(), file_path, line + 1);
        self.inner.reveal(file_path, line)
    }
}
