//! Read-only views: hover, gutter markers, status, tree.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use ctxmem_core::Error;
use ctxmem_core::view::{FileNode, gutter_markers, hover_for_line, note_tree, status_for_file};

use super::App;
use crate::cli::CursorArgs;
use crate::editor::{absolute_path, position_from_args};

/// Print hover text for the cursor line.
pub fn hover(app: &App, cursor: &CursorArgs) -> Result<()> {
    let Some(position) = position_from_args(cursor)? else {
        return Err(Error::NoActiveTarget.into());
    };

    match hover_for_line(&app.store, &position.file_path, position.line)? {
        Some(markdown) => print!("{}", markdown),
        None => println!("{}", "No notes at this line".dimmed()),
    }
    Ok(())
}

/// Print the gutter markers of `file`.
pub fn marks(app: &App, file: &Path) -> Result<()> {
    let file_path = absolute_path(file)?;
    // Unreadable files are decorated without an end-of-document check.
    let line_count = std::fs::read_to_string(file)
        .ok()
        .map(|text| u32::try_from(text.lines().count()).unwrap_or(u32::MAX));

    let markers = gutter_markers(&app.store, &file_path, line_count)?;
    if markers.is_empty() {
        println!("{}", "No notes for this file".dimmed());
        return Ok(());
    }

    for marker in markers {
        println!(
            "{} {} {}",
            "●".yellow(),
            format!("{:>5}", marker.line + 1).bold(),
            marker.note_id.dimmed()
        );
        for line in marker.hover.lines().filter(|line| !line.is_empty()) {
            println!("        {}", line);
        }
    }
    Ok(())
}

/// Print the status bar entry for `file`.
pub fn status(app: &App, file: &Path) -> Result<()> {
    let file_path = absolute_path(file)?;
    match status_for_file(&app.store, &file_path)? {
        Some(summary) => {
            println!("{}", summary.text.cyan().bold());
            println!("{}", summary.tooltip.trim_end());
        }
        None => println!("{}", "(hidden)".dimmed()),
    }
    Ok(())
}

/// Print every note grouped by file.
pub fn tree(app: &App) -> Result<()> {
    let files = note_tree(&app.store)?;
    if files.is_empty() {
        println!("{}", "No context notes yet".dimmed());
        return Ok(());
    }

    println!("{}", "Context Notes".cyan().bold());
    println!("{}", "─".repeat(50));
    for file in &files {
        print_file(file);
    }
    Ok(())
}

fn print_file(file: &FileNode) {
    println!(
        "{}  {}  {}",
        file.label.bold(),
        file.description.dimmed(),
        file.file_path.dimmed()
    );
    for note in &file.notes {
        println!(
            "  {} {}  {}",
            "•".yellow(),
            note.label,
            note.description.dimmed()
        );
        println!("    {}", note.note_id.dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::memory_app;
    use std::path::PathBuf;

    #[test]
    fn test_hover_without_file_is_no_active_editor() {
        let (app, _) = memory_app();
        let err = hover(&app, &CursorArgs { file: None, line: 1 }).unwrap_err();
        assert_eq!(err.to_string(), "No active editor");
    }

    #[test]
    fn test_views_render_for_unknown_file() {
        let (app, _) = memory_app();
        let file = PathBuf::from("/nonexistent/never.rs");
        marks(&app, &file).unwrap();
        status(&app, &file).unwrap();
        tree(&app).unwrap();
    }

    #[test]
    fn test_marks_reads_line_count() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("a.rs");
        std::fs::write(&file, "fn main() {}\n").unwrap();

        let (app, _) = memory_app();
        let path = absolute_path(&file).unwrap();
        app.manager
            .create_note(&ctxmem_core::EditorPosition::new(path.clone(), 0), "ok".into())
            .unwrap();
        app.manager
            .create_note(&ctxmem_core::EditorPosition::new(path.clone(), 5), "gone".into())
            .unwrap();

        let markers = gutter_markers(&app.store, &path, Some(1)).unwrap();
        assert_eq!(markers.len(), 1);
        marks(&app, &file).unwrap();
    }
}
