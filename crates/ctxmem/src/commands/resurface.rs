//! Resurfacing commands: focus, stale, watch.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use ctxmem_core::host::ActiveEditor;
use ctxmem_core::view::status_for_file;
use ctxmem_core::{ResurfacingPolicy, StoreEvent};
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use super::App;
use crate::cli::CursorArgs;
use crate::editor::TerminalEditor;
use crate::prompt::TerminalPrompter;

/// Make a file the active editor target.
///
/// Runs one resurfacing check, then records the access so the status view
/// reflects it even for files without notes.
pub fn focus(app: &App, cursor: &CursorArgs) -> Result<()> {
    let editor = TerminalEditor::from_args(cursor)?;
    let prompter = TerminalPrompter::new();

    if let Some(reminder) = app.policy.check_active_file(&editor)? {
        app.policy
            .present_reminder(&reminder, &app.manager, &editor, &prompter)?;
    }

    let Some(position) = editor.active_position() else {
        return Ok(());
    };
    if app.store.notes_for_file(&position.file_path)?.is_empty() {
        app.store.record_file_access(&position.file_path)?;
    }
    print_status(app, &position.file_path)?;
    Ok(())
}

/// List notes not viewed in a while and open the one picked.
pub fn stale(app: &App) -> Result<()> {
    let editor = TerminalEditor::new(None);
    app.policy
        .show_stale_notes(&editor, &TerminalPrompter::new())?;
    Ok(())
}

/// Check the focused file periodically until Ctrl-C.
pub async fn watch(app: &App, cursor: &CursorArgs, interval_secs: Option<u64>) -> Result<()> {
    let editor: Arc<TerminalEditor> = Arc::new(TerminalEditor::from_args(cursor)?);
    let prompter = TerminalPrompter::new();

    let policy = match interval_secs {
        Some(secs) => {
            let mut config = app.policy.config().clone();
            config.check_interval = Duration::from_secs(secs.max(1));
            Arc::new(ResurfacingPolicy::new(Arc::clone(&app.store), config))
        }
        None => Arc::clone(&app.policy),
    };

    let mut events = app.store.subscribe();
    let (handle, mut reminders) =
        Arc::clone(&policy).start(Arc::clone(&editor) as Arc<dyn ActiveEditor>);

    println!(
        "{} every {}s (Ctrl-C to stop)",
        "Watching".cyan().bold(),
        policy.config().check_interval.as_secs()
    );

    loop {
        tokio::select! {
            reminder = reminders.recv() => {
                let Some(reminder) = reminder else { break };
                let action = tokio::task::block_in_place(|| {
                    policy.present_reminder(&reminder, &app.manager, editor.as_ref(), &prompter)
                })?;
                info!(file = %reminder.file_path, ?action, "Reminder handled");
            }
            event = events.recv() => match event {
                Ok(StoreEvent::FileAccessed { file_path }) => print_status(app, &file_path)?,
                Ok(StoreEvent::NotesChanged) => {
                    if let Some(position) = editor.active_position() {
                        print_status(app, &position.file_path)?;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Missed store events");
                }
                Err(RecvError::Closed) => break,
            },
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        }
    }

    handle.stop();
    println!("{}", "Stopped".dimmed());
    Ok(())
}

fn print_status(app: &App, file_path: &str) -> Result<()> {
    if let Some(summary) = status_for_file(&app.store, file_path)? {
        let last_line = summary.tooltip.lines().last().unwrap_or_default().to_string();
        println!("{}  {}", summary.text.cyan(), last_line.dimmed());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{NOW, memory_app};
    use ctxmem_core::EditorPosition;
    use ctxmem_core::types::DAY_MS;
    use std::path::PathBuf;

    fn cursor(file: &str) -> CursorArgs {
        CursorArgs {
            file: Some(PathBuf::from(file)),
            line: 1,
        }
    }

    #[test]
    fn test_focus_records_access_without_notes() {
        let (app, _) = memory_app();
        focus(&app, &cursor("/src/plain.rs")).unwrap();
        assert_eq!(app.store.last_access("/src/plain.rs").unwrap(), Some(NOW));
    }

    #[test]
    fn test_focus_first_visit_with_notes() {
        let (app, clock) = memory_app();
        app.manager
            .create_note(&EditorPosition::new("/src/a.rs", 0), "x".into())
            .unwrap();
        clock.advance(1_000);

        // First recorded visit: no reminder, so no prompt is shown.
        focus(&app, &cursor("/src/a.rs")).unwrap();
        assert_eq!(app.store.last_access("/src/a.rs").unwrap(), Some(NOW + 1_000));
    }

    #[test]
    fn test_stale_with_only_fresh_notes() {
        let (app, clock) = memory_app();
        app.manager
            .create_note(&EditorPosition::new("/src/a.rs", 0), "fresh".into())
            .unwrap();
        clock.advance(DAY_MS);
        assert!(app.policy.stale_notes().unwrap().is_empty());
        stale(&app).unwrap();
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_watch_runs_until_interrupted() {
        let (app, _) = memory_app();
        let no_file = CursorArgs { file: None, line: 1 };
        let result = tokio::time::timeout(
            Duration::from_millis(200),
            watch(&app, &no_file, Some(1)),
        )
        .await;
        // Keeps running until interrupted.
        assert!(result.is_err());
    }
}
