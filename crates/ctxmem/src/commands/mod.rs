//! Command implementations for the ctxmem CLI.
//!
//! Each submodule implements the logic for a command group.

pub mod notes;
pub mod render;
pub mod resurface;

use std::sync::Arc;

use anyhow::Result;
use ctxmem_core::host::ActiveEditor;
use ctxmem_core::{NoteManager, NoteStore, ResurfaceConfig, ResurfacingPolicy};

/// Services shared by every command of one invocation.
pub struct App {
    pub store: Arc<NoteStore>,
    pub manager: NoteManager,
    pub policy: Arc<ResurfacingPolicy>,
}

impl App {
    pub fn new(store: Arc<NoteStore>, resurface: ResurfaceConfig) -> Self {
        Self {
            manager: NoteManager::new(Arc::clone(&store)),
            policy: Arc::new(ResurfacingPolicy::new(Arc::clone(&store), resurface)),
            store,
        }
    }
}

/// Record that the editor's focused file was just in use.
pub fn touch(app: &App, editor: &dyn ActiveEditor) -> Result<()> {
    if let Some(position) = editor.active_position() {
        app.store.record_file_access(&position.file_path)?;
    }
    Ok(())
}
