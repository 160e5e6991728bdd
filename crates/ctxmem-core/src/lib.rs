//! ctxmem-core - Core library for Code Context Memory
//!
//! Notes attached to lines of source files, resurfaced when you come back:
//!
//! - **db**: Key-value persistence (SQLite, in-memory)
//! - **note**: Note store and user-facing note commands
//! - **resurface**: "Welcome back" reminders and the stale-notes report
//! - **view**: Gutter markers, hover text, status summary, tree
//! - **host**: Seams to the editor (focused file, prompts)

pub mod clock;
pub mod db;
pub mod error;
pub mod host;
pub mod note;
pub mod resurface;
pub mod types;
pub mod view;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use note::{NoteManager, NoteStore, StoreEvent};
pub use resurface::{ResurfaceConfig, ResurfacingPolicy};
pub use types::{EditorPosition, Note, NotePatch};
