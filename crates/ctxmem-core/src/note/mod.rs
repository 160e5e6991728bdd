//! Line notes: storage and user commands.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        NoteManager                              │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────────┐  │
//! │  │  add note   │  │ view / open │  │  delete (disambiguate)  │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────────┘  │
//! │                          │                                      │
//! │                       NoteStore  ──► StoreEvent subscribers     │
//! │                          │                                      │
//! │                    KeyValueStore                                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use ctxmem_core::note::{NoteManager, NoteStore};
//!
//! let store = Arc::new(NoteStore::new(kv, Arc::new(SystemClock)));
//! let manager = NoteManager::new(store.clone());
//!
//! // Attach a note to the cursor line
//! manager.add_note_at_cursor(&editor, &prompter)?;
//!
//! // Query what is on a line
//! let notes = store.notes_for_line("/src/main.rs", 41)?;
//! ```

mod manager;
mod store;

pub use manager::*;
pub use store::*;
