//! Presentation adapters.
//!
//! Read-only views over the note store, shaped for editor UI primitives:
//! gutter markers, hover text, a status indicator and a grouped tree. Hosts
//! re-render them whenever the store emits a `StoreEvent`.

mod decorations;
mod hover;
mod status;
mod tree;

pub use decorations::*;
pub use hover::*;
pub use status::*;
pub use tree::*;
