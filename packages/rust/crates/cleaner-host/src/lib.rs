//! cleaner-host - Editor host abstraction for ng-cleaner
//!
//! Models the pieces of an editor runtime the cleaners need: an active text
//! editor, an error-message surface, and a command table populated on
//! activation and emptied on deactivation.
//!
//! ```text
//! cleaner-host/src/
//! ├── lib.rs        # Re-exports (this file)
//! ├── error.rs      # HostError enum (thiserror)
//! ├── document.rs   # TextEditor trait, Document buffer
//! ├── host.rs       # EditorHost trait, MemoryHost
//! ├── registry.rs   # CommandRegistry
//! └── extension.rs  # Command handlers, activate / dispose
//! ```

mod document;
mod error;
mod extension;
mod host;
mod registry;

pub use document::{Document, TextEditor};
pub use error::HostError;
pub use extension::{
    COMPONENT_CLEANER, CONSTRUCTOR_CLEANER, Extension, IMPORT_CLEANER, Subscriptions,
    component_cleaner, constructor_cleaner, import_cleaner,
};
pub use host::{EditorHost, MemoryHost};
pub use registry::{CommandHandler, CommandRegistry};

// Positions and edits come from the transformation crate.
pub use cleaner_edit::{Position, Range, TextEdit};
