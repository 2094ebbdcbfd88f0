//! Error types for host operations.

use cleaner_edit::Range;
use thiserror::Error;

/// Failures of the host plumbing itself.
///
/// User-facing conditions such as a missing import block are not errors at
/// this level; commands report them through
/// [`EditorHost::show_error_message`](crate::EditorHost::show_error_message).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// No handler is registered under this id.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A handler is already registered under this id.
    #[error("Command already registered: {0}")]
    DuplicateCommand(String),

    /// An edit addressed text outside the document.
    #[error("Invalid range {range:?}: {reason}")]
    InvalidRange {
        /// The rejected range.
        range: Range,
        /// What was wrong with it.
        reason: String,
    },
}
