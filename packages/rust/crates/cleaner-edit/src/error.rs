//! Error types for the cleaning transformations.
//!
//! Library crates use `thiserror` for explicit error enums. The display strings
//! are the messages a host shows to the user.

use thiserror::Error;

/// Reasons a cleaner declines to produce an edit.
///
/// Every variant is terminal for the invocation: no edit is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// No line in the document matched the import heuristic.
    #[error("No import found, can't reorder")]
    NoImportFound,

    /// No line in the document contains the constructor marker.
    #[error("No constructor found, can't clean")]
    NoConstructorFound,

    /// A constructor marker was found but its braces never balanced.
    #[error("Constructor starting on line {line} is never closed, can't clean")]
    ConstructorNotClosed {
        /// 1-indexed line of the constructor marker.
        line: usize,
    },
}
