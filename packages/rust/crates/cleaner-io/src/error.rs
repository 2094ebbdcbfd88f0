//! Error types for source file I/O.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or saving a source file.
#[derive(Error, Debug)]
pub enum IoError {
    /// Nothing exists at the path.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// File exceeds the configured size limit.
    #[error("File too large: {size} bytes (limit: {limit})")]
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: u64,
    },

    /// File contains a NUL byte near the start.
    #[error("Binary file detected: {}", .0.display())]
    BinaryFile(PathBuf),

    /// Low-level I/O error.
    #[error("IO error: {0}")]
    System(#[from] std::io::Error),

    /// The temporary file could not replace the target.
    #[error("Failed to replace {}: {source}", path.display())]
    Persist {
        /// Target path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
}
