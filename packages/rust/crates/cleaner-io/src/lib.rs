#![allow(clippy::doc_markdown)]

//! cleaner-io - Source file access for ng-cleaner
//!
//! Loads one text file with a size limit and binary detection, and writes the
//! cleaned text back atomically.
//!
//! ```text
//! cleaner-io/src/
//! ├── lib.rs    # Re-exports (this file)
//! ├── error.rs  # IoError enum
//! ├── read.rs   # Size-limited, binary-aware reading
//! └── write.rs  # Temp file + rename
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use cleaner_io::{read_source, write_source_atomic};
//!
//! let text = read_source("app.component.ts", 1024 * 1024)?;
//! write_source_atomic("app.component.ts", &text)?;
//! ```

mod error;
mod read;
mod write;

pub use error::IoError;
pub use read::{is_binary, read_source};
pub use write::write_source_atomic;
