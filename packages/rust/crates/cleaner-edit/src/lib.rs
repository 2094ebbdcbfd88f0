#![allow(clippy::doc_markdown)]

//! cleaner-edit - Line-oriented rewrites for TypeScript sources
//!
//! Two stateless transformations over the full text of one document. Each
//! returns a single [`TextEdit`] for the host to apply, or an [`EditError`]
//! explaining why nothing should change.
//!
//! # Features
//!
//! - **Import Reorderer**: normalizes, aligns, sorts and groups the leading
//!   import block
//! - **Constructor Cleaner**: regenerates the first constructor, promoting
//!   access-modified parameters into `this.x = x;` assignments
//! - **Diff Preview**: unified diffs for showing an edit before applying it
//!
//! # Architecture
//!
//! ```text
//! cleaner-edit/src/
//! ├── lib.rs                 # Re-exports (this file)
//! ├── error.rs               # EditError enum (thiserror)
//! ├── types.rs               # Position, Range, TextEdit, styles
//! ├── diff.rs                # Unified diff rendering
//! ├── imports.rs             # Import region detection and rewrite
//! ├── import_helper.rs       # clean / align / sort / classify stages
//! ├── constructor.rs         # Constructor block scanning
//! └── constructor_helper.rs  # Parameter parsing and regeneration
//! ```
//!
//! # Example
//!
//! ```rust
//! use cleaner_edit::{reorder_imports, ImportStyle};
//!
//! let text = "import { A } from './b';\nimport { C } from './a';\nrun();";
//! let edit = reorder_imports(text, &ImportStyle::default()).unwrap();
//! assert_eq!(
//!     edit.apply_to(text),
//!     "import { C } from './a';\nimport { A } from './b';\nrun();"
//! );
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod constructor;
pub mod constructor_helper;
pub mod diff;
mod error;
pub mod import_helper;
pub mod imports;
mod types;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use constructor::{ConstructorBlock, clean_constructor, locate_constructor};
pub use diff::unified_diff;
pub use error::EditError;
pub use imports::{is_import_line, reorder_imports};
pub use types::{ConstructorStyle, ImportStyle, Position, QuoteStyle, Range, TextEdit};
