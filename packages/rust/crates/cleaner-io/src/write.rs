//! Atomic write-back.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::IoError;

/// Replace the contents of `path` with `text`.
///
/// The text is written to a temporary file next to `path` and renamed over
/// it, so readers see either the old or the new file. An existing target keeps
/// its permissions.
///
/// # Errors
/// [`IoError::System`] when the temporary file cannot be written,
/// [`IoError::Persist`] when it cannot replace the target.
pub fn write_source_atomic<P: AsRef<Path>>(path: P, text: &str) -> Result<(), IoError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(text.as_bytes())?;
    if let Ok(metadata) = fs::metadata(path) {
        tmp.as_file().set_permissions(metadata.permissions())?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| IoError::Persist {
        path: path.to_path_buf(),
        source: err.error,
    })?;

    debug!(path = %path.display(), bytes = text.len(), "wrote source");
    Ok(())
}
