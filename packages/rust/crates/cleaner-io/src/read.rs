//! Guarded source loading.

use std::fs;
use std::path::Path;

use memchr::memchr;
use tracing::debug;

use crate::error::IoError;

/// How many leading bytes are scanned for NUL.
const BINARY_PROBE_LEN: usize = 8192;

/// Whether the first 8 KiB of `bytes` contain a NUL byte.
#[must_use]
pub fn is_binary(bytes: &[u8]) -> bool {
    let probe = &bytes[..bytes.len().min(BINARY_PROBE_LEN)];
    memchr(0, probe).is_some()
}

/// Read a text source, refusing oversized and binary files.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
///
/// # Errors
/// [`IoError::NotFound`], [`IoError::TooLarge`], [`IoError::BinaryFile`], or
/// [`IoError::System`] for other read failures.
pub fn read_source<P: AsRef<Path>>(path: P, max_bytes: u64) -> Result<String, IoError> {
    let path = path.as_ref();

    let metadata = fs::metadata(path).map_err(|_| IoError::NotFound(path.to_path_buf()))?;
    if metadata.len() > max_bytes {
        return Err(IoError::TooLarge {
            size: metadata.len(),
            limit: max_bytes,
        });
    }

    let bytes = fs::read(path)?;
    if is_binary(&bytes) {
        return Err(IoError::BinaryFile(path.to_path_buf()));
    }
    debug!(path = %path.display(), bytes = bytes.len(), "loaded source");

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}
