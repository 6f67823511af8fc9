//! Atomic file placement.
//!
//! Config files, unit files, and proxy site definitions are host-global
//! singletons; a half-written one is worse than a missing one. Writes here
//! go to a temp file in the target directory and then rename into place.

use std::path::Path;

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::error::Result;

/// Atomically replace `target` with `content`.
///
/// The temp file is created in the target's directory so the final rename
/// stays on one filesystem.
pub fn write_atomic(target: &Path, content: &str) -> Result<()> {
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    std::io::Write::write_all(&mut tmp, content.as_bytes())?;
    tmp.persist(target).map_err(|e| e.error)?;
    Ok(())
}

/// Hex SHA-256 digest of a string.
pub fn content_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Atomically write `content` to `target` unless the file already holds
/// exactly that content. Returns whether a write happened.
pub fn write_if_changed(target: &Path, content: &str) -> Result<bool> {
    if let Ok(existing) = std::fs::read_to_string(target) {
        if content_digest(&existing) == content_digest(content) {
            tracing::debug!(path = %target.display(), "content unchanged, skipping write");
            return Ok(false);
        }
    }
    write_atomic(target, content)?;
    Ok(true)
}
