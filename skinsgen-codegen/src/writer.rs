//! Atomic artifact output.
//!
//! The artifact is written to a temporary file next to the destination,
//! synced, then renamed over it. A failure at any step leaves the previous
//! artifact in place.

use crate::error::CodegenError;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `contents` to `path` atomically.
///
/// # Errors
/// Returns `CodegenError::Io` if the temporary file cannot be created,
/// written, synced or renamed.
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), CodegenError> {
    let io_err = |source| CodegenError::io(path, source);

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(contents.as_bytes()).map_err(io_err)?;
    tmp.flush().map_err(io_err)?;
    if let Some(perms) = artifact_permissions(path)? {
        tmp.as_file().set_permissions(perms).map_err(io_err)?;
    }
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    tracing::info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Returns true if `path` already holds exactly `contents`.
///
/// A missing file is reported as not current.
///
/// # Errors
/// Returns `CodegenError::Io` for any read failure other than not found.
pub fn artifact_is_current(path: &Path, contents: &str) -> Result<bool, CodegenError> {
    match std::fs::read(path) {
        Ok(existing) => Ok(existing == contents.as_bytes()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(CodegenError::io(path, e)),
    }
}

/// Keeps the destination's permissions, or uses 0644 for a new file.
fn artifact_permissions(path: &Path) -> Result<Option<std::fs::Permissions>, CodegenError> {
    match std::fs::metadata(path) {
        Ok(meta) => Ok(Some(meta.permissions())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(default_permissions()),
        Err(e) => Err(CodegenError::io(path, e)),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<std::fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<std::fs::Permissions> {
    None
}
