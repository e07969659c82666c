//! Whole-file text I/O with atomic overwrite

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Write content atomically to a file with locking.
///
/// Writes to a sibling temp file, syncs it, then renames it over the
/// target so readers never observe a truncated document. Permissions of
/// an existing target are carried over to the replacement. A symlinked
/// target is written through: the file it points to is replaced and the
/// link is left in place.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = resolve_target(&path.to_native());

    if let Some(parent) = native_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }

    // Same directory keeps the rename on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    if let Err(e) = replace_with_temp(&native_path, &temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    tracing::debug!(path = %path, bytes = content.len(), "wrote file atomically");
    Ok(())
}

/// Follows a symlink to the file it names. Anything else is returned as is.
fn resolve_target(native_path: &Path) -> PathBuf {
    let is_link = fs::symlink_metadata(native_path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if !is_link {
        return native_path.to_path_buf();
    }

    if let Ok(real) = fs::canonicalize(native_path) {
        tracing::debug!(link = %native_path.display(), target = %real.display(), "writing through symlink");
        return real;
    }
    // Dangling link: create the file it points at
    match fs::read_link(native_path) {
        Ok(link) if link.is_absolute() => link,
        Ok(link) => native_path
            .parent()
            .map(|parent| parent.join(&link))
            .unwrap_or(link),
        Err(_) => native_path.to_path_buf(),
    }
}

fn replace_with_temp(native_path: &Path, temp_path: &Path, content: &[u8]) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    let lock_failed = |_: std::io::Error| Error::LockFailed {
        path: native_path.to_path_buf(),
    };
    temp_file.lock_exclusive().map_err(lock_failed)?;
    temp_file
        .write_all(content)
        .and_then(|()| temp_file.sync_all())
        .map_err(|e| Error::io(temp_path, e))?;
    temp_file.unlock().map_err(lock_failed)?;
    drop(temp_file);

    if let Ok(metadata) = fs::metadata(native_path) {
        fs::set_permissions(temp_path, metadata.permissions())
            .map_err(|e| Error::io(temp_path, e))?;
    }

    fs::rename(temp_path, native_path).map_err(|e| Error::io(native_path, e))
}

/// Read the entire file as UTF-8 text.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    let content = fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))?;
    tracing::debug!(path = %path, bytes = content.len(), "read file");
    Ok(content)
}

/// Overwrite the file with `content`, atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
