//! Atomic file writes.
//!
//! Both files this tool produces (the generated metadata module and the
//! rewritten layout) are written as a whole buffer in one operation so a
//! crash never leaves a partial file behind:
//!
//! 1. Write content to a temporary file in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename over the target
//!
//! Rename is atomic on POSIX when source and destination share a
//! filesystem, which holds here because the temp file lives next to the
//! target. On crash a stray `.{filename}.tmp` may remain.

use crate::error::{MetaError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to a file, replacing any existing content.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            MetaError::FileWrite(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;
    replace_file(&temp_path, path)?;

    Ok(())
}

/// Temporary file path in the same directory as the target.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| MetaError::FileWrite(format!("invalid file path '{}'", target.display())))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        MetaError::FileWrite(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        MetaError::FileWrite(format!("failed to write temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        MetaError::FileWrite(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}

#[cfg(unix)]
fn replace_file(source: &Path, target: &Path) -> Result<()> {
    // rename() replaces an existing destination atomically on POSIX.
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        MetaError::FileWrite(format!("failed to replace '{}': {}", target.display(), e))
    })
}

#[cfg(windows)]
fn replace_file(source: &Path, target: &Path) -> Result<()> {
    // Windows rename does not replace an existing destination; remove the
    // target first and retry. Not atomic, but the window is a single small
    // file rename.
    match fs::rename(source, target) {
        Ok(()) => Ok(()),
        Err(_) => {
            let _ = fs::remove_file(target);
            fs::rename(source, target).map_err(|e| {
                let _ = fs::remove_file(source);
                MetaError::FileWrite(format!("failed to replace '{}': {}", target.display(), e))
            })
        }
    }
}
