use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;

use crate::Result;

/// Check whether `path` exists. The empty path is defined non-existent;
/// any stat failure other than "not found" propagates.
pub fn exists(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Ok(false);
    }
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err.into()),
    }
}

/// Create a single directory level. Callers that care why creation failed
/// (already exists vs. anything else) pre-check with [`exists`].
pub fn mkdir(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    let created = fs::create_dir(path).is_ok();
    if created {
        debug!("created dir {}", path.display());
    } else {
        debug!("failed to create dir {}", path.display());
    }
    created
}

/// Create `path` and every missing prefix directory, walking the
/// `/`-separated segments left to right. Returns `Ok(false)` at the first
/// prefix that neither exists nor can be created. Idempotent over an
/// existing tree.
pub fn mkpath(path: &str) -> Result<bool> {
    let mut prefix_end = 0;
    for segment in path.split('/') {
        prefix_end += segment.len();
        if !segment.is_empty() {
            let prefix = &path[..prefix_end];
            if !exists(prefix)? && !mkdir(prefix) {
                return Ok(false);
            }
        }
        prefix_end += 1; // separator
    }
    Ok(true)
}

/// Remove `dir` and everything under it, files before the directories that
/// contain them. Symlinked entries are removed, not followed. The first
/// removal failure propagates.
pub fn deltree(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            deltree(&path)?;
        } else {
            debug!("deleting {}", path.display());
            fs::remove_file(&path)?;
        }
    }
    debug!("deleting {}", dir.display());
    fs::remove_dir(dir)?;
    Ok(())
}
