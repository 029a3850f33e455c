//! Process-exclusive advisory file locks.
//!
//! Cross-platform (fs2) advisory locks keyed by path. The registry holds at
//! most one lock per path within this process; exclusion against other
//! processes is delegated to the OS advisory-lock mechanism, so only
//! cooperating processes taking the same lock are kept out.
//!
//! The registry is not internally synchronized. Callers that share one
//! across threads must serialize access themselves.

use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use log::debug;

use crate::{Error, Result};

#[derive(Debug, Default)]
pub struct LockRegistry {
    held: HashMap<PathBuf, File>,
}

impl LockRegistry {
    pub fn new() -> Self {
        Self {
            held: HashMap::new(),
        }
    }

    /// Take the exclusive advisory lock on `path`, creating the file if
    /// absent. Returns `Ok(false)` when the OS denies the lock (held by
    /// another process) or the file cannot be opened.
    ///
    /// Locking a path this registry already holds is a caller bug and
    /// fails with [`Error::AlreadyLocked`].
    pub fn try_lock(&mut self, path: impl AsRef<Path>) -> Result<bool> {
        let path = path.as_ref();
        if self.held.contains_key(path) {
            return Err(Error::AlreadyLocked(path.to_path_buf()));
        }
        let file = match OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path)
        {
            Ok(file) => file,
            Err(err) => {
                debug!("failed to open lock file {}: {}", path.display(), err);
                return Ok(false);
            }
        };
        if file.try_lock_exclusive().is_err() {
            return Ok(false);
        }
        self.held.insert(path.to_path_buf(), file);
        Ok(true)
    }

    /// Release the lock held on `path`.
    ///
    /// The backing file stays in place: unlinking here races a second
    /// process recreating the path and locking a different inode under the
    /// same name.
    pub fn unlock(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match self.held.remove(path) {
            Some(file) => {
                // Unlock errors are ignored; closing the handle releases
                // the lock regardless.
                let _ = file.unlock();
                Ok(())
            }
            None => Err(Error::NotLocked(path.to_path_buf())),
        }
    }

    pub fn is_locked(&self, path: impl AsRef<Path>) -> bool {
        self.held.contains_key(path.as_ref())
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}
