//! The hot-reload marker file.
//!
//! Laravel decides between dev-server asset tags and the built manifest by
//! checking this file: its existence means "a dev server is running" and
//! its contents are the URL the server is reachable at. The file lives at
//! `public/hot` by default and is written exactly once per process, when
//! the dev server starts listening.
//!
//! I/O here is small and synchronous on purpose; it happens once per
//! process lifecycle transition, never on a hot path.

use crate::error::{BridgeError, Result};
use crate::server::ServerAddr;
use std::path::{Path, PathBuf};

/// Handle to the marker file at a fixed path.
#[derive(Debug, Clone)]
pub struct HotFile {
    path: PathBuf,
}

impl Default for HotFile {
    fn default() -> Self {
        Self::new("public/hot")
    }
}

impl HotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the marker with the dev server's URL as its single line of
    /// content (no trailing newline).
    ///
    /// # Errors
    ///
    /// Write failures propagate; a writable working directory is a
    /// precondition for the dev-server feature.
    pub fn write(&self, addr: &ServerAddr) -> Result<()> {
        std::fs::write(&self.path, addr.to_string()).map_err(|source| {
            BridgeError::HotFileWrite {
                path: self.path.clone(),
                source,
            }
        })
    }

    /// Remove the marker if it exists.
    ///
    /// Idempotent: an absent file is a successful no-op and the file is
    /// never created. An existing file that cannot be deleted is an error.
    pub fn remove(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).map_err(|source| BridgeError::HotFileRemove {
                path: self.path.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

/// Removes the marker when dropped.
///
/// Returned by the dev-server hook so the marker disappears on normal exit
/// as well as on termination signals. Deletion errors cannot propagate out
/// of `Drop`; the same idempotent remove runs on the signal path.
#[derive(Debug)]
pub struct HotFileGuard {
    hot: HotFile,
}

impl HotFileGuard {
    pub(crate) fn new(hot: HotFile) -> Self {
        Self { hot }
    }

    /// Path of the guarded marker.
    pub fn path(&self) -> &Path {
        self.hot.path()
    }
}

impl Drop for HotFileGuard {
    fn drop(&mut self) {
        let _ = self.hot.remove();
    }
}
