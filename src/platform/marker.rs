//! Persisted platform marker file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Handle to the marker file recording the platform that last built the
/// environment.
///
/// Single-process, single-run lifecycle; no locking. Concurrent invocations
/// racing on this file are out of scope.
#[derive(Debug, Clone)]
pub struct PlatformMarker {
    path: PathBuf,
}

impl PlatformMarker {
    /// Create a handle for the marker at `path`. Does not touch the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the marker file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored platform identifier, or `None` if the marker has
    /// never been written.
    pub fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(Some(content.trim_end().to_string()))
    }

    /// Write the platform identifier, replacing any previous content.
    pub fn write(&self, platform: &str) -> Result<()> {
        fs::write(&self.path, platform)?;
        Ok(())
    }
}
