//! Disposable working directories for extractor runs.

use crate::{Error, Result};
use std::path::Path;
use tempfile::TempDir;

const PREFIX: &str = "vidinfo-";

/// A temporary directory owned by a single tool invocation.
///
/// The directory serves as both the working directory and the cache
/// directory of the tool, and is removed when the workspace is dropped, so
/// nothing outlives the invocation whichever way it ends.
///
/// # Example
///
/// ```no_run
/// use vidinfo_av::Workspace;
///
/// let workspace = Workspace::new()?;
/// // Run the tool with `workspace.path()` as its cache directory.
/// workspace.cleanup()?;
/// # Ok::<(), vidinfo_av::Error>(())
/// ```
#[derive(Debug)]
pub struct Workspace {
    temp_dir: TempDir,
}

impl Workspace {
    /// Create a workspace in the system temp directory.
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::Builder::new()
            .prefix(PREFIX)
            .tempdir()
            .map_err(|e| Error::Workspace(format!("failed to create temp dir: {e}")))?;
        Ok(Self { temp_dir })
    }

    /// Create a workspace inside `parent`.
    pub fn in_dir(parent: &Path) -> Result<Self> {
        let temp_dir = tempfile::Builder::new()
            .prefix(PREFIX)
            .tempdir_in(parent)
            .map_err(|e| {
                Error::Workspace(format!(
                    "failed to create temp dir in {}: {e}",
                    parent.display()
                ))
            })?;
        Ok(Self { temp_dir })
    }

    /// Path of the workspace directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Remove the directory now, reporting failures instead of ignoring them
    /// as `Drop` does.
    pub fn cleanup(self) -> Result<()> {
        self.temp_dir
            .close()
            .map_err(|e| Error::Workspace(format!("failed to remove temp dir: {e}")))
    }
}
