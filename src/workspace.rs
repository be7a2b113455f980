//! Workspace-anchored file helpers
//!
//! Paths resolve against the process working directory; writes create or
//! truncate their target.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ToolkitError;

/// The workspace root: the process working directory.
pub fn root() -> Result<PathBuf, ToolkitError> {
    Ok(env::current_dir()?)
}

/// Resolve `relative` against the workspace root.
///
/// The argument must be a relative path. Joining an absolute path would
/// silently discard the root, so absolute paths are rejected before any
/// filesystem work happens.
pub fn from_root(relative: impl AsRef<Path>) -> Result<PathBuf, ToolkitError> {
    let relative = relative.as_ref();
    if relative.is_absolute() {
        return Err(ToolkitError::InvalidInput(format!(
            "path must be relative to the workspace root: {}",
            relative.display()
        )));
    }
    Ok(root()?.join(relative))
}

/// Write `text` to the file at `path`, creating it if absent and truncating
/// it otherwise.
pub fn write_text(path: &Path, text: &str) -> Result<(), ToolkitError> {
    fs::write(path, text)?;
    debug!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
