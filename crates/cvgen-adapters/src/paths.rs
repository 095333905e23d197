//! Project-root path containment.
//!
//! Content and job-description files are only ever read from inside the
//! project directory. Escaping it is a configuration error, not a soft
//! failure — symlinks are resolved before the check so a link pointing
//! outside the root is refused too.

use std::path::{Path, PathBuf};

use cvgen_core::application::ApplicationError;
use cvgen_core::error::CvgenResult;

/// Resolve `path` (absolute, or relative to `root`) and verify it stays
/// inside `root`.
///
/// Errors:
/// - `ContentNotFound` when the file does not exist
/// - `PathOutsideRoot` when the resolved path escapes the root
pub fn resolve_within(root: &Path, path: &Path) -> CvgenResult<PathBuf> {
    let root = root
        .canonicalize()
        .map_err(|e| ApplicationError::FilesystemError {
            path: root.to_path_buf(),
            reason: format!("Failed to resolve project root: {e}"),
        })?;

    let candidate = if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    };

    let resolved = candidate
        .canonicalize()
        .map_err(|_| ApplicationError::ContentNotFound {
            path: candidate.clone(),
        })?;

    if !resolved.starts_with(&root) {
        return Err(ApplicationError::PathOutsideRoot { path: resolved }.into());
    }

    Ok(resolved)
}
