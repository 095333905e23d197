//! TOML content loading adapter.

use std::path::{Path, PathBuf};

use cvgen_core::{
    application::{ApplicationError, ports::{ProfileStore, RewriteFn}},
    domain::ProfileDocument,
    error::CvgenResult,
};
use tracing::instrument;

use crate::paths::resolve_within;

/// Production content loader: reads a TOML file from inside the project
/// root, applies the optional raw-text rewriter, then parses.
#[derive(Debug, Clone)]
pub struct TomlProfileStore {
    root: PathBuf,
}

impl TomlProfileStore {
    /// Create a loader confined to the given project root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ProfileStore for TomlProfileStore {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn load(&self, path: &Path, rewrite: Option<RewriteFn<'_>>) -> CvgenResult<ProfileDocument> {
        let resolved = resolve_within(&self.root, path)?;

        let mut content = std::fs::read_to_string(&resolved).map_err(|e| {
            ApplicationError::FilesystemError {
                path: resolved.clone(),
                reason: format!("Failed to read content file: {e}"),
            }
        })?;

        // The rewriter (customization) sees the raw text, never the parse.
        if let Some(rewrite) = rewrite {
            content = rewrite(&content)?;
        }

        let value: toml::Value =
            toml::from_str(&content).map_err(|e| ApplicationError::InvalidContent {
                path: resolved.clone(),
                reason: e.to_string(),
            })?;

        let value = serde_json::to_value(value).map_err(|e| ApplicationError::InvalidContent {
            path: resolved,
            reason: e.to_string(),
        })?;

        Ok(ProfileDocument::from_value(value))
    }
}
