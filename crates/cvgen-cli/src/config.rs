//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. `--config FILE` flag
//! 2. `APP_CONFIG_PATH` environment variable
//! 3. `app_config.toml` in the working directory
//! 4. Built-in defaults (always present; used when no file exists at the
//!    default location)
//!
//! An explicitly named file (flag or env var) that does not exist or does
//! not parse is an error; a missing `app_config.toml` is not.

use std::path::PathBuf;

use anyhow::Context as _;
use cvgen_core::domain::DocumentKind;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Content file settings.
    pub content: ContentConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
    /// Document type enablement.
    pub documents: DocumentsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Content file used when `--content` is not passed.
    pub default_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving generated files (created if absent).
    pub dir: PathBuf,
    pub no_color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory holding the HTML templates.
    pub dir: PathBuf,
    /// Stylesheet applied to PDFs and copied next to emitted HTML.
    pub stylesheet: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentsConfig {
    /// Document types generated when no selection flag is passed.
    pub enabled: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            default_path: PathBuf::from("resume.toml"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("output"),
            no_color: false,
        }
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("templates"),
            stylesheet: PathBuf::from("templates/style.css"),
        }
    }
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            enabled: vec!["resume".into(), "cover_letter".into()],
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            content: ContentConfig::default(),
            output: OutputConfig::default(),
            templates: TemplateConfig::default(),
            documents: DocumentsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let env_path = std::env::var_os("APP_CONFIG_PATH").map(PathBuf::from);
        let explicit = config_file.is_some() || env_path.is_some();

        let path = config_file
            .cloned()
            .or(env_path)
            .unwrap_or_else(|| PathBuf::from("app_config.toml"));

        if !path.exists() {
            if explicit {
                anyhow::bail!("Configuration file not found: {}", path.display());
            }
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Invalid configuration file {}", path.display()))
    }

    /// The document kinds enabled by configuration, in declaration order.
    pub fn enabled_kinds(&self) -> anyhow::Result<Vec<DocumentKind>> {
        self.documents
            .enabled
            .iter()
            .map(|name| {
                name.parse::<DocumentKind>()
                    .map_err(|e| anyhow::anyhow!("documents.enabled: {e}"))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_path() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.content.default_path, PathBuf::from("resume.toml"));
    }

    #[test]
    fn default_enabled_kinds_cover_both_documents() {
        let kinds = AppConfig::default().enabled_kinds().unwrap();
        assert_eq!(kinds, vec![DocumentKind::Resume, DocumentKind::CoverLetter]);
    }

    #[test]
    fn unknown_enabled_kind_is_an_error() {
        let cfg = AppConfig {
            documents: DocumentsConfig {
                enabled: vec!["invoice".into()],
            },
            ..AppConfig::default()
        };
        assert!(cfg.enabled_kinds().is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here/app_config.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app_config.toml");
        std::fs::write(&path, "[output]\ndir = \"artifacts\"\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.output.dir, PathBuf::from("artifacts"));
        // Untouched sections keep their defaults.
        assert_eq!(cfg.templates.dir, PathBuf::from("templates"));
    }
}
