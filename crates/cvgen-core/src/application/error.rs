//! Application layer errors.
//!
//! These errors represent failures in orchestration and at the ports, not
//! in domain logic — the domain's text/filename/context functions are total
//! and cannot fail.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Content/configuration file does not exist.
    #[error("Content file not found: {path}")]
    ContentNotFound { path: PathBuf },

    /// A path resolved outside the project root. Reads are confined to the
    /// project directory; escaping it is a configuration error, never a
    /// soft failure.
    #[error("Path is outside the project directory: {path}")]
    PathOutsideRoot { path: PathBuf },

    /// The content file could not be parsed into a profile document.
    #[error("Invalid content file {path}: {reason}")]
    InvalidContent { path: PathBuf, reason: String },

    /// Template rendering failed (missing template, bad expression, ...).
    #[error("Template rendering failed for '{template}': {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The PDF backend failed to produce output.
    #[error("PDF generation failed for {path}: {reason}")]
    PdfFailed { path: PathBuf, reason: String },

    /// The external customization call failed. Not retried — surfaced as a
    /// per-generator error.
    #[error("Customization failed: {reason}")]
    CustomizationFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ContentNotFound { path } => vec![
                format!("No content file at: {}", path.display()),
                "Pass the content file with --content".into(),
            ],
            Self::PathOutsideRoot { path } => vec![
                format!("Refused to read: {}", path.display()),
                "Content and job-description files must live inside the project directory".into(),
            ],
            Self::InvalidContent { .. } => vec![
                "Check the content file is valid TOML".into(),
                "See resume.toml for the expected sections".into(),
            ],
            Self::RenderingFailed { template, .. } => vec![
                format!("Check that '{}' exists in the template directory", template),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::CustomizationFailed { .. } => vec![
                "Check ANTHROPIC_API_KEY and network connectivity".into(),
                "Omit --job to generate without customization".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ContentNotFound { .. } => ErrorCategory::NotFound,
            Self::PathOutsideRoot { .. } => ErrorCategory::Configuration,
            Self::InvalidContent { .. } => ErrorCategory::Configuration,
            Self::RenderingFailed { .. }
            | Self::PdfFailed { .. }
            | Self::CustomizationFailed { .. } => ErrorCategory::Generation,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
