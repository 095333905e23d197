//! Unified error handling for Cvgen Core.
//!
//! This module provides a unified error type that wraps application errors,
//! with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;

/// Root error type for Cvgen Core operations.
#[derive(Debug, Error, Clone)]
pub enum CvgenError {
    /// Errors from the application layer (orchestration failures).
    /// Transparent so per-generator error labels stay readable.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors. Fatal for the whole run — reported
    /// before any generation is attempted.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CvgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in cvgen".into(),
                "Please report this issue at: https://github.com/cosecruz/cvgen/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Fatal configuration problems (bad paths, missing content file).
    Configuration,
    /// A referenced resource does not exist.
    NotFound,
    /// A per-generator failure (rendering, PDF backend, customization).
    Generation,
    /// Unexpected internal failure.
    Internal,
}

/// Convenient result type alias.
pub type CvgenResult<T> = Result<T, CvgenError>;
