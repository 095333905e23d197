//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `cvgen-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{ProfileDocument, RenderContext};
use crate::error::CvgenResult;

/// Raw-text rewriter applied to content before structural parsing.
///
/// The orchestrator passes the customization step through this shape so the
/// loader never learns about job descriptions or network calls.
pub type RewriteFn<'a> = &'a dyn Fn(&str) -> CvgenResult<String>;

/// Port for loading and parsing content files.
///
/// Implemented by:
/// - `cvgen_adapters::profile_store::TomlProfileStore` (production)
///
/// ## Design Notes
///
/// - Must fail with a not-found error for nonexistent paths
/// - Must refuse paths resolving outside the project root
/// - When a rewriter is supplied, it runs on the raw text *before* parsing
pub trait ProfileStore: Send + Sync {
    /// Load a content file into a profile document, optionally rewriting
    /// the raw text first.
    fn load(&self, path: &Path, rewrite: Option<RewriteFn<'_>>) -> CvgenResult<ProfileDocument>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `cvgen_adapters::filesystem::LocalFileStore` (production)
pub trait FileStore: Send + Sync {
    /// Create a directory if absent and return its path. Idempotent.
    fn ensure_directory(&self, path: &Path) -> CvgenResult<PathBuf>;

    /// Copy the stylesheet into `dest_dir` when `enabled`; no-op returning
    /// `None` otherwise.
    fn copy_stylesheet(
        &self,
        source: &Path,
        dest_dir: &Path,
        enabled: bool,
    ) -> CvgenResult<Option<PathBuf>>;

    /// Write rendered HTML to a file.
    fn write_html(&self, html: &str, path: &Path) -> CvgenResult<()>;

    /// Read a text file, refusing paths that resolve outside the project
    /// root (fail, never silently skip).
    fn read_text(&self, path: &Path) -> CvgenResult<String>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `cvgen_adapters::renderer::TeraRenderer` (production)
pub trait TemplateRenderer: Send + Sync {
    /// Render a template by name against the given context.
    fn render(&self, template_name: &str, context: &RenderContext) -> CvgenResult<String>;
}

/// Port for PDF output.
///
/// Implemented by:
/// - `cvgen_adapters::pdf::PrintPdfWriter` (production)
pub trait PdfWriter: Send + Sync {
    /// Write one HTML document as a single PDF.
    fn write_single(&self, html: &str, path: &Path) -> CvgenResult<()>;

    /// Write several HTML documents as one PDF; the page sequence preserves
    /// input order.
    fn write_merged(&self, htmls: &[String], path: &Path) -> CvgenResult<()>;
}

/// Port for job-description customization of raw content text.
///
/// Implemented by:
/// - `cvgen_adapters::customizer::LlmCustomizer` (production; passthrough
///   when no credential is configured)
pub trait Customizer: Send + Sync {
    /// Rewrite `document_text` to target `job_description`, preserving
    /// structure, lengths, and verifiable facts. Failures propagate to the
    /// caller — there is no retry at this layer.
    fn customize(&self, document_text: &str, job_description: &str) -> CvgenResult<String>;
}
