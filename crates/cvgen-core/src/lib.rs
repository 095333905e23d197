//! Cvgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the cvgen
//! resume/cover-letter generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           cvgen-cli (CLI)               │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (GenerationService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (ProfileStore, FileStore, Renderer,    │
//! │        PdfWriter, Customizer)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     cvgen-adapters (Infrastructure)     │
//! │  (TomlProfileStore, TeraRenderer,       │
//! │   PrintPdfWriter, LlmCustomizer, ...)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ProfileDocument, Document builders,   │
//! │   text splitting, filename stems)       │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cvgen_core::{
//!     application::{GenerationRequest, GenerationService},
//!     domain::DocumentKind,
//! };
//!
//! // 1. Describe the run
//! let request = GenerationRequest::new("resume.toml", "output")
//!     .with_kinds([DocumentKind::Resume, DocumentKind::CoverLetter])
//!     .with_html(true);
//!
//! // 2. Use application service (with injected adapters)
//! let service = GenerationService::new(profiles, renderer, files, pdf, customizer);
//! let report = service.run(&request).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationReport, GenerationRequest, GenerationResult, GenerationService,
        ports::{Customizer, FileStore, PdfWriter, ProfileStore, TemplateRenderer},
    };
    pub use crate::domain::{
        CoverLetterDocument, Document, DocumentKind, ProfileDocument, RenderContext,
        ResumeDocument,
    };
    pub use crate::error::{CvgenError, CvgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
