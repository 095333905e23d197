//! Infrastructure adapters for cvgen.
//!
//! This crate implements the ports defined in `cvgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod customizer;
pub mod filesystem;
pub mod paths;
pub mod pdf;
pub mod profile_store;
pub mod renderer;

// Re-export commonly used adapters
pub use customizer::LlmCustomizer;
pub use filesystem::LocalFileStore;
pub use pdf::PrintPdfWriter;
pub use profile_store::TomlProfileStore;
pub use renderer::TeraRenderer;
