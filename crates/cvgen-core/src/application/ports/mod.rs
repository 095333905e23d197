//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `cvgen-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by
//!   infrastructure
//!   - `ProfileStore`: content loading and parsing
//!   - `FileStore`: filesystem operations
//!   - `TemplateRenderer`: template rendering
//!   - `PdfWriter`: HTML → PDF conversion
//!   - `Customizer`: job-description tailoring of raw content
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by
//!   application (defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Customizer, FileStore, PdfWriter, ProfileStore, RewriteFn, TemplateRenderer};
