//! Application services.

pub mod generation_service;

pub use generation_service::{
    GenerationOutcome, GenerationReport, GenerationRequest, GenerationResult, GenerationService,
};
