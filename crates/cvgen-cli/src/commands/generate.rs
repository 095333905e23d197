//! Implementation of the `cvgen generate` command.
//!
//! Responsibility: translate CLI arguments into a `GenerationRequest`, wire
//! the adapters into the core generation service, and display results. No
//! business logic lives here.

use tracing::{debug, info, instrument};

use cvgen_adapters::{
    LlmCustomizer, LocalFileStore, PrintPdfWriter, TeraRenderer, TomlProfileStore,
};
use cvgen_core::{
    application::{GenerationRequest, GenerationResult, GenerationService},
    domain::DocumentKind,
};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `cvgen generate` command.
///
/// Dispatch sequence:
/// 1. Resolve which document kinds to generate
/// 2. Build the generation request from args + config
/// 3. Wire production adapters into the core service
/// 4. Show the plan, run the service
/// 5. Print per-document confirmations and the error summary
#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Resolve document kinds: explicit flags, else everything enabled.
    let kinds = resolve_kinds(&args, &config)?;

    // 2. Build the request.
    let content_path = args
        .content
        .clone()
        .unwrap_or_else(|| config.content.default_path.clone());
    let request = GenerationRequest::new(&content_path, &config.output.dir)
        .with_kinds(kinds.clone())
        .with_html(args.html)
        .with_stylesheet(&config.templates.stylesheet)
        .with_job(args.job.clone());

    debug!(
        kinds = kinds.len(),
        html = args.html,
        job = args.job.is_some(),
        "Request resolved"
    );

    // 3. Wire adapters. Reads are confined to the working directory.
    let root = std::env::current_dir()?;
    let renderer = Box::new(TeraRenderer::from_dir(&config.templates.dir).map_err(CliError::Core)?);
    let pdf = Box::new(match std::fs::read_to_string(&config.templates.stylesheet) {
        Ok(css) => PrintPdfWriter::with_stylesheet(css),
        Err(_) => PrintPdfWriter::new(),
    });
    let customizer = LlmCustomizer::from_env();
    if args.job.is_some() && customizer.is_passthrough() {
        output.info("ANTHROPIC_API_KEY is not set — content passes through without rewriting")?;
    }

    let service = GenerationService::new(
        Box::new(TomlProfileStore::new(&root)),
        renderer,
        Box::new(LocalFileStore::new(&root)),
        pdf,
        Box::new(customizer),
    );

    // 4. Show the plan and run.
    show_plan(&kinds, &request, &output)?;
    info!(content = %content_path.display(), "Generation started");

    let report = service.run(&request).map_err(CliError::Core)?;

    // 5. Per-document confirmations, then the summary.
    for result in report.successes() {
        print_confirmation(result, &output)?;
    }

    let errors = report.errors();
    if errors.is_empty() {
        output.print("")?;
        output.success("Generation completed successfully!")?;
        Ok(())
    } else {
        output.print("")?;
        output.print("Errors occurred during generation:")?;
        for error in &errors {
            output.error(error)?;
        }
        Err(CliError::GenerationFailed {
            failed: errors.len(),
        })
    }
}

/// Map selection flags onto document kinds; no flag selects every enabled
/// kind from configuration.
fn resolve_kinds(args: &GenerateArgs, config: &AppConfig) -> CliResult<Vec<DocumentKind>> {
    let mut kinds = Vec::new();
    if args.resume {
        kinds.push(DocumentKind::Resume);
    }
    if args.cover_letter {
        kinds.push(DocumentKind::CoverLetter);
    }

    if kinds.is_empty() {
        kinds = config.enabled_kinds().map_err(|e| CliError::ConfigError {
            message: e.to_string(),
            source: None,
        })?;
    }
    Ok(kinds)
}

fn show_plan(
    kinds: &[DocumentKind],
    request: &GenerationRequest,
    output: &OutputManager,
) -> CliResult<()> {
    output.header("Generating documents with the following options:")?;
    for kind in kinds {
        output.print(&format!("- {} document", kind.display_name()))?;
    }
    output.print(&format!(
        "Using content from: {}",
        request.content_path.display()
    ))?;
    if let Some(job) = &request.job_path {
        output.print(&format!("Customizing for job: {}", job.display()))?;
    }
    output.print("---")?;
    Ok(())
}

/// Print the confirmation block for one generated document.
fn print_confirmation(result: &GenerationResult, output: &OutputManager) -> CliResult<()> {
    output.success(&format!(
        "{} files generated for {}:",
        result.kind.display_name(),
        result.person_name
    ))?;

    if let Some(css) = &result.stylesheet_path {
        output.print(&format!("   - CSS: {}", css.display()))?;
    }
    for (i, path) in result.html_paths.iter().enumerate() {
        output.print(&format!("   - HTML Page {}: {}", i + 1, path.display()))?;
    }
    output.print(&format!("   - PDF: {}", result.pdf_path.display()))?;
    Ok(())
}
