//! Generation Service - main application orchestrator.
//!
//! This service coordinates the document generation workflow:
//! 1. Validate fatal preconditions (content file, job-description file)
//! 2. For each requested document kind, sequentially:
//!    load (+ optionally customize) the profile, resolve output elements,
//!    build the render context, render templates, emit HTML when requested,
//!    and always write the merged PDF
//! 3. Collect per-kind outcomes into a report
//!
//! A failure in one document kind never aborts the others; only the
//! preconditions in step 1 stop the whole run.

use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::{
    application::ports::{Customizer, FileStore, PdfWriter, ProfileStore, TemplateRenderer},
    domain::{DocumentKind, filename::name_prefix},
    error::CvgenResult,
};

/// The per-run resolved parameters for one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Document kinds to generate, in order.
    pub kinds: Vec<DocumentKind>,
    /// Path to the structured content file.
    pub content_path: PathBuf,
    /// Directory receiving all output files (created if absent).
    pub output_dir: PathBuf,
    /// Whether to emit per-page HTML next to the PDF.
    pub emit_html: bool,
    /// Stylesheet copied into the output directory when HTML is emitted.
    pub stylesheet: PathBuf,
    /// Optional job-description file enabling customization.
    pub job_path: Option<PathBuf>,
}

impl GenerationRequest {
    pub fn new(content_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            kinds: DocumentKind::ALL.to_vec(),
            content_path: content_path.into(),
            output_dir: output_dir.into(),
            emit_html: false,
            stylesheet: PathBuf::from("templates/style.css"),
            job_path: None,
        }
    }

    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = DocumentKind>) -> Self {
        self.kinds = kinds.into_iter().collect();
        self
    }

    pub fn with_html(mut self, emit_html: bool) -> Self {
        self.emit_html = emit_html;
        self
    }

    pub fn with_stylesheet(mut self, stylesheet: impl Into<PathBuf>) -> Self {
        self.stylesheet = stylesheet.into();
        self
    }

    pub fn with_job(mut self, job_path: Option<PathBuf>) -> Self {
        self.job_path = job_path;
        self
    }
}

/// Output of one successful document generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub kind: DocumentKind,
    /// Display name the documents were generated for.
    pub person_name: String,
    /// Per-page HTML paths; empty when HTML emission was not requested.
    pub html_paths: Vec<PathBuf>,
    /// The merged PDF, always produced.
    pub pdf_path: PathBuf,
    /// The copied stylesheet, present only when HTML was emitted.
    pub stylesheet_path: Option<PathBuf>,
}

/// One document kind's outcome: the result value, or the error that stopped
/// it. Errors here never aborted sibling generations.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub kind: DocumentKind,
    pub result: CvgenResult<GenerationResult>,
}

/// Aggregated outcomes of a run, in request order.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub outcomes: Vec<GenerationOutcome>,
}

impl GenerationReport {
    /// Labelled error messages, one per failed document kind.
    pub fn errors(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter_map(|o| {
                o.result
                    .as_ref()
                    .err()
                    .map(|e| format!("Error generating {}: {}", o.kind, e))
            })
            .collect()
    }

    /// Successful results, in request order.
    pub fn successes(&self) -> impl Iterator<Item = &GenerationResult> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    /// `true` when every requested kind generated.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }
}

/// Main generation service.
///
/// Orchestrates profile loading, customization, rendering, and output
/// writing through the injected port adapters.
pub struct GenerationService {
    profiles: Box<dyn ProfileStore>,
    renderer: Box<dyn TemplateRenderer>,
    files: Box<dyn FileStore>,
    pdf: Box<dyn PdfWriter>,
    customizer: Box<dyn Customizer>,
}

impl GenerationService {
    /// Create a new generation service with the given adapters.
    pub fn new(
        profiles: Box<dyn ProfileStore>,
        renderer: Box<dyn TemplateRenderer>,
        files: Box<dyn FileStore>,
        pdf: Box<dyn PdfWriter>,
        customizer: Box<dyn Customizer>,
    ) -> Self {
        Self {
            profiles,
            renderer,
            files,
            pdf,
            customizer,
        }
    }

    /// Run a generation request.
    ///
    /// Fatal preconditions (unreadable or out-of-root content/job files,
    /// unparseable content) return `Err` before anything is generated.
    /// Everything after that is captured per kind in the report.
    #[instrument(
        skip_all,
        fields(
            content = %request.content_path.display(),
            kinds = request.kinds.len(),
            html = request.emit_html
        )
    )]
    pub fn run(&self, request: &GenerationRequest) -> CvgenResult<GenerationReport> {
        // 1. Eager validation: the pristine content file must load, and the
        //    job description (when given) must be readable inside the
        //    project root.
        self.profiles.load(&request.content_path, None)?;

        let job_description = match &request.job_path {
            Some(path) => Some(self.files.read_text(path)?),
            None => None,
        };
        let job_tag = request
            .job_path
            .as_deref()
            .and_then(Path::file_stem)
            .map(|s| s.to_string_lossy().into_owned());

        // 2. Strictly sequential generation; one kind's failure never
        //    blocks the next.
        let mut report = GenerationReport::default();
        for &kind in &request.kinds {
            info!(kind = %kind, "Generating document");
            let result =
                self.generate_one(kind, request, job_description.as_deref(), job_tag.as_deref());
            match &result {
                Ok(r) => info!(kind = %kind, pdf = %r.pdf_path.display(), "Document generated"),
                Err(e) => warn!(kind = %kind, error = %e, "Generation failed"),
            }
            report.outcomes.push(GenerationOutcome { kind, result });
        }

        Ok(report)
    }

    /// Generate a single document kind end to end.
    fn generate_one(
        &self,
        kind: DocumentKind,
        request: &GenerationRequest,
        job_description: Option<&str>,
        job_tag: Option<&str>,
    ) -> CvgenResult<GenerationResult> {
        // Load the profile, rewriting the raw text against the job
        // description first when one was supplied. The rewrite runs per
        // kind so a customization failure is a per-kind error.
        let profile = match job_description {
            Some(job) => {
                let rewrite = |raw: &str| self.customizer.customize(raw, job);
                self.profiles.load(&request.content_path, Some(&rewrite))?
            }
            None => self.profiles.load(&request.content_path, None)?,
        };

        // Resolve the run elements.
        let output_dir = self.files.ensure_directory(&request.output_dir)?;
        let person_name = profile.person_name();
        let prefix = name_prefix(&person_name, job_tag);
        let stylesheet_path =
            self.files
                .copy_stylesheet(&request.stylesheet, &output_dir, request.emit_html)?;

        // Render every template against the same context.
        let document = kind.document();
        let context = document.prepare_context(&profile);
        let mut pages = Vec::with_capacity(document.template_names().len());
        for template_name in document.template_names() {
            pages.push(self.renderer.render(template_name, &context)?);
        }

        // HTML emission is optional...
        let mut html_paths = Vec::new();
        if request.emit_html {
            for (i, html) in pages.iter().enumerate() {
                let path = output_dir.join(format!("{prefix}{kind}_page{}.html", i + 1));
                self.files.write_html(html, &path)?;
                html_paths.push(path);
            }
        }

        // ...the merged PDF is not. Page order follows template order.
        let pdf_path = output_dir.join(format!("{prefix}{kind}.pdf"));
        self.pdf.write_merged(&pages, &pdf_path)?;

        Ok(GenerationResult {
            kind,
            person_name,
            html_paths,
            pdf_path,
            stylesheet_path,
        })
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ApplicationError;
    use crate::application::ports::RewriteFn;
    use crate::domain::{ProfileDocument, RenderContext};
    use crate::error::CvgenError;
    use mockall::mock;
    use serde_json::json;

    mock! {
        Files {}
        impl FileStore for Files {
            fn ensure_directory(&self, path: &Path) -> CvgenResult<PathBuf>;
            fn copy_stylesheet(
                &self,
                source: &Path,
                dest_dir: &Path,
                enabled: bool,
            ) -> CvgenResult<Option<PathBuf>>;
            fn write_html(&self, html: &str, path: &Path) -> CvgenResult<()>;
            fn read_text(&self, path: &Path) -> CvgenResult<String>;
        }
    }

    mock! {
        Renderer {}
        impl TemplateRenderer for Renderer {
            fn render(&self, template_name: &str, context: &RenderContext) -> CvgenResult<String>;
        }
    }

    mock! {
        Pdf {}
        impl PdfWriter for Pdf {
            fn write_single(&self, html: &str, path: &Path) -> CvgenResult<()>;
            fn write_merged(&self, htmls: &[String], path: &Path) -> CvgenResult<()>;
        }
    }

    mock! {
        Tailor {}
        impl Customizer for Tailor {
            fn customize(&self, document_text: &str, job_description: &str) -> CvgenResult<String>;
        }
    }

    /// Hand-rolled profile store: mockall cannot express the borrowed
    /// rewriter callback, and the fake additionally has to *invoke* it to
    /// exercise the customization path.
    struct FakeProfiles {
        raw: String,
        profile: ProfileDocument,
        fail: bool,
    }

    impl FakeProfiles {
        fn for_person(name: &str) -> Self {
            Self {
                raw: format!("[personal]\nname = \"{name}\"\n"),
                profile: ProfileDocument::from_value(json!({ "personal": { "name": name } })),
                fail: false,
            }
        }
    }

    impl ProfileStore for FakeProfiles {
        fn load(
            &self,
            path: &Path,
            rewrite: Option<RewriteFn<'_>>,
        ) -> CvgenResult<ProfileDocument> {
            if self.fail {
                return Err(ApplicationError::ContentNotFound {
                    path: path.to_path_buf(),
                }
                .into());
            }
            if let Some(rewrite) = rewrite {
                rewrite(&self.raw)?;
            }
            Ok(self.profile.clone())
        }
    }

    fn service_with(
        renderer: MockRenderer,
        files: MockFiles,
        pdf: MockPdf,
        tailor: MockTailor,
    ) -> GenerationService {
        GenerationService::new(
            Box::new(FakeProfiles::for_person("Test User")),
            Box::new(renderer),
            Box::new(files),
            Box::new(pdf),
            Box::new(tailor),
        )
    }

    fn files_for_output(emit_html: bool) -> MockFiles {
        let mut files = MockFiles::new();
        files
            .expect_ensure_directory()
            .returning(|p| Ok(p.to_path_buf()));
        files.expect_copy_stylesheet().returning(move |_, dir, on| {
            Ok(on.then(|| dir.join("style.css")))
        });
        if emit_html {
            files.expect_write_html().returning(|_, _| Ok(()));
        } else {
            files.expect_write_html().never();
        }
        files
    }

    #[test]
    fn resume_with_html_produces_two_pages_and_one_pdf() {
        let mut renderer = MockRenderer::new();
        renderer
            .expect_render()
            .times(2)
            .returning(|name, _| Ok(format!("<html>{name}</html>")));

        let mut pdf = MockPdf::new();
        pdf.expect_write_merged()
            .withf(|htmls, path| htmls.len() == 2 && path.ends_with("test_user_resume.pdf"))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service_with(renderer, files_for_output(true), pdf, MockTailor::new());
        let request = GenerationRequest::new("resume.toml", "output")
            .with_kinds([DocumentKind::Resume])
            .with_html(true);

        let report = service.run(&request).unwrap();
        assert!(report.is_success());

        let result = report.successes().next().unwrap();
        assert_eq!(result.person_name, "Test User");
        assert_eq!(result.html_paths.len(), 2);
        assert!(result.html_paths[0].ends_with("test_user_resume_page1.html"));
        assert!(result.html_paths[1].ends_with("test_user_resume_page2.html"));
        assert!(result.pdf_path.ends_with("test_user_resume.pdf"));
        assert!(result.stylesheet_path.is_some());
    }

    #[test]
    fn resume_without_html_still_writes_pdf() {
        let mut renderer = MockRenderer::new();
        renderer.expect_render().times(2).returning(|_, _| Ok("<html></html>".into()));

        let mut pdf = MockPdf::new();
        pdf.expect_write_merged().times(1).returning(|_, _| Ok(()));

        let service = service_with(renderer, files_for_output(false), pdf, MockTailor::new());
        let request =
            GenerationRequest::new("resume.toml", "output").with_kinds([DocumentKind::Resume]);

        let report = service.run(&request).unwrap();
        let result = report.successes().next().unwrap();
        assert!(result.html_paths.is_empty());
        assert!(result.stylesheet_path.is_none());
    }

    #[test]
    fn one_kind_failing_does_not_block_the_next() {
        let mut renderer = MockRenderer::new();
        renderer.expect_render().returning(|name, _| {
            if name.starts_with("resume") {
                Err(ApplicationError::RenderingFailed {
                    template: name.into(),
                    reason: "template not found".into(),
                }
                .into())
            } else {
                Ok("<html></html>".into())
            }
        });

        let mut pdf = MockPdf::new();
        // Only the cover letter reaches the PDF stage.
        pdf.expect_write_merged()
            .withf(|_, path| path.ends_with("test_user_cover_letter.pdf"))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service_with(renderer, files_for_output(false), pdf, MockTailor::new());
        let request = GenerationRequest::new("resume.toml", "output");

        let report = service.run(&request).unwrap();
        assert!(!report.is_success());

        let errors = report.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Error generating resume:"));
        assert!(errors[0].contains("template not found"));
        assert_eq!(report.successes().count(), 1);
    }

    #[test]
    fn job_description_customizes_each_kind() {
        let mut files = files_for_output(false);
        files
            .expect_read_text()
            .withf(|path| path == Path::new("jobs/example_job.txt"))
            .times(1)
            .returning(|_| Ok("A great job".into()));

        let mut renderer = MockRenderer::new();
        renderer.expect_render().returning(|_, _| Ok("<html></html>".into()));

        let mut pdf = MockPdf::new();
        pdf.expect_write_merged().times(2).returning(|_, _| Ok(()));

        let mut tailor = MockTailor::new();
        tailor
            .expect_customize()
            .withf(|text, job| text.contains("Test User") && job == "A great job")
            .times(2)
            .returning(|text, _| Ok(text.to_string()));

        let service = service_with(renderer, files, pdf, tailor);
        let request = GenerationRequest::new("resume.toml", "output")
            .with_job(Some(PathBuf::from("jobs/example_job.txt")));

        let report = service.run(&request).unwrap();
        assert!(report.is_success());

        // The job tag is woven into every output stem.
        for result in report.successes() {
            assert!(
                result
                    .pdf_path
                    .to_string_lossy()
                    .starts_with("output/test_user_example_job_")
            );
        }
    }

    #[test]
    fn unreadable_job_file_is_fatal() {
        let mut files = MockFiles::new();
        files.expect_read_text().returning(|p| {
            Err(ApplicationError::PathOutsideRoot {
                path: p.to_path_buf(),
            }
            .into())
        });

        let service = service_with(MockRenderer::new(), files, MockPdf::new(), MockTailor::new());
        let request = GenerationRequest::new("resume.toml", "output")
            .with_job(Some(PathBuf::from("/etc/passwd")));

        let err = service.run(&request).unwrap_err();
        assert!(matches!(
            err,
            CvgenError::Application(ApplicationError::PathOutsideRoot { .. })
        ));
    }

    #[test]
    fn missing_content_file_is_fatal() {
        let service = GenerationService::new(
            Box::new(FakeProfiles {
                raw: String::new(),
                profile: ProfileDocument::default(),
                fail: true,
            }),
            Box::new(MockRenderer::new()),
            Box::new(MockFiles::new()),
            Box::new(MockPdf::new()),
            Box::new(MockTailor::new()),
        );

        let request = GenerationRequest::new("missing.toml", "output");
        assert!(service.run(&request).is_err());
    }
}
