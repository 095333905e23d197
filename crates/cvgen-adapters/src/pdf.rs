//! HTML → PDF adapter built on printpdf.

use std::collections::BTreeMap;
use std::path::Path;

use cvgen_core::{
    application::{ApplicationError, ports::PdfWriter},
    error::CvgenResult,
};
use printpdf::{GeneratePdfOptions, PdfDocument};
use tracing::{instrument, warn};

/// PDF writer rendering HTML pages with `printpdf`.
///
/// Holds the stylesheet text once and applies it to every page, so PDFs
/// carry the same styling whether or not HTML emission was requested.
#[derive(Debug, Clone, Default)]
pub struct PrintPdfWriter {
    stylesheet: Option<String>,
}

impl PrintPdfWriter {
    /// Create a writer with no stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer that injects the given CSS into every page.
    pub fn with_stylesheet(css: impl Into<String>) -> Self {
        Self {
            stylesheet: Some(css.into()),
        }
    }

    /// Inject the stylesheet into an HTML document. Placed before `</head>`
    /// when one exists, prepended otherwise.
    fn styled_html(&self, html: &str) -> String {
        let Some(css) = &self.stylesheet else {
            return html.to_string();
        };
        let style_block = format!("<style>{css}</style>");
        match html.find("</head>") {
            Some(idx) => {
                let mut out = String::with_capacity(html.len() + style_block.len());
                out.push_str(&html[..idx]);
                out.push_str(&style_block);
                out.push_str(&html[idx..]);
                out
            }
            None => format!("{style_block}{html}"),
        }
    }

    fn render_document(&self, html: &str, path: &Path) -> CvgenResult<PdfDocument> {
        let mut warnings = Vec::new();

        // No images or custom fonts to embed; default generation options.
        let doc = PdfDocument::from_html(
            &self.styled_html(html),
            &BTreeMap::new(),
            &BTreeMap::new(),
            &GeneratePdfOptions::default(),
            &mut warnings,
        )
        .map_err(|e| ApplicationError::PdfFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if !warnings.is_empty() {
            warn!(path = %path.display(), count = warnings.len(), "PDF generation warnings");
        }

        Ok(doc)
    }

    fn save(&self, doc: &PdfDocument, path: &Path) -> CvgenResult<()> {
        let mut warnings = Vec::new();
        let bytes = doc.save(&Default::default(), &mut warnings);

        std::fs::write(path, bytes).map_err(|e| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: format!("Failed to write PDF: {e}"),
            }
            .into()
        })
    }
}

impl PdfWriter for PrintPdfWriter {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn write_single(&self, html: &str, path: &Path) -> CvgenResult<()> {
        let doc = self.render_document(html, path)?;
        self.save(&doc, path)
    }

    #[instrument(skip_all, fields(path = %path.display(), pages = htmls.len()))]
    fn write_merged(&self, htmls: &[String], path: &Path) -> CvgenResult<()> {
        let Some((first, rest)) = htmls.split_first() else {
            return Err(ApplicationError::PdfFailed {
                path: path.to_path_buf(),
                reason: "no pages to write".into(),
            }
            .into());
        };

        // Use the first document as the base, append the rest as pages.
        let mut base = self.render_document(first, path)?;
        for html in rest {
            let doc = self.render_document(html, path)?;
            base.pages.extend(doc.pages);
        }

        self.save(&base, path)
    }
}
