//! Tera template rendering adapter.

use std::error::Error as _;
use std::path::Path;

use cvgen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::RenderContext,
    error::CvgenResult,
};
use tera::Tera;
use tracing::instrument;

/// Tera implementation of the template renderer.
///
/// Templates are addressed by file name relative to the template directory,
/// with autoescaping on for `.html` files. Pre-built HTML context values
/// (the cover-letter body) pass through the `safe` filter in the templates
/// themselves.
pub struct TeraRenderer {
    tera: Tera,
}

impl TeraRenderer {
    /// Load every `.html` template under the given directory.
    pub fn from_dir(template_dir: &Path) -> CvgenResult<Self> {
        let glob = format!("{}/**/*.html", template_dir.display());
        let tera = Tera::new(&glob).map_err(|e| ApplicationError::RenderingFailed {
            template: glob,
            reason: describe(&e),
        })?;
        Ok(Self { tera })
    }
}

impl TemplateRenderer for TeraRenderer {
    #[instrument(skip_all, fields(template = template_name))]
    fn render(&self, template_name: &str, context: &RenderContext) -> CvgenResult<String> {
        let context =
            tera::Context::from_value(context.to_value()).map_err(|e| {
                ApplicationError::RenderingFailed {
                    template: template_name.to_string(),
                    reason: describe(&e),
                }
            })?;

        self.tera
            .render(template_name, &context)
            .map_err(|e| {
                ApplicationError::RenderingFailed {
                    template: template_name.to_string(),
                    reason: describe(&e),
                }
                .into()
            })
    }
}

/// Tera nests the useful message one level down; surface it.
fn describe(e: &tera::Error) -> String {
    match e.source() {
        Some(source) => format!("{e}: {source}"),
        None => e.to_string(),
    }
}
