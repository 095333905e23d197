//! Document types and their template contexts.
//!
//! Each document type knows which templates it renders and how to map the
//! profile document into the flat context those templates expect. The set
//! of types is a closed enum ([`DocumentKind`]) so configuration selects
//! implementations without any runtime string-to-type resolution.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use super::profile::{ProfileDocument, RenderContext};
use super::text::{format_content_as_html, split_bullets, split_intro_and_bullets};

/// Capability set shared by all document types.
///
/// Implementations are pure functions of the profile: no I/O, no side
/// effects, and the profile is never mutated.
pub trait Document {
    /// Map the profile into the context this document's templates consume.
    fn prepare_context(&self, profile: &ProfileDocument) -> RenderContext;

    /// The ordered template identifiers to render, one per output page.
    fn template_names(&self) -> &'static [&'static str];
}

/// The two-page resume document.
pub struct ResumeDocument;

impl Document for ResumeDocument {
    fn prepare_context(&self, profile: &ProfileDocument) -> RenderContext {
        let resume = profile.section("resume");
        let (summary_intro, summary_bullets) =
            split_intro_and_bullets(&profile.text("resume", "summary"));
        let highlights_bullets = split_bullets(&profile.text("resume", "career_highlights"));

        let mut context = RenderContext::new();
        context.insert("personal", Value::Object(profile.section("personal")));
        context.insert("resume", Value::Object(resume));
        context.insert("summary_intro", summary_intro);
        context.insert("summary_bullets", summary_bullets);
        context.insert("highlights_bullets", highlights_bullets);
        context
    }

    fn template_names(&self) -> &'static [&'static str] {
        &["resume_page1.html", "resume_page2.html"]
    }
}

/// The single-page cover letter document.
pub struct CoverLetterDocument;

impl Document for CoverLetterDocument {
    fn prepare_context(&self, profile: &ProfileDocument) -> RenderContext {
        let mut context = RenderContext::new();

        // Personal fields merge at the top level so templates address them
        // directly ({{ name }}, {{ email }}, ...).
        for (key, value) in profile.section("personal") {
            context.insert(key, value);
        }
        context.insert("recipient", profile.text("content", "recipient"));
        context.insert(
            "content",
            format_content_as_html(&profile.text("content", "cover_letter")),
        );
        context
    }

    fn template_names(&self) -> &'static [&'static str] {
        &["cover_letter.html"]
    }
}

/// Compile-time registry of document types.
///
/// Configuration and CLI flags name these; the enum maps each name to its
/// [`Document`] implementation and output naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Resume,
    CoverLetter,
}

impl DocumentKind {
    /// Every known kind, in generation order.
    pub const ALL: [DocumentKind; 2] = [DocumentKind::Resume, DocumentKind::CoverLetter];

    /// The context builder for this kind.
    pub fn document(&self) -> &'static dyn Document {
        match self {
            Self::Resume => &ResumeDocument,
            Self::CoverLetter => &CoverLetterDocument,
        }
    }

    /// Identifier used in filenames, configuration, and error labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resume => "resume",
            Self::CoverLetter => "cover_letter",
        }
    }

    /// Human-facing name for confirmation output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Resume => "Resume",
            Self::CoverLetter => "Cover Letter",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resume" => Ok(Self::Resume),
            "cover_letter" => Ok(Self::CoverLetter),
            other => Err(format!("unknown document kind '{other}'")),
        }
    }
}
