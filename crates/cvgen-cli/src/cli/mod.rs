//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "cvgen",
    bin_name = "cvgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4c4} Resume & cover-letter generation",
    long_about = "Cvgen renders resume and cover-letter PDFs (and optional HTML) \
                  from a structured TOML content file, optionally tailored to a \
                  job description.",
    after_help = "EXAMPLES:\n\
        \x20 cvgen generate --html\n\
        \x20 cvgen generate --resume --content my_resume.toml\n\
        \x20 cvgen generate --job jobs/acme_backend.txt\n\
        \x20 cvgen completions bash > /usr/share/bash-completion/completions/cvgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate documents from the content file.
    #[command(
        visible_alias = "gen",
        about = "Generate resume/cover-letter documents",
        after_help = "EXAMPLES:\n\
            \x20 cvgen generate                        # all enabled documents, PDF only\n\
            \x20 cvgen generate --html                 # PDFs plus per-page HTML\n\
            \x20 cvgen generate --cover-letter         # one document type only\n\
            \x20 cvgen generate --job jobs/acme.txt    # tailor content to a job description"
    )]
    Generate(GenerateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 cvgen completions bash > ~/.local/share/bash-completion/completions/cvgen\n\
            \x20 cvgen completions zsh  > ~/.zfunc/_cvgen\n\
            \x20 cvgen completions fish > ~/.config/fish/completions/cvgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `cvgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Generate the resume. Selecting no document flag generates every
    /// enabled document type.
    #[arg(long = "resume", help = "Generate the resume")]
    pub resume: bool,

    /// Generate the cover letter.
    #[arg(long = "cover-letter", help = "Generate the cover letter")]
    pub cover_letter: bool,

    /// Content file to generate from.
    #[arg(
        long = "content",
        value_name = "FILE",
        help = "Path to the TOML content file (default from app config)"
    )]
    pub content: Option<PathBuf>,

    /// Also write per-page HTML files next to the PDF.
    #[arg(long = "html", help = "Also emit per-page HTML files")]
    pub html: bool,

    /// Job description file used to tailor the content before generation.
    #[arg(
        long = "job",
        value_name = "FILE",
        help = "Job description file for customization"
    )]
    pub job: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `cvgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from(["cvgen", "generate", "--html", "--content", "my.toml"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert!(args.html);
        assert_eq!(args.content.as_deref(), Some(std::path::Path::new("my.toml")));
    }

    #[test]
    fn generate_alias() {
        let cli = Cli::parse_from(["cvgen", "gen", "--resume"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert!(args.resume);
        assert!(!args.cover_letter);
    }

    #[test]
    fn job_flag_takes_a_path() {
        let cli = Cli::parse_from(["cvgen", "generate", "--job", "jobs/acme.txt"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(
            args.job.as_deref(),
            Some(std::path::Path::new("jobs/acme.txt"))
        );
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["cvgen", "--quiet", "--verbose", "generate"]);
        assert!(result.is_err());
    }
}
