//! Free-form text block transformations.
//!
//! Content files carry multi-line prose fields (summaries, highlight lists,
//! letter bodies). These helpers turn them into the shapes templates expect.
//! All functions here are total: any string input produces a value.

/// The two bullet markers recognised in content files.
///
/// Only the exact two-character prefixes are stripped — a line like
/// `-no-space` is kept verbatim so hyphenated text is never mangled.
const BULLET_MARKERS: [&str; 2] = ["- ", "\u{2022} "];

/// Split a block of text into an intro line and a list of bullet points.
///
/// The first non-empty line is the intro; every following non-empty line
/// becomes a bullet (marker stripped if present). Returns `("", vec![])`
/// when the text has no non-empty lines.
pub fn split_intro_and_bullets(text: &str) -> (String, Vec<String>) {
    let lines = non_empty_lines(text);
    let Some((intro, rest)) = lines.split_first() else {
        return (String::new(), Vec::new());
    };
    (intro.to_string(), rest.iter().map(|l| strip_marker(l)).collect())
}

/// Split a block of text into bullet points, treating every line as a bullet.
pub fn split_bullets(text: &str) -> Vec<String> {
    non_empty_lines(text).iter().map(|l| strip_marker(l)).collect()
}

/// Format a letter body as HTML paragraphs.
///
/// Paragraphs are separated by a blank line; each is trimmed and wrapped in
/// `<p>…</p>`, joined by newlines. An empty body yields a single empty
/// paragraph tag so templates always have content to place.
pub fn format_content_as_html(content: &str) -> String {
    content
        .trim()
        .split("\n\n")
        .map(|p| format!("<p>{}</p>", p.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn non_empty_lines(text: &str) -> Vec<&str> {
    text.trim()
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

fn strip_marker(line: &str) -> String {
    for marker in BULLET_MARKERS {
        if let Some(rest) = line.strip_prefix(marker) {
            return rest.trim().to_string();
        }
    }
    line.to_string()
}
