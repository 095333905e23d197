//! Filesystem-safe filename stems.
//!
//! Every output file of a generation run shares one stem derived from the
//! person's name, optionally combined with a job-description tag so that
//! customized runs for different applications coexist on disk.

/// Convert a display name to a filename-friendly stem.
///
/// `"Jane Smith"` becomes `"jane_smith"`: trimmed, lowercased, spaces
/// replaced with underscores, and every character that is not alphanumeric
/// or an underscore removed.
pub fn sanitize(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .replace(' ', "_")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

/// Build the combined filename prefix for a generation run.
///
/// Joins the sanitized person name and the sanitized job tag (when present)
/// with underscores, and appends a trailing underscore only when the result
/// is non-empty — an empty name must not produce a leading-underscore file.
pub fn name_prefix(person_name: &str, job_tag: Option<&str>) -> String {
    let parts: Vec<String> = [Some(person_name), job_tag]
        .into_iter()
        .flatten()
        .map(sanitize)
        .filter(|p| !p.is_empty())
        .collect();

    let stem = parts.join("_");
    if stem.is_empty() { stem } else { format!("{stem}_") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_name() {
        assert_eq!(sanitize("Jane Smith"), "jane_smith");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(sanitize("  John Doe  "), "john_doe");
    }

    #[test]
    fn punctuation_is_removed() {
        assert_eq!(sanitize("Alex O'Brien-Jones"), "alex_obrienjones");
    }

    #[test]
    fn digits_are_kept() {
        assert_eq!(sanitize("User 123"), "user_123");
    }

    #[test]
    fn empty_name_stays_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   "), "");
    }

    #[test]
    fn prefix_appends_trailing_underscore() {
        assert_eq!(name_prefix("Test User", None), "test_user_");
    }

    #[test]
    fn prefix_with_job_tag() {
        assert_eq!(
            name_prefix("Test User", Some("example_job")),
            "test_user_example_job_"
        );
    }

    #[test]
    fn empty_name_gives_empty_prefix() {
        assert_eq!(name_prefix("", None), "");
    }

    #[test]
    fn job_tag_alone_still_forms_a_prefix() {
        assert_eq!(name_prefix("", Some("Backend Role")), "backend_role_");
    }
}
