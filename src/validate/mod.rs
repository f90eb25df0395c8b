//! Input format validation.
//!
//! Pure functions that check the shape of user-entered strings before the
//! wizard accepts them. Each function is total: bad input yields `false` or
//! `None`, never an error, and the caller re-prompts.

use regex::Regex;

/// Normalize a raw project name into kebab-case.
///
/// Lowercases, maps spaces and underscores to hyphens, strips anything
/// outside `[a-z0-9-]`, collapses hyphen runs, and trims leading/trailing
/// hyphens. Returns `None` when no valid characters remain.
///
/// # Example
///
/// ```
/// use outfitter::validate::normalize_project_name;
///
/// assert_eq!(
///     normalize_project_name("My Cool App!!").as_deref(),
///     Some("my-cool-app")
/// );
/// assert_eq!(normalize_project_name("!!!"), None);
/// ```
pub fn normalize_project_name(raw: &str) -> Option<String> {
    let mut name = String::with_capacity(raw.len());
    let mut last_was_hyphen = false;

    for ch in raw.trim().to_lowercase().chars() {
        let mapped = match ch {
            ' ' | '_' | '-' => Some('-'),
            'a'..='z' | '0'..='9' => Some(ch),
            _ => None,
        };

        match mapped {
            Some('-') => {
                if !name.is_empty() && !last_was_hyphen {
                    name.push('-');
                    last_was_hyphen = true;
                }
            }
            Some(c) => {
                name.push(c);
                last_was_hyphen = false;
            }
            None => {}
        }
    }

    while name.ends_with('-') {
        name.pop();
    }

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Check that a repository URL points at a repo named `expected_name`.
///
/// Accepts `https://<host>/<owner>/<expected_name>` with an optional
/// trailing slash. The owner must be a single path segment.
pub fn is_valid_repo_url(url: &str, expected_name: &str) -> bool {
    let pattern = format!(
        r"^https://[^/]+/[^/]+/{}/?$",
        regex::escape(expected_name)
    );
    // The pattern is built from a literal skeleton plus an escaped name, so
    // compilation cannot fail for any expected_name.
    Regex::new(&pattern)
        .map(|re| re.is_match(url))
        .unwrap_or(false)
}

/// Check that a credential carries one of the accepted literal prefixes.
pub fn has_known_prefix(value: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| value.starts_with(p))
}
