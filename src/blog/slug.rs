//! Slug generation.
//!
//! A slug is the filename stem of a post and the only key the store uses to
//! locate it. Slugs are derived from titles and are always lowercase ASCII
//! kebab-case: `"Hello, World! 2024"` becomes `hello-world-2024`.
//!
//! Word characters are ASCII-only, so letters outside `[a-z0-9]` are dropped
//! rather than carried into filenames. A title made entirely of punctuation
//! or non-ASCII letters therefore produces an empty slug; callers decide what
//! to do with that.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9_\s-]").unwrap());
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_]+").unwrap());
static HYPHEN_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// Converts arbitrary text into a filesystem- and URL-safe slug.
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    let hyphenated = SEPARATORS.replace_all(&stripped, "-");
    let collapsed = HYPHEN_RUNS.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

/// True when `slug` is already in the shape `slugify` produces.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
