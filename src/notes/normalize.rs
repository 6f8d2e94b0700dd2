//! Commit subject normalization.
//!
//! Strips a leading conventional-commit prefix (`feat(ui): `, `fix!: `, ...),
//! collapses internal whitespace runs, and capitalizes the first letter.

use std::sync::LazyLock;

use regex::Regex;

// Matches "type(scope)!:" style prefixes, e.g. "feat(ui): " or "fix!:".
// The scope must be non-empty; the space after the colon is optional.
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static CONVENTIONAL_PREFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+(\([^)]+\))?!?:\s*").unwrap());

/// Normalizes a raw commit subject for display in release notes.
///
/// Removes one leading conventional-commit prefix if present, collapses
/// whitespace runs to single spaces, and uppercases the first character.
/// If stripping the prefix leaves nothing, the original trimmed subject is
/// kept. Always returns a string; there are no error conditions.
pub fn normalize(subject: &str) -> String {
    let trimmed = subject.trim();

    let stripped = CONVENTIONAL_PREFIX_PATTERN.replace(trimmed, "");
    let body = if stripped.trim().is_empty() {
        trimmed
    } else {
        stripped.as_ref()
    };

    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");
    capitalize_first(&collapsed)
}

/// Uppercases the first character of a string.
fn capitalize_first(text: &str) -> String {
    if let Some(first_char) = text.chars().next() {
        first_char.to_uppercase().collect::<String>() + &text[first_char.len_utf8()..]
    } else {
        String::new()
    }
}
