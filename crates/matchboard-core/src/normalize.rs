//! Case and accent folding for free-text match fields.

use unicode_normalization::UnicodeNormalization;

/// Folds `text` for comparison: trims, lower-cases and strips diacritics.
///
/// Diacritics are removed by canonical decomposition (NFD) followed by
/// dropping the combining diacritical marks block (U+0300..U+036F). The
/// result is trimmed again so a dangling combining mark cannot leave
/// whitespace behind, which keeps the function idempotent.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Optional variant of [`normalize_text`]: `None` stays `None`.
#[must_use]
pub fn normalize_opt(text: Option<&str>) -> Option<String> {
    text.map(normalize_text)
}

/// Compares two names after folding.
#[must_use]
pub fn same_name(a: &str, b: &str) -> bool {
    normalize_text(a) == normalize_text(b)
}

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}
