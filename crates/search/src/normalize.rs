//! Text normalization for accent- and case-insensitive comparison.

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block stripped after decomposition.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Canonicalize text for matching.
///
/// Lower-cases, decomposes to NFD, drops combining diacritical marks,
/// maps any remaining `ñ` to `n` and trims surrounding whitespace.
/// Characters outside these rules pass through lower-cased.
///
/// # Example
/// ```
/// use glowbook_search::normalize;
///
/// assert_eq!(normalize("  PESTAÑAS "), "pestanas");
/// assert_eq!(normalize("Depilación"), "depilacion");
/// ```
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .map(|c| if c == 'ñ' { 'n' } else { c })
        .collect();

    folded.trim().to_string()
}
