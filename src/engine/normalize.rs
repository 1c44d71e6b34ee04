//! Line normalization for diacritic-insensitive, case-insensitive matching.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold one character: strip diacritics via NFD, uppercase.
///
/// Returns exactly one character per input character so that character
/// offsets measured on a folded line still line up with the original.
fn fold_char(c: char) -> char {
    let base = std::iter::once(c)
        .nfd()
        .find(|d| !is_combining_mark(*d))
        .unwrap_or(c);
    if base == '\u{a0}' {
        return ' ';
    }
    base.to_uppercase().next().unwrap_or(base)
}

/// Uppercase, diacritic-stripped copy of a line with the same character
/// count as the original. Used wherever a character index found on the
/// folded text must be applied back to the raw text.
pub fn fold_line(line: &str) -> String {
    line.chars().map(fold_char).collect()
}

/// Fully normalized form for predicate matching: folded, whitespace runs
/// collapsed to single spaces, trimmed.
pub fn normalize(line: &str) -> String {
    let folded = fold_line(line);
    let mut out = String::with_capacity(folded.len());
    let mut last_space = true;
    for c in folded.chars() {
        if c.is_whitespace() {
            if !last_space {
                out.push(' ');
            }
            last_space = true;
        } else {
            out.push(c);
            last_space = false;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_strips_diacritics() {
        assert_eq!(fold_line("Réception"), "RECEPTION");
        assert_eq!(fold_line("Attaqué"), "ATTAQUE");
    }

    #[test]
    fn test_fold_preserves_char_count() {
        let line = "Réception  à  l'essai";
        assert_eq!(fold_line(line).chars().count(), line.chars().count());
    }

    #[test]
    fn test_fold_nbsp_to_space() {
        assert_eq!(fold_line("A\u{a0}B"), "A B");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  club   Olympique \t x  "), "CLUB OLYMPIQUE X");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(""), "");
    }
}
