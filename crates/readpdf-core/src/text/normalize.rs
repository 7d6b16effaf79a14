//! Accent/case-insensitive normalization and whitespace collapsing.

use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

/// Replace every run of whitespace with a single space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decompose (NFKD) and drop combining marks, so "Índice" becomes "Indice".
pub fn strip_accents(text: &str) -> String {
    text.nfkd()
        .filter(|&c| canonical_combining_class(c) == 0)
        .collect()
}

/// Normalize text for accent- and case-insensitive comparison.
///
/// Uses full Unicode case folding, so multi-codepoint mappings such as
/// `ß -> ss` compare equal to their expanded forms.
pub fn normalize_for_matching(text: &str) -> String {
    caseless::default_case_fold_str(&strip_accents(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \t b\n\n c  "), "a b c");
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(collapse_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_collapse_whitespace_idempotent() {
        for s in ["  Table   of\tContents \n", "x", "", "a\u{00a0}\u{2003}b"] {
            let once = collapse_whitespace(s);
            assert_eq!(collapse_whitespace(&once), once);
        }
    }

    #[test]
    fn test_normalize_accents_and_case() {
        assert_eq!(normalize_for_matching("Índice"), normalize_for_matching("indice"));
        assert_eq!(normalize_for_matching("Índice"), "indice");
        assert_eq!(normalize_for_matching("APÉNDICE"), "apendice");
        assert_eq!(normalize_for_matching("Página"), "pagina");
    }

    #[test]
    fn test_normalize_full_case_fold() {
        assert_eq!(normalize_for_matching("STRASSE"), normalize_for_matching("straße"));
    }

    #[test]
    fn test_strip_accents_keeps_base_letters() {
        assert_eq!(strip_accents("Glosário"), "Glosario");
        assert_eq!(strip_accents("plain"), "plain");
    }
}
