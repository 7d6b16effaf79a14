//! Bilingual (English/Spanish) section-title vocabulary and the heading-hint matcher.

use std::collections::BTreeSet;

use crate::text::{collapse_whitespace, normalize_for_matching};

use super::lines::{looks_like_heading_line, split_lines};
use super::patterns::HINT_MATCHERS;

/// Every hint phrase, already normalized (lowercase, no accents).
///
/// Presence anywhere on a page is weak evidence; it only counts together
/// with structural signals.
pub const HEADING_HINTS: &[&str] = &[
    // TOC / index
    "table of contents",
    "table of content",
    "contents",
    "toc",
    "index",
    "indices",
    "indice",
    "indice general",
    "indice de contenidos",
    "tabla de contenidos",
    "tabla de contenido",
    "contenido",
    "contenidos",
    "sumario",
    // Lists
    "list of figures",
    "list of tables",
    "list of illustrations",
    "lista de figuras",
    "lista de tablas",
    "lista de ilustraciones",
    "indice de figuras",
    "indice de tablas",
    "indice de ilustraciones",
    // List-like front and back matter
    "glossary",
    "glosario",
    "abbreviations",
    "abreviaturas",
    "acronyms",
    "siglas",
    "appendix",
    "appendices",
    "apendice",
    "apendices",
    "anexo",
    "anexos",
];

/// Hints that count as a strong signal when they stand alone on an early line.
pub const STRONG_HEADING_HINTS: &[&str] = &[
    "table of contents",
    "contents",
    "tabla de contenidos",
    "tabla de contenido",
    "contenido",
    "contenidos",
    "sumario",
    "index",
    "indice",
    "list of figures",
    "list of tables",
    "lista de figuras",
    "lista de tablas",
    "glossary",
    "glosario",
    "abbreviations",
    "abreviaturas",
];

/// Only the top of the page is scanned for standalone headings.
const STRONG_HEADING_SCAN_LINES: usize = 40;

/// A standalone heading may have at most this many words.
const STRONG_HEADING_MAX_WORDS: usize = 6;

/// Decoration allowed around a standalone heading.
const HEADING_DECORATION: &[char] = &[':', '-', '–', '—', '•', '·', '*', '#', ' ', '\t'];

/// Heading hints found on one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintHits {
    /// Hints present anywhere on the page (word-bounded).
    pub any: BTreeSet<&'static str>,
    /// Strong hints that appear as a standalone heading line near the top.
    pub strong: BTreeSet<&'static str>,
}

impl HintHits {
    pub fn has_any(&self) -> bool {
        !self.any.is_empty()
    }

    pub fn has_strong(&self) -> bool {
        !self.strong.is_empty()
    }
}

/// Find heading hints on a page of raw text.
pub fn heading_hint_hits(page_text: &str) -> HintHits {
    let normalized_full = collapse_whitespace(&normalize_for_matching(page_text));

    let any = HINT_MATCHERS
        .iter()
        .filter(|(_, re)| re.is_match(&normalized_full))
        .map(|(hint, _)| *hint)
        .collect();

    let mut strong = BTreeSet::new();
    for line in split_lines(page_text)
        .filter(|l| !l.trim().is_empty())
        .take(STRONG_HEADING_SCAN_LINES)
    {
        let collapsed = collapse_whitespace(&normalize_for_matching(line));
        let normalized_line = collapsed.trim_matches(HEADING_DECORATION);
        if normalized_line.is_empty() {
            continue;
        }

        let heading_shaped = looks_like_heading_line(line)
            || normalized_line.split_whitespace().count() <= STRONG_HEADING_MAX_WORDS;
        if !heading_shaped {
            continue;
        }

        for hint in STRONG_HEADING_HINTS {
            if is_standalone_hint(normalized_line, hint) {
                strong.insert(*hint);
            }
        }
    }

    HintHits { any, strong }
}

/// The line is the hint itself, or the hint followed by a space and more text.
fn is_standalone_hint(normalized_line: &str, hint: &str) -> bool {
    normalized_line == hint
        || normalized_line
            .strip_prefix(hint)
            .is_some_and(|rest| rest.starts_with(' '))
}
