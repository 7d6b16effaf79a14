//! Regex patterns for TOC-like page detection.
//!
//! Patterns that run on normalized text assume the input already went
//! through `normalize_for_matching`, so they only need lowercase forms.

use lazy_static::lazy_static;
use regex::Regex;

use super::hints::HEADING_HINTS;

/// One page reference: a 1-4 digit number or a lowercase roman numeral.
const PAGE_REF: &str = r"(?:\d{1,4}|[ivxlcdm]{1,8})";

lazy_static! {
    // "<label><leader><page list>", e.g. "introduction .......... 4" or "apples, 12-14; 20"
    pub static ref NAV_ENTRY: Regex = Regex::new(&format!(
        r"(?i)^\s*(?P<label>.+?)(?:\.{{2,}}|·{{2,}}|-{{2,}}|_{{2,}}|\s{{2,}}|\t)?\s*(?P<pagelist>{PAGE_REF}(?:\s*(?:,|;|-|–|—)\s*{PAGE_REF})*)\s*$"
    )).unwrap();

    // Leading list bullet, kept separate so numbered labels like "1.2 Scope" survive.
    pub static ref LEADING_BULLET: Regex = Regex::new(
        r"^\s*[-*•]\s+"
    ).unwrap();

    // Separators inside a page list used for the year check.
    pub static ref PAGELIST_LIST_SEP: Regex = Regex::new(
        r"[,;]"
    ).unwrap();

    // Separators inside a page list, including ranges.
    pub static ref PAGELIST_ANY_SEP: Regex = Regex::new(
        r"[,;\-–—]"
    ).unwrap();

    pub static ref FOUR_DIGITS: Regex = Regex::new(
        r"^\d{4}$"
    ).unwrap();

    pub static ref PAGE_NUMBER_TOKEN: Regex = Regex::new(
        r"^\d{1,4}$"
    ).unwrap();

    // Every line boundary recognized in extracted text, including bare CR and
    // the Unicode line/paragraph separators.
    pub static ref LINE_BREAK: Regex = Regex::new(
        r"\r\n|[\n\r\x0b\x0c\x1c-\x1e\x{85}\x{2028}\x{2029}]"
    ).unwrap();

    // Running footers such as "Page 3" or "Página 12".
    pub static ref PAGE_FOOTER: Regex = Regex::new(
        r"^(?:page|pagina|p)\s+\d{1,4}$"
    ).unwrap();

    // Word-bounded matcher for every heading hint, in vocabulary order.
    pub static ref HINT_MATCHERS: Vec<(&'static str, Regex)> = HEADING_HINTS
        .iter()
        .map(|hint| {
            let pattern = format!(r"\b{}\b", regex::escape(hint));
            (*hint, Regex::new(&pattern).unwrap())
        })
        .collect();
}
