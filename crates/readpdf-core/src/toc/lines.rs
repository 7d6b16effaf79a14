//! Line-level classifiers: heading, navigation entry and term definition.

use crate::text::normalize_for_matching;

use super::patterns::{
    FOUR_DIGITS, LEADING_BULLET, LINE_BREAK, NAV_ENTRY, PAGELIST_ANY_SEP, PAGELIST_LIST_SEP, PAGE_FOOTER,
    PAGE_NUMBER_TOKEN,
};

const NAV_MIN_LEN: usize = 6;
const NAV_MAX_LEN: usize = 160;
const NAV_MIN_LABEL_LETTERS: usize = 3;
const YEAR_RANGE: std::ops::RangeInclusive<u32> = 1500..=2200;

const TERM_DEF_MIN_LEN: usize = 8;
const TERM_DEF_MAX_LEN: usize = 220;

/// Term/definition separators in priority order. The first one present wins,
/// even when a later one occurs earlier in the line.
const TERM_DEF_SEPARATORS: &[&str] = &["—", "–", " - ", ":"];

const LABEL_TRIM: &[char] = &[' ', '.', '\t', '-', '—', '–', '·', '•', '_'];

/// Split page text into lines on any line boundary (`\n`, `\r\n`, bare `\r`,
/// vertical tab, form feed, `\x1c`-`\x1e`, NEL, U+2028, U+2029).
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    LINE_BREAK.split(text)
}

/// Lightweight heading test: markdown `#` prefix or a mostly uppercase line.
pub fn looks_like_heading_line(line: &str) -> bool {
    let stripped = line.trim();
    if stripped.is_empty() {
        return false;
    }
    if stripped.starts_with('#') {
        return true;
    }

    let (letters, upper) = stripped
        .chars()
        .filter(|c| c.is_alphabetic())
        .fold((0usize, 0usize), |(n, up), c| (n + 1, up + usize::from(c.is_uppercase())));

    letters >= 6 && upper as f64 / letters as f64 >= 0.85
}

/// Does the line look like "<label> <leader> <page numbers>"?
///
/// `max_page` bounds plausible page references; `None` or `Some(0)` disables
/// the bound.
pub fn looks_like_nav_entry_line(line: &str, max_page: Option<u32>) -> bool {
    let original = line;
    let line = line.trim();
    if line.is_empty() {
        return false;
    }

    let line = LEADING_BULLET.replacen(line, 1, "");
    let len = line.chars().count();
    if !(NAV_MIN_LEN..=NAV_MAX_LEN).contains(&len) {
        return false;
    }

    let normalized = normalize_for_matching(&line);
    let Some(caps) = NAV_ENTRY.captures(&normalized) else {
        return false;
    };

    let label = caps
        .name("label")
        .map_or("", |m| m.as_str())
        .trim_matches(LABEL_TRIM);
    if label.chars().filter(char::is_ascii_lowercase).count() < NAV_MIN_LABEL_LETTERS {
        return false;
    }

    let pagelist = caps.name("pagelist").map_or("", |m| m.as_str());
    if looks_like_year(pagelist) {
        return false;
    }

    if let Some(max_page) = max_page.filter(|&m| m > 0) {
        let numbers: Vec<u32> = PAGELIST_ANY_SEP
            .split(pagelist)
            .map(str::trim)
            .filter(|t| PAGE_NUMBER_TOKEN.is_match(t))
            .filter_map(|t| t.parse().ok())
            .collect();
        if numbers.iter().any(|&n| n < 1 || n > max_page) {
            return false;
        }
    }

    if PAGE_FOOTER.is_match(normalize_for_matching(original).trim()) {
        return false;
    }

    true
}

/// A page list made of one bare 4-digit token in the year range is a year.
fn looks_like_year(pagelist: &str) -> bool {
    let tokens: Vec<&str> = PAGELIST_LIST_SEP
        .split(pagelist)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();

    match tokens.as_slice() {
        [token] if FOUR_DIGITS.is_match(token) => token
            .parse::<u32>()
            .is_ok_and(|year| YEAR_RANGE.contains(&year)),
        _ => false,
    }
}

/// Glossary/abbreviation style line: "TERM — definition".
pub fn looks_like_term_definition_line(line: &str) -> bool {
    let stripped = line.trim();
    if stripped.is_empty() {
        return false;
    }
    let len = stripped.chars().count();
    if !(TERM_DEF_MIN_LEN..=TERM_DEF_MAX_LEN).contains(&len) {
        return false;
    }
    if looks_like_heading_line(stripped) {
        return false;
    }

    let Some((left, right)) = TERM_DEF_SEPARATORS
        .iter()
        .find(|sep| stripped.contains(*sep))
        .and_then(|sep| stripped.split_once(sep))
    else {
        return false;
    };

    let (left, right) = (left.trim(), right.trim());
    if left.chars().count() < 2 || right.chars().count() < 3 {
        return false;
    }

    ascii_letters(left) >= 2 && ascii_letters(right) >= 3
}

fn ascii_letters(s: &str) -> usize {
    s.chars().filter(char::is_ascii_alphabetic).count()
}
