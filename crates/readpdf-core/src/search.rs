//! Regex search over page text with word-context windows.

use regex::Regex;
use tracing::debug;

use crate::error::SearchError;
use crate::models::record::{SearchRecord, ToolInfo};
use crate::pdf::PageTexts;
use crate::text::collapse_whitespace;

/// A match inside one page's whitespace-collapsed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub page: u32,
    pub matched: String,
    /// Character offsets into the collapsed page text.
    pub start_char: usize,
    pub end_char: usize,
    pub context_before: String,
    pub context_after: String,
}

impl SearchMatch {
    /// Turn the match into an output record.
    pub fn into_record(self, tool: &ToolInfo, pdf_path: &str, context_words: usize) -> SearchRecord {
        SearchRecord {
            tool: tool.clone(),
            mode: "search".to_string(),
            pdf_path: pdf_path.to_string(),
            page: self.page,
            matched: self.matched,
            match_start_char: self.start_char,
            match_end_char: self.end_char,
            context_words,
            context_before: self.context_before,
            context_after: self.context_after,
        }
    }
}

/// Compiled search over page texts.
pub struct PageSearcher {
    pattern: Regex,
    context_words: usize,
}

impl PageSearcher {
    /// Compile `pattern`; invalid patterns are rejected.
    pub fn new(pattern: &str, context_words: usize) -> Result<Self, SearchError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            context_words,
        })
    }

    /// All matches, page by page in ascending order.
    pub fn search(&self, pages: &PageTexts) -> Vec<SearchMatch> {
        let mut results = Vec::new();

        for (page, text) in pages.iter() {
            let collapsed = collapse_whitespace(text);
            if collapsed.is_empty() {
                continue;
            }

            let words = WordIndex::new(&collapsed);
            for m in self.pattern.find_iter(&collapsed) {
                let (before, after) = words.context(m.start(), m.end(), self.context_words);
                results.push(SearchMatch {
                    page,
                    matched: m.as_str().to_string(),
                    start_char: collapsed[..m.start()].chars().count(),
                    end_char: collapsed[..m.end()].chars().count(),
                    context_before: before,
                    context_after: after,
                });
            }
        }

        debug!("Search for /{}/ found {} matches", self.pattern.as_str(), results.len());
        results
    }
}

/// Compile `pattern` and search every page.
pub fn search_pages(
    pages: &PageTexts,
    pattern: &str,
    context_words: usize,
) -> Result<Vec<SearchMatch>, SearchError> {
    Ok(PageSearcher::new(pattern, context_words)?.search(pages))
}

/// Words of a collapsed text with their byte start offsets.
struct WordIndex<'a> {
    words: Vec<&'a str>,
    starts: Vec<usize>,
}

impl<'a> WordIndex<'a> {
    fn new(text: &'a str) -> Self {
        let (starts, words) = text
            .split(' ')
            .scan(0usize, |offset, word| {
                let start = *offset;
                *offset += word.len() + 1;
                Some((start, word))
            })
            .filter(|(_, word)| !word.is_empty())
            .unzip();
        Self { words, starts }
    }

    /// Up to `n` words before the word containing `match_start`, and up to
    /// `n` words starting at the first word that begins at or after `match_end`.
    fn context(&self, match_start: usize, match_end: usize, n: usize) -> (String, String) {
        if self.words.is_empty() {
            return (String::new(), String::new());
        }

        let start_idx = self
            .starts
            .partition_point(|&s| s <= match_start)
            .saturating_sub(1);
        let end_idx = self
            .starts
            .partition_point(|&s| s < match_end)
            .clamp(start_idx, self.words.len());

        let before_start = start_idx.saturating_sub(n);
        let after_end = (end_idx + n).min(self.words.len());

        (
            self.words[before_start..start_idx].join(" "),
            self.words[end_idx..after_end].join(" "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pages() -> PageTexts {
        PageTexts::from_pages([
            "one two three\nalpha   four five six",
            "",
            "seven alpha eight",
        ])
    }

    #[test]
    fn test_invalid_regex_is_rejected() {
        assert!(matches!(
            PageSearcher::new("(unclosed", 5),
            Err(SearchError::InvalidRegex(_))
        ));
    }

    #[test]
    fn test_matches_with_context() {
        let searcher = PageSearcher::new("alpha", 2).unwrap();
        let matches = searcher.search(&pages());
        assert_eq!(matches.len(), 2);

        assert_eq!(matches[0].page, 1);
        assert_eq!(matches[0].start_char, 14);
        assert_eq!(matches[0].end_char, 19);
        assert_eq!(matches[0].context_before, "two three");
        assert_eq!(matches[0].context_after, "four five");

        assert_eq!(matches[1].page, 3);
        assert_eq!(matches[1].context_before, "seven");
        assert_eq!(matches[1].context_after, "eight");
    }

    #[test]
    fn test_match_inside_word_excludes_that_word() {
        let searcher = PageSearcher::new("lph", 1).unwrap();
        let matches = searcher.search(&PageTexts::from_pages(["one alpha two"]));
        assert_eq!(matches[0].context_before, "one");
        assert_eq!(matches[0].context_after, "two");
    }

    #[test]
    fn test_char_offsets_with_multibyte_text() {
        let searcher = PageSearcher::new("café", 0).unwrap();
        let matches = searcher.search(&PageTexts::from_pages(["ñu  café"]));
        assert_eq!(matches[0].start_char, 3);
        assert_eq!(matches[0].end_char, 7);
        assert_eq!(matches[0].context_before, "");
        assert_eq!(matches[0].context_after, "");
    }

    #[test]
    fn test_search_pages() {
        assert_eq!(search_pages(&pages(), "alpha", 0).unwrap().len(), 2);
        assert!(search_pages(&pages(), "[", 0).is_err());
    }

    #[test]
    fn test_into_record() {
        let searcher = PageSearcher::new("eight", 1).unwrap();
        let m = searcher.search(&pages()).remove(0);
        let record = m.into_record(&ToolInfo::new("read-pdf", "0.1.0"), "doc.pdf", 1);
        assert_eq!(record.mode, "search");
        assert_eq!(record.page, 3);
        assert_eq!(record.matched, "eight");
        assert_eq!(record.context_before, "alpha");
    }
}
