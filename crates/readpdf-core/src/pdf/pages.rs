//! Ordered page-number to page-text mapping.

use std::collections::BTreeMap;

use tracing::debug;

/// Page separator emitted by text converters between pages.
pub const FORM_FEED: char = '\u{000C}';

/// Extracted plain text keyed by 1-based page number, ordered by page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageTexts {
    pages: BTreeMap<u32, String>,
}

impl PageTexts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from per-page strings, numbering them from 1.
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: (1u32..).zip(pages.into_iter().map(Into::into)).collect(),
        }
    }

    /// Split text on form feeds into pages.
    ///
    /// Blank pages are kept as empty strings so page numbers stay aligned;
    /// other pages are right-trimmed and end with a single newline.
    pub fn from_form_feed_text(text: &str) -> Self {
        Self::from_pages(text.split(FORM_FEED).map(|page| {
            if page.trim().is_empty() {
                String::new()
            } else {
                format!("{}\n", page.trim_end())
            }
        }))
    }

    pub fn insert(&mut self, page: u32, text: impl Into<String>) {
        self.pages.insert(page, text.into());
    }

    pub fn get(&self, page: u32) -> Option<&str> {
        self.pages.get(&page).map(String::as_str)
    }

    /// Pages in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.pages.iter().map(|(n, t)| (*n, t.as_str()))
    }

    pub fn page_numbers(&self) -> Vec<u32> {
        self.pages.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Highest page number present, 0 when empty.
    pub fn max_page(&self) -> u32 {
        self.pages.keys().next_back().copied().unwrap_or(0)
    }

    /// Total characters across all pages.
    pub fn char_count(&self) -> usize {
        self.pages.values().map(|t| t.chars().count()).sum()
    }

    /// Align keys to `1..=expected`: missing pages become empty text and
    /// pages beyond `expected` are dropped. `expected == 0` keeps the mapping.
    pub fn aligned_to(mut self, expected: u32) -> Self {
        if expected == 0 {
            return self;
        }

        let extracted = self.pages.len();
        let pages = (1..=expected)
            .map(|n| (n, self.pages.remove(&n).unwrap_or_default()))
            .collect();
        debug!("Aligned {} extracted pages to {} expected pages", extracted, expected);
        Self { pages }
    }
}

impl FromIterator<(u32, String)> for PageTexts {
    fn from_iter<T: IntoIterator<Item = (u32, String)>>(iter: T) -> Self {
        Self {
            pages: iter.into_iter().collect(),
        }
    }
}
