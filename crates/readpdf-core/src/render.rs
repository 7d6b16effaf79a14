//! Page-marked text output.

use serde::{Deserialize, Serialize};

use crate::models::record::TextMeta;
use crate::pdf::PageTexts;
use crate::toc::TocPageSelector;

/// Which pages to include in the rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageFilter {
    /// Every page.
    All,
    /// Only TOC-like pages.
    Toc,
}

impl PageFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageFilter::All => "all",
            PageFilter::Toc => "toc",
        }
    }
}

/// Rendered text plus a description of what was included.
#[derive(Debug, Clone)]
pub struct RenderedText {
    pub text: String,
    pub meta: TextMeta,
}

impl RenderedText {
    /// The TOC filter ran and found nothing.
    pub fn is_empty_selection(&self) -> bool {
        self.meta.filter == PageFilter::Toc.as_str() && self.meta.selected_pages.is_empty()
    }
}

/// Marker line placed before each page.
pub fn page_marker(page: u32) -> String {
    format!("<!-- PAGE {page} -->\n")
}

/// Concatenate pages, each preceded by `<!-- PAGE n -->`.
pub fn render_with_page_markers(
    pages: &PageTexts,
    filter: PageFilter,
    selector: &TocPageSelector,
    toc_max_pages: usize,
    engine: &str,
) -> RenderedText {
    let selected = match filter {
        PageFilter::All => None,
        PageFilter::Toc => Some(selector.select(pages, toc_max_pages)),
    };

    let mut text = String::new();
    for (page, page_text) in pages.iter() {
        if selected.as_ref().is_some_and(|s| !s.contains(&page)) {
            continue;
        }
        text.push_str(&page_marker(page));
        text.push_str(page_text.trim_end());
        text.push('\n');
    }

    let meta = TextMeta {
        engine: engine.to_string(),
        filter: filter.as_str().to_string(),
        toc_max_pages,
        full_char_count: pages.char_count(),
        selected_pages: selected.unwrap_or_else(|| pages.page_numbers()),
        selected_char_count: text.chars().count(),
    };

    RenderedText { text, meta }
}
