//! Detection of TOC-like pages: tables of contents, indexes, glossaries and
//! lists of figures or tables.

mod hints;
mod lines;
mod page;
pub mod patterns;
mod selector;

pub use hints::{heading_hint_hits, HintHits, HEADING_HINTS, STRONG_HEADING_HINTS};
pub use lines::{
    looks_like_heading_line, looks_like_nav_entry_line, looks_like_term_definition_line,
    split_lines,
};
pub use page::{classify_page, PageDecision, PageSignals, TocPageClassifier, TocRule};
pub use selector::{select_toc_like_pages, TocPageSelector};
