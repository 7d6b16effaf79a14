//! Core library for read-pdf.
//!
//! This crate provides:
//! - Per-page text extraction from PDFs (and form-feed separated text)
//! - Heuristic detection of TOC-like, table and chart pages
//! - Regex search over page text with word context
//! - Token-budget truncation of tool output

pub mod candidates;
pub mod error;
pub mod models;
pub mod pdf;
pub mod render;
pub mod search;
pub mod text;
pub mod toc;
pub mod tokens;

pub use candidates::{candidate_pages, chart_pages, table_pages, CandidateKind};
pub use error::{PdfError, ReadPdfError, Result, SearchError, TruncationError};
pub use models::config::ReadPdfConfig;
pub use models::record::{CandidateRecord, SearchRecord, TextMeta, ToolInfo, BEST_EFFORT_NOTE};
pub use pdf::{open_source, PageSource, PageTexts};
pub use render::{render_with_page_markers, PageFilter, RenderedText};
pub use search::{search_pages, PageSearcher, SearchMatch};
pub use toc::{classify_page, select_toc_like_pages, TocPageClassifier, TocPageSelector};
pub use tokens::{load_counter, truncate_to_token_budget, TokenCounter};

/// Version string reported in output records.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
