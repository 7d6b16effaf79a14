//! JSON records emitted by read-pdf.

use serde::{Deserialize, Serialize};

/// Note attached to every heuristic page-candidate record.
pub const BEST_EFFORT_NOTE: &str = "best-effort heuristics; may produce false positives/negatives; \
     confirm by reading the listed pages with 'read-pdf text <pdf>'";

/// Name and version of the tool producing a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub tool: String,
    pub tool_version: String,
}

impl ToolInfo {
    pub fn new(tool: impl Into<String>, tool_version: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            tool_version: tool_version.into(),
        }
    }
}

/// Pages that look like a given kind of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(flatten)]
    pub tool: ToolInfo,
    /// `"toc-pages"`, `"table-pages"` or `"chart-pages"`.
    pub mode: String,
    pub best_effort: bool,
    pub note: String,
    pub pdf_path: String,
    pub pdf_page_count: u32,
    pub pages: Vec<u32>,
}

/// One regex match with its surrounding words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    #[serde(flatten)]
    pub tool: ToolInfo,
    pub mode: String,
    pub pdf_path: String,
    pub page: u32,
    #[serde(rename = "match")]
    pub matched: String,
    /// Character offsets into the whitespace-collapsed page text.
    pub match_start_char: usize,
    pub match_end_char: usize,
    pub context_words: usize,
    pub context_before: String,
    pub context_after: String,
}

/// Metadata describing a page-marked text extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextMeta {
    pub engine: String,
    pub filter: String,
    pub toc_max_pages: usize,
    pub full_char_count: usize,
    pub selected_pages: Vec<u32>,
    pub selected_char_count: usize,
}
