//! Configuration structures for the read-pdf pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for read-pdf.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadPdfConfig {
    /// TOC-like page detection configuration.
    pub toc: TocConfig,

    /// Output shaping configuration.
    pub output: OutputConfig,

    /// Regex search configuration.
    pub search: SearchConfig,
}

/// TOC-like page detection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    /// Maximum number of pages returned by the TOC filter.
    pub max_pages: usize,

    /// Page classifier thresholds.
    pub thresholds: TocThresholds,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            max_pages: 5,
            thresholds: TocThresholds::default(),
        }
    }
}

/// Thresholds used by the page classifier rules.
///
/// All comparisons are inclusive (`>=`). The defaults are hand-tuned and
/// should only be changed together with a corpus check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TocThresholds {
    /// Lines longer than this (in characters) are treated as prose and skipped.
    pub max_considered_line_len: usize,

    /// Rule a: nav entries required next to a strong heading.
    pub strong_heading_min_nav: usize,
    /// Rule a: nav ratio alternative next to a strong heading.
    pub strong_heading_min_nav_ratio: f64,
    /// Rule a: dot-leader lines alternative next to a strong heading.
    pub strong_heading_min_dot_leaders: usize,

    /// Rule b: nav entries required with any hint.
    pub hinted_min_nav: usize,
    /// Rule b: nav ratio required with any hint.
    pub hinted_min_nav_ratio: f64,

    /// Rule c: nav entries required on a continuation page.
    pub continuation_min_nav: usize,
    /// Rule c: nav ratio required on a continuation page.
    pub continuation_min_nav_ratio: f64,

    /// Rules d and f: term-definition lines required.
    pub glossary_min_term_defs: usize,
    /// Rules d and f: term-definition ratio required.
    pub glossary_min_term_def_ratio: f64,

    /// Rule e: nav entries required for index-style pages with any hint.
    pub index_min_nav: usize,
    /// Rule e: nav ratio required for index-style pages with any hint.
    pub index_min_nav_ratio: f64,

    /// Rule g: nav entries required without any keyword.
    pub structural_min_nav: usize,
    /// Rule g: nav ratio required without any keyword.
    pub structural_min_nav_ratio: f64,
    /// Rule g: dot-leader lines required without any keyword.
    pub structural_min_dot_leaders: usize,
}

impl Default for TocThresholds {
    fn default() -> Self {
        Self {
            max_considered_line_len: 260,
            strong_heading_min_nav: 2,
            strong_heading_min_nav_ratio: 0.12,
            strong_heading_min_dot_leaders: 1,
            hinted_min_nav: 6,
            hinted_min_nav_ratio: 0.2,
            continuation_min_nav: 4,
            continuation_min_nav_ratio: 0.15,
            glossary_min_term_defs: 6,
            glossary_min_term_def_ratio: 0.2,
            index_min_nav: 10,
            index_min_nav_ratio: 0.25,
            structural_min_nav: 12,
            structural_min_nav_ratio: 0.35,
            structural_min_dot_leaders: 2,
        }
    }
}

/// Output shaping configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Token budget applied to every payload written to stdout (0 = unlimited).
    pub max_output_tokens: usize,

    /// Tool name reported in JSON records.
    pub tool_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_output_tokens: 20_000,
            tool_name: "read-pdf".to_string(),
        }
    }
}

/// Regex search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Words of context captured on each side of a match.
    pub context_words: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { context_words: 50 }
    }
}

impl ReadPdfConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ReadPdfConfig =
            serde_json::from_str(r#"{"toc": {"max_pages": 3}}"#).unwrap();
        assert_eq!(config.toc.max_pages, 3);
        assert_eq!(config.toc.thresholds, TocThresholds::default());
        assert_eq!(config.output.max_output_tokens, 20_000);
        assert_eq!(config.search.context_words, 50);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = ReadPdfConfig::default();
        config.output.max_output_tokens = 0;
        config.toc.thresholds.hinted_min_nav = 7;
        config.save(&path).unwrap();

        let loaded = ReadPdfConfig::from_file(&path).unwrap();
        assert_eq!(loaded.output.max_output_tokens, 0);
        assert_eq!(loaded.toc.thresholds.hinted_min_nav, 7);
    }

    #[test]
    fn test_invalid_json_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ReadPdfConfig::from_file(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
