//! Shared state for the document subcommands: configuration, tool identity
//! and the stdout token budget.

use std::io::Write;
use std::path::Path;

use tracing::debug;

use readpdf_core::models::config::ReadPdfConfig;
use readpdf_core::models::record::ToolInfo;
use readpdf_core::pdf::{check_page_count, open_source, PageTexts};
use readpdf_core::toc::{TocPageClassifier, TocPageSelector};
use readpdf_core::tokens::{load_counter, parse_budget, truncate_to_token_budget, TokenCounter};

use super::config::load_config;

/// Page texts of one input plus what the backend reported about it.
pub struct LoadedDocument {
    pub pages: PageTexts,
    pub page_count: u32,
    pub engine: &'static str,
}

pub struct Context {
    pub config: ReadPdfConfig,
    pub tool: ToolInfo,
    max_output_tokens: usize,
    counter: Box<dyn TokenCounter>,
}

impl Context {
    /// Load configuration and resolve the output budget.
    ///
    /// An explicit `--max-output-tokens` wins over the configured value.
    pub fn load(config_path: Option<&str>, max_output_tokens: Option<i64>) -> anyhow::Result<Self> {
        let config = load_config(config_path)?;

        let max_output_tokens = match max_output_tokens {
            Some(n) => parse_budget(n)?,
            None => config.output.max_output_tokens,
        };

        let counter = load_counter();
        debug!(
            "Output budget: {} tokens ({})",
            max_output_tokens,
            counter.method()
        );

        Ok(Self {
            tool: ToolInfo::new(config.output.tool_name.clone(), readpdf_core::VERSION),
            config,
            max_output_tokens,
            counter,
        })
    }

    pub fn counter(&self) -> &dyn TokenCounter {
        self.counter.as_ref()
    }

    /// TOC page selector using the configured thresholds.
    pub fn toc_selector(&self) -> TocPageSelector {
        TocPageSelector::new(
            TocPageClassifier::new().with_thresholds(self.config.toc.thresholds.clone()),
        )
    }

    /// Open an input and extract all page texts, aligned to
    /// `1..=expected_pages` when a positive count is given.
    pub fn open(&self, input: &Path, expected_pages: Option<u32>) -> anyhow::Result<LoadedDocument> {
        let source = open_source(input)?;
        let page_count = source.page_count();
        let expected_pages = expected_pages.filter(|&n| n > 0);
        check_page_count(expected_pages, page_count);

        // The caller's page count wins: missing pages become blank and the
        // page-number bounds follow it.
        let mut pages = source.page_texts()?;
        if let Some(expected) = expected_pages {
            pages = pages.aligned_to(expected);
        }
        debug!(
            "Extracted {} pages ({} chars) from {} using {}",
            pages.len(),
            pages.char_count(),
            input.display(),
            source.engine()
        );

        Ok(LoadedDocument {
            pages,
            page_count,
            engine: source.engine(),
        })
    }

    /// Write `payload` to stdout, truncated to the output budget.
    pub fn emit(&self, payload: &str) -> anyhow::Result<()> {
        let text = truncate_to_token_budget(payload, self.max_output_tokens, self.counter());
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
