//! Per-page TOC-likeness classifier.
//!
//! Line-level signals are aggregated into a [`PageSignals`] value, then a flat
//! list of named rules decides whether the page belongs to a table of
//! contents, index, glossary or list-of-figures section.

use serde::Serialize;
use tracing::trace;

use crate::models::config::TocThresholds;

use super::hints::{heading_hint_hits, HintHits};
use super::lines::{looks_like_nav_entry_line, looks_like_term_definition_line, split_lines};

/// Aggregated line-level signals for one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSignals {
    /// Heading hints found on the page.
    pub hints: HintHits,
    /// Lines short enough to be counted.
    pub considered: usize,
    /// Lines that look like navigation entries.
    pub nav_entry_lines: usize,
    /// Lines that look like glossary entries.
    pub term_def_lines: usize,
    /// Lines containing a dot leader.
    pub dot_leader_lines: usize,
}

impl PageSignals {
    /// Collect signals from raw page text.
    pub fn collect(page_text: &str, max_page: u32, max_line_len: usize) -> Self {
        let mut signals = Self {
            hints: heading_hint_hits(page_text),
            ..Self::default()
        };

        for line in split_lines(page_text).map(str::trim).filter(|l| !l.is_empty()) {
            if line.chars().count() > max_line_len {
                continue;
            }
            signals.considered += 1;

            if line.contains("...") || line.contains("··") {
                signals.dot_leader_lines += 1;
            }
            if looks_like_nav_entry_line(line, Some(max_page)) {
                signals.nav_entry_lines += 1;
            }
            if looks_like_term_definition_line(line) {
                signals.term_def_lines += 1;
            }
        }

        signals
    }

    pub fn nav_ratio(&self) -> f64 {
        ratio(self.nav_entry_lines, self.considered)
    }

    pub fn term_def_ratio(&self) -> f64 {
        ratio(self.term_def_lines, self.considered)
    }
}

fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// The rules that can select a page, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TocRule {
    /// Standalone TOC-style heading plus some entries or a dot leader.
    StrongHeading,
    /// Any hint word plus a solid share of nav entries.
    HintedEntries,
    /// Continuation of a selected page: nav entries without a heading.
    ContinuedEntries,
    /// Continuation of a selected page: glossary entries without a heading.
    ContinuedGlossary,
    /// Index pages: many short lines with page-number lists.
    HintedIndex,
    /// Glossary or abbreviation pages under a standalone heading.
    HeadedGlossary,
    /// No keyword at all, but a dense dot-leader TOC structure.
    StructureOnly,
}

impl TocRule {
    pub const ALL: [TocRule; 7] = [
        TocRule::StrongHeading,
        TocRule::HintedEntries,
        TocRule::ContinuedEntries,
        TocRule::ContinuedGlossary,
        TocRule::HintedIndex,
        TocRule::HeadedGlossary,
        TocRule::StructureOnly,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TocRule::StrongHeading => "strong_heading",
            TocRule::HintedEntries => "hinted_entries",
            TocRule::ContinuedEntries => "continued_entries",
            TocRule::ContinuedGlossary => "continued_glossary",
            TocRule::HintedIndex => "hinted_index",
            TocRule::HeadedGlossary => "headed_glossary",
            TocRule::StructureOnly => "structure_only",
        }
    }

    /// Evaluate this rule against page signals.
    pub fn matches(&self, s: &PageSignals, prev_selected: bool, t: &TocThresholds) -> bool {
        let nav = s.nav_entry_lines;
        let nav_ratio = s.nav_ratio();
        let term_defs = s.term_def_lines;
        let term_def_ratio = s.term_def_ratio();

        match self {
            TocRule::StrongHeading => {
                s.hints.has_strong()
                    && (nav >= t.strong_heading_min_nav
                        || nav_ratio >= t.strong_heading_min_nav_ratio
                        || s.dot_leader_lines >= t.strong_heading_min_dot_leaders)
            }
            TocRule::HintedEntries => {
                s.hints.has_any() && nav >= t.hinted_min_nav && nav_ratio >= t.hinted_min_nav_ratio
            }
            TocRule::ContinuedEntries => {
                prev_selected
                    && nav >= t.continuation_min_nav
                    && nav_ratio >= t.continuation_min_nav_ratio
            }
            TocRule::ContinuedGlossary => {
                prev_selected
                    && term_defs >= t.glossary_min_term_defs
                    && term_def_ratio >= t.glossary_min_term_def_ratio
            }
            TocRule::HintedIndex => {
                s.hints.has_any() && nav >= t.index_min_nav && nav_ratio >= t.index_min_nav_ratio
            }
            TocRule::HeadedGlossary => {
                s.hints.has_strong()
                    && term_defs >= t.glossary_min_term_defs
                    && term_def_ratio >= t.glossary_min_term_def_ratio
            }
            TocRule::StructureOnly => {
                nav >= t.structural_min_nav
                    && nav_ratio >= t.structural_min_nav_ratio
                    && s.dot_leader_lines >= t.structural_min_dot_leaders
            }
        }
    }
}

impl std::fmt::Display for TocRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of classifying one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageDecision {
    /// First rule that matched, if any.
    pub rule: Option<TocRule>,
    /// Signals the decision was based on.
    pub signals: PageSignals,
}

impl PageDecision {
    pub fn is_selected(&self) -> bool {
        self.rule.is_some()
    }
}

/// Page classifier with configurable thresholds.
#[derive(Debug, Clone, Default)]
pub struct TocPageClassifier {
    thresholds: TocThresholds,
}

impl TocPageClassifier {
    /// Create a classifier with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom thresholds.
    pub fn with_thresholds(mut self, thresholds: TocThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn thresholds(&self) -> &TocThresholds {
        &self.thresholds
    }

    /// Classify one page. `max_page` of 0 disables page-number bounds checks.
    pub fn classify(&self, page_text: &str, prev_selected: bool, max_page: u32) -> PageDecision {
        if split_lines(page_text).all(|l| l.trim().is_empty()) {
            return PageDecision {
                rule: None,
                signals: PageSignals::default(),
            };
        }

        let signals =
            PageSignals::collect(page_text, max_page, self.thresholds.max_considered_line_len);
        if signals.considered == 0 {
            return PageDecision { rule: None, signals };
        }

        let rule = TocRule::ALL
            .into_iter()
            .find(|rule| rule.matches(&signals, prev_selected, &self.thresholds));

        trace!(
            "page signals: considered={} nav={} term_defs={} dot_leaders={} any_hint={} strong={} -> {:?}",
            signals.considered,
            signals.nav_entry_lines,
            signals.term_def_lines,
            signals.dot_leader_lines,
            signals.hints.has_any(),
            signals.hints.has_strong(),
            rule
        );

        PageDecision { rule, signals }
    }
}

/// Classify one page with the default thresholds.
pub fn classify_page(page_text: &str, prev_selected: bool, max_page: u32) -> PageDecision {
    TocPageClassifier::new().classify(page_text, prev_selected, max_page)
}
