//! Document-level selection of TOC-like pages.

use std::ops::ControlFlow;

use tracing::debug;

use crate::pdf::PageTexts;

use super::page::{PageDecision, TocPageClassifier};

/// Running state threaded through the page scan.
#[derive(Debug, Default)]
struct SelectionState {
    prev_selected: bool,
    selected: Vec<u32>,
}

impl SelectionState {
    fn advance(mut self, page: u32, decision: &PageDecision) -> Self {
        self.prev_selected = decision.is_selected();
        if let Some(rule) = decision.rule {
            debug!("Page {} selected as TOC-like by rule {}", page, rule);
            self.selected.push(page);
        }
        self
    }
}

/// Scans pages in order and keeps the TOC-like ones.
#[derive(Debug, Clone, Default)]
pub struct TocPageSelector {
    classifier: TocPageClassifier,
}

impl TocPageSelector {
    pub fn new(classifier: TocPageClassifier) -> Self {
        Self { classifier }
    }

    /// Select at most `max_selected` pages, in ascending page order.
    ///
    /// The scan stops as soon as the limit is reached. Page-number bounds
    /// checks use the highest page number in `pages`.
    pub fn select(&self, pages: &PageTexts, max_selected: usize) -> Vec<u32> {
        let max_page = pages.max_page();

        let flow = pages
            .iter()
            .try_fold(SelectionState::default(), |state, (page, text)| {
                if state.selected.len() >= max_selected {
                    return ControlFlow::Break(state);
                }
                let decision = self.classifier.classify(text, state.prev_selected, max_page);
                ControlFlow::Continue(state.advance(page, &decision))
            });

        let (ControlFlow::Break(state) | ControlFlow::Continue(state)) = flow;
        state.selected
    }
}

/// Select TOC-like pages with the default thresholds.
pub fn select_toc_like_pages(pages: &PageTexts, max_pages: usize) -> Vec<u32> {
    TocPageSelector::default().select(pages, max_pages)
}
