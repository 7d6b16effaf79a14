//! Caption-based page candidates for tables and charts.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::pdf::PageTexts;
use crate::text::collapse_whitespace;
use crate::toc::TocPageSelector;

/// Reference number after a caption word: "3", "A2", "2.1", "4-1" or a roman numeral.
const REF_NUM: &str = r"(?:[A-Z]?\d+(?:[.\-]\d+)*|[ivxlcdm]{1,10})";

/// Optional "No." / "Nº" / "num." marker between caption word and number.
const NUMBER_MARKER: &str = r"(?:no\.?|n[oº]\.?|num\.?|n\s*°)?";

lazy_static! {
    pub static ref TABLE_CAPTION: Regex = Regex::new(&format!(
        r"(?i)\b(?:table|tabla|tableau|cuadro)\s*{NUMBER_MARKER}\s*[:.\-]?\s*(?P<num>{REF_NUM})\b"
    )).unwrap();

    pub static ref CHART_CAPTION: Regex = Regex::new(&format!(
        r"(?i)\b(?:figure|fig\.?|figura|chart|graph|graphic|graphique|gr[aá]fico|grafico|diagram|diagrama|diagramme|sch[eé]ma|schema|illustration)\s*{NUMBER_MARKER}\s*[:.\-]?\s*(?P<num>{REF_NUM})\b"
    )).unwrap();
}

/// Kind of page candidate to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    Toc,
    Table,
    Chart,
}

impl CandidateKind {
    /// Mode string used in output records.
    pub fn mode(&self) -> &'static str {
        match self {
            CandidateKind::Toc => "toc-pages",
            CandidateKind::Table => "table-pages",
            CandidateKind::Chart => "chart-pages",
        }
    }
}

/// Pages whose collapsed text matches `pattern` at least once, ascending.
fn pages_matching(pages: &PageTexts, pattern: &Regex) -> Vec<u32> {
    pages
        .iter()
        .filter(|(_, text)| {
            let collapsed = collapse_whitespace(text);
            !collapsed.is_empty() && pattern.is_match(&collapsed)
        })
        .map(|(page, _)| page)
        .collect()
}

/// Pages mentioning a table caption such as "Table 3" or "Cuadro Nº 2".
pub fn table_pages(pages: &PageTexts) -> Vec<u32> {
    pages_matching(pages, &TABLE_CAPTION)
}

/// Pages mentioning a figure/chart caption such as "Figure 2.1" or "Gráfico 4".
pub fn chart_pages(pages: &PageTexts) -> Vec<u32> {
    pages_matching(pages, &CHART_CAPTION)
}

/// Candidate pages of the requested kind.
pub fn candidate_pages(
    pages: &PageTexts,
    kind: CandidateKind,
    selector: &TocPageSelector,
    toc_max_pages: usize,
) -> Vec<u32> {
    match kind {
        CandidateKind::Toc => selector.select(pages, toc_max_pages),
        CandidateKind::Table => table_pages(pages),
        CandidateKind::Chart => chart_pages(pages),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc() -> PageTexts {
        PageTexts::from_pages([
            "Introduction with no captions at all.",
            "Results are in Table 3\nand more text.",
            "Figure 2.1: growth over time",
            "",
            "Véase el Cuadro Nº 4 y el Gráfico 7.",
            "The tables below are described in prose only.",
        ])
    }

    #[test]
    fn test_table_captions() {
        assert!(TABLE_CAPTION.is_match("Table 3"));
        assert!(TABLE_CAPTION.is_match("TABLE A2"));
        assert!(TABLE_CAPTION.is_match("Tabla no. 12"));
        assert!(TABLE_CAPTION.is_match("Tableau IV"));
        assert!(!TABLE_CAPTION.is_match("the table of results"));
        assert!(!TABLE_CAPTION.is_match("tables"));
    }

    #[test]
    fn test_chart_captions() {
        assert!(CHART_CAPTION.is_match("Fig. 4"));
        assert!(CHART_CAPTION.is_match("figura 1-2"));
        assert!(CHART_CAPTION.is_match("Schéma 3"));
        assert!(CHART_CAPTION.is_match("Illustration: 9"));
        assert!(!CHART_CAPTION.is_match("a figure of speech"));
    }

    #[test]
    fn test_table_and_chart_pages() {
        let pages = doc();
        assert_eq!(table_pages(&pages), vec![2, 5]);
        assert_eq!(chart_pages(&pages), vec![3, 5]);
    }

    #[test]
    fn test_candidate_kind_modes() {
        assert_eq!(CandidateKind::Toc.mode(), "toc-pages");
        assert_eq!(CandidateKind::Table.mode(), "table-pages");
        assert_eq!(CandidateKind::Chart.mode(), "chart-pages");
    }

    #[test]
    fn test_candidate_pages_dispatch() {
        let pages = doc();
        let selector = TocPageSelector::default();
        assert_eq!(
            candidate_pages(&pages, CandidateKind::Table, &selector, 5),
            vec![2, 5]
        );
        assert!(candidate_pages(&pages, CandidateKind::Toc, &selector, 5).is_empty());
    }
}
