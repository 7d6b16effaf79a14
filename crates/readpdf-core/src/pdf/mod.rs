//! Page text sources: PDF documents and form-feed separated text.

mod extractor;
mod pages;

pub use extractor::{FormFeedText, PdfExtractor};
pub use pages::{PageTexts, FORM_FEED};

use std::path::Path;

use tracing::warn;

use crate::error::{PdfError, ReadPdfError};

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for anything that yields per-page plain text.
pub trait PageSource {
    /// Short name of the extraction backend, reported in text metadata.
    fn engine(&self) -> &'static str;

    /// Number of pages reported by the document itself.
    fn page_count(&self) -> u32;

    /// Extract text for every page, keyed by 1-based page number.
    fn page_texts(&self) -> Result<PageTexts>;
}

/// Open `path` as a page source, choosing the backend by extension.
///
/// `.pdf` files go through the PDF backend; anything else is read as UTF-8
/// text with form-feed page separators.
pub fn open_source(path: &Path) -> crate::Result<Box<dyn PageSource>> {
    if !path.is_file() {
        return Err(ReadPdfError::InputNotFound(path.display().to_string()));
    }

    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        let data = std::fs::read(path)?;
        let mut extractor = PdfExtractor::new();
        extractor.load(&data)?;
        Ok(Box::new(extractor))
    } else {
        let bytes = std::fs::read(path)?;
        Ok(Box::new(FormFeedText::new(String::from_utf8_lossy(&bytes))))
    }
}

/// Warn when the caller's expected page count disagrees with the document.
pub fn check_page_count(expected: Option<u32>, actual: u32) {
    if let Some(expected) = expected.filter(|&n| n > 0 && n != actual) {
        warn!("page count mismatch: expected={} actual={}", expected, actual);
    }
}
