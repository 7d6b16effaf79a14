//! Page text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::{debug, trace};

use super::{PageSource, PageTexts, Result};
use crate::error::PdfError;

/// PDF page text extractor.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Load a PDF from bytes.
    ///
    /// PDFs encrypted with an empty user password are decrypted; any other
    /// encryption is rejected.
    pub fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract re-parses the bytes, so hand it the decrypted form.
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSource for PdfExtractor {
    fn engine(&self) -> &'static str {
        "pdf-extract"
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn page_texts(&self) -> Result<PageTexts> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }

        let pages = pdf_extract::extract_text_from_mem_by_pages(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;

        for (i, text) in pages.iter().enumerate() {
            trace!("Page {}: {} chars", i + 1, text.chars().count());
        }

        // Pages the backend could not reach still get a (blank) entry.
        Ok(PageTexts::from_pages(pages).aligned_to(self.page_count()))
    }
}

/// Already-extracted text whose pages are separated by form feeds.
pub struct FormFeedText {
    pages: PageTexts,
}

impl FormFeedText {
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            pages: PageTexts::from_form_feed_text(text.as_ref()),
        }
    }
}

impl PageSource for FormFeedText {
    fn engine(&self) -> &'static str {
        "form-feed-text"
    }

    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_texts(&self) -> Result<PageTexts> {
        Ok(self.pages.clone())
    }
}
