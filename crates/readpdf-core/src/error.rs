//! Error types for the readpdf-core library.

use thiserror::Error;

/// Main error type for the read-pdf library.
#[derive(Error, Debug)]
pub enum ReadPdfError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Search error.
    #[error("search error: {0}")]
    Search(#[from] SearchError),

    /// Truncation error.
    #[error("truncation error: {0}")]
    Truncation(#[from] TruncationError),

    /// Input file does not exist or is not a regular file.
    #[error("input not found: {0}")]
    InputNotFound(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to regex search.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The user supplied pattern does not compile.
    #[error("invalid regex: {0}")]
    InvalidRegex(#[from] regex::Error),
}

/// Errors related to token-budget truncation.
#[derive(Error, Debug)]
pub enum TruncationError {
    /// Token budgets must be zero (disabled) or positive.
    #[error("max tokens must be >= 0, got {0}")]
    NegativeBudget(i64),
}

/// Result type for the read-pdf library.
pub type Result<T> = std::result::Result<T, ReadPdfError>;
