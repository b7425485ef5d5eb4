//! Error types for the kpix-core library.

use thiserror::Error;

/// Main error type for the kpix library.
#[derive(Error, Debug)]
pub enum KpixError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The document type has no page-text adapter.
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),
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

/// A token that does not read as a number once locale separators are removed.
///
/// Finders never let this escape: they keep the raw text and drop the value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a number: {text:?}")]
pub struct ParseError {
    /// The text as it was handed to the normalizer.
    pub text: String,
}

impl ParseError {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Result type for the kpix library.
pub type Result<T> = std::result::Result<T, KpixError>;
