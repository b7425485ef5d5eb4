//! Document page sources.
//!
//! Extraction only ever sees a list of [`PageText`]; where the text came from
//! (a PDF, a plain-text dump, a test fixture) is hidden behind [`PageSource`].

mod extractor;
mod text;

pub use extractor::PdfExtractor;
pub use text::{PAGE_BREAK, TextDocument};

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{KpixError, PdfError};
use crate::models::config::PdfConfig;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Text of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// Page number (1-indexed).
    pub number: u32,
    /// Extracted text, empty when the page has none.
    pub text: String,
}

impl PageText {
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// Anything that can produce the ordered page texts of a document.
pub trait PageSource {
    /// Page texts in page order.
    fn page_texts(&self) -> crate::Result<Vec<PageText>>;
}

impl PageSource for [PageText] {
    fn page_texts(&self) -> crate::Result<Vec<PageText>> {
        Ok(self.to_vec())
    }
}

impl PageSource for Vec<PageText> {
    fn page_texts(&self) -> crate::Result<Vec<PageText>> {
        Ok(self.clone())
    }
}

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract the text of every page, in order.
    fn extract_pages(&self) -> Result<Vec<PageText>>;

    /// Extract text from a specific page.
    fn extract_page_text(&self, page: u32) -> Result<String>;
}

/// Read a document from disk, choosing the reader by file extension.
///
/// `max_pages` of zero keeps every page.
pub fn open_document(path: &Path, config: &PdfConfig) -> crate::Result<Vec<PageText>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    debug!("Opening {} as {:?}", path.display(), extension);

    let mut pages = match extension.as_str() {
        "pdf" => {
            let data = std::fs::read(path)?;
            let mut extractor = PdfExtractor::with_min_text_length(config.min_text_length);
            extractor.load(&data)?;
            extractor.page_texts()?
        }
        "txt" => TextDocument::from_file(path)?.page_texts()?,
        _ => return Err(KpixError::UnsupportedFormat(path.display().to_string())),
    };

    if config.max_pages > 0 && pages.len() > config.max_pages {
        debug!("Keeping first {} of {} pages", config.max_pages, pages.len());
        pages.truncate(config.max_pages);
    }

    info!("Read {} pages from {}", pages.len(), path.display());
    Ok(pages)
}
