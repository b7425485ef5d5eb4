//! PDF page text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::{debug, trace, warn};

use super::{PageSource, PageText, PdfProcessor, Result};
use crate::error::PdfError;

/// PDF page-text extractor.
///
/// Text comes from pdf-extract, which keeps the reading order of offer
/// tables better than lopdf; lopdf is used to open and decrypt the file and
/// as a per-page fallback when pdf-extract gives up on the whole document.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
    min_text_length: usize,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self::with_min_text_length(50)
    }

    /// Create an extractor that warns when a document has less text than `min_text_length`.
    pub fn with_min_text_length(min_text_length: usize) -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
            min_text_length,
        }
    }

    fn document(&self) -> Result<&Document> {
        self.document
            .as_ref()
            .ok_or_else(|| PdfError::Parse("No document loaded".to_string()))
    }

    fn extract_pages_lopdf(&self) -> Result<Vec<PageText>> {
        let doc = self.document()?;
        let pages = doc
            .get_pages()
            .keys()
            .map(|&number| {
                let text = self.extract_page_text(number).unwrap_or_else(|e| {
                    trace!("No text on page {}: {}", number, e);
                    String::new()
                });
                PageText::new(number, text)
            })
            .collect();
        Ok(pages)
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Offers are often "protected" with an empty owner password
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

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

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_pages(&self) -> Result<Vec<PageText>> {
        self.document()?;

        let pages = match pdf_extract::extract_text_from_mem_by_pages(&self.raw_data) {
            Ok(texts) => texts
                .into_iter()
                .enumerate()
                .map(|(i, text)| PageText::new(i as u32 + 1, text))
                .collect(),
            Err(e) => {
                warn!("pdf-extract failed ({}), falling back to lopdf", e);
                self.extract_pages_lopdf()?
            }
        };

        let total: usize = pages.iter().map(|p| p.text.trim().len()).sum();
        if total < self.min_text_length {
            warn!(
                "Only {} characters of text in {} pages, the PDF is probably scanned",
                total,
                pages.len()
            );
        }

        Ok(pages)
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        let count = self.page_count();
        if page == 0 || page > count {
            return Err(PdfError::TextExtraction(format!(
                "page {} out of range 1..={}",
                page, count
            )));
        }

        self.document()?
            .extract_text(&[page])
            .map_err(|e| PdfError::TextExtraction(format!("page {}: {}", page, e)))
    }
}

impl PageSource for PdfExtractor {
    fn page_texts(&self) -> crate::Result<Vec<PageText>> {
        Ok(self.extract_pages()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{Object, Stream, dictionary};

    fn one_page_pdf(line: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![100.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(line)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut data = Vec::new();
        doc.save_to(&mut data).unwrap();
        data
    }

    #[test]
    fn test_single_page_text() {
        let mut extractor = PdfExtractor::new();
        extractor.load(&one_page_pdf("Antal Tandlakare 4")).unwrap();
        assert_eq!(extractor.page_count(), 1);

        let text = extractor.extract_page_text(1).unwrap();
        assert!(text.contains("Antal Tandlakare 4"));
        assert!(matches!(
            extractor.extract_page_text(2),
            Err(PdfError::TextExtraction(_))
        ));

        let pages = extractor.extract_pages_lopdf().unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].text.contains("Antal Tandlakare 4"));
    }

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
        assert!(extractor.extract_pages().is_err());
    }

    #[test]
    fn test_load_rejects_garbage() {
        let mut extractor = PdfExtractor::new();
        let err = extractor.load(b"not a pdf").unwrap_err();
        assert!(matches!(err, PdfError::Parse(_)));
    }

    #[test]
    fn test_page_out_of_range() {
        let extractor = PdfExtractor::new();
        assert!(matches!(
            extractor.extract_page_text(1),
            Err(PdfError::TextExtraction(_))
        ));
    }
}
