//! Plain-text documents with form-feed page breaks, as written by `pdftotext`.

use std::path::Path;

use super::{PageSource, PageText};

/// Page separator in text dumps.
pub const PAGE_BREAK: char = '\x0C';

/// A text dump of a document, one page per form-feed-separated chunk.
#[derive(Debug, Clone, Default)]
pub struct TextDocument {
    text: String,
}

impl TextDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn from_file(path: &Path) -> crate::Result<Self> {
        Ok(Self::new(std::fs::read_to_string(path)?))
    }

    /// Split into pages. A trailing page break does not start a new page.
    pub fn pages(&self) -> Vec<PageText> {
        let text = self.text.strip_suffix(PAGE_BREAK).unwrap_or(&self.text);
        if text.is_empty() {
            return Vec::new();
        }

        text.split(PAGE_BREAK)
            .enumerate()
            .map(|(i, page)| PageText::new(i as u32 + 1, page))
            .collect()
    }
}

impl PageSource for TextDocument {
    fn page_texts(&self) -> crate::Result<Vec<PageText>> {
        Ok(self.pages())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_form_feed_pages() {
        let doc = TextDocument::new("Offert\x0CÅrspremie 37 240 kr\x0C");
        let pages = doc.pages();
        assert_eq!(
            pages,
            vec![
                PageText::new(1, "Offert"),
                PageText::new(2, "Årspremie 37 240 kr"),
            ]
        );
    }

    #[test]
    fn test_single_page_and_empty() {
        assert_eq!(TextDocument::new("bara text").pages().len(), 1);
        assert!(TextDocument::new("").pages().is_empty());
    }

    #[test]
    fn test_empty_pages_are_kept() {
        let pages = TextDocument::new("a\x0C\x0Cc").pages();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[1].text, "");
        assert_eq!(pages[2].number, 3);
    }
}
