//! Core library for dental-practice insurance offer analysis.
//!
//! This crate provides:
//! - Page text from PDFs and plain-text dumps
//! - Vendor detection (PTL, Svedea) and rule-based KPI extraction with evidence
//! - Side-by-side comparison of a current policy and a new offer
//! - The Swedish customer letter presenting the offer

pub mod compare;
pub mod error;
pub mod extract;
pub mod letter;
pub mod models;
pub mod overrides;
pub mod pdf;
pub mod rules;

pub use compare::{Comparison, ComparisonRow};
pub use error::{KpixError, ParseError, PdfError, Result};
pub use extract::KpiExtractor;
pub use letter::{LetterInput, render_letter};
pub use models::{
    DocumentKpis, Evidence, Fact, KpiMap, KpiName, KpixConfig, NO_DATA,
};
pub use overrides::resolve;
pub use pdf::{PageSource, PageText, PdfExtractor, PdfProcessor, TextDocument, open_document};
pub use rules::{Vendor, detect_vendor};
