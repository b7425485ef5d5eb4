//! Rule-based KPI finders for PTL and Svedea documents.
//!
//! Every finder is an ordered list of patterns scanned page by page: the
//! earliest page wins, and within a page the earlier pattern wins. There is no
//! scoring; ambiguity is resolved by the order of the rules.

pub mod location;
pub mod numbers;
pub mod patterns;
pub mod premium;
pub mod prosthetics;
pub mod sick_leave;
pub mod staff;
pub mod turnover;
pub mod vendor;

pub use numbers::{first_number_token, format_number, parse_number};
pub use vendor::{Vendor, detect_vendor};

use regex::Regex;
use tracing::trace;

use crate::models::fact::{Evidence, Fact};
use crate::pdf::PageText;

/// A successful pattern hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Page the pattern matched on.
    pub page: u32,
    /// Capture group 1, trimmed.
    pub raw: String,
    /// Whole match, trimmed.
    pub snippet: String,
}

impl PatternMatch {
    pub fn evidence(&self) -> Evidence {
        Evidence::new(self.page, self.snippet.clone())
    }
}

/// An ordered list of patterns with the unit and scale of what they capture.
#[derive(Debug, Clone)]
pub struct PatternFinder<'a> {
    patterns: Vec<&'a Regex>,
    unit: Option<&'a str>,
    scale: f64,
}

impl<'a> PatternFinder<'a> {
    /// Patterns are tried in the given order.
    pub fn new(patterns: impl IntoIterator<Item = &'a Regex>) -> Self {
        Self {
            patterns: patterns.into_iter().collect(),
            unit: None,
            scale: 1.0,
        }
    }

    /// Unit label of the captured text.
    pub fn unit(mut self, unit: &'a str) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Multiplier from the captured number to the canonical value.
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// First hit across the pages, page-major then pattern order.
    pub fn first_match(&self, pages: &[PageText]) -> Option<PatternMatch> {
        for page in pages {
            for rx in &self.patterns {
                let Some(caps) = rx.captures(&page.text) else {
                    continue;
                };
                let Some(group) = caps.get(1) else {
                    continue;
                };
                let whole = caps.get(0).map_or("", |m| m.as_str());
                trace!("Pattern {} matched on page {}", rx.as_str(), page.number);
                return Some(PatternMatch {
                    page: page.number,
                    raw: group.as_str().trim().to_string(),
                    snippet: whole.trim().to_string(),
                });
            }
        }
        None
    }

    /// Numeric fact from the first hit, or an empty fact carrying unit and scale.
    pub fn find(&self, pages: &[PageText]) -> Fact {
        match self.first_match(pages) {
            Some(m) => Fact::numeric(&m.raw, self.unit, self.scale, m.evidence()),
            None => Fact::empty(self.unit, self.scale),
        }
    }

    /// Free-text fact from the first hit.
    pub fn find_line(&self, pages: &[PageText]) -> Fact {
        match self.first_match(pages) {
            Some(m) => Fact::text(&m.raw, m.evidence()),
            None => Fact::none(),
        }
    }
}

/// Numeric fact from the first of `patterns` to match.
pub fn find_first(pages: &[PageText], patterns: &[&Regex], unit: Option<&str>, scale: f64) -> Fact {
    let finder = PatternFinder::new(patterns.iter().copied()).scale(scale);
    match unit {
        Some(unit) => finder.unit(unit).find(pages),
        None => finder.find(pages),
    }
}

/// Free-text fact from the first of `patterns` to match.
pub fn find_first_line(pages: &[PageText], patterns: &[&Regex]) -> Fact {
    PatternFinder::new(patterns.iter().copied()).find_line(pages)
}

/// The detected vendor's rules first, then the other vendor's.
pub(crate) fn vendor_first<'a>(vendor: Vendor, ptl: &[&'a Regex], svedea: &[&'a Regex]) -> Vec<&'a Regex> {
    let (first, second) = if vendor.is_svedea() { (svedea, ptl) } else { (ptl, svedea) };
    first.iter().chain(second.iter()).copied().collect()
}

/// Pages containing any of `markers`, ignoring case.
pub(crate) fn pages_mentioning(pages: &[PageText], markers: &[&str]) -> Vec<PageText> {
    let markers: Vec<String> = markers.iter().map(|m| m.to_lowercase()).collect();
    pages
        .iter()
        .filter(|p| {
            let lower = p.text.to_lowercase();
            markers.iter().any(|m| lower.contains(m.as_str()))
        })
        .cloned()
        .collect()
}
