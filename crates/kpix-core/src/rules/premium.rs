//! Annual premium.
//!
//! The premium label also appears in tables of previous years and
//! sub-covers, so each vendor's rule first looks at the pages where the
//! total is printed and only then scans the whole document.

use tracing::debug;

use super::patterns::{PREMIUM_PTL, PREMIUM_SVEDEA};
use super::{PatternFinder, Vendor, pages_mentioning};
use crate::models::fact::Fact;
use crate::pdf::PageText;

/// Pages a premium rule looks at first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageScope {
    /// Only page 1.
    FirstPage,
    /// Pages mentioning any of the phrases (lower case).
    Mentioning(&'static [&'static str]),
}

impl PageScope {
    fn select(&self, pages: &[PageText]) -> Vec<PageText> {
        match self {
            PageScope::FirstPage => pages.iter().filter(|p| p.number == 1).cloned().collect(),
            PageScope::Mentioning(markers) => pages_mentioning(pages, markers),
        }
    }
}

/// Annual premium in SEK.
pub fn find_premium(pages: &[PageText], vendor: Vendor) -> Fact {
    // PTL prints the invoice subtotal on page 1; Svedea on its offer pages.
    let (finder, scope) = if vendor.is_svedea() {
        (
            PatternFinder::new([&*PREMIUM_SVEDEA]).unit("kr"),
            PageScope::Mentioning(&["offert"]),
        )
    } else {
        (
            PatternFinder::new([&*PREMIUM_PTL]).unit("kr"),
            PageScope::FirstPage,
        )
    };

    let fact = finder.find(&scope.select(pages));
    if !fact.is_empty() {
        return fact;
    }

    debug!("Premium not found in {:?}, scanning all pages", scope);
    finder.find(pages)
}
