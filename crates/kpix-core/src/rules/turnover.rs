//! Annual turnover and interruption period.

use tracing::debug;

use super::numbers::first_number_token;
use super::patterns::{INTERRUPTION_PTL, INTERRUPTION_SVEDEA, TURNOVER_KSEK_BLOCK, TURNOVER_PTL};
use super::{PatternFinder, Vendor, vendor_first};
use crate::models::fact::{Evidence, Fact};
use crate::pdf::PageText;

const KSEK: &str = "KSEK";
const KSEK_SCALE: f64 = 1000.0;

/// Annual turnover in SEK.
///
/// Only the detected vendor's rule is tried; a stray figure from the other
/// layout is worse than no figure.
pub fn find_turnover(pages: &[PageText], vendor: Vendor) -> Fact {
    if vendor.is_svedea() {
        find_turnover_ksek(pages)
    } else {
        PatternFinder::new([&*TURNOVER_PTL]).unit("kr").find(pages)
    }
}

/// Svedea: "Årsomsättning i KSEK" with the figures on the following line.
///
/// The line holds several columns ("10 000 10 000 0 0 0"); the first one is
/// the turnover in thousands.
pub fn find_turnover_ksek(pages: &[PageText]) -> Fact {
    for page in pages {
        let Some(caps) = TURNOVER_KSEK_BLOCK.captures(&page.text) else {
            continue;
        };
        let line = caps[1].trim();
        let Some(first) = first_number_token(line) else {
            debug!("Turnover block on page {} has no figure", page.number);
            continue;
        };

        let evidence = Evidence::new(page.number, format!("Årsomsättning i KSEK\n{}", line));
        return Fact::numeric(&first, Some(KSEK), KSEK_SCALE, evidence);
    }

    Fact::empty(Some(KSEK), KSEK_SCALE)
}

/// Interruption cover in months.
pub fn find_interruption_period(pages: &[PageText], vendor: Vendor) -> Fact {
    let rules = vendor_first(vendor, &[&*INTERRUPTION_PTL], &[&*INTERRUPTION_SVEDEA]);
    PatternFinder::new(rules).unit("månader").find(pages)
}
