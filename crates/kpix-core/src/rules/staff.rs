//! Staff head counts and treatment rooms.

use super::patterns::{
    DENTISTS_PTL, DENTISTS_SVEDEA, HYGIENISTS_PTL, HYGIENISTS_SVEDEA, JAW_SURGEONS_PTL,
    JAW_SURGEONS_SVEDEA, ORAL_SURGEONS_PTL, ORAL_SURGEONS_SVEDEA, ROOMS_PTL, ROOMS_SVEDEA,
};
use regex::Regex;

use super::{PatternFinder, Vendor, vendor_first};
use crate::models::fact::Fact;
use crate::pdf::PageText;

const COUNT_UNIT: &str = "st";

/// Head-count rules for `vendor`.
///
/// Svedea offers repeat "- Antal tandläkare 2,00" in the prosthetics section,
/// which the PTL wording would match, so Svedea documents only get Svedea rules.
fn count_rules<'a>(vendor: Vendor, ptl: &[&'a Regex], svedea: &[&'a Regex]) -> Vec<&'a Regex> {
    if vendor.is_svedea() {
        svedea.to_vec()
    } else {
        vendor_first(vendor, ptl, svedea)
    }
}

/// Number of dentists on the policy.
pub fn find_dentists(pages: &[PageText], vendor: Vendor) -> Fact {
    let rules = count_rules(vendor, &[&*DENTISTS_PTL], &[&*DENTISTS_SVEDEA]);
    PatternFinder::new(rules).unit(COUNT_UNIT).find(pages)
}

/// Number of dental hygienists on the policy.
pub fn find_hygienists(pages: &[PageText], vendor: Vendor) -> Fact {
    let rules = count_rules(vendor, &[&*HYGIENISTS_PTL], &[&*HYGIENISTS_SVEDEA]);
    PatternFinder::new(rules).unit(COUNT_UNIT).find(pages)
}

/// Number of oral or jaw surgeons on the policy.
pub fn find_oral_surgeons(pages: &[PageText], vendor: Vendor) -> Fact {
    let rules = count_rules(
        vendor,
        &[&*JAW_SURGEONS_PTL, &*ORAL_SURGEONS_PTL],
        &[&*JAW_SURGEONS_SVEDEA, &*ORAL_SURGEONS_SVEDEA],
    );
    PatternFinder::new(rules).unit(COUNT_UNIT).find(pages)
}

/// Treatment rooms, kept as written ("1-4/kök").
pub fn find_treatment_rooms(pages: &[PageText], vendor: Vendor) -> Fact {
    let rules = vendor_first(vendor, &[&*ROOMS_PTL], &[&*ROOMS_SVEDEA]);
    PatternFinder::new(rules).find_line(pages)
}
