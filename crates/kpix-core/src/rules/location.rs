//! Insured location (address of the practice).
//!
//! Three tiers, most reliable first:
//! 1. an explicit "Försäkringsställe(n)" label,
//! 2. a vendor section anchor (Svedea prints "Town, Street 64" under the
//!    property-insurance heading),
//! 3. the address block at the top of page 1, which may as well be the
//!    insurer's own address.

use tracing::debug;

use super::patterns::{LOCATION_LABEL, LOCATION_SVEDEA_SECTION, POSTAL_LINE};
use super::{PatternFinder, Vendor};
use crate::models::fact::{Evidence, Fact};
use crate::pdf::PageText;

/// How many non-empty lines of page 1 count as the document header.
const HEADER_LINES: usize = 15;

/// Insured location as free text.
pub fn find_location(pages: &[PageText], vendor: Vendor) -> Fact {
    let labeled = PatternFinder::new([&*LOCATION_LABEL]).find_line(pages);
    if !labeled.is_empty() {
        debug!("Location from label");
        return labeled;
    }

    if vendor.is_svedea() {
        let anchored = find_svedea_section_location(pages);
        if !anchored.is_empty() {
            debug!("Location from Svedea property section");
            return anchored;
        }
    }

    let header = find_header_address(pages);
    if !header.is_empty() {
        debug!("Location from page 1 address block");
    }
    header
}

/// Svedea: the line right below "EGENDOMSFÖRSÄKRING SJÄLVRISK".
fn find_svedea_section_location(pages: &[PageText]) -> Fact {
    for page in pages {
        if let Some(caps) = LOCATION_SVEDEA_SECTION.captures(&page.text) {
            let location = caps[1].trim();
            return Fact::text(location, Evidence::new(page.number, location));
        }
    }
    Fact::none()
}

/// A postal-code line near the top of page 1, joined with the street line above it.
pub fn find_header_address(pages: &[PageText]) -> Fact {
    let Some(first) = pages.iter().find(|p| p.number == 1) else {
        return Fact::none();
    };

    let lines: Vec<&str> = first
        .text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(HEADER_LINES)
        .collect();

    for (i, line) in lines.iter().enumerate() {
        if !POSTAL_LINE.is_match(line) {
            continue;
        }

        let street = i
            .checked_sub(1)
            .map(|j| lines[j])
            .filter(|l| looks_like_street(l));

        let address = match street {
            Some(street) => format!("{}, {}", street, line),
            None => line.to_string(),
        };
        let snippet = match street {
            Some(street) => format!("{}\n{}", street, line),
            None => line.to_string(),
        };
        return Fact::text(&address, Evidence::new(first.number, snippet));
    }

    Fact::none()
}

fn looks_like_street(line: &str) -> bool {
    line.chars().any(char::is_alphabetic)
        && line.chars().any(|c| c.is_ascii_digit())
        && !POSTAL_LINE.is_match(line)
}
