//! Sick-leave interruption cover.

use tracing::debug;

use super::numbers::parse_number;
use super::patterns::{FIXED_COSTS, INSURED_PERSON, SICK_LEAVE};
use crate::models::fact::{Evidence, Fact};
use crate::pdf::PageText;

/// Raw text of a details fact when the cover exists but neither part was found.
const DETAILS_FALLBACK: &str = "Sjukavbrott";

/// Whether any page mentions sick-leave cover.
pub fn find_sick_leave_exists(pages: &[PageText]) -> Fact {
    let hit = pages.iter().find_map(|page| {
        page.text
            .lines()
            .map(str::trim)
            .find(|line| SICK_LEAVE.is_match(line))
            .map(|line| Evidence::new(page.number, line))
    });
    Fact::flag(hit)
}

/// Insured person and fixed costs from the first page mentioning the cover,
/// e.g. "Lisa Taavo 1,9 MSEK".
pub fn find_sick_leave_details(pages: &[PageText]) -> Fact {
    let Some(page) = pages.iter().find(|p| SICK_LEAVE.is_match(&p.text)) else {
        return Fact::none();
    };

    let lines: Vec<&str> = page
        .text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let insured = lines.iter().find_map(|line| {
        INSURED_PERSON
            .captures(line)
            .map(|caps| caps[1].trim().to_string())
    });

    let fixed_costs = lines.iter().find_map(|line| {
        FIXED_COSTS.captures(line).map(|caps| {
            let amount = caps[1].trim();
            let unit = caps.get(2).map_or("", |m| m.as_str());
            format_fixed_costs(amount, unit)
        })
    });

    let parts: Vec<String> = insured.into_iter().chain(fixed_costs).collect();
    let summary = if parts.is_empty() {
        DETAILS_FALLBACK.to_string()
    } else {
        parts.join(" ")
    };

    debug!("Sick-leave details on page {}: {}", page.number, summary);
    Fact::with_value(1.0, &summary, None, Evidence::new(page.number, summary.clone()))
}

/// KSEK amounts are shown in MSEK with one decimal; anything else as written.
pub fn format_fixed_costs(amount: &str, unit: &str) -> String {
    if !unit.eq_ignore_ascii_case("KSEK") {
        return format!("{} {}", amount, unit).trim().to_string();
    }

    match parse_number(amount) {
        Ok(ksek) => {
            let msek = ksek / 1000.0;
            if msek.fract() == 0.0 {
                format!("{} MSEK", msek as i64)
            } else {
                format!("{:.1} MSEK", msek).replace('.', ",")
            }
        }
        Err(e) => {
            debug!("Fixed costs kept as written: {}", e);
            format!("{} {}", amount, unit)
        }
    }
}
