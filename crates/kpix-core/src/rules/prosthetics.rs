//! Prosthetics warranty: warranty period and the dentists it covers.
//!
//! PTL lists covered dentists by name instead of giving a count, so the PTL
//! count comes from a heuristic: names following the "Tandläkare" label are
//! collected, filtered and counted. It can miss names written in another form
//! and can count headings that happen to look like names; the filters in
//! [`NameCountPolicy`] keep the known false positives out.

use std::collections::BTreeSet;

use tracing::debug;

use super::patterns::{
    PROSTHETICS_DENTISTS_SVEDEA, PROSTHETICS_YEARS_PTL, PROSTHETICS_YEARS_SVEDEA_NEAR,
    PROSTHETICS_YEARS_SVEDEA_WARRANTY, STAFF_NAME,
};
use super::{PatternFinder, Vendor};
use crate::models::config::NameCountPolicy;
use crate::models::fact::{Evidence, Fact};
use crate::pdf::PageText;

const YEARS_UNIT: &str = "år";

/// Warranty period in years.
///
/// Svedea offers often leave the period out; their published standard term
/// (`fallback_years`) is returned then, with evidence saying so.
pub fn find_warranty_years(pages: &[PageText], vendor: Vendor, fallback_years: f64) -> Fact {
    if !vendor.is_svedea() {
        return PatternFinder::new([&*PROSTHETICS_YEARS_PTL])
            .unit(YEARS_UNIT)
            .find(pages);
    }

    let fact = PatternFinder::new([
        &*PROSTHETICS_YEARS_SVEDEA_WARRANTY,
        &*PROSTHETICS_YEARS_SVEDEA_NEAR,
    ])
    .unit(YEARS_UNIT)
    .find(pages);

    if fact.value.is_some_and(|v| v > 0.0) {
        return fact;
    }

    debug!("No prosthetics warranty period stated, using standard {} years", fallback_years);
    let raw = super::format_number(fallback_years);
    Fact::with_value(
        fallback_years,
        &raw,
        Some(YEARS_UNIT),
        Evidence::new(
            1,
            format!("Svedea garantiförsäkring för protetik: {} år (standard)", raw),
        ),
    )
}

/// Number of dentists covered by the prosthetics warranty.
pub fn find_covered_dentists(pages: &[PageText], vendor: Vendor, policy: &NameCountPolicy) -> Fact {
    if vendor.is_svedea() {
        PatternFinder::new([&*PROSTHETICS_DENTISTS_SVEDEA])
            .unit("st")
            .find(pages)
    } else {
        count_named_dentists(pages, policy)
    }
}

/// PTL: count distinct dentist names on the prosthetics pages.
pub fn count_named_dentists(pages: &[PageText], policy: &NameCountPolicy) -> Fact {
    let markers: Vec<&str> = policy.section_markers.iter().map(String::as_str).collect();
    let mut section = super::pages_mentioning(pages, &markers);
    if section.is_empty() {
        section = pages.to_vec();
    }

    let mut names = BTreeSet::new();
    let mut first_page = None;
    for page in &section {
        let found = count_named_staff(&page.text, policy);
        if !found.is_empty() && first_page.is_none() {
            first_page = Some(page.number);
        }
        names.extend(found);
    }

    let Some(page) = first_page else {
        return Fact::none();
    };

    debug!("Counted {} prosthetics dentists by name", names.len());
    let count = names.len();
    let listing = names.into_iter().collect::<Vec<_>>().join("\n");
    Fact::with_value(
        count as f64,
        &count.to_string(),
        Some("st"),
        Evidence::new(page, format!("PTL protetik tandläkare:\n{}", listing)),
    )
}

/// Distinct names following the "Tandläkare" label that pass `policy`.
pub fn count_named_staff(text: &str, policy: &NameCountPolicy) -> BTreeSet<String> {
    let blocklist: Vec<String> = policy.blocklist.iter().map(|w| w.to_lowercase()).collect();

    STAFF_NAME
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|name| name.chars().count() >= policy.min_len)
        .filter(|name| {
            let lower = name.to_lowercase();
            !blocklist.iter().any(|w| lower.contains(w.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_duplicate_names_count_once() {
        let text = "Tandläkare Anna Svensson\nTandläkare Anna Svensson";
        let names = count_named_staff(text, &NameCountPolicy::default());
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn test_blocklisted_phrase_is_rejected() {
        let text = "Tandläkare Försäkring Villkor\nTandläkare Bo Ek";
        let names = count_named_staff(text, &NameCountPolicy::default());
        assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["Bo Ek".to_string()]);
    }

    #[test]
    fn test_min_length_policy() {
        let policy = NameCountPolicy {
            min_len: 8,
            ..NameCountPolicy::default()
        };
        let names = count_named_staff("Tandläkare Bo Ek\nTandläkare Maria Lind", &policy);
        assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["Maria Lind".to_string()]);
    }

    #[test]
    fn test_ptl_count_from_prosthetics_pages() {
        let pages = vec![
            PageText::new(1, "Tandläkare Utanför Sektionen"),
            PageText::new(
                3,
                "Garantiförsäkring protetik\nTandläkare Karin Berg\nTandläkare Anna Svensson\nTandläkare Anna Svensson",
            ),
        ];
        let fact = find_covered_dentists(&pages, Vendor::Ptl, &NameCountPolicy::default());
        assert_eq!(fact.value, Some(2.0));
        assert_eq!(fact.raw.as_deref(), Some("2"));
        assert_eq!(fact.page(), Some(3));
        assert_eq!(
            fact.evidence.unwrap().snippet,
            "PTL protetik tandläkare:\nAnna Svensson\nKarin Berg"
        );
    }

    #[test]
    fn test_ptl_count_falls_back_to_all_pages() {
        let pages = vec![PageText::new(2, "Tandläkare Karin Berg")];
        let fact = count_named_dentists(&pages, &NameCountPolicy::default());
        assert_eq!(fact.value, Some(1.0));
        assert!(count_named_dentists(&[], &NameCountPolicy::default()).is_empty());
    }

    #[test]
    fn test_svedea_covered_dentists() {
        let pages = vec![PageText::new(1, "Garantiförsäkring\n- Antal tandläkare 3,00")];
        let fact = find_covered_dentists(&pages, Vendor::Svedea, &NameCountPolicy::default());
        assert_eq!(fact.value, Some(3.0));
    }

    #[test]
    fn test_ptl_warranty_years() {
        let pages = vec![PageText::new(2, "Protetik\nGrund 3 år\nTillägg 5 år")];
        let fact = find_warranty_years(&pages, Vendor::Ptl, 3.0);
        assert_eq!(fact.value, Some(3.0));
        assert_eq!(fact.display(), "3 år");
    }

    #[test]
    fn test_svedea_warranty_years_from_text() {
        let pages = vec![PageText::new(
            4,
            "Garantiförsäkring för protetik gäller i 5 år från behandlingen.",
        )];
        let fact = find_warranty_years(&pages, Vendor::Svedea, 3.0);
        assert_eq!(fact.value, Some(5.0));
        assert_eq!(fact.page(), Some(4));
    }

    #[test]
    fn test_svedea_warranty_years_default() {
        let pages = vec![PageText::new(1, "Offert Svedea")];
        let fact = find_warranty_years(&pages, Vendor::Svedea, 3.0);
        assert_eq!(fact.value, Some(3.0));
        assert_eq!(fact.raw.as_deref(), Some("3"));
        assert_eq!(fact.unit.as_deref(), Some("år"));
        let evidence = fact.evidence.unwrap();
        assert_eq!(evidence.page, 1);
        assert!(evidence.snippet.contains("(standard)"));
    }
}
