//! KPI extraction: vendor detection followed by every finder in catalog order.

use std::time::Instant;

use tracing::{debug, info};

use crate::error::Result;
use crate::models::config::ExtractionConfig;
use crate::models::kpi::{DocumentKpis, KpiMap, KpiName};
use crate::models::fact::Fact;
use crate::pdf::{PageSource, PageText};
use crate::rules::{
    Vendor, detect_vendor, location, premium, prosthetics, sick_leave, staff, turnover,
};

/// Runs the vendor-specific rule set over a document.
#[derive(Debug, Clone, Default)]
pub struct KpiExtractor {
    config: ExtractionConfig,
}

impl KpiExtractor {
    /// Create an extractor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given extraction settings.
    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    /// Set how many leading pages the vendor detector reads.
    pub fn with_vendor_head_pages(mut self, pages: usize) -> Self {
        self.config.vendor_head_pages = pages;
        self
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Read the pages from `source` and extract every KPI.
    pub fn extract<S: PageSource + ?Sized>(&self, source: &S, source_name: &str) -> Result<DocumentKpis> {
        let pages = source.page_texts()?;
        Ok(self.extract_pages(source_name, &pages))
    }

    /// Extract every KPI from already-read pages. Never fails; missing KPIs are empty facts.
    pub fn extract_pages(&self, source_name: &str, pages: &[PageText]) -> DocumentKpis {
        let start = Instant::now();
        info!("Extracting KPIs from {} ({} pages)", source_name, pages.len());

        let vendor = detect_vendor(pages, self.config.vendor_head_pages);

        let mut kpis = KpiMap::new();
        for name in KpiName::ALL {
            let fact = self.find(name, pages, vendor);
            debug!("{}: {}", name, fact.display());
            kpis.insert(name, fact);
        }

        let found = kpis.iter().filter(|(_, f)| !f.is_empty()).count();
        info!(
            "Found {}/{} KPIs in {} as {} in {} ms",
            found,
            KpiName::ALL.len(),
            source_name,
            vendor,
            start.elapsed().as_millis()
        );

        DocumentKpis {
            source: source_name.to_string(),
            vendor,
            pages: pages.len(),
            kpis,
        }
    }

    fn find(&self, name: KpiName, pages: &[PageText], vendor: Vendor) -> Fact {
        match name {
            KpiName::Dentists => staff::find_dentists(pages, vendor),
            KpiName::Hygienists => staff::find_hygienists(pages, vendor),
            KpiName::OralSurgeons => staff::find_oral_surgeons(pages, vendor),
            KpiName::Turnover => turnover::find_turnover(pages, vendor),
            KpiName::InterruptionPeriod => turnover::find_interruption_period(pages, vendor),
            KpiName::ProstheticsWarrantyYears => prosthetics::find_warranty_years(
                pages,
                vendor,
                self.config.prosthetics_fallback_years,
            ),
            KpiName::ProstheticsDentists => {
                prosthetics::find_covered_dentists(pages, vendor, &self.config.staff_names)
            }
            KpiName::Premium => premium::find_premium(pages, vendor),
            KpiName::InsuredLocation => location::find_location(pages, vendor),
            KpiName::TreatmentRooms => staff::find_treatment_rooms(pages, vendor),
            KpiName::SickLeaveExists => sick_leave::find_sick_leave_exists(pages),
            KpiName::SickLeaveDetails => sick_leave::find_sick_leave_details(pages),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document() {
        let result = KpiExtractor::new().extract_pages("tom.pdf", &[]);
        assert_eq!(result.vendor, Vendor::Unknown);
        assert_eq!(result.pages, 0);
        assert_eq!(result.kpis.len(), KpiName::ALL.len());
        assert_eq!(result.kpis.get(KpiName::SickLeaveExists).raw.as_deref(), Some("No"));
        assert!(result.kpis.get(KpiName::Dentists).is_empty());
        assert!(result.kpis.get(KpiName::SickLeaveDetails).is_empty());
    }

    #[test]
    fn test_extract_from_page_source() {
        let pages = vec![
            PageText::new(1, "Svedea Offert\nÅrspremie 37 240 kr"),
            PageText::new(2, "Tandläkare - övrigt 3,00 st"),
        ];
        let result = KpiExtractor::new().extract(&pages, "svedea.pdf").unwrap();
        assert_eq!(result.vendor, Vendor::Svedea);
        assert_eq!(result.source, "svedea.pdf");
        assert_eq!(result.kpis.get(KpiName::Dentists).value, Some(3.0));
        assert_eq!(result.kpis.get(KpiName::Premium).display(), "37 240 kr");
    }

    #[test]
    fn test_vendor_head_pages_setting() {
        let pages = vec![
            PageText::new(1, "Offert"),
            PageText::new(2, "Villkor"),
            PageText::new(3, "Svedea AB"),
        ];
        assert_eq!(KpiExtractor::new().extract_pages("a", &pages).vendor, Vendor::Unknown);
        let wide = KpiExtractor::new().with_vendor_head_pages(3);
        assert_eq!(wide.extract_pages("a", &pages).vendor, Vendor::Svedea);
    }
}
