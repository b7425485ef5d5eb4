//! The KPI catalog and the per-document KPI mapping.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::fact::{EMPTY_FACT, Fact};
use crate::rules::vendor::Vendor;

/// Every KPI the extractor attempts, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum KpiName {
    #[serde(rename = "Antal tandläkare")]
    Dentists,
    #[serde(rename = "Antal tandhygienister")]
    Hygienists,
    #[serde(rename = "Antal tandkirurgi/käkkirurger")]
    OralSurgeons,
    #[serde(rename = "Omsättning")]
    Turnover,
    #[serde(rename = "Avbrottstid")]
    InterruptionPeriod,
    #[serde(rename = "Protetik - garantitid (år)")]
    ProstheticsWarrantyYears,
    #[serde(rename = "Protetik - antal tandläkare")]
    ProstheticsDentists,
    #[serde(rename = "Premie / Pris")]
    Premium,
    #[serde(rename = "Försäkringsställe")]
    InsuredLocation,
    #[serde(rename = "Antal behandlingsrum")]
    TreatmentRooms,
    #[serde(rename = "Sjukavbrott (finns)")]
    SickLeaveExists,
    #[serde(rename = "Sjukavbrott (detaljer)")]
    SickLeaveDetails,
}

impl KpiName {
    /// The full catalog.
    pub const ALL: [KpiName; 12] = [
        KpiName::Dentists,
        KpiName::Hygienists,
        KpiName::OralSurgeons,
        KpiName::Turnover,
        KpiName::InterruptionPeriod,
        KpiName::ProstheticsWarrantyYears,
        KpiName::ProstheticsDentists,
        KpiName::Premium,
        KpiName::InsuredLocation,
        KpiName::TreatmentRooms,
        KpiName::SickLeaveExists,
        KpiName::SickLeaveDetails,
    ];

    /// Key string used in reports and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            KpiName::Dentists => "Antal tandläkare",
            KpiName::Hygienists => "Antal tandhygienister",
            KpiName::OralSurgeons => "Antal tandkirurgi/käkkirurger",
            KpiName::Turnover => "Omsättning",
            KpiName::InterruptionPeriod => "Avbrottstid",
            KpiName::ProstheticsWarrantyYears => "Protetik - garantitid (år)",
            KpiName::ProstheticsDentists => "Protetik - antal tandläkare",
            KpiName::Premium => "Premie / Pris",
            KpiName::InsuredLocation => "Försäkringsställe",
            KpiName::TreatmentRooms => "Antal behandlingsrum",
            KpiName::SickLeaveExists => "Sjukavbrott (finns)",
            KpiName::SickLeaveDetails => "Sjukavbrott (detaljer)",
        }
    }

    /// Look up a catalog entry by its key string.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl fmt::Display for KpiName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// KPI name to fact, one per document.
///
/// Every catalog key is present from construction on; a KPI that was not
/// found maps to an empty fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KpiMap(BTreeMap<KpiName, Fact>);

impl KpiMap {
    /// A mapping with every catalog key set to the empty fact.
    pub fn new() -> Self {
        Self(KpiName::ALL.into_iter().map(|k| (k, Fact::none())).collect())
    }

    pub fn insert(&mut self, name: KpiName, fact: Fact) {
        self.0.insert(name, fact);
    }

    /// The fact for a catalog entry.
    pub fn get(&self, name: KpiName) -> &Fact {
        self.0.get(&name).unwrap_or(&EMPTY_FACT)
    }

    /// The fact for a key string, if it names a catalog entry.
    pub fn get_by_key(&self, key: &str) -> Option<&Fact> {
        KpiName::from_key(key).map(|name| self.get(name))
    }

    /// Facts in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (KpiName, &Fact)> {
        KpiName::ALL.into_iter().map(move |name| (name, self.get(name)))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for KpiMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Extraction result for one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentKpis {
    /// Path or name of the source document.
    pub source: String,
    /// Detected issuing company.
    pub vendor: Vendor,
    /// Number of pages that were read.
    pub pages: usize,
    /// Extracted facts.
    pub kpis: KpiMap,
}
