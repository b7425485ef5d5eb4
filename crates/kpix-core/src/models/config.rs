//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{KpixError, Result};

/// Main configuration for kpix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KpixConfig {
    /// Page-text collection.
    pub pdf: PdfConfig,

    /// KPI extraction rules.
    pub extraction: ExtractionConfig,

    /// Report formatting.
    pub display: DisplayConfig,

    /// Customer letter wording.
    pub letter: LetterConfig,
}

/// Page-text collection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum pages to read (0 = unlimited).
    pub max_pages: usize,

    /// Below this many characters of text a document is reported as probably scanned.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            max_pages: 0,
            min_text_length: 50,
        }
    }
}

/// KPI extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// How many leading pages the vendor detector reads.
    pub vendor_head_pages: usize,

    /// Svedea's published prosthetics warranty, used when the offer states none.
    pub prosthetics_fallback_years: f64,

    /// Policy for counting named dentists in PTL prosthetics sections.
    pub staff_names: NameCountPolicy,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            vendor_head_pages: 2,
            prosthetics_fallback_years: 3.0,
            staff_names: NameCountPolicy::default(),
        }
    }
}

/// Filters for the dentist name-counting heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameCountPolicy {
    /// Candidates shorter than this (in characters) are dropped.
    pub min_len: usize,

    /// Candidates containing any of these words (case-insensitive) are dropped.
    pub blocklist: Vec<String>,

    /// Lower-case phrases marking pages that list prosthetics dentists.
    pub section_markers: Vec<String>,
}

impl Default for NameCountPolicy {
    fn default() -> Self {
        Self {
            min_len: 5,
            blocklist: ["protetik", "försäkring", "ansvar", "premie"]
                .into_iter()
                .map(String::from)
                .collect(),
            section_markers: ["garantiförsäkring protetik", "protetik", "tandläkare som"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Report formatting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Evidence snippets are cut to this many characters.
    pub snippet_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { snippet_width: 120 }
    }
}

/// Fixed wording of the customer letter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterConfig {
    /// Broker the offer is made together with.
    pub partner: String,

    /// Closing line.
    pub greeting: String,

    /// Legal-protection cap per claim with the current insurer.
    pub legal_protection_current: String,

    /// Legal-protection cap per claim with the new insurer.
    pub legal_protection_new: String,

    /// Year the base amount applies to.
    pub base_amount_year: u16,

    /// Price base amount in SEK.
    pub base_amount: f64,
}

impl Default for LetterConfig {
    fn default() -> Self {
        Self {
            partner: "DentFriends".to_string(),
            greeting: "Trevlig helg!".to_string(),
            legal_protection_current: "1 basbelopp".to_string(),
            legal_protection_new: "2 basbelopp".to_string(),
            base_amount_year: 2026,
            base_amount: 59_200.0,
        }
    }
}

impl KpixConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| KpixError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| KpixError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
