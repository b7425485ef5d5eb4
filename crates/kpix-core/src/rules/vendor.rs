//! Issuing-company detection from document header text.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::pdf::PageText;

/// Insurance company that issued a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vendor {
    /// Policy certificates ("Försäkringsbesked") with a customer number.
    #[serde(rename = "PTL")]
    Ptl,
    /// Offers carrying the Svedea brand.
    #[serde(rename = "Svedea")]
    Svedea,
    #[default]
    Unknown,
}

impl Vendor {
    /// Company name as shown in reports and letters.
    pub fn display_name(&self) -> &'static str {
        match self {
            Vendor::Ptl => "PTL",
            Vendor::Svedea => "Svedea",
            Vendor::Unknown => "Unknown",
        }
    }

    /// Whether extraction uses the Svedea rule set. Unknown documents use PTL rules.
    pub fn is_svedea(&self) -> bool {
        matches!(self, Vendor::Svedea)
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

const SVEDEA_MARKERS: [&str; 1] = ["svedea"];
const PTL_MARKERS: [&str; 3] = ["försäkringsbesked", "kundnr", "ptl"];

/// Classify a document from the lower-cased text of its first `head_pages` pages.
///
/// The Svedea brand name takes priority over PTL words; later pages are never read.
pub fn detect_vendor(pages: &[PageText], head_pages: usize) -> Vendor {
    let head = pages
        .iter()
        .take(head_pages)
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase();

    let vendor = if SVEDEA_MARKERS.iter().any(|m| head.contains(m)) {
        Vendor::Svedea
    } else if PTL_MARKERS.iter().any(|m| head.contains(m)) {
        Vendor::Ptl
    } else {
        Vendor::Unknown
    };

    debug!("Detected vendor {} from {} header chars", vendor, head.len());
    vendor
}
