//! Evidence-bearing extraction results.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::rules::numbers::{format_number, parse_number};

/// Shown wherever a KPI has no data at all.
pub const NO_DATA: &str = "—";

/// Raw text of an existence fact that was found.
pub const YES: &str = "Yes";

/// Raw text of an existence fact that was not found.
pub const NO: &str = "No";

const BOOLEAN_LABELS: [&str; 4] = [YES, NO, "Ja", "Nej"];

/// Where in the document a fact was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    /// Page number (1-indexed).
    pub page: u32,
    /// Matched text, trimmed.
    pub snippet: String,
}

impl Evidence {
    pub fn new(page: u32, snippet: impl Into<String>) -> Self {
        Self {
            page,
            snippet: snippet.into(),
        }
    }
}

/// One extracted KPI value with its provenance.
///
/// `value` is always expressed in the base unit (SEK, count, years) while
/// `unit` describes `raw`. For KSEK figures `raw` is "10 000", `unit` is
/// "KSEK", `scale` is 1000 and `value` is 10 000 000.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    /// Canonical value in the base unit.
    pub value: Option<f64>,

    /// Matched text before normalization.
    pub raw: Option<String>,

    /// Unit label of `raw`.
    pub unit: Option<String>,

    /// Multiplier from the number in `raw` to `value`.
    #[serde(default = "default_scale")]
    pub scale: f64,

    /// Page and snippet the fact came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Evidence>,
}

fn default_scale() -> f64 {
    1.0
}

pub(crate) static EMPTY_FACT: Fact = Fact {
    value: None,
    raw: None,
    unit: None,
    scale: 1.0,
    evidence: None,
};

impl Fact {
    /// A fact with no value, carrying the unit and scale that were asked for.
    pub fn empty(unit: Option<&str>, scale: f64) -> Self {
        Self {
            value: None,
            raw: None,
            unit: unit.map(str::to_string),
            scale,
            evidence: None,
        }
    }

    /// A fact with nothing at all.
    pub fn none() -> Self {
        Self::empty(None, 1.0)
    }

    /// A numeric fact. A raw token that does not parse keeps its text and loses the value.
    pub fn numeric(raw: &str, unit: Option<&str>, scale: f64, evidence: Evidence) -> Self {
        let raw = raw.trim();
        let value = match parse_number(raw) {
            Ok(n) => Some(n * scale),
            Err(e) => {
                trace!("Keeping raw text without value: {}", e);
                None
            }
        };

        Self {
            value,
            raw: Some(raw.to_string()),
            unit: unit.map(str::to_string),
            scale,
            evidence: Some(evidence),
        }
    }

    /// A free-text fact (names, addresses, descriptions).
    pub fn text(raw: &str, evidence: Evidence) -> Self {
        Self {
            value: None,
            raw: Some(raw.trim().to_string()),
            unit: None,
            scale: 1.0,
            evidence: Some(evidence),
        }
    }

    /// A fact that already knows its value, used for policy defaults and counts.
    pub fn with_value(value: f64, raw: &str, unit: Option<&str>, evidence: Evidence) -> Self {
        Self {
            value: Some(value),
            raw: Some(raw.to_string()),
            unit: unit.map(str::to_string),
            scale: 1.0,
            evidence: Some(evidence),
        }
    }

    /// Existence fact: 1.0/"Yes" with evidence, or 0.0/"No" without.
    pub fn flag(evidence: Option<Evidence>) -> Self {
        let found = evidence.is_some();
        Self {
            value: Some(if found { 1.0 } else { 0.0 }),
            raw: Some(if found { YES } else { NO }.to_string()),
            unit: None,
            scale: 1.0,
            evidence,
        }
    }

    /// True when nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.raw.is_none()
    }

    /// Page of the evidence, if any.
    pub fn page(&self) -> Option<u32> {
        self.evidence.as_ref().map(|e| e.page)
    }

    /// The canonical value, but only when the raw text itself is a number.
    ///
    /// Existence flags and free text carry sentinel values that must not be
    /// subtracted from each other.
    pub fn numeric_value(&self) -> Option<f64> {
        let raw = self.raw.as_deref()?;
        parse_number(raw).ok()?;
        self.value
    }

    /// Human readable value with Swedish number formatting.
    pub fn display(&self) -> String {
        if let Some(raw) = self.raw.as_deref() {
            if BOOLEAN_LABELS.contains(&raw) || raw.chars().any(char::is_alphabetic) {
                return raw.to_string();
            }
        }

        let unit = self.unit.as_deref().unwrap_or("");

        let Some(value) = self.value else {
            return match self.raw.as_deref() {
                Some(raw) => format!("{} {}", raw, unit).trim().to_string(),
                None => NO_DATA.to_string(),
            };
        };

        // KSEK figures are shown as the SEK amount only.
        if unit.eq_ignore_ascii_case("KSEK") {
            return format!("{} kr", format_number(value));
        }

        format!("{} {}", format_number(value), unit).trim().to_string()
    }

    /// `s.<page>: <snippet>` cut to `width` characters, or the placeholder.
    pub fn source_label(&self, width: usize) -> String {
        match &self.evidence {
            Some(ev) => {
                let snippet: String = ev.snippet.chars().take(width).collect();
                format!("s.{}: {}", ev.page, snippet)
            }
            None => NO_DATA.to_string(),
        }
    }
}

impl Default for Fact {
    fn default() -> Self {
        Self::none()
    }
}
