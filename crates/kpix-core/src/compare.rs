//! Side-by-side comparison of the current policy and a new offer.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::fact::{Fact, NO_DATA};
use crate::models::kpi::{DocumentKpis, KpiName};
use crate::rules::{Vendor, format_number};

/// One KPI compared across both documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub kpi: KpiName,
    /// Display value in the current policy.
    pub current: String,
    /// Display value in the new offer.
    pub new: String,
    /// `new - current`, only when both sides are numbers.
    pub difference: Option<f64>,
    pub current_page: Option<u32>,
    pub new_page: Option<u32>,
    pub current_source: String,
    pub new_source: String,
}

impl ComparisonRow {
    fn new(kpi: KpiName, current: &Fact, new: &Fact, snippet_width: usize) -> Self {
        let difference = match (current.numeric_value(), new.numeric_value()) {
            (Some(a), Some(b)) => Some(b - a),
            _ => None,
        };

        Self {
            kpi,
            current: current.display(),
            new: new.display(),
            difference,
            current_page: current.page(),
            new_page: new.page(),
            current_source: current.source_label(snippet_width),
            new_source: new.source_label(snippet_width),
        }
    }

    /// Whether the two documents show different values.
    pub fn is_changed(&self) -> bool {
        self.current != self.new
    }

    /// Signed difference in Swedish number format, or the placeholder.
    pub fn difference_label(&self) -> String {
        match self.difference {
            Some(d) if d > 0.0 => format!("+{}", format_number(d)),
            Some(d) => format_number(d),
            None => NO_DATA.to_string(),
        }
    }
}

/// Comparison of two extracted documents, one row per catalog KPI.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub current_document: String,
    pub new_document: String,
    pub current_vendor: Vendor,
    pub new_vendor: Vendor,
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<ComparisonRow>,
}

impl Comparison {
    pub fn new(current: &DocumentKpis, new: &DocumentKpis, snippet_width: usize) -> Self {
        let rows = KpiName::ALL
            .into_iter()
            .map(|kpi| {
                ComparisonRow::new(kpi, current.kpis.get(kpi), new.kpis.get(kpi), snippet_width)
            })
            .collect();

        Self {
            current_document: current.source.clone(),
            new_document: new.source.clone(),
            current_vendor: current.vendor,
            new_vendor: new.vendor,
            generated_at: Utc::now(),
            rows,
        }
    }

    pub fn row(&self, kpi: KpiName) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.kpi == kpi)
    }

    /// Rows whose display values differ.
    pub fn changed_rows(&self) -> Vec<&ComparisonRow> {
        self.rows.iter().filter(|r| r.is_changed()).collect()
    }

    /// Markdown table: KPI, both values, difference and both sources.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str("| KPI | Nuvarande | Ny | Diff | Källa nuvarande | Källa ny |\n");
        out.push_str("|-----|-----------|----|------|-----------------|----------|\n");

        for row in &self.rows {
            out.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                row.kpi,
                escape_cell(&row.current),
                escape_cell(&row.new),
                row.difference_label(),
                escape_cell(&row.current_source),
                escape_cell(&row.new_source),
            ));
        }
        out
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', "<br>")
}
