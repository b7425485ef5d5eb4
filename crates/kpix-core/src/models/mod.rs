//! Data models: facts, the KPI catalog, configuration.

pub mod config;
pub mod fact;
pub mod kpi;

pub use config::{DisplayConfig, ExtractionConfig, KpixConfig, LetterConfig, NameCountPolicy, PdfConfig};
pub use fact::{Evidence, Fact, NO, NO_DATA, YES};
pub use kpi::{DocumentKpis, KpiMap, KpiName};
