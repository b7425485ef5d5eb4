//! Subcommands and the helpers they share.

pub mod batch;
pub mod compare;
pub mod config;
pub mod extract;
pub mod letter;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use kpix_core::models::config::KpixConfig;
use kpix_core::{DocumentKpis, KpiExtractor, open_document};

/// Configuration file used when `--config` is not given.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kpix")
        .join("config.json")
}

/// `--config` if given, else the default file if it exists, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<KpixConfig> {
    if let Some(path) = config_path {
        return KpixConfig::from_file(Path::new(path))
            .with_context(|| format!("could not load config {}", path));
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using config {}", default_path.display());
        return Ok(KpixConfig::from_file(&default_path)?);
    }

    Ok(KpixConfig::default())
}

/// Read a document and extract its KPIs.
pub fn extract_document(path: &Path, config: &KpixConfig) -> anyhow::Result<DocumentKpis> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    let pages = open_document(path, &config.pdf)
        .with_context(|| format!("could not read document {}", path.display()))?;

    let extractor = KpiExtractor::new().with_config(config.extraction.clone());
    Ok(extractor.extract_pages(&path.display().to_string(), &pages))
}

/// Spinner shown while documents are read.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(spinner_style);
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message.to_string());
    pb
}

/// Write to `output` if given, else print to stdout.
pub fn write_output(output: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("could not write {}", path.display()))?;
            eprintln!(
                "{} Output written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => println!("{}", content),
    }
    Ok(())
}
