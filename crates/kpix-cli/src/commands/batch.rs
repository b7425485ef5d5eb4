//! Batch command - one summary CSV row per document.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, warn};

use kpix_core::models::config::KpixConfig;
use kpix_core::{DocumentKpis, KpiName};

use super::{extract_document, load_config};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files as a glob pattern
    #[arg(required = true)]
    input: String,

    /// Summary CSV path
    #[arg(short, long, default_value = "summary.csv")]
    output: PathBuf,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    kpis: Option<DocumentKpis>,
    error: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "pdf" | "txt")
        })
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    if let Ok(bar_style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
    {
        pb.set_style(bar_style.progress_chars("=>-"));
    }

    let mut results = Vec::with_capacity(files.len());
    for path in files {
        match process_single_file(&path, &config) {
            Ok(kpis) => results.push(ProcessResult {
                path,
                kpis: Some(kpis),
                error: None,
            }),
            Err(e) => {
                let error_msg = format!("{:#}", e);
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        kpis: None,
                        error: Some(error_msg),
                    });
                } else {
                    pb.abandon();
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    write_summary(&args.output, &results)?;

    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();
    eprintln!(
        "{} Processed {} files in {:?}, summary written to {}",
        style("✓").green(),
        results.len(),
        start.elapsed(),
        args.output.display()
    );
    eprintln!(
        "   {} successful, {} failed",
        style(results.len() - failed.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        eprintln!("{}", style("Failed files:").red());
        for result in &failed {
            eprintln!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn process_single_file(path: &Path, config: &KpixConfig) -> anyhow::Result<DocumentKpis> {
    let kpis = extract_document(path, config)?;
    if kpis.pages == 0 {
        anyhow::bail!("No pages read from {}", path.display());
    }
    Ok(kpis)
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["file", "vendor", "status"];
    header.extend(KpiName::ALL.iter().map(|k| k.as_str()));
    header.push("error");
    wtr.write_record(&header)?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();

        let mut record = vec![filename];
        match &result.kpis {
            Some(doc) => {
                record.push(doc.vendor.to_string());
                record.push("success".to_string());
                record.extend(doc.kpis.iter().map(|(_, fact)| fact.display()));
                record.push(String::new());
            }
            None => {
                record.push(String::new());
                record.push("error".to_string());
                record.extend(KpiName::ALL.iter().map(|_| String::new()));
                record.push(result.error.clone().unwrap_or_default());
            }
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
