//! Compare command - the current policy against a new offer.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use kpix_core::Comparison;

use super::{extract_document, load_config, spinner, write_output};

/// Arguments for the compare command.
#[derive(Args)]
pub struct CompareArgs {
    /// Current policy (PDF or text dump)
    #[arg(required = true)]
    current: PathBuf,

    /// New offer (PDF or text dump)
    #[arg(required = true)]
    new: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "markdown")]
    format: CompareFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum CompareFormat {
    /// Markdown table
    Markdown,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

pub fn run(args: CompareArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    info!(
        "Comparing {} with {}",
        args.current.display(),
        args.new.display()
    );

    let pb = spinner("Reading documents...");
    let current = extract_document(&args.current, &config);
    let new = extract_document(&args.new, &config);
    pb.finish_and_clear();

    let comparison = Comparison::new(&current?, &new?, config.display.snippet_width);

    let output = match args.format {
        CompareFormat::Markdown => comparison.to_markdown(),
        CompareFormat::Json => serde_json::to_string_pretty(&comparison)?,
        CompareFormat::Csv => format_csv(&comparison)?,
    };
    write_output(args.output.as_deref(), &output)?;

    let changed = comparison.changed_rows().len();
    eprintln!(
        "{} {} of {} KPIs differ",
        style("ℹ").blue(),
        changed,
        comparison.rows.len()
    );

    debug!("Total processing time: {:?}", start.elapsed());
    Ok(())
}

fn format_csv(comparison: &Comparison) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "kpi",
        "current",
        "new",
        "difference",
        "current_page",
        "new_page",
        "current_source",
        "new_source",
    ])?;

    for row in &comparison.rows {
        let page = |p: Option<u32>| p.map(|n| n.to_string()).unwrap_or_default();
        wtr.write_record([
            row.kpi.as_str(),
            &row.current,
            &row.new,
            &row.difference.map(|d| d.to_string()).unwrap_or_default(),
            &page(row.current_page),
            &page(row.new_page),
            &row.current_source,
            &row.new_source,
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}
