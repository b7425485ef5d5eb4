//! Extract command - KPIs of a single document.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use kpix_core::DocumentKpis;

use super::{extract_document, load_config, spinner, write_output};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input document (PDF or text dump)
    #[arg(required = true)]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
    /// CSV output
    Csv,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    info!("Processing file: {}", args.input.display());
    let pb = spinner("Extracting KPIs...");
    let result = extract_document(&args.input, &config);
    pb.finish_and_clear();
    let result = result?;

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
        OutputFormat::Text => format_text(&result, config.display.snippet_width),
        OutputFormat::Csv => format_csv(&result)?,
    };

    write_output(args.output.as_deref(), &output)
}

fn format_text(result: &DocumentKpis, snippet_width: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!("Document: {}\n", result.source));
    output.push_str(&format!("Vendor: {}\n", result.vendor));
    output.push_str(&format!("Pages: {}\n\n", result.pages));

    for (name, fact) in result.kpis.iter() {
        output.push_str(&format!("{}: {}\n", name, fact.display()));
        if fact.evidence.is_some() {
            let source = fact.source_label(snippet_width).replace('\n', " / ");
            output.push_str(&format!("  {}\n", source));
        }
    }

    output
}

fn format_csv(result: &DocumentKpis) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["kpi", "display", "value", "raw", "unit", "page", "snippet"])?;

    for (name, fact) in result.kpis.iter() {
        wtr.write_record([
            name.as_str(),
            &fact.display(),
            &fact.value.map(|v| v.to_string()).unwrap_or_default(),
            fact.raw.as_deref().unwrap_or(""),
            fact.unit.as_deref().unwrap_or(""),
            &fact.page().map(|p| p.to_string()).unwrap_or_default(),
            fact.evidence.as_ref().map_or("", |e| e.snippet.as_str()),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}
