//! Letter command - customer letter for a new offer.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use kpix_core::{LetterInput, render_letter};

use super::{extract_document, load_config, spinner, write_output};

/// Arguments for the letter command.
#[derive(Args)]
pub struct LetterArgs {
    /// Current policy (PDF or text dump)
    #[arg(required = true)]
    current: PathBuf,

    /// New offer (PDF or text dump)
    #[arg(required = true)]
    new: PathBuf,

    /// Customer name used in the greeting
    #[arg(long, default_value = "")]
    customer: String,

    /// Current insurer (default: detected vendor)
    #[arg(long)]
    current_company: Option<String>,

    /// New insurer (default: detected vendor)
    #[arg(long)]
    new_company: Option<String>,

    /// Treatment rooms (default: from the new offer)
    #[arg(long)]
    rooms: Option<String>,

    /// Insured location (default: from the current policy)
    #[arg(long)]
    location: Option<String>,

    /// Leave out the note on aesthetic injections
    #[arg(long)]
    no_injections_note: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: LetterArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let pb = spinner("Reading documents...");
    let current = extract_document(&args.current, &config);
    let new = extract_document(&args.new, &config);
    pb.finish_and_clear();
    let (current, new) = (current?, new?);

    let input = LetterInput::from_documents(&current, &new)
        .with_customer_name(&args.customer)
        .with_current_company(args.current_company.as_deref())
        .with_new_company(args.new_company.as_deref())
        .with_rooms(args.rooms.as_deref())
        .with_location(args.location.as_deref())
        .with_injections_note(!args.no_injections_note);

    info!(
        "Writing letter: {} to {} for {:?}",
        input.current_company, input.new_company, input.customer_name
    );

    let letter = render_letter(&input, &current, &new, &config.letter);
    write_output(args.output.as_deref(), &letter)
}
