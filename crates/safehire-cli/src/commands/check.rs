//! Message check command.

use anyhow::Result;
use clap::Args;
use safehire_core::{AnalysisRequest, Settings};
use std::path::PathBuf;

use crate::output;

#[derive(Args)]
pub struct CheckArgs {
    /// Message text (read from --file or stdin when omitted)
    pub message: Option<String>,

    /// Read the message from a file
    #[arg(short, long, conflicts_with = "message")]
    pub file: Option<PathBuf>,

    /// Print the structured result as JSON
    #[arg(long)]
    pub json: bool,

    /// Include the detailed evidence panel
    #[arg(short, long)]
    pub details: bool,
}

pub async fn execute(args: CheckArgs, settings: &Settings) -> Result<()> {
    let analyzer = super::build_analyzer(settings)?;

    let message = super::read_input(args.message, args.file.as_deref(), "message")?;
    let request = AnalysisRequest::new(message);
    request.validate()?;

    let spinner = (!args.json).then(|| output::spinner("Analyzing message..."));
    let result = analyzer.analyze(&request).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let response = result?;

    if args.json {
        output::print_json(&response)?;
    } else {
        output::print_report(&response, args.details);
    }

    Ok(())
}
