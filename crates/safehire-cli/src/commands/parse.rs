//! Offline interpretation of a saved model reply.

use anyhow::Result;
use clap::Args;
use safehire_core::AnalysisResponse;
use std::path::PathBuf;

use crate::output;

#[derive(Args)]
pub struct ParseArgs {
    /// File holding the model reply (stdin when omitted)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print the structured result as JSON
    #[arg(long)]
    pub json: bool,

    /// Include the detailed evidence panel
    #[arg(short, long)]
    pub details: bool,
}

pub fn execute(args: ParseArgs) -> Result<()> {
    let reply = super::read_input(None, args.file.as_deref(), "model reply")?;
    let response = AnalysisResponse::from_reply(&reply);

    if args.json {
        output::print_json(&response)?;
    } else {
        output::print_report(&response, args.details);
    }

    Ok(())
}
