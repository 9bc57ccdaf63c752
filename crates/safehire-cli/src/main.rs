//! SafeHire CLI - job and internship scam checker.
//!
//! Sends a message to a hosted model and renders its risk assessment.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::{Cli, Commands};

/// Initialize tracing on stderr so stdout stays clean for reports and JSON.
fn init_tracing(verbose: bool, serving: bool) {
    let default_filter = if verbose {
        "safehire=debug,safehire_core=debug,safehire_llm=debug,safehire_web=debug,tower_http=debug"
    } else if serving {
        "safehire=info,safehire_core=info,safehire_llm=info,safehire_web=info,tower_http=info"
    } else {
        "safehire=warn,safehire_core=warn,safehire_llm=warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is normal; the key may come from the real environment.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let serving = matches!(&cli.command, Commands::Serve(_));
    init_tracing(cli.verbose, serving);

    cli.execute().await
}
