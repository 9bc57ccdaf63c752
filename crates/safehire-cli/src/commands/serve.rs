//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use safehire_core::Settings;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,
}

pub async fn execute(args: ServeArgs, settings: &Settings) -> Result<()> {
    let analyzer = super::build_analyzer(settings)?;

    let host = args.host.unwrap_or_else(|| settings.server.host.clone());
    let port = args.port.unwrap_or(settings.server.port);

    println!();
    println!("  {} {}", "SafeHire".cyan().bold(), "Web Checker".bold());
    println!();
    println!("  {}  http://{}:{}", "Checker".green(), host, port);
    println!("  {}      http://{}:{}/api/analyze", "API".green(), host, port);
    println!("  {}    {}", "Model".green(), analyzer.oracle_name());
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    safehire_web::run_server(analyzer, &host, port).await?;

    Ok(())
}
