//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use safehire_core::{Analyzer, ApiKey, PromptBuilder, Settings};
use safehire_llm::GeminiClient;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

pub mod check;
pub mod parse;
pub mod prompt;
pub mod serve;

/// SafeHire - check job and internship messages for scam risk
#[derive(Parser)]
#[command(name = "safehire")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (defaults to ./safehire.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Model to query, overriding the settings file
    #[arg(long, global = true, env = "SAFEHIRE_MODEL")]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a message for scam risk
    Check(check::CheckArgs),

    /// Interpret a saved model reply without calling the model
    Parse(parse::ParseArgs),

    /// Print the instruction sent with every message
    Prompt,

    /// Start the web checker
    Serve(serve::ServeArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
        let mut settings = Settings::load(self.config.as_deref(), &cwd)?;
        if let Some(model) = self.model {
            settings.oracle.model = model;
        }
        settings.validate()?;

        match self.command {
            Commands::Check(args) => check::execute(args, &settings).await,
            Commands::Parse(args) => parse::execute(args),
            Commands::Prompt => prompt::execute(&settings),
            Commands::Serve(args) => serve::execute(args, &settings).await,
        }
    }
}

/// Build the analyzer once at startup: credential, oracle client, instruction.
pub fn build_analyzer(settings: &Settings) -> Result<Analyzer> {
    let api_key = ApiKey::from_env()?;
    let client = GeminiClient::new(api_key, &settings.oracle)
        .context("Failed to load Gemini model")?;
    info!(model = client.model(), "Oracle client ready");

    let instruction = PromptBuilder::new(settings.prompt.clone()).build_now();
    Ok(Analyzer::new(instruction, Arc::new(client)))
}

/// Read text from an inline argument, a file, or stdin, in that order.
pub fn read_input(inline: Option<String>, file: Option<&Path>, what: &str) -> Result<String> {
    if let Some(text) = inline {
        return Ok(text);
    }

    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {}", path.display()));
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprintln!("Paste the {}, then press Ctrl-D:", what);
    }
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    Ok(text)
}
