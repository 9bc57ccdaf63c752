//! Terminal output formatting.

use anyhow::Result;
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use safehire_core::{AnalysisResponse, Verdict};
use std::time::Duration;

/// Widest the risk gauge gets, in cells.
const MAX_GAUGE_WIDTH: usize = 40;

/// Start a spinner on stderr.
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Print a response as pretty JSON.
pub fn print_json(response: &AnalysisResponse) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}

/// Print the full risk report.
pub fn print_report(response: &AnalysisResponse, details: bool) {
    println!();
    println!("{}", banner(response.tier));
    println!();

    println!(
        "{} {}",
        "Risk Score:".bold(),
        format!("{} / 100", response.risk_score).bold()
    );
    let width = gauge_width();
    println!("{}", tint(response.tier, &gauge(response.risk_score, width)));

    if !response.score_reading.is_found() {
        println!(
            "{}",
            "The model's risk score could not be read; showing 0.".dimmed()
        );
    }

    if !response.verdict_label.is_empty() {
        let note = if response.verdict_mismatch() {
            format!(" (differs from the {} score tier)", response.tier)
                .yellow()
                .to_string()
        } else {
            String::new()
        };
        println!("{}: {}{}", "Model verdict".bold(), response.verdict_label, note);
    }

    println!();
    print_bullets("Why this result?", &response.scam_signals);
    println!();
    print_bullets("What should you do?", &response.advice);

    println!();
    if details {
        print_bullets("Evidence", &response.evidence);
    } else if !response.evidence.is_empty() {
        println!("{}", "Run with --details to view the detailed analysis.".dimmed());
    }
}

fn print_bullets(title: &str, items: &[String]) {
    println!("{}", title.bold());
    if items.is_empty() {
        println!("  {}", "(none given)".dimmed());
        return;
    }
    for item in items {
        println!("  • {}", item);
    }
}

fn banner(tier: Verdict) -> ColoredString {
    match tier {
        Verdict::Scam => format!("✖ {}", tier.banner()).red().bold(),
        Verdict::Suspicious => format!("⚠ {}", tier.banner()).yellow().bold(),
        Verdict::Legitimate => format!("✔ {}", tier.banner()).green().bold(),
    }
}

fn tint(tier: Verdict, text: &str) -> ColoredString {
    match tier {
        Verdict::Scam => text.red(),
        Verdict::Suspicious => text.yellow(),
        Verdict::Legitimate => text.green(),
    }
}

/// Render `score / 100` as a bar of `width` cells.
fn gauge(score: u8, width: usize) -> String {
    let score = usize::from(score.min(100));
    let filled = (score * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Gauge width fitted to the terminal.
fn gauge_width() -> usize {
    let columns = terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80);
    columns.saturating_sub(10).clamp(10, MAX_GAUGE_WIDTH)
}
