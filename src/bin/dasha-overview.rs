//! dasha-overview - inspect a saved dasha response from the command line

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use dasha_overview::api::normalize_response;
use dasha_overview::time::{Clock, FixedClock, SystemClock};
use dasha_overview::{init, parse_timestamp, DashaLevel, DashaService};

#[derive(Parser)]
#[command(author, version, about = "Resolve active dasha periods from a backend response", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long)]
    config: Option<String>,
    /// Resolve at this instant ("D-M-YYYY  H:m") instead of the system clock
    #[arg(long, value_parser = parse_now)]
    now: Option<NaiveDateTime>,
    /// Print JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Active period at every level
    Overview {
        /// Saved backend response (either shape)
        file: PathBuf,
    },
    /// Every period of one level with the current one marked
    Table {
        /// Saved backend response (either shape)
        file: PathBuf,
        /// Level name, e.g. major, minor, sub-minor or MahaDasha
        #[arg(long, default_value = "major")]
        level: DashaLevel,
    },
}

fn parse_now(raw: &str) -> Result<NaiveDateTime, String> {
    parse_timestamp(raw).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = init(cli.config.as_deref())?;

    let now = match cli.now {
        Some(now) => now,
        None => SystemClock::from_config(&config.clock)?.now(),
    };
    let service = DashaService::with_clock(&config, FixedClock(now))?;

    match cli.command {
        Commands::Overview { file } => {
            let body = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let resolution = service.overview_from_json(&body)?;
            if resolution.skipped > 0 {
                eprintln!("{} malformed period(s) skipped", resolution.skipped);
            }
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&resolution.rows())?);
            } else if resolution.is_empty() {
                println!("No dasha data available at {}", now);
            } else {
                for row in resolution.rows() {
                    let icon = service.icon(&row.planet, None);
                    println!(
                        "{:<18} {:<8} {} to {}  [{}]",
                        row.level, row.planet, row.start_display, row.end_display, icon.location
                    );
                }
            }
        }
        Commands::Table { file, level } => {
            let body = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let hierarchy = normalize_response(&body)?;
            let rows = service.table(&hierarchy, level);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if rows.is_empty() {
                println!("No {} periods in response", level);
            } else {
                for row in rows {
                    let marker = if row.is_active { "*" } else { " " };
                    println!(
                        "{} {:<8} {} to {}",
                        marker, row.planet, row.start_display, row.end_display
                    );
                }
            }
        }
    }
    Ok(())
}
