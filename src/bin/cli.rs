// BookFair Core - Book fair registry and validation engine
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bookfair_core::scenario::{Scenario, StepOutcome};
use bookfair_core::{workflow, BookFair, FairConfig};

const SAMPLE_SCENARIO: &str = include_str!("../../demos/sample_fair.json");

#[derive(Parser)]
#[command(name = "bookfair-cli")]
#[command(about = "BookFair CLI - Desktop testing tool", long_about = None)]
struct Cli {
    /// Fair configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Tracing filter, e.g. "debug" or "bookfair_core=trace"
    #[arg(long, global = true, env = "BOOKFAIR_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the bundled sample fair and print every listing
    Demo,
    /// Apply a scenario file and print every listing
    Apply {
        /// Scenario file (JSON)
        scenario: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => FairConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => FairConfig::default(),
    };

    let filter = cli.log_level.clone().unwrap_or_else(|| config.log_filter.clone());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&filter).context("Invalid log filter")?)
        .with_writer(std::io::stderr)
        .init();

    let scenario = match &cli.command {
        Commands::Demo => Scenario::from_json_str(SAMPLE_SCENARIO).context("Bundled sample scenario is invalid")?,
        Commands::Apply { scenario } => Scenario::from_json_file(scenario)
            .with_context(|| format!("Failed to read scenario {}", scenario.display()))?,
    };

    let fair = BookFair::with_config(config).context("Invalid fair configuration")?;
    info!("applying scenario");
    let outcomes = scenario.apply(&fair);
    print_outcomes(&outcomes);

    let listings = json!({
        "persons": workflow::all_persons(&fair),
        "publishers": workflow::all_publishers(&fair),
        "stands": workflow::all_stands(&fair),
        "printed_books": workflow::all_printed_books(&fair),
        "digital_books": workflow::all_digital_books(&fair),
        "audiobooks": workflow::all_audiobooks(&fair),
        "most_distinct_publishers": workflow::authors_with_most_distinct_publishers(&fair),
        "stats": fair.stats(),
    });
    println!("{}", serde_json::to_string_pretty(&listings)?);

    Ok(())
}

fn print_outcomes(outcomes: &[StepOutcome]) {
    println!("Scenario steps:");
    for outcome in outcomes {
        let mark = if outcome.is_success() { "✅" } else { "❌" };
        println!(
            "  {} {:<20} {:<24} {} {}",
            mark,
            outcome.operation,
            outcome.key,
            outcome.status.code(),
            outcome.message
        );
    }
    let failed = outcomes.iter().filter(|o| !o.is_success()).count();
    println!("{} steps, {} rejected\n", outcomes.len(), failed);
}
