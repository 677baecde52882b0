// ABOUTME: Stylist CLI - command-line front end for outfit recommendations over JSON files
// ABOUTME: Recommends outfits and inspects how wardrobe items are normalized
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist
//!
//! Usage:
//! ```bash
//! # Recommend an outfit
//! stylist-cli recommend --wardrobe wardrobe.json --weather weather.json
//!
//! # With constraints and locked items, as JSON
//! stylist-cli recommend --wardrobe wardrobe.json --weather weather.json \
//!     --constraints constraints.json --lock item-12 --lock item-40 --json
//!
//! # Show inferred types and resolved warmth for every item
//! stylist-cli normalize --wardrobe wardrobe.json
//! ```
//!
//! Exit codes: 0 on success, 2 when the wardrobe is empty or missing a
//! mandatory category, 1 for any other failure.

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use wardrobe_stylist::intelligence::config::stylist::InsulationFormula;
use wardrobe_stylist::intelligence::StylistConfig;
use wardrobe_stylist::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "stylist-cli",
    about = "Wardrobe Stylist outfit recommendation CLI",
    long_about = "Recommend weather-appropriate outfits from a wardrobe export and a weather snapshot."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Override the insulation target formula (bands or comfort)
    #[arg(long, global = true)]
    formula: Option<InsulationFormula>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Recommend an outfit
    Recommend {
        /// Wardrobe JSON (array of items or {"items": [...]})
        #[arg(long)]
        wardrobe: PathBuf,

        /// Weather snapshot JSON
        #[arg(long)]
        weather: PathBuf,

        /// Constraints JSON (dress code, activity, alerts, events)
        #[arg(long)]
        constraints: Option<PathBuf>,

        /// Item id that must appear in the outfit (repeatable)
        #[arg(long = "lock", value_name = "ID")]
        locked: Vec<String>,

        /// Print the full recommendation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show inferred types and resolved insulation for every item
    Normalize {
        /// Wardrobe JSON (array of items or {"items": [...]})
        #[arg(long)]
        wardrobe: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = LoggingConfig::from_env().with_level(log_level).init() {
        eprintln!("Logging unavailable: {e}");
    }

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = StylistConfig::load()?;
    if let Some(formula) = cli.formula {
        config.insulation.formula = formula;
    }
    debug!(?config, "Stylist configuration loaded");

    match cli.command {
        Command::Recommend {
            wardrobe,
            weather,
            constraints,
            locked,
            json,
        } => {
            commands::recommend::run(
                &config,
                commands::recommend::RecommendArgs {
                    wardrobe,
                    weather,
                    constraints,
                    locked,
                    json,
                },
            )
            .await
        }
        Command::Normalize { wardrobe, json } => {
            commands::normalize::run(&wardrobe, json).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
