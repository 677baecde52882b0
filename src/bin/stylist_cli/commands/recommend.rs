// ABOUTME: Recommend subcommand: loads inputs, runs the service, prints the outfit
// ABOUTME: Wardrobe conditions print the user message and exit with code 2
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use wardrobe_stylist::input;
use wardrobe_stylist::intelligence::StylistConfig;
use wardrobe_stylist::models::RecommendationConstraints;
use wardrobe_stylist::services::{InMemoryWardrobeStore, RecommendationService};

use crate::helpers::display;

/// CLI user id for the in-memory store
const CLI_USER: &str = "cli";

/// Exit code for the two wardrobe conditions
const WARDROBE_CONDITION_EXIT: u8 = 2;

pub struct RecommendArgs {
    pub wardrobe: PathBuf,
    pub weather: PathBuf,
    pub constraints: Option<PathBuf>,
    pub locked: Vec<String>,
    pub json: bool,
}

pub async fn run(config: &StylistConfig, args: RecommendArgs) -> anyhow::Result<ExitCode> {
    let wardrobe = input::load_wardrobe(&args.wardrobe).await?;
    let weather = input::load_weather(&args.weather).await?;
    let mut constraints = match &args.constraints {
        Some(path) => input::load_constraints(path).await?,
        None => RecommendationConstraints::default(),
    };
    for id in args.locked {
        if !constraints.locked_items.contains(&id) {
            constraints.locked_items.push(id);
        }
    }

    let store = Arc::new(InMemoryWardrobeStore::new());
    store.insert_wardrobe(CLI_USER, wardrobe);
    let service = RecommendationService::new(store, config);

    match service
        .recommend_for_user(CLI_USER, weather, constraints)
        .await
    {
        Ok(outfit) => {
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&outfit).context("serializing recommendation")?
                );
            } else {
                display::print_recommendation(&outfit);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) if error.code.is_wardrobe_condition() => {
            eprintln!("{}", error.message);
            Ok(ExitCode::from(WARDROBE_CONDITION_EXIT))
        }
        Err(error) => Err(error.into()),
    }
}
