// ABOUTME: Shared fixtures for recommendation engine integration tests
// ABOUTME: Fixed clock, item builders per clothing type, and quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `wardrobe_intelligence`

use std::sync::Once;

use chrono::{DateTime, Duration, TimeZone, Utc};
use wardrobe_core::models::{ClothingItem, WeatherContext};
use wardrobe_intelligence::config::stylist::StylistConfig;
use wardrobe_intelligence::OutfitEngine;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed reference time: 2025-01-15 12:00 UTC (winter)
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
}

/// `days` days before [`fixed_now`]
pub fn days_ago(days: i64) -> DateTime<Utc> {
    fixed_now() - Duration::days(days)
}

pub fn top(id: &str, insulation: f64) -> ClothingItem {
    ClothingItem::new(id, "Top")
        .with_name(format!("Top {id}"))
        .with_insulation(insulation)
}

pub fn bottom(id: &str, insulation: f64) -> ClothingItem {
    ClothingItem::new(id, "Bottom")
        .with_name(format!("Bottom {id}"))
        .with_insulation(insulation)
}

pub fn footwear(id: &str, insulation: f64) -> ClothingItem {
    ClothingItem::new(id, "Footwear")
        .with_name(format!("Shoes {id}"))
        .with_insulation(insulation)
}

pub fn outerwear(id: &str, insulation: f64) -> ClothingItem {
    ClothingItem::new(id, "Outerwear")
        .with_name(format!("Coat {id}"))
        .with_insulation(insulation)
}

pub fn headwear(id: &str, insulation: f64) -> ClothingItem {
    ClothingItem::new(id, "Headwear")
        .with_name(format!("Hat {id}"))
        .with_insulation(insulation)
}

pub fn accessory(id: &str, insulation: f64) -> ClothingItem {
    ClothingItem::new(id, "Accessory")
        .with_name(format!("Scarf {id}"))
        .with_insulation(insulation)
}

/// One mandatory item each, all at the given warmth
pub fn basic_wardrobe(insulation: f64) -> Vec<ClothingItem> {
    vec![
        top("t1", insulation),
        bottom("b1", insulation),
        footwear("f1", insulation),
    ]
}

/// Mild weather: feels like 15°C, warmth target 5
pub fn mild_weather() -> WeatherContext {
    WeatherContext::new(15.0, 15.0)
}

/// Engine on default configuration, independent of the environment
pub fn default_engine() -> OutfitEngine {
    init_test_logging();
    OutfitEngine::new(StylistConfig::default())
}
