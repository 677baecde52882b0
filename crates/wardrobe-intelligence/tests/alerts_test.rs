// ABOUTME: Tests for alert derivation from weather readings and alert-aware ordering
// ABOUTME: Threshold grading, favored clothing types, and the stable wear order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{days_ago, top};
use wardrobe_core::models::{AlertKind, AlertSeverity, ClothingType, WeatherAlert, WeatherContext};
use wardrobe_intelligence::alerts::{derive_alerts, favored_types, prioritize};
use wardrobe_intelligence::candidate::build_candidates;
use wardrobe_intelligence::config::stylist::AlertThresholdsConfig;

#[test]
fn test_derive_alerts_grades_readings() {
    let context = WeatherContext {
        uv_index: Some(9.0),
        air_quality_index: Some(120.0),
        pollen_count: Some(2.0),
        ..WeatherContext::new(25.0, 26.0)
    };

    let alerts = derive_alerts(&context, &AlertThresholdsConfig::default());

    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].kind, AlertKind::Uv);
    assert_eq!(alerts[0].severity, AlertSeverity::High);
    assert_eq!(alerts[1].kind, AlertKind::AirQuality);
    assert_eq!(alerts[1].severity, AlertSeverity::Moderate);
}

#[test]
fn test_missing_readings_raise_nothing() {
    let context = WeatherContext::new(10.0, 8.0);
    let alerts = derive_alerts(&context, &AlertThresholdsConfig::default());
    assert!(alerts.is_empty());
}

#[test]
fn test_only_high_alerts_favor_types() {
    let alerts = vec![
        WeatherAlert::new(AlertKind::Uv, AlertSeverity::High),
        WeatherAlert::new(AlertKind::Pollen, AlertSeverity::Moderate),
    ];
    assert_eq!(
        favored_types(&alerts),
        vec![ClothingType::Headwear, ClothingType::Accessory]
    );

    let air = vec![
        WeatherAlert::new(AlertKind::AirQuality, AlertSeverity::High),
        WeatherAlert::new(AlertKind::Pollen, AlertSeverity::High),
    ];
    assert_eq!(favored_types(&air), vec![ClothingType::Outerwear]);
}

#[test]
fn test_alert_kinds_parse_provider_labels() {
    let alert: WeatherAlert =
        serde_json::from_value(serde_json::json!({"type": "AQI", "severity": "Severe"})).unwrap();
    assert_eq!(alert.kind, AlertKind::AirQuality);
    assert_eq!(alert.severity, AlertSeverity::High);
}

#[test]
fn test_prioritize_orders_never_worn_then_least_recently_worn() {
    let wardrobe = vec![
        top("recent", 3.0).worn_at(days_ago(5)),
        top("never", 3.0),
        top("oldest", 3.0).worn_at(days_ago(40)),
        top("never2", 3.0),
        top("old", 3.0).worn_at(days_ago(30)),
    ];
    let set = build_candidates(&wardrobe, &[]);
    let mut candidates = set.candidates.clone();

    prioritize(&mut candidates);

    let order: Vec<&str> = candidates.iter().map(|c| c.item.id.as_str()).collect();
    assert_eq!(order, vec!["never", "never2", "oldest", "old", "recent"]);
}
