// ABOUTME: Derives weather alerts from readings and maps high alerts to favored clothing types
// ABOUTME: High UV favors headwear and accessories; high AQI or pollen favors outerwear
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

//! # Alert-Aware Prioritizer
//!
//! Alerts act on whole slots, not on items: a favored optional slot
//! (headwear, accessory, outerwear) is filled with the closest-warmth item
//! even when nothing lies inside the tolerance band. Nothing is excluded.
//! Every slot pool holds a single clothing type, so within a slot
//! candidates are ordered by wear history alone.

use std::cmp::Ordering;

use wardrobe_core::models::{AlertKind, AlertSeverity, ClothingType, WeatherAlert, WeatherContext};

use crate::candidate::Candidate;
use crate::config::stylist::AlertThresholdsConfig;

fn grade(value: Option<f64>, moderate: f64, high: f64) -> Option<AlertSeverity> {
    let value = value.filter(|v| v.is_finite())?;
    if value >= high {
        Some(AlertSeverity::High)
    } else if value >= moderate {
        Some(AlertSeverity::Moderate)
    } else {
        None
    }
}

/// Derive alerts from raw UV, air-quality, and pollen readings
#[must_use]
pub fn derive_alerts(
    context: &WeatherContext,
    thresholds: &AlertThresholdsConfig,
) -> Vec<WeatherAlert> {
    let readings = [
        (
            AlertKind::Uv,
            context.uv_index,
            thresholds.uv_moderate,
            thresholds.uv_high,
        ),
        (
            AlertKind::AirQuality,
            context.air_quality_index,
            thresholds.aqi_moderate,
            thresholds.aqi_high,
        ),
        (
            AlertKind::Pollen,
            context.pollen_count,
            thresholds.pollen_moderate,
            thresholds.pollen_high,
        ),
    ];

    readings
        .into_iter()
        .filter_map(|(kind, value, moderate, high)| {
            let severity = grade(value, moderate, high)?;
            let message = format!("{kind} {severity} ({:.0})", value.unwrap_or_default());
            Some(WeatherAlert::new(kind, severity).with_message(message))
        })
        .collect()
}

/// Types that mitigate the given high-severity alerts
#[must_use]
pub fn favored_types(alerts: &[WeatherAlert]) -> Vec<ClothingType> {
    let mut favored = Vec::new();
    for alert in alerts.iter().filter(|a| a.severity == AlertSeverity::High) {
        let kinds: &[ClothingType] = match alert.kind {
            AlertKind::Uv => &[ClothingType::Headwear, ClothingType::Accessory],
            AlertKind::AirQuality | AlertKind::Pollen => &[ClothingType::Outerwear],
            AlertKind::Other(_) => &[],
        };
        for kind in kinds {
            if !favored.contains(kind) {
                favored.push(*kind);
            }
        }
    }
    favored
}

/// Least recently worn first; never-worn items lead
fn wear_order(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    match (a.item.last_worn, b.item.last_worn) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.cmp(&y),
    }
}

/// Stable reorder of one slot's shortlist: least recently worn first, then input order
pub fn prioritize(candidates: &mut [Candidate<'_>]) {
    candidates.sort_by(wear_order);
}
