// ABOUTME: Current-season resolution and soft season preference for slot candidates
// ABOUTME: Untagged and all-season items always match; filtering never empties a slot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

use chrono::{DateTime, Datelike, Utc};
use wardrobe_core::models::{ClothingItem, Season, WeatherContext};

use crate::candidate::WardrobeEntry;

/// Season from the weather context, else from the month of `now`
#[must_use]
pub fn current_season(context: &WeatherContext, now: DateTime<Utc>) -> Season {
    context
        .season
        .as_deref()
        .and_then(Season::parse_label)
        .filter(|season| *season != Season::AllSeason)
        .unwrap_or_else(|| Season::from_month(now.month()))
}

/// Whether an item may be worn in `season`
#[must_use]
pub fn suits_season(item: &ClothingItem, season: Season) -> bool {
    let tags: Vec<Season> = item
        .season_tags
        .iter()
        .filter_map(|tag| Season::parse_label(tag))
        .collect();
    tags.is_empty() || tags.contains(&season) || tags.contains(&Season::AllSeason)
}

/// Prefer in-season items, falling back to the full list when none qualify
#[must_use]
pub fn prefer_season<T: WardrobeEntry + Clone>(items: Vec<T>, season: Season) -> Vec<T> {
    let in_season: Vec<T> = items
        .iter()
        .filter(|entry| suits_season(entry.item(), season))
        .cloned()
        .collect();
    if in_season.is_empty() {
        items
    } else {
        in_season
    }
}
