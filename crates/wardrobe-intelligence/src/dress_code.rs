// ABOUTME: Dress-code filtering, dress-code inference from calendar events, activity adjustment
// ABOUTME: Strict filter on item dress-code tags; activity lowers the warmth target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

use wardrobe_core::models::{ActivityLevel, CalendarEvent, DressCode};

use crate::candidate::WardrobeEntry;

const WORK_KEYWORDS: &[&str] = &[
    "work",
    "business",
    "meeting",
    "office",
    "interview",
    "client",
    "conference",
    "presentation",
];

const ACTIVE_KEYWORDS: &[&str] = &[
    "gym", "workout", "run", "running", "training", "yoga", "hike", "hiking", "sport", "active",
    "practice", "match",
];

/// Whether an item's dress-code tags include `code`
#[must_use]
pub fn matches_dress_code(tags: &[String], code: DressCode) -> bool {
    tags.iter()
        .any(|tag| DressCode::parse_label(tag) == Some(code))
}

/// Keep items tagged with `code`
#[must_use]
pub fn filter_by_dress_code<T: WardrobeEntry + Clone>(items: &[T], code: DressCode) -> Vec<T> {
    items
        .iter()
        .filter(|entry| matches_dress_code(&entry.item().dress_code, code))
        .cloned()
        .collect()
}

fn event_mentions(event: &CalendarEvent, keywords: &[&str]) -> bool {
    let text = format!(
        "{} {}",
        event.title,
        event.description.as_deref().unwrap_or_default()
    )
    .to_lowercase();
    text.split(|c: char| !c.is_alphanumeric())
        .any(|word| keywords.contains(&word))
}

/// Infer a dress code from the day's calendar.
///
/// A work or business event wins over an active one; everything else is casual.
#[must_use]
pub fn dress_code_from_events(events: &[CalendarEvent]) -> DressCode {
    if events.iter().any(|e| event_mentions(e, WORK_KEYWORDS)) {
        DressCode::BusinessCasual
    } else if events.iter().any(|e| event_mentions(e, ACTIVE_KEYWORDS)) {
        DressCode::Athletic
    } else {
        DressCode::Casual
    }
}

/// Lower the warmth target for physical activity, floored at zero
#[must_use]
pub fn adjust_insulation_for_activity(base: f64, level: ActivityLevel) -> f64 {
    (base - f64::from(level.insulation_reduction())).max(0.0)
}
