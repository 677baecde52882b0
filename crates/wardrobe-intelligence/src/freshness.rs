// ABOUTME: Freshness filter excluding recently worn items, with lock and starvation overrides
// ABOUTME: Favorites and never-worn items always pass; locked items are reinstated afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

//! # Freshness Filter
//!
//! Three steps applied in order:
//!
//! 1. [`filter_by_last_worn`] drops items worn within `min_days`
//! 2. [`reinstate_locked`] puts locked items back
//! 3. [`ensure_mandatory_categories`] backfills any mandatory category the
//!    first two steps starved, ignoring freshness
//!
//! Excluded items are never removed from the wardrobe itself.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use wardrobe_core::constants::freshness::MILLIS_PER_DAY;
use wardrobe_core::models::{ClothingItem, ClothingType};

use crate::candidate::{Candidate, WardrobeEntry};

/// Whether an item may be worn again at `now`
#[must_use]
pub fn is_fresh(item: &ClothingItem, min_days: u32, now: DateTime<Utc>) -> bool {
    let old_enough = |worn: DateTime<Utc>| {
        now.signed_duration_since(worn).num_milliseconds() >= i64::from(min_days) * MILLIS_PER_DAY
    };
    item.favorite || item.last_worn.is_none_or(old_enough)
}

/// Keep items that are favorites, never worn, or worn at least `min_days` ago
#[must_use]
pub fn filter_by_last_worn<T: WardrobeEntry + Clone>(
    items: &[T],
    min_days: u32,
    now: DateTime<Utc>,
) -> Vec<T> {
    items
        .iter()
        .filter(|entry| is_fresh(entry.item(), min_days, now))
        .cloned()
        .collect()
}

/// Re-add locked items missing from `filtered`, taken from `original`
#[must_use]
pub fn reinstate_locked<T: WardrobeEntry + Clone>(
    mut filtered: Vec<T>,
    original: &[T],
    locked_ids: &[String],
) -> Vec<T> {
    if locked_ids.is_empty() {
        return filtered;
    }
    let locked: HashSet<&str> = locked_ids.iter().map(String::as_str).collect();
    let mut present: HashSet<String> = filtered.iter().map(|e| e.id().to_owned()).collect();

    for entry in original {
        if locked.contains(entry.id()) && present.insert(entry.id().to_owned()) {
            filtered.push(entry.clone());
        }
    }
    filtered
}

/// Whether the pool can fill the given mandatory slot (Outerwear stands in for Top)
#[must_use]
pub fn covers_slot(pool: &[Candidate<'_>], slot: ClothingType) -> bool {
    pool.iter().any(|c| {
        c.kind == slot || (slot == ClothingType::Top && c.kind == ClothingType::Outerwear)
    })
}

/// Backfill every starved mandatory category from the unfiltered candidates.
///
/// Returns the categories that needed backfill.
pub fn ensure_mandatory_categories<'a>(
    pool: &mut Vec<Candidate<'a>>,
    all: &[Candidate<'a>],
) -> Vec<ClothingType> {
    let mut backfilled = Vec::new();

    for slot in ClothingType::MANDATORY {
        if covers_slot(pool, slot) {
            continue;
        }
        let kind = if slot == ClothingType::Top && !all.iter().any(|c| c.kind == slot) {
            ClothingType::Outerwear
        } else {
            slot
        };

        let mut present: HashSet<&str> = pool.iter().map(|c| c.item.id.as_str()).collect();
        let additions: Vec<Candidate<'a>> = all
            .iter()
            .filter(|c| c.kind == kind && present.insert(c.item.id.as_str()))
            .copied()
            .collect();

        if !additions.is_empty() {
            pool.extend(additions);
            backfilled.push(slot);
        }
    }

    backfilled
}
