// ABOUTME: Tests for the freshness filter, lock reinstatement, and category safety net
// ABOUTME: Checks favorites, never-worn items, monotonicity over time, and starvation backfill
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{bottom, days_ago, fixed_now, footwear, outerwear, top};
use wardrobe_core::models::{ClothingItem, ClothingType};
use wardrobe_intelligence::candidate::build_candidates;
use wardrobe_intelligence::freshness::{
    covers_slot, ensure_mandatory_categories, filter_by_last_worn, is_fresh, reinstate_locked,
};

fn ids<'a>(items: impl IntoIterator<Item = &'a ClothingItem>) -> Vec<&'a str> {
    items.into_iter().map(|item| item.id.as_str()).collect()
}

#[test]
fn test_recently_worn_item_excluded_unless_favorite() {
    let worn = top("t1", 5.0).worn_at(days_ago(2));
    assert!(!is_fresh(&worn, 7, fixed_now()));

    let favorite = worn.as_favorite();
    assert!(is_fresh(&favorite, 7, fixed_now()));
}

#[test]
fn test_never_worn_item_always_fresh() {
    let item = top("t1", 5.0);
    assert!(is_fresh(&item, 365, fixed_now()));
}

#[test]
fn test_boundary_is_inclusive() {
    let item = top("t1", 5.0).worn_at(days_ago(3));
    assert!(is_fresh(&item, 3, fixed_now()));

    let cutoff = fixed_now() - Duration::days(3);
    let just_short = top("t2", 5.0).worn_at(cutoff + Duration::milliseconds(1));
    assert!(!is_fresh(&just_short, 3, fixed_now()));
}

#[test]
fn test_filter_keeps_wardrobe_order() {
    let wardrobe = vec![
        top("old", 5.0).worn_at(days_ago(10)),
        top("recent", 5.0).worn_at(days_ago(1)),
        top("never", 5.0),
        top("fav", 5.0).worn_at(days_ago(1)).as_favorite(),
    ];

    let fresh = filter_by_last_worn(&wardrobe, 3, fixed_now());

    assert_eq!(ids(&fresh), vec!["old", "never", "fav"]);
    assert_eq!(wardrobe.len(), 4);
}

#[test]
fn test_time_passing_never_removes_an_eligible_item() {
    let wardrobe: Vec<ClothingItem> = (0..10)
        .map(|d| top(&format!("t{d}"), 5.0).worn_at(days_ago(d)))
        .collect();

    let mut previous: Vec<String> = Vec::new();
    for hours in (0..240).step_by(6) {
        let now = fixed_now() + Duration::hours(hours);
        let current: Vec<String> = filter_by_last_worn(&wardrobe, 4, now)
            .iter()
            .map(|item| item.id.clone())
            .collect();
        assert!(previous.iter().all(|id| current.contains(id)));
        previous = current;
    }
}

#[test]
fn test_locked_items_reinstated_once() {
    let wardrobe = vec![
        top("t1", 5.0).worn_at(days_ago(1)),
        bottom("b1", 5.0).worn_at(days_ago(1)),
        footwear("f1", 5.0),
    ];
    let locked = vec!["t1".to_owned(), "f1".to_owned(), "ghost".to_owned()];

    let fresh = filter_by_last_worn(&wardrobe, 3, fixed_now());
    let reinstated = reinstate_locked(fresh, &wardrobe, &locked);

    assert_eq!(ids(&reinstated), vec!["f1", "t1"]);
}

#[test]
fn test_lock_invariant_for_every_subset() {
    let wardrobe: Vec<ClothingItem> = (0..5)
        .map(|i| top(&format!("t{i}"), 5.0).worn_at(days_ago(0)))
        .collect();

    for mask in 1u32..32 {
        let locked: Vec<String> = (0..5)
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| format!("t{i}"))
            .collect();
        let fresh = filter_by_last_worn(&wardrobe, 7, fixed_now());
        let pool = reinstate_locked(fresh, &wardrobe, &locked);
        for id in &locked {
            assert!(pool.iter().any(|item| &item.id == id));
        }
    }
}

#[test]
fn test_safety_net_backfills_starved_categories() {
    let wardrobe = vec![
        top("t1", 5.0),
        bottom("b1", 5.0).worn_at(days_ago(1)),
        bottom("b2", 5.0).worn_at(days_ago(2)),
        footwear("f1", 5.0).worn_at(days_ago(1)),
    ];
    let set = build_candidates(&wardrobe, &[]);
    let mut pool = filter_by_last_worn(&set.candidates, 7, fixed_now());
    assert!(!covers_slot(&pool, ClothingType::Bottom));

    let backfilled = ensure_mandatory_categories(&mut pool, &set.candidates);

    assert_eq!(
        backfilled,
        vec![ClothingType::Bottom, ClothingType::Footwear]
    );
    assert_eq!(
        ids(pool.iter().map(|c| c.item)),
        vec!["t1", "b1", "b2", "f1"]
    );
    for slot in ClothingType::MANDATORY {
        assert!(covers_slot(&pool, slot));
    }

    // Running again adds nothing and never duplicates
    let added = ensure_mandatory_categories(&mut pool, &set.candidates);
    assert!(added.is_empty());
    assert_eq!(pool.len(), 4);
}

#[test]
fn test_outerwear_substitutes_for_missing_tops() {
    let wardrobe = vec![
        outerwear("o1", 7.0).worn_at(days_ago(1)),
        bottom("b1", 5.0),
        footwear("f1", 5.0),
    ];
    let set = build_candidates(&wardrobe, &[]);
    let mut pool = filter_by_last_worn(&set.candidates, 7, fixed_now());

    let backfilled = ensure_mandatory_categories(&mut pool, &set.candidates);

    assert_eq!(backfilled, vec![ClothingType::Top]);
    assert!(pool.iter().any(|c| c.item.id == "o1"));
}

#[test]
fn test_safety_net_cannot_invent_missing_categories() {
    let wardrobe = vec![top("t1", 5.0), footwear("f1", 5.0)];
    let set = build_candidates(&wardrobe, &[]);
    let mut pool = set.candidates.clone();

    let backfilled = ensure_mandatory_categories(&mut pool, &set.candidates);

    assert!(backfilled.is_empty());
    assert!(!covers_slot(&pool, ClothingType::Bottom));
}
