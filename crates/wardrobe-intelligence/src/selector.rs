// ABOUTME: Interchangeable outfit selection strategies behind a common async trait
// ABOUTME: Includes the locked-item post-check any strategy's output must pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

use std::fmt::Write as _;
use std::sync::Arc;

use async_trait::async_trait;
use wardrobe_core::errors::RecommendationError;
use wardrobe_core::models::{ClothingItem, OutfitRecommendation, SlotSelection};

use crate::config::stylist::{ScoringConfig, SelectionStrategy, StylistConfig};
use crate::insulation::resolve_insulation;
use crate::recommendation_engine::{OutfitEngine, RecommendationRequest};
use crate::type_normalizer::{normalize_type, DEFAULT_TYPE};

/// A strategy that turns a wardrobe and context into an outfit
#[async_trait]
pub trait OutfitSelector: Send + Sync {
    /// Which strategy this is
    fn strategy(&self) -> SelectionStrategy;

    /// Select an outfit for the request
    async fn select_outfit(
        &self,
        request: &RecommendationRequest,
    ) -> Result<OutfitRecommendation, RecommendationError>;
}

#[async_trait]
impl OutfitSelector for OutfitEngine {
    fn strategy(&self) -> SelectionStrategy {
        SelectionStrategy::Deterministic
    }

    async fn select_outfit(
        &self,
        request: &RecommendationRequest,
    ) -> Result<OutfitRecommendation, RecommendationError> {
        self.recommend(request)
    }
}

/// Build the selector named by the configuration
#[must_use]
pub fn selector_for(config: &StylistConfig) -> Arc<dyn OutfitSelector> {
    match config.selection.strategy {
        SelectionStrategy::Deterministic => Arc::new(OutfitEngine::new(config.clone())),
    }
}

/// Force every locked wardrobe item into `outfit`.
///
/// A missing locked item replaces the first unlocked item of the same type,
/// or is appended when the outfit has none. When every item of that type is
/// itself locked, the earlier lock keeps the slot. Ids not in the wardrobe
/// are ignored.
#[must_use]
pub fn enforce_locked_items(
    mut outfit: Vec<ClothingItem>,
    wardrobe: &[ClothingItem],
    locked_ids: &[String],
) -> Vec<ClothingItem> {
    let kind_of = |item: &ClothingItem| normalize_type(item).unwrap_or(DEFAULT_TYPE);

    for id in locked_ids {
        let Some(locked) = wardrobe.iter().find(|item| &item.id == id) else {
            continue;
        };
        if outfit.iter().any(|item| item.id == locked.id) {
            continue;
        }
        let kind = kind_of(locked);
        let same_kind: Vec<usize> = outfit
            .iter()
            .enumerate()
            .filter(|(_, item)| kind_of(item) == kind)
            .map(|(index, _)| index)
            .collect();
        let replaceable = same_kind
            .iter()
            .copied()
            .find(|index| !locked_ids.contains(&outfit[*index].id));
        match replaceable {
            Some(index) => outfit[index] = locked.clone(),
            None if same_kind.is_empty() => outfit.push(locked.clone()),
            // The slot already holds an earlier locked item
            None => {}
        }
    }
    outfit
}

/// Apply [`enforce_locked_items`] to a whole recommendation.
///
/// Slot selections and confidence are rebuilt from the final item list. An
/// inserted locked item takes over the slot of the item it replaced, or its
/// own type's slot when appended.
pub fn enforce_locked_outfit(
    outfit: &mut OutfitRecommendation,
    wardrobe: &[ClothingItem],
    locked_ids: &[String],
    scoring: &ScoringConfig,
) {
    let before: Vec<String> = outfit.items.iter().map(|item| item.id.clone()).collect();
    let items = enforce_locked_items(std::mem::take(&mut outfit.items), wardrobe, locked_ids);
    let previous = std::mem::take(&mut outfit.selections);
    let selection_of = |id: &str| previous.iter().find(|s| s.item_id == id);

    let mut inserted = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let replaced = before.get(index).map(String::as_str);
        if replaced == Some(item.id.as_str()) {
            if let Some(selection) = selection_of(item.id.as_str()) {
                outfit.selections.push(selection.clone());
            }
            continue;
        }
        let slot = replaced
            .and_then(selection_of)
            .map_or_else(|| normalize_type(item).unwrap_or(DEFAULT_TYPE), |s| s.slot);
        outfit.selections.push(SlotSelection {
            slot,
            item_id: item.id.clone(),
            insulation: resolve_insulation(item),
            locked: true,
        });
        inserted.push(item.id.clone());
    }
    outfit.items = items;

    if inserted.is_empty() {
        return;
    }
    outfit.confidence_score = if outfit.is_complete() {
        scoring.complete_confidence
    } else {
        scoring.partial_confidence
    };
    let _ = write!(
        outfit.reasoning,
        " Locked item(s) {} added after selection.",
        inserted.join(", ")
    );
}
