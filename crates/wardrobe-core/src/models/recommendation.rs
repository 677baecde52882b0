// ABOUTME: Outfit recommendation output record and feedback models
// ABOUTME: Holds selected items, confidence, reasoning trail, type backfills, and data warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ClothingItem, ClothingType, DressCode, WeatherAlert, WeatherContext};

/// An inferred type the caller may write back to storage
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeBackfill {
    /// Item whose stored type was absent or non-canonical
    pub item_id: String,
    /// Canonical type inferred by the normalizer
    pub inferred_type: ClothingType,
}

/// One filled outfit slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotSelection {
    /// Slot being filled
    pub slot: ClothingType,
    /// Item chosen for it
    pub item_id: String,
    /// Resolved warmth of the chosen item
    pub insulation: f64,
    /// Whether the item was locked by the caller
    pub locked: bool,
}

/// Kind of data-quality problem the engine resolved with a default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemWarningKind {
    /// No type could be inferred; the item was treated as a Top
    UnrecognizedType,
    /// Insulation came from the global default rather than item data
    DefaultInsulation,
}

/// A soft data-quality warning for the caller to log
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemWarning {
    /// Affected item
    pub item_id: String,
    /// What was defaulted
    pub kind: ItemWarningKind,
}

/// Final recommendation record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitRecommendation {
    /// Identifier used for feedback tracking
    pub id: Uuid,
    /// Selected items in slot order
    pub items: Vec<ClothingItem>,
    /// Slot-by-slot view of the selection
    pub selections: Vec<SlotSelection>,
    /// 0.9 when every mandatory slot is filled, else 0.6 (configurable)
    pub confidence_score: f64,
    /// Human-readable trace of each pipeline stage
    pub reasoning: String,
    /// Alerts that influenced the selection
    pub alerts: Vec<WeatherAlert>,
    /// Echo of the weather context
    pub context: WeatherContext,
    /// Warmth target after activity adjustment
    pub required_insulation: f64,
    /// Dress code applied, if any
    pub dress_code: Option<DressCode>,
    /// Inferred types the caller may persist
    pub type_backfills: Vec<TypeBackfill>,
    /// Soft data-quality warnings
    pub warnings: Vec<ItemWarning>,
    /// When the recommendation was computed
    pub generated_at: DateTime<Utc>,
}

impl OutfitRecommendation {
    /// Whether every mandatory slot has an item
    #[must_use]
    pub fn is_complete(&self) -> bool {
        ClothingType::MANDATORY
            .iter()
            .all(|slot| self.selections.iter().any(|s| s.slot == *slot))
    }

    /// Selection for a slot, if filled
    #[must_use]
    pub fn selection_for(&self, slot: ClothingType) -> Option<&SlotSelection> {
        self.selections.iter().find(|s| s.slot == slot)
    }

    /// Whether an item id is part of the outfit
    #[must_use]
    pub fn contains_item(&self, item_id: &str) -> bool {
        self.items.iter().any(|item| item.id == item_id)
    }
}

/// User reaction to a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutfitFeedback {
    /// Thumbs up
    Like,
    /// Thumbs down
    Dislike,
}

/// Stored feedback for a recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Recommendation the feedback refers to
    pub recommendation_id: Uuid,
    /// The reaction
    pub feedback: OutfitFeedback,
    /// When it was recorded
    pub recorded_at: DateTime<Utc>,
}
