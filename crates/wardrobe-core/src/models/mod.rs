// ABOUTME: Core data models for wardrobe items, weather context, and recommendations
// ABOUTME: Re-exports clothing, material, weather, constraint, and recommendation types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

//! # Data Models
//!
//! Semantic containers exchanged between the recommendation engine and its
//! callers. Items arrive as rows from a persistent store and are therefore
//! lenient on input: unknown or malformed fields deserialize to "absent"
//! rather than failing the whole wardrobe.

mod clothing;
mod constraints;
mod lenient;
mod material;
mod recommendation;
mod weather;

pub use clothing::{ClothingItem, ClothingType, Season};
pub use constraints::{ActivityLevel, CalendarEvent, DressCode, RecommendationConstraints};
pub use material::{normalize_material, Material};
pub use recommendation::{
    FeedbackRecord, ItemWarning, ItemWarningKind, OutfitFeedback, OutfitRecommendation,
    SlotSelection, TypeBackfill,
};
pub use weather::{AlertKind, AlertSeverity, WeatherAlert, WeatherContext};
