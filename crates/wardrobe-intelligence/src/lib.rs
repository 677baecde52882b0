// ABOUTME: Outfit recommendation engine for the Wardrobe Stylist platform
// ABOUTME: Type normalization, insulation resolution, freshness and dress-code filters, selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

#![deny(unsafe_code)]

//! # Wardrobe Intelligence
//!
//! Pure, synchronous recommendation logic. Nothing in this crate performs I/O;
//! storage of type backfills and feedback belongs to the caller.
//!
//! ## Modules
//!
//! - `type_normalizer` - Alias and keyword mapping onto the clothing taxonomy
//! - `insulation` - Warmth resolution with material and type fallbacks
//! - `insulation_target` - Feels-like temperature to warmth target
//! - `freshness` - Recently-worn exclusion, lock reinstatement, safety net
//! - `dress_code` - Dress-code filter and activity adjustment
//! - `season` - Soft in-season preference
//! - `alerts` - Alert derivation and favored clothing types
//! - `recommendation_engine` - The end-to-end pipeline
//! - `selector` - Strategy seam and locked-item enforcement
//! - `config` - Engine configuration

/// Alert derivation and alert-favored clothing types
pub mod alerts;
/// Resolved candidate view over wardrobe items
pub mod candidate;
/// Engine configuration
pub mod config;
/// Dress-code filtering and activity adjustment
pub mod dress_code;
/// Freshness filter, lock reinstatement, category safety net
pub mod freshness;
/// Insulation resolver
pub mod insulation;
/// Insulation target calculator
pub mod insulation_target;
/// Reasoning trail
pub mod reasoning;
/// End-to-end recommendation pipeline
pub mod recommendation_engine;
/// Season preference
pub mod season;
/// Selection strategies
pub mod selector;
/// Type normalizer
pub mod type_normalizer;

pub use config::StylistConfig;
pub use insulation::resolve_insulation;
pub use insulation_target::calculate_required_insulation;
pub use recommendation_engine::{OutfitEngine, RecommendationRequest};
pub use selector::{enforce_locked_items, enforce_locked_outfit, selector_for, OutfitSelector};
pub use type_normalizer::{normalize_type, type_backfills};
