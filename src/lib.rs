// ABOUTME: Main library entry point for the Wardrobe Stylist outfit recommendation platform
// ABOUTME: Re-exports the engine crates and provides the service layer, input loaders, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

#![deny(unsafe_code)]

//! # Wardrobe Stylist
//!
//! Deterministic outfit recommendations from a wardrobe, a weather snapshot,
//! and optional constraints.
//!
//! ## Architecture
//!
//! - **`wardrobe-core`**: data model, error taxonomy, constants
//! - **`wardrobe-intelligence`**: the pure recommendation engine
//! - **services**: storage seam, type backfill, feedback loop
//! - **`stylist-cli`**: command-line front end over JSON files
//!
//! ## Example
//!
//! ```rust,no_run
//! use wardrobe_stylist::models::{ClothingItem, WeatherContext};
//! use wardrobe_stylist::intelligence::{OutfitEngine, RecommendationRequest, StylistConfig};
//!
//! let wardrobe = vec![
//!     ClothingItem::new("t1", "Top"),
//!     ClothingItem::new("b1", "jeans"),
//!     ClothingItem::new("f1", "sneakers"),
//! ];
//! let engine = OutfitEngine::new(StylistConfig::default());
//! let outfit = engine.recommend(&RecommendationRequest::new(wardrobe, WeatherContext::new(12.0, 10.0)));
//! ```

/// JSON file loaders
pub mod input;
/// Logging configuration
pub mod logging;
/// Recommendation service and storage seam
pub mod services;

pub use wardrobe_core::{constants, errors, models};
pub use wardrobe_intelligence as intelligence;
