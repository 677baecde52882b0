// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for insulation scales, freshness windows, and messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Warmth scale shared by items and insulation targets
pub mod insulation {
    /// Lowest warmth rating an item can carry
    pub const MIN_INSULATION: f64 = 0.0;
    /// Highest warmth rating an item can carry
    pub const MAX_INSULATION: f64 = 10.0;
    /// Warmth assumed when neither material nor type says anything
    pub const DEFAULT_INSULATION: f64 = 3.0;
    /// Default half-width of the accepted band around the target
    pub const DEFAULT_TOLERANCE: f64 = 2.0;
}

/// Freshness window defaults
pub mod freshness {
    /// Default minimum number of days between two wears of the same item
    pub const DEFAULT_MIN_DAYS_SINCE_WORN: u32 = 3;
    /// Milliseconds in one day, used to compare wear timestamps
    pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
}

/// Confidence levels of the baseline scorer
pub mod confidence {
    /// Confidence when every mandatory slot is filled
    pub const COMPLETE_OUTFIT: f64 = 0.9;
    /// Confidence when at least one mandatory slot stayed empty
    pub const PARTIAL_OUTFIT: f64 = 0.6;
}

/// User-facing message fragments
pub mod messages {
    /// Shown when the wardrobe has no items at all
    pub const EMPTY_WARDROBE: &str =
        "Your wardrobe is empty. Add some clothing items to get outfit recommendations.";
    /// Prefix of the insufficient-items message, followed by the missing categories
    pub const INSUFFICIENT_ITEMS_PREFIX: &str = "You need to add at least one of each:";
    /// Prefix of the detected-types hint
    pub const DETECTED_TYPES_PREFIX: &str = "Detected types in your wardrobe:";
}
