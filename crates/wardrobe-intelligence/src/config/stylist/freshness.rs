// ABOUTME: Freshness window configuration for recently worn items
// ABOUTME: Holds the default minimum days between wears
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

use serde::{Deserialize, Serialize};
use wardrobe_core::constants::freshness::DEFAULT_MIN_DAYS_SINCE_WORN;

/// Freshness filter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FreshnessConfig {
    /// Items worn more recently than this many days are held back
    pub min_days_since_worn: u32,
}

impl Default for FreshnessConfig {
    fn default() -> Self {
        Self {
            min_days_since_worn: DEFAULT_MIN_DAYS_SINCE_WORN,
        }
    }
}
