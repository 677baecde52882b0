// ABOUTME: Insulation target configuration for weather-driven warmth selection
// ABOUTME: Selects the target formula and the tolerance band around the target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

//! Insulation Configuration
//!
//! Two target formulas exist and they diverge in mid-range temperatures, so
//! exactly one is selected here and the engine never blends them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use wardrobe_core::constants::insulation::DEFAULT_TOLERANCE;

use super::ConfigError;

/// How feels-like temperature maps to a warmth target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsulationFormula {
    /// Fixed bands: <0°C → 9, [0,10) → 7, [10,20) → 5, [20,25) → 3, ≥25 → 1
    #[default]
    Bands,
    /// Continuous: `max(1, ceil((reference − feels_like) / step))`
    Comfort,
}

impl FromStr for InsulationFormula {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bands" | "band" | "discrete" => Ok(Self::Bands),
            "comfort" | "continuous" => Ok(Self::Comfort),
            other => Err(ConfigError::Parse(format!(
                "Invalid insulation formula: {other}"
            ))),
        }
    }
}

impl fmt::Display for InsulationFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bands => "bands",
            Self::Comfort => "comfort",
        })
    }
}

/// Insulation target configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InsulationConfig {
    /// Formula used to compute the target
    pub formula: InsulationFormula,
    /// Half-width of the accepted band around the target
    pub tolerance: f64,
    /// Reference temperature of the comfort formula (°C)
    pub comfort_reference_celsius: f64,
    /// Degrees per warmth point in the comfort formula
    pub comfort_step_celsius: f64,
}

impl Default for InsulationConfig {
    fn default() -> Self {
        Self {
            formula: InsulationFormula::Bands,
            tolerance: DEFAULT_TOLERANCE,
            comfort_reference_celsius: 27.0,
            comfort_step_celsius: 2.5,
        }
    }
}
