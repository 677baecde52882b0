// ABOUTME: Scoring configuration for outfit confidence levels and selection strategy
// ABOUTME: Configures the two-level confidence score and which selector produces outfits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

//! Scoring Configuration
//!
//! The baseline scorer is a deterministic two-level rule, not a learned model:
//! a complete outfit gets `complete_confidence`, anything else gets
//! `partial_confidence`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use wardrobe_core::constants::confidence::{COMPLETE_OUTFIT, PARTIAL_OUTFIT};

use super::ConfigError;

/// Confidence levels assigned by the baseline scorer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Score when every mandatory slot is filled
    pub complete_confidence: f64,
    /// Score when a mandatory slot stayed empty
    pub partial_confidence: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            complete_confidence: COMPLETE_OUTFIT,
            partial_confidence: PARTIAL_OUTFIT,
        }
    }
}

/// Which selector produces outfits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Rule-based filtering and scoring pipeline
    #[default]
    Deterministic,
}

impl FromStr for SelectionStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deterministic" | "rules" => Ok(Self::Deterministic),
            other => Err(ConfigError::Parse(format!(
                "Unsupported selection strategy: {other}"
            ))),
        }
    }
}

/// Selection configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Active selector
    pub strategy: SelectionStrategy,
}
