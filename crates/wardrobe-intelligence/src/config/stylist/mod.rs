// ABOUTME: Stylist engine configuration for outfit recommendation
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

//! Stylist Configuration Module
//!
//! Explicit configuration passed into the recommendation engine so tests can
//! vary freshness windows, tolerances, and confidence levels without touching
//! shared state.
//!
//! # Module Structure
//!
//! - `freshness` - Minimum days between wears
//! - `insulation` - Target formula and tolerance band
//! - `scoring` - Confidence levels and selection strategy
//! - `alerts` - Thresholds for deriving weather alerts
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export STYLIST_MIN_DAYS_SINCE_WORN=5
//!    export STYLIST_INSULATION_FORMULA=comfort
//!    ```
//!
//! 2. Default values (if env vars not set)

/// Weather alert thresholds
pub mod alerts;
/// Configuration errors
pub mod error;
/// Freshness window settings
pub mod freshness;
/// Warmth target formula and tolerance
pub mod insulation;
/// Confidence levels and selection strategy
pub mod scoring;

pub use alerts::AlertThresholdsConfig;
pub use error::ConfigError;
pub use freshness::FreshnessConfig;
pub use insulation::{InsulationConfig, InsulationFormula};
pub use scoring::{ScoringConfig, SelectionConfig, SelectionStrategy};

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Global configuration singleton
static STYLIST_CONFIG: OnceLock<StylistConfig> = OnceLock::new();

/// Main stylist configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StylistConfig {
    /// Freshness filter settings
    #[serde(default)]
    pub freshness: FreshnessConfig,
    /// Insulation target settings
    #[serde(default)]
    pub insulation: InsulationConfig,
    /// Confidence levels
    #[serde(default)]
    pub scoring: ScoringConfig,
    /// Alert derivation thresholds
    #[serde(default)]
    pub alerts: AlertThresholdsConfig,
    /// Selector choice
    #[serde(default)]
    pub selection: SelectionConfig,
}

impl StylistConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        STYLIST_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load stylist config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent value
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scoring = &self.scoring;
        if !(0.0..=1.0).contains(&scoring.complete_confidence)
            || !(0.0..=1.0).contains(&scoring.partial_confidence)
        {
            return Err(ConfigError::ValueOutOfRange(
                "confidence levels must be between 0.0 and 1.0",
            ));
        }
        if scoring.partial_confidence >= scoring.complete_confidence {
            return Err(ConfigError::InvalidRange(
                "partial_confidence must be < complete_confidence",
            ));
        }

        let insulation = &self.insulation;
        if !insulation.tolerance.is_finite() || insulation.tolerance < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "insulation tolerance must be a non-negative number",
            ));
        }
        if !insulation.comfort_step_celsius.is_finite() || insulation.comfort_step_celsius <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "comfort_step_celsius must be positive",
            ));
        }

        let alerts = &self.alerts;
        if alerts.uv_moderate >= alerts.uv_high {
            return Err(ConfigError::InvalidRange("uv_moderate must be < uv_high"));
        }
        if alerts.aqi_moderate >= alerts.aqi_high {
            return Err(ConfigError::InvalidRange("aqi_moderate must be < aqi_high"));
        }
        if alerts.pollen_moderate >= alerts.pollen_high {
            return Err(ConfigError::InvalidRange(
                "pollen_moderate must be < pollen_high",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "STYLIST_MIN_DAYS_SINCE_WORN",
            &mut self.freshness.min_days_since_worn,
        )?;

        if let Ok(val) = env::var("STYLIST_INSULATION_FORMULA") {
            self.insulation.formula = val.parse()?;
        }
        Self::apply_env_var(
            "STYLIST_INSULATION_TOLERANCE",
            &mut self.insulation.tolerance,
        )?;

        Self::apply_env_var(
            "STYLIST_COMPLETE_CONFIDENCE",
            &mut self.scoring.complete_confidence,
        )?;
        Self::apply_env_var(
            "STYLIST_PARTIAL_CONFIDENCE",
            &mut self.scoring.partial_confidence,
        )?;

        Self::apply_env_var("STYLIST_UV_HIGH", &mut self.alerts.uv_high)?;
        Self::apply_env_var("STYLIST_AQI_HIGH", &mut self.alerts.aqi_high)?;
        Self::apply_env_var("STYLIST_POLLEN_HIGH", &mut self.alerts.pollen_high)?;

        if let Ok(val) = env::var("STYLIST_SELECTION_STRATEGY") {
            self.selection.strategy = val.parse()?;
        }

        Ok(self)
    }
}
