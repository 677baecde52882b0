// ABOUTME: Weather alert thresholds used to derive alerts from raw readings
// ABOUTME: Configures UV, air quality, and pollen moderate/high cut-offs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

use serde::{Deserialize, Serialize};

/// Thresholds for deriving alerts when the caller supplies none
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertThresholdsConfig {
    /// UV index at or above which a moderate alert is raised
    pub uv_moderate: f64,
    /// UV index at or above which a high alert is raised
    pub uv_high: f64,
    /// AQI at or above which a moderate alert is raised
    pub aqi_moderate: f64,
    /// AQI at or above which a high alert is raised
    pub aqi_high: f64,
    /// Pollen index at or above which a moderate alert is raised
    pub pollen_moderate: f64,
    /// Pollen index at or above which a high alert is raised
    pub pollen_high: f64,
}

impl Default for AlertThresholdsConfig {
    fn default() -> Self {
        Self {
            uv_moderate: 6.0,
            uv_high: 8.0,
            aqi_moderate: 101.0,
            aqi_high: 151.0,
            pollen_moderate: 5.0,
            pollen_high: 8.0,
        }
    }
}
