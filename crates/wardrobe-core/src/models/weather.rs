// ABOUTME: Weather context snapshot and weather alert models
// ABOUTME: Carries feels-like temperature, UV, air quality, pollen, and alert severities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lenient;

/// Weather snapshot supplied by the caller (pass-through from a weather API)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WeatherContext {
    /// Air temperature in Celsius
    pub temperature: f64,
    /// Apparent temperature in Celsius; the primary driver of the insulation target
    #[serde(default, deserialize_with = "lenient::finite_f64")]
    pub feels_like: Option<f64>,
    /// Relative humidity percentage (0-100)
    #[serde(default, deserialize_with = "lenient::finite_f64")]
    pub humidity: Option<f64>,
    /// Wind speed in m/s
    #[serde(default, deserialize_with = "lenient::finite_f64")]
    pub wind_speed: Option<f64>,
    /// UV index (0-11+)
    #[serde(default, deserialize_with = "lenient::finite_f64")]
    pub uv_index: Option<f64>,
    /// Air quality index (US AQI scale)
    #[serde(default, deserialize_with = "lenient::finite_f64")]
    pub air_quality_index: Option<f64>,
    /// Pollen index (0-12 scale)
    #[serde(default, deserialize_with = "lenient::finite_f64")]
    pub pollen_count: Option<f64>,
    /// Condition label such as "Rain" or "Clear"
    #[serde(default)]
    pub weather_condition: Option<String>,
    /// Season label, when the caller knows it
    #[serde(default)]
    pub season: Option<String>,
    /// Free-text season description
    #[serde(default)]
    pub season_description: Option<String>,
}

impl WeatherContext {
    /// Create a context from air and apparent temperature
    #[must_use]
    pub fn new(temperature: f64, feels_like: f64) -> Self {
        Self {
            temperature,
            feels_like: Some(feels_like),
            ..Self::default()
        }
    }

    /// Apparent temperature, falling back to air temperature when the
    /// apparent reading is absent or not finite
    #[must_use]
    pub fn effective_feels_like(&self) -> f64 {
        self.feels_like
            .filter(|feels_like| feels_like.is_finite())
            .unwrap_or(self.temperature)
    }
}

/// Kind of weather alert
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AlertKind {
    /// Ultraviolet radiation
    Uv,
    /// Air quality
    AirQuality,
    /// Pollen
    Pollen,
    /// Any other alert the provider emits
    Other(String),
}

impl From<String> for AlertKind {
    fn from(value: String) -> Self {
        let normalized = value.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "uv" | "uv index" | "ultraviolet" => Self::Uv,
            "aqi" | "air quality" | "air quality index" | "air" => Self::AirQuality,
            "pollen" | "pollen count" | "allergy" => Self::Pollen,
            _ => Self::Other(value),
        }
    }
}

impl From<AlertKind> for String {
    fn from(value: AlertKind) -> Self {
        value.to_string()
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uv => f.write_str("UV"),
            Self::AirQuality => f.write_str("AQI"),
            Self::Pollen => f.write_str("Pollen"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// Severity of a weather alert; providers name the levels differently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AlertSeverity {
    /// Informational
    Low,
    /// Worth mentioning
    Moderate,
    /// Drives prioritization
    High,
}

impl From<String> for AlertSeverity {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "high" | "very high" | "severe" | "extreme" | "critical" => Self::High,
            "moderate" | "medium" | "elevated" => Self::Moderate,
            _ => Self::Low,
        }
    }
}

impl From<AlertSeverity> for String {
    fn from(value: AlertSeverity) -> Self {
        value.to_string()
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        })
    }
}

/// An active weather alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherAlert {
    /// What the alert is about
    #[serde(rename = "type")]
    pub kind: AlertKind,
    /// How severe it is
    pub severity: AlertSeverity,
    /// Provider message, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl WeatherAlert {
    /// Create an alert without a message
    #[must_use]
    pub const fn new(kind: AlertKind, severity: AlertSeverity) -> Self {
        Self {
            kind,
            severity,
            message: None,
        }
    }

    /// Attach a provider message
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
