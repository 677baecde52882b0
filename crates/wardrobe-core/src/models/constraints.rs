// ABOUTME: Caller-supplied recommendation constraints and calendar context
// ABOUTME: Defines dress codes, activity levels, locked items, and freshness overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::WeatherAlert;

/// Dress codes an outfit can be narrowed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DressCode {
    /// Everyday wear
    Casual,
    /// Office wear without a suit
    BusinessCasual,
    /// Sport and gym wear
    Athletic,
    /// Suits, gowns, black tie
    Formal,
}

impl DressCode {
    /// Display label, matching the labels stored on items
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Casual => "Casual",
            Self::BusinessCasual => "Business Casual",
            Self::Athletic => "Athletic",
            Self::Formal => "Formal",
        }
    }

    /// Parse a free-text dress-code label
    #[must_use]
    pub fn parse_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "casual" | "everyday" => Some(Self::Casual),
            "business casual" | "smart casual" | "business" | "work" => Some(Self::BusinessCasual),
            "athletic" | "sport" | "sports" | "sportswear" | "active" | "gym" => {
                Some(Self::Athletic)
            }
            "formal" | "black tie" | "cocktail" => Some(Self::Formal),
            _ => None,
        }
    }
}

impl fmt::Display for DressCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for DressCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_label(&value).ok_or_else(|| format!("unknown dress code: {value}"))
    }
}

impl From<DressCode> for String {
    fn from(value: DressCode) -> Self {
        value.as_str().to_owned()
    }
}

/// Planned physical activity; higher activity lowers the warmth target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActivityLevel {
    /// Sitting, walking short distances
    #[default]
    #[serde(alias = "low")]
    Low,
    /// Errands, commuting on foot
    #[serde(alias = "medium", alias = "moderate")]
    Medium,
    /// Running, cycling, hiking
    #[serde(alias = "high")]
    High,
}

impl ActivityLevel {
    /// Warmth points removed from the insulation target
    #[must_use]
    pub const fn insulation_reduction(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        })
    }
}

/// A calendar entry used to infer the day's dress code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Event title
    pub title: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Optional start time
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
}

impl CalendarEvent {
    /// Create an event with a title only
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Optional constraints supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationConstraints {
    /// Explicit dress code; inferred from events when absent
    #[serde(default)]
    pub dress_code: Option<DressCode>,
    /// Planned activity level
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    /// Overrides the configured freshness window
    #[serde(default)]
    pub min_days_since_worn: Option<u32>,
    /// Active alerts; derived from the weather context when absent
    #[serde(default)]
    pub weather_alerts: Option<Vec<WeatherAlert>>,
    /// Item ids that must appear in the outfit
    #[serde(default)]
    pub locked_items: Vec<String>,
    /// Today's calendar, used to infer a dress code
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
}
