// ABOUTME: Clothing item model and the closed clothing-type taxonomy
// ABOUTME: Defines wardrobe entries, slot types, and season labels with parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;

/// Closed clothing-type taxonomy used for outfit slots
///
/// Raw `type` and `category` strings stored on items are free text; the
/// type normalizer maps them onto this enum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClothingType {
    /// Shirts, sweaters, blouses
    Top,
    /// Trousers, jeans, skirts, shorts
    Bottom,
    /// Jackets, coats, hoodies
    Outerwear,
    /// Shoes, boots, sandals
    Footwear,
    /// Scarves, gloves, sunglasses, bags
    Accessory,
    /// Hats, caps, beanies
    Headwear,
}

impl ClothingType {
    /// Every type, in outfit slot order
    pub const ALL: [Self; 6] = [
        Self::Top,
        Self::Bottom,
        Self::Footwear,
        Self::Outerwear,
        Self::Headwear,
        Self::Accessory,
    ];

    /// Categories an outfit cannot do without (Outerwear may stand in for Top)
    pub const MANDATORY: [Self; 3] = [Self::Top, Self::Bottom, Self::Footwear];

    /// Canonical label, as written back to storage
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Bottom => "Bottom",
            Self::Outerwear => "Outerwear",
            Self::Footwear => "Footwear",
            Self::Accessory => "Accessory",
            Self::Headwear => "Headwear",
        }
    }

    /// Whether an outfit is incomplete without this slot
    #[must_use]
    pub const fn is_mandatory(self) -> bool {
        matches!(self, Self::Top | Self::Bottom | Self::Footwear)
    }
}

impl fmt::Display for ClothingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClothingType {
    type Err = String;

    /// Parse a canonical label (case-insensitive). Aliases such as "jeans"
    /// are the normalizer's job, not this parser's.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown clothing type: {s}"))
    }
}

/// Season labels used on items and in weather context
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Season {
    /// March to May (northern hemisphere)
    Spring,
    /// June to August
    Summer,
    /// September to November, also labelled "Fall"
    Autumn,
    /// December to February
    Winter,
    /// Wearable year round
    AllSeason,
}

impl Season {
    /// Parse a free-text season label
    #[must_use]
    pub fn parse_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "spring" => Some(Self::Spring),
            "summer" => Some(Self::Summer),
            "autumn" | "fall" => Some(Self::Autumn),
            "winter" => Some(Self::Winter),
            "all season" | "all seasons" | "all" | "year round" => Some(Self::AllSeason),
            _ => None,
        }
    }

    /// Northern-hemisphere meteorological season for a month (1-12)
    #[must_use]
    pub const fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Autumn,
            _ => Self::Winter,
        }
    }
}

/// A wardrobe entry as stored for a user
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClothingItem {
    /// Stable identifier, unique within a user's wardrobe
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Raw type label; may be legacy free text or absent
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    /// Legacy category label, fallback source for the type
    #[serde(default)]
    pub category: Option<String>,
    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Free-text style label
    #[serde(default)]
    pub style: Option<String>,
    /// Fit label (slim, relaxed, ...)
    #[serde(default)]
    pub fit: Option<String>,
    /// Occasion label (work, gym, ...)
    #[serde(default)]
    pub occasion: Option<String>,
    /// Material, possibly a blend such as "95% Cotton, 5% Spandex"
    #[serde(default)]
    pub material: Option<String>,
    /// Warmth rating 0-10; resolved from material or type when absent
    #[serde(default, deserialize_with = "lenient::finite_f64")]
    pub insulation_value: Option<f64>,
    /// Color label
    #[serde(default)]
    pub color: Option<String>,
    /// Pattern label
    #[serde(default)]
    pub pattern: Option<String>,
    /// Free-text style tags
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub style_tags: Vec<String>,
    /// Season labels (Spring, Summer, Autumn/Fall, Winter, All Season)
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub season_tags: Vec<String>,
    /// Dress-code labels (Casual, Business Casual, Athletic, Formal)
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub dress_code: Vec<String>,
    /// Last time the item was worn; `None` means never worn
    #[serde(default, alias = "last_worn_date")]
    pub last_worn: Option<DateTime<Utc>>,
    /// Favorites are exempt from freshness filtering
    #[serde(
        default,
        alias = "is_favorite",
        deserialize_with = "lenient::null_as_default"
    )]
    pub favorite: bool,
    /// Image location; its filename can carry type hints
    #[serde(default)]
    pub image_url: Option<String>,
    /// Number of logged wears
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub wear_count: u32,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ClothingItem {
    /// Create an item with an id and a raw type label
    #[must_use]
    pub fn new(id: impl Into<String>, item_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            item_type: Some(item_type.into()),
            ..Self::default()
        }
    }

    /// Create an item with no type information at all
    #[must_use]
    pub fn untyped(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the legacy category label
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the material label
    #[must_use]
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    /// Set an explicit insulation value
    #[must_use]
    pub fn with_insulation(mut self, insulation: f64) -> Self {
        self.insulation_value = Some(insulation);
        self
    }

    /// Set the last-worn timestamp
    #[must_use]
    pub fn worn_at(mut self, when: DateTime<Utc>) -> Self {
        self.last_worn = Some(when);
        self
    }

    /// Mark the item as a favorite
    #[must_use]
    pub fn as_favorite(mut self) -> Self {
        self.favorite = true;
        self
    }

    /// Add a dress-code label
    #[must_use]
    pub fn with_dress_code(mut self, code: impl Into<String>) -> Self {
        self.dress_code.push(code.into());
        self
    }

    /// Add a season label
    #[must_use]
    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season_tags.push(season.into());
        self
    }

    /// Add a style tag
    #[must_use]
    pub fn with_style_tag(mut self, tag: impl Into<String>) -> Self {
        self.style_tags.push(tag.into());
        self
    }

    /// Set the image location
    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Label used in reasoning text: the name if present, else the id
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.id)
    }
}
