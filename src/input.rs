// ABOUTME: JSON file loaders for wardrobes, weather snapshots, and constraints
// ABOUTME: Accepts bare arrays or wrapped store exports; parse failures map to AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use wardrobe_core::errors::{AppError, AppResult, ErrorCode};
use wardrobe_core::models::{ClothingItem, RecommendationConstraints, WeatherContext};

/// A wardrobe file: either a bare array or `{"items": [...]}`
#[derive(Deserialize)]
#[serde(untagged)]
enum WardrobeFile {
    Bare(Vec<ClothingItem>),
    Wrapped { items: Vec<ClothingItem> },
}

impl WardrobeFile {
    fn into_items(self) -> Vec<ClothingItem> {
        match self {
            Self::Bare(items) | Self::Wrapped { items } => items,
        }
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> AppResult<T> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::invalid_input(format!("Cannot read {what} file {}", path.display()))
            .with_source(e)
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        AppError::new(
            ErrorCode::SerializationError,
            format!("Invalid {what} JSON in {}: {e}", path.display()),
        )
        .with_source(e)
    })
}

/// Parse a wardrobe from JSON text
///
/// # Errors
///
/// Returns `SerializationError` if the text is neither an item array nor an `items` wrapper
pub fn parse_wardrobe(raw: &str) -> AppResult<Vec<ClothingItem>> {
    Ok(serde_json::from_str::<WardrobeFile>(raw)?.into_items())
}

/// Load a wardrobe file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub async fn load_wardrobe(path: &Path) -> AppResult<Vec<ClothingItem>> {
    let file: WardrobeFile = read_json(path, "wardrobe").await?;
    Ok(file.into_items())
}

/// Load a weather snapshot file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub async fn load_weather(path: &Path) -> AppResult<WeatherContext> {
    read_json(path, "weather").await
}

/// Load a constraints file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub async fn load_constraints(path: &Path) -> AppResult<RecommendationConstraints> {
    read_json(path, "constraints").await
}
