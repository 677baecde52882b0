// ABOUTME: Shared test utilities for service and CLI integration tests
// ABOUTME: Quiet logging, wardrobe builders, a failing store, and JSON fixture files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `wardrobe_stylist`

use std::path::{Path, PathBuf};
use std::sync::{Arc, Once};

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;
use wardrobe_stylist::errors::{AppError, AppResult};
use wardrobe_stylist::intelligence::StylistConfig;
use wardrobe_stylist::models::{
    ClothingItem, ClothingType, FeedbackRecord, OutfitRecommendation, WeatherContext,
};
use wardrobe_stylist::services::{InMemoryWardrobeStore, RecommendationService, WardrobeStore};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub const USER: &str = "user-1";

/// Top, bottom, and shoes with canonical types
pub fn canonical_wardrobe() -> Vec<ClothingItem> {
    vec![
        ClothingItem::new("t1", "Top")
            .with_name("Oxford shirt")
            .with_insulation(4.0),
        ClothingItem::new("b1", "Bottom")
            .with_name("Chinos")
            .with_insulation(4.0),
        ClothingItem::new("f1", "Footwear")
            .with_name("Loafers")
            .with_insulation(3.0),
    ]
}

/// A legacy wardrobe whose types must be inferred and written back
pub fn legacy_wardrobe() -> Vec<ClothingItem> {
    vec![
        ClothingItem::untyped("t1").with_name("Wool sweater"),
        ClothingItem::new("b1", "jeans"),
        ClothingItem::untyped("f1").with_category("shoes"),
    ]
}

pub fn mild_weather() -> WeatherContext {
    WeatherContext::new(15.0, 15.0)
}

/// Service over a fresh in-memory store seeded with `wardrobe` for [`USER`]
pub fn service_with(
    wardrobe: Vec<ClothingItem>,
) -> (Arc<InMemoryWardrobeStore>, RecommendationService) {
    let store = Arc::new(InMemoryWardrobeStore::new());
    store.insert_wardrobe(USER, wardrobe);
    let shared: Arc<dyn WardrobeStore> = Arc::clone(&store) as Arc<dyn WardrobeStore>;
    let service = RecommendationService::new(shared, &StylistConfig::default());
    (store, service)
}

/// Store that serves a wardrobe but rejects every write
pub struct ReadOnlyStore {
    pub wardrobe: Vec<ClothingItem>,
}

#[async_trait]
impl WardrobeStore for ReadOnlyStore {
    async fn load_wardrobe(&self, _user_id: &str) -> AppResult<Vec<ClothingItem>> {
        Ok(self.wardrobe.clone())
    }

    async fn update_item_type(
        &self,
        _user_id: &str,
        item_id: &str,
        _item_type: ClothingType,
    ) -> AppResult<()> {
        Err(AppError::storage(format!("read-only store: {item_id}")))
    }

    async fn save_recommendation(
        &self,
        _user_id: &str,
        _recommendation: &OutfitRecommendation,
    ) -> AppResult<()> {
        Err(AppError::storage("read-only store"))
    }

    async fn get_recommendation(&self, _id: Uuid) -> AppResult<Option<OutfitRecommendation>> {
        Ok(None)
    }

    async fn record_feedback(&self, _record: FeedbackRecord) -> AppResult<()> {
        Err(AppError::storage("read-only store"))
    }

    async fn feedback_for(&self, _recommendation_id: Uuid) -> AppResult<Vec<FeedbackRecord>> {
        Ok(Vec::new())
    }
}

/// Write `value` as JSON into `dir/name` and return the path
pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}
