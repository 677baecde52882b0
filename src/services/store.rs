// ABOUTME: Wardrobe storage abstraction used by the recommendation service
// ABOUTME: Async trait seam plus a concurrent in-memory implementation for tests and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;
use wardrobe_core::errors::{AppError, AppResult};
use wardrobe_core::models::{ClothingItem, ClothingType, FeedbackRecord, OutfitRecommendation};

/// Persistence operations the recommendation flow depends on
#[async_trait]
pub trait WardrobeStore: Send + Sync {
    /// Load every item in a user's wardrobe
    async fn load_wardrobe(&self, user_id: &str) -> AppResult<Vec<ClothingItem>>;

    /// Write a normalized type back to an item
    async fn update_item_type(
        &self,
        user_id: &str,
        item_id: &str,
        item_type: ClothingType,
    ) -> AppResult<()>;

    /// Persist a recommendation for feedback tracking
    async fn save_recommendation(
        &self,
        user_id: &str,
        recommendation: &OutfitRecommendation,
    ) -> AppResult<()>;

    /// Look up a stored recommendation
    async fn get_recommendation(&self, id: Uuid) -> AppResult<Option<OutfitRecommendation>>;

    /// Append feedback for a stored recommendation
    async fn record_feedback(&self, record: FeedbackRecord) -> AppResult<()>;

    /// All feedback recorded for a recommendation
    async fn feedback_for(&self, recommendation_id: Uuid) -> AppResult<Vec<FeedbackRecord>>;
}

/// Concurrent in-memory store
#[derive(Debug, Default)]
pub struct InMemoryWardrobeStore {
    wardrobes: DashMap<String, Vec<ClothingItem>>,
    recommendations: DashMap<Uuid, (String, OutfitRecommendation)>,
    feedback: DashMap<Uuid, Vec<FeedbackRecord>>,
}

impl InMemoryWardrobeStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a user's wardrobe
    pub fn insert_wardrobe(&self, user_id: impl Into<String>, items: Vec<ClothingItem>) {
        self.wardrobes.insert(user_id.into(), items);
    }

    /// Number of stored recommendations
    #[must_use]
    pub fn recommendation_count(&self) -> usize {
        self.recommendations.len()
    }
}

#[async_trait]
impl WardrobeStore for InMemoryWardrobeStore {
    async fn load_wardrobe(&self, user_id: &str) -> AppResult<Vec<ClothingItem>> {
        Ok(self
            .wardrobes
            .get(user_id)
            .map(|items| items.value().clone())
            .unwrap_or_default())
    }

    async fn update_item_type(
        &self,
        user_id: &str,
        item_id: &str,
        item_type: ClothingType,
    ) -> AppResult<()> {
        let mut wardrobe = self
            .wardrobes
            .get_mut(user_id)
            .ok_or_else(|| AppError::not_found(format!("Wardrobe for user {user_id}")))?;
        let item = wardrobe
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(|| AppError::not_found(format!("Clothing item {item_id}")))?;
        item.item_type = Some(item_type.as_str().to_owned());
        Ok(())
    }

    async fn save_recommendation(
        &self,
        user_id: &str,
        recommendation: &OutfitRecommendation,
    ) -> AppResult<()> {
        self.recommendations.insert(
            recommendation.id,
            (user_id.to_owned(), recommendation.clone()),
        );
        Ok(())
    }

    async fn get_recommendation(&self, id: Uuid) -> AppResult<Option<OutfitRecommendation>> {
        Ok(self
            .recommendations
            .get(&id)
            .map(|entry| entry.value().1.clone()))
    }

    async fn record_feedback(&self, record: FeedbackRecord) -> AppResult<()> {
        self.feedback
            .entry(record.recommendation_id)
            .or_default()
            .push(record);
        Ok(())
    }

    async fn feedback_for(&self, recommendation_id: Uuid) -> AppResult<Vec<FeedbackRecord>> {
        Ok(self
            .feedback
            .get(&recommendation_id)
            .map(|records| records.value().clone())
            .unwrap_or_default())
    }
}
