// ABOUTME: Caller-level recommendation flow around the pure outfit engine
// ABOUTME: Loads wardrobes, persists type backfills in the background, records feedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

//! # Recommendation Service
//!
//! Everything with side effects lives here rather than in the engine:
//! loading the wardrobe, writing inferred types back, saving the outfit
//! for the feedback loop, and logging data-quality warnings.

use std::sync::Arc;

use chrono::Utc;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use uuid::Uuid;
use wardrobe_core::errors::{AppError, AppResult};
use wardrobe_core::models::{
    FeedbackRecord, ItemWarningKind, OutfitFeedback, OutfitRecommendation,
    RecommendationConstraints, TypeBackfill, WeatherContext,
};
use wardrobe_intelligence::config::stylist::ScoringConfig;
use wardrobe_intelligence::selector::{enforce_locked_outfit, selector_for, OutfitSelector};
use wardrobe_intelligence::{RecommendationRequest, StylistConfig};

use super::store::WardrobeStore;

/// Recommendation flow for stored wardrobes
#[derive(Clone)]
pub struct RecommendationService {
    store: Arc<dyn WardrobeStore>,
    selector: Arc<dyn OutfitSelector>,
    scoring: ScoringConfig,
}

impl RecommendationService {
    /// Create a service using the selector named by `config`
    #[must_use]
    pub fn new(store: Arc<dyn WardrobeStore>, config: &StylistConfig) -> Self {
        Self::with_selector(store, selector_for(config), config)
    }

    /// Create a service with an explicit selector; `config` supplies the
    /// confidence levels used when locked items are enforced afterwards
    #[must_use]
    pub fn with_selector(
        store: Arc<dyn WardrobeStore>,
        selector: Arc<dyn OutfitSelector>,
        config: &StylistConfig,
    ) -> Self {
        Self {
            store,
            selector,
            scoring: config.scoring.clone(),
        }
    }

    /// Recommend an outfit from a user's stored wardrobe
    ///
    /// # Errors
    ///
    /// Returns `WardrobeEmpty` or `InsufficientItems` for the two wardrobe
    /// conditions, or the store's error if the wardrobe cannot be loaded
    pub async fn recommend_for_user(
        &self,
        user_id: &str,
        weather: WeatherContext,
        constraints: RecommendationConstraints,
    ) -> AppResult<OutfitRecommendation> {
        let wardrobe = self.store.load_wardrobe(user_id).await?;
        let request = RecommendationRequest::new(wardrobe, weather).with_constraints(constraints);
        self.recommend(user_id, &request).await
    }

    /// Recommend an outfit for an already-loaded request
    ///
    /// # Errors
    ///
    /// Returns `WardrobeEmpty` or `InsufficientItems` when the selector cannot
    /// build an outfit
    pub async fn recommend(
        &self,
        user_id: &str,
        request: &RecommendationRequest,
    ) -> AppResult<OutfitRecommendation> {
        let mut outfit = match self.selector.select_outfit(request).await {
            Ok(outfit) => outfit,
            Err(error) => {
                info!(
                    user_id,
                    wardrobe_size = request.wardrobe.len(),
                    code = ?error.code(),
                    "Recommendation not possible: {error}"
                );
                return Err(AppError::from(error));
            }
        };

        enforce_locked_outfit(
            &mut outfit,
            &request.wardrobe,
            &request.constraints.locked_items,
            &self.scoring,
        );

        log_item_warnings(user_id, &outfit);

        if !outfit.type_backfills.is_empty() {
            // Fire-and-forget; write-back failures are only logged
            let backfills = outfit.type_backfills.clone();
            drop(self.spawn_type_backfills(user_id, backfills));
        }

        if let Err(error) = self.store.save_recommendation(user_id, &outfit).await {
            warn!(
                user_id,
                recommendation_id = %outfit.id,
                "Failed to save recommendation: {error}"
            );
        }

        info!(
            user_id,
            recommendation_id = %outfit.id,
            items = outfit.items.len(),
            confidence = outfit.confidence_score,
            "Outfit recommended"
        );
        Ok(outfit)
    }

    /// Persist inferred types in the background; failures are only logged
    pub fn spawn_type_backfills(
        &self,
        user_id: &str,
        backfills: Vec<TypeBackfill>,
    ) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        let user_id = user_id.to_owned();
        tokio::spawn(async move {
            for backfill in backfills {
                match store
                    .update_item_type(&user_id, &backfill.item_id, backfill.inferred_type)
                    .await
                {
                    Ok(()) => info!(
                        user_id = %user_id,
                        item_id = %backfill.item_id,
                        item_type = %backfill.inferred_type,
                        "Backfilled clothing type"
                    ),
                    Err(error) => warn!(
                        user_id = %user_id,
                        item_id = %backfill.item_id,
                        "Type backfill failed: {error}"
                    ),
                }
            }
        })
    }

    /// Record a like or dislike for a stored recommendation
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the recommendation was never stored
    pub async fn record_feedback(
        &self,
        recommendation_id: Uuid,
        feedback: OutfitFeedback,
    ) -> AppResult<FeedbackRecord> {
        let stored = self.store.get_recommendation(recommendation_id).await?;
        if stored.is_none() {
            return Err(AppError::not_found(format!(
                "Recommendation {recommendation_id}"
            )));
        }

        let record = FeedbackRecord {
            recommendation_id,
            feedback,
            recorded_at: Utc::now(),
        };
        self.store.record_feedback(record.clone()).await?;
        info!(%recommendation_id, ?feedback, "Recorded outfit feedback");
        Ok(record)
    }
}

fn log_item_warnings(user_id: &str, outfit: &OutfitRecommendation) {
    for warning in &outfit.warnings {
        match warning.kind {
            ItemWarningKind::UnrecognizedType => warn!(
                user_id,
                item_id = %warning.item_id,
                "Could not infer clothing type; treating item as a Top"
            ),
            ItemWarningKind::DefaultInsulation => warn!(
                user_id,
                item_id = %warning.item_id,
                "No insulation, material, or type data; using default warmth"
            ),
        }
    }
}
