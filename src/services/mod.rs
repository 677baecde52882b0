// ABOUTME: Service layer wrapping the recommendation engine with storage side effects
// ABOUTME: Wardrobe store seam and the recommendation/feedback flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

/// Recommendation and feedback flow
pub mod recommendation_service;
/// Wardrobe storage seam
pub mod store;

pub use recommendation_service::RecommendationService;
pub use store::{InMemoryWardrobeStore, WardrobeStore};
