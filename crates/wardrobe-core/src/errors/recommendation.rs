// ABOUTME: Distinguished failure conditions of the outfit recommendation engine
// ABOUTME: Empty wardrobe and insufficient items, with user-facing message construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

use std::fmt::Write;

use serde_json::json;
use thiserror::Error;

use super::{AppError, ErrorCode};
use crate::constants::messages;
use crate::models::ClothingType;

/// Typed failures the engine returns instead of a degraded outfit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendationError {
    /// Zero items were supplied
    #[error("wardrobe is empty")]
    EmptyWardrobe,

    /// A mandatory category has no candidates even after backfill
    #[error("insufficient items: missing {}", join_types(.missing))]
    InsufficientItems {
        /// Mandatory categories without candidates
        missing: Vec<ClothingType>,
        /// Types present in the wardrobe after normalization
        detected: Vec<ClothingType>,
    },
}

impl RecommendationError {
    /// Create an insufficient-items error; lists are sorted and deduplicated
    #[must_use]
    pub fn insufficient(
        mut missing: Vec<ClothingType>,
        mut detected: Vec<ClothingType>,
    ) -> Self {
        missing.sort_unstable();
        missing.dedup();
        detected.sort_unstable();
        detected.dedup();
        Self::InsufficientItems { missing, detected }
    }

    /// Message suitable for showing to the wardrobe owner
    ///
    /// For missing categories: `"You need to add at least one of each: Bottom, Footwear."`,
    /// followed by the detected types when the wardrobe had any.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyWardrobe => messages::EMPTY_WARDROBE.to_owned(),
            Self::InsufficientItems { missing, detected } => {
                let mut message = format!(
                    "{} {}.",
                    messages::INSUFFICIENT_ITEMS_PREFIX,
                    join_types(missing)
                );
                if !detected.is_empty() {
                    let _ = write!(
                        message,
                        " {} {}.",
                        messages::DETECTED_TYPES_PREFIX,
                        join_types(detected)
                    );
                }
                message
            }
        }
    }

    /// Error code callers switch on
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyWardrobe => ErrorCode::WardrobeEmpty,
            Self::InsufficientItems { .. } => ErrorCode::InsufficientItems,
        }
    }
}

impl From<RecommendationError> for AppError {
    fn from(error: RecommendationError) -> Self {
        let details = match &error {
            RecommendationError::EmptyWardrobe => json!({}),
            RecommendationError::InsufficientItems { missing, detected } => json!({
                "missing_categories": missing,
                "detected_types": detected,
            }),
        };
        Self::new(error.code(), error.user_message()).with_details(details)
    }
}

fn join_types(types: &[ClothingType]) -> String {
    types
        .iter()
        .copied()
        .map(ClothingType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
