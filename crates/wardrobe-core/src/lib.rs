// ABOUTME: Core types and constants for the Wardrobe Stylist platform
// ABOUTME: Foundation crate with clothing and weather models, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

#![deny(unsafe_code)]

//! # Wardrobe Core
//!
//! Foundation crate providing shared types and constants for the Wardrobe
//! Stylist platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `RecommendationError`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Clothing items, weather context, constraints, and recommendation records

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`ClothingItem`, `WeatherContext`, `OutfitRecommendation`, etc.)
pub mod models;
