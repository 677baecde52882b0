// ABOUTME: Configuration module for wardrobe-intelligence crate
// ABOUTME: Re-exports stylist engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

/// Stylist engine configuration (freshness, insulation, scoring, alerts, selection)
pub mod stylist;

pub use stylist::StylistConfig;
