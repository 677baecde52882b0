// ABOUTME: Maps feels-like temperature to a required warmth target
// ABOUTME: Discrete band table or continuous comfort formula, plus the tolerance band check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

//! # Insulation Target Calculator

use wardrobe_core::constants::insulation::{MAX_INSULATION, MIN_INSULATION};

use crate::config::stylist::{InsulationConfig, InsulationFormula};

/// Band table target: <0°C → 9, [0,10) → 7, [10,20) → 5, [20,25) → 3, ≥25°C → 1
#[must_use]
pub fn calculate_required_insulation(feels_like_celsius: f64) -> u8 {
    if feels_like_celsius < 0.0 {
        9
    } else if feels_like_celsius < 10.0 {
        7
    } else if feels_like_celsius < 20.0 {
        5
    } else if feels_like_celsius < 25.0 {
        3
    } else {
        1
    }
}

/// Comfort-formula target: `max(1, ceil((reference − feels_like) / step))`, capped at 10
#[must_use]
pub fn comfort_insulation(
    feels_like_celsius: f64,
    reference_celsius: f64,
    step_celsius: f64,
) -> f64 {
    let steps = ((reference_celsius - feels_like_celsius) / step_celsius).ceil();
    clamp_target(steps.max(1.0))
}

/// Target for the configured formula, always on the item warmth scale
#[must_use]
pub fn target_for(feels_like_celsius: f64, config: &InsulationConfig) -> f64 {
    let target = match config.formula {
        InsulationFormula::Bands => f64::from(calculate_required_insulation(feels_like_celsius)),
        InsulationFormula::Comfort => comfort_insulation(
            feels_like_celsius,
            config.comfort_reference_celsius,
            config.comfort_step_celsius,
        ),
    };
    clamp_target(target)
}

/// Whether an item's warmth lies inside `target ± tolerance`
#[must_use]
pub fn within_tolerance(insulation: f64, target: f64, tolerance: f64) -> bool {
    (insulation - target).abs() <= tolerance
}

/// Clamp a target onto the item scale
#[must_use]
pub fn clamp_target(target: f64) -> f64 {
    target.clamp(MIN_INSULATION, MAX_INSULATION)
}
