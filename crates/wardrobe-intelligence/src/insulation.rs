// ABOUTME: Resolves a 0-10 warmth value for clothing items with deterministic fallbacks
// ABOUTME: Explicit value, then material preset, then type baseline, then global default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

//! # Insulation Resolver
//!
//! Total and deterministic: every item resolves to a finite value in `[0, 10]`.

use wardrobe_core::constants::insulation::{DEFAULT_INSULATION, MAX_INSULATION, MIN_INSULATION};
use wardrobe_core::models::{ClothingItem, ClothingType, Material};

use crate::type_normalizer::normalize_type;

/// Which tier of the fallback chain produced a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsulationSource {
    /// The item's own `insulation_value`
    Explicit,
    /// Material preset table
    Material,
    /// Type baseline table
    TypeBaseline,
    /// Global default
    Default,
}

/// Warmth preset for a recognized material
#[must_use]
pub const fn material_preset(material: Material) -> f64 {
    match material {
        Material::Wool | Material::Down => 8.0,
        Material::Fleece => 7.0,
        Material::Leather | Material::GoreTex => 6.0,
        Material::Denim => 5.0,
        Material::Cotton | Material::Synthetic | Material::Polyester => 3.0,
        Material::Linen | Material::Silk | Material::Nylon => 2.0,
    }
}

/// Warmth baseline for a clothing type
#[must_use]
pub const fn type_baseline(kind: ClothingType) -> f64 {
    match kind {
        ClothingType::Outerwear => 7.0,
        ClothingType::Bottom => 4.0,
        ClothingType::Top | ClothingType::Footwear => 3.0,
        ClothingType::Headwear => 2.0,
        ClothingType::Accessory => 1.0,
    }
}

fn clamp_insulation(value: f64) -> f64 {
    value.clamp(MIN_INSULATION, MAX_INSULATION)
}

/// Resolve warmth given an already-normalized type
#[must_use]
pub fn resolve_with_type(
    item: &ClothingItem,
    kind: Option<ClothingType>,
) -> (f64, InsulationSource) {
    if let Some(value) = item.insulation_value.filter(|v| v.is_finite()) {
        return (clamp_insulation(value), InsulationSource::Explicit);
    }
    if let Some(material) = item.material.as_deref().and_then(Material::recognize) {
        return (material_preset(material), InsulationSource::Material);
    }
    if let Some(kind) = kind {
        return (type_baseline(kind), InsulationSource::TypeBaseline);
    }
    (DEFAULT_INSULATION, InsulationSource::Default)
}

/// Resolve an item's warmth on the 0-10 scale
#[must_use]
pub fn resolve_insulation(item: &ClothingItem) -> f64 {
    resolve_with_type(item, normalize_type(item)).0
}
