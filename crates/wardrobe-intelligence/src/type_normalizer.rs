// ABOUTME: Maps free-text and legacy clothing labels onto the closed clothing-type taxonomy
// ABOUTME: Alias lookup on type and category, then priority-ordered keyword search over item text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

//! # Type Normalizer
//!
//! Evidence is consulted in a fixed order and the first match wins:
//!
//! 1. alias lookup on the item's `type` field
//! 2. alias lookup on the legacy `category` field
//! 3. keyword search over name, description, style, fit, style tags,
//!    occasion, and the decoded filename of `image_url`
//!
//! Keyword groups are checked Outerwear → Bottom → Footwear → Top →
//! Headwear → Accessory, which settles ambiguous text such as
//! "cropped denim jacket top".

use std::collections::HashMap;
use std::sync::OnceLock;

use wardrobe_core::models::{ClothingItem, ClothingType, TypeBackfill};

/// Type assumed by callers when no evidence matches
pub const DEFAULT_TYPE: ClothingType = ClothingType::Top;

/// Priority-ordered keyword groups for free-text inference
const KEYWORDS: &[(ClothingType, &[&str])] = &[
    (
        ClothingType::Outerwear,
        &[
            "jacket",
            "jackets",
            "coat",
            "coats",
            "overcoat",
            "parka",
            "hoodie",
            "hoodies",
            "blazer",
            "windbreaker",
            "raincoat",
            "anorak",
            "poncho",
            "cardigan",
            "vest",
            "gilet",
            "puffer",
            "trench",
            "peacoat",
            "bomber",
            "outerwear",
        ],
    ),
    (
        ClothingType::Bottom,
        &[
            "pants",
            "trousers",
            "jeans",
            "shorts",
            "skirt",
            "skirts",
            "leggings",
            "chinos",
            "joggers",
            "sweatpants",
            "slacks",
            "culottes",
            "capris",
            "cargos",
        ],
    ),
    (
        ClothingType::Footwear,
        &[
            "shoes", "shoe", "sneakers", "sneaker", "boots", "boot", "sandals", "sandal", "mules",
            "loafers", "loafer", "heels", "trainers", "slippers", "flats", "oxfords", "clogs",
            "footwear",
        ],
    ),
    (
        ClothingType::Top,
        &[
            "t shirt",
            "tshirt",
            "shirt",
            "shirts",
            "tee",
            "tees",
            "blouse",
            "sweater",
            "sweatshirt",
            "jumper",
            "polo",
            "tank",
            "camisole",
            "top",
            "tops",
            "tunic",
            "henley",
            "turtleneck",
            "pullover",
        ],
    ),
    (
        ClothingType::Headwear,
        &[
            "bucket hat",
            "hat",
            "hats",
            "cap",
            "caps",
            "beanie",
            "beret",
            "fedora",
            "visor",
            "headband",
            "balaclava",
            "headwear",
        ],
    ),
    (
        ClothingType::Accessory,
        &[
            "scarf",
            "scarves",
            "gloves",
            "glove",
            "mittens",
            "belt",
            "sunglasses",
            "bag",
            "handbag",
            "backpack",
            "watch",
            "necklace",
            "bracelet",
            "earrings",
            "tie",
            "umbrella",
            "mask",
            "jewelry",
            "accessory",
            "accessories",
        ],
    ),
];

/// Exact labels beyond the keyword vocabulary: canonical names, legacy
/// enum values, and category-style labels.
const EXTRA_ALIASES: &[(&str, ClothingType)] = &[
    ("bottom", ClothingType::Bottom),
    ("bottoms", ClothingType::Bottom),
    ("lower body", ClothingType::Bottom),
    ("upper body", ClothingType::Top),
    ("outer wear", ClothingType::Outerwear),
    ("outer", ClothingType::Outerwear),
    ("outerwears", ClothingType::Outerwear),
    ("foot wear", ClothingType::Footwear),
    ("footwears", ClothingType::Footwear),
    ("head wear", ClothingType::Headwear),
    ("headwears", ClothingType::Headwear),
    ("accessoires", ClothingType::Accessory),
];

static ALIAS_TABLE: OnceLock<HashMap<&'static str, ClothingType>> = OnceLock::new();

fn alias_table() -> &'static HashMap<&'static str, ClothingType> {
    ALIAS_TABLE.get_or_init(|| {
        let mut table = HashMap::new();
        for kind in ClothingType::ALL {
            table.insert(canonical_key(kind), kind);
        }
        // Reverse priority so higher-priority groups overwrite on collision
        for (kind, words) in KEYWORDS.iter().rev() {
            for word in *words {
                table.insert(*word, *kind);
            }
        }
        for (alias, kind) in EXTRA_ALIASES {
            table.insert(*alias, *kind);
        }
        table
    })
}

const fn canonical_key(kind: ClothingType) -> &'static str {
    match kind {
        ClothingType::Top => "top",
        ClothingType::Bottom => "bottom",
        ClothingType::Outerwear => "outerwear",
        ClothingType::Footwear => "footwear",
        ClothingType::Accessory => "accessory",
        ClothingType::Headwear => "headwear",
    }
}

/// Where a normalized type came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeEvidence {
    /// Alias match on the `type` field
    TypeField,
    /// Alias match on the `category` field
    Category,
    /// Keyword match over free text
    Keywords,
}

/// Lower-case, turn separators into spaces, and collapse whitespace
fn normalize_label(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Exact alias lookup (case, whitespace, and separator insensitive)
#[must_use]
pub fn lookup_alias(label: &str) -> Option<ClothingType> {
    let key = normalize_label(label);
    if key.is_empty() {
        return None;
    }
    alias_table().get(key.as_str()).copied()
}

/// Decoded, extension-less last path segment of an image URL
fn image_filename_words(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next()?;
    let segment = path.rsplit('/').next()?;
    let decoded = urlencoding::decode(segment)
        .map_or_else(|_| segment.to_owned(), std::borrow::Cow::into_owned);
    let stem = decoded
        .rsplit_once('.')
        .map_or(decoded.as_str(), |(stem, _)| stem);
    Some(stem.to_owned())
}

/// Keyword search over an item's free-text fields
#[must_use]
pub fn infer_from_keywords(item: &ClothingItem) -> Option<ClothingType> {
    let mut sources: Vec<&str> = [
        item.name.as_deref(),
        item.description.as_deref(),
        item.style.as_deref(),
        item.fit.as_deref(),
        item.occasion.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();
    sources.extend(item.style_tags.iter().map(String::as_str));

    let filename = item.image_url.as_deref().and_then(image_filename_words);
    if let Some(name) = filename.as_deref() {
        sources.push(name);
    }

    let haystack = format!(" {} ", normalize_label(&sources.join(" ")));
    if haystack.trim().is_empty() {
        return None;
    }

    KEYWORDS
        .iter()
        .find(|(_, words)| {
            words
                .iter()
                .any(|word| haystack.contains(&format!(" {word} ")))
        })
        .map(|(kind, _)| *kind)
}

/// Normalize an item's type, reporting which evidence matched
#[must_use]
pub fn classify(item: &ClothingItem) -> Option<(ClothingType, TypeEvidence)> {
    if let Some(kind) = item.item_type.as_deref().and_then(lookup_alias) {
        return Some((kind, TypeEvidence::TypeField));
    }
    if let Some(kind) = item.category.as_deref().and_then(lookup_alias) {
        return Some((kind, TypeEvidence::Category));
    }
    infer_from_keywords(item).map(|kind| (kind, TypeEvidence::Keywords))
}

/// Normalize an item's type; `None` when nothing matches
#[must_use]
pub fn normalize_type(item: &ClothingItem) -> Option<ClothingType> {
    classify(item).map(|(kind, _)| kind)
}

/// Whether the stored `type` differs from the canonical label of `inferred`
#[must_use]
pub fn needs_backfill(item: &ClothingItem, inferred: ClothingType) -> bool {
    item.item_type.as_deref().map(str::trim) != Some(inferred.as_str())
}

/// Inferred types worth writing back to storage.
///
/// Items already carrying a canonical type produce nothing, so persisting
/// the result and normalizing again is a no-op.
#[must_use]
pub fn type_backfills(items: &[ClothingItem]) -> Vec<TypeBackfill> {
    items
        .iter()
        .filter_map(|item| {
            let inferred = normalize_type(item)?;
            needs_backfill(item, inferred).then(|| TypeBackfill {
                item_id: item.id.clone(),
                inferred_type: inferred,
            })
        })
        .collect()
}
