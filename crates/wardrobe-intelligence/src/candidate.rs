// ABOUTME: Candidate view over wardrobe items with normalized type and resolved insulation
// ABOUTME: Built once per request so every later stage works on the same resolved data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

use std::collections::HashSet;

use wardrobe_core::models::{ClothingItem, ClothingType, ItemWarning, ItemWarningKind, TypeBackfill};

use crate::insulation::{resolve_with_type, InsulationSource};
use crate::type_normalizer::{self, DEFAULT_TYPE};

/// Anything the filters can treat as a wardrobe item
pub trait WardrobeEntry {
    /// Underlying item
    fn item(&self) -> &ClothingItem;

    /// Item id
    fn id(&self) -> &str {
        &self.item().id
    }
}

impl WardrobeEntry for ClothingItem {
    fn item(&self) -> &ClothingItem {
        self
    }
}

impl WardrobeEntry for &ClothingItem {
    fn item(&self) -> &ClothingItem {
        self
    }
}

/// A wardrobe item with its resolved type and warmth
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Source item
    pub item: &'a ClothingItem,
    /// Position in the wardrobe
    pub index: usize,
    /// Normalized type (defaulted to Top when nothing matched)
    pub kind: ClothingType,
    /// Resolved warmth in `[0, 10]`
    pub insulation: f64,
    /// Whether the caller locked this item
    pub locked: bool,
}

impl WardrobeEntry for Candidate<'_> {
    fn item(&self) -> &ClothingItem {
        self.item
    }
}

/// Candidates for a whole wardrobe plus what had to be defaulted
#[derive(Debug, Default)]
pub struct CandidateSet<'a> {
    /// One candidate per wardrobe item, in wardrobe order
    pub candidates: Vec<Candidate<'a>>,
    /// Inferred types worth persisting
    pub backfills: Vec<TypeBackfill>,
    /// Soft data-quality warnings
    pub warnings: Vec<ItemWarning>,
}

impl CandidateSet<'_> {
    /// Distinct types present, in taxonomy order
    #[must_use]
    pub fn detected_types(&self) -> Vec<ClothingType> {
        let mut kinds: Vec<ClothingType> = self.candidates.iter().map(|c| c.kind).collect();
        kinds.sort_unstable();
        kinds.dedup();
        kinds
    }
}

/// Normalize and resolve every item of a wardrobe
#[must_use]
pub fn build_candidates<'a>(
    wardrobe: &'a [ClothingItem],
    locked_ids: &[String],
) -> CandidateSet<'a> {
    let locked: HashSet<&str> = locked_ids.iter().map(String::as_str).collect();
    let mut set = CandidateSet::default();

    for (index, item) in wardrobe.iter().enumerate() {
        let inferred = type_normalizer::normalize_type(item);
        let (insulation, source) = resolve_with_type(item, inferred);

        match inferred {
            Some(kind) if type_normalizer::needs_backfill(item, kind) => {
                set.backfills.push(TypeBackfill {
                    item_id: item.id.clone(),
                    inferred_type: kind,
                });
            }
            Some(_) => {}
            None => set.warnings.push(ItemWarning {
                item_id: item.id.clone(),
                kind: ItemWarningKind::UnrecognizedType,
            }),
        }
        if source == InsulationSource::Default {
            set.warnings.push(ItemWarning {
                item_id: item.id.clone(),
                kind: ItemWarningKind::DefaultInsulation,
            });
        }

        set.candidates.push(Candidate {
            item,
            index,
            kind: inferred.unwrap_or(DEFAULT_TYPE),
            insulation,
            locked: locked.contains(item.id.as_str()),
        });
    }

    set
}
