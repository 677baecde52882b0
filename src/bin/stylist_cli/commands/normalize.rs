// ABOUTME: Normalize subcommand: shows how each wardrobe item is typed and rated for warmth
// ABOUTME: Useful for checking legacy exports before relying on recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use wardrobe_stylist::input;
use wardrobe_stylist::intelligence::insulation::{resolve_with_type, InsulationSource};
use wardrobe_stylist::intelligence::type_normalizer::{self, TypeEvidence};
use wardrobe_stylist::models::{normalize_material, ClothingType, Material};

use crate::helpers::display;

/// One row of normalize output
#[derive(Debug, Serialize)]
pub struct NormalizedItem {
    pub id: String,
    pub name: String,
    pub inferred_type: Option<ClothingType>,
    pub evidence: Option<&'static str>,
    pub needs_backfill: bool,
    pub material: Material,
    pub insulation: f64,
    pub insulation_source: &'static str,
}

const fn evidence_label(evidence: TypeEvidence) -> &'static str {
    match evidence {
        TypeEvidence::TypeField => "type",
        TypeEvidence::Category => "category",
        TypeEvidence::Keywords => "keywords",
    }
}

const fn source_label(source: InsulationSource) -> &'static str {
    match source {
        InsulationSource::Explicit => "explicit",
        InsulationSource::Material => "material",
        InsulationSource::TypeBaseline => "type baseline",
        InsulationSource::Default => "default",
    }
}

pub async fn run(wardrobe_path: &Path, json: bool) -> anyhow::Result<()> {
    let wardrobe = input::load_wardrobe(wardrobe_path).await?;

    let rows: Vec<NormalizedItem> = wardrobe
        .iter()
        .map(|item| {
            let classified = type_normalizer::classify(item);
            let inferred = classified.map(|(kind, _)| kind);
            let (insulation, source) = resolve_with_type(item, inferred);
            NormalizedItem {
                id: item.id.clone(),
                name: item.display_name().to_owned(),
                inferred_type: inferred,
                evidence: classified.map(|(_, evidence)| evidence_label(evidence)),
                needs_backfill: inferred
                    .is_some_and(|kind| type_normalizer::needs_backfill(item, kind)),
                material: normalize_material(item.material.as_deref()),
                insulation,
                insulation_source: source_label(source),
            }
        })
        .collect();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).context("serializing normalized items")?
        );
    } else {
        display::print_normalized(&rows);
    }
    Ok(())
}
