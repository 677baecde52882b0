// ABOUTME: Tests for insulation resolution and the warmth target calculator
// ABOUTME: Fallback chain order, clamping, totality, band table, and comfort formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use wardrobe_core::models::{ClothingItem, ClothingType};
use wardrobe_intelligence::config::stylist::{InsulationConfig, InsulationFormula};
use wardrobe_intelligence::insulation::{resolve_with_type, type_baseline, InsulationSource};
use wardrobe_intelligence::insulation_target::{
    calculate_required_insulation, clamp_target, comfort_insulation, target_for, within_tolerance,
};
use wardrobe_intelligence::resolve_insulation;

#[test]
fn test_explicit_value_wins_and_is_clamped() {
    let item = ClothingItem::new("x", "Top")
        .with_material("wool")
        .with_insulation(4.5);
    assert_eq!(resolve_insulation(&item), 4.5);

    assert_eq!(
        resolve_insulation(&ClothingItem::new("hi", "Top").with_insulation(14.0)),
        10.0
    );
    assert_eq!(
        resolve_insulation(&ClothingItem::new("lo", "Top").with_insulation(-3.0)),
        0.0
    );
}

#[test]
fn test_non_finite_value_falls_back_to_material() {
    let item = ClothingItem::new("x", "Top")
        .with_material("Merino wool")
        .with_insulation(f64::NAN);
    assert_eq!(
        resolve_with_type(&item, Some(ClothingType::Top)),
        (8.0, InsulationSource::Material)
    );
}

#[test]
fn test_material_presets() {
    let cases = [
        ("wool", 8.0),
        ("Down", 8.0),
        ("fleece", 7.0),
        ("leather", 6.0),
        ("Gore-Tex", 6.0),
        ("denim", 5.0),
        ("95% Cotton, 5% Spandex", 3.0),
        ("polyester", 3.0),
        ("linen", 2.0),
        ("silk", 2.0),
        ("nylon", 2.0),
    ];
    for (material, expected) in cases {
        let item = ClothingItem::new("x", "Accessory").with_material(material);
        assert_eq!(resolve_insulation(&item), expected, "material {material}");
    }
}

#[test]
fn test_unknown_material_falls_through_to_type_baseline() {
    let item = ClothingItem::new("x", "Outerwear").with_material("mystery fibre");
    assert_eq!(
        resolve_with_type(&item, Some(ClothingType::Outerwear)),
        (7.0, InsulationSource::TypeBaseline)
    );
}

#[test]
fn test_type_baselines() {
    assert_eq!(type_baseline(ClothingType::Outerwear), 7.0);
    assert_eq!(type_baseline(ClothingType::Bottom), 4.0);
    assert_eq!(type_baseline(ClothingType::Top), 3.0);
    assert_eq!(type_baseline(ClothingType::Footwear), 3.0);
    assert_eq!(type_baseline(ClothingType::Headwear), 2.0);
    assert_eq!(type_baseline(ClothingType::Accessory), 1.0);
}

#[test]
fn test_untyped_unknown_item_gets_global_default() {
    let item = ClothingItem::untyped("x").with_name("Mystery thing");
    assert_eq!(
        resolve_with_type(&item, None),
        (3.0, InsulationSource::Default)
    );
    assert_eq!(resolve_insulation(&item), 3.0);
}

#[test]
fn test_resolution_is_total_over_field_combinations() {
    let values = [
        None,
        Some(f64::NAN),
        Some(f64::INFINITY),
        Some(-1.0),
        Some(5.0),
        Some(11.0),
    ];
    let materials = [None, Some("wool"), Some("unobtainium"), Some("")];
    let types = [None, Some("Top"), Some("hoodie"), Some("nonsense")];

    for value in values {
        for material in materials {
            for kind in types {
                let mut item = kind.map_or_else(
                    || ClothingItem::untyped("x"),
                    |k| ClothingItem::new("x", k),
                );
                item.insulation_value = value;
                item.material = material.map(str::to_owned);

                let resolved = resolve_insulation(&item);
                assert!(resolved.is_finite());
                assert!((0.0..=10.0).contains(&resolved), "{resolved} out of range");
            }
        }
    }
}

#[test]
fn test_band_table_boundaries() {
    assert_eq!(calculate_required_insulation(-5.0), 9);
    assert_eq!(calculate_required_insulation(-0.1), 9);
    assert_eq!(calculate_required_insulation(0.0), 7);
    assert_eq!(calculate_required_insulation(9.9), 7);
    assert_eq!(calculate_required_insulation(10.0), 5);
    assert_eq!(calculate_required_insulation(19.9), 5);
    assert_eq!(calculate_required_insulation(20.0), 3);
    assert_eq!(calculate_required_insulation(24.9), 3);
    assert_eq!(calculate_required_insulation(25.0), 1);
    assert_eq!(calculate_required_insulation(38.0), 1);
}

#[test]
fn test_comfort_formula() {
    assert_eq!(comfort_insulation(27.0, 27.0, 2.5), 1.0);
    assert_eq!(comfort_insulation(35.0, 27.0, 2.5), 1.0);
    assert_eq!(comfort_insulation(22.0, 27.0, 2.5), 2.0);
    assert_eq!(comfort_insulation(15.0, 27.0, 2.5), 5.0);
    assert_eq!(comfort_insulation(-20.0, 27.0, 2.5), 10.0);
}

#[test]
fn test_formulas_diverge_in_mid_range_and_are_not_blended() {
    let bands = InsulationConfig::default();
    let comfort = InsulationConfig {
        formula: InsulationFormula::Comfort,
        ..InsulationConfig::default()
    };

    assert_eq!(target_for(22.0, &bands), 3.0);
    assert_eq!(target_for(22.0, &comfort), 2.0);
}

#[test]
fn test_targets_stay_on_warmth_scale() {
    let bands = InsulationConfig::default();
    let steep = InsulationConfig {
        formula: InsulationFormula::Comfort,
        comfort_step_celsius: 0.5,
        ..InsulationConfig::default()
    };

    for feels_like in [-60.0, -5.0, 0.0, 12.5, 24.9, 45.0] {
        for config in [&bands, &steep] {
            let target = target_for(feels_like, config);
            assert!((1.0..=10.0).contains(&target), "{feels_like}: {target}");
        }
    }
    assert_eq!(clamp_target(14.0), 10.0);
    assert_eq!(clamp_target(-3.0), 1.0);
}

#[test]
fn test_tolerance_band_is_inclusive() {
    assert!(within_tolerance(7.0, 9.0, 2.0));
    assert!(within_tolerance(11.0, 9.0, 2.0));
    assert!(!within_tolerance(6.5, 9.0, 2.0));
}
