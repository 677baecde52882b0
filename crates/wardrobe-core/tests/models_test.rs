// ABOUTME: Tests for wardrobe data model parsing and material normalization
// ABOUTME: Lenient store rows, label parsing, and blend resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use serde_json::json;
use wardrobe_core::models::{
    normalize_material, ActivityLevel, ClothingItem, ClothingType, DressCode, Material,
    RecommendationConstraints, Season, WeatherContext,
};

fn material(raw: &str) -> Material {
    normalize_material(Some(raw))
}

#[test]
fn test_blend_resolves_to_dominant_component() {
    assert_eq!(material("95% Cotton, 5% Spandex"), Material::Cotton);
    assert_eq!(material("20% wool / 80% polyester"), Material::Polyester);
    assert_eq!(material("Wool and cashmere blend"), Material::Wool);
}

#[test]
fn test_material_defaults_to_cotton() {
    assert_eq!(normalize_material(None), Material::Cotton);
    assert_eq!(material(""), Material::Cotton);
    assert_eq!(material("unobtainium"), Material::Cotton);
    assert_eq!(Material::recognize("unobtainium"), None);
}

#[test]
fn test_material_synonyms() {
    assert_eq!(material("GORE-TEX shell"), Material::GoreTex);
    assert_eq!(material("Suede"), Material::Leather);
    assert_eq!(material("Merino"), Material::Wool);
    assert_eq!(material("Sherpa lining"), Material::Fleece);
    assert_eq!(material("goose down"), Material::Down);
    assert_eq!(material("Lycra"), Material::Synthetic);
}

#[test]
fn test_store_row_with_legacy_fields() {
    let row = json!({
        "id": "item-1",
        "name": "Grey hoodie",
        "type": null,
        "category": "hoodie",
        "insulation_value": "6.5",
        "style_tags": null,
        "last_worn_date": "2025-01-10T08:00:00Z",
        "is_favorite": true,
        "wear_count": null
    });

    let item: ClothingItem = serde_json::from_value(row).unwrap();

    assert_eq!(item.item_type, None);
    assert_eq!(item.category.as_deref(), Some("hoodie"));
    assert_eq!(item.insulation_value, Some(6.5));
    assert!(item.style_tags.is_empty());
    assert!(item.last_worn.is_some());
    assert!(item.favorite);
    assert_eq!(item.wear_count, 0);
}

#[test]
fn test_malformed_insulation_is_absent() {
    for raw in [json!("warm"), json!(true), json!([1, 2]), json!(null)] {
        let item: ClothingItem =
            serde_json::from_value(json!({"id": "x", "insulation_value": raw})).unwrap();
        assert_eq!(item.insulation_value, None);
    }
}

#[test]
fn test_clothing_type_labels() {
    assert_eq!(
        "footwear".parse::<ClothingType>().unwrap(),
        ClothingType::Footwear
    );
    assert!("dress".parse::<ClothingType>().is_err());
    assert_eq!(ClothingType::Outerwear.to_string(), "Outerwear");
    assert!(ClothingType::Bottom.is_mandatory());
    assert!(!ClothingType::Headwear.is_mandatory());
}

#[test]
fn test_season_labels() {
    assert_eq!(Season::parse_label("Fall"), Some(Season::Autumn));
    assert_eq!(Season::parse_label("All Season"), Some(Season::AllSeason));
    assert_eq!(Season::from_month(1), Season::Winter);
    assert_eq!(Season::from_month(7), Season::Summer);
}

#[test]
fn test_constraints_parse_with_aliases() {
    let constraints: RecommendationConstraints = serde_json::from_value(json!({
        "dress_code": "work",
        "activity_level": "moderate",
        "locked_items": ["a", "b"],
        "weather_alerts": [{"type": "UV", "severity": "high"}]
    }))
    .unwrap();

    assert_eq!(constraints.dress_code, Some(DressCode::BusinessCasual));
    assert_eq!(constraints.activity_level, Some(ActivityLevel::Medium));
    assert_eq!(constraints.locked_items, vec!["a", "b"]);
    assert_eq!(constraints.weather_alerts.unwrap().len(), 1);
    assert!(constraints.events.is_empty());
}

#[test]
fn test_weather_context_feels_like_fallback() {
    let context: WeatherContext =
        serde_json::from_value(json!({"temperature": 12.0, "uv_index": "n/a"})).unwrap();

    assert_eq!(context.effective_feels_like(), 12.0);
    assert_eq!(context.uv_index, None);
}

#[test]
fn test_non_finite_feels_like_uses_air_temperature() {
    assert_eq!(
        WeatherContext::new(10.0, f64::NAN).effective_feels_like(),
        10.0
    );
    assert_eq!(
        WeatherContext::new(-3.0, f64::INFINITY).effective_feels_like(),
        -3.0
    );
    assert_eq!(WeatherContext::new(10.0, 7.5).effective_feels_like(), 7.5);
}
