// ABOUTME: Output formatting helpers for stylist-cli
// ABOUTME: Renders recommendations and normalization reports for the terminal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

use wardrobe_stylist::models::{ClothingItem, ItemWarningKind, OutfitRecommendation};

use crate::commands::normalize::NormalizedItem;

/// Display a recommendation with its slots, alerts, and reasoning
pub fn print_recommendation(outfit: &OutfitRecommendation) {
    println!("\nOutfit {}", outfit.id);
    println!("{}", "=".repeat(60));
    println!(
        "   Weather: {:.1}°C (feels like {:.1}°C)",
        outfit.context.temperature,
        outfit.context.effective_feels_like()
    );
    println!("   Warmth target: {:.1}", outfit.required_insulation);
    if let Some(code) = outfit.dress_code {
        println!("   Dress code: {}", code.as_str());
    }
    println!(
        "   Confidence: {:.1}{}",
        outfit.confidence_score,
        if outfit.is_complete() { "" } else { " (partial)" }
    );

    println!("\nItems:");
    for selection in &outfit.selections {
        let name = outfit
            .items
            .iter()
            .find(|item| item.id == selection.item_id)
            .map_or(selection.item_id.as_str(), ClothingItem::display_name);
        println!(
            "   {:<10} {name} [{}] warmth {:.1}{}",
            selection.slot.as_str(),
            selection.item_id,
            selection.insulation,
            if selection.locked { " (locked)" } else { "" }
        );
    }

    if !outfit.alerts.is_empty() {
        println!("\nAlerts:");
        for alert in &outfit.alerts {
            match &alert.message {
                Some(message) => println!("   {message}"),
                None => println!("   {} {}", alert.kind, alert.severity),
            }
        }
    }

    if !outfit.warnings.is_empty() {
        println!("\nData warnings:");
        for warning in &outfit.warnings {
            let what = match warning.kind {
                ItemWarningKind::UnrecognizedType => "type not recognized, treated as Top",
                ItemWarningKind::DefaultInsulation => "no warmth data, default used",
            };
            println!("   {}: {what}", warning.item_id);
        }
    }

    println!("\nWhy: {}", outfit.reasoning);
}

/// Display one line per wardrobe item with its normalized type and warmth
pub fn print_normalized(rows: &[NormalizedItem]) {
    println!(
        "{:<16} {:<22} {:<14} {:<10} {:<10} {:>6}  source",
        "id", "name", "type", "evidence", "material", "warmth"
    );
    println!("{}", "-".repeat(96));
    for row in rows {
        let kind = row
            .inferred_type
            .map_or_else(|| "unrecognized (Top)".to_owned(), |kind| kind.as_str().to_owned());
        println!(
            "{:<16} {:<22} {:<14} {:<10} {:<10} {:>6.1}  {}{}",
            row.id,
            row.name,
            kind,
            row.evidence.unwrap_or("-"),
            row.material.as_str(),
            row.insulation,
            row.insulation_source,
            if row.needs_backfill { " (backfill)" } else { "" }
        );
    }
}
