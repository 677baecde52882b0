// ABOUTME: Criterion benchmarks for the outfit recommendation pipeline
// ABOUTME: Measures normalization, filtering, and selection over synthetic wardrobes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

//! Criterion benchmarks for the recommendation engine.
//!
//! Wardrobes are generated deterministically so runs are comparable.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::cast_possible_wrap,
    missing_docs
)]

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wardrobe_stylist::intelligence::type_normalizer::normalize_type;
use wardrobe_stylist::intelligence::{OutfitEngine, RecommendationRequest, StylistConfig};
use wardrobe_stylist::models::{ClothingItem, RecommendationConstraints, WeatherContext};

/// Labels cycled through so every slot and every normalization path is hit
const LABELS: [(&str, Option<&str>); 8] = [
    ("Top", Some("cotton")),
    ("jeans", Some("denim")),
    ("sneakers", None),
    ("Outerwear", Some("wool")),
    ("beanie", Some("fleece")),
    ("scarf", None),
    ("", Some("linen")),
    ("T-Shirt", Some("95% Cotton, 5% Spandex")),
];

const NAMES: [&str; 4] = [
    "Everyday shirt",
    "Relaxed chinos",
    "Trail boots",
    "Rain jacket",
];

/// Synthetic wardrobe of `count` items with mixed data quality
fn generate_wardrobe(count: usize) -> Vec<ClothingItem> {
    let base = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).single();
    (0..count)
        .map(|index| {
            let (label, material) = LABELS[index % LABELS.len()];
            let mut item = if label.is_empty() {
                ClothingItem::untyped(format!("item-{index}"))
                    .with_name(NAMES[index % NAMES.len()])
            } else {
                ClothingItem::new(format!("item-{index}"), label)
            };
            if let Some(material) = material {
                item = item.with_material(material);
            }
            if index % 3 == 0 {
                if let Some(base) = base {
                    item = item.worn_at(base - Duration::days((index % 14) as i64));
                }
            }
            if index % 10 == 0 {
                item = item.as_favorite();
            }
            item
        })
        .collect()
}

fn bench_request(count: usize, feels_like: f64) -> RecommendationRequest {
    let weather = WeatherContext::new(feels_like, feels_like);
    let mut request = RecommendationRequest::new(generate_wardrobe(count), weather)
        .with_constraints(RecommendationConstraints {
            locked_items: vec!["item-1".to_owned()],
            ..RecommendationConstraints::default()
        });
    if let Some(now) = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).single() {
        request = request.at(now);
    }
    request
}

fn bench_recommend(c: &mut Criterion) {
    let engine = OutfitEngine::new(StylistConfig::default());
    let mut group = c.benchmark_group("recommend");

    for count in [10_usize, 100, 1_000] {
        let request = bench_request(count, 4.0);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &request, |b, request| {
            b.iter(|| engine.recommend(black_box(request)));
        });
    }

    group.finish();
}

fn bench_recommend_many(c: &mut Criterion) {
    let engine = OutfitEngine::new(StylistConfig::default());
    let requests: Vec<_> = (0..32)
        .map(|i| bench_request(100, f64::from(i) - 5.0))
        .collect();

    c.bench_function("recommend_many_32x100", |b| {
        b.iter(|| engine.recommend_many(black_box(&requests)));
    });
}

fn bench_normalize(c: &mut Criterion) {
    let wardrobe = generate_wardrobe(1_000);
    c.bench_function("normalize_type_1000", |b| {
        b.iter(|| {
            wardrobe
                .iter()
                .filter_map(|item| normalize_type(black_box(item)))
                .count()
        });
    });
}

criterion_group!(
    benches,
    bench_recommend,
    bench_recommend_many,
    bench_normalize
);
criterion_main!(benches);
