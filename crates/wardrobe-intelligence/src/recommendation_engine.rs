// ABOUTME: Deterministic outfit recommendation engine tying the filtering pipeline together
// ABOUTME: Normalize, resolve, filter, target, prioritize, then select one item per slot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

//! # Outfit Recommendation Engine
//!
//! A single synchronous pass over an in-memory wardrobe:
//!
//! ```text
//! wardrobe -> type normalizer -> insulation resolver -> freshness filter
//!          -> lock reinstatement -> category safety net -> dress-code filter
//!          -> insulation target -> alert prioritizer -> slot selection
//! ```
//!
//! The engine holds no shared mutable state; one instance can serve many
//! requests concurrently (see [`OutfitEngine::recommend_many`]).

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;
use wardrobe_core::errors::RecommendationError;
use wardrobe_core::models::{
    ClothingItem, ClothingType, DressCode, OutfitRecommendation, RecommendationConstraints, Season,
    SlotSelection, WeatherAlert, WeatherContext,
};

use crate::alerts::{derive_alerts, favored_types, prioritize};
use crate::candidate::{build_candidates, Candidate};
use crate::config::stylist::StylistConfig;
use crate::dress_code::{adjust_insulation_for_activity, dress_code_from_events, matches_dress_code};
use crate::freshness::{
    covers_slot, ensure_mandatory_categories, filter_by_last_worn, reinstate_locked,
};
use crate::insulation_target::{target_for, within_tolerance};
use crate::reasoning::ReasoningTrail;
use crate::season::{current_season, prefer_season};

/// Everything the engine needs for one recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// The user's wardrobe
    pub wardrobe: Vec<ClothingItem>,
    /// Weather snapshot
    pub weather: WeatherContext,
    /// Optional caller constraints
    #[serde(default)]
    pub constraints: RecommendationConstraints,
    /// Reference time for freshness and season
    #[serde(default = "Utc::now")]
    pub now: DateTime<Utc>,
}

impl RecommendationRequest {
    /// Request with no constraints, evaluated at the current time
    #[must_use]
    pub fn new(wardrobe: Vec<ClothingItem>, weather: WeatherContext) -> Self {
        Self {
            wardrobe,
            weather,
            constraints: RecommendationConstraints::default(),
            now: Utc::now(),
        }
    }

    /// Attach constraints
    #[must_use]
    pub fn with_constraints(mut self, constraints: RecommendationConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Evaluate at a fixed time
    #[must_use]
    pub const fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}

/// Per-request values shared by every slot
struct SlotContext<'c> {
    target: f64,
    tolerance: f64,
    favored: &'c [ClothingType],
    season: Season,
}

/// Rule-based outfit recommendation engine
#[derive(Debug, Clone)]
pub struct OutfitEngine {
    config: StylistConfig,
}

impl Default for OutfitEngine {
    fn default() -> Self {
        Self::new(StylistConfig::global().clone())
    }
}

impl OutfitEngine {
    /// Create an engine with explicit configuration
    #[must_use]
    pub const fn new(config: StylistConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &StylistConfig {
        &self.config
    }

    /// Recommend one outfit.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendationError::EmptyWardrobe`] for an empty wardrobe and
    /// [`RecommendationError::InsufficientItems`] when a mandatory category has
    /// no candidates even after the safety net.
    pub fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<OutfitRecommendation, RecommendationError> {
        let wardrobe = &request.wardrobe;
        if wardrobe.is_empty() {
            debug!("Recommendation requested for an empty wardrobe");
            return Err(RecommendationError::EmptyWardrobe);
        }
        let constraints = &request.constraints;
        let mut trail = ReasoningTrail::new();

        let set = build_candidates(wardrobe, &constraints.locked_items);
        let detected = set.detected_types();
        trail.note(format!(
            "Normalized {} items into {} clothing types.",
            wardrobe.len(),
            detected.len()
        ));

        // Freshness, locks, and the safety net
        let min_days = constraints
            .min_days_since_worn
            .unwrap_or(self.config.freshness.min_days_since_worn);
        let fresh = filter_by_last_worn(&set.candidates, min_days, request.now);
        trail.stage(
            &format!("Freshness filter ({min_days} days)"),
            set.candidates.len(),
            fresh.len(),
        );
        let fresh_len = fresh.len();
        let mut pool = reinstate_locked(fresh, &set.candidates, &constraints.locked_items);
        if pool.len() > fresh_len {
            trail.note(format!(
                "Reinstated {} locked item(s) worn recently.",
                pool.len() - fresh_len
            ));
        }
        let backfilled = ensure_mandatory_categories(&mut pool, &set.candidates);
        if !backfilled.is_empty() {
            trail.note(format!(
                "Nothing fresh for {}; recently worn items allowed back.",
                join_types(&backfilled)
            ));
        }
        pool.sort_by_key(|c| c.index);

        let missing: Vec<ClothingType> = ClothingType::MANDATORY
            .into_iter()
            .filter(|slot| !covers_slot(&pool, *slot))
            .collect();
        if !missing.is_empty() {
            let error = RecommendationError::insufficient(missing, detected);
            debug!(
                wardrobe_size = wardrobe.len(),
                error = %error,
                "Wardrobe cannot fill mandatory slots"
            );
            return Err(error);
        }

        // Dress code
        let dress_code = resolve_dress_code(constraints);
        if let Some(code) = dress_code {
            let before = pool.len();
            pool.retain(|c| c.locked || matches_dress_code(&c.item.dress_code, code));
            trail.stage(&format!("Dress code {code}"), before, pool.len());
        }

        // Warmth target
        let feels_like = request.weather.effective_feels_like();
        let base_target = target_for(feels_like, &self.config.insulation);
        let activity = constraints.activity_level.unwrap_or_default();
        let target = adjust_insulation_for_activity(base_target, activity);
        trail.note(format!(
            "Feels like {feels_like:.1}°C: warmth target {base_target} ({} formula).",
            self.config.insulation.formula
        ));
        trail.note(format!("Target {target} for {activity} activity."));

        // Alerts
        let alerts: Vec<WeatherAlert> = constraints
            .weather_alerts
            .clone()
            .unwrap_or_else(|| derive_alerts(&request.weather, &self.config.alerts));
        let favored = favored_types(&alerts);
        if !favored.is_empty() {
            trail.note(format!(
                "Active high alerts favor {}.",
                join_types(&favored)
            ));
        }

        let ctx = SlotContext {
            target,
            tolerance: self.config.insulation.tolerance,
            favored: &favored,
            season: current_season(&request.weather, request.now),
        };

        let selected = select_slots(&pool, &ctx, &mut trail);
        let selections: Vec<SlotSelection> = selected
            .iter()
            .map(|(slot, c)| SlotSelection {
                slot: *slot,
                item_id: c.item.id.clone(),
                insulation: c.insulation,
                locked: c.locked,
            })
            .collect();
        let items: Vec<ClothingItem> = selected.iter().map(|(_, c)| c.item.clone()).collect();

        let complete = ClothingType::MANDATORY
            .iter()
            .all(|slot| selections.iter().any(|s| s.slot == *slot));
        let confidence_score = if complete {
            self.config.scoring.complete_confidence
        } else {
            self.config.scoring.partial_confidence
        };
        trail.note(format!(
            "{} outfit with {} item(s); confidence {confidence_score:.1}.",
            if complete { "Complete" } else { "Partial" },
            items.len()
        ));

        debug!(
            wardrobe_size = wardrobe.len(),
            target,
            confidence = confidence_score,
            "Outfit recommendation generated"
        );

        Ok(OutfitRecommendation {
            id: Uuid::new_v4(),
            items,
            selections,
            confidence_score,
            reasoning: trail.render(),
            alerts,
            context: request.weather.clone(),
            required_insulation: target,
            dress_code,
            type_backfills: set.backfills,
            warnings: set.warnings,
            generated_at: request.now,
        })
    }

    /// Recommend outfits for independent requests in parallel
    #[must_use]
    pub fn recommend_many(
        &self,
        requests: &[RecommendationRequest],
    ) -> Vec<Result<OutfitRecommendation, RecommendationError>> {
        requests
            .par_iter()
            .map(|request| self.recommend(request))
            .collect()
    }
}

/// Explicit dress code, else one inferred from a non-empty calendar
fn resolve_dress_code(constraints: &RecommendationConstraints) -> Option<DressCode> {
    if constraints.dress_code.is_none() && !constraints.events.is_empty() {
        return Some(dress_code_from_events(&constraints.events));
    }
    constraints.dress_code
}

/// Fill each slot in order; Outerwear may stand in for an empty Top pool
fn select_slots<'a>(
    pool: &[Candidate<'a>],
    ctx: &SlotContext<'_>,
    trail: &mut ReasoningTrail,
) -> Vec<(ClothingType, Candidate<'a>)> {
    let mut selected = Vec::new();
    let mut outerwear_as_top = false;

    for slot in ClothingType::ALL {
        if slot == ClothingType::Outerwear && outerwear_as_top {
            continue;
        }
        let mut slot_pool: Vec<Candidate<'a>> =
            pool.iter().filter(|c| c.kind == slot).copied().collect();
        if slot == ClothingType::Top && slot_pool.is_empty() {
            slot_pool = pool
                .iter()
                .filter(|c| c.kind == ClothingType::Outerwear)
                .copied()
                .collect();
            if !slot_pool.is_empty() {
                outerwear_as_top = true;
                trail.note("No tops available; outerwear fills the top layer.");
            }
        }

        match pick_for_slot(slot, slot_pool, ctx, trail) {
            Some(candidate) => selected.push((slot, candidate)),
            None if slot.is_mandatory() => trail.note(format!("No {slot} could be selected.")),
            None => {}
        }
    }

    selected
}

fn pick_for_slot<'a>(
    slot: ClothingType,
    slot_pool: Vec<Candidate<'a>>,
    ctx: &SlotContext<'_>,
    trail: &mut ReasoningTrail,
) -> Option<Candidate<'a>> {
    let first = slot_pool.first().copied()?;

    let locked: Vec<&Candidate<'a>> = slot_pool.iter().filter(|c| c.locked).collect();
    if let Some(keep) = locked.first() {
        if locked.len() > 1 {
            let skipped: Vec<&str> = locked[1..].iter().map(|c| c.item.id.as_str()).collect();
            trail.note(format!(
                "Several locked items compete for {slot}; kept {} over {}.",
                keep.item.id,
                skipped.join(", ")
            ));
        }
        trail.note(format!("{slot}: {} (locked).", keep.item.display_name()));
        return Some(**keep);
    }

    let kind = first.kind;
    let seasonal = prefer_season(slot_pool, ctx.season);
    let mut shortlist: Vec<Candidate<'a>> = seasonal
        .iter()
        .filter(|c| within_tolerance(c.insulation, ctx.target, ctx.tolerance))
        .copied()
        .collect();

    if shortlist.is_empty() {
        if !slot.is_mandatory() && !ctx.favored.contains(&kind) {
            return None;
        }
        shortlist = nearest_to_target(&seasonal, ctx.target);
        trail.note(format!(
            "{slot}: nothing within {}±{}; widened to the closest warmth.",
            ctx.target, ctx.tolerance
        ));
    }

    prioritize(&mut shortlist);
    let chosen = shortlist.first().copied()?;
    trail.note(format!(
        "{slot}: {} (warmth {:.1}).",
        chosen.item.display_name(),
        chosen.insulation
    ));
    Some(chosen)
}

/// Candidates at the minimum warmth distance from `target` (ties kept)
fn nearest_to_target<'a>(candidates: &[Candidate<'a>], target: f64) -> Vec<Candidate<'a>> {
    let best = candidates
        .iter()
        .map(|c| (c.insulation - target).abs())
        .fold(f64::INFINITY, f64::min);
    candidates
        .iter()
        .filter(|c| ((c.insulation - target).abs() - best).abs() < f64::EPSILON)
        .copied()
        .collect()
}

fn join_types(kinds: &[ClothingType]) -> String {
    kinds
        .iter()
        .copied()
        .map(ClothingType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
