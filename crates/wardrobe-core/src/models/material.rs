// ABOUTME: Fabric material taxonomy with blend and synonym normalization
// ABOUTME: Maps free-text material labels such as "95% Cotton, 5% Spandex" onto a closed set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of fabric materials the engine reasons about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Material {
    /// Cotton, also the default for unknown materials
    Cotton,
    /// Wool and animal fibres (merino, cashmere, alpaca)
    Wool,
    /// Generic synthetics (spandex, acrylic, rayon)
    Synthetic,
    /// Waterproof membranes
    #[serde(rename = "Gore-Tex")]
    GoreTex,
    /// Fleece and sherpa
    Fleece,
    /// Leather and suede
    Leather,
    /// Denim and chambray
    Denim,
    /// Silk
    Silk,
    /// Linen
    Linen,
    /// Polyester
    Polyester,
    /// Nylon and polyamide
    Nylon,
    /// Down and feather fill
    Down,
}

/// Synonym table, checked in order. Multi-word and more specific entries
/// come before the words they contain.
const SYNONYMS: &[(&str, Material)] = &[
    ("gore tex", Material::GoreTex),
    ("goretex", Material::GoreTex),
    ("polar fleece", Material::Fleece),
    ("fleece", Material::Fleece),
    ("sherpa", Material::Fleece),
    ("merino", Material::Wool),
    ("cashmere", Material::Wool),
    ("alpaca", Material::Wool),
    ("mohair", Material::Wool),
    ("lambswool", Material::Wool),
    ("wool", Material::Wool),
    ("woolen", Material::Wool),
    ("cotton", Material::Cotton),
    ("denim", Material::Denim),
    ("chambray", Material::Denim),
    ("jean", Material::Denim),
    ("jeans", Material::Denim),
    ("leather", Material::Leather),
    ("suede", Material::Leather),
    ("nubuck", Material::Leather),
    ("silk", Material::Silk),
    ("linen", Material::Linen),
    ("flax", Material::Linen),
    ("polyamide", Material::Nylon),
    ("nylon", Material::Nylon),
    ("polyester", Material::Polyester),
    ("poly", Material::Polyester),
    ("down", Material::Down),
    ("feather", Material::Down),
    ("spandex", Material::Synthetic),
    ("elastane", Material::Synthetic),
    ("lycra", Material::Synthetic),
    ("acrylic", Material::Synthetic),
    ("rayon", Material::Synthetic),
    ("viscose", Material::Synthetic),
    ("modal", Material::Synthetic),
    ("microfiber", Material::Synthetic),
    ("synthetic", Material::Synthetic),
];

impl Material {
    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cotton => "Cotton",
            Self::Wool => "Wool",
            Self::Synthetic => "Synthetic",
            Self::GoreTex => "Gore-Tex",
            Self::Fleece => "Fleece",
            Self::Leather => "Leather",
            Self::Denim => "Denim",
            Self::Silk => "Silk",
            Self::Linen => "Linen",
            Self::Polyester => "Polyester",
            Self::Nylon => "Nylon",
            Self::Down => "Down",
        }
    }

    /// Recognize a material label, returning `None` when nothing matches.
    ///
    /// Blends resolve to the component with the highest stated percentage;
    /// without percentages the first recognized component wins.
    #[must_use]
    pub fn recognize(label: &str) -> Option<Self> {
        let mut best: Option<(Self, f64)> = None;
        for component in label.split([',', '/', '&', '+', ';']) {
            let Some(material) = match_component(component) else {
                continue;
            };
            let share = percentage(component).unwrap_or(0.0);
            if best.is_none_or(|(_, best_share)| share > best_share) {
                best = Some((material, share));
            }
        }
        best.map(|(material, _)| material)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize an optional free-text material onto the closed set.
///
/// Absent and unrecognized labels resolve to [`Material::Cotton`].
#[must_use]
pub fn normalize_material(label: Option<&str>) -> Material {
    label
        .and_then(Material::recognize)
        .unwrap_or(Material::Cotton)
}

fn match_component(component: &str) -> Option<Material> {
    let words: String = component
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphabetic() { c } else { ' ' })
        .collect();
    let padded = format!(" {} ", words.split_whitespace().collect::<Vec<_>>().join(" "));
    SYNONYMS
        .iter()
        .find(|(keyword, _)| padded.contains(&format!(" {keyword} ")))
        .map(|(_, material)| *material)
}

fn percentage(component: &str) -> Option<f64> {
    let (before, _) = component.split_once('%')?;
    let start = before
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_numeric_char(*c))
        .last()
        .map_or(before.len(), |(index, _)| index);
    before[start..].trim().parse().ok()
}

fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c.is_whitespace()
}
