// ABOUTME: Human-readable trail of filtering and selection decisions
// ABOUTME: Each pipeline stage appends one sentence; the trail renders as a single paragraph
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

use std::fmt::Write as _;

/// Accumulates reasoning sentences in pipeline order
#[derive(Debug, Default, Clone)]
pub struct ReasoningTrail {
    steps: Vec<String>,
}

impl ReasoningTrail {
    /// Empty trail
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sentence
    pub fn note(&mut self, step: impl Into<String>) {
        self.steps.push(step.into());
    }

    /// Record a filtering stage with its before/after counts
    pub fn stage(&mut self, name: &str, before: usize, after: usize) {
        let mut line = format!("{name}: {before} -> {after} candidates");
        if after < before {
            let _ = write!(line, " ({} excluded)", before - after);
        }
        line.push('.');
        self.steps.push(line);
    }

    /// Render as one paragraph
    #[must_use]
    pub fn render(&self) -> String {
        self.steps.join(" ")
    }
}
