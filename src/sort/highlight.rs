//! Highlight categories and the helpers the sequencers use to tag indices.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Cosmetic per-index state shown by the chart.
///
/// Carries no algorithmic meaning; the renderer maps it to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    /// Not involved in the current step.
    #[default]
    Neutral,
    /// Being compared, shifted or merged.
    Active,
    /// Settled into its place by the current step.
    Committed,
}

/// Tag every index in `indices` with `category`, everything else neutral.
///
/// Indices past `len` are ignored.
pub fn mark_indices(len: usize, indices: &[usize], category: Highlight) -> Vec<Highlight> {
    let mut tags = vec![Highlight::Neutral; len];
    for &idx in indices {
        if let Some(tag) = tags.get_mut(idx) {
            *tag = category;
        }
    }
    tags
}

/// Tag the inclusive `span` with `category`, everything else neutral.
pub fn mark_span(len: usize, span: RangeInclusive<usize>, category: Highlight) -> Vec<Highlight> {
    let mut tags = vec![Highlight::Neutral; len];
    for tag in tags.iter_mut().take(span.end().saturating_add(1)).skip(*span.start()) {
        *tag = category;
    }
    tags
}
