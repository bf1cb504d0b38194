//! Animation frames produced by the sequencers.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::highlight::{mark_indices, mark_span, Highlight};

/// One animation frame: a copy of the array plus a tag per index.
///
/// `tags.len() == values.len()` holds for every snapshot built through the
/// constructors below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot<T> {
    /// Array state at this instant.
    pub values: Vec<T>,
    /// Highlight category for each index of `values`.
    pub tags: Vec<Highlight>,
}

impl<T> Snapshot<T> {
    /// A frame with every bar neutral (freshly generated data).
    pub fn neutral(values: Vec<T>) -> Self {
        let tags = vec![Highlight::Neutral; values.len()];
        Self { values, tags }
    }

    /// A frame tagging the listed indices with `category`.
    pub fn marking(values: Vec<T>, indices: &[usize], category: Highlight) -> Self {
        let tags = mark_indices(values.len(), indices, category);
        Self { values, tags }
    }

    /// A frame tagging the inclusive `span` with `category`.
    pub fn spanning(values: Vec<T>, span: RangeInclusive<usize>, category: Highlight) -> Self {
        let tags = mark_span(values.len(), span, category);
        Self { values, tags }
    }

    /// Number of bars in the frame.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(value, tag)` pairs.
    pub fn bars(&self) -> impl Iterator<Item = (&T, Highlight)> {
        self.values.iter().zip(self.tags.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_snapshot() {
        let snapshot = Snapshot::neutral(vec![3, 1, 2]);
        assert_eq!(snapshot.len(), 3);
        assert!(snapshot.tags.iter().all(|t| *t == Highlight::Neutral));
    }

    #[test]
    fn test_marking_snapshot() {
        let snapshot = Snapshot::marking(vec![3, 1, 2], &[0, 2], Highlight::Active);
        let tags: Vec<Highlight> = snapshot.bars().map(|(_, t)| t).collect();
        assert_eq!(tags, vec![Highlight::Active, Highlight::Neutral, Highlight::Active]);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = Snapshot::spanning(vec![1u32, 2], 0..=0, Highlight::Committed);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"values":[1,2],"tags":["committed","neutral"]}"#);
    }
}
