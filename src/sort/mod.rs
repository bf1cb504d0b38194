//! Sorting algorithms expressed as lazy snapshot sequences.
//!
//! Each algorithm owns its array and implements [`Iterator`], yielding a
//! [`Snapshot`] after every step worth showing. Nothing runs until the
//! iterator is pulled, and a consumed sequencer cannot be replayed: build a
//! new one over a fresh copy of the input instead.
//!
//! ## Submodules
//!
//! - [`highlight`]: the [`Highlight`] categories and tagging helpers
//! - [`snapshot`]: the [`Snapshot`] frame type
//! - one module per algorithm: [`BubbleSort`], [`InsertionSort`],
//!   [`MergeSort`], [`QuickSort`]
//!
//! ## Example
//!
//! ```
//! use sortscope::sort::{Algorithm, Highlight};
//!
//! let frames: Vec<_> = Algorithm::Bubble.sequence(vec![5, 3, 1]).collect();
//! assert_eq!(frames.len(), 3);
//! assert_eq!(frames[2].values, vec![1, 3, 5]);
//! assert_eq!(frames[2].tags[0], Highlight::Active);
//! ```

mod bubble;
pub mod highlight;
mod insertion;
mod merge;
mod quick;
pub mod snapshot;

pub use bubble::BubbleSort;
pub use highlight::Highlight;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use snapshot::Snapshot;

use serde::{Deserialize, Serialize};

/// A boxed, single-pass snapshot sequence that can be moved to a worker thread.
pub type Sequencer<T> = Box<dyn Iterator<Item = Snapshot<T>> + Send>;

/// The supported sorting algorithms.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
    Merge,
    Quick,
}

impl Algorithm {
    /// All algorithms in display order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// Cycle to the next algorithm.
    pub fn next(self) -> Self {
        match self {
            Algorithm::Bubble => Algorithm::Insertion,
            Algorithm::Insertion => Algorithm::Merge,
            Algorithm::Merge => Algorithm::Quick,
            Algorithm::Quick => Algorithm::Bubble,
        }
    }

    /// Cycle to the previous algorithm.
    pub fn prev(self) -> Self {
        match self {
            Algorithm::Bubble => Algorithm::Quick,
            Algorithm::Insertion => Algorithm::Bubble,
            Algorithm::Merge => Algorithm::Insertion,
            Algorithm::Quick => Algorithm::Merge,
        }
    }

    /// Returns the display label for this algorithm.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    /// Position in [`Algorithm::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Algorithm::Bubble => 0,
            Algorithm::Insertion => 1,
            Algorithm::Merge => 2,
            Algorithm::Quick => 3,
        }
    }

    /// Wrap `data` in this algorithm's sequencer.
    ///
    /// The sequencer takes ownership; pass a clone to keep the original.
    pub fn sequence<T>(self, data: Vec<T>) -> Sequencer<T>
    where
        T: Ord + Clone + Send + 'static,
    {
        match self {
            Algorithm::Bubble => Box::new(BubbleSort::new(data)),
            Algorithm::Insertion => Box::new(InsertionSort::new(data)),
            Algorithm::Merge => Box::new(MergeSort::new(data)),
            Algorithm::Quick => Box::new(QuickSort::new(data)),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.next().prev(), algorithm);
            assert_eq!(Algorithm::ALL[algorithm.index()], algorithm);
        }
    }

    #[test]
    fn test_trivial_inputs_yield_nothing() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.sequence(Vec::<u32>::new()).count(), 0);
            assert_eq!(algorithm.sequence(vec![7u32]).count(), 0);
        }
    }

    #[test]
    fn test_deserialize_lowercase() {
        let algorithm: Algorithm = serde_json::from_str("\"quick\"").unwrap();
        assert_eq!(algorithm, Algorithm::Quick);
    }
}
