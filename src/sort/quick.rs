//! Quicksort with a Lomuto partition around the last element.

use std::iter::FusedIterator;

use super::{Highlight, Snapshot};

/// A partition in progress over the inclusive range `[low, high]`.
#[derive(Debug, Clone)]
struct Partition<T> {
    low: usize,
    high: usize,
    pivot: T,
    /// Everything in `[low, store)` is strictly less than the pivot.
    store: usize,
    /// Next index to scan.
    scan: usize,
}

/// Quicksort sequencer.
///
/// Each scan comparison yields a frame tagging the scan index and, once
/// something has been moved below the boundary, the last slot of the "less
/// than pivot" region. Placing the pivot yields a frame with its final index
/// committed. The left side is fully processed before the right side, and
/// ranges of fewer than two elements produce no frames.
#[derive(Debug, Clone)]
pub struct QuickSort<T> {
    data: Vec<T>,
    /// Ranges still waiting to be partitioned; the top is processed next.
    pending: Vec<(usize, usize)>,
    current: Option<Partition<T>>,
}

impl<T: Ord + Clone> QuickSort<T> {
    pub fn new(data: Vec<T>) -> Self {
        let mut pending = Vec::new();
        if data.len() > 1 {
            pending.push((0, data.len() - 1));
        }
        Self {
            data,
            pending,
            current: None,
        }
    }

    fn start_partition(&mut self) -> Option<Partition<T>> {
        let (low, high) = self.pending.pop()?;
        Some(Partition {
            low,
            high,
            pivot: self.data[high].clone(),
            store: low,
            scan: low,
        })
    }

    /// Queue the sub-ranges on either side of `pivot` so the left one runs first.
    fn push_children(&mut self, low: usize, pivot: usize, high: usize) {
        if pivot + 1 < high {
            self.pending.push((pivot + 1, high));
        }
        if pivot > low + 1 {
            self.pending.push((low, pivot - 1));
        }
    }
}

impl<T: Ord + Clone> Iterator for QuickSort<T> {
    type Item = Snapshot<T>;

    fn next(&mut self) -> Option<Snapshot<T>> {
        let mut part = match self.current.take() {
            Some(part) => part,
            None => self.start_partition()?,
        };

        if part.scan < part.high {
            let scan = part.scan;
            if self.data[scan] < part.pivot {
                self.data.swap(part.store, scan);
                part.store += 1;
            }
            part.scan += 1;

            let snapshot = if part.store > part.low {
                Snapshot::marking(self.data.clone(), &[scan, part.store - 1], Highlight::Active)
            } else {
                Snapshot::marking(self.data.clone(), &[scan], Highlight::Active)
            };
            self.current = Some(part);
            return Some(snapshot);
        }

        let Partition { low, high, store, .. } = part;
        self.data.swap(store, high);
        self.push_children(low, store, high);
        Some(Snapshot::marking(
            self.data.clone(),
            &[store],
            Highlight::Committed,
        ))
    }
}

impl<T: Ord + Clone> FusedIterator for QuickSort<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_partition() {
        let frames: Vec<_> = QuickSort::new(vec![3, 1, 2]).collect();

        // pivot 2: scan 3 (no move), scan 1 (swap to front), then place pivot
        assert_eq!(frames[0].values, vec![3, 1, 2]);
        assert_eq!(
            frames[0].tags,
            vec![Highlight::Active, Highlight::Neutral, Highlight::Neutral]
        );
        assert_eq!(frames[1].values, vec![1, 3, 2]);
        assert_eq!(
            frames[1].tags,
            vec![Highlight::Active, Highlight::Active, Highlight::Neutral]
        );
        assert_eq!(frames[2].values, vec![1, 2, 3]);
        assert_eq!(
            frames[2].tags,
            vec![Highlight::Neutral, Highlight::Committed, Highlight::Neutral]
        );
        assert_eq!(frames.len(), 3);
    }

    #[test]
    fn test_left_range_before_right() {
        let frames: Vec<_> = QuickSort::new(vec![4, 5, 1, 2, 3]).collect();
        let commits: Vec<usize> = frames
            .iter()
            .filter_map(|f| f.tags.iter().position(|t| *t == Highlight::Committed))
            .collect();
        // pivot 3 lands at 2, then [1,2] on the left, then [5,4] on the right
        assert_eq!(commits, vec![2, 1, 3]);
        assert_eq!(frames.last().unwrap().values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_boundary_outside_subrange_is_not_tagged() {
        use Highlight::{Active, Committed, Neutral};

        let frames: Vec<_> = QuickSort::new(vec![4, 5, 1, 2, 3]).collect();
        assert_eq!(frames.len(), 9);

        // First scan of [3, 4]: nothing below the pivot yet, so index 2
        // (left of the range) stays neutral
        assert_eq!(frames[7].values, vec![1, 2, 3, 5, 4]);
        assert_eq!(frames[7].tags, vec![Neutral, Neutral, Neutral, Active, Neutral]);

        assert_eq!(frames[8].values, vec![1, 2, 3, 4, 5]);
        assert_eq!(frames[8].tags, vec![Neutral, Neutral, Neutral, Committed, Neutral]);
    }

    #[test]
    fn test_all_equal_terminates() {
        let frames: Vec<_> = QuickSort::new(vec![7; 6]).collect();
        // partitions of length 6, 5, ..., 2: (len - 1) comparisons + 1 pivot each
        assert_eq!(frames.len(), 5 + 4 + 3 + 2 + 1 + 5);
        assert!(frames.iter().all(|f| f.values == vec![7; 6]));
    }
}
