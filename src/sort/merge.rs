//! Top-down merge sort.
//!
//! The recursion only decides which spans get merged and in what order, and
//! that depends on the length alone. [`MergeSort::new`] therefore flattens it
//! into a post-order plan of `(left, mid, right)` spans up front; the array is
//! only touched lazily, one buffered element per `next()` call.

use std::iter::FusedIterator;

use super::{Highlight, Snapshot};

/// One pending merge of `[left, mid]` with `[mid + 1, right]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    left: usize,
    mid: usize,
    right: usize,
}

/// Progress through the merge currently on screen.
#[derive(Debug, Clone)]
struct Merge<T> {
    span: Span,
    merged: Vec<T>,
    /// Next unconsumed index of the left half.
    li: usize,
    /// Next unconsumed index of the right half.
    ri: usize,
}

/// Merge sort sequencer.
///
/// Every element moved into the merge buffer yields a frame showing the
/// buffer followed by both unconsumed tails, with the whole span active. Once
/// a half runs dry the tails are appended, the span is written back, and one
/// committed frame closes the merge.
///
/// When the heads of both halves compare equal the right one is taken first.
/// This makes the sort unstable on purpose.
#[derive(Debug, Clone)]
pub struct MergeSort<T> {
    data: Vec<T>,
    plan: std::vec::IntoIter<Span>,
    current: Option<Merge<T>>,
}

impl<T: Ord + Clone> MergeSort<T> {
    pub fn new(data: Vec<T>) -> Self {
        let mut plan = Vec::new();
        if data.len() > 1 {
            plan_spans(0, data.len() - 1, &mut plan);
        }
        Self {
            data,
            plan: plan.into_iter(),
            current: None,
        }
    }

    /// The span as it would look with the buffer and both tails laid out in order.
    fn preview(&self, merge: &Merge<T>) -> Vec<T> {
        let Span { left, mid, right } = merge.span;
        let mut values = Vec::with_capacity(self.data.len());
        values.extend_from_slice(&self.data[..left]);
        values.extend_from_slice(&merge.merged);
        values.extend_from_slice(&self.data[merge.li..=mid]);
        values.extend_from_slice(&self.data[merge.ri..=right]);
        values.extend_from_slice(&self.data[right + 1..]);
        values
    }
}

/// Post-order list of merges for the inclusive range `[left, right]`.
fn plan_spans(left: usize, right: usize, out: &mut Vec<Span>) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    plan_spans(left, mid, out);
    plan_spans(mid + 1, right, out);
    out.push(Span { left, mid, right });
}

impl<T: Ord + Clone> Iterator for MergeSort<T> {
    type Item = Snapshot<T>;

    fn next(&mut self) -> Option<Snapshot<T>> {
        let mut merge = match self.current.take() {
            Some(merge) => merge,
            None => {
                let span = self.plan.next()?;
                Merge {
                    span,
                    merged: Vec::with_capacity(span.right - span.left + 1),
                    li: span.left,
                    ri: span.mid + 1,
                }
            }
        };
        let Span { left, mid, right } = merge.span;

        if merge.li <= mid && merge.ri <= right {
            if self.data[merge.li] < self.data[merge.ri] {
                merge.merged.push(self.data[merge.li].clone());
                merge.li += 1;
            } else {
                merge.merged.push(self.data[merge.ri].clone());
                merge.ri += 1;
            }
            let snapshot =
                Snapshot::spanning(self.preview(&merge), left..=right, Highlight::Active);
            self.current = Some(merge);
            return Some(snapshot);
        }

        let mut merged = merge.merged;
        merged.extend_from_slice(&self.data[merge.li..=mid]);
        merged.extend_from_slice(&self.data[merge.ri..=right]);
        self.data.splice(left..=right, merged);

        Some(Snapshot::spanning(
            self.data.clone(),
            left..=right,
            Highlight::Committed,
        ))
    }
}

impl<T: Ord + Clone> FusedIterator for MergeSort<T> {}
