//! Insertion sort, one frame per shift and one per placement.

use std::iter::FusedIterator;

use super::{Highlight, Snapshot};

/// Insertion sort sequencer.
///
/// While an element is held out of the array, every predecessor shifted right
/// produces a frame tagging the hole and the next candidate to its left.
/// Dropping the held element into the hole produces a frame with the
/// placement index committed: the slot the key landed in, not the slot it
/// was taken from. Frames taken mid-shift show the shifted value
/// twice, since the held element is not in the array yet.
#[derive(Debug, Clone)]
pub struct InsertionSort<T> {
    data: Vec<T>,
    /// Index of the next element to insert.
    next: usize,
    /// Element currently held out of the array.
    key: Option<T>,
    /// Where `key` would be placed if insertion stopped now.
    hole: usize,
}

impl<T: Ord + Clone> InsertionSort<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data,
            next: 1,
            key: None,
            hole: 0,
        }
    }
}

impl<T: Ord + Clone> Iterator for InsertionSort<T> {
    type Item = Snapshot<T>;

    fn next(&mut self) -> Option<Snapshot<T>> {
        if self.key.is_none() {
            if self.next >= self.data.len() {
                return None;
            }
            self.key = Some(self.data[self.next].clone());
            self.hole = self.next;
        }

        let key = self.key.as_ref()?;
        if self.hole > 0 && *key < self.data[self.hole - 1] {
            self.data[self.hole] = self.data[self.hole - 1].clone();
            self.hole -= 1;

            let hole = self.hole;
            let boundary = [hole.saturating_sub(1), hole];
            return Some(Snapshot::marking(
                self.data.clone(),
                &boundary,
                Highlight::Active,
            ));
        }

        let key = self.key.take()?;
        self.data[self.hole] = key;
        self.next += 1;
        Some(Snapshot::marking(
            self.data.clone(),
            &[self.hole],
            Highlight::Committed,
        ))
    }
}

impl<T: Ord + Clone> FusedIterator for InsertionSort<T> {}
