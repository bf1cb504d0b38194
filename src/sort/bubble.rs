//! Bubble sort, one frame per adjacent comparison.

use std::iter::FusedIterator;

use super::{Highlight, Snapshot};

/// Bubble sort sequencer.
///
/// Pass `pass` compares the pairs `(j, j + 1)` for `j < len - pass - 1`, so the
/// settled suffix is never revisited. A frame is emitted after every
/// comparison, whether or not it swapped.
#[derive(Debug, Clone)]
pub struct BubbleSort<T> {
    data: Vec<T>,
    pass: usize,
    j: usize,
}

impl<T: Ord + Clone> BubbleSort<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data, pass: 0, j: 0 }
    }
}

impl<T: Ord + Clone> Iterator for BubbleSort<T> {
    type Item = Snapshot<T>;

    fn next(&mut self) -> Option<Snapshot<T>> {
        let n = self.data.len();
        while self.pass < n {
            if self.j + 1 >= n - self.pass {
                self.pass += 1;
                self.j = 0;
                continue;
            }

            let j = self.j;
            if self.data[j + 1] < self.data[j] {
                self.data.swap(j, j + 1);
            }
            self.j += 1;
            return Some(Snapshot::marking(
                self.data.clone(),
                &[j, j + 1],
                Highlight::Active,
            ));
        }
        None
    }
}

impl<T: Ord + Clone> FusedIterator for BubbleSort<T> {}
