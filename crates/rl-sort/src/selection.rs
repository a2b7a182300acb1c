//! Size-based strategy selection.

use std::sync::Arc;

use crate::algorithms::{BubbleSort, MergeSort, QuickSort, SortStrategy};

/// The sorting strategy variants a selection policy can choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    /// [`BubbleSort`].
    Bubble,
    /// [`QuickSort`].
    Quick,
    /// [`MergeSort`].
    Merge,
}

impl SortKind {
    /// Choose a variant from the candidate input.
    ///
    /// Merge sort for inputs longer than 10 elements, quicksort otherwise.
    /// The threshold is strict: a length of exactly 10 selects quicksort.
    pub fn for_slice<T>(data: &[T]) -> Self {
        if data.len() > 10 {
            SortKind::Merge
        } else {
            SortKind::Quick
        }
    }

    /// Construct the strategy this variant names.
    pub fn strategy<T>(self) -> Arc<dyn SortStrategy<T>>
    where
        T: Ord + Clone + 'static,
    {
        match self {
            SortKind::Bubble => Arc::new(BubbleSort),
            SortKind::Quick => Arc::new(QuickSort),
            SortKind::Merge => Arc::new(MergeSort),
        }
    }
}
