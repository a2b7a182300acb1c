//! Concrete sorting strategies.
//!
//! All three variants sort in place, ascending, over any total order.  They
//! must produce identical output for identical input (same multiset, same
//! order); stability is not part of the contract.

/// An interchangeable in-place sorting algorithm.
pub trait SortStrategy<T>: std::fmt::Debug + Send + Sync {
    /// Sort `data` ascending, in place.
    fn sort(&self, data: &mut [T]);
}

/// Bubble sort — repeated adjacent swaps until no pass swaps.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl<T: Ord> SortStrategy<T> for BubbleSort {
    fn sort(&self, data: &mut [T]) {
        let len = data.len();
        for pass in 0..len {
            let mut swapped = false;
            for i in 1..len - pass {
                if data[i - 1] > data[i] {
                    data.swap(i - 1, i);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
    }
}

/// Quicksort with Lomuto partitioning, last element as pivot.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl<T: Ord> SortStrategy<T> for QuickSort {
    fn sort(&self, data: &mut [T]) {
        quicksort(data);
    }
}

fn quicksort<T: Ord>(mut data: &mut [T]) {
    // Recurse only into the smaller partition and loop on the larger, so
    // the depth stays O(log n) even for adversarial (pre-sorted) input.
    while data.len() > 1 {
        let pivot = partition(data);
        let (lower, rest) = std::mem::take(&mut data).split_at_mut(pivot);
        let upper = &mut rest[1..];
        if lower.len() < upper.len() {
            quicksort(lower);
            data = upper;
        } else {
            quicksort(upper);
            data = lower;
        }
    }
}

fn partition<T: Ord>(data: &mut [T]) -> usize {
    let pivot = data.len() - 1;
    let mut store = 0;
    for i in 0..pivot {
        if data[i] <= data[pivot] {
            data.swap(i, store);
            store += 1;
        }
    }
    data.swap(store, pivot);
    store
}

/// Top-down merge sort.
///
/// Requires `Clone` for the merge buffer; the other variants need only `Ord`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl<T: Ord + Clone> SortStrategy<T> for MergeSort {
    fn sort(&self, data: &mut [T]) {
        mergesort(data);
    }
}

fn mergesort<T: Ord + Clone>(data: &mut [T]) {
    if data.len() <= 1 {
        return;
    }
    let mid = data.len() / 2;
    mergesort(&mut data[..mid]);
    mergesort(&mut data[mid..]);

    let merged = {
        let (left, right) = data.split_at(mid);
        let mut merged = Vec::with_capacity(data.len());
        let (mut i, mut j) = (0, 0);
        while i < left.len() && j < right.len() {
            if left[i] <= right[j] {
                merged.push(left[i].clone());
                i += 1;
            } else {
                merged.push(right[j].clone());
                j += 1;
            }
        }
        merged.extend_from_slice(&left[i..]);
        merged.extend_from_slice(&right[j..]);
        merged
    };

    for (slot, value) in data.iter_mut().zip(merged) {
        *slot = value;
    }
}
