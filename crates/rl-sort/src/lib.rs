//! # rl-sort
//!
//! The sorting strategy family: three interchangeable in-place sorts behind
//! one [`SortStrategy`] trait, a [`SortContext`] that delegates to whichever
//! strategy is currently bound, and a [`SortKind`] selection policy that
//! picks a variant from the input size.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The `SortStrategy` trait and its three implementations.
pub mod algorithms;

/// The runtime-swappable sort context.
pub mod context;

/// Size-based strategy selection.
pub mod selection;

pub use algorithms::{BubbleSort, MergeSort, QuickSort, SortStrategy};
pub use context::SortContext;
pub use selection::SortKind;
