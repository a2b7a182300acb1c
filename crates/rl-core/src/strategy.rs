//! The relinkable strategy holder.
//!
//! A [`StrategyHandle<S>`] owns exactly one live strategy reference at a time
//! and lets callers swap it at runtime without touching the call sites that
//! delegate through it.  Family crates wrap it in a concrete context type
//! (a sort context, a shipping calculator, a shopping cart) that forwards
//! one operation to the currently bound strategy.

use std::sync::{Arc, Mutex};

/// Holds one live strategy reference, swappable at runtime.
///
/// The slot is never empty: constructors require an initial strategy and
/// [`relink`][Self::relink] replaces it wholesale, releasing the previous
/// reference.  The internal mutex guarantees that one complete write wins
/// under racing relinks — no torn reference is ever observed.
///
/// [`current`][Self::current] snapshots the bound strategy, so an operation
/// already in flight keeps the strategy it started with even if the handle
/// is relinked mid-call.
pub struct StrategyHandle<S: ?Sized> {
    current: Mutex<Arc<S>>,
}

impl<S: ?Sized> StrategyHandle<S> {
    /// Create a handle bound to `strategy`.
    pub fn new(strategy: Arc<S>) -> Self {
        Self {
            current: Mutex::new(strategy),
        }
    }

    /// Replace the bound strategy.
    ///
    /// Takes effect for the next [`current`][Self::current] snapshot; the
    /// previous reference is released.
    pub fn relink(&self, strategy: Arc<S>) {
        let mut guard = self.current.lock().expect("StrategyHandle mutex poisoned");
        *guard = strategy;
    }

    /// Snapshot the currently bound strategy.
    pub fn current(&self) -> Arc<S> {
        self.current
            .lock()
            .expect("StrategyHandle mutex poisoned")
            .clone()
    }
}

impl<S: ?Sized + std::fmt::Debug> std::fmt::Debug for StrategyHandle<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StrategyHandle({:?})", self.current())
    }
}
