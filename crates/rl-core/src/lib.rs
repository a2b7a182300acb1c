//! # rl-core
//!
//! Core building blocks shared across the relink-rs workspace — the error
//! hierarchy, primitive type aliases, the lazily-initialised shared-resource
//! handle ([`SharedResource`]), and the relinkable strategy holder
//! ([`StrategyHandle`]).
//!
//! Application code should usually depend on the `relink` façade crate
//! rather than on this crate directly.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Lazily-initialised shared resources (`SharedResource`, `RacyResource`).
pub mod resource;

/// The relinkable strategy holder (`StrategyHandle`).
pub mod strategy;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Decimal quantity used for money amounts and weights.
pub type Decimal = f64;

/// Non-negative integer type (shipping distances, counts).
pub type Natural = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use resource::{RacyResource, Resource, ResourceHandle, SharedResource};
pub use strategy::StrategyHandle;
