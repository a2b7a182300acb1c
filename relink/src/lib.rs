//! # relink
//!
//! Runtime-relinkable strategy dispatch and lazily-initialised shared
//! resources.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `rl-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! relink = "0.1"
//! ```
//!
//! Resolve a shared resource once, no matter how many callers race for it:
//!
//! ```rust
//! use relink::core::SharedResource;
//!
//! struct Gateway { endpoint: String }
//!
//! let gateway: SharedResource<Gateway> = SharedResource::new();
//! let handle = gateway
//!     .resolve("https://pay.example", |cfg| Ok(Gateway { endpoint: cfg.into() }))
//!     .unwrap();
//! assert_eq!(handle.config(), "https://pay.example");
//! ```
//!
//! Swap a strategy at runtime without touching the call site:
//!
//! ```rust
//! use std::sync::Arc;
//! use relink::sort::{BubbleSort, MergeSort, SortContext};
//!
//! let context = SortContext::new(Arc::new(BubbleSort));
//! let mut data = vec![100, 21, 23, 32, 4, 88, 66];
//! context.sort(&mut data);
//! assert_eq!(data, vec![4, 21, 23, 32, 66, 88, 100]);
//!
//! context.set_strategy(Arc::new(MergeSort));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors, shared-resource handles, and the relinkable strategy holder.
pub use rl_core as core;

/// The sorting strategy family and its selection policy.
pub use rl_sort as sort;

/// Orders, shipping, and payment strategy families.
pub use rl_commerce as commerce;
