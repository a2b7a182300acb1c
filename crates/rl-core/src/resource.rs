//! Lazily-initialised shared resources.
//!
//! [`SharedResource<T>`] owns the construction and thread-safe publication of
//! exactly one [`Resource<T>`] per handle, no matter how many threads race to
//! resolve it.  The configuration string is captured by whichever call
//! performs the actual construction; later calls with a different
//! configuration are ignored (first-writer-wins).
//!
//! [`RacyResource<T>`] is the check-then-create variant *without* a held
//! gate.  It is kept as a documented anti-pattern so the duplicate-construction
//! race can be demonstrated under test; do not use it outside demonstrations.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use crate::errors::Result;

/// Process-wide counter backing [`Resource`] identity tokens.
static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

fn next_token() -> u64 {
    NEXT_TOKEN.fetch_add(1, Ordering::Relaxed)
}

/// A successfully initialised shared resource.
///
/// Immutable after construction: the identity token and the configuration
/// string are fixed by the call that performed the construction.  The token
/// is unique per construction, which lets tests confirm that exactly one
/// construction happened.
#[derive(Debug)]
pub struct Resource<T> {
    token: u64,
    config: Box<str>,
    value: T,
}

impl<T> Resource<T> {
    fn fresh(config: &str, value: T) -> Self {
        Self {
            token: next_token(),
            config: config.into(),
            value,
        }
    }

    /// The identity token assigned at construction.
    pub fn token(&self) -> u64 {
        self.token
    }

    /// The configuration string captured at construction.
    pub fn config(&self) -> &str {
        &self.config
    }

    /// Borrow the constructed value.
    pub fn get(&self) -> &T {
        &self.value
    }
}

/// Shared, reference-counted view of a [`Resource`].
pub type ResourceHandle<T> = Arc<Resource<T>>;

/// A lazily-initialised, thread-safe shared resource handle.
///
/// At most one [`Resource`] is ever constructed per `SharedResource`, even
/// under unbounded concurrent [`resolve`][Self::resolve] calls.  Resolution
/// uses double-checked gating: a read-locked fast path for the
/// already-published case, then a write-locked re-check around the single
/// construction.  Releasing the write lock publishes the handle with a
/// happens-before edge, so no caller can observe a partially-constructed
/// value.
///
/// A failed construction leaves the slot empty; the triggering caller gets
/// the error and a later `resolve` retries.
pub struct SharedResource<T> {
    slot: RwLock<Option<ResourceHandle<T>>>,
}

impl<T> SharedResource<T> {
    /// Create an uninitialised handle.
    ///
    /// `const` so it can back a `static` (see [`define_shared!`]).
    pub const fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// Resolve the shared resource, constructing it on first use.
    ///
    /// `init` runs at most once per published resource, on whichever caller
    /// wins the construction gate; its `config` argument is the string passed
    /// by that caller.  Every other caller receives a clone of the published
    /// handle and its `config` argument is ignored.
    pub fn resolve<F>(&self, config: &str, init: F) -> Result<ResourceHandle<T>>
    where
        F: FnOnce(&str) -> Result<T>,
    {
        // Fast path: already published.
        if let Some(handle) = self
            .slot
            .read()
            .expect("SharedResource lock poisoned")
            .as_ref()
        {
            return Ok(handle.clone());
        }

        // Slow path: acquire the gate and re-check before constructing.
        let mut slot = self.slot.write().expect("SharedResource lock poisoned");
        if let Some(handle) = slot.as_ref() {
            return Ok(handle.clone());
        }
        let value = init(config)?;
        let handle = Arc::new(Resource::fresh(config, value));
        *slot = Some(handle.clone());
        Ok(handle)
    }

    /// Peek at the published handle without constructing.
    pub fn get(&self) -> Option<ResourceHandle<T>> {
        self.slot
            .read()
            .expect("SharedResource lock poisoned")
            .clone()
    }

    /// Return `true` if the resource has been constructed and published.
    pub fn is_initialized(&self) -> bool {
        self.slot
            .read()
            .expect("SharedResource lock poisoned")
            .is_some()
    }

    /// Clear the slot so the next [`resolve`][Self::resolve] constructs anew.
    ///
    /// Test support: lets a suite run several lifecycles against one handle.
    /// Handles already resolved keep the old resource alive.
    pub fn reset(&self) {
        *self.slot.write().expect("SharedResource lock poisoned") = None;
    }
}

impl<T> Default for SharedResource<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The unsynchronised check-then-create anti-pattern.
///
/// The empty check and the store happen under *separate* lock acquisitions,
/// so every caller that observes the empty slot while a construction is in
/// flight constructs its own instance.  The last store wins, and racing
/// callers can walk away holding resources with distinct identity tokens.
///
/// Kept only so tests can demonstrate the race that [`SharedResource`]
/// eliminates.  Do not use in production code paths.
pub struct RacyResource<T> {
    slot: Mutex<Option<ResourceHandle<T>>>,
}

impl<T> RacyResource<T> {
    /// Create an uninitialised handle.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Resolve the resource with no gate held across construction.
    ///
    /// Concurrent callers can race past the empty check and each construct
    /// an instance.
    pub fn resolve<F>(&self, config: &str, init: F) -> Result<ResourceHandle<T>>
    where
        F: FnOnce(&str) -> Result<T>,
    {
        if let Some(handle) = self
            .slot
            .lock()
            .expect("RacyResource mutex poisoned")
            .as_ref()
        {
            return Ok(handle.clone());
        }
        // The lock is released here: every caller that saw the empty slot
        // reaches this point and constructs.
        let value = init(config)?;
        let handle = Arc::new(Resource::fresh(config, value));
        let mut slot = self.slot.lock().expect("RacyResource mutex poisoned");
        *slot = Some(handle.clone());
        Ok(handle)
    }
}

impl<T> Default for RacyResource<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Declare a `static` [`SharedResource`] for process-wide use.
///
/// # Example
/// ```
/// use rl_core::define_shared;
///
/// struct Gateway { endpoint: String }
/// define_shared!(GATEWAY, Gateway);
///
/// let handle = GATEWAY
///     .resolve("https://pay.example", |cfg| Ok(Gateway { endpoint: cfg.into() }))
///     .unwrap();
/// assert_eq!(handle.config(), "https://pay.example");
/// assert_eq!(handle.get().endpoint, "https://pay.example");
/// ```
#[macro_export]
macro_rules! define_shared {
    ($name:ident, $ty:ty) => {
        /// Lazily-initialised process-wide shared resource.
        pub static $name: $crate::resource::SharedResource<$ty> =
            $crate::resource::SharedResource::new();
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[derive(Debug)]
    struct Conn {
        dsn: String,
    }

    fn connect(cfg: &str) -> Result<Conn> {
        Ok(Conn { dsn: cfg.into() })
    }

    #[test]
    fn first_config_wins() {
        let shared = SharedResource::new();
        let a = shared.resolve("server=a", connect).unwrap();
        let b = shared.resolve("server=b", connect).unwrap();

        assert_eq!(a.token(), b.token());
        assert_eq!(b.config(), "server=a");
        assert_eq!(b.get().dsn, "server=a");
    }

    #[test]
    fn tokens_are_unique_per_construction() {
        let first = SharedResource::new();
        let second = SharedResource::new();
        let a = first.resolve("x", connect).unwrap();
        let b = second.resolve("x", connect).unwrap();
        assert_ne!(a.token(), b.token());
    }

    #[test]
    fn failed_construction_is_retryable() {
        let shared: SharedResource<Conn> = SharedResource::new();

        let err = shared
            .resolve("bad", |cfg| {
                Err(Error::Construction(format!("cannot reach {cfg}")))
            })
            .unwrap_err();
        assert_eq!(err, Error::Construction("cannot reach bad".into()));
        assert!(!shared.is_initialized());

        let ok = shared.resolve("good", connect).unwrap();
        assert_eq!(ok.config(), "good");
    }

    #[test]
    fn peek_does_not_construct() {
        let shared: SharedResource<Conn> = SharedResource::new();
        assert!(shared.get().is_none());
        shared.resolve("x", connect).unwrap();
        assert_eq!(shared.get().unwrap().config(), "x");
    }

    #[test]
    fn reset_allows_a_fresh_lifecycle() {
        let shared = SharedResource::new();
        let first = shared.resolve("one", connect).unwrap();
        shared.reset();
        let second = shared.resolve("two", connect).unwrap();

        assert_ne!(first.token(), second.token());
        assert_eq!(second.config(), "two");
        // The old handle stays alive for anyone still holding it.
        assert_eq!(first.config(), "one");
    }
}
