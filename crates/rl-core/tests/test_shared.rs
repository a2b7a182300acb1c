//! Concurrency suite for the shared-resource handles.
//!
//! Exercises the single-construction guarantee of `SharedResource` under
//! contention and demonstrates the duplicate-construction race of the
//! `RacyResource` anti-pattern under the same harness.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Barrier;
use std::thread;
use std::time::Duration;

use rl_core::errors::Result;
use rl_core::{define_shared, RacyResource, SharedResource};

const RESOLVERS: usize = 8;

struct Conn {
    dsn: String,
}

define_shared!(GATEWAY, Conn);

/// Run `resolvers` threads against `resolve`, all released by one barrier,
/// and collect the identity token each thread observed.
fn contend<F>(resolvers: usize, resolve: F) -> Vec<u64>
where
    F: Fn() -> u64 + Sync,
{
    let barrier = Barrier::new(resolvers);
    thread::scope(|s| {
        let handles: Vec<_> = (0..resolvers)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    resolve()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    })
}

#[test]
fn single_construction_under_contention() {
    let shared: SharedResource<Conn> = SharedResource::new();
    let constructions = AtomicUsize::new(0);

    let tokens = contend(RESOLVERS, || {
        let handle = shared
            .resolve("server=primary", |cfg| {
                constructions.fetch_add(1, Ordering::SeqCst);
                // Widen the window in which a broken gate would let a
                // second construction through.
                thread::sleep(Duration::from_millis(25));
                Ok(Conn { dsn: cfg.into() })
            })
            .unwrap();
        handle.token()
    });

    assert_eq!(constructions.load(Ordering::SeqCst), 1);
    let distinct: HashSet<u64> = tokens.iter().copied().collect();
    assert_eq!(distinct.len(), 1, "all resolvers must see one identity");
    assert_eq!(shared.get().unwrap().config(), "server=primary");
}

#[test]
fn racy_variant_can_construct_more_than_once() {
    let racy: RacyResource<Conn> = RacyResource::new();

    let tokens = contend(RESOLVERS, || {
        let handle = racy
            .resolve("server=primary", |cfg| {
                // Every thread that saw the empty slot is now inside
                // construction at the same time.
                thread::sleep(Duration::from_millis(25));
                Ok(Conn { dsn: cfg.into() })
            })
            .unwrap();
        handle.token()
    });

    let distinct: HashSet<u64> = tokens.iter().copied().collect();
    assert!(
        distinct.len() >= 2,
        "expected the unsynchronised variant to duplicate construction, \
         got {} distinct identities",
        distinct.len()
    );
}

#[test]
fn construction_failure_surfaces_and_gate_resets() {
    let shared: SharedResource<Conn> = SharedResource::new();
    let attempts = AtomicUsize::new(0);

    let resolve = |shared: &SharedResource<Conn>| -> Result<u64> {
        let handle = shared.resolve("server=flaky", |cfg| {
            if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                rl_core::fail!("connection refused by {cfg}");
            }
            Ok(Conn { dsn: cfg.into() })
        })?;
        Ok(handle.token())
    };

    assert!(resolve(&shared).is_err());
    let token = resolve(&shared).unwrap();
    assert_eq!(attempts.load(Ordering::SeqCst), 2);

    // The published handle is now stable.
    assert_eq!(shared.get().unwrap().token(), token);
}

#[test]
fn static_shared_resource_across_threads() {
    let tokens = contend(RESOLVERS, || {
        let handle = GATEWAY
            .resolve("amqp://broker.local", |cfg| Ok(Conn { dsn: cfg.into() }))
            .unwrap();
        handle.token()
    });

    let distinct: HashSet<u64> = tokens.iter().copied().collect();
    assert_eq!(distinct.len(), 1);
    assert_eq!(GATEWAY.get().unwrap().get().dsn, "amqp://broker.local");
}
