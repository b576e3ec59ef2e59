use crate::{SafeHandle, SpxError};

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use spx_engine::{NativeStatus, RawHandle};

fn counted_handle(value: u64) -> (SafeHandle, Arc<AtomicUsize>) {
    let releases = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&releases);
    let handle = SafeHandle::acquire(RawHandle::from_raw(value), move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        NativeStatus::OK
    })
    .unwrap();
    (handle, releases)
}

/// WHAT: The null sentinel cannot be wrapped
/// WHY: A SafeHandle must always own a valid native resource
#[test]
fn given_null_sentinel_when_acquiring_then_invalid_handle_error() {
    // Given/When: Acquiring over the null sentinel
    let result = SafeHandle::acquire(RawHandle::NULL, |_| NativeStatus::OK);

    // Then: Acquisition is refused
    assert!(matches!(result, Err(SpxError::InvalidHandle { .. })));
}

/// WHAT: Scoped access sees the wrapped raw value while live
/// WHY: `with` is the only sanctioned path to the native value
#[test]
fn given_live_handle_when_accessing_then_raw_value_visible() {
    let (handle, _) = counted_handle(42);

    let value = handle.with(|raw| raw.value()).unwrap();

    assert_eq!(value, 42);
    assert!(!handle.is_disposed());
}

/// WHAT: Access after release fails, and the raw value stays unreachable
/// WHY: A released native value must never be passed back to the engine
#[test]
fn given_released_handle_when_accessing_then_use_after_dispose_error() {
    let (handle, _) = counted_handle(42);
    handle.release();

    let result = handle.with(|raw| raw.value());

    assert!(matches!(result, Err(SpxError::UseAfterDispose { .. })));
    assert!(handle.is_disposed());
}

/// WHAT: Repeated release calls invoke the release function once
/// WHY: The native release entry point is not idempotent
#[test]
fn given_handle_when_releasing_three_times_then_one_native_release() {
    let (handle, releases) = counted_handle(1);

    handle.release();
    handle.release();
    handle.release();

    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

/// WHAT: Dropping an unreleased handle releases it
/// WHY: Drop is the finalizer path; forgetting to dispose must not leak
#[test]
fn given_handle_when_dropped_without_release_then_one_native_release() {
    let (handle, releases) = counted_handle(1);

    drop(handle);

    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

/// WHAT: Explicit release followed by drop still releases once
/// WHY: The dispose/finalize duality must converge on one native call
#[test]
fn given_released_handle_when_dropped_then_still_one_native_release() {
    let (handle, releases) = counted_handle(1);

    handle.release();
    drop(handle);

    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

/// WHAT: Racing release calls from many threads yield one native release
/// WHY: A read-then-write disposed flag would double-free under this race
#[test]
fn given_handle_when_releasing_from_many_threads_then_one_native_release() {
    let (handle, releases) = counted_handle(1);

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| handle.release());
        }
    });

    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

/// WHAT: A failing native release is swallowed, not propagated
/// WHY: Release must stay safe from automatic cleanup paths
#[test]
fn given_failing_release_fn_when_releasing_then_no_panic_and_one_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let handle = SafeHandle::acquire(RawHandle::from_raw(7), move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        NativeStatus::INVALID_HANDLE
    })
    .unwrap();

    handle.release();
    handle.release();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(handle.is_disposed());
}
