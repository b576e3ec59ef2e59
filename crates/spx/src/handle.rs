use crate::{SpxError, SpxResult};

use std::{
    fmt,
    panic::Location,
    sync::atomic::{AtomicBool, Ordering},
};

use error_location::ErrorLocation;
use spx_engine::{NativeStatus, RawHandle};
use tracing::{debug, warn};

/// Owner of exactly one native handle, paired with the release function that
/// frees it.
///
/// A `SafeHandle` closes the dispose/finalize race: explicit [`release`] and
/// [`Drop`] converge on a single atomic compare-exchange of the disposed flag,
/// so the native release function runs exactly once no matter which trigger
/// fires first or how many threads race it. The raw handle value is not
/// reachable outside this type; [`with`] grants scoped access only while the
/// handle is live.
///
/// No two `SafeHandle` instances may wrap the same raw value.
///
/// [`release`]: SafeHandle::release
/// [`with`]: SafeHandle::with
pub struct SafeHandle {
    raw: RawHandle,
    release: Box<dyn Fn(RawHandle) -> NativeStatus + Send + Sync>,
    disposed: AtomicBool,
}

impl SafeHandle {
    /// Takes ownership of a freshly created native handle.
    ///
    /// `release` is the specific native entry point that frees this handle;
    /// it will be invoked exactly once, by whichever of explicit release or
    /// drop happens first.
    ///
    /// # Errors
    ///
    /// Returns [`SpxError::InvalidHandle`] if `raw` is the null sentinel.
    #[track_caller]
    pub fn acquire(
        raw: RawHandle,
        release: impl Fn(RawHandle) -> NativeStatus + Send + Sync + 'static,
    ) -> SpxResult<Self> {
        if raw.is_null() {
            return Err(SpxError::InvalidHandle {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(SafeHandle {
            raw,
            release: Box::new(release),
            disposed: AtomicBool::new(false),
        })
    }

    /// Runs `f` with the underlying raw handle. The only sanctioned way to
    /// reach the value; callers must not store it beyond the closure.
    ///
    /// Safe from multiple threads as long as no disposal is in flight; a
    /// disposal racing a `with` on another thread is a caller-order error
    /// this layer does not detect.
    ///
    /// # Errors
    ///
    /// Returns [`SpxError::UseAfterDispose`] once the handle is disposed.
    #[track_caller]
    pub fn with<R>(&self, f: impl FnOnce(RawHandle) -> R) -> SpxResult<R> {
        if self.disposed.load(Ordering::Acquire) {
            return Err(SpxError::UseAfterDispose {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(f(self.raw))
    }

    /// Releases the native handle. Idempotent: the first caller wins the
    /// compare-exchange and invokes the release function, every later caller
    /// (including drop) no-ops.
    ///
    /// Never fails. A non-success status from the release function is logged
    /// and swallowed; this must stay safe to call from automatic cleanup.
    pub fn release(&self) {
        // Plain read-then-write would let two threads both observe "not yet
        // disposed" and double-free the native resource.
        if self
            .disposed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return;
        }

        let status = (self.release)(self.raw);
        if status.is_ok() {
            debug!(handle = %self.raw, "Native handle released");
        } else {
            warn!(handle = %self.raw, %status, "Native release reported failure");
        }
    }

    /// Whether the handle has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }
}

impl Drop for SafeHandle {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for SafeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SafeHandle")
            .field("raw", &self.raw)
            .field("disposed", &self.is_disposed())
            .finish_non_exhaustive()
    }
}
