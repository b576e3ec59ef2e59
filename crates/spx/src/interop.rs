//! Shared plumbing between the concrete wrappers and the engine: argument
//! validation, creation-status translation, and property-bag access.

use crate::{SafeHandle, SpxError, SpxResult};

use std::{panic::Location, sync::Arc};

use error_location::ErrorLocation;
use spx_engine::{EngineApi, NativeStatus, RawHandle};

/// Rejects empty caller input before any native call is made.
#[track_caller]
pub(crate) fn require_non_empty(value: &str, what: &str) -> SpxResult<()> {
    if value.is_empty() {
        return Err(SpxError::InvalidArgument {
            reason: format!("{what} must not be empty"),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

/// Translates a creation entry point's result into an owned [`SafeHandle`].
///
/// On success the raw handle is wrapped immediately, before any other code
/// can observe it; deferring the wrap would leak the native resource if a
/// failure hit in between. On non-success status no resource exists and
/// [`SpxError::NativeCreation`] is returned.
#[track_caller]
pub(crate) fn wrap_created(
    engine: &Arc<dyn EngineApi>,
    (status, raw): (NativeStatus, RawHandle),
) -> SpxResult<SafeHandle> {
    if !status.is_ok() {
        return Err(SpxError::NativeCreation {
            status,
            message: status.message().to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let release_engine = Arc::clone(engine);
    SafeHandle::acquire(raw, move |handle| release_engine.handle_release(handle))
}

/// Reads one property through the handle's scoped access.
#[track_caller]
pub(crate) fn read_property(
    engine: &dyn EngineApi,
    handle: &SafeHandle,
    key: &str,
) -> SpxResult<String> {
    let (status, value) = handle.with(|raw| engine.get_property(raw, key))?;
    if !status.is_ok() {
        return Err(SpxError::PropertyRead {
            key: key.to_string(),
            status,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(value)
}

/// Writes one property through the handle's scoped access.
#[track_caller]
pub(crate) fn write_property(
    engine: &dyn EngineApi,
    handle: &SafeHandle,
    key: &str,
    value: &str,
) -> SpxResult<()> {
    let status = handle.with(|raw| engine.set_property(raw, key, value))?;
    if !status.is_ok() {
        return Err(SpxError::PropertyWrite {
            key: key.to_string(),
            status,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
