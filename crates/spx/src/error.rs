use error_location::ErrorLocation;
use spx_engine::NativeStatus;
use thiserror::Error;

/// Binding-layer errors with source location tracking.
///
/// Construction failures leave no partially-initialized wrapper and no leaked
/// native resource behind. Disposal never surfaces an error at all: release
/// failures are logged, because disposal must be safe from automatic cleanup
/// paths where propagating would be unrecoverable.
#[derive(Error, Debug)]
pub enum SpxError {
    /// Caller input rejected before any native call was made.
    #[error("Invalid argument: {reason} {location}")]
    InvalidArgument {
        /// What was wrong with the input.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A native creation entry point reported failure; no resource is held.
    #[error("Native creation failed: {status}: {message} {location}")]
    NativeCreation {
        /// Engine status code for the failure.
        status: NativeStatus,
        /// Engine-provided human-readable message.
        message: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Attempt to wrap the null/empty handle sentinel.
    #[error("Cannot wrap the null handle sentinel {location}")]
    InvalidHandle {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Operation attempted on an already-disposed wrapper.
    #[error("Handle already disposed {location}")]
    UseAfterDispose {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A native property read reported failure.
    #[error("Failed to read property {key:?}: {status} {location}")]
    PropertyRead {
        /// The property key that was read.
        key: String,
        /// Engine status code for the failure.
        status: NativeStatus,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A native property write reported failure.
    #[error("Failed to write property {key:?}: {status} {location}")]
    PropertyWrite {
        /// The property key that was written.
        key: String,
        /// Engine status code for the failure.
        status: NativeStatus,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Session start with neither a subscription key nor an authorization
    /// token set.
    #[error("No subscription key or authorization token set {location}")]
    MissingCredential {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The native session-start entry point reported failure.
    #[error("Failed to start session: {status} {location}")]
    SessionStart {
        /// Engine status code for the failure.
        status: NativeStatus,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`SpxError`].
pub type SpxResult<T> = std::result::Result<T, SpxError>;
