//! Native engine surface for the spx binding layer.
//!
//! This crate defines the contract between the safe wrappers in `spx` and a
//! native speech-recognition engine: opaque resource handles, engine status
//! codes, the fixed set of entry points ([`EngineApi`]), and the property keys
//! the engine's per-resource property bags are addressed with.
//!
//! It also ships [`InProcEngine`], an in-process reference engine backed by a
//! real resource table. Development and tests run against it; a production
//! engine plugs in by implementing [`EngineApi`] over its FFI entry points.

mod api;
mod handle;
mod inproc;
pub mod properties;
mod status;

pub use {
    api::{Credential, EngineApi},
    handle::RawHandle,
    inproc::{InProcEngine, SESSION_CREDENTIAL_KIND, SESSION_CREDENTIAL_VALUE},
    status::NativeStatus,
};
