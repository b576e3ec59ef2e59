use std::fmt;

/// Opaque, process-unique identifier for a native engine resource.
///
/// A `RawHandle` is just a token: it owns nothing and has no behavior. The
/// engine hands one out on successful creation and expects it back, exactly
/// once, at `handle_release`. A released value is permanently invalid; passing
/// it to the engine again is undefined behavior in the native layer. The safe
/// layer (`spx::SafeHandle`) exists to make that impossible.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RawHandle(u64);

impl RawHandle {
    /// The designated empty/null sentinel. Never a valid resource.
    pub const NULL: RawHandle = RawHandle(0);

    /// Wraps a raw engine-issued value.
    pub const fn from_raw(value: u64) -> Self {
        RawHandle(value)
    }

    /// Whether this is the null sentinel.
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// The underlying numeric value. For engine implementations keying their
    /// resource tables; wrapper code never stores this separately.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RawHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}
