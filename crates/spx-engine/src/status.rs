use std::fmt;

/// Discriminated success/failure code returned by every engine entry point.
///
/// Zero is success; any other value is an engine-defined numeric failure code.
/// [`NativeStatus::message`] translates the codes this crate knows about into
/// human-readable text.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NativeStatus(u32);

impl NativeStatus {
    /// The operation succeeded.
    pub const OK: NativeStatus = NativeStatus(0x000);

    /// A named resource (file, model, device) was not found.
    pub const NOT_FOUND: NativeStatus = NativeStatus(0x004);

    /// An argument was rejected by the engine.
    pub const INVALID_ARG: NativeStatus = NativeStatus(0x005);

    /// The handle does not name a live resource (never issued, or released).
    pub const INVALID_HANDLE: NativeStatus = NativeStatus(0x021);

    /// Wraps an engine-defined numeric code.
    pub const fn new(code: u32) -> Self {
        NativeStatus(code)
    }

    /// Whether this status reports success.
    pub const fn is_ok(self) -> bool {
        self.0 == 0
    }

    /// The raw numeric code.
    pub const fn code(self) -> u32 {
        self.0
    }

    /// Human-readable text for this code.
    pub const fn message(self) -> &'static str {
        match self.0 {
            0x000 => "no error",
            0x004 => "resource not found",
            0x005 => "invalid argument",
            0x021 => "invalid handle",
            _ => "unrecognized engine error",
        }
    }
}

impl fmt::Display for NativeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:03x} ({})", self.0, self.message())
    }
}
