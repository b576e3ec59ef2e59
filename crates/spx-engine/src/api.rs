use crate::{NativeStatus, RawHandle};

/// The credential a recognition session authenticates with, chosen by the
/// binding layer's precedence rule at session start.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Credential {
    /// Subscription key. Wins whenever non-empty.
    SubscriptionKey(String),
    /// Bearer authorization token. Used only when no subscription key is set.
    AuthorizationToken(String),
}

impl Credential {
    /// The credential value itself.
    pub fn value(&self) -> &str {
        match self {
            Credential::SubscriptionKey(v) | Credential::AuthorizationToken(v) => v,
        }
    }

    /// Stable name for the credential kind, as recorded in engine diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Credential::SubscriptionKey(_) => "subscription-key",
            Credential::AuthorizationToken(_) => "authorization-token",
        }
    }
}

/// The fixed set of native entry points the binding layer is a shim over.
///
/// Creation entry points return `(status, handle)`; on non-success status the
/// handle is [`RawHandle::NULL`] and nothing was allocated. `handle_release`
/// is NOT assumed idempotent: callers must guarantee it runs exactly once per
/// issued handle, which is what `spx::SafeHandle` enforces.
///
/// All methods may block (I/O, network, or device access); implementations
/// must be callable from any thread.
pub trait EngineApi: Send + Sync {
    /// Creates a speech config resource from a subscription key and region.
    fn config_from_subscription(
        &self,
        subscription_key: &str,
        region: &str,
    ) -> (NativeStatus, RawHandle);

    /// Creates a speech config resource from an authorization token and region.
    fn config_from_authorization_token(
        &self,
        authorization_token: &str,
        region: &str,
    ) -> (NativeStatus, RawHandle);

    /// Creates a speech config resource from an explicit endpoint URL. The
    /// subscription key may be empty when the caller will supply a token later.
    fn config_from_endpoint(
        &self,
        endpoint: &str,
        subscription_key: &str,
    ) -> (NativeStatus, RawHandle);

    /// Creates an audio input resource reading from a wav file.
    fn audio_from_wav_file(&self, path: &str) -> (NativeStatus, RawHandle);

    /// Creates an audio input resource capturing the default microphone.
    fn audio_from_default_microphone(&self) -> (NativeStatus, RawHandle);

    /// Creates a keyword recognition model resource from a model file.
    fn keyword_model_from_file(&self, path: &str) -> (NativeStatus, RawHandle);

    /// Creates a recognizer resource derived from a config and an audio input.
    /// The recognizer's property bag is seeded with a copy of the config's;
    /// the config and audio handles are read, not consumed.
    fn recognizer_from_config(
        &self,
        config: RawHandle,
        audio: RawHandle,
    ) -> (NativeStatus, RawHandle);

    /// Frees the resource behind `handle`. Exactly-once is the caller's
    /// responsibility; releasing an unknown or already-released handle is an
    /// error the engine may or may not detect.
    fn handle_release(&self, handle: RawHandle) -> NativeStatus;

    /// Reads one property from the resource's bag. An unset key reads back as
    /// an empty string with success status.
    fn get_property(&self, handle: RawHandle, key: &str) -> (NativeStatus, String);

    /// Writes one property into the resource's bag.
    fn set_property(&self, handle: RawHandle, key: &str, value: &str) -> NativeStatus;

    /// Starts a recognition session on a recognizer, authenticating with the
    /// supplied credential.
    fn session_start(&self, recognizer: RawHandle, credential: &Credential) -> NativeStatus;
}
