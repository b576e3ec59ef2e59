use crate::{AudioInput, SpeechConfig, SpxError, SpxResult, credentials, handle::SafeHandle, interop};

use std::{fmt, panic::Location, ptr, sync::Arc};

use error_location::ErrorLocation;
use spx_engine::{Credential, EngineApi, properties};
use tracing::{info, instrument};

/// Speech recognizer derived from a [`SpeechConfig`] and an [`AudioInput`].
///
/// Creation reads the dependencies' handles without taking ownership: the
/// engine seeds the recognizer's own property bag from the config's, and no
/// back-reference to either dependency is kept. Disposing the recognizer
/// never disposes the config or audio input.
///
/// The reverse order is the caller's responsibility: the config and audio
/// input must outlive the recognizer's native use of them. Disposing a
/// dependency while a recognizer built from it is still in use is undefined
/// behavior in the native layer and is not detected here.
pub struct SpeechRecognizer {
    engine: Arc<dyn EngineApi>,
    handle: SafeHandle,
}

impl SpeechRecognizer {
    /// Creates a recognizer from a config and an audio input.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the two wrappers were built against
    /// different engines, `UseAfterDispose` if either is already disposed,
    /// or `NativeCreation` if the engine rejects the creation.
    #[track_caller]
    #[instrument(skip_all)]
    pub fn from_config(config: &SpeechConfig, audio: &AudioInput) -> SpxResult<Self> {
        if !ptr::addr_eq(Arc::as_ptr(config.engine()), Arc::as_ptr(audio.engine())) {
            return Err(SpxError::InvalidArgument {
                reason: "config and audio input belong to different engines".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let engine = Arc::clone(config.engine());

        // Scoped reads of the dependency handles, live only for the duration
        // of the native creation call.
        let created = config
            .handle()
            .with(|cfg| audio.handle().with(|aud| engine.recognizer_from_config(cfg, aud)))??;
        let handle = interop::wrap_created(&engine, created)?;

        info!("Speech recognizer created");

        Ok(SpeechRecognizer { engine, handle })
    }

    /// The subscription key inherited from the config, empty if none.
    ///
    /// # Errors
    ///
    /// Returns an error if the recognizer is disposed or the native read
    /// fails.
    #[track_caller]
    pub fn subscription_key(&self) -> SpxResult<String> {
        interop::read_property(self.engine.as_ref(), &self.handle, properties::SUBSCRIPTION_KEY)
    }

    /// The recognizer's current authorization token, empty if none.
    ///
    /// # Errors
    ///
    /// Returns an error if the recognizer is disposed or the native read
    /// fails.
    #[track_caller]
    pub fn authorization_token(&self) -> SpxResult<String> {
        interop::read_property(self.engine.as_ref(), &self.handle, properties::AUTHORIZATION_TOKEN)
    }

    /// Replaces the recognizer's authorization token, e.g. on token refresh.
    /// Does not touch the inherited subscription key, which keeps precedence
    /// at session start.
    ///
    /// # Errors
    ///
    /// Returns an error if the recognizer is disposed or the native write
    /// fails.
    #[track_caller]
    pub fn set_authorization_token(&self, token: &str) -> SpxResult<()> {
        interop::write_property(
            self.engine.as_ref(),
            &self.handle,
            properties::AUTHORIZATION_TOKEN,
            token,
        )
    }

    /// The credential a session started right now would authenticate with.
    /// Evaluated against the recognizer's own property bag, so token swaps
    /// after construction are observed.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredential` if neither credential is set, or an error
    /// if the recognizer is disposed.
    #[track_caller]
    pub fn resolved_credential(&self) -> SpxResult<Credential> {
        let key = self.subscription_key()?;
        let token = self.authorization_token()?;
        credentials::resolve(&key, &token)
    }

    /// Starts a recognition session, authenticating with the credential the
    /// precedence rule picks at this moment. Returns that credential.
    ///
    /// The rule runs on every call; nothing is cached between sessions.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredential` if no usable credential is set,
    /// `UseAfterDispose` if the recognizer is disposed, or `SessionStart` if
    /// the engine rejects the session.
    #[track_caller]
    #[instrument(skip_all)]
    pub fn start_session(&self) -> SpxResult<Credential> {
        let credential = self.resolved_credential()?;

        let status = self
            .handle
            .with(|raw| self.engine.session_start(raw, &credential))?;
        if !status.is_ok() {
            return Err(SpxError::SessionStart {
                status,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        info!(credential_kind = credential.kind(), "Session started");

        Ok(credential)
    }

    /// Releases the native handle. Idempotent and safe to call concurrently;
    /// exactly one native release happens across all dispose calls and drop.
    pub fn dispose(&self) {
        self.handle.release();
    }

    pub(crate) fn handle(&self) -> &SafeHandle {
        &self.handle
    }
}

impl fmt::Debug for SpeechRecognizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechRecognizer")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}
