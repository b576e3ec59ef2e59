use crate::{SpxResult, credentials, handle::SafeHandle, interop};

use std::{fmt, sync::Arc};

use spx_engine::{Credential, EngineApi, properties};
use tracing::{info, instrument};

/// Configuration for the speech service: credentials, region or endpoint,
/// and recognition settings.
///
/// Created only through the `from_*` factories; there is no bare constructor.
/// A factory first performs the native creation call, and on failure no
/// config object (and no owned handle) ever exists.
///
/// Subscription key and authorization token are retained independently. Both
/// can be set at any time; which one a session authenticates with is decided
/// at session start by [`resolved_credential`], never when the values are set.
///
/// [`resolved_credential`]: SpeechConfig::resolved_credential
pub struct SpeechConfig {
    engine: Arc<dyn EngineApi>,
    handle: SafeHandle,
}

impl SpeechConfig {
    /// Creates a config from a subscription key and service region.
    ///
    /// # Errors
    ///
    /// Returns an error if either argument is empty (no native call is made)
    /// or if the engine rejects the creation.
    #[track_caller]
    #[instrument(skip_all, fields(region = %region))]
    pub fn from_subscription(
        engine: Arc<dyn EngineApi>,
        subscription_key: &str,
        region: &str,
    ) -> SpxResult<Self> {
        interop::require_non_empty(subscription_key, "subscription key")?;
        interop::require_non_empty(region, "region")?;

        let created = engine.config_from_subscription(subscription_key, region);
        let handle = interop::wrap_created(&engine, created)?;

        info!(region, "Speech config created from subscription");

        Ok(SpeechConfig { engine, handle })
    }

    /// Creates a config from an authorization token and service region.
    ///
    /// The token can be replaced later via [`set_authorization_token`], e.g.
    /// on token refresh.
    ///
    /// # Errors
    ///
    /// Returns an error if either argument is empty (no native call is made)
    /// or if the engine rejects the creation.
    ///
    /// [`set_authorization_token`]: SpeechConfig::set_authorization_token
    #[track_caller]
    #[instrument(skip_all, fields(region = %region))]
    pub fn from_authorization_token(
        engine: Arc<dyn EngineApi>,
        authorization_token: &str,
        region: &str,
    ) -> SpxResult<Self> {
        interop::require_non_empty(authorization_token, "authorization token")?;
        interop::require_non_empty(region, "region")?;

        let created = engine.config_from_authorization_token(authorization_token, region);
        let handle = interop::wrap_created(&engine, created)?;

        info!(region, "Speech config created from authorization token");

        Ok(SpeechConfig { engine, handle })
    }

    /// Creates a config from an explicit endpoint URL.
    ///
    /// The subscription key may be empty here: endpoint scenarios are allowed
    /// to supply an authorization token afterwards instead. Starting a
    /// session before either credential is set fails with
    /// `MissingCredential`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is empty (no native call is made) or
    /// if the engine rejects the creation.
    #[track_caller]
    #[instrument(skip_all, fields(endpoint = %endpoint))]
    pub fn from_endpoint(
        engine: Arc<dyn EngineApi>,
        endpoint: &str,
        subscription_key: &str,
    ) -> SpxResult<Self> {
        interop::require_non_empty(endpoint, "endpoint")?;

        let created = engine.config_from_endpoint(endpoint, subscription_key);
        let handle = interop::wrap_created(&engine, created)?;

        info!(endpoint, "Speech config created from endpoint");

        Ok(SpeechConfig { engine, handle })
    }

    /// The configured subscription key, empty if none was set.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is disposed or the native read fails.
    #[track_caller]
    pub fn subscription_key(&self) -> SpxResult<String> {
        interop::read_property(self.engine.as_ref(), &self.handle, properties::SUBSCRIPTION_KEY)
    }

    /// The configured service region, empty for endpoint-based configs.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is disposed or the native read fails.
    #[track_caller]
    pub fn region(&self) -> SpxResult<String> {
        interop::read_property(self.engine.as_ref(), &self.handle, properties::REGION)
    }

    /// The current authorization token, empty if none was set.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is disposed or the native read fails.
    #[track_caller]
    pub fn authorization_token(&self) -> SpxResult<String> {
        interop::read_property(self.engine.as_ref(), &self.handle, properties::AUTHORIZATION_TOKEN)
    }

    /// Replaces the authorization token. Last write wins; the subscription
    /// key, if any, is untouched and keeps precedence at session start.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is disposed or the native write fails.
    #[track_caller]
    pub fn set_authorization_token(&self, token: &str) -> SpxResult<()> {
        interop::write_property(
            self.engine.as_ref(),
            &self.handle,
            properties::AUTHORIZATION_TOKEN,
            token,
        )
    }

    /// The language recognition runs in, empty if unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is disposed or the native read fails.
    #[track_caller]
    pub fn speech_recognition_language(&self) -> SpxResult<String> {
        interop::read_property(
            self.engine.as_ref(),
            &self.handle,
            properties::RECOGNITION_LANGUAGE,
        )
    }

    /// Sets the language recognition runs in, e.g. `en-US`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is disposed or the native write fails.
    #[track_caller]
    pub fn set_speech_recognition_language(&self, language: &str) -> SpxResult<()> {
        interop::write_property(
            self.engine.as_ref(),
            &self.handle,
            properties::RECOGNITION_LANGUAGE,
            language,
        )
    }

    /// Reads an arbitrary property by key. Unset keys read back empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is disposed or the native read fails.
    #[track_caller]
    pub fn property(&self, key: &str) -> SpxResult<String> {
        interop::read_property(self.engine.as_ref(), &self.handle, key)
    }

    /// Writes an arbitrary property by key.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is disposed or the native write fails.
    #[track_caller]
    pub fn set_property(&self, key: &str, value: &str) -> SpxResult<()> {
        interop::write_property(self.engine.as_ref(), &self.handle, key, value)
    }

    /// The credential a session started right now would authenticate with:
    /// the subscription key if non-empty, else the authorization token.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredential` if neither is set, or an error if the
    /// config is disposed.
    #[track_caller]
    pub fn resolved_credential(&self) -> SpxResult<Credential> {
        let key = self.subscription_key()?;
        let token = self.authorization_token()?;
        credentials::resolve(&key, &token)
    }

    /// Releases the native handle. Idempotent and safe to call concurrently;
    /// exactly one native release happens across all dispose calls and drop.
    pub fn dispose(&self) {
        self.handle.release();
    }

    pub(crate) fn engine(&self) -> &Arc<dyn EngineApi> {
        &self.engine
    }

    pub(crate) fn handle(&self) -> &SafeHandle {
        &self.handle
    }
}

impl fmt::Debug for SpeechConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechConfig")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}
