//! Test engines: a call-counting wrapper around the in-process engine, used
//! to verify exactly-once release and no-native-call-on-bad-input properties.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use spx_engine::{Credential, EngineApi, InProcEngine, NativeStatus, RawHandle};

/// Counts every native call while delegating to an [`InProcEngine`].
///
/// With `fail_creations` set, every creation entry point reports
/// [`NativeStatus::NOT_FOUND`] without allocating, for exercising the
/// creation-failure path.
pub(crate) struct CountingEngine {
    inner: InProcEngine,
    fail_creations: bool,
    creations: AtomicUsize,
    releases: AtomicUsize,
    property_reads: AtomicUsize,
    property_writes: AtomicUsize,
    sessions: AtomicUsize,
}

impl CountingEngine {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(CountingEngine {
            inner: InProcEngine::new(),
            fail_creations: false,
            creations: AtomicUsize::new(0),
            releases: AtomicUsize::new(0),
            property_reads: AtomicUsize::new(0),
            property_writes: AtomicUsize::new(0),
            sessions: AtomicUsize::new(0),
        })
    }

    pub(crate) fn failing() -> Arc<Self> {
        Arc::new(CountingEngine {
            inner: InProcEngine::new(),
            fail_creations: true,
            creations: AtomicUsize::new(0),
            releases: AtomicUsize::new(0),
            property_reads: AtomicUsize::new(0),
            property_writes: AtomicUsize::new(0),
            sessions: AtomicUsize::new(0),
        })
    }

    pub(crate) fn creations(&self) -> usize {
        self.creations.load(Ordering::SeqCst)
    }

    pub(crate) fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.creations()
            + self.releases()
            + self.property_reads.load(Ordering::SeqCst)
            + self.property_writes.load(Ordering::SeqCst)
            + self.sessions.load(Ordering::SeqCst)
    }

    fn created(&self, result: (NativeStatus, RawHandle)) -> (NativeStatus, RawHandle) {
        self.creations.fetch_add(1, Ordering::SeqCst);
        if self.fail_creations {
            return (NativeStatus::NOT_FOUND, RawHandle::NULL);
        }
        result
    }
}

impl EngineApi for CountingEngine {
    fn config_from_subscription(
        &self,
        subscription_key: &str,
        region: &str,
    ) -> (NativeStatus, RawHandle) {
        let result = self.inner.config_from_subscription(subscription_key, region);
        self.created(result)
    }

    fn config_from_authorization_token(
        &self,
        authorization_token: &str,
        region: &str,
    ) -> (NativeStatus, RawHandle) {
        let result = self
            .inner
            .config_from_authorization_token(authorization_token, region);
        self.created(result)
    }

    fn config_from_endpoint(
        &self,
        endpoint: &str,
        subscription_key: &str,
    ) -> (NativeStatus, RawHandle) {
        let result = self.inner.config_from_endpoint(endpoint, subscription_key);
        self.created(result)
    }

    fn audio_from_wav_file(&self, path: &str) -> (NativeStatus, RawHandle) {
        let result = self.inner.audio_from_wav_file(path);
        self.created(result)
    }

    fn audio_from_default_microphone(&self) -> (NativeStatus, RawHandle) {
        let result = self.inner.audio_from_default_microphone();
        self.created(result)
    }

    fn keyword_model_from_file(&self, path: &str) -> (NativeStatus, RawHandle) {
        let result = self.inner.keyword_model_from_file(path);
        self.created(result)
    }

    fn recognizer_from_config(
        &self,
        config: RawHandle,
        audio: RawHandle,
    ) -> (NativeStatus, RawHandle) {
        let result = self.inner.recognizer_from_config(config, audio);
        self.created(result)
    }

    fn handle_release(&self, handle: RawHandle) -> NativeStatus {
        self.releases.fetch_add(1, Ordering::SeqCst);
        self.inner.handle_release(handle)
    }

    fn get_property(&self, handle: RawHandle, key: &str) -> (NativeStatus, String) {
        self.property_reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get_property(handle, key)
    }

    fn set_property(&self, handle: RawHandle, key: &str, value: &str) -> NativeStatus {
        self.property_writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set_property(handle, key, value)
    }

    fn session_start(&self, recognizer: RawHandle, credential: &Credential) -> NativeStatus {
        self.sessions.fetch_add(1, Ordering::SeqCst);
        self.inner.session_start(recognizer, credential)
    }
}
