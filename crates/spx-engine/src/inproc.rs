use crate::{Credential, EngineApi, NativeStatus, RawHandle, properties};

use std::{
    collections::HashMap,
    sync::{
        Mutex, MutexGuard,
        atomic::{AtomicU64, Ordering},
    },
};

use tracing::{debug, error, info};

/// Diagnostic property recording the kind of credential the last session on a
/// recognizer authenticated with.
pub const SESSION_CREDENTIAL_KIND: &str = "InProcEngine_SessionCredentialKind";

/// Diagnostic property recording the value of that credential.
pub const SESSION_CREDENTIAL_VALUE: &str = "InProcEngine_SessionCredentialValue";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ResourceKind {
    Config,
    AudioInput,
    KeywordModel,
    Recognizer,
}

struct Resource {
    kind: ResourceKind,
    bag: HashMap<String, String>,
}

/// In-process reference implementation of [`EngineApi`].
///
/// Backs every handle with an entry in a real resource table, so lifecycle
/// bugs show up as hard status errors instead of silent corruption: releasing
/// a handle twice, or touching a released handle, returns
/// [`NativeStatus::INVALID_HANDLE`] because the table entry is gone.
///
/// Handles are allocated from a monotonic counter starting at 1, so no issued
/// handle ever equals [`RawHandle::NULL`] and no value is ever reissued.
pub struct InProcEngine {
    next_handle: AtomicU64,
    table: Mutex<HashMap<u64, Resource>>,
}

impl InProcEngine {
    /// Creates an engine with an empty resource table.
    pub fn new() -> Self {
        info!("In-process engine initialized");
        InProcEngine {
            next_handle: AtomicU64::new(1),
            table: Mutex::new(HashMap::new()),
        }
    }

    /// Number of live (created and not yet released) resources.
    pub fn live_resources(&self) -> usize {
        self.lock_table().len()
    }

    fn lock_table(&self) -> MutexGuard<'_, HashMap<u64, Resource>> {
        // Recover from lock poison; the table data is still valid and usable.
        self.table.lock().unwrap_or_else(|e| {
            error!("Resource table lock poisoned, recovering: {}", e);
            e.into_inner()
        })
    }

    fn insert(&self, kind: ResourceKind, bag: HashMap<String, String>) -> (NativeStatus, RawHandle) {
        let value = self.next_handle.fetch_add(1, Ordering::Relaxed);
        self.lock_table().insert(value, Resource { kind, bag });

        debug!(handle = value, kind = ?kind, "Resource created");

        (NativeStatus::OK, RawHandle::from_raw(value))
    }
}

impl Default for InProcEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineApi for InProcEngine {
    fn config_from_subscription(
        &self,
        subscription_key: &str,
        region: &str,
    ) -> (NativeStatus, RawHandle) {
        let bag = HashMap::from([
            (properties::SUBSCRIPTION_KEY.to_string(), subscription_key.to_string()),
            (properties::REGION.to_string(), region.to_string()),
        ]);
        self.insert(ResourceKind::Config, bag)
    }

    fn config_from_authorization_token(
        &self,
        authorization_token: &str,
        region: &str,
    ) -> (NativeStatus, RawHandle) {
        let bag = HashMap::from([
            (
                properties::AUTHORIZATION_TOKEN.to_string(),
                authorization_token.to_string(),
            ),
            (properties::REGION.to_string(), region.to_string()),
        ]);
        self.insert(ResourceKind::Config, bag)
    }

    fn config_from_endpoint(
        &self,
        endpoint: &str,
        subscription_key: &str,
    ) -> (NativeStatus, RawHandle) {
        let bag = HashMap::from([
            (properties::ENDPOINT.to_string(), endpoint.to_string()),
            (properties::SUBSCRIPTION_KEY.to_string(), subscription_key.to_string()),
        ]);
        self.insert(ResourceKind::Config, bag)
    }

    fn audio_from_wav_file(&self, path: &str) -> (NativeStatus, RawHandle) {
        let bag = HashMap::from([(properties::AUDIO_FILE_PATH.to_string(), path.to_string())]);
        self.insert(ResourceKind::AudioInput, bag)
    }

    fn audio_from_default_microphone(&self) -> (NativeStatus, RawHandle) {
        self.insert(ResourceKind::AudioInput, HashMap::new())
    }

    fn keyword_model_from_file(&self, path: &str) -> (NativeStatus, RawHandle) {
        let bag = HashMap::from([(properties::KEYWORD_MODEL_PATH.to_string(), path.to_string())]);
        self.insert(ResourceKind::KeywordModel, bag)
    }

    fn recognizer_from_config(
        &self,
        config: RawHandle,
        audio: RawHandle,
    ) -> (NativeStatus, RawHandle) {
        // Seed the recognizer bag from the config bag while both dependencies
        // are verified live. The dependency handles are read, not consumed.
        let seeded = {
            let table = self.lock_table();

            let Some(config_resource) = table.get(&config.value()) else {
                return (NativeStatus::INVALID_HANDLE, RawHandle::NULL);
            };
            if config_resource.kind != ResourceKind::Config {
                return (NativeStatus::INVALID_ARG, RawHandle::NULL);
            }

            match table.get(&audio.value()) {
                Some(audio_resource) if audio_resource.kind == ResourceKind::AudioInput => {}
                Some(_) => return (NativeStatus::INVALID_ARG, RawHandle::NULL),
                None => return (NativeStatus::INVALID_HANDLE, RawHandle::NULL),
            }

            config_resource.bag.clone()
        };

        self.insert(ResourceKind::Recognizer, seeded)
    }

    fn handle_release(&self, handle: RawHandle) -> NativeStatus {
        match self.lock_table().remove(&handle.value()) {
            Some(resource) => {
                debug!(handle = handle.value(), kind = ?resource.kind, "Resource released");
                NativeStatus::OK
            }
            None => {
                debug!(handle = handle.value(), "Release of unknown handle rejected");
                NativeStatus::INVALID_HANDLE
            }
        }
    }

    fn get_property(&self, handle: RawHandle, key: &str) -> (NativeStatus, String) {
        let table = self.lock_table();
        match table.get(&handle.value()) {
            Some(resource) => {
                let value = resource.bag.get(key).cloned().unwrap_or_default();
                (NativeStatus::OK, value)
            }
            None => (NativeStatus::INVALID_HANDLE, String::new()),
        }
    }

    fn set_property(&self, handle: RawHandle, key: &str, value: &str) -> NativeStatus {
        let mut table = self.lock_table();
        match table.get_mut(&handle.value()) {
            Some(resource) => {
                resource.bag.insert(key.to_string(), value.to_string());
                NativeStatus::OK
            }
            None => NativeStatus::INVALID_HANDLE,
        }
    }

    fn session_start(&self, recognizer: RawHandle, credential: &Credential) -> NativeStatus {
        let mut table = self.lock_table();
        match table.get_mut(&recognizer.value()) {
            Some(resource) if resource.kind == ResourceKind::Recognizer => {
                resource
                    .bag
                    .insert(SESSION_CREDENTIAL_KIND.to_string(), credential.kind().to_string());
                resource
                    .bag
                    .insert(SESSION_CREDENTIAL_VALUE.to_string(), credential.value().to_string());

                info!(
                    handle = recognizer.value(),
                    credential_kind = credential.kind(),
                    "Recognition session started"
                );

                NativeStatus::OK
            }
            Some(_) => NativeStatus::INVALID_ARG,
            None => NativeStatus::INVALID_HANDLE,
        }
    }
}
