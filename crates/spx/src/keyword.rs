use crate::{SpxResult, handle::SafeHandle, interop};

use std::{fmt, sync::Arc};

use spx_engine::{EngineApi, properties};
use tracing::{info, instrument};

/// Keyword recognition model loaded from a model file, used to trigger
/// recognition on a spoken keyword.
pub struct KeywordModel {
    engine: Arc<dyn EngineApi>,
    handle: SafeHandle,
}

impl KeywordModel {
    /// Loads a keyword recognition model from the given file.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty (no native call is made) or if
    /// the engine rejects the creation.
    #[track_caller]
    #[instrument(skip_all, fields(path = %path))]
    pub fn from_file(engine: Arc<dyn EngineApi>, path: &str) -> SpxResult<Self> {
        interop::require_non_empty(path, "keyword model path")?;

        let created = engine.keyword_model_from_file(path);
        let handle = interop::wrap_created(&engine, created)?;

        info!(path, "Keyword model loaded");

        Ok(KeywordModel { engine, handle })
    }

    /// Path the model was loaded from.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is disposed or the native read fails.
    #[track_caller]
    pub fn file_path(&self) -> SpxResult<String> {
        interop::read_property(self.engine.as_ref(), &self.handle, properties::KEYWORD_MODEL_PATH)
    }

    /// Releases the native handle. Idempotent and safe to call concurrently;
    /// exactly one native release happens across all dispose calls and drop.
    pub fn dispose(&self) {
        self.handle.release();
    }
}

impl fmt::Debug for KeywordModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeywordModel")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}
