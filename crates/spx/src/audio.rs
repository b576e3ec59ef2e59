use crate::{SpxResult, handle::SafeHandle, interop};

use std::{fmt, sync::Arc};

use spx_engine::{EngineApi, properties};
use tracing::{info, instrument};

/// Audio input a recognizer reads from: a wav file or the default microphone.
///
/// One `AudioInput` may back several recognizers. A recognizer never takes
/// ownership of the input; disposing the recognizer leaves the input alive,
/// and the input must outlive every recognizer built from it.
pub struct AudioInput {
    engine: Arc<dyn EngineApi>,
    handle: SafeHandle,
}

impl AudioInput {
    /// Creates an audio input reading the given wav file.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty (no native call is made) or if
    /// the engine rejects the creation.
    #[track_caller]
    #[instrument(skip_all, fields(path = %path))]
    pub fn from_wav_file(engine: Arc<dyn EngineApi>, path: &str) -> SpxResult<Self> {
        interop::require_non_empty(path, "wav file path")?;

        let created = engine.audio_from_wav_file(path);
        let handle = interop::wrap_created(&engine, created)?;

        info!(path, "Audio input created from wav file");

        Ok(AudioInput { engine, handle })
    }

    /// Creates an audio input capturing the default microphone.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the creation.
    #[track_caller]
    #[instrument(skip_all)]
    pub fn from_default_microphone(engine: Arc<dyn EngineApi>) -> SpxResult<Self> {
        let created = engine.audio_from_default_microphone();
        let handle = interop::wrap_created(&engine, created)?;

        info!("Audio input created from default microphone");

        Ok(AudioInput { engine, handle })
    }

    /// Path of the backing wav file, empty for microphone inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is disposed or the native read fails.
    #[track_caller]
    pub fn file_path(&self) -> SpxResult<String> {
        interop::read_property(self.engine.as_ref(), &self.handle, properties::AUDIO_FILE_PATH)
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

impl fmt::Debug for AudioInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioInput")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}
