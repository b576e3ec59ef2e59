//! Safe binding layer over a native speech-recognition engine.
//!
//! Thin wrapper types (configs, recognizers, keyword models, audio inputs)
//! forward calls to an opaque native handle and manage its lifetime: acquire
//! on successful creation only, scoped access while live, release exactly
//! once no matter how disposal and drop race. The engine itself is an
//! external collaborator behind the [`spx_engine::EngineApi`] entry points.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use spx::{AudioInput, SpeechConfig, SpeechRecognizer, SpxResult};
//! use spx_engine::{EngineApi, InProcEngine};
//!
//! fn main() -> SpxResult<()> {
//!     let engine: Arc<dyn EngineApi> = Arc::new(InProcEngine::new());
//!
//!     let config = SpeechConfig::from_subscription(Arc::clone(&engine), "my-key", "westus")?;
//!     let audio = AudioInput::from_default_microphone(Arc::clone(&engine))?;
//!     let recognizer = SpeechRecognizer::from_config(&config, &audio)?;
//!
//!     let credential = recognizer.start_session()?;
//!     assert_eq!(credential.value(), "my-key");
//!
//!     recognizer.dispose();
//!     audio.dispose();
//!     config.dispose();
//!     Ok(())
//! }
//! ```

mod audio;
mod config;
pub mod credentials;
mod error;
mod handle;
mod interop;
mod keyword;
mod recognizer;

pub use {
    audio::AudioInput,
    config::SpeechConfig,
    error::{SpxError, SpxResult},
    handle::SafeHandle,
    keyword::KeywordModel,
    recognizer::SpeechRecognizer,
    spx_engine::Credential,
};

#[cfg(test)]
mod tests;
