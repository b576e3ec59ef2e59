use crate::{AudioInput, SpxError, tests::support::CountingEngine};

use std::sync::Arc;

use spx_engine::EngineApi;

/// WHAT: Empty wav path is rejected before any native call
/// WHY: Argument validation happens before touching the engine
#[test]
fn given_empty_path_when_creating_wav_input_then_invalid_argument_and_no_native_calls() {
    let engine = CountingEngine::new();

    let result = AudioInput::from_wav_file(Arc::clone(&engine) as Arc<dyn EngineApi>, "");

    assert!(matches!(result, Err(SpxError::InvalidArgument { .. })));
    assert_eq!(engine.total_calls(), 0);
}

/// WHAT: A wav input remembers its backing file path
/// WHY: The path is creation state, readable back through the bag
#[test]
fn given_wav_input_when_reading_file_path_then_creation_path_returned() {
    let engine = CountingEngine::new();
    let audio =
        AudioInput::from_wav_file(Arc::clone(&engine) as Arc<dyn EngineApi>, "weather.wav").unwrap();

    assert_eq!(audio.file_path().unwrap(), "weather.wav");
}

/// WHAT: A microphone input creates and disposes with exactly one release
/// WHY: The lifecycle protocol holds for every wrapper kind
#[test]
fn given_microphone_input_when_disposing_then_one_native_release() {
    let engine = CountingEngine::new();
    let audio = AudioInput::from_default_microphone(Arc::clone(&engine) as Arc<dyn EngineApi>).unwrap();

    audio.dispose();
    audio.dispose();
    drop(audio);

    assert_eq!(engine.releases(), 1);
}
