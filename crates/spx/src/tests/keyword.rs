use crate::{KeywordModel, SpxError, tests::support::CountingEngine};

use std::sync::Arc;

use spx_engine::EngineApi;

/// WHAT: Empty model path is rejected before any native call
/// WHY: Malformed input must cause zero native side effects
#[test]
fn given_empty_path_when_loading_keyword_model_then_invalid_argument_and_no_native_calls() {
    // Given: A counting engine
    let engine = CountingEngine::new();

    // When: Loading a keyword model from an empty path
    let result = KeywordModel::from_file(Arc::clone(&engine) as Arc<dyn EngineApi>, "");

    // Then: InvalidArgument and zero native calls of any kind
    assert!(matches!(result, Err(SpxError::InvalidArgument { .. })));
    assert_eq!(engine.total_calls(), 0);
}

/// WHAT: A loaded model disposes with exactly one native release
/// WHY: Keyword models follow the same lifecycle protocol as every wrapper
#[test]
fn given_loaded_model_when_disposing_then_one_native_release() {
    let engine = CountingEngine::new();
    let model =
        KeywordModel::from_file(Arc::clone(&engine) as Arc<dyn EngineApi>, "keyword.table").unwrap();

    assert_eq!(model.file_path().unwrap(), "keyword.table");

    model.dispose();
    model.dispose();
    drop(model);

    assert_eq!(engine.releases(), 1);
}
