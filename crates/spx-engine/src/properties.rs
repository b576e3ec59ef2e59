//! Keys addressing the engine's per-resource property bags.
//!
//! Every resource the engine creates carries a string-keyed property bag.
//! Creation entry points seed the bag (a recognizer inherits a copy of its
//! config's bag); the binding layer's typed getters and setters read and write
//! it through `get_property`/`set_property`.

/// Subscription key for the speech service.
pub const SUBSCRIPTION_KEY: &str = "SpeechServiceConnection_Key";

/// Service region, e.g. `westus`.
pub const REGION: &str = "SpeechServiceConnection_Region";

/// Bearer authorization token, settable after construction (token refresh).
pub const AUTHORIZATION_TOKEN: &str = "SpeechServiceAuthorization_Token";

/// Full service endpoint URL, overriding the region-derived one.
pub const ENDPOINT: &str = "SpeechServiceConnection_Endpoint";

/// Language the recognizer should transcribe, e.g. `en-US`.
pub const RECOGNITION_LANGUAGE: &str = "SpeechServiceConnection_RecoLanguage";

/// Path of the wav file an audio input reads from.
pub const AUDIO_FILE_PATH: &str = "AudioConfig_AudioSource_FilePath";

/// Path of the file a keyword model was loaded from.
pub const KEYWORD_MODEL_PATH: &str = "KeywordRecognitionModel_FilePath";
