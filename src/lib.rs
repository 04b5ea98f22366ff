//! Cross-platform speech-recognition binding layer.
//!
//! voxlink forwards a small capability set (start and stop recording,
//! authorization checks, language selection, supported-language enumeration)
//! to whichever platform speech engine sits behind the configured
//! [`SpeechBridge`] backend, and routes the engine's asynchronous results
//! back to a registered [`SpeechListener`]. All actual recognition, audio
//! capture and language processing happen inside the native engines; this
//! workspace is exclusively marshalling.
//!
//! ```no_run
//! use voxlink::{AppConfig, BridgeRegistry, RecognitionOptions, SpeechRecognizer};
//!
//! let config = AppConfig::default();
//! voxlink::telemetry::init(&config.general);
//!
//! let registry = BridgeRegistry::new();
//! let mut recognizer = SpeechRecognizer::from_config(&config, &registry).unwrap();
//!
//! recognizer.set_detection_language("en-US");
//! recognizer.start_recording(RecognitionOptions {
//!     collect_partial_results: true,
//! });
//! recognizer.stop_if_recording();
//! ```

pub mod facade;
pub mod listener;
pub mod telemetry;

pub use facade::SpeechRecognizer;
pub use listener::{EventPump, SpeechListener};

#[cfg(all(feature = "native", any(target_os = "ios", target_os = "macos")))]
pub use voxlink_bridge::NativeBridge;
pub use voxlink_bridge::{
    BridgeCallbacks, BridgeRegistry, EventSink, HostBridge, HostInvoker, InvokeArg, InvokeReturn,
    NullBridge, SpeechBridge,
};
pub use voxlink_core::{
    AppConfig, AuthorizationStatus, BridgeConfig, BridgeError, ConfigError, GeneralConfig,
    LanguageOption, RecognitionOptions, SpeechEvent, StartRequest, WireConfig, WireError,
    WireFormat,
};
