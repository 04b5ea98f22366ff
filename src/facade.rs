use tokio::sync::mpsc;
use voxlink_bridge::{BridgeRegistry, SpeechBridge};
use voxlink_core::{
    AppConfig, AuthorizationStatus, BridgeError, RecognitionOptions, SpeechEvent, StartRequest,
};

/// Uniform entry point for speech recognition, hiding which platform bridge
/// sits underneath.
///
/// Speech recognition is an optional device capability, so none of the
/// runtime operations fail: on platforms without an engine the configured
/// backend is [`NullBridge`](voxlink_bridge::NullBridge) and every call
/// degrades to its documented safe default (`false`, `NotDetermined`,
/// no-op). Failures only surface at composition time, when the configured
/// backend name is unknown to the registry.
#[derive(Debug)]
pub struct SpeechRecognizer {
    bridge: Box<dyn SpeechBridge>,
    detection_language: Option<String>,
    event_rx: Option<mpsc::UnboundedReceiver<SpeechEvent>>,
}

impl SpeechRecognizer {
    /// Wrap a bridge and wire the listener channel into it.
    pub fn new(mut bridge: Box<dyn SpeechBridge>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        bridge.set_event_sender(event_tx);
        Self {
            bridge,
            detection_language: None,
            event_rx: Some(event_rx),
        }
    }

    /// Build the configured backend from the registry and seed the detection
    /// language from `[bridge] default_language`.
    pub fn from_config(
        config: &AppConfig,
        registry: &BridgeRegistry,
    ) -> Result<Self, BridgeError> {
        let bridge = registry.create(&config.bridge.backend)?;
        tracing::info!(backend = bridge.name(), "speech bridge selected");
        let mut recognizer = Self::new(bridge);
        recognizer.detection_language = config.bridge.default_language.clone();
        Ok(recognizer)
    }

    /// `true` when a native recognition capability is present on this
    /// device.
    pub fn exists_on_device(&self) -> bool {
        self.bridge.engine_exists()
    }

    /// Trigger the platform permission dialog. The outcome shows up later in
    /// [`authorization_status`](Self::authorization_status).
    pub fn request_access(&self) {
        tracing::debug!(backend = self.bridge.name(), "requesting speech access");
        self.bridge.request_access();
    }

    /// Current recording state, polled.
    pub fn is_recording(&self) -> bool {
        self.bridge.is_recording()
    }

    /// Synchronous snapshot of the OS permission state. Never blocks on a
    /// dialog and never fails; unknown states read as `NotDetermined`.
    pub fn authorization_status(&self) -> AuthorizationStatus {
        self.bridge.authorization_status()
    }

    /// Stop the running session, if any. A no-op when nothing is recording.
    pub fn stop_if_recording(&self) {
        self.bridge.stop_if_recording();
    }

    /// Begin a recognition session using the stored detection language.
    /// Calling while a session is already running is left to the native
    /// layer to resolve.
    pub fn start_recording(&self, options: RecognitionOptions) {
        let request = StartRequest {
            should_collect_partial_results: options.collect_partial_results,
            language_id: self.detection_language.clone(),
        };
        tracing::debug!(
            backend = self.bridge.name(),
            language = ?request.language_id,
            partials = request.should_collect_partial_results,
            "starting recording"
        );
        self.bridge.start_recording(&request);
    }

    /// Store the language id passed along with the next
    /// [`start_recording`](Self::start_recording). An in-progress session is
    /// unaffected. The id is not validated here; whether the engine supports
    /// it is the native layer's business.
    pub fn set_detection_language(&mut self, language_id: impl Into<String>) {
        self.detection_language = Some(language_id.into());
    }

    pub fn detection_language(&self) -> Option<&str> {
        self.detection_language.as_deref()
    }

    /// Fire a supported-languages query. The decoded list arrives through
    /// the listener channel, never as a return value.
    pub fn request_supported_languages(&self) {
        self.bridge.request_supported_languages();
    }

    /// Take the receiving half of the listener channel. Yields `Some` once;
    /// the host drains it on its own execution context, directly or through
    /// [`EventPump`](crate::listener::EventPump).
    pub fn take_event_receiver(&mut self) -> Option<mpsc::UnboundedReceiver<SpeechEvent>> {
        self.event_rx.take()
    }

    /// Name of the backend this facade was built on.
    pub fn bridge_name(&self) -> &str {
        self.bridge.name()
    }
}
