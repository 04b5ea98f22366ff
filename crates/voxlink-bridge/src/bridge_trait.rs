use std::fmt;

use tokio::sync::mpsc;
use voxlink_core::{AuthorizationStatus, SpeechEvent, StartRequest};

/// A platform speech-recognition backend behind a uniform capability set.
///
/// Implementations are selected once at startup through
/// [`BridgeRegistry`](crate::BridgeRegistry) and never surface errors to the
/// caller: every query has a documented safe default and every command
/// degrades to a no-op when the capability is missing. Asynchronous results
/// (transcripts, supported-language payloads) flow through the sender
/// registered with [`set_event_sender`](Self::set_event_sender).
pub trait SpeechBridge: Send + Sync {
    /// The backend's registry name, e.g. `"null"` or `"host"`.
    fn name(&self) -> &str;

    /// `true` when a native recognition engine is present on this device.
    fn engine_exists(&self) -> bool;

    /// Trigger the platform permission dialog. The outcome is observed later
    /// through [`authorization_status`](Self::authorization_status).
    fn request_access(&self);

    /// Snapshot of the current recording state.
    fn is_recording(&self) -> bool;

    /// Snapshot of the OS permission state. Unknown or unqueryable states
    /// report as [`AuthorizationStatus::NotDetermined`].
    fn authorization_status(&self) -> AuthorizationStatus;

    /// Begin a recognition session. Behavior while a session is already
    /// running is the native layer's business; there is no guard here.
    fn start_recording(&self, request: &StartRequest);

    /// Stop the running session, if any. Idempotent.
    fn stop_if_recording(&self);

    /// Fire a supported-languages query. The serialized list arrives as
    /// [`SpeechEvent::SupportedLanguages`] on the registered sender, never
    /// as a return value.
    fn request_supported_languages(&self);

    /// Register the channel asynchronous events are delivered on. Replaces
    /// any previously registered sender.
    fn set_event_sender(&mut self, sender: mpsc::UnboundedSender<SpeechEvent>);
}

/// Trait objects report only their registry name; the rest of a backend's
/// state is platform-private.
impl fmt::Debug for dyn SpeechBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechBridge")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}
