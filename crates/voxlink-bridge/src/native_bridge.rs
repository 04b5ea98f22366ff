use std::ffi::{CStr, CString};

use tokio::sync::mpsc;
use voxlink_core::{AuthorizationStatus, SpeechEvent, StartRequest};

use crate::bridge_trait::SpeechBridge;
use crate::sink::{BridgeCallbacks, EventSink};

/// Raw entry points exported by the platform speech shim the embedding
/// links. Call through the safe [`NativeBridge`] wrapper only.
#[allow(non_snake_case)]
mod ffi {
    use std::os::raw::c_char;

    extern "C" {
        /// Store the language used by the next recording session.
        pub fn _SetDetectionLanguage(language_id: *const c_char);

        /// Serialized supported-languages list. The buffer is owned by the
        /// shim and only valid until the next call; copy it immediately and
        /// never free it here.
        pub fn _SupportedLanguages() -> *const c_char;

        /// Trigger the platform permission dialog.
        pub fn _RequestAccess();

        pub fn _IsRecording() -> bool;

        pub fn _EngineExists() -> bool;

        /// Raw authorization code, decoded by `AuthorizationStatus::from_raw`.
        pub fn _AuthorizationStatus() -> i32;

        /// Stop the session if one is running; safe to call regardless.
        pub fn _StopIfRecording();

        pub fn _StartRecording(should_collect_partial_results: bool);
    }
}

/// Bridge variant bound straight to the platform speech shim through the
/// foreign entry points above. Compiled only where the shim can actually be
/// linked, so the registry simply lacks this backend elsewhere.
pub struct NativeBridge {
    sink: EventSink,
}

impl NativeBridge {
    pub fn new() -> Self {
        Self {
            sink: EventSink::new(),
        }
    }

    /// Handle the shim's notification glue uses to push transcript and
    /// availability events into the listener channel.
    pub fn callbacks(&self) -> BridgeCallbacks {
        BridgeCallbacks::new(self.sink.clone())
    }
}

impl Default for NativeBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechBridge for NativeBridge {
    fn name(&self) -> &str {
        "native"
    }

    fn engine_exists(&self) -> bool {
        unsafe { ffi::_EngineExists() }
    }

    fn request_access(&self) {
        unsafe { ffi::_RequestAccess() }
    }

    fn is_recording(&self) -> bool {
        unsafe { ffi::_IsRecording() }
    }

    fn authorization_status(&self) -> AuthorizationStatus {
        AuthorizationStatus::from_raw(unsafe { ffi::_AuthorizationStatus() })
    }

    fn start_recording(&self, request: &StartRequest) {
        if let Some(language_id) = request.language_id.as_deref() {
            match CString::new(language_id) {
                Ok(c_language) => unsafe { ffi::_SetDetectionLanguage(c_language.as_ptr()) },
                Err(_) => {
                    tracing::warn!(
                        language_id,
                        "language id contains an interior NUL, starting without it"
                    );
                }
            }
        }
        unsafe { ffi::_StartRecording(request.should_collect_partial_results) }
    }

    fn stop_if_recording(&self) {
        unsafe { ffi::_StopIfRecording() }
    }

    fn request_supported_languages(&self) {
        // The shim answers synchronously; the payload still travels through
        // the listener channel like every other engine result.
        let payload = unsafe {
            let ptr = ffi::_SupportedLanguages();
            if ptr.is_null() {
                tracing::warn!("speech shim returned no supported-languages buffer");
                return;
            }
            CStr::from_ptr(ptr).to_string_lossy().into_owned()
        };
        self.sink.emit(SpeechEvent::SupportedLanguages { payload });
    }

    fn set_event_sender(&mut self, sender: mpsc::UnboundedSender<SpeechEvent>) {
        self.sink.bind(sender);
    }
}
