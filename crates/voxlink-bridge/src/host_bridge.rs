use std::sync::Arc;

use tokio::sync::mpsc;
use voxlink_core::{AuthorizationStatus, BridgeError, SpeechEvent, StartRequest};

use crate::bridge_trait::SpeechBridge;
use crate::sink::{BridgeCallbacks, EventSink};

/// One argument of an invoke-by-name dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum InvokeArg {
    Bool(bool),
    Str(String),
    /// The start-recording options object. The invoker marshals it into
    /// whatever its runtime expects; `StartRequest` documents the serialized
    /// field names.
    Options(StartRequest),
}

/// Typed return of an invoke-by-name dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum InvokeReturn {
    Unit,
    Bool(bool),
    Int(i64),
    Str(String),
}

impl InvokeReturn {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }
}

/// Dispatches a named call onto the embedding runtime's bridge object.
///
/// Supplied by the embedding at composition time (on Android this wraps
/// static method calls into the managed bridge class); the bridge never
/// discovers its peer at runtime.
pub trait HostInvoker: Send + Sync {
    fn invoke(
        &self,
        target: &str,
        method: &str,
        args: &[InvokeArg],
    ) -> Result<InvokeReturn, BridgeError>;
}

/// Bridge variant that talks to a statically named object inside the
/// embedding runtime through a [`HostInvoker`].
///
/// Coercion follows the same never-fail policy as the rest of the crate: an
/// invoker error or a mistyped return is logged and degrades to the
/// documented default.
pub struct HostBridge {
    target: String,
    invoker: Arc<dyn HostInvoker>,
    sink: EventSink,
}

impl HostBridge {
    pub const DEFAULT_TARGET: &'static str = "SpeechRecognizerBridge";

    pub fn new(invoker: Arc<dyn HostInvoker>) -> Self {
        Self::with_target(Self::DEFAULT_TARGET, invoker)
    }

    pub fn with_target(target: impl Into<String>, invoker: Arc<dyn HostInvoker>) -> Self {
        Self {
            target: target.into(),
            invoker,
            sink: EventSink::new(),
        }
    }

    /// Handle the embedding's glue code uses to push asynchronous engine
    /// completions back into the listener channel.
    pub fn callbacks(&self) -> BridgeCallbacks {
        BridgeCallbacks::new(self.sink.clone())
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    fn call(&self, method: &str, args: &[InvokeArg]) -> Option<InvokeReturn> {
        match self.invoker.invoke(&self.target, method, args) {
            Ok(ret) => Some(ret),
            Err(e) => {
                tracing::warn!(
                    target_object = %self.target,
                    method,
                    "host invoke failed: {e}"
                );
                None
            }
        }
    }

    fn query_bool(&self, method: &str) -> bool {
        match self.call(method, &[]) {
            Some(ret) => ret.as_bool().unwrap_or_else(|| {
                tracing::warn!(method, ?ret, "host returned non-boolean, assuming false");
                false
            }),
            None => false,
        }
    }
}

impl SpeechBridge for HostBridge {
    fn name(&self) -> &str {
        "host"
    }

    fn engine_exists(&self) -> bool {
        self.query_bool("EngineExists")
    }

    fn request_access(&self) {
        self.call("RequestAccess", &[]);
    }

    fn is_recording(&self) -> bool {
        self.query_bool("IsRecording")
    }

    fn authorization_status(&self) -> AuthorizationStatus {
        match self.call("AuthorizationStatus", &[]).and_then(|r| r.as_int()) {
            // Out-of-range codes fall through from_raw to NotDetermined.
            Some(raw) => AuthorizationStatus::from_raw(i32::try_from(raw).unwrap_or(-1)),
            None => AuthorizationStatus::NotDetermined,
        }
    }

    fn start_recording(&self, request: &StartRequest) {
        self.call("StartRecording", &[InvokeArg::Options(request.clone())]);
    }

    fn stop_if_recording(&self) {
        self.call("StopIfRecording", &[]);
    }

    fn request_supported_languages(&self) {
        // Hosts that answer synchronously get forwarded right away; the
        // usual path is a later push through `callbacks()`.
        if let Some(ret) = self.call("GetSupportedLanguages", &[]) {
            if let Some(payload) = ret.as_str() {
                self.sink.emit(SpeechEvent::SupportedLanguages {
                    payload: payload.to_string(),
                });
            }
        }
    }

    fn set_event_sender(&mut self, sender: mpsc::UnboundedSender<SpeechEvent>) {
        self.sink.bind(sender);
    }
}
