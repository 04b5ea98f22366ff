use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use voxlink_core::SpeechEvent;

/// Shared cell holding the sender a bridge delivers events through.
///
/// Cloneable so the platform-facing [`BridgeCallbacks`] handle keeps working
/// no matter when the listener channel is bound: events emitted while no
/// sender is registered are dropped.
#[derive(Clone, Default)]
pub struct EventSink {
    sender: Arc<Mutex<Option<mpsc::UnboundedSender<SpeechEvent>>>>,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the listener channel, replacing any previous sender.
    pub fn bind(&self, sender: mpsc::UnboundedSender<SpeechEvent>) {
        *self.sender.lock().unwrap() = Some(sender);
    }

    pub fn is_bound(&self) -> bool {
        self.sender.lock().unwrap().is_some()
    }

    /// Deliver an event. Returns `false` when nothing is listening, either
    /// because no sender was bound or the receiving half is gone.
    pub fn emit(&self, event: SpeechEvent) -> bool {
        let guard = self.sender.lock().unwrap();
        match guard.as_ref() {
            Some(sender) => sender.send(event).is_ok(),
            None => {
                tracing::trace!("speech event dropped, no listener channel bound");
                false
            }
        }
    }
}

/// Handle the embedding's native glue uses to push engine completions into
/// the listener channel.
///
/// Cloned out of a bridge via its `callbacks()` accessor and called from
/// whatever thread the platform engine runs its notifications on; delivery
/// only enqueues onto the channel, the host drains it on its own execution
/// context.
#[derive(Clone)]
pub struct BridgeCallbacks {
    sink: EventSink,
}

impl BridgeCallbacks {
    pub(crate) fn new(sink: EventSink) -> Self {
        Self { sink }
    }

    /// Serialized supported-languages list, exactly as the engine produced
    /// it. Decoding happens on the host side.
    pub fn supported_languages_fetched(&self, payload: impl Into<String>) {
        self.sink.emit(SpeechEvent::SupportedLanguages {
            payload: payload.into(),
        });
    }

    pub fn partial_transcript(&self, text: impl Into<String>) {
        self.sink.emit(SpeechEvent::PartialTranscript { text: text.into() });
    }

    pub fn final_transcript(&self, text: impl Into<String>) {
        self.sink.emit(SpeechEvent::FinalTranscript { text: text.into() });
    }

    pub fn availability_changed(&self, available: bool) {
        self.sink.emit(SpeechEvent::AvailabilityChanged { available });
    }

    pub fn recording_error(&self, message: impl Into<String>) {
        self.sink.emit(SpeechEvent::RecordingError {
            message: message.into(),
        });
    }
}
