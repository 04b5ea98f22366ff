use std::sync::Arc;

use tokio::sync::mpsc;
use voxlink_core::{LanguageOption, SpeechEvent, WireFormat};

/// Host-side handler for asynchronous speech notifications.
///
/// Registered explicitly with an [`EventPump`]. Only the supported-languages
/// notification is required; the transcript-side methods default to no-ops
/// for hosts that poll recording state instead of consuming transcripts.
pub trait SpeechListener: Send + Sync {
    /// Decoded result of a supported-languages query, in engine order.
    fn on_supported_languages(&self, languages: Vec<LanguageOption>);

    fn on_partial_transcript(&self, _text: &str) {}

    fn on_final_transcript(&self, _text: &str) {}

    fn on_availability_changed(&self, _available: bool) {}

    fn on_recording_error(&self, _message: &str) {}
}

/// Drains the facade's event channel and dispatches to a registered
/// listener, decoding supported-languages payloads with the configured wire
/// format on the way through.
///
/// Frame-driven hosts call [`poll`](Self::poll) from their own safe
/// execution context; async hosts hand the pump to [`spawn`](Self::spawn)
/// and let a task drain it.
pub struct EventPump {
    receiver: mpsc::UnboundedReceiver<SpeechEvent>,
    listener: Arc<dyn SpeechListener>,
    wire: WireFormat,
}

impl EventPump {
    pub fn new(
        receiver: mpsc::UnboundedReceiver<SpeechEvent>,
        listener: Arc<dyn SpeechListener>,
        wire: WireFormat,
    ) -> Self {
        Self {
            receiver,
            listener,
            wire,
        }
    }

    /// Dispatch everything currently queued without blocking. Returns the
    /// number of events handled, counting malformed payloads that were
    /// logged and dropped.
    pub fn poll(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.receiver.try_recv() {
            dispatch(self.listener.as_ref(), &self.wire, event);
            handled += 1;
        }
        handled
    }

    /// Drain on a background task until the facade side closes the channel.
    pub fn spawn(mut self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            while let Some(event) = self.receiver.recv().await {
                dispatch(self.listener.as_ref(), &self.wire, event);
            }
            tracing::debug!("speech event channel closed, pump exiting");
        })
    }
}

fn dispatch(listener: &dyn SpeechListener, wire: &WireFormat, event: SpeechEvent) {
    match event {
        SpeechEvent::SupportedLanguages { payload } => match wire.parse(&payload) {
            Ok(languages) => listener.on_supported_languages(languages),
            Err(e) => {
                // A bad payload must not take the pump down with it.
                tracing::warn!(%payload, "dropping malformed supported-languages payload: {e}");
            }
        },
        SpeechEvent::PartialTranscript { text } => listener.on_partial_transcript(&text),
        SpeechEvent::FinalTranscript { text } => listener.on_final_transcript(&text),
        SpeechEvent::AvailabilityChanged { available } => {
            listener.on_availability_changed(available)
        }
        SpeechEvent::RecordingError { message } => listener.on_recording_error(&message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CollectingListener {
        languages: Mutex<Vec<Vec<LanguageOption>>>,
        partials: Mutex<Vec<String>>,
        finals: Mutex<Vec<String>>,
        availability: Mutex<Vec<bool>>,
        errors: Mutex<Vec<String>>,
    }

    impl SpeechListener for CollectingListener {
        fn on_supported_languages(&self, languages: Vec<LanguageOption>) {
            self.languages.lock().unwrap().push(languages);
        }

        fn on_partial_transcript(&self, text: &str) {
            self.partials.lock().unwrap().push(text.to_string());
        }

        fn on_final_transcript(&self, text: &str) {
            self.finals.lock().unwrap().push(text.to_string());
        }

        fn on_availability_changed(&self, available: bool) {
            self.availability.lock().unwrap().push(available);
        }

        fn on_recording_error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_string());
        }
    }

    fn pump_with_listener() -> (
        mpsc::UnboundedSender<SpeechEvent>,
        EventPump,
        Arc<CollectingListener>,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        let listener = Arc::new(CollectingListener::default());
        let pump = EventPump::new(rx, listener.clone(), WireFormat::v1());
        (tx, pump, listener)
    }

    #[tokio::test]
    async fn test_poll_decodes_supported_languages_in_order() {
        let (tx, mut pump, listener) = pump_with_listener();
        tx.send(SpeechEvent::SupportedLanguages {
            payload: "en-US|English;fr-FR|French".to_string(),
        })
        .unwrap();

        assert_eq!(pump.poll(), 1);

        let batches = listener.languages.lock().unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(
            batches[0],
            vec![
                LanguageOption::new("en-US", "English"),
                LanguageOption::new("fr-FR", "French"),
            ]
        );
    }

    #[tokio::test]
    async fn test_poll_on_empty_channel_returns_zero() {
        let (_tx, mut pump, _listener) = pump_with_listener();
        assert_eq!(pump.poll(), 0);
    }

    #[tokio::test]
    async fn test_poll_drops_malformed_payload_without_dispatch() {
        let (tx, mut pump, listener) = pump_with_listener();
        tx.send(SpeechEvent::SupportedLanguages {
            payload: "no separators here".to_string(),
        })
        .unwrap();
        tx.send(SpeechEvent::SupportedLanguages {
            payload: "de-DE|Deutsch".to_string(),
        })
        .unwrap();

        // Both events are consumed; only the well-formed one reaches the
        // listener.
        assert_eq!(pump.poll(), 2);

        let batches = listener.languages.lock().unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0], vec![LanguageOption::new("de-DE", "Deutsch")]);
    }

    #[tokio::test]
    async fn test_poll_dispatches_transcripts_and_state_changes() {
        let (tx, mut pump, listener) = pump_with_listener();
        tx.send(SpeechEvent::PartialTranscript {
            text: "hel".to_string(),
        })
        .unwrap();
        tx.send(SpeechEvent::FinalTranscript {
            text: "hello".to_string(),
        })
        .unwrap();
        tx.send(SpeechEvent::AvailabilityChanged { available: false })
            .unwrap();
        tx.send(SpeechEvent::RecordingError {
            message: "mic lost".to_string(),
        })
        .unwrap();

        assert_eq!(pump.poll(), 4);
        assert_eq!(*listener.partials.lock().unwrap(), vec!["hel"]);
        assert_eq!(*listener.finals.lock().unwrap(), vec!["hello"]);
        assert_eq!(*listener.availability.lock().unwrap(), vec![false]);
        assert_eq!(*listener.errors.lock().unwrap(), vec!["mic lost"]);
    }

    #[tokio::test]
    async fn test_poll_uses_configured_wire_format() {
        let (tx, rx) = mpsc::unbounded_channel();
        let listener = Arc::new(CollectingListener::default());
        let wire = WireFormat::new(',', ':').unwrap();
        let mut pump = EventPump::new(rx, listener.clone(), wire);

        tx.send(SpeechEvent::SupportedLanguages {
            payload: "en-US:English,fr-FR:French".to_string(),
        })
        .unwrap();

        assert_eq!(pump.poll(), 1);
        assert_eq!(listener.languages.lock().unwrap()[0].len(), 2);
    }

    #[tokio::test]
    async fn test_spawned_pump_drains_until_channel_closes() {
        let (tx, pump, listener) = pump_with_listener();
        let handle = pump.spawn();

        tx.send(SpeechEvent::FinalTranscript {
            text: "done".to_string(),
        })
        .unwrap();
        drop(tx);

        handle.await.unwrap();
        assert_eq!(*listener.finals.lock().unwrap(), vec!["done"]);
    }
}
