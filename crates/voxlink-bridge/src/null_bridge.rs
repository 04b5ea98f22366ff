use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::mpsc;
use voxlink_core::{AuthorizationStatus, SpeechEvent, StartRequest};

use crate::bridge_trait::SpeechBridge;
use crate::sink::EventSink;

/// Backend for platforms without a native recognition capability.
///
/// Every query returns its documented safe default and every command is a
/// no-op. Calls are counted so embeddings and tests can observe that the
/// facade forwarded them.
pub struct NullBridge {
    sink: EventSink,
    access_requests: AtomicUsize,
    starts: AtomicUsize,
    stops: AtomicUsize,
    language_queries: AtomicUsize,
}

impl NullBridge {
    pub fn new() -> Self {
        Self {
            sink: EventSink::new(),
            access_requests: AtomicUsize::new(0),
            starts: AtomicUsize::new(0),
            stops: AtomicUsize::new(0),
            language_queries: AtomicUsize::new(0),
        }
    }

    pub fn access_request_count(&self) -> usize {
        self.access_requests.load(Ordering::Relaxed)
    }

    pub fn start_count(&self) -> usize {
        self.starts.load(Ordering::Relaxed)
    }

    pub fn stop_count(&self) -> usize {
        self.stops.load(Ordering::Relaxed)
    }

    pub fn language_query_count(&self) -> usize {
        self.language_queries.load(Ordering::Relaxed)
    }
}

impl Default for NullBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechBridge for NullBridge {
    fn name(&self) -> &str {
        "null"
    }

    fn engine_exists(&self) -> bool {
        false
    }

    fn request_access(&self) {
        self.access_requests.fetch_add(1, Ordering::Relaxed);
        tracing::trace!("NullBridge ignoring access request");
    }

    fn is_recording(&self) -> bool {
        false
    }

    fn authorization_status(&self) -> AuthorizationStatus {
        AuthorizationStatus::NotDetermined
    }

    fn start_recording(&self, request: &StartRequest) {
        let count = self.starts.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::trace!(
            language = ?request.language_id,
            "NullBridge ignoring start request #{count}"
        );
    }

    fn stop_if_recording(&self) {
        self.stops.fetch_add(1, Ordering::Relaxed);
    }

    fn request_supported_languages(&self) {
        // No engine, no answer. The query is counted but nothing is emitted.
        self.language_queries.fetch_add(1, Ordering::Relaxed);
    }

    fn set_event_sender(&mut self, sender: mpsc::UnboundedSender<SpeechEvent>) {
        self.sink.bind(sender);
    }
}
