use serde::Serialize;

/// OS-level permission state for microphone/speech access.
///
/// The numeric encoding is what the native side reports through its
/// status query: 0 = authorized, 1 = denied, 2 = not determined,
/// 3 = restricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorizationStatus {
    Authorized,
    Denied,
    #[default]
    NotDetermined,
    Restricted,
}

impl AuthorizationStatus {
    /// Map a raw native status code. Out-of-range values are reported as
    /// `NotDetermined` rather than an error.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Authorized,
            1 => Self::Denied,
            2 => Self::NotDetermined,
            3 => Self::Restricted,
            _ => Self::NotDetermined,
        }
    }

    pub fn as_raw(self) -> i32 {
        match self {
            Self::Authorized => 0,
            Self::Denied => 1,
            Self::NotDetermined => 2,
            Self::Restricted => 3,
        }
    }
}

/// Caller-facing options for a single recording session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecognitionOptions {
    pub collect_partial_results: bool,
}

/// One selectable recognition language, as reported by the native engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub id: String,
    pub display_name: String,
}

impl LanguageOption {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// The options object that crosses the bridge boundary when a session starts.
///
/// The facade builds it from [`RecognitionOptions`] plus its own detection
/// language. Serializes to the shape host runtimes expect:
/// `{"shouldCollectPartialResults": bool, "languageID": string|null}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartRequest {
    pub should_collect_partial_results: bool,
    #[serde(rename = "languageID")]
    pub language_id: Option<String>,
}

/// Asynchronous notification pushed by a bridge toward the registered
/// listener channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    /// Serialized supported-languages list. Opaque here; the listener side
    /// decodes it with the configured wire format.
    SupportedLanguages { payload: String },
    PartialTranscript { text: String },
    FinalTranscript { text: String },
    AvailabilityChanged { available: bool },
    RecordingError { message: String },
}
