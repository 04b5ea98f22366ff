pub mod config;
pub mod error;
pub mod types;
pub mod wire;

pub use config::{AppConfig, BridgeConfig, GeneralConfig, WireConfig};
pub use error::{BridgeError, ConfigError, WireError};
pub use types::{
    AuthorizationStatus, LanguageOption, RecognitionOptions, SpeechEvent, StartRequest,
};
pub use wire::WireFormat;
