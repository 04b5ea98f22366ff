use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("environment variable not found: {0}")]
    EnvVarNotFound(String),

    #[error("invalid wire format: {0}")]
    Wire(#[from] WireError),
}

#[derive(Debug, Error)]
pub enum WireError {
    #[error("pair and field separators must differ, got {0:?} for both")]
    SeparatorConflict(char),

    #[error("malformed language pair: {0:?}")]
    MalformedPair(String),

    #[error("language pair has an empty id: {0:?}")]
    EmptyLanguageId(String),

    #[error("value contains a reserved separator: {0:?}")]
    ReservedSeparator(String),
}

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("speech bridge backend not found: {0}")]
    BackendNotFound(String),

    #[error("host invoke '{method}' failed: {reason}")]
    InvokeFailed { method: String, reason: String },
}
