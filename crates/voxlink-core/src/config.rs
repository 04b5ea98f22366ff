use crate::error::ConfigError;
use crate::wire::{WireFormat, V1_FIELD_SEPARATOR, V1_PAIR_SEPARATOR};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub bridge: BridgeConfig,

    #[serde(default)]
    pub wire: WireConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct BridgeConfig {
    /// Which registered backend the facade is built on. `"null"` is always
    /// available and is the safe choice on platforms without a speech engine.
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Seeds the facade's detection language at startup.
    #[serde(default)]
    pub default_language: Option<String>,

    /// Name of the statically named bridge object the host backend
    /// dispatches into.
    #[serde(default = "default_host_target")]
    pub host_target: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            default_language: None,
            host_target: default_host_target(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct WireConfig {
    #[serde(default = "default_pair_separator")]
    pub pair_separator: char,

    #[serde(default = "default_field_separator")]
    pub field_separator: char,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            pair_separator: default_pair_separator(),
            field_separator: default_field_separator(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_backend() -> String {
    "null".to_string()
}

fn default_host_target() -> String {
    "SpeechRecognizerBridge".to_string()
}

fn default_pair_separator() -> char {
    V1_PAIR_SEPARATOR
}

fn default_field_separator() -> char {
    V1_FIELD_SEPARATOR
}

/// Interpolate `${VAR}` patterns with environment variable values.
fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();
    let mut result = input.to_string();
    let mut errors = Vec::new();

    for cap in re.captures_iter(input) {
        let var_name = &cap[1];
        match std::env::var(var_name) {
            Ok(val) => {
                result = result.replace(&cap[0], &val);
            }
            Err(_) => {
                errors.push(var_name.to_string());
            }
        }
    }

    if let Some(first_missing) = errors.into_iter().next() {
        return Err(ConfigError::EnvVarNotFound(first_missing));
    }

    Ok(result)
}

impl AppConfig {
    /// Load configuration from a TOML file, with environment variable
    /// interpolation.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let interpolated = interpolate_env_vars(&content)?;
        let config: AppConfig = toml::from_str(&interpolated)?;
        Ok(config)
    }

    /// Parse configuration from a TOML string (for testing).
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let interpolated = interpolate_env_vars(s)?;
        let config: AppConfig = toml::from_str(&interpolated)?;
        Ok(config)
    }

    /// The validated wire format described by the `[wire]` section.
    pub fn wire_format(&self) -> Result<WireFormat, ConfigError> {
        Ok(WireFormat::new(
            self.wire.pair_separator,
            self.wire.field_separator,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parse_valid_toml() {
        let toml_str = r#"
[general]
log_level = "debug"

[bridge]
backend = "host"
default_language = "en-US"
host_target = "VoiceBridge"

[wire]
pair_separator = ","
field_separator = ":"
"#;
        let config = AppConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.bridge.backend, "host");
        assert_eq!(config.bridge.default_language.as_deref(), Some("en-US"));
        assert_eq!(config.bridge.host_target, "VoiceBridge");
        assert_eq!(config.wire.pair_separator, ',');
        assert_eq!(config.wire.field_separator, ':');
    }

    #[test]
    fn test_config_default_values() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.bridge.backend, "null");
        assert!(config.bridge.default_language.is_none());
        assert_eq!(config.bridge.host_target, "SpeechRecognizerBridge");
        assert_eq!(config.wire.pair_separator, ';');
        assert_eq!(config.wire.field_separator, '|');
    }

    #[test]
    fn test_config_parse_partial_sections() {
        let toml_str = r#"
[bridge]
backend = "native"
"#;
        let config = AppConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.bridge.backend, "native");
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.wire.pair_separator, ';');
    }

    #[test]
    fn test_config_env_var_interpolation() {
        std::env::set_var("VOXLINK_TEST_LANG", "pl-PL");
        let toml_str = r#"
[bridge]
default_language = "${VOXLINK_TEST_LANG}"
"#;
        let config = AppConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.bridge.default_language.as_deref(), Some("pl-PL"));
        std::env::remove_var("VOXLINK_TEST_LANG");
    }

    #[test]
    fn test_config_missing_env_var_error() {
        let toml_str = r#"
[bridge]
backend = "${DEFINITELY_DOES_NOT_EXIST_12345}"
"#;
        let result = AppConfig::from_toml_str(toml_str);
        match result {
            Err(ConfigError::EnvVarNotFound(name)) => {
                assert_eq!(name, "DEFINITELY_DOES_NOT_EXIST_12345");
            }
            _ => panic!("expected EnvVarNotFound"),
        }
    }

    #[test]
    fn test_config_invalid_toml_error() {
        let result = AppConfig::from_toml_str("this is not valid toml [[[");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_config_multi_char_separator_rejected() {
        let toml_str = r#"
[wire]
pair_separator = ";;"
"#;
        assert!(matches!(
            AppConfig::from_toml_str(toml_str),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_config_wire_format_uses_configured_separators() {
        let toml_str = r#"
[wire]
pair_separator = ","
field_separator = ":"
"#;
        let config = AppConfig::from_toml_str(toml_str).unwrap();
        let wire = config.wire_format().unwrap();
        assert_eq!(wire.pair_separator(), ',');
        assert_eq!(wire.field_separator(), ':');
    }

    #[test]
    fn test_config_wire_format_identical_separators_fails() {
        let toml_str = r#"
[wire]
pair_separator = "|"
"#;
        let config = AppConfig::from_toml_str(toml_str).unwrap();
        match config.wire_format() {
            Err(ConfigError::Wire(_)) => {}
            _ => panic!("expected Wire error"),
        }
    }

    #[test]
    fn test_config_load_from_file() {
        let dir = std::env::temp_dir().join("voxlink_test_config");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("test.toml");
        std::fs::write(
            &path,
            r#"
[general]
log_level = "warn"

[bridge]
backend = "host"
"#,
        )
        .unwrap();

        let config = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(config.general.log_level, "warn");
        assert_eq!(config.bridge.backend, "host");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_config_load_from_file_not_found() {
        let result = AppConfig::load_from_file(Path::new("/nonexistent/path.toml"));
        assert!(matches!(result, Err(ConfigError::FileRead(_))));
    }
}
