//! Global settings loaded from TOML, following the same OnceLock pattern
//! as the alphabet tables.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::translit::Direction;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub service: ServiceSettings,
    pub gate: GateSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSettings {
    pub default_direction: Direction,
    pub max_message_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GateSettings {
    #[serde(default)]
    pub required_channels: Vec<String>,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.service.max_message_chars == 0 {
        return Err(SettingsError::InvalidValue {
            field: "service.max_message_chars".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    for channel in &s.gate.required_channels {
        if channel.is_empty() {
            return Err(SettingsError::InvalidValue {
                field: "gate.required_channels".to_string(),
                reason: "channel names must be non-empty".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.service.default_direction, Direction::Forward);
        assert_eq!(s.service.max_message_chars, 4096);
        assert_eq!(
            s.gate.required_channels,
            vec!["Zhora08".to_string(), "Shyraq_Tech".to_string()]
        );
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[service]
default_direction = "reverse"
max_message_chars = 512

[gate]
required_channels = []
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.service.default_direction, Direction::Reverse);
        assert_eq!(s.service.max_message_chars, 512);
        assert!(s.gate.required_channels.is_empty());
    }

    #[test]
    fn channels_omitted_is_empty() {
        let toml = r#"
[service]
default_direction = "forward"
max_message_chars = 4096

[gate]
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert!(s.gate.required_channels.is_empty());
    }

    #[test]
    fn error_zero_message_chars() {
        let toml = r#"
[service]
default_direction = "forward"
max_message_chars = 0

[gate]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("max_message_chars"));
    }

    #[test]
    fn error_empty_channel_name() {
        let toml = r#"
[service]
default_direction = "forward"
max_message_chars = 4096

[gate]
required_channels = [""]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn error_unknown_direction() {
        let toml = r#"
[service]
default_direction = "sideways"
max_message_chars = 4096

[gate]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("[service]\nmax_message_chars = 10\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
