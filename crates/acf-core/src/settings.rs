//! Global settings loaded from TOML, following the same OnceLock pattern as the accent table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::matcher::{MatchMode, Matcher};

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
    pub matching: MatchingSettings,
    pub display: DisplaySettings,
}

impl Settings {
    pub fn matcher(&self) -> Matcher {
        Matcher::new(self.matching.mode, self.matching.fold_accents)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    pub mode: MatchMode,
    pub fold_accents: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySettings {
    pub max_visible_rows: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.display.max_visible_rows == 0 {
        return Err(SettingsError::InvalidValue {
            field: "display.max_visible_rows".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.matching.mode, MatchMode::Contains);
        assert!(s.matching.fold_accents);
        assert_eq!(s.display.max_visible_rows, 8);
        assert_eq!(s.matcher(), Matcher::default());
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[matching]
mode = "starts_with"
fold_accents = false

[display]
max_visible_rows = 12
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.matching.mode, MatchMode::StartsWith);
        assert!(!s.matching.fold_accents);
        assert_eq!(s.display.max_visible_rows, 12);
    }

    #[test]
    fn error_zero_visible_rows() {
        let toml = r#"
[matching]
mode = "contains"
fold_accents = true

[display]
max_visible_rows = 0
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("display.max_visible_rows"));
    }

    #[test]
    fn error_unknown_mode() {
        let toml = r#"
[matching]
mode = "fuzzy"
fold_accents = true

[display]
max_visible_rows = 8
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
        let toml = r#"
[matching]
mode = "contains"
fold_accents = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn global_settings_use_defaults() {
        assert_eq!(settings().display.max_visible_rows, 8);
    }
}
