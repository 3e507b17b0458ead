#![forbid(unsafe_code)]

//! Configuration for date range inputs.
//!
//! Every tunable of a [`DateRangeInput`](crate::range::DateRangeInput) lives
//! in a single [`RangeInputConfig`] that can be built in code or, with the
//! `config` feature, loaded from TOML or JSON.
//!
//! # Loading
//!
//! ```toml
//! # rangepick.toml
//! placeholder = "Trip dates"
//! required = true
//! display_pattern = "%d/%m/%Y"
//! completion = "end_present"
//! ```
//!
//! ```rust,ignore
//! let config = RangeInputConfig::from_toml_file("rangepick.toml")?;
//! let config = RangeInputConfig::from_json_str(json)?;
//! ```
//!
//! # Defaults
//!
//! `RangeInputConfig::default()` gives an optional, enabled control with an
//! auto-generated id and ISO (`%Y-%m-%d`) display.

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use rangepick_core::CompletionPolicy;

/// Default id prefix; ids become `"{prefix}-{n}"`.
pub const DEFAULT_ID_PREFIX: &str = "rangepick-range";

/// Default display pattern (ISO-8601 calendar date).
pub const DEFAULT_DISPLAY_PATTERN: &str = "%Y-%m-%d";

/// Default control type reported to the form field.
pub const DEFAULT_CONTROL_TYPE: &str = "date-range";

/// Settings for a date range input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct RangeInputConfig {
    /// Explicit control id. `None` (or empty) generates one from `id_prefix`.
    pub id: Option<String>,

    /// Prefix for generated ids.
    pub id_prefix: String,

    /// Placeholder reported to the form field.
    pub placeholder: String,

    /// Whether a value is required.
    pub required: bool,

    /// Whether the control ignores input.
    pub disabled: bool,

    /// Pattern used to render and parse endpoint text.
    pub display_pattern: String,

    /// Initial-phase rule for range selections created by the control.
    pub completion: CompletionPolicy,

    /// Control type name exposed to the form field.
    pub control_type: Option<String>,
}

impl Default for RangeInputConfig {
    fn default() -> Self {
        Self {
            id: None,
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            placeholder: String::new(),
            required: false,
            disabled: false,
            display_pattern: DEFAULT_DISPLAY_PATTERN.to_string(),
            completion: CompletionPolicy::default(),
            control_type: Some(DEFAULT_CONTROL_TYPE.to_string()),
        }
    }
}

impl RangeInputConfig {
    /// Set an explicit id (builder).
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the placeholder (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Mark the control as required (builder).
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Disable the control (builder).
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the display pattern (builder).
    #[must_use]
    pub fn with_display_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.display_pattern = pattern.into();
        self
    }

    /// Set the completion policy (builder).
    #[must_use]
    pub fn with_completion(mut self, completion: CompletionPolicy) -> Self {
        self.completion = completion;
        self
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(ConfigError::Toml)?;
        config.checked()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s).map_err(ConfigError::Json)?;
        config.checked()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Serialize to a TOML string.
    #[cfg(feature = "config")]
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Validation(vec![e.to_string()]))
    }

    /// Check parameters. An empty list means the config is usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.id.is_none() && self.id_prefix.trim().is_empty() {
            errors.push("id_prefix must not be empty when no id is set".into());
        }

        if self.display_pattern.trim().is_empty() {
            errors.push("display_pattern must not be empty".into());
        }

        if self
            .control_type
            .as_deref()
            .is_some_and(|t| t.chars().any(char::is_whitespace))
        {
            errors.push(format!(
                "control_type must not contain whitespace, got {:?}",
                self.control_type.as_deref().unwrap_or_default()
            ));
        }

        errors
    }

    #[cfg(feature = "config")]
    fn checked(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            tracing::warn!(target: "rangepick::config", count = errors.len(), "rejected range input config");
            Err(ConfigError::Validation(errors))
        }
    }
}

// ---------------------------------------------------------------------------

/// Errors that can occur when loading a range input configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = RangeInputConfig::default();
        assert!(config.validate().is_empty());
        assert_eq!(config.display_pattern, DEFAULT_DISPLAY_PATTERN);
        assert_eq!(config.completion, CompletionPolicy::EndPresent);
    }

    #[test]
    fn empty_pattern_rejected() {
        let config = RangeInputConfig::default().with_display_pattern("  ");
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("display_pattern"));
    }

    #[test]
    fn empty_prefix_allowed_with_explicit_id() {
        let mut config = RangeInputConfig::default();
        config.id_prefix.clear();
        assert_eq!(config.validate().len(), 1);
        let config = config.with_id("trip");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn control_type_whitespace_rejected() {
        let config = RangeInputConfig {
            control_type: Some("date range".into()),
            ..RangeInputConfig::default()
        };
        assert_eq!(config.validate().len(), 1);
    }

    #[test]
    fn validation_error_display_joins() {
        let err = ConfigError::Validation(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "validation errors: a; b");
    }
}
