//! Configuration schema types for `navopts.toml`
//!
//! Defines the structure and validation rules for normalizer configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::schema::FieldKind;

/// Validation severity level for deprecation findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationLevel {
    /// Report as an error
    Error,
    /// Emit warning, continue
    Warn,
    /// Silently ignore
    Ignore,
}

impl Default for ValidationLevel {
    fn default() -> Self {
        Self::Warn
    }
}

/// Target platform of the native renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Ios,
    Android,
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            other => Err(format!("unknown platform '{}', expected ios or android", other)),
        }
    }
}

/// Walk settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Key whose value is handed to the renderer without being walked
    #[serde(default = "default_pass_through_key")]
    pub pass_through_key: String,
    /// Platform whose native color format is produced
    #[serde(default)]
    pub platform: Platform,
}

fn default_pass_through_key() -> String {
    "passProps".to_string()
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self { pass_through_key: default_pass_through_key(), platform: Platform::default() }
    }
}

/// Deprecation reporting settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeprecationsConfig {
    /// How deprecated option shapes are reported
    #[serde(default)]
    pub level: ValidationLevel,
    /// Report each distinct deprecation only once
    #[serde(default = "default_true")]
    pub once: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DeprecationsConfig {
    fn default() -> Self {
        Self { level: ValidationLevel::Warn, once: true }
    }
}

/// Component registration settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ComponentsConfig {
    /// Component names registered before any options are processed
    #[serde(default)]
    pub names: Vec<String>,
    /// Register unknown component names on first use instead of failing
    #[serde(default)]
    pub lazy_registration: bool,
}

/// Complete navopts.toml configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NormalizerConfig {
    #[serde(default, rename = "normalizer")]
    pub walk: WalkConfig,
    #[serde(default)]
    pub deprecations: DeprecationsConfig,
    #[serde(default)]
    pub components: ComponentsConfig,
    /// Per-key field kind overrides
    #[serde(default)]
    pub fields: HashMap<String, FieldKind>,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "normalizer.pass_through_key")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "navopts.toml: '{}' {}", self.field, self.message)
    }
}

impl NormalizerConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.walk.pass_through_key.trim().is_empty() {
            errors.push(ConfigValidationError {
                field: "normalizer.pass_through_key".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        }

        for key in self.fields.keys().filter(|k| k.trim().is_empty()) {
            errors.push(ConfigValidationError {
                field: format!("fields.{:?}", key),
                message: "override key must be non-empty".to_string(),
            });
        }

        for name in self.components.names.iter().filter(|n| n.trim().is_empty()) {
            errors.push(ConfigValidationError {
                field: "components.names".to_string(),
                message: format!("contains an empty component name ({:?})", name),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: NormalizerConfig = toml::from_str("").unwrap();
        assert_eq!(config.walk.pass_through_key, "passProps");
        assert_eq!(config.walk.platform, Platform::Ios);
        assert_eq!(config.deprecations.level, ValidationLevel::Warn);
        assert!(config.deprecations.once);
        assert!(!config.components.lazy_registration);
        assert!(config.fields.is_empty());
        assert!(config.is_valid());
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r#"
[normalizer]
pass_through_key = "nativeProps"
platform = "android"

[deprecations]
level = "error"
once = false

[components]
names = ["Home", "Settings"]
lazy_registration = true

[fields]
tintColour = "color"
backgroundColor = "plain"
"#;
        let config: NormalizerConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.walk.pass_through_key, "nativeProps");
        assert_eq!(config.walk.platform, Platform::Android);
        assert_eq!(config.deprecations.level, ValidationLevel::Error);
        assert!(!config.deprecations.once);
        assert_eq!(config.components.names, vec!["Home", "Settings"]);
        assert!(config.components.lazy_registration);
        assert_eq!(config.fields.get("tintColour"), Some(&FieldKind::Color));
        assert_eq!(config.fields.get("backgroundColor"), Some(&FieldKind::Plain));
    }

    #[test]
    fn test_validation_empty_pass_through_key() {
        let toml = r#"
[normalizer]
pass_through_key = ""
"#;
        let config: NormalizerConfig = toml::from_str(toml).unwrap();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "normalizer.pass_through_key");
    }

    #[test]
    fn test_validation_empty_component_name() {
        let mut config = NormalizerConfig::default();
        config.components.names.push(" ".to_string());
        assert!(!config.is_valid());
    }

    #[test]
    fn test_unknown_field_kind_rejected() {
        let toml = r#"
[fields]
tint = "gradient"
"#;
        assert!(toml::from_str::<NormalizerConfig>(toml).is_err());
    }

    #[test]
    fn test_platform_from_str() {
        assert_eq!("Android".parse::<Platform>(), Ok(Platform::Android));
        assert_eq!("ios".parse::<Platform>(), Ok(Platform::Ios));
        assert!("web".parse::<Platform>().is_err());
    }
}
