//! Configuration types for naming rules.
//!
//! The host owns the configuration format; these types only derive serde
//! so any format can be deserialized into them.

use serde::{Deserialize, Serialize};

/// Per-rule configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<crate::Severity>,

    /// Accept a single leading underscore (`$_private`).
    #[serde(default)]
    pub allow_leading_underscore: bool,

    /// Reject runs of two or more capitals (`$fooBAR`).
    #[serde(default = "default_true")]
    pub strict: bool,

    /// Names exempt from checking in addition to the built-in set.
    #[serde(default)]
    pub reserved_names: Vec<String>,

    /// Check variables interpolated into string literals.
    #[serde(default = "default_true")]
    pub check_strings: bool,

    /// Check class, interface and trait property declarations.
    #[serde(default = "default_true")]
    pub check_members: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: None,
            allow_leading_underscore: false,
            strict: true,
            reserved_names: Vec::new(),
            check_strings: true,
            check_members: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A reserved name cannot be matched against any variable.
    #[error("Invalid reserved name {name:?}: {reason}")]
    InvalidReservedName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Unknown diagnostic code.
    #[error("Unknown diagnostic code: {0}")]
    UnknownCode(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;

    #[test]
    fn test_default_config() {
        let config = RuleConfig::default();
        assert!(config.enabled);
        assert!(config.strict);
        assert!(!config.allow_leading_underscore);
        assert!(config.reserved_names.is_empty());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: RuleConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RuleConfig::default());
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "severity": "warning",
            "allow_leading_underscore": true,
            "reserved_names": ["wpdb"],
            "check_strings": false
        }"#;
        let config: RuleConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.severity, Some(Severity::Warning));
        assert!(config.allow_leading_underscore);
        assert_eq!(config.reserved_names, vec!["wpdb".to_string()]);
        assert!(!config.check_strings);
        assert!(config.check_members);
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::InvalidReservedName {
            name: "$x".into(),
            reason: "must not include the `$` sigil",
        };
        assert_eq!(
            err.to_string(),
            "Invalid reserved name \"$x\": must not include the `$` sigil"
        );
    }
}
