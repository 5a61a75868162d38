//! # varsniff-rules
//!
//! Naming rules for varsniff.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | VS001 | `valid-variable-name` | Requires camelCase variables, member properties and interpolated variables |
//!
//! ## Usage
//!
//! ```
//! use varsniff_rules::ValidVariableName;
//! use varsniff_core::{StreamContext, Token, TokenKind};
//!
//! let tokens = Token::sequence([
//!     (TokenKind::Variable, "$user_name"),
//!     (TokenKind::Other, "="),
//!     (TokenKind::StringLiteral, "\"hello $first_name\""),
//! ]);
//! let ctx = StreamContext::analyze(&tokens);
//! let rule = ValidVariableName::new();
//!
//! let codes: Vec<_> = rule.scan(&tokens, &ctx).map(|d| d.code.as_str()).collect();
//! assert_eq!(codes, ["NotCamelCase", "StringNotCamelCase"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// String interpolation scanning.
pub mod interpolation;
mod valid_variable_name;

pub use valid_variable_name::{Scan, ValidVariableName, CODE, NAME};

/// Re-export core types for convenience.
pub use varsniff_core::{Rule, RuleBox, RuleConfig, Severity};

use varsniff_core::ConfigError;

/// Builds the rules enabled by `config`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn rules_from_config(config: &RuleConfig) -> Result<Vec<RuleBox>, ConfigError> {
    if !config.enabled {
        return Ok(Vec::new());
    }
    Ok(vec![Box::new(ValidVariableName::from_config(config)?)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_config_builds_no_rules() {
        let config = RuleConfig {
            enabled: false,
            ..RuleConfig::default()
        };
        assert!(rules_from_config(&config).unwrap().is_empty());
    }

    #[test]
    fn default_config_builds_valid_variable_name() {
        let rules = rules_from_config(&RuleConfig::default()).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].name(), NAME);
    }
}
