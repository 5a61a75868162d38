//! Variable names exempt from naming checks.

use crate::config::ConfigError;
use std::collections::BTreeSet;

/// Superglobals and engine-provided variables.
pub const PHP_RESERVED_VARS: &[&str] = &[
    "_SERVER",
    "_GET",
    "_POST",
    "_REQUEST",
    "_SESSION",
    "_ENV",
    "_COOKIE",
    "_FILES",
    "GLOBALS",
    "http_response_header",
    "HTTP_RAW_POST_DATA",
    "php_errormsg",
];

/// An immutable set of reserved variable names.
///
/// Names are stored without the `$` sigil and matched exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReservedNameSet {
    names: BTreeSet<String>,
}

impl ReservedNameSet {
    /// Creates an empty set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in PHP reserved variables.
    #[must_use]
    pub fn php() -> Self {
        Self {
            names: PHP_RESERVED_VARS.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Builds a set from user-supplied names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidReservedName`] for an empty name or a
    /// name that still carries its `$` sigil.
    pub fn try_from_names<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::empty().extended(names)
    }

    /// Returns a copy of this set with `names` added.
    ///
    /// # Errors
    ///
    /// Same validation as [`ReservedNameSet::try_from_names`].
    pub fn extended<I, S>(mut self, names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if name.is_empty() {
                return Err(ConfigError::InvalidReservedName {
                    name,
                    reason: "must not be empty",
                });
            }
            if name.starts_with('$') {
                return Err(ConfigError::InvalidReservedName {
                    name,
                    reason: "must not include the `$` sigil",
                });
            }
            self.names.insert(name);
        }
        Ok(self)
    }

    /// Returns true if `name` is reserved.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterates over the reserved names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of reserved names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no names are reserved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
