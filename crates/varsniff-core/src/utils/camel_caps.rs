//! Camel caps predicate shared by naming rules.
//!
//! The rules are:
//!
//! - method/variable format starts with a lowercase ASCII letter, class
//!   format with an uppercase one;
//! - a non-public name must start with a single `_` before that letter;
//! - every character after the first must be `[A-Za-z0-9]`;
//! - strict mode forbids two capitals in a row (digits are not capitals).
//!
//! Without strict mode an acronym run (`[A-Z]{2,}`) is also accepted as the
//! start of a non-class name, so `XMLParser` passes but `XmlParser` does not.

/// Options for [`CamelCaps::matches`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CamelCaps {
    /// Expect `ClassName` style instead of `methodName` style.
    pub class_format: bool,
    /// Public names carry no leading underscore; non-public names require one.
    pub public: bool,
    /// Reject consecutive capitals.
    pub strict: bool,
}

impl Default for CamelCaps {
    fn default() -> Self {
        Self {
            class_format: false,
            public: true,
            strict: true,
        }
    }
}

impl CamelCaps {
    /// Returns true if `name` is valid camel caps under these options.
    #[must_use]
    pub fn matches(self, name: &str) -> bool {
        let bytes = name.as_bytes();
        let Some((_, rest)) = bytes.split_first() else {
            return false;
        };

        if !self.legal_start(bytes) {
            return false;
        }

        if !rest.iter().all(u8::is_ascii_alphanumeric) {
            return false;
        }

        if self.strict {
            let mut last_was_caps = self.class_format;
            for c in rest {
                let is_caps = c.is_ascii_uppercase();
                if is_caps && last_was_caps {
                    return false;
                }
                last_was_caps = is_caps;
            }
        }

        true
    }

    fn legal_start(self, bytes: &[u8]) -> bool {
        if self.class_format {
            return bytes.first().is_some_and(u8::is_ascii_uppercase);
        }

        let body = if self.public {
            bytes
        } else {
            match bytes.split_first() {
                Some((b'_', body)) => body,
                _ => return false,
            }
        };

        match body {
            [first, ..] if first.is_ascii_lowercase() => true,
            [a, b, ..] if !self.strict => a.is_ascii_uppercase() && b.is_ascii_uppercase(),
            _ => false,
        }
    }
}

/// Default variable check: public, non-class, strict.
#[must_use]
pub fn is_camel_case(name: &str) -> bool {
    CamelCaps::default().matches(name)
}
