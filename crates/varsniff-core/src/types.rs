//! Core types for naming diagnostics.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Identifies which naming check produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticCode {
    /// A local variable is not camelCase.
    NotCamelCase,
    /// A class, interface or trait property declaration is not camelCase.
    MemberNotCamelCase,
    /// A variable interpolated in a string is not camelCase.
    StringNotCamelCase,
}

impl DiagnosticCode {
    /// Returns the code as it appears in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotCamelCase => "NotCamelCase",
            Self::MemberNotCamelCase => "MemberNotCamelCase",
            Self::StringNotCamelCase => "StringNotCamelCase",
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagnosticCode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NotCamelCase" => Ok(Self::NotCamelCase),
            "MemberNotCamelCase" => Ok(Self::MemberNotCamelCase),
            "StringNotCamelCase" => Ok(Self::StringNotCamelCase),
            other => Err(ConfigError::UnknownCode(other.to_string())),
        }
    }
}

/// How a variable occurrence was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableOccurrence {
    /// A plain variable in code.
    LocalVariable,
    /// A property declared on a class, interface or trait.
    MemberProperty,
    /// A variable embedded in a string literal.
    InterpolatedVariable,
}

impl VariableOccurrence {
    /// Returns the diagnostic code reported for this kind of occurrence.
    #[must_use]
    pub fn code(self) -> DiagnosticCode {
        match self {
            Self::LocalVariable => DiagnosticCode::NotCamelCase,
            Self::MemberProperty => DiagnosticCode::MemberNotCamelCase,
            Self::InterpolatedVariable => DiagnosticCode::StringNotCamelCase,
        }
    }
}

/// A naming violation found in a token stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Position of the offending token.
    pub position: usize,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Which check fired.
    pub code: DiagnosticCode,
    /// Name of the rule that produced it.
    pub rule: String,
    /// Classification of the offending occurrence.
    pub occurrence: VariableOccurrence,
    /// Human-readable message.
    pub message: String,
    /// Arguments the message was formatted with, in order.
    pub data: Vec<String>,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(
        position: usize,
        severity: Severity,
        occurrence: VariableOccurrence,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            position,
            severity,
            code: occurrence.code(),
            rule: rule.into(),
            occurrence,
            message: message.into(),
            data: Vec::new(),
        }
    }

    /// Attaches the message arguments.
    #[must_use]
    pub fn with_data<I, S>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data = data.into_iter().map(Into::into).collect();
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} [{}.{}] {}",
            self.position, self.severity, self.rule, self.code, self.message
        )
    }
}
