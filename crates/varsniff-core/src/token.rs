//! Token model consumed by rules.
//!
//! Tokens are produced by an external tokenizer. Rules only look at the
//! handful of kinds that matter for naming checks; everything else is
//! [`TokenKind::Other`] and keeps its source text for context inference.

use serde::{Deserialize, Serialize};

/// Kind of a source token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// A `$name` variable.
    Variable,
    /// Spaces, tabs and newlines.
    Whitespace,
    /// The `->` object operator.
    ObjectOperator,
    /// The `::` scope resolution operator.
    DoubleColon,
    /// The `class` keyword.
    ClassKeyword,
    /// The `interface` keyword.
    InterfaceKeyword,
    /// The `trait` keyword.
    TraitKeyword,
    /// A string literal that may contain interpolated variables.
    StringLiteral,
    /// Any other token.
    Other,
}

impl TokenKind {
    /// Returns true for keywords that open a type declaration.
    #[must_use]
    pub fn is_type_keyword(self) -> bool {
        matches!(
            self,
            Self::ClassKeyword | Self::InterfaceKeyword | Self::TraitKeyword
        )
    }
}

/// A single token of a source file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,
    /// Raw source text.
    pub text: String,
    /// Position used when reporting diagnostics for this token.
    pub position: usize,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Builds a token stream from `(kind, text)` pairs.
    ///
    /// Each token's position is its index in the stream.
    ///
    /// # Example
    ///
    /// ```
    /// use varsniff_core::{Token, TokenKind};
    ///
    /// let tokens = Token::sequence([
    ///     (TokenKind::Variable, "$fooBar"),
    ///     (TokenKind::Other, ";"),
    /// ]);
    /// assert_eq!(tokens[1].position, 1);
    /// ```
    #[must_use]
    pub fn sequence<I, S>(pairs: I) -> Vec<Self>
    where
        I: IntoIterator<Item = (TokenKind, S)>,
        S: Into<String>,
    {
        pairs
            .into_iter()
            .enumerate()
            .map(|(position, (kind, text))| Self::new(kind, text, position))
            .collect()
    }

    /// Returns the token text without a leading `$` sigil.
    #[must_use]
    pub fn bare_name(&self) -> &str {
        self.text.trim_start_matches('$')
    }

    /// Returns true if this token is an `Other` token with exactly `text`.
    #[must_use]
    pub fn is_other(&self, text: &str) -> bool {
        self.kind == TokenKind::Other && self.text == text
    }
}

/// Finds the nearest token before `index` that is not whitespace.
#[must_use]
pub fn prev_non_whitespace(tokens: &[Token], index: usize) -> Option<usize> {
    tokens
        .get(..index)?
        .iter()
        .rposition(|t| t.kind != TokenKind::Whitespace)
}

/// Finds the nearest token after `index` that is not whitespace.
#[must_use]
pub fn next_non_whitespace(tokens: &[Token], index: usize) -> Option<usize> {
    tokens
        .iter()
        .enumerate()
        .skip(index + 1)
        .find(|(_, t)| t.kind != TokenKind::Whitespace)
        .map(|(i, _)| i)
}
