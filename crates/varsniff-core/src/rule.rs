//! Rule trait for token-based naming rules.

use crate::context::SymbolContext;
use crate::token::Token;
use crate::types::{Diagnostic, Severity};

/// A per-file rule over a pre-tokenized source.
///
/// Rules receive the whole token slice of one file plus the host's
/// [`SymbolContext`] for that slice. They hold no per-file state, so a rule
/// can be shared across threads and called once per file.
///
/// # Example
///
/// ```
/// use varsniff_core::{
///     Diagnostic, NoSymbols, Rule, SymbolContext, Token, TokenKind, VariableOccurrence,
/// };
///
/// /// Flags variable variables such as `$$name`.
/// struct NoVariableVariables;
///
/// impl Rule for NoVariableVariables {
///     fn name(&self) -> &'static str { "no-variable-variables" }
///     fn code(&self) -> &'static str { "VS900" }
///
///     fn check(&self, tokens: &[Token], _ctx: &dyn SymbolContext) -> Vec<Diagnostic> {
///         tokens
///             .windows(2)
///             .filter(|pair| pair[0].is_other("$") && pair[1].kind == TokenKind::Variable)
///             .map(|pair| {
///                 Diagnostic::new(
///                     pair[1].position,
///                     self.default_severity(),
///                     VariableOccurrence::LocalVariable,
///                     self.name(),
///                     format!("Variable variable \"{}\" is not allowed", pair[1].text),
///                 )
///             })
///             .collect()
///     }
/// }
///
/// let tokens = Token::sequence([
///     (TokenKind::Other, "$"),
///     (TokenKind::Variable, "$handler"),
///     (TokenKind::Whitespace, " "),
///     (TokenKind::Variable, "$plain"),
/// ]);
/// let found = NoVariableVariables.check(&tokens, &NoSymbols);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].position, 1);
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "valid-variable-name").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "VS001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for diagnostics from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks one file's tokens and returns every diagnostic found, in
    /// token order.
    fn check(&self, tokens: &[Token], ctx: &dyn SymbolContext) -> Vec<Diagnostic>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::NoSymbols;
    use crate::token::TokenKind;
    use crate::types::VariableOccurrence;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, tokens: &[Token], _ctx: &dyn SymbolContext) -> Vec<Diagnostic> {
            tokens
                .iter()
                .filter(|t| t.kind == TokenKind::Variable)
                .map(|t| {
                    Diagnostic::new(
                        t.position,
                        self.default_severity(),
                        VariableOccurrence::LocalVariable,
                        self.name(),
                        "Test diagnostic",
                    )
                })
                .collect()
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule: RuleBox = Box::new(TestRule);
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);

        let tokens = Token::sequence([(TokenKind::Other, "echo"), (TokenKind::Variable, "$x")]);
        let found = rule.check(&tokens, &NoSymbols);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].position, 1);
    }
}
