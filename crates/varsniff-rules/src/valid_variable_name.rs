//! Rule requiring camelCase variable names.
//!
//! # Checks
//!
//! - Local variables: `$foo_bar` → `NotCamelCase`. Property and static
//!   access (`$obj->foo_bar`, `Foo::$foo_bar`) is skipped because the
//!   declaration is checked instead.
//! - Member declarations: `private $foo_bar;` in `class Foo` →
//!   `MemberNotCamelCase` for `Foo::foo_bar`. Declarations whose metadata the
//!   context cannot resolve are skipped silently. Members of anonymous
//!   classes are reported as `class@anonymous::foo_bar`.
//! - Interpolated variables: `"$foo_bar"` → `StringNotCamelCase`, reported on
//!   the string token. `->` and `::` access inside the string is skipped.
//!
//! Reserved names (superglobals by default) are never reported.
//!
//! # Configuration
//!
//! - `allow_leading_underscore`: accept `$_foo` (default: false)
//! - `strict`: reject consecutive capitals like `$fooBAR` (default: true)
//! - `reserved_names`: extra exempt names
//! - `check_strings` / `check_members`: toggle the string and member checks

use crate::interpolation::{Interpolation, Interpolations};
use tracing::{debug, trace};
use varsniff_core::utils::CamelCaps;
use varsniff_core::{
    prev_non_whitespace, ConfigError, Diagnostic, ReservedNameSet, Rule, RuleConfig, Severity,
    StreamContext, SymbolContext, Token, TokenKind, VariableOccurrence,
};

/// Rule code for valid-variable-name.
pub const CODE: &str = "VS001";

/// Rule name for valid-variable-name.
pub const NAME: &str = "valid-variable-name";

/// Type name reported for members of `new class { ... }`.
const ANONYMOUS_CLASS: &str = "class@anonymous";

/// Requires variables, member properties and interpolated variables to be
/// camelCase.
#[derive(Debug, Clone)]
pub struct ValidVariableName {
    reserved: ReservedNameSet,
    allow_leading_underscore: bool,
    strict: bool,
    check_strings: bool,
    check_members: bool,
    severity: Severity,
}

impl Default for ValidVariableName {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidVariableName {
    /// Creates a new rule with the PHP reserved variables and strict checks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            reserved: ReservedNameSet::php(),
            allow_leading_underscore: false,
            strict: true,
            check_strings: true,
            check_members: true,
            severity: Severity::Error,
        }
    }

    /// Builds the rule from a [`RuleConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if a configured reserved name is invalid.
    pub fn from_config(config: &RuleConfig) -> Result<Self, ConfigError> {
        let reserved = ReservedNameSet::php().extended(config.reserved_names.iter().cloned())?;
        Ok(Self {
            reserved,
            allow_leading_underscore: config.allow_leading_underscore,
            strict: config.strict,
            check_strings: config.check_strings,
            check_members: config.check_members,
            severity: config.severity.unwrap_or(Severity::Error),
        })
    }

    /// Replaces the reserved name set.
    #[must_use]
    pub fn reserved_names(mut self, reserved: ReservedNameSet) -> Self {
        self.reserved = reserved;
        self
    }

    /// Sets whether a single leading underscore is accepted.
    #[must_use]
    pub fn allow_leading_underscore(mut self, allow: bool) -> Self {
        self.allow_leading_underscore = allow;
        self
    }

    /// Sets whether consecutive capitals are rejected.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets whether string literals are scanned for variables.
    #[must_use]
    pub fn check_strings(mut self, check: bool) -> Self {
        self.check_strings = check;
        self
    }

    /// Sets whether member declarations are checked.
    #[must_use]
    pub fn check_members(mut self, check: bool) -> Self {
        self.check_members = check;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Returns true if `name` (without sigil) passes this rule's naming check.
    #[must_use]
    pub fn is_valid_name(&self, name: &str) -> bool {
        let caps = CamelCaps {
            class_format: false,
            public: !(self.allow_leading_underscore && name.starts_with('_')),
            strict: self.strict,
        };
        caps.matches(name)
    }

    /// Lazily checks `tokens`, yielding diagnostics in token order.
    ///
    /// The scan holds no state beyond its cursor; calling it again on the
    /// same tokens yields the same sequence.
    pub fn scan<'a, C: SymbolContext>(&'a self, tokens: &'a [Token], ctx: C) -> Scan<'a, C> {
        Scan {
            rule: self,
            tokens,
            ctx,
            index: 0,
            pending: None,
        }
    }

    /// Checks `tokens` using a context inferred from the tokens themselves.
    #[must_use]
    pub fn check_tokens(&self, tokens: &[Token]) -> Vec<Diagnostic> {
        let ctx = StreamContext::analyze(tokens);
        self.scan(tokens, &ctx).collect()
    }

    fn check_variable(
        &self,
        tokens: &[Token],
        index: usize,
        ctx: &impl SymbolContext,
    ) -> Option<Diagnostic> {
        if ctx.is_member_var(index) {
            if self.check_members {
                return self.check_member(tokens, index, ctx);
            }
            return None;
        }
        self.check_local(tokens, index)
    }

    fn check_local(&self, tokens: &[Token], index: usize) -> Option<Diagnostic> {
        let token = &tokens[index];
        let name = token.bare_name();

        if self.reserved.contains(name) {
            trace!(position = token.position, name, "reserved variable");
            return None;
        }

        if let Some(prev) = prev_non_whitespace(tokens, index) {
            if matches!(
                tokens[prev].kind,
                TokenKind::DoubleColon | TokenKind::ObjectOperator
            ) {
                trace!(position = token.position, name, "property access");
                return None;
            }
        }

        if self.is_valid_name(name) {
            return None;
        }

        debug!(position = token.position, name, "variable is not camelCase");
        Some(
            self.diagnostic(
                token.position,
                VariableOccurrence::LocalVariable,
                format!("Variable \"{name}\" is not in valid camelCase format"),
            )
            .with_data([name]),
        )
    }

    fn check_member(
        &self,
        tokens: &[Token],
        index: usize,
        ctx: &impl SymbolContext,
    ) -> Option<Diagnostic> {
        let token = &tokens[index];
        let name = token.bare_name();

        let Some(properties) = ctx.member_properties(index) else {
            debug!(
                position = token.position,
                name, "member properties unresolved, skipping"
            );
            return None;
        };

        let Some(keyword) = ctx.enclosing_type(index) else {
            debug!(
                position = token.position,
                name, "no enclosing type declaration, skipping"
            );
            return None;
        };
        let type_name = ctx
            .declaration_name(keyword)
            .unwrap_or_else(|| ANONYMOUS_CLASS.to_string());

        if self.reserved.contains(name) {
            trace!(position = token.position, name, "reserved member name");
            return None;
        }

        if self.is_valid_name(name) {
            return None;
        }

        let qualified = format!("{type_name}::{name}");
        let scope = properties.scope.capitalized();
        debug!(position = token.position, member = %qualified, "member is not camelCase");
        Some(
            self.diagnostic(
                token.position,
                VariableOccurrence::MemberProperty,
                format!("{scope} member variable \"{qualified}\" is not in valid camel caps format"),
            )
            .with_data([scope.to_string(), qualified]),
        )
    }

    fn check_interpolation(&self, position: usize, found: &Interpolation<'_>) -> Option<Diagnostic> {
        let name = found.name;

        if self.reserved.contains(name) {
            trace!(position, name, "reserved variable in string");
            return None;
        }

        if found.property_access {
            trace!(position, name, "property access in string");
            return None;
        }

        if self.is_valid_name(name) {
            return None;
        }

        debug!(position, name, "variable in string is not camelCase");
        Some(
            self.diagnostic(
                position,
                VariableOccurrence::InterpolatedVariable,
                format!("Variable in string \"{name}\" is not in valid camel caps format"),
            )
            .with_data([name]),
        )
    }

    fn diagnostic(
        &self,
        position: usize,
        occurrence: VariableOccurrence,
        message: String,
    ) -> Diagnostic {
        Diagnostic::new(position, self.severity, occurrence, NAME, message)
    }
}

impl Rule for ValidVariableName {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires variable and member property names to be camelCase"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, tokens: &[Token], ctx: &dyn SymbolContext) -> Vec<Diagnostic> {
        self.scan(tokens, ctx).collect()
    }
}

/// Lazy diagnostic sequence returned by [`ValidVariableName::scan`].
#[derive(Debug)]
pub struct Scan<'a, C> {
    rule: &'a ValidVariableName,
    tokens: &'a [Token],
    ctx: C,
    index: usize,
    pending: Option<(usize, Interpolations<'a>)>,
}

impl<C: SymbolContext> Iterator for Scan<'_, C> {
    type Item = Diagnostic;

    fn next(&mut self) -> Option<Diagnostic> {
        loop {
            if let Some((position, mut matches)) = self.pending.take() {
                let rule = self.rule;
                if let Some(diagnostic) =
                    matches.find_map(|found| rule.check_interpolation(position, &found))
                {
                    self.pending = Some((position, matches));
                    return Some(diagnostic);
                }
            }

            let tokens = self.tokens;
            let index = self.index;
            let token = tokens.get(index)?;
            self.index += 1;

            match token.kind {
                TokenKind::Variable => {
                    if let Some(diagnostic) = self.rule.check_variable(tokens, index, &self.ctx) {
                        return Some(diagnostic);
                    }
                }
                TokenKind::StringLiteral if self.rule.check_strings => {
                    self.pending = Some((token.position, Interpolations::new(&token.text)));
                }
                _ => {}
            }
        }
    }
}
