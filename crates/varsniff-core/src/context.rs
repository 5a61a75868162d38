//! Symbol context supplied alongside a token stream.
//!
//! Rules only see tokens. Anything that needs real parsing (is this variable a
//! property declaration, what is its visibility, what is the type called) is
//! answered through [`SymbolContext`], indexed by position in the token slice
//! being checked.

use crate::token::{next_non_whitespace, prev_non_whitespace, Token, TokenKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Visibility of a member property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// `public` (also `var` and implicit visibility).
    Public,
    /// `protected`.
    Protected,
    /// `private`.
    Private,
}

impl Scope {
    /// Lowercase keyword form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }

    /// Capitalized form used at the start of messages.
    #[must_use]
    pub fn capitalized(self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::Protected => "Protected",
            Self::Private => "Private",
        }
    }

    fn from_keyword(text: &str) -> Option<Self> {
        if text.eq_ignore_ascii_case("public") || text.eq_ignore_ascii_case("var") {
            Some(Self::Public)
        } else if text.eq_ignore_ascii_case("protected") {
            Some(Self::Protected)
        } else if text.eq_ignore_ascii_case("private") {
            Some(Self::Private)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved metadata for a member property declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberProperties {
    /// Declared visibility.
    pub scope: Scope,
}

/// Side-channel lookups a host provides next to the token stream.
pub trait SymbolContext {
    /// Returns true if the variable at `index` declares a class, interface or
    /// trait property.
    fn is_member_var(&self, index: usize) -> bool;

    /// Property metadata for the member variable at `index`.
    ///
    /// `None` means the declaration could not be resolved, which usually
    /// points at a parse error reported elsewhere.
    fn member_properties(&self, index: usize) -> Option<MemberProperties>;

    /// Name declared by the class, interface or trait keyword at `index`.
    ///
    /// `None` for anonymous classes.
    fn declaration_name(&self, index: usize) -> Option<String>;

    /// Index of the class, interface or trait keyword whose body declares the
    /// member variable at `index`.
    fn enclosing_type(&self, index: usize) -> Option<usize>;
}

impl<T: SymbolContext + ?Sized> SymbolContext for &T {
    fn is_member_var(&self, index: usize) -> bool {
        (**self).is_member_var(index)
    }

    fn member_properties(&self, index: usize) -> Option<MemberProperties> {
        (**self).member_properties(index)
    }

    fn declaration_name(&self, index: usize) -> Option<String> {
        (**self).declaration_name(index)
    }

    fn enclosing_type(&self, index: usize) -> Option<usize> {
        (**self).enclosing_type(index)
    }
}

/// A context that knows nothing: every variable is treated as local.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSymbols;

impl SymbolContext for NoSymbols {
    fn is_member_var(&self, _index: usize) -> bool {
        false
    }

    fn member_properties(&self, _index: usize) -> Option<MemberProperties> {
        None
    }

    fn declaration_name(&self, _index: usize) -> Option<String> {
        None
    }

    fn enclosing_type(&self, _index: usize) -> Option<usize> {
        None
    }
}

/// A context inferred from the token stream itself.
///
/// Braces and parentheses are read from [`TokenKind::Other`] tokens. A type
/// body is the first `{` after a class, interface or trait keyword; variables
/// directly inside it (not inside a method body or parameter list) are member
/// declarations owned by that keyword.
#[derive(Debug, Clone, Default)]
pub struct StreamContext {
    members: HashMap<usize, Member>,
    type_names: HashMap<usize, String>,
}

#[derive(Debug, Clone, Copy)]
struct Member {
    owner: usize,
    properties: Option<MemberProperties>,
}

enum Frame {
    Block { parens: usize },
    TypeBody { parens: usize, keyword: usize },
}

impl Frame {
    fn parens_mut(&mut self) -> &mut usize {
        match self {
            Self::Block { parens } | Self::TypeBody { parens, .. } => parens,
        }
    }
}

impl StreamContext {
    /// Indexes member declarations and type names in `tokens`.
    #[must_use]
    pub fn analyze(tokens: &[Token]) -> Self {
        let mut ctx = Self::default();
        let mut frames: Vec<Frame> = Vec::new();
        let mut pending_type: Option<usize> = None;

        for (index, token) in tokens.iter().enumerate() {
            match token.kind {
                kind if kind.is_type_keyword() => {
                    // `Foo::class` is a constant fetch, not a declaration.
                    let is_fetch = prev_non_whitespace(tokens, index)
                        .is_some_and(|p| tokens[p].kind == TokenKind::DoubleColon);
                    if is_fetch {
                        continue;
                    }
                    pending_type = Some(index);
                    if let Some(name) = declared_name(tokens, index) {
                        ctx.type_names.insert(index, name);
                    }
                }
                TokenKind::Other => match token.text.as_str() {
                    "{" => {
                        let frame = match pending_type.take() {
                            Some(keyword) => Frame::TypeBody { parens: 0, keyword },
                            None => Frame::Block { parens: 0 },
                        };
                        frames.push(frame);
                    }
                    "}" => {
                        frames.pop();
                    }
                    "(" => {
                        if let Some(frame) = frames.last_mut() {
                            *frame.parens_mut() += 1;
                        }
                    }
                    ")" => {
                        if let Some(frame) = frames.last_mut() {
                            let parens = frame.parens_mut();
                            *parens = parens.saturating_sub(1);
                        }
                    }
                    _ => {}
                },
                TokenKind::Variable => {
                    if let Some(&Frame::TypeBody { parens: 0, keyword }) = frames.last() {
                        let properties = statement_scope(tokens, index)
                            .map(|scope| MemberProperties { scope });
                        ctx.members.insert(
                            index,
                            Member {
                                owner: keyword,
                                properties,
                            },
                        );
                    }
                }
                _ => {}
            }
        }

        debug!(
            members = ctx.members.len(),
            types = ctx.type_names.len(),
            "indexed token stream"
        );
        ctx
    }
}

impl SymbolContext for StreamContext {
    fn is_member_var(&self, index: usize) -> bool {
        self.members.contains_key(&index)
    }

    fn member_properties(&self, index: usize) -> Option<MemberProperties> {
        self.members.get(&index).and_then(|member| member.properties)
    }

    fn declaration_name(&self, index: usize) -> Option<String> {
        self.type_names.get(&index).cloned()
    }

    fn enclosing_type(&self, index: usize) -> Option<usize> {
        self.members.get(&index).map(|member| member.owner)
    }
}

/// The identifier following a type keyword, if the type is named.
///
/// `new class extends Base` and `new class implements I` are anonymous.
fn declared_name(tokens: &[Token], keyword: usize) -> Option<String> {
    let next = &tokens[next_non_whitespace(tokens, keyword)?];
    let is_parent_clause = next.text.eq_ignore_ascii_case("extends")
        || next.text.eq_ignore_ascii_case("implements");
    if is_parent_clause {
        return None;
    }
    let is_identifier = next.kind == TokenKind::Other
        && next
            .text
            .chars()
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '\\');
    is_identifier.then(|| next.text.clone())
}

/// Visibility of the property statement containing `index`.
///
/// Looks back to the start of the statement. An explicit visibility keyword
/// wins; `static` or `readonly` alone imply public.
fn statement_scope(tokens: &[Token], index: usize) -> Option<Scope> {
    let mut implicit = false;
    for token in tokens[..index].iter().rev() {
        if token.is_other(";") || token.is_other("{") || token.is_other("}") {
            break;
        }
        if token.kind != TokenKind::Other {
            continue;
        }
        if let Some(scope) = Scope::from_keyword(&token.text) {
            return Some(scope);
        }
        if token.text.eq_ignore_ascii_case("static") || token.text.eq_ignore_ascii_case("readonly")
        {
            implicit = true;
        }
    }
    implicit.then_some(Scope::Public)
}
