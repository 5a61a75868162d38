//! # varsniff-core
//!
//! Core framework for token-based naming checks.
//!
//! This crate provides the types shared by naming rules:
//!
//! - [`Token`] and [`TokenKind`] for the pre-tokenized input
//! - [`SymbolContext`] for host-side lookups, with [`StreamContext`] inferring
//!   them from the tokens alone
//! - [`Rule`] trait for per-file rules
//! - [`Diagnostic`] for reporting findings
//! - [`ReservedNameSet`] and the camel caps predicate in [`utils`]
//!
//! ## Example
//!
//! ```ignore
//! use varsniff_core::{Rule, StreamContext, Token};
//!
//! let ctx = StreamContext::analyze(&tokens);
//! for diagnostic in rule.check(&tokens, &ctx) {
//!     println!("{diagnostic}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod reserved;
mod rule;
mod token;
mod types;

/// Utility modules for rule implementations.
pub mod utils;

pub use config::{ConfigError, RuleConfig};
pub use context::{MemberProperties, NoSymbols, Scope, StreamContext, SymbolContext};
pub use reserved::{ReservedNameSet, PHP_RESERVED_VARS};
pub use rule::{Rule, RuleBox};
pub use token::{next_non_whitespace, prev_non_whitespace, Token, TokenKind};
pub use types::{Diagnostic, DiagnosticCode, Severity, VariableOccurrence};
