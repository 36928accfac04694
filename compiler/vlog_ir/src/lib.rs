//! Shared front-end types for the vlog compiler.
//!
//! This crate contains the data structures that flow between the lexer and
//! its consumers:
//! - [`Span`] for source locations
//! - [`Name`] and [`StringInterner`] for interned identifier/string text
//! - [`LogicBit`] and [`LogicVector`] for four-valued literal values
//! - [`Token`], [`TokenPayload`], [`Trivia`], and [`TokenList`] for lexer
//!   output
//!
//! # Design
//!
//! - **Intern everything**: strings become `Name(u32)`; lookups are O(1).
//! - **Spans, not copies**: raw lexeme text is always re-derived from the
//!   source buffer through a span.
//! - Floats are stored as `u64` bits so every type is `Eq + Hash`.

mod interner;
mod logic;
mod name;
mod span;
mod token;

pub use interner::{InternError, StringInterner};
pub use logic::{LogicBit, LogicVector};
pub use name::Name;
pub use span::{SourceId, Span, SpanError};
pub use token::{
    DirectiveKind, IdentifierType, NumericValue, Token, TokenKind, TokenList, TokenPayload,
    Trivia, TriviaKind,
};
