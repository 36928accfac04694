//! Diagnostic codes and the append-only diagnostic sink.
//!
//! The lexer never aborts on malformed input: every condition is recorded
//! as a `(code, span)` pair and scanning substitutes a best-effort value.
//! This crate defines those codes and the ordered sink that collects them.

mod code;
mod sink;

pub use code::{DiagCode, Severity};
pub use sink::{Diagnostic, Diagnostics};
