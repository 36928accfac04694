//! Low-level source-buffer machinery for the vlog lexer.
//!
//! Deliberately standalone: no dependencies on other `vlog_*` crates, so
//! external tooling (highlighters, formatters) can scan source text without
//! pulling in the compiler.
//!
//! The central idea is the sentinel-terminated buffer: the source bytes are
//! copied into a buffer padded with null bytes out to a cache-line boundary,
//! so the hot scanning loops never bounds-check. A null byte read at a
//! position before the source length is an *embedded* null (invalid input,
//! diagnosed by the lexer); at or past it, end-of-input.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::{Bom, BomKind, SourceBuffer};
