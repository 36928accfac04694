//! Append-only diagnostic sink.
//!
//! The lexer reports every recoverable condition here and keeps going; the
//! sink never halts lexing and diagnostics have no identity beyond insertion
//! order. One sink per lexing session is the usual arrangement; a shared
//! sink across sessions needs external synchronization.

use crate::{DiagCode, Severity};
use std::fmt;
use vlog_ir::{SourceId, Span};

/// One recorded diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: DiagCode,
    pub source: SourceId,
    pub span: Span,
}

impl Diagnostic {
    #[inline]
    pub fn new(code: DiagCode, source: SourceId, span: Span) -> Self {
        Diagnostic { code, source, span }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] at {}:{}: {}",
            self.code.severity(),
            self.code.code(),
            self.source,
            self.span,
            self.code.message()
        )
    }
}

/// Ordered collection of diagnostics for one lexing session.
///
/// The sink carries the source buffer's identifier and stamps it onto
/// every record, so records from different sessions stay attributable
/// after merging.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    source: SourceId,
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::for_source(SourceId::UNKNOWN)
    }

    /// Sink attributing every record to `source`.
    pub fn for_source(source: SourceId) -> Self {
        Diagnostics {
            source,
            entries: Vec::new(),
        }
    }

    /// The source identifier stamped onto records.
    pub fn source(&self) -> SourceId {
        self.source
    }

    /// Append a diagnostic.
    #[inline]
    pub fn add(&mut self, code: DiagCode, span: Span) {
        self.entries.push(Diagnostic::new(code, self.source, span));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Returns `true` if any error-severity diagnostic was recorded.
    pub fn has_errors(&self) -> bool {
        self.entries
            .iter()
            .any(|d| d.code.severity() == Severity::Error)
    }

    /// The codes in insertion order; convenient for assertions.
    pub fn codes(&self) -> Vec<DiagCode> {
        self.entries.iter().map(|d| d.code).collect()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn insertion_order_is_preserved() {
        let mut sink = Diagnostics::new();
        sink.add(DiagCode::EmbeddedNull, Span::new(3, 4));
        sink.add(DiagCode::UnknownEscapeCode, Span::new(7, 9));
        assert_eq!(
            sink.codes(),
            vec![DiagCode::EmbeddedNull, DiagCode::UnknownEscapeCode]
        );
    }

    #[test]
    fn warnings_are_not_errors() {
        let mut sink = Diagnostics::new();
        sink.add(DiagCode::UnicodeBOM, Span::new(0, 3));
        assert!(!sink.has_errors());
        sink.add(DiagCode::MissingVectorBase, Span::new(4, 5));
        assert!(sink.has_errors());
    }

    #[test]
    fn display_includes_code_and_span() {
        let diag = Diagnostic::new(DiagCode::IntegerSizeZero, SourceId::new(2), Span::new(0, 1));
        let rendered = diag.to_string();
        assert!(rendered.contains("E0011"));
        assert!(rendered.contains("#2:0..1"));
    }

    #[test]
    fn records_carry_the_sink_source() {
        let mut sink = Diagnostics::for_source(SourceId::new(7));
        sink.add(DiagCode::EmbeddedNull, Span::point(5));
        assert_eq!(sink.as_slice()[0].source, SourceId::new(7));
        assert_eq!(Diagnostics::new().source(), SourceId::UNKNOWN);
    }
}
