//! Diagnostic codes for lexical analysis.
//!
//! Every recoverable condition the lexer can report has one code here.
//! Codes are stable `E0xxx` identifiers for searchability; the variant name
//! describes the condition.

use std::fmt;

/// Severity of a diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Diagnostic codes emitted by the lexer.
///
/// None of these conditions halt lexing: the lexer substitutes a
/// best-effort value (zero, clamped magnitude, literal character, `Unknown`
/// token) and continues, so the token stream is always total.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagCode {
    /// UTF-8 or UTF-16 byte order mark at the start of the file.
    UnicodeBOM,
    /// Null byte before the true end of input.
    EmbeddedNull,
    /// Unprintable ASCII character outside any literal.
    NonPrintableChar,
    /// Non-ASCII UTF-8 sequence outside any literal.
    UTF8Char,
    /// Backslash followed by whitespace or end of input.
    EscapedWhitespace,
    /// Lone backtick with no directive name.
    MisplacedDirectiveChar,
    /// `.` in a real literal not followed by a digit.
    MissingFractionalDigits,
    /// `e`/`E` exponent marker with no digits.
    MissingExponentDigits,
    /// Real literal exponent produced a non-finite value.
    RealExponentTooLarge,
    /// Plain decimal literal exceeds `i32::MAX`.
    SignedLiteralTooLarge,
    /// Vector literal declared with size zero.
    IntegerSizeZero,
    /// Vector literal size exceeds `u32::MAX`.
    IntegerSizeTooLarge,
    /// Apostrophe not followed by a base letter.
    MissingVectorBase,
    /// Base letter not followed by any valid digit.
    MissingVectorDigits,
    /// `'` not followed by a base letter or single-bit shorthand digit.
    InvalidUnsizedLiteral,
    /// Three-digit octal escape exceeds 255.
    OctalEscapeCodeTooBig,
    /// `\x` not followed by a hex digit.
    InvalidHexEscapeCode,
    /// Escape character with no defined meaning.
    UnknownEscapeCode,
    /// Unescaped newline inside a string literal.
    NewlineInStringLiteral,
    /// End of input inside a string literal.
    UnterminatedStringLiteral,
    /// End of input inside a block comment.
    UnterminatedBlockComment,
    /// `/*` inside a block comment.
    NestedBlockComment,
    /// Block comment spanning a newline while lexing a directive.
    SplitBlockCommentInDirective,
}

impl DiagCode {
    /// Stable display code.
    pub fn code(self) -> &'static str {
        match self {
            DiagCode::UnicodeBOM => "E0001",
            DiagCode::EmbeddedNull => "E0002",
            DiagCode::NonPrintableChar => "E0003",
            DiagCode::UTF8Char => "E0004",
            DiagCode::EscapedWhitespace => "E0005",
            DiagCode::MisplacedDirectiveChar => "E0006",
            DiagCode::MissingFractionalDigits => "E0007",
            DiagCode::MissingExponentDigits => "E0008",
            DiagCode::RealExponentTooLarge => "E0009",
            DiagCode::SignedLiteralTooLarge => "E0010",
            DiagCode::IntegerSizeZero => "E0011",
            DiagCode::IntegerSizeTooLarge => "E0012",
            DiagCode::MissingVectorBase => "E0013",
            DiagCode::MissingVectorDigits => "E0014",
            DiagCode::InvalidUnsizedLiteral => "E0015",
            DiagCode::OctalEscapeCodeTooBig => "E0016",
            DiagCode::InvalidHexEscapeCode => "E0017",
            DiagCode::UnknownEscapeCode => "E0018",
            DiagCode::NewlineInStringLiteral => "E0019",
            DiagCode::UnterminatedStringLiteral => "E0020",
            DiagCode::UnterminatedBlockComment => "E0021",
            DiagCode::NestedBlockComment => "E0022",
            DiagCode::SplitBlockCommentInDirective => "E0023",
        }
    }

    /// Short human-readable message.
    pub fn message(self) -> &'static str {
        match self {
            DiagCode::UnicodeBOM => "byte order mark at start of file",
            DiagCode::EmbeddedNull => "embedded NUL byte in source text",
            DiagCode::NonPrintableChar => "non-printable character in source text",
            DiagCode::UTF8Char => "UTF-8 character outside of string literal or comment",
            DiagCode::EscapedWhitespace => "escaped identifier cannot start with whitespace",
            DiagCode::MisplacedDirectiveChar => "expected directive name after backtick",
            DiagCode::MissingFractionalDigits => "expected digits after decimal point",
            DiagCode::MissingExponentDigits => "expected digits after exponent marker",
            DiagCode::RealExponentTooLarge => "real literal exponent is too large",
            DiagCode::SignedLiteralTooLarge => {
                "signed integer literal is too large; truncated to 2147483647"
            }
            DiagCode::IntegerSizeZero => "vector literal size cannot be zero",
            DiagCode::IntegerSizeTooLarge => "vector literal size is too large",
            DiagCode::MissingVectorBase => "expected base specifier in vector literal",
            DiagCode::MissingVectorDigits => "expected digits in vector literal",
            DiagCode::InvalidUnsizedLiteral => "invalid unsized literal",
            DiagCode::OctalEscapeCodeTooBig => "octal escape code does not fit in a byte",
            DiagCode::InvalidHexEscapeCode => "expected hex digit after \\x escape",
            DiagCode::UnknownEscapeCode => "unknown character escape code",
            DiagCode::NewlineInStringLiteral => "unescaped newline inside string literal",
            DiagCode::UnterminatedStringLiteral => "unterminated string literal",
            DiagCode::UnterminatedBlockComment => "unterminated block comment",
            DiagCode::NestedBlockComment => "nested block comments are not allowed",
            DiagCode::SplitBlockCommentInDirective => {
                "block comment cannot span a newline inside a directive"
            }
        }
    }

    /// Severity of this code.
    ///
    /// A BOM is skipped and lexing proceeds as if it were absent, so it is
    /// a warning; everything else is an error.
    pub fn severity(self) -> Severity {
        match self {
            DiagCode::UnicodeBOM => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for DiagCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
