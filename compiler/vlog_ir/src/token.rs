//! Token types for the vlog lexer.
//!
//! A [`Token`] is a kind, a span, the trivia (whitespace, comments, line
//! terminators) that preceded it, and an optional kind-dependent payload.
//! Payloads are a tagged variant over the four shapes the lexer produces:
//! identifier, string, numeric, and directive. Concatenating every token's
//! trivia text and lexeme text in stream order reproduces the source buffer
//! byte for byte.

use super::{LogicBit, LogicVector, Name, Span};
use std::fmt;

/// Non-semantic source text attached to the following token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TriviaKind {
    /// Run of horizontal whitespace (space, tab, vertical tab, form feed).
    /// Also covers swallowed line continuations inside directives.
    Whitespace,
    /// `// ...` to end of line (newline not included).
    LineComment,
    /// `/* ... */` including the delimiters.
    BlockComment,
    /// LF, CR, or CRLF.
    EndOfLine,
}

/// One piece of trivia with its source range.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Trivia {
    pub kind: TriviaKind,
    pub span: Span,
}

impl Trivia {
    #[inline]
    pub fn new(kind: TriviaKind, span: Span) -> Self {
        Trivia { kind, span }
    }
}

/// How an identifier token was written in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum IdentifierType {
    /// Could not be classified (error recovery produced this token).
    Unknown,
    /// Plain identifier.
    Normal,
    /// `\`-escaped identifier (backslash and trailing separator excluded
    /// from the interned text's meaning but included in the lexeme).
    Escaped,
    /// `$`-prefixed system identifier or system task/function name.
    System,
}

/// Classification of a backtick directive name.
///
/// Names not in the fixed directive table are macro usages.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DirectiveKind {
    Include,
    Define,
    IfDef,
    IfNDef,
    ElsIf,
    Else,
    EndIf,
    Undef,
    UndefineAll,
    ResetAll,
    Timescale,
    DefaultNetType,
    Line,
    CellDefine,
    EndCellDefine,
    Pragma,
    UnconnectedDrive,
    NoUnconnectedDrive,
    BeginKeywords,
    EndKeywords,
    /// Usage of a user-defined macro; expanded by the preprocessor.
    MacroUsage,
}

/// Decoded value of a numeric literal.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum NumericValue {
    /// Plain decimal integer, clamped to `i32::MAX` on overflow.
    Integer(i32),
    /// Sized or unsized based vector literal.
    Vector(LogicVector),
    /// Real literal; stored as bits for `Eq`/`Hash`.
    Real(u64),
    /// Unsized single-bit shorthand: `'0`, `'1`, `'x`, `'z`.
    Bit(LogicBit),
}

impl NumericValue {
    /// Wrap an `f64` real value.
    #[inline]
    pub fn real(value: f64) -> Self {
        NumericValue::Real(value.to_bits())
    }

    /// The real value, if this is a real literal.
    #[inline]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            NumericValue::Real(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }
}

/// Kind-dependent token payload.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenPayload {
    /// Identifier text plus classification.
    Ident { name: Name, id_type: IdentifierType },
    /// Decoded (escape-processed) string literal contents.
    Str { value: Name },
    /// Decoded numeric value.
    Num(NumericValue),
    /// Directive name and its table classification.
    Directive { name: Name, kind: DirectiveKind },
}

/// Token kinds.
///
/// Literal/identifier/directive kinds carry their data in the token's
/// payload field, not here; punctuation kinds are pure tags. The
/// multi-character operators follow maximal munch.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Classification failed; diagnostics explain why.
    Unknown,
    /// Terminal token; always last in the stream.
    EndOfFile,

    Identifier,
    SystemIdentifier,
    StringLiteral,
    IntegerLiteral,
    RealLiteral,
    Directive,
    MacroUsage,

    // Macro quoting
    MacroQuote,        // `"
    MacroPaste,        // ``
    MacroEscapedQuote, // `\`"

    // Punctuation
    ApostropheOpenBrace, // '{
    OpenBrace,           // {
    CloseBrace,          // }
    OpenBracket,         // [
    CloseBracket,        // ]
    OpenParenthesis,     // (
    OpenParenthesisStar, // (*
    CloseParenthesis,    // )
    StarCloseParenthesis, // *)
    Semicolon,
    Colon,
    ColonEquals, // :=
    ColonSlash,  // :/
    DoubleColon, // ::
    Comma,
    Dot,
    DotStar, // .*

    // Operators
    Exclamation,
    ExclamationEquals,         // !=
    ExclamationDoubleEquals,   // !==
    ExclamationEqualsQuestion, // !=?
    Hash,
    DoubleHash,     // ##
    HashMinusHash,  // #-#
    HashEqualsHash, // #=#
    Dollar,
    Percent,
    PercentEqual, // %=
    And,
    DoubleAnd, // &&
    TripleAnd, // &&&
    AndEqual,  // &=
    Star,
    DoubleStar,         // **
    StarEqual,          // *=
    StarArrow,          // *>
    StarDoubleColonStar, // *::*
    Plus,
    DoublePlus, // ++
    PlusEqual,  // +=
    PlusColon,  // +:
    Minus,
    DoubleMinus,      // --
    MinusEqual,       // -=
    MinusColon,       // -:
    MinusArrow,       // ->
    MinusDoubleArrow, // ->>
    Slash,
    SlashEqual, // /=
    LessThan,
    LessThanEquals,       // <=
    LessThanMinusArrow,   // <->
    LeftShift,            // <<
    LeftShiftEqual,       // <<=
    TripleLeftShift,      // <<<
    TripleLeftShiftEqual, // <<<=
    Equals,
    DoubleEquals,         // ==
    TripleEquals,         // ===
    DoubleEqualsQuestion, // ==?
    EqualsArrow,          // =>
    GreaterThan,
    GreaterThanEquals,     // >=
    RightShift,            // >>
    RightShiftEqual,       // >>=
    TripleRightShift,      // >>>
    TripleRightShiftEqual, // >>>=
    Question,
    At,
    DoubleAt, // @@
    Xor,
    XorTilde, // ^~
    XorEqual, // ^=
    Or,
    DoubleOr,      // ||
    OrEqual,       // |=
    OrMinusArrow,  // |->
    OrEqualsArrow, // |=>
    Tilde,
    TildeAnd, // ~&
    TildeOr,  // ~|
    TildeXor, // ~^
}

/// A lexed token with its attached trivia and optional payload.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub trivia: Vec<Trivia>,
    pub payload: Option<TokenPayload>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span, trivia: Vec<Trivia>) -> Self {
        Token {
            kind,
            span,
            trivia,
            payload: None,
        }
    }

    #[inline]
    pub fn with_payload(
        kind: TokenKind,
        span: Span,
        trivia: Vec<Trivia>,
        payload: TokenPayload,
    ) -> Self {
        Token {
            kind,
            span,
            trivia,
            payload: Some(payload),
        }
    }

    /// The identifier payload, if present.
    pub fn ident(&self) -> Option<(Name, IdentifierType)> {
        match self.payload {
            Some(TokenPayload::Ident { name, id_type }) => Some((name, id_type)),
            _ => None,
        }
    }

    /// The decoded string value, if this is a string literal.
    pub fn string_value(&self) -> Option<Name> {
        match self.payload {
            Some(TokenPayload::Str { value }) => Some(value),
            _ => None,
        }
    }

    /// The numeric value, if this is a numeric literal.
    pub fn numeric(&self) -> Option<&NumericValue> {
        match &self.payload {
            Some(TokenPayload::Num(value)) => Some(value),
            _ => None,
        }
    }

    /// The directive payload, if present.
    pub fn directive(&self) -> Option<(Name, DirectiveKind)> {
        match self.payload {
            Some(TokenPayload::Directive { name, kind }) => Some((name, kind)),
            _ => None,
        }
    }

    /// Source range covered by this token's trivia plus its lexeme.
    pub fn full_span(&self) -> Span {
        self.trivia
            .first()
            .map_or(self.span, |t| t.span.merge(self.span))
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)?;
        if let Some(payload) = &self.payload {
            write!(f, " {payload:?}")?;
        }
        Ok(())
    }
}

/// Ordered token stream produced by one lexing session.
///
/// The last element is always the `EndOfFile` token.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn payload_accessors() {
        let token = Token::with_payload(
            TokenKind::Identifier,
            Span::new(0, 3),
            Vec::new(),
            TokenPayload::Ident {
                name: Name::EMPTY,
                id_type: IdentifierType::Normal,
            },
        );
        assert_eq!(token.ident(), Some((Name::EMPTY, IdentifierType::Normal)));
        assert_eq!(token.string_value(), None);
        assert_eq!(token.numeric(), None);
    }

    #[test]
    fn full_span_covers_leading_trivia() {
        let trivia = vec![Trivia::new(TriviaKind::Whitespace, Span::new(0, 2))];
        let token = Token::new(TokenKind::Comma, Span::new(2, 3), trivia);
        assert_eq!(token.full_span(), Span::new(0, 3));
    }

    #[test]
    fn real_value_round_trips_through_bits() {
        let value = NumericValue::real(150.0);
        assert_eq!(value.as_real(), Some(150.0));
    }

    #[test]
    fn token_list_indexing() {
        let mut list = TokenList::new();
        list.push(Token::new(TokenKind::Comma, Span::new(0, 1), Vec::new()));
        list.push(Token::new(TokenKind::EndOfFile, Span::point(1), Vec::new()));
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].kind, TokenKind::Comma);
        assert_eq!(list.last().map(|t| t.kind), Some(TokenKind::EndOfFile));
    }
}
