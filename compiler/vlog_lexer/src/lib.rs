//! Lexer for the vlog compiler.
//!
//! Turns a [`SourceBuffer`] into a stream of [`Token`]s with attached
//! trivia and a side channel of diagnostics. One [`Lexer::lex`] call
//! produces exactly one token; the stream always ends with `EndOfFile`
//! and malformed input degrades to `Unknown` tokens plus diagnostics
//! rather than failure, so a driver can never spin or abort.
//!
//! The scanner is hand-written over a sentinel-terminated buffer. Token
//! text is never copied: identifiers, string contents, and directive
//! names are interned; everything else is recovered through spans.

mod char_info;
mod directives;
mod numeric;
mod strings;
mod trivia;
mod vector_builder;

pub use directives::directive_kind;

use vlog_diagnostic::{DiagCode, Diagnostics};
use vlog_ir::{
    IdentifierType, Name, Span, StringInterner, Token, TokenKind, TokenList, TokenPayload,
};
use vlog_lexer_core::{Cursor, SourceBuffer};

/// Lexing mode. Directives change how trivia behaves: end-of-line becomes
/// significant and line continuations are swallowed.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum LexerMode {
    Normal,
    /// Inside a directive other than `include`.
    Directive,
    /// Inside an `include` directive, where a file name follows.
    Include,
}

/// One lexing session over a single source buffer.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) mode: LexerMode,
    pub(crate) interner: &'a StringInterner,
    diagnostics: &'a mut Diagnostics,
    eof_emitted: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer. A byte order mark is diagnosed and skipped here so
    /// the first `lex()` call starts on real content.
    pub fn new(
        buffer: &'a SourceBuffer,
        interner: &'a StringInterner,
        diagnostics: &'a mut Diagnostics,
    ) -> Self {
        let mut cursor = buffer.cursor();
        if let Some(bom) = buffer.bom() {
            diagnostics.add(DiagCode::UnicodeBOM, Span::new(0, bom.len));
            cursor.advance_n(bom.len);
        }
        Lexer {
            cursor,
            mode: LexerMode::Normal,
            interner,
            diagnostics,
            eof_emitted: false,
        }
    }

    /// Current lexing mode.
    pub fn mode(&self) -> LexerMode {
        self.mode
    }

    /// Lex one token with its leading trivia.
    ///
    /// Must not be called again after `EndOfFile` has been returned.
    pub fn lex(&mut self) -> Token {
        debug_assert!(!self.eof_emitted, "lex() called after EndOfFile");

        let mut trivia = Vec::new();
        while self.scan_trivia(&mut trivia) {
            self.mode = LexerMode::Normal;
        }

        self.cursor.mark();
        let (kind, payload) = self.classify();
        if kind == TokenKind::EndOfFile {
            self.eof_emitted = true;
        }

        let span = self.lexeme_span();
        match payload {
            Some(payload) => Token::with_payload(kind, span, trivia, payload),
            None => Token::new(kind, span, trivia),
        }
    }

    /// Dispatch on the first byte of the token.
    fn classify(&mut self) -> (TokenKind, Option<TokenPayload>) {
        let c = self.cursor.current();
        match c {
            0 => {
                if self.cursor.at_real_end() {
                    return (TokenKind::EndOfFile, None);
                }
                self.cursor.advance();
                self.diagnose(DiagCode::EmbeddedNull, self.lexeme_span());
                return (TokenKind::Unknown, None);
            }
            b'"' => return self.lex_string_literal(),
            b'`' => return self.lex_backtick(),
            b'\\' => return self.lex_escaped_identifier(),
            b'$' => {
                if char_info::is_ident_char(self.cursor.peek()) {
                    return self.lex_system_identifier();
                }
                self.cursor.advance();
                return (TokenKind::Dollar, None);
            }
            b'0'..=b'9' => return self.lex_numeric_literal(),
            b'\'' => {
                if self.cursor.peek() == b'{' {
                    self.cursor.advance_n(2);
                    return (TokenKind::ApostropheOpenBrace, None);
                }
                return self.lex_apostrophe();
            }
            _ if char_info::is_ident_start(c) => return self.lex_identifier(),
            _ => {}
        }
        (self.classify_punctuation(c), None)
    }

    /// Operator and punctuation decision trees, longest match first.
    fn classify_punctuation(&mut self, c: u8) -> TokenKind {
        use TokenKind as K;
        self.cursor.advance();
        match c {
            b'!' => match (self.cursor.current(), self.cursor.peek()) {
                (b'=', b'=') => {
                    self.cursor.advance_n(2);
                    K::ExclamationDoubleEquals
                }
                (b'=', b'?') => {
                    self.cursor.advance_n(2);
                    K::ExclamationEqualsQuestion
                }
                (b'=', _) => {
                    self.cursor.advance();
                    K::ExclamationEquals
                }
                _ => K::Exclamation,
            },
            b'#' => match (self.cursor.current(), self.cursor.peek()) {
                (b'#', _) => {
                    self.cursor.advance();
                    K::DoubleHash
                }
                (b'-', b'#') => {
                    self.cursor.advance_n(2);
                    K::HashMinusHash
                }
                (b'=', b'#') => {
                    self.cursor.advance_n(2);
                    K::HashEqualsHash
                }
                _ => K::Hash,
            },
            b'%' => {
                if self.cursor.consume(b'=') {
                    K::PercentEqual
                } else {
                    K::Percent
                }
            }
            b'&' => {
                if self.cursor.consume(b'&') {
                    if self.cursor.consume(b'&') {
                        K::TripleAnd
                    } else {
                        K::DoubleAnd
                    }
                } else if self.cursor.consume(b'=') {
                    K::AndEqual
                } else {
                    K::And
                }
            }
            b'(' => {
                if self.cursor.consume(b'*') {
                    K::OpenParenthesisStar
                } else {
                    K::OpenParenthesis
                }
            }
            b')' => K::CloseParenthesis,
            b'*' => {
                if self.cursor.consume(b'*') {
                    K::DoubleStar
                } else if self.cursor.consume(b'=') {
                    K::StarEqual
                } else if self.cursor.consume(b'>') {
                    K::StarArrow
                } else if self.cursor.consume(b')') {
                    K::StarCloseParenthesis
                } else if self.cursor.current() == b':'
                    && self.cursor.peek() == b':'
                    && self.cursor.peek_n(2) == b'*'
                {
                    self.cursor.advance_n(3);
                    K::StarDoubleColonStar
                } else {
                    K::Star
                }
            }
            b'+' => {
                if self.cursor.consume(b'+') {
                    K::DoublePlus
                } else if self.cursor.consume(b'=') {
                    K::PlusEqual
                } else if self.cursor.consume(b':') {
                    K::PlusColon
                } else {
                    K::Plus
                }
            }
            b',' => K::Comma,
            b'-' => {
                if self.cursor.consume(b'-') {
                    K::DoubleMinus
                } else if self.cursor.consume(b'=') {
                    K::MinusEqual
                } else if self.cursor.consume(b':') {
                    K::MinusColon
                } else if self.cursor.consume(b'>') {
                    if self.cursor.consume(b'>') {
                        K::MinusDoubleArrow
                    } else {
                        K::MinusArrow
                    }
                } else {
                    K::Minus
                }
            }
            b'.' => {
                if self.cursor.consume(b'*') {
                    K::DotStar
                } else {
                    K::Dot
                }
            }
            b'/' => {
                if self.cursor.consume(b'=') {
                    K::SlashEqual
                } else {
                    K::Slash
                }
            }
            b':' => match self.cursor.current() {
                b':' => {
                    self.cursor.advance();
                    K::DoubleColon
                }
                b'=' => {
                    self.cursor.advance();
                    K::ColonEquals
                }
                // ":/" followed by a comment start is just a colon.
                b'/' if !matches!(self.cursor.peek(), b'/' | b'*') => {
                    self.cursor.advance();
                    K::ColonSlash
                }
                _ => K::Colon,
            },
            b';' => K::Semicolon,
            b'<' => {
                if self.cursor.consume(b'=') {
                    K::LessThanEquals
                } else if self.cursor.consume(b'<') {
                    if self.cursor.consume(b'<') {
                        if self.cursor.consume(b'=') {
                            K::TripleLeftShiftEqual
                        } else {
                            K::TripleLeftShift
                        }
                    } else if self.cursor.consume(b'=') {
                        K::LeftShiftEqual
                    } else {
                        K::LeftShift
                    }
                } else if self.cursor.current() == b'-' && self.cursor.peek() == b'>' {
                    self.cursor.advance_n(2);
                    K::LessThanMinusArrow
                } else {
                    K::LessThan
                }
            }
            b'=' => {
                if self.cursor.consume(b'=') {
                    if self.cursor.consume(b'=') {
                        K::TripleEquals
                    } else if self.cursor.consume(b'?') {
                        K::DoubleEqualsQuestion
                    } else {
                        K::DoubleEquals
                    }
                } else if self.cursor.consume(b'>') {
                    K::EqualsArrow
                } else {
                    K::Equals
                }
            }
            b'>' => {
                if self.cursor.consume(b'=') {
                    K::GreaterThanEquals
                } else if self.cursor.consume(b'>') {
                    if self.cursor.consume(b'>') {
                        if self.cursor.consume(b'=') {
                            K::TripleRightShiftEqual
                        } else {
                            K::TripleRightShift
                        }
                    } else if self.cursor.consume(b'=') {
                        K::RightShiftEqual
                    } else {
                        K::RightShift
                    }
                } else {
                    K::GreaterThan
                }
            }
            b'?' => K::Question,
            b'@' => {
                if self.cursor.consume(b'@') {
                    K::DoubleAt
                } else {
                    K::At
                }
            }
            b'[' => K::OpenBracket,
            b']' => K::CloseBracket,
            b'^' => {
                if self.cursor.consume(b'~') {
                    K::XorTilde
                } else if self.cursor.consume(b'=') {
                    K::XorEqual
                } else {
                    K::Xor
                }
            }
            b'{' => K::OpenBrace,
            b'}' => K::CloseBrace,
            b'|' => {
                if self.cursor.current() == b'-' && self.cursor.peek() == b'>' {
                    self.cursor.advance_n(2);
                    K::OrMinusArrow
                } else if self.cursor.current() == b'=' && self.cursor.peek() == b'>' {
                    self.cursor.advance_n(2);
                    K::OrEqualsArrow
                } else if self.cursor.consume(b'|') {
                    K::DoubleOr
                } else if self.cursor.consume(b'=') {
                    K::OrEqual
                } else {
                    K::Or
                }
            }
            b'~' => {
                if self.cursor.consume(b'&') {
                    K::TildeAnd
                } else if self.cursor.consume(b'|') {
                    K::TildeOr
                } else if self.cursor.consume(b'^') {
                    K::TildeXor
                } else {
                    K::Tilde
                }
            }
            _ => {
                if c < 0x80 {
                    self.diagnose(DiagCode::NonPrintableChar, self.lexeme_span());
                } else {
                    // Skip the whole UTF-8 sequence; lexing does not
                    // otherwise decode multi-byte characters.
                    self.cursor.eat_while(char_info::is_utf8_continuation);
                    self.diagnose(DiagCode::UTF8Char, self.lexeme_span());
                }
                K::Unknown
            }
        }
    }

    /// Backtick: the macro-quoting digraphs first, otherwise a directive
    /// or macro usage.
    fn lex_backtick(&mut self) -> (TokenKind, Option<TokenPayload>) {
        match self.cursor.peek() {
            b'"' => {
                self.cursor.advance_n(2);
                (TokenKind::MacroQuote, None)
            }
            b'`' => {
                self.cursor.advance_n(2);
                (TokenKind::MacroPaste, None)
            }
            b'\\' if self.cursor.peek_n(2) == b'`' && self.cursor.peek_n(3) == b'"' => {
                self.cursor.advance_n(4);
                (TokenKind::MacroEscapedQuote, None)
            }
            _ => self.lex_directive(),
        }
    }

    fn lex_identifier(&mut self) -> (TokenKind, Option<TokenPayload>) {
        let start = self.cursor.pos();
        self.cursor.eat_while(char_info::is_ident_char);
        let name = self.intern_range(start, self.cursor.pos());
        (
            TokenKind::Identifier,
            Some(TokenPayload::Ident {
                name,
                id_type: IdentifierType::Normal,
            }),
        )
    }

    /// `$` plus an identifier run, interned with the `$` included.
    fn lex_system_identifier(&mut self) -> (TokenKind, Option<TokenPayload>) {
        let start = self.cursor.pos();
        self.cursor.advance();
        self.cursor.eat_while(char_info::is_ident_char);
        let name = self.intern_range(start, self.cursor.pos());
        (
            TokenKind::SystemIdentifier,
            Some(TokenPayload::Ident {
                name,
                id_type: IdentifierType::System,
            }),
        )
    }

    /// `\` introduces an escaped identifier running to the next whitespace.
    /// The backslash itself is not part of the interned text.
    fn lex_escaped_identifier(&mut self) -> (TokenKind, Option<TokenPayload>) {
        self.cursor.advance();
        let start = self.cursor.pos();
        self.cursor.eat_while(char_info::is_printable_non_whitespace);
        if self.cursor.pos() == start {
            self.diagnose(DiagCode::EscapedWhitespace, self.lexeme_span());
            return (TokenKind::Unknown, None);
        }
        let name = self.intern_range(start, self.cursor.pos());
        (
            TokenKind::Identifier,
            Some(TokenPayload::Ident {
                name,
                id_type: IdentifierType::Escaped,
            }),
        )
    }

    pub(crate) fn lexeme_span(&self) -> Span {
        Span::new(self.cursor.marked(), self.cursor.pos())
    }

    pub(crate) fn diagnose(&mut self, code: DiagCode, span: Span) {
        self.diagnostics.add(code, span);
    }

    /// Diagnostic pointing at the current cursor position.
    pub(crate) fn diagnose_here(&mut self, code: DiagCode) {
        let span = Span::point(self.cursor.pos());
        self.diagnostics.add(code, span);
    }

    pub(crate) fn intern_range(&self, start: u32, end: u32) -> Name {
        self.intern_bytes(self.cursor.slice(start, end))
    }

    pub(crate) fn intern_bytes(&self, bytes: &[u8]) -> Name {
        self.interner.intern(String::from_utf8_lossy(bytes).as_ref())
    }
}

/// Lex a whole buffer into a token list ending with `EndOfFile`.
pub fn tokenize(
    buffer: &SourceBuffer,
    interner: &StringInterner,
    diagnostics: &mut Diagnostics,
) -> TokenList {
    let mut lexer = Lexer::new(buffer, interner, diagnostics);
    let mut tokens = TokenList::new();
    loop {
        let token = lexer.lex();
        let done = token.kind == TokenKind::EndOfFile;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

#[cfg(test)]
pub(crate) mod tests_support {
    use super::*;

    pub(crate) fn lex_all(source: &str) -> (Vec<Token>, Diagnostics) {
        let (tokens, diagnostics, _) = lex_with_interner(source);
        (tokens, diagnostics)
    }

    pub(crate) fn lex_with_interner(
        source: &str,
    ) -> (Vec<Token>, Diagnostics, StringInterner) {
        let buffer = SourceBuffer::from_str(source);
        let interner = StringInterner::new();
        let mut diagnostics = Diagnostics::new();
        let tokens = tokenize(&buffer, &interner, &mut diagnostics);
        (tokens.as_slice().to_vec(), diagnostics, interner)
    }

    /// Reassemble the source from trivia and lexeme spans.
    pub(crate) fn reassemble(source: &str, tokens: &[Token]) -> String {
        let mut out = String::new();
        for token in tokens {
            for piece in &token.trivia {
                out.push_str(piece.span.text(source));
            }
            out.push_str(token.span.text(source));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::tests_support::{lex_all, lex_with_interner, reassemble};
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let (tokens, _) = lex_all(source);
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn empty_input_is_just_eof() {
        assert_eq!(kinds(""), vec![TokenKind::EndOfFile]);
    }

    #[test]
    fn identifiers_and_punctuation() {
        assert_eq!(
            kinds("assign y = a & b;"),
            vec![
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Equals,
                TokenKind::Identifier,
                TokenKind::And,
                TokenKind::Identifier,
                TokenKind::Semicolon,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn identifier_text_is_interned() {
        let (tokens, _, interner) = lex_with_interner("wdata wdata");
        let (a, _) = tokens[0].ident().map_or((Name::EMPTY, IdentifierType::Unknown), |v| v);
        let (b, _) = tokens[1].ident().map_or((Name::EMPTY, IdentifierType::Unknown), |v| v);
        assert_eq!(a, b);
        assert_eq!(interner.lookup(a), "wdata");
    }

    #[test]
    fn system_identifier_keeps_dollar_prefix() {
        let (tokens, _, interner) = lex_with_interner("$display");
        assert_eq!(tokens[0].kind, TokenKind::SystemIdentifier);
        let name = tokens[0].ident().map_or(Name::EMPTY, |(n, _)| n);
        assert_eq!(interner.lookup(name), "$display");
    }

    #[test]
    fn lone_dollar_is_an_operator() {
        assert_eq!(
            kinds("$ $x"),
            vec![
                TokenKind::Dollar,
                TokenKind::SystemIdentifier,
                TokenKind::EndOfFile
            ]
        );
    }

    #[test]
    fn escaped_identifier_excludes_backslash() {
        let (tokens, diags, interner) = lex_with_interner("\\bus+index ");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        let (name, id_type) = tokens[0]
            .ident()
            .map_or((Name::EMPTY, IdentifierType::Unknown), |v| v);
        assert_eq!(id_type, IdentifierType::Escaped);
        assert_eq!(interner.lookup(name), "bus+index");
        assert!(diags.is_empty());
    }

    #[test]
    fn maximal_munch_operators() {
        let cases: &[(&str, TokenKind)] = &[
            ("!==", TokenKind::ExclamationDoubleEquals),
            ("!=?", TokenKind::ExclamationEqualsQuestion),
            ("#-#", TokenKind::HashMinusHash),
            ("#=#", TokenKind::HashEqualsHash),
            ("&&&", TokenKind::TripleAnd),
            ("(*", TokenKind::OpenParenthesisStar),
            ("*)", TokenKind::StarCloseParenthesis),
            ("*::*", TokenKind::StarDoubleColonStar),
            ("**", TokenKind::DoubleStar),
            ("+:", TokenKind::PlusColon),
            ("->>", TokenKind::MinusDoubleArrow),
            (".*", TokenKind::DotStar),
            ("::", TokenKind::DoubleColon),
            (":=", TokenKind::ColonEquals),
            (":/", TokenKind::ColonSlash),
            ("<<<=", TokenKind::TripleLeftShiftEqual),
            ("<->", TokenKind::LessThanMinusArrow),
            ("===", TokenKind::TripleEquals),
            ("==?", TokenKind::DoubleEqualsQuestion),
            ("=>", TokenKind::EqualsArrow),
            (">>>=", TokenKind::TripleRightShiftEqual),
            ("@@", TokenKind::DoubleAt),
            ("^~", TokenKind::XorTilde),
            ("|->", TokenKind::OrMinusArrow),
            ("|=>", TokenKind::OrEqualsArrow),
            ("~^", TokenKind::TildeXor),
            ("'{", TokenKind::ApostropheOpenBrace),
        ];
        for &(source, expected) in cases {
            let (tokens, diags) = lex_all(source);
            assert_eq!(tokens.len(), 2, "one token for {source:?}");
            assert_eq!(tokens[0].kind, expected, "for {source:?}");
            assert!(diags.is_empty(), "no diagnostics for {source:?}");
        }
    }

    #[test]
    fn colon_before_comment_stays_single() {
        assert_eq!(
            kinds(":// c"),
            vec![TokenKind::Colon, TokenKind::EndOfFile]
        );
    }

    #[test]
    fn macro_quoting_tokens() {
        assert_eq!(
            kinds("`\" `` `\\`\""),
            vec![
                TokenKind::MacroQuote,
                TokenKind::MacroPaste,
                TokenKind::MacroEscapedQuote,
                TokenKind::EndOfFile
            ]
        );
    }

    #[test]
    fn include_switches_to_include_mode() {
        let buffer = SourceBuffer::from_str("`include \"f.svh\"");
        let interner = StringInterner::new();
        let mut diagnostics = Diagnostics::new();
        let mut lexer = Lexer::new(&buffer, &interner, &mut diagnostics);
        let first = lexer.lex();
        assert_eq!(first.kind, TokenKind::Directive);
        assert_eq!(lexer.mode(), LexerMode::Include);
    }

    #[test]
    fn directive_mode_reverts_on_newline() {
        let buffer = SourceBuffer::from_str("`timescale\nx");
        let interner = StringInterner::new();
        let mut diagnostics = Diagnostics::new();
        let mut lexer = Lexer::new(&buffer, &interner, &mut diagnostics);
        lexer.lex();
        assert_eq!(lexer.mode(), LexerMode::Directive);
        lexer.lex();
        assert_eq!(lexer.mode(), LexerMode::Normal);
    }

    #[test]
    fn macro_usage_keeps_normal_mode() {
        let buffer = SourceBuffer::from_str("`WIDTH x");
        let interner = StringInterner::new();
        let mut diagnostics = Diagnostics::new();
        let mut lexer = Lexer::new(&buffer, &interner, &mut diagnostics);
        assert_eq!(lexer.lex().kind, TokenKind::MacroUsage);
        assert_eq!(lexer.mode(), LexerMode::Normal);
    }

    #[test]
    fn bom_is_diagnosed_and_skipped() {
        let buffer = SourceBuffer::new(b"\xEF\xBB\xBFmodule");
        let interner = StringInterner::new();
        let mut diagnostics = Diagnostics::new();
        let tokens = tokenize(&buffer, &interner, &mut diagnostics);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(diagnostics.codes(), vec![DiagCode::UnicodeBOM]);
    }

    #[test]
    fn embedded_null_between_tokens() {
        let buffer = SourceBuffer::new(b"a\0b");
        let interner = StringInterner::new();
        let mut diagnostics = Diagnostics::new();
        let tokens = tokenize(&buffer, &interner, &mut diagnostics);
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Unknown,
                TokenKind::Identifier,
                TokenKind::EndOfFile
            ]
        );
        assert_eq!(diagnostics.codes(), vec![DiagCode::EmbeddedNull]);
    }

    #[test]
    fn non_ascii_byte_skips_whole_sequence() {
        let (tokens, diags) = lex_all("é x");
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(diags.codes(), vec![DiagCode::UTF8Char]);
    }

    #[test]
    fn control_byte_is_non_printable() {
        let buffer = SourceBuffer::new(b"\x01");
        let interner = StringInterner::new();
        let mut diagnostics = Diagnostics::new();
        let tokens = tokenize(&buffer, &interner, &mut diagnostics);
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(diagnostics.codes(), vec![DiagCode::NonPrintableChar]);
    }

    #[test]
    fn every_single_byte_input_terminates() {
        for byte in 0..=255u8 {
            let interner = StringInterner::new();
            let mut diagnostics = Diagnostics::new();
            let buffer = SourceBuffer::new(&[byte]);
            let tokens = tokenize(&buffer, &interner, &mut diagnostics);
            assert!(tokens.len() <= 3, "byte {byte:#04x}");
            assert_eq!(
                tokens.last().map(|t| t.kind),
                Some(TokenKind::EndOfFile),
                "byte {byte:#04x}"
            );
        }
    }

    #[test]
    fn round_trip_mixed_source() {
        let source = "module m; // top\n  wire [3:0] w = 4'd15;\n  /* x */ real r = 1.5e2;\nendmodule\n";
        let (tokens, _) = lex_all(source);
        assert_eq!(reassemble(source, &tokens), source);
    }

    #[test]
    fn round_trip_directives_and_strings() {
        let source = "`define A \\\n  \"a\\q\" 'x\n`include \"f\"\n";
        let (tokens, _) = lex_all(source);
        assert_eq!(reassemble(source, &tokens), source);
    }

    proptest! {
        #[test]
        fn round_trip_arbitrary_ascii(source in "[ -~\t\r\n]{0,200}") {
            let (tokens, _) = lex_all(&source);
            prop_assert_eq!(reassemble(&source, &tokens), source);
        }

        #[test]
        fn stream_always_ends_with_eof(source in "\\PC{0,80}") {
            let (tokens, _) = lex_all(&source);
            prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfFile));
        }
    }
}
