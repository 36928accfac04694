//! String literal scanning and escape decoding.
//!
//! Decoded bytes accumulate in a scratch buffer that is interned once at
//! the end; the raw lexeme (with escapes intact) is always recoverable
//! through the token's span.

use crate::char_info;
use smallvec::SmallVec;
use vlog_diagnostic::DiagCode;
use vlog_ir::{TokenKind, TokenPayload};

type ScratchBuffer = SmallVec<[u8; 64]>;

impl crate::Lexer<'_> {
    /// Lex a string literal. The cursor sits on the opening quote.
    pub(crate) fn lex_string_literal(&mut self) -> (TokenKind, Option<TokenPayload>) {
        debug_assert!(self.cursor.current() == b'"');
        self.cursor.advance();

        let mut buf = ScratchBuffer::new();
        loop {
            let chunk_start = self.cursor.pos();
            let delim = self.cursor.skip_to_string_delim();
            buf.extend_from_slice(self.cursor.slice(chunk_start, self.cursor.pos()));

            match delim {
                b'"' => {
                    self.cursor.advance();
                    break;
                }
                b'\\' => self.lex_escape(&mut buf),
                b'\r' | b'\n' => {
                    // Newline ends the literal early and is left for the
                    // next token's trivia.
                    self.diagnose_here(DiagCode::NewlineInStringLiteral);
                    break;
                }
                _ => {
                    if self.cursor.at_real_end() {
                        self.diagnose_here(DiagCode::UnterminatedStringLiteral);
                        break;
                    }
                    self.diagnose_here(DiagCode::EmbeddedNull);
                    self.cursor.advance();
                }
            }
        }

        let value = self.intern_bytes(&buf);
        (TokenKind::StringLiteral, Some(TokenPayload::Str { value }))
    }

    /// Decode one escape sequence. The cursor sits on the backslash.
    fn lex_escape(&mut self, buf: &mut ScratchBuffer) {
        self.cursor.advance();
        let c = self.cursor.current();
        match c {
            b'n' => self.push_escaped(buf, b'\n'),
            b't' => self.push_escaped(buf, b'\t'),
            b'\\' => self.push_escaped(buf, b'\\'),
            b'"' => self.push_escaped(buf, b'"'),
            b'v' => self.push_escaped(buf, 0x0B),
            b'f' => self.push_escaped(buf, 0x0C),
            b'a' => self.push_escaped(buf, 0x07),
            // Line continuation: nothing is emitted.
            b'\n' => self.cursor.advance(),
            b'\r' => {
                self.cursor.advance();
                self.cursor.consume(b'\n');
            }
            b'0'..=b'7' => self.lex_octal_escape(buf),
            b'x' => self.lex_hex_escape(buf),
            0 => {
                // The main loop reports unterminated/embedded-null; the
                // stray backslash simply decodes to nothing.
            }
            _ => {
                self.diagnose_here(DiagCode::UnknownEscapeCode);
                self.push_escaped(buf, c);
            }
        }
    }

    fn push_escaped(&mut self, buf: &mut ScratchBuffer, decoded: u8) {
        buf.push(decoded);
        self.cursor.advance();
    }

    /// Up to three octal digits forming a byte value, capped at 255.
    fn lex_octal_escape(&mut self, buf: &mut ScratchBuffer) {
        let mut value = 0u32;
        let mut count = 0;
        while count < 3 && char_info::is_octal_digit(self.cursor.current()) {
            value = value * 8 + u32::from(char_info::decimal_digit_value(self.cursor.current()));
            self.cursor.advance();
            count += 1;
        }
        if value > 255 {
            self.diagnose_here(DiagCode::OctalEscapeCodeTooBig);
            value = 255;
        }
        buf.push(u8::try_from(value).unwrap_or(u8::MAX));
    }

    /// `\x` followed by one or two hex digits.
    fn lex_hex_escape(&mut self, buf: &mut ScratchBuffer) {
        self.cursor.advance();
        let c = self.cursor.current();
        if !char_info::is_hex_digit(c) {
            self.diagnose_here(DiagCode::InvalidHexEscapeCode);
            if c != 0 && !char_info::is_newline(c) {
                self.push_escaped(buf, c);
            }
            return;
        }

        let mut value = char_info::hex_digit_value(c);
        self.cursor.advance();
        if char_info::is_hex_digit(self.cursor.current()) {
            value = value * 16 + char_info::hex_digit_value(self.cursor.current());
            self.cursor.advance();
        }
        buf.push(value);
    }
}
