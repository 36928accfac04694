//! Trivia scanning: whitespace runs, comments, and line terminators.
//!
//! The scanner is mode-aware. In directive or include mode an end-of-line
//! is an interruption: the scanner stops and reports it so the driver can
//! drop back to normal mode before lexing the next token. Line
//! continuations (`\` + newline) are swallowed only inside directives.

use crate::{LexerMode, char_info};
use vlog_diagnostic::DiagCode;
use vlog_ir::{Span, Trivia, TriviaKind};

impl crate::Lexer<'_> {
    /// Consume leading trivia into `trivia`. Returns `true` when a
    /// directive-mode end-of-line (or a split block comment) interrupted
    /// the scan and the driver must reset the mode.
    pub(crate) fn scan_trivia(&mut self, trivia: &mut Vec<Trivia>) -> bool {
        loop {
            let start = self.cursor.pos();
            match self.cursor.current() {
                b if char_info::is_horizontal_whitespace(b) => {
                    self.cursor.eat_while(char_info::is_horizontal_whitespace);
                    self.push_trivia(trivia, TriviaKind::Whitespace, start);
                }
                b'/' if self.cursor.peek() == b'/' => {
                    self.scan_line_comment();
                    self.push_trivia(trivia, TriviaKind::LineComment, start);
                }
                b'/' if self.cursor.peek() == b'*' => {
                    let split = self.scan_block_comment();
                    self.push_trivia(trivia, TriviaKind::BlockComment, start);
                    if split {
                        return true;
                    }
                }
                b'\r' | b'\n' => {
                    if self.cursor.current() == b'\r' {
                        self.cursor.advance();
                        self.cursor.consume(b'\n');
                    } else {
                        self.cursor.advance();
                    }
                    self.push_trivia(trivia, TriviaKind::EndOfLine, start);
                    if self.mode != LexerMode::Normal {
                        return true;
                    }
                }
                b'\\' if self.mode != LexerMode::Normal
                    && char_info::is_newline(self.cursor.peek()) =>
                {
                    // Line continuation: swallowed, still recorded so the
                    // token stream round-trips.
                    self.cursor.advance();
                    if self.cursor.current() == b'\r' {
                        self.cursor.advance();
                        self.cursor.consume(b'\n');
                    } else {
                        self.cursor.advance();
                    }
                    self.push_trivia(trivia, TriviaKind::Whitespace, start);
                }
                _ => return false,
            }
        }
    }

    fn push_trivia(&self, trivia: &mut Vec<Trivia>, kind: TriviaKind, start: u32) {
        trivia.push(Trivia::new(kind, Span::new(start, self.cursor.pos())));
    }

    /// `//` comment: runs to the newline, which is not consumed.
    fn scan_line_comment(&mut self) {
        self.cursor.advance_n(2);
        loop {
            let found = self.cursor.skip_to_line_end();
            if found == 0 && !self.cursor.at_real_end() {
                self.diagnose_here(DiagCode::EmbeddedNull);
                self.cursor.advance();
                continue;
            }
            return;
        }
    }

    /// `/* */` comment. Returns `true` when the comment spanned a newline
    /// while lexing a directive, which both diagnoses the split and forces
    /// the mode back to normal.
    fn scan_block_comment(&mut self) -> bool {
        let start = self.cursor.pos();
        self.cursor.advance_n(2);
        let mut saw_newline = false;
        loop {
            match self.cursor.current() {
                0 => {
                    if self.cursor.at_real_end() {
                        self.diagnose(
                            DiagCode::UnterminatedBlockComment,
                            Span::new(start, self.cursor.pos()),
                        );
                        break;
                    }
                    self.diagnose_here(DiagCode::EmbeddedNull);
                    self.cursor.advance();
                }
                b'*' if self.cursor.peek() == b'/' => {
                    self.cursor.advance_n(2);
                    break;
                }
                b'/' if self.cursor.peek() == b'*' => {
                    self.diagnose_here(DiagCode::NestedBlockComment);
                    self.cursor.advance_n(2);
                }
                b'\r' | b'\n' => {
                    saw_newline = true;
                    self.cursor.advance();
                }
                _ => self.cursor.advance(),
            }
        }

        if saw_newline && self.mode != LexerMode::Normal {
            self.diagnose(
                DiagCode::SplitBlockCommentInDirective,
                Span::new(start, self.cursor.pos()),
            );
            self.mode = LexerMode::Normal;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests_support::lex_all;
    use pretty_assertions::assert_eq;
    use vlog_ir::TokenKind;

    fn trivia_kinds(source: &str) -> Vec<TriviaKind> {
        let (tokens, _) = lex_all(source);
        tokens[0].trivia.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn whitespace_run_is_one_piece() {
        assert_eq!(trivia_kinds("  \t x"), vec![TriviaKind::Whitespace]);
    }

    #[test]
    fn line_comment_excludes_newline() {
        let (tokens, diags) = lex_all("// note\nx");
        assert_eq!(
            tokens[0].trivia.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TriviaKind::LineComment, TriviaKind::EndOfLine]
        );
        assert_eq!(tokens[0].trivia[0].span, Span::new(0, 7));
        assert!(diags.is_empty());
    }

    #[test]
    fn block_comment_single_piece() {
        assert_eq!(
            trivia_kinds("/* a\n b */x"),
            vec![TriviaKind::BlockComment]
        );
    }

    #[test]
    fn crlf_is_one_end_of_line() {
        assert_eq!(trivia_kinds("\r\nx"), vec![TriviaKind::EndOfLine]);
    }

    #[test]
    fn nested_block_comment_is_diagnosed() {
        let (_, diags) = lex_all("/* a /* b */ x");
        assert_eq!(diags.codes(), vec![DiagCode::NestedBlockComment]);
    }

    #[test]
    fn unterminated_block_comment() {
        let (tokens, diags) = lex_all("/* never closed");
        assert_eq!(tokens[0].kind, TokenKind::EndOfFile);
        assert_eq!(diags.codes(), vec![DiagCode::UnterminatedBlockComment]);
    }

    #[test]
    fn embedded_null_in_line_comment() {
        let buffer = vlog_lexer_core::SourceBuffer::new(b"// a\0b\nx");
        let interner = vlog_ir::StringInterner::new();
        let mut diags = vlog_diagnostic::Diagnostics::new();
        let tokens = crate::tokenize(&buffer, &interner, &mut diags);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(diags.codes(), vec![DiagCode::EmbeddedNull]);
    }

    #[test]
    fn directive_mode_stops_at_end_of_line() {
        let (tokens, diags) = lex_all("`define A\nx");
        assert_eq!(tokens[0].kind, TokenKind::Directive);
        assert_eq!(tokens[1].kind, TokenKind::Identifier); // A
        // The newline interrupted directive trivia; x lexes normally.
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
        assert_eq!(
            tokens[2].trivia.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TriviaKind::EndOfLine]
        );
        assert!(diags.is_empty());
    }

    #[test]
    fn line_continuation_in_directive_is_whitespace_trivia() {
        let (tokens, diags) = lex_all("`define A \\\nB");
        assert_eq!(tokens[2].kind, TokenKind::Identifier); // B
        assert!(
            tokens[2]
                .trivia
                .iter()
                .all(|t| t.kind == TriviaKind::Whitespace)
        );
        assert!(diags.is_empty());
    }

    #[test]
    fn backslash_newline_outside_directive_is_not_trivia() {
        let (tokens, diags) = lex_all("\\\nx");
        // Escaped identifier with nothing after the backslash.
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(diags.codes(), vec![DiagCode::EscapedWhitespace]);
    }

    #[test]
    fn split_block_comment_in_directive() {
        let (tokens, diags) = lex_all("`define /* a\n b */ x");
        assert!(
            diags
                .codes()
                .contains(&DiagCode::SplitBlockCommentInDirective)
        );
        // Mode was reset; x still lexes as a plain identifier.
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }
}
