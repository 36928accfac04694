//! Backtick directive recognition.

use crate::{LexerMode, char_info};
use vlog_diagnostic::DiagCode;
use vlog_ir::{DirectiveKind, TokenKind, TokenPayload};

/// Classify a directive name against the fixed keyword table.
///
/// Names not in the table are user macro usages.
pub fn directive_kind(name: &str) -> Option<DirectiveKind> {
    let kind = match name {
        "include" => DirectiveKind::Include,
        "define" => DirectiveKind::Define,
        "ifdef" => DirectiveKind::IfDef,
        "ifndef" => DirectiveKind::IfNDef,
        "elsif" => DirectiveKind::ElsIf,
        "else" => DirectiveKind::Else,
        "endif" => DirectiveKind::EndIf,
        "undef" => DirectiveKind::Undef,
        "undefineall" => DirectiveKind::UndefineAll,
        "resetall" => DirectiveKind::ResetAll,
        "timescale" => DirectiveKind::Timescale,
        "default_nettype" => DirectiveKind::DefaultNetType,
        "line" => DirectiveKind::Line,
        "celldefine" => DirectiveKind::CellDefine,
        "endcelldefine" => DirectiveKind::EndCellDefine,
        "pragma" => DirectiveKind::Pragma,
        "unconnected_drive" => DirectiveKind::UnconnectedDrive,
        "nounconnected_drive" => DirectiveKind::NoUnconnectedDrive,
        "begin_keywords" => DirectiveKind::BeginKeywords,
        "end_keywords" => DirectiveKind::EndKeywords,
        _ => return None,
    };
    Some(kind)
}

impl crate::Lexer<'_> {
    /// Lex past a backtick. The macro-quoting digraphs were already
    /// handled by the classifier; this scans the directive name itself.
    pub(crate) fn lex_directive(&mut self) -> (TokenKind, Option<TokenPayload>) {
        debug_assert!(self.cursor.current() == b'`');
        self.cursor.advance();

        let name_start = self.cursor.pos();
        self.cursor.eat_while(char_info::is_ident_char);
        if self.cursor.pos() == name_start {
            self.diagnose_here(DiagCode::MisplacedDirectiveChar);
            return (TokenKind::Unknown, None);
        }

        let text = self.intern_range(name_start, self.cursor.pos());
        match directive_kind(self.interner.lookup(text)) {
            Some(kind) => {
                self.mode = if kind == DirectiveKind::Include {
                    LexerMode::Include
                } else {
                    LexerMode::Directive
                };
                (
                    TokenKind::Directive,
                    Some(TokenPayload::Directive { name: text, kind }),
                )
            }
            None => (
                TokenKind::MacroUsage,
                Some(TokenPayload::Directive {
                    name: text,
                    kind: DirectiveKind::MacroUsage,
                }),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests_support::lex_all;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_classification() {
        assert_eq!(directive_kind("include"), Some(DirectiveKind::Include));
        assert_eq!(directive_kind("timescale"), Some(DirectiveKind::Timescale));
        assert_eq!(
            directive_kind("default_nettype"),
            Some(DirectiveKind::DefaultNetType)
        );
        assert_eq!(directive_kind("MY_MACRO"), None);
        assert_eq!(directive_kind(""), None);
    }

    #[test]
    fn known_directive_token() {
        let (tokens, diags) = lex_all("`define");
        assert_eq!(tokens[0].kind, TokenKind::Directive);
        assert_eq!(
            tokens[0].directive().map(|(_, kind)| kind),
            Some(DirectiveKind::Define)
        );
        assert!(diags.is_empty());
    }

    #[test]
    fn unknown_name_is_macro_usage() {
        let (tokens, diags) = lex_all("`WIDTH");
        assert_eq!(tokens[0].kind, TokenKind::MacroUsage);
        assert_eq!(
            tokens[0].directive().map(|(_, kind)| kind),
            Some(DirectiveKind::MacroUsage)
        );
        assert!(diags.is_empty());
    }

    #[test]
    fn lone_backtick_is_an_error() {
        let (tokens, diags) = lex_all("` x");
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(diags.codes(), vec![DiagCode::MisplacedDirectiveChar]);
    }
}
