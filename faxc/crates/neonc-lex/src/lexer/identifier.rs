//! Keyword, identifier, and underscore scanning.

use neonc_util::Span;

use crate::cursor::Cursor;
use crate::error::LexResult;
use crate::token::{Token, TokenKind};
use crate::unicode::is_ident_continue;

/// Spelling-to-kind table for the language's reserved words.
///
/// A keyword is recognized only when the maximal identifier run matches one
/// of these spellings *exactly* — `lets` is a full run of its own and never
/// matches `let`, so it falls through to `IDENTIFIER` without any explicit
/// "followed by a non-identifier character" check.
const KEYWORDS: &[(&str, TokenKind)] = &[
    ("let", TokenKind::Let),
    ("fun", TokenKind::Fun),
    ("type", TokenKind::Type),
    ("typeclass", TokenKind::Typeclass),
    ("if", TokenKind::If),
    ("elif", TokenKind::Elif),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("for", TokenKind::For),
    ("self", TokenKind::SelfValue),
    ("Self", TokenKind::SelfType),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
];

/// Scan `[A-Za-z_][A-Za-z0-9_]*` starting at the cursor and classify it as a
/// keyword, the `_` wildcard token, or a plain identifier.
pub fn lex_identifier_or_keyword<'a>(cursor: &mut Cursor<'a>) -> LexResult<Token<'a>> {
    let start = cursor.position();
    cursor.bump(1); // the leading ident-start byte, already checked by the caller
    while cursor.current().is_some_and(is_ident_continue) {
        cursor.bump(1);
    }

    let lexeme = cursor.slice_from(start);
    let span = Span::new(start, cursor.position());

    let kind = if lexeme == "_" {
        TokenKind::Underscore
    } else {
        KEYWORDS
            .iter()
            .find(|(spelling, _)| *spelling == lexeme)
            .map(|(_, kind)| *kind)
            .unwrap_or(TokenKind::Identifier)
    };

    Ok(Token::new(kind, span, lexeme))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Token<'_> {
        let mut cursor = Cursor::new(source);
        lex_identifier_or_keyword(&mut cursor).unwrap()
    }

    #[test]
    fn recognizes_every_keyword() {
        for (spelling, kind) in KEYWORDS {
            let tok = lex(spelling);
            assert_eq!(tok.kind, *kind, "spelling {spelling}");
            assert_eq!(tok.lexeme, *spelling);
        }
    }

    #[test]
    fn keyword_prefix_is_an_identifier() {
        let tok = lex("lets");
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.lexeme, "lets");
    }

    #[test]
    fn lone_underscore_is_its_own_kind() {
        let tok = lex("_");
        assert_eq!(tok.kind, TokenKind::Underscore);
    }

    #[test]
    fn underscore_prefixed_identifier_is_plain_identifier() {
        let tok = lex("_foo");
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.lexeme, "_foo");
    }

    #[test]
    fn stops_at_first_non_ident_byte() {
        let tok = lex("abc+def");
        assert_eq!(tok.lexeme, "abc");
    }
}
