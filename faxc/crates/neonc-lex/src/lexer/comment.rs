//! Line comment scanning.

use neonc_util::Span;

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Scan a `//` line comment. Consumes up to but excluding the terminating
/// `\n` (or end of input), and emits it as trivia the parser never sees.
pub fn lex_line_comment<'a>(cursor: &mut Cursor<'a>) -> Token<'a> {
    let start = cursor.position();
    cursor.bump(2); // "//"

    while cursor.current().is_some_and(|b| b != b'\n') {
        cursor.bump(1);
    }

    let lexeme = cursor.slice_from(start);
    let span = Span::new(start, cursor.position());
    Token::new(TokenKind::LineCommentStart, span, lexeme)
}
