//! Standard string literal scanning.

use neonc_util::Span;

use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};

/// Scan a `"..."` literal starting at the opening quote.
///
/// Escape sequences are recognized only as two-byte units so a `\"` does not
/// terminate the string early; their interpretation is a semantic-analysis
/// concern and is left entirely to the caller (the lexeme keeps the raw
/// backslash). The returned span covers both quotes.
pub fn lex_string<'a>(cursor: &mut Cursor<'a>) -> LexResult<Token<'a>> {
    let start = cursor.position();
    cursor.bump(1); // opening quote

    loop {
        match cursor.current() {
            None => {
                let span = Span::new(start, cursor.position());
                return Err(LexError::UnclosedString { span });
            }
            Some(b'"') => {
                cursor.bump(1);
                break;
            }
            Some(b'\\') => cursor.bump(2),
            Some(_) => cursor.bump(1),
        }
    }

    let lexeme = cursor.slice_from(start);
    let span = Span::new(start, cursor.position());
    Ok(Token::new(TokenKind::StandardString, span, lexeme))
}
