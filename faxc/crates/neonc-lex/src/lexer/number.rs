//! Integer and double literal scanning.
//!
//! Rule order matters: a double is tried before an integer at any shared
//! starting position, because `double_re` subsumes `integer_re` whenever a
//! `.` follows the leading digit run (see spec's lexer contract). The caller
//! only enters this module when it has already confirmed the position is
//! digit-initial, or `.`-initial with a digit immediately following.

use neonc_util::Span;

use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::unicode::is_ascii_digit;

pub fn lex_number<'a>(cursor: &mut Cursor<'a>) -> LexResult<Token<'a>> {
    let start = cursor.position();

    let int_digits = scan_digits(cursor);
    let has_dot = cursor.current() == Some(b'.');

    if has_dot {
        cursor.bump(1);
        scan_digits(cursor);
        try_scan_exponent(cursor);

        let lexeme = cursor.slice_from(start);
        let span = Span::new(start, cursor.position());
        return Ok(Token::new(TokenKind::Double, span, lexeme));
    }

    // No dot: a plain integer. `int_digits` is always >= 1 here because the
    // caller only dispatches here at a digit, or at a `.` followed by a
    // digit (which takes the `has_dot` branch above).
    let leading_zero_multi_digit = int_digits > 1 && cursor.slice_from(start).as_bytes()[0] == b'0';
    if leading_zero_multi_digit {
        let span = Span::new(start, start + 1);
        return Err(LexError::UnknownToken { span });
    }

    let lexeme = cursor.slice_from(start);
    let span = Span::new(start, cursor.position());

    if lexeme.parse::<i64>().is_err() {
        return Err(LexError::IntegerOverflow { span });
    }

    Ok(Token::new(TokenKind::Integer, span, lexeme))
}

fn scan_digits(cursor: &mut Cursor<'_>) -> usize {
    let mut count = 0;
    while cursor.current().is_some_and(is_ascii_digit) {
        cursor.bump(1);
        count += 1;
    }
    count
}

/// Tentatively consume `[eE][+-]?[0-9]+`. If no digit follows the optional
/// sign, the whole exponent group fails to match and the cursor is rewound,
/// leaving the `e`/`E` to be lexed as the start of a following token.
fn try_scan_exponent(cursor: &mut Cursor<'_>) {
    let rewind = cursor.position();

    let Some(b'e' | b'E') = cursor.current() else {
        return;
    };
    cursor.bump(1);

    if matches!(cursor.current(), Some(b'+' | b'-')) {
        cursor.bump(1);
    }

    if scan_digits(cursor) == 0 {
        cursor.seek(rewind);
    }
}
