//! Operator and punctuation scanning.
//!
//! Longer prefixes are matched before their shorter sub-strings so that,
//! for example, `<-` is never split into `LT` followed by `MINUS`. `//`
//! is checked before plain `/` for the same reason and hands off to the
//! comment scanner.

use neonc_util::Span;

use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::lexer::comment::lex_line_comment;
use crate::token::{Token, TokenKind};

/// Two-byte operators, longest-prefix-first within each overlapping group.
const TWO_BYTE: &[(&[u8; 2], TokenKind)] = &[
    (b"->", TokenKind::RArrow),
    (b"<-", TokenKind::LArrow),
    (b"<=", TokenKind::Le),
    (b">=", TokenKind::Ge),
    (b"==", TokenKind::Eq),
    (b"!=", TokenKind::Neq),
    (b"=>", TokenKind::LambdaArrow),
    (b"||", TokenKind::LogicalOr),
    (b"&&", TokenKind::LogicalAnd),
    (b"::", TokenKind::ColonColon),
];

const ONE_BYTE: &[(u8, TokenKind)] = &[
    (b':', TokenKind::Colon),
    (b'.', TokenKind::Dot),
    (b'/', TokenKind::Division),
    (b'<', TokenKind::Lt),
    (b'>', TokenKind::Gt),
    (b'=', TokenKind::Assign),
    (b'+', TokenKind::Plus),
    (b'-', TokenKind::Minus),
    (b'!', TokenKind::LogicalNot),
    (b'*', TokenKind::Asterix),
    (b'%', TokenKind::Percent),
    (b'(', TokenKind::LParanthesis),
    (b')', TokenKind::RParanthesis),
    (b'{', TokenKind::LBracket),
    (b'}', TokenKind::RBracket),
    (b'|', TokenKind::BitwiseOr),
    (b'&', TokenKind::BitwiseAnd),
    (b',', TokenKind::Comma),
    (b';', TokenKind::Semicolon),
    (b'?', TokenKind::Questionmark),
];

pub fn lex_operator_or_punct<'a>(cursor: &mut Cursor<'a>) -> LexResult<Token<'a>> {
    let start = cursor.position();

    if cursor.current() == Some(b'/') && cursor.byte_at(1) == Some(b'/') {
        return Ok(lex_line_comment(cursor));
    }

    if let (Some(a), Some(b)) = (cursor.current(), cursor.byte_at(1)) {
        if let Some((_, kind)) = TWO_BYTE.iter().find(|(pat, _)| **pat == [a, b]) {
            cursor.bump(2);
            let lexeme = cursor.slice_from(start);
            return Ok(Token::new(*kind, Span::new(start, cursor.position()), lexeme));
        }
    }

    if let Some(a) = cursor.current() {
        if let Some((_, kind)) = ONE_BYTE.iter().find(|(byte, _)| *byte == a) {
            cursor.bump(1);
            let lexeme = cursor.slice_from(start);
            return Ok(Token::new(*kind, Span::new(start, cursor.position()), lexeme));
        }
    }

    // Unknown byte: consume exactly one so the lexer always makes progress.
    cursor.bump(1);
    let span = Span::new(start, cursor.position());
    Err(LexError::UnknownToken { span })
}
