//! Main lexer dispatch: one-token-lookahead streaming tokenizer.

use neonc_util::Span;

use crate::cursor::Cursor;
use crate::error::LexResult;
use crate::lexer::{identifier, number, operator, string};
use crate::token::{Token, TokenKind};
use crate::unicode::{is_ascii_digit, is_ident_start};

/// A streaming tokenizer with a one-token peek buffer.
///
/// `peek` is idempotent: it lexes the next token on first call and caches
/// it until [`Lexer::advance`] commits it. Once an error is produced the
/// lexer stays in that error state — the cursor never moves past the
/// offending byte, so repeated `peek`/`advance` calls keep returning the
/// same error rather than attempting to recover.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    peeked: Option<LexResult<Token<'a>>>,
    iter_done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { cursor: Cursor::new(source), peeked: None, iter_done: false }
    }

    /// Look at, without consuming, the next significant token.
    pub fn peek(&mut self) -> LexResult<Token<'a>> {
        if self.peeked.is_none() {
            self.peeked = Some(self.next_significant());
        }
        self.peeked.unwrap()
    }

    /// Commit the peeked token and advance. Returns the same value `peek`
    /// would have. Does not advance past an error.
    pub fn advance(&mut self) -> LexResult<Token<'a>> {
        let token = self.peek();
        if token.is_ok() {
            self.peeked = None;
        }
        token
    }

    /// Byte offset the cursor is currently positioned at.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    fn next_significant(&mut self) -> LexResult<Token<'a>> {
        loop {
            let token = self.lex_one()?;
            if !token.kind.is_filtered_trivia() {
                return Ok(token);
            }
        }
    }

    fn lex_one(&mut self) -> LexResult<Token<'a>> {
        let start = self.cursor.position();

        let Some(b) = self.cursor.current() else {
            return Ok(Token::new(TokenKind::EndOfFile, Span::point(start), ""));
        };

        if matches!(b, b' ' | b'\t' | b'\r' | 0x0c | 0x0b) {
            return Ok(self.lex_whitespace());
        }

        if b == b'\n' {
            return Ok(self.lex_newline());
        }

        if is_ident_start(b) {
            return identifier::lex_identifier_or_keyword(&mut self.cursor);
        }

        let next_is_digit = self.cursor.byte_at(1).is_some_and(is_ascii_digit);
        if is_ascii_digit(b) || (b == b'.' && next_is_digit) {
            return number::lex_number(&mut self.cursor);
        }

        if b == b'"' {
            return string::lex_string(&mut self.cursor);
        }

        operator::lex_operator_or_punct(&mut self.cursor)
    }

    fn lex_whitespace(&mut self) -> Token<'a> {
        let start = self.cursor.position();
        while self.cursor.current().is_some_and(|b| matches!(b, b' ' | b'\t' | b'\r' | 0x0c | 0x0b)) {
            self.cursor.bump(1);
        }
        let lexeme = self.cursor.slice_from(start);
        Token::new(TokenKind::Whitespace, Span::new(start, self.cursor.position()), lexeme)
    }

    fn lex_newline(&mut self) -> Token<'a> {
        let start = self.cursor.position();
        while self.cursor.current() == Some(b'\n') {
            self.cursor.bump(1);
        }
        let lexeme = self.cursor.slice_from(start);
        Token::new(TokenKind::Newline, Span::new(start, self.cursor.position()), lexeme)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token<'a>>;

    /// Stops *before* yielding `END_OF_FILE`, and stops for good after
    /// yielding a `LexError` once. The public [`crate::lex`] entry point
    /// wraps this to append the trailing `END_OF_FILE` per the documented
    /// contract. Stopping on error matters because the lexer is sticky:
    /// `advance` never moves the cursor past an offending byte, so without
    /// this check a caller driving the iterator past an error (`.collect()`,
    /// `.all()`, ...) would loop forever re-reading the same cached `Err`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.iter_done {
            return None;
        }
        let token = self.advance();
        match token {
            Ok(tok) if tok.kind == TokenKind::EndOfFile => {
                self.iter_done = true;
                None
            }
            Err(e) => {
                self.iter_done = true;
                Some(Err(e))
            }
            other => Some(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexError;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).map(|r| r.unwrap().kind).collect()
    }

    #[test]
    fn empty_input_yields_only_eof() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.advance().unwrap().kind, TokenKind::EndOfFile);
    }

    #[test]
    fn skips_whitespace_and_comments_but_keeps_newlines() {
        assert_eq!(
            kinds("let  // a comment\nx"),
            vec![TokenKind::Let, TokenKind::Newline, TokenKind::Identifier]
        );
    }

    #[test]
    fn peek_is_idempotent() {
        let mut lexer = Lexer::new("let x");
        let first = lexer.peek().unwrap();
        let second = lexer.peek().unwrap();
        assert_eq!(first.kind, second.kind);
        assert_eq!(first.span, second.span);
    }

    #[test]
    fn advance_moves_past_peeked_token() {
        let mut lexer = Lexer::new("let x");
        assert_eq!(lexer.advance().unwrap().kind, TokenKind::Let);
        assert_eq!(lexer.advance().unwrap().kind, TokenKind::Identifier);
    }

    #[test]
    fn error_state_is_sticky() {
        let mut lexer = Lexer::new("@@");
        let first = lexer.peek().unwrap_err();
        let second = lexer.peek().unwrap_err();
        assert_eq!(first, second);
        assert_eq!(lexer.advance().unwrap_err(), first);
    }

    #[test]
    fn full_token_stream_for_a_small_program() {
        assert_eq!(
            kinds("let x = 1 + 2"),
            vec![
                TokenKind::Let,
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Integer,
                TokenKind::Plus,
                TokenKind::Integer,
            ]
        );
    }

    #[test]
    fn lexer_stops_iteration_at_eof() {
        let mut lexer = Lexer::new("x");
        assert!(lexer.next().is_some());
        assert!(lexer.next().is_none());
    }

    #[test]
    fn lexer_stops_iteration_after_yielding_a_sticky_error() {
        // `advance` keeps replaying the same cached error on an unknown
        // byte; the iterator must stop after the first `Some(Err(..))`
        // instead of looping forever on it.
        let mut lexer = Lexer::new("@@@");
        assert!(lexer.next().unwrap().is_err());
        assert!(lexer.next().is_none());
    }

    #[test]
    fn returns_lex_error_for_unknown_byte() {
        let mut lexer = Lexer::new("@");
        assert!(matches!(lexer.advance(), Err(LexError::UnknownToken { .. })));
    }
}
