//! neonc-parse - recursive-descent / Pratt parser for the Neon front end.
//!
//! Consumes a source buffer through a [`neonc_lex::Lexer`] and produces a
//! span-annotated AST ([`ast`]) or a [`ParseError`]. A single [`Parser`]
//! holds the lexer and exposes private per-concern methods (types, Pratt
//! expressions, statements, top-level items) rather than splitting into
//! several mixin types sharing one lexer - one type, private slices, dispatch
//! by enum tag.

pub mod ast;
mod error;
mod expr;
mod items;
mod stmt;
mod types;

pub use error::{ParseError, ParseResult};
pub use neonc_lex::lex;

use neonc_lex::{Lexer, Token, TokenKind};

/// Holds the lexer and the source buffer it reads from.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    source: &'a str,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { lexer: Lexer::new(source), source }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Peek the next significant token without consuming it.
    fn peek(&mut self) -> ParseResult<Token<'a>> {
        Ok(self.lexer.peek()?)
    }

    fn peek_kind(&mut self) -> ParseResult<TokenKind> {
        Ok(self.peek()?.kind)
    }

    /// Consume and return the next significant token.
    fn advance(&mut self) -> ParseResult<Token<'a>> {
        Ok(self.lexer.advance()?)
    }

    fn next_is(&mut self, kind: TokenKind) -> ParseResult<bool> {
        Ok(self.peek_kind()? == kind)
    }

    /// Consume the next token if its kind matches, returning whether it did.
    fn eat(&mut self, kind: TokenKind) -> ParseResult<bool> {
        if self.next_is(kind)? {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Like [`Self::eat`], but returns the consumed token (callers that need
    /// its span, e.g. to combine into an enclosing node's span).
    fn eat_token(&mut self, kind: TokenKind) -> ParseResult<Option<Token<'a>>> {
        if self.next_is(kind)? {
            Ok(Some(self.advance()?))
        } else {
            Ok(None)
        }
    }

    /// Consume the next token, requiring it to have the given kind.
    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token<'a>> {
        let token = self.advance()?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(ParseError::UnexpectedToken {
                actual: token.kind,
                span: token.span,
                expected: vec![kind],
            })
        }
    }

    fn unexpected(&self, token: Token<'a>, expected: Vec<TokenKind>) -> ParseError {
        ParseError::UnexpectedToken { actual: token.kind, span: token.span, expected }
    }

    fn identifier(&mut self) -> ParseResult<ast::Identifier<'a>> {
        let token = self.advance()?;
        if token.kind == TokenKind::Identifier {
            Ok(ast::Identifier { name: token.lexeme, span: token.span })
        } else {
            Err(self.unexpected(token, vec![TokenKind::Identifier]))
        }
    }

    /// Consume a statement separator (`;` or `NEWLINE`), shared by block
    /// expressions and statement lists.
    fn expect_separator(&mut self) -> ParseResult<Token<'a>> {
        let token = self.advance()?;
        if token.kind.is_separator() {
            Ok(token)
        } else {
            Err(self.unexpected(token, vec![TokenKind::Semicolon, TokenKind::Newline]))
        }
    }
}

/// Parse a single expression from `source`.
pub fn parse_expression(source: &str) -> ParseResult<ast::Expression<'_>> {
    let mut parser = Parser::new(source);
    parser.parse_expression()
}

/// Parse a single type expression from `source`.
pub fn parse_type(source: &str) -> ParseResult<ast::Type<'_>> {
    let mut parser = Parser::new(source);
    parser.parse_type()
}

/// Parse a single statement from `source`.
pub fn parse_statement(source: &str) -> ParseResult<ast::Statement<'_>> {
    let mut parser = Parser::new(source);
    parser.parse_statement()
}

/// Parse a whole source file into its top-level items.
pub fn parse_program(source: &str) -> ParseResult<Vec<ast::TopLevel<'_>>> {
    let mut parser = Parser::new(source);
    parser.parse_program()
}
