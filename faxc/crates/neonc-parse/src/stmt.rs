//! Statement parsing.
//!
//! ```text
//! statement = let_stmt | while_stmt | if_stmt | for_stmt | expr_stmt
//! let_stmt   = 'let' IDENT ( ':' type )? '=' expr
//! while_stmt = 'while' expr stmt_list             — bare condition, no parens
//! if_stmt    = 'if' expr stmt_list ( 'elif' expr stmt_list )* ( 'else' stmt_list )?
//! for_stmt   = 'for' '{' for_element... '}' stmt_list
//! stmt_list  = '{' stmt ( ( ';' | '\n' ) stmt )* ( ';' | '\n' )? '}'
//! ```
//!
//! `if`/`while` in statement position take a bare condition with no
//! parentheses, unlike their expression-form counterparts (`IfExpr` requires
//! `'(' cond ')'`). `else` is optional here; it is mandatory in `IfExpr`.

use crate::ast::{
    ElifStmt, ElseStmt, ForStmt, IfStmt, LetAssignment, Statement, WhileStmt,
};
use crate::error::ParseResult;
use crate::Parser;
use neonc_lex::TokenKind;
use neonc_util::Span;

impl<'a> Parser<'a> {
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Statement<'a>> {
        match self.peek_kind()? {
            TokenKind::Let => Ok(Statement::Let(self.let_assignment()?)),
            TokenKind::While => self.while_stmt(),
            TokenKind::If => self.if_stmt(),
            TokenKind::For => self.for_stmt(),
            _ => Ok(Statement::Expression(self.parse_expression()?)),
        }
    }

    /// Shared by `let` statements and top-level `let` items.
    pub(crate) fn let_assignment(&mut self) -> ParseResult<LetAssignment<'a>> {
        let start = self.expect(TokenKind::Let)?.span;
        let name = self.identifier()?;
        let ty = if self.eat(TokenKind::Colon)? { Some(self.parse_type()?) } else { None };
        self.expect(TokenKind::Assign)?;
        let rhs = self.parse_expression()?;
        let span = start.combine(rhs.span());
        Ok(LetAssignment { name, ty, rhs, span })
    }

    fn while_stmt(&mut self) -> ParseResult<Statement<'a>> {
        let start = self.expect(TokenKind::While)?.span;
        let cond = self.parse_expression()?;
        let (body, body_span) = self.stmt_list()?;
        let span = start.combine(body_span);
        Ok(Statement::While(WhileStmt { cond, body, span }))
    }

    fn if_stmt(&mut self) -> ParseResult<Statement<'a>> {
        let start = self.expect(TokenKind::If)?.span;
        let cond = self.parse_expression()?;
        let (body, body_span) = self.stmt_list()?;
        let mut last_span = start.combine(body_span);

        let mut elifs = Vec::new();
        while self.next_is(TokenKind::Elif)? {
            let elif_start = self.advance()?.span;
            let econd = self.parse_expression()?;
            let (ebody, ebody_span) = self.stmt_list()?;
            let espan = elif_start.combine(ebody_span);
            last_span = espan;
            elifs.push(ElifStmt { cond: econd, body: ebody, span: espan });
        }

        let else_ = if let Some(else_tok) = self.eat_token(TokenKind::Else)? {
            let (ebody, ebody_span) = self.stmt_list()?;
            let espan = else_tok.span.combine(ebody_span);
            last_span = espan;
            Some(ElseStmt { body: ebody, span: espan })
        } else {
            None
        };

        let span = start.combine(last_span);
        Ok(Statement::If(IfStmt { cond, body, elifs, else_, span }))
    }

    /// Designed by symmetry with `WhileStmt`'s header-then-block shape;
    /// `ForExpr` (the expression form) instead takes a bare trailing
    /// expression. See DESIGN.md for why both forms exist.
    fn for_stmt(&mut self) -> ParseResult<Statement<'a>> {
        let start = self.expect(TokenKind::For)?.span;
        self.expect(TokenKind::LBracket)?;
        let elements = self.for_element_list()?;
        self.expect(TokenKind::RBracket)?;
        let (body, body_span) = self.stmt_list()?;
        let span = start.combine(body_span);
        Ok(Statement::For(ForStmt { elements, body, span }))
    }

    /// `'{' stmt ( sep stmt )* sep? '}'`. Returns the parsed statements and
    /// the block's own span (opening `{` to closing `}`).
    pub(crate) fn stmt_list(&mut self) -> ParseResult<(Vec<Statement<'a>>, Span)> {
        let open = self.expect(TokenKind::LBracket)?.span;
        let mut stmts = Vec::new();

        if let Some(close) = self.eat_token(TokenKind::RBracket)? {
            return Ok((stmts, open.combine(close.span)));
        }

        loop {
            stmts.push(self.parse_statement()?);
            if let Some(close) = self.eat_token(TokenKind::RBracket)? {
                return Ok((stmts, open.combine(close.span)));
            }
            self.expect_separator()?;
            if let Some(close) = self.eat_token(TokenKind::RBracket)? {
                return Ok((stmts, open.combine(close.span)));
            }
        }
    }
}
