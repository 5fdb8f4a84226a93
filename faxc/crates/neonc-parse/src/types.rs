//! Type expression parsing.
//!
//! ```text
//! type       = union_type
//! union_type = tuple_type ( '|' tuple_type )*
//! tuple_type = arrow_type ( '&' arrow_type )*
//! arrow_type = opt_type ( '=>' arrow_type )?         (right-assoc)
//! opt_type   = atom_type ( '?' )*
//! atom_type  = NamedType | SelfType | '(' type_list ')' lambda_tail?
//! type_list  = type ( ',' type )*
//! lambda_tail = '=>' arrow_type
//! ```
//!
//! `&`/`|` chains are written by a single `arrow_type`/`tuple_type` call
//! consuming consecutive operands; a comma-separated `type_list` lives one
//! level higher, inside an explicit `(...)`. The two never collide: `(A & B)`
//! parses `A & B` as the sole element of an enclosing `type_list` of size 1.

use crate::ast::{LambdaType, NamedType, OptionalType, SelfType, TupleType, Type, UnionType};
use crate::error::ParseResult;
use crate::Parser;
use neonc_lex::TokenKind;

impl<'a> Parser<'a> {
    pub(crate) fn parse_type(&mut self) -> ParseResult<Type<'a>> {
        self.union_type()
    }

    fn union_type(&mut self) -> ParseResult<Type<'a>> {
        let mut parts = vec![self.tuple_type()?];
        while self.eat(TokenKind::BitwiseOr)? {
            parts.push(self.tuple_type()?);
        }
        if parts.len() == 1 {
            return Ok(parts.into_iter().next().unwrap());
        }
        let span = parts.first().unwrap().span().combine(parts.last().unwrap().span());
        Ok(Type::Union(UnionType { parts, span }))
    }

    fn tuple_type(&mut self) -> ParseResult<Type<'a>> {
        let mut parts = vec![self.arrow_type()?];
        while self.eat(TokenKind::BitwiseAnd)? {
            parts.push(self.arrow_type()?);
        }
        if parts.len() == 1 {
            return Ok(parts.into_iter().next().unwrap());
        }
        let span = parts.first().unwrap().span().combine(parts.last().unwrap().span());
        Ok(Type::Tuple(TupleType { parts, span }))
    }

    /// Right-associative: `A => B => C` is `A => (B => C)`.
    fn arrow_type(&mut self) -> ParseResult<Type<'a>> {
        let lhs = self.opt_type()?;
        if self.eat(TokenKind::LambdaArrow)? {
            let ret = self.arrow_type()?;
            let span = lhs.span().combine(ret.span());
            return Ok(Type::Lambda(LambdaType { params: vec![lhs], ret: Box::new(ret), span }));
        }
        Ok(lhs)
    }

    fn opt_type(&mut self) -> ParseResult<Type<'a>> {
        let mut ty = self.atom_type()?;
        while self.next_is(TokenKind::Questionmark)? {
            let q = self.advance()?;
            let span = ty.span().combine(q.span);
            ty = Type::Optional(OptionalType { inner: Box::new(ty), span });
        }
        Ok(ty)
    }

    fn atom_type(&mut self) -> ParseResult<Type<'a>> {
        match self.peek_kind()? {
            TokenKind::Identifier => self.named_type(),
            TokenKind::SelfType => {
                let tok = self.advance()?;
                Ok(Type::SelfType(SelfType { span: tok.span }))
            }
            TokenKind::LParanthesis => self.paren_type(),
            _ => {
                let token = self.advance()?;
                Err(self.unexpected(
                    token,
                    vec![TokenKind::Identifier, TokenKind::SelfType, TokenKind::LParanthesis],
                ))
            }
        }
    }

    fn named_type(&mut self) -> ParseResult<Type<'a>> {
        let mut path = Vec::new();
        let mut name = self.identifier()?;
        while self.eat(TokenKind::ColonColon)? {
            path.push(name);
            name = self.identifier()?;
        }
        let span = path.first().map_or(name.span, |first| first.span.combine(name.span));
        Ok(Type::Named(NamedType { path, name, span }))
    }

    /// `'(' type_list ')' lambda_tail?`. A one-element list with no trailing
    /// `=>` is just the parenthesized type (span widened to the parens); a
    /// unary lambda like `(Int) => String` falls out of `arrow_type`'s own
    /// `=>` handling one level up, not from here. A list of two or more
    /// elements requires `=>` immediately.
    fn paren_type(&mut self) -> ParseResult<Type<'a>> {
        let open = self.expect(TokenKind::LParanthesis)?;
        let mut list = vec![self.parse_type()?];
        while self.eat(TokenKind::Comma)? {
            list.push(self.parse_type()?);
        }
        let close = self.expect(TokenKind::RParanthesis)?;

        if list.len() == 1 {
            let ty = list.into_iter().next().unwrap();
            return Ok(ty.with_span(open.span.combine(close.span)));
        }

        if !self.eat(TokenKind::LambdaArrow)? {
            return Err(crate::error::ParseError::MissingLambdaArrow(close.span));
        }
        let ret = self.arrow_type()?;
        let span = open.span.combine(ret.span());
        Ok(Type::Lambda(LambdaType { params: list, ret: Box::new(ret), span }))
    }
}
