//! Pratt-style expression parser plus the primary-form sub-parsers it
//! delegates to: literals, `if`, block, `for`, and the `(`-initial
//! disambiguation between a grouped expression, a tuple, and a lambda
//! parameter list.
//!
//! ```text
//! parse_expr(min_bp):
//!   lhs = parse_primary()
//!   loop:
//!     if op is postfix '(' with bp >= min_bp: consume args, lhs = Call(...)
//!     else if op is infix (lbp, rbp) with lbp >= min_bp: consume, rhs = parse_expr(rbp), lhs = Binary(...)
//!     else: break
//!   lhs
//! ```

use crate::ast::{
    BinOp, BinaryExpr, BlockExpr, BooleanLit, CallExpr, DoubleLit, ElifExpr, Expression, ForElement,
    ForExpr, ForLetElement, ForMonadicElement, IdentExpr, IfExpr, IntegerLit, LambdaExpr, LambdaParam,
    SelfExpr, Statement, StringLit, TupleExpr, UnOp, UnaryExpr,
};
use crate::error::{ParseError, ParseResult};
use crate::Parser;
use neonc_lex::TokenKind;
use neonc_util::Span;

/// `(left binding power, right binding power, operator)`. `lbp < rbp` marks
/// left associativity, which is the only associativity any entry here uses.
fn infix_bp(kind: TokenKind) -> Option<(u8, u8, BinOp)> {
    match kind {
        TokenKind::LogicalOr => Some((1, 2, BinOp::LogicalOr)),
        TokenKind::LogicalAnd => Some((3, 4, BinOp::LogicalAnd)),
        TokenKind::BitwiseOr => Some((5, 6, BinOp::BitwiseOr)),
        TokenKind::BitwiseAnd => Some((7, 8, BinOp::BitwiseAnd)),
        TokenKind::Eq => Some((9, 10, BinOp::Equal)),
        TokenKind::Neq => Some((9, 10, BinOp::NotEqual)),
        TokenKind::Lt => Some((11, 12, BinOp::LessThan)),
        TokenKind::Le => Some((11, 12, BinOp::LessEq)),
        TokenKind::Gt => Some((11, 12, BinOp::GreaterThan)),
        TokenKind::Ge => Some((11, 12, BinOp::GreaterEq)),
        TokenKind::Plus => Some((13, 14, BinOp::Addition)),
        TokenKind::Minus => Some((13, 14, BinOp::Subtraction)),
        TokenKind::Asterix => Some((15, 16, BinOp::Multiplication)),
        TokenKind::Division => Some((15, 16, BinOp::Division)),
        TokenKind::Percent => Some((15, 16, BinOp::Remainder)),
        TokenKind::Dot => Some((18, 19, BinOp::MemberAccess)),
        _ => None,
    }
}

fn prefix_bp(kind: TokenKind) -> Option<(UnOp, u8)> {
    match kind {
        TokenKind::Plus => Some((UnOp::UnaryPlus, 17)),
        TokenKind::Minus => Some((UnOp::UnaryMinus, 17)),
        TokenKind::LogicalNot => Some((UnOp::LogicalNot, 17)),
        _ => None,
    }
}

/// The only postfix operator this grammar exercises; `{` has no indexing
/// counterpart in the AST, so `TokenKind::is_postfix_operator` stays broader
/// than what the Pratt loop actually consumes here.
const POSTFIX_CALL_BP: u8 = 18;

impl<'a> Parser<'a> {
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expression<'a>> {
        self.expr_bp(0)
    }

    fn expr_bp(&mut self, min_bp: u8) -> ParseResult<Expression<'a>> {
        let mut lhs = self.parse_primary()?;

        loop {
            let kind = self.peek_kind()?;

            if kind == TokenKind::LParanthesis && POSTFIX_CALL_BP >= min_bp {
                self.advance()?;
                let args = self.parse_arg_list(TokenKind::RParanthesis)?;
                let close = self.expect(TokenKind::RParanthesis)?;
                let span = lhs.span().combine(close.span);
                lhs = Expression::Call(CallExpr { callee: Box::new(lhs), args, span });
                continue;
            }

            if let Some((lbp, rbp, op)) = infix_bp(kind) {
                if lbp < min_bp {
                    break;
                }
                self.advance()?;
                let rhs = self.expr_bp(rbp)?;
                let span = lhs.span().combine(rhs.span());
                lhs = Expression::Binary(BinaryExpr { op, left: Box::new(lhs), right: Box::new(rhs), span });
                continue;
            }

            break;
        }

        Ok(lhs)
    }

    /// Comma-separated expressions until `close`; empty list allowed, no
    /// trailing comma.
    fn parse_arg_list(&mut self, close: TokenKind) -> ParseResult<Vec<Expression<'a>>> {
        let mut args = Vec::new();
        if self.next_is(close)? {
            return Ok(args);
        }
        args.push(self.parse_expression()?);
        while self.eat(TokenKind::Comma)? {
            args.push(self.parse_expression()?);
        }
        Ok(args)
    }

    fn parse_primary(&mut self) -> ParseResult<Expression<'a>> {
        let kind = self.peek_kind()?;

        if let Some((op, rbp)) = prefix_bp(kind) {
            let tok = self.advance()?;
            let operand = self.expr_bp(rbp)?;
            let span = tok.span.combine(operand.span());
            return Ok(Expression::Unary(UnaryExpr { op, operand: Box::new(operand), span }));
        }

        match kind {
            TokenKind::Integer => self.integer_literal(),
            TokenKind::Double => self.double_literal(),
            TokenKind::True => self.boolean_literal(true),
            TokenKind::False => self.boolean_literal(false),
            TokenKind::StandardString => self.string_literal(),
            TokenKind::SelfValue => {
                let tok = self.advance()?;
                Ok(Expression::SelfValue(SelfExpr { span: tok.span }))
            }
            TokenKind::If => self.if_expr(),
            TokenKind::LBracket => self.block_expr(),
            TokenKind::LParanthesis => self.paren_initial_expr(),
            TokenKind::For => self.for_expr(),
            TokenKind::Identifier => {
                let tok = self.advance()?;
                Ok(Expression::Identifier(IdentExpr { name: tok.lexeme, span: tok.span }))
            }
            _ => {
                let tok = self.advance()?;
                Err(self.unexpected(
                    tok,
                    vec![
                        TokenKind::Integer,
                        TokenKind::Double,
                        TokenKind::True,
                        TokenKind::False,
                        TokenKind::StandardString,
                        TokenKind::SelfValue,
                        TokenKind::If,
                        TokenKind::LBracket,
                        TokenKind::LParanthesis,
                        TokenKind::For,
                        TokenKind::Identifier,
                    ],
                ))
            }
        }
    }

    fn integer_literal(&mut self) -> ParseResult<Expression<'a>> {
        let tok = self.advance()?;
        let value = tok.lexeme.parse::<i64>().expect("lexer rejects integers that overflow i64");
        Ok(Expression::Integer(IntegerLit { value, span: tok.span }))
    }

    fn double_literal(&mut self) -> ParseResult<Expression<'a>> {
        let tok = self.advance()?;
        let value = tok.lexeme.parse::<f64>().expect("lexer only emits well-formed double lexemes");
        Ok(Expression::Double(DoubleLit { value, span: tok.span }))
    }

    fn boolean_literal(&mut self, value: bool) -> ParseResult<Expression<'a>> {
        let tok = self.advance()?;
        Ok(Expression::Boolean(BooleanLit { value, span: tok.span }))
    }

    fn string_literal(&mut self) -> ParseResult<Expression<'a>> {
        let tok = self.advance()?;
        Ok(Expression::String(StringLit { raw: tok.lexeme, span: tok.span }))
    }

    /// `'if' '(' cond ')' then ('elif' '(' cond ')' body)* 'else' else`.
    fn if_expr(&mut self) -> ParseResult<Expression<'a>> {
        let start = self.expect(TokenKind::If)?.span;
        self.expect(TokenKind::LParanthesis)?;
        let cond = self.parse_expression()?;
        self.expect(TokenKind::RParanthesis)?;
        let then_branch = self.parse_expression()?;

        let mut elifs = Vec::new();
        while self.next_is(TokenKind::Elif)? {
            let elif_start = self.advance()?.span;
            self.expect(TokenKind::LParanthesis)?;
            let econd = self.parse_expression()?;
            self.expect(TokenKind::RParanthesis)?;
            let ebody = self.parse_expression()?;
            let espan = elif_start.combine(ebody.span());
            elifs.push(ElifExpr { cond: econd, body: ebody, span: espan });
        }

        self.expect(TokenKind::Else)?;
        let else_branch = self.parse_expression()?;
        let span = start.combine(else_branch.span());

        Ok(Expression::If(IfExpr {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            elifs,
            else_branch: Box::new(else_branch),
            span,
        }))
    }

    /// `'{' '=>' expr '}'` (zero statements) | `'{' expr '}'` (first
    /// statement collapses when it's bare and immediately followed by `}`)
    /// | `'{' stmt (sep stmt)* '=>' expr '}'`. The bare-expression short
    /// form only ever applies to the first statement parsed, never a later
    /// one in the list.
    fn block_expr(&mut self) -> ParseResult<Expression<'a>> {
        let open = self.expect(TokenKind::LBracket)?;

        if self.eat(TokenKind::LambdaArrow)? {
            let ret = self.parse_expression()?;
            let close = self.expect(TokenKind::RBracket)?;
            let span = open.span.combine(close.span);
            return Ok(Expression::Block(BlockExpr { stmts: vec![], return_expr: Box::new(ret), span }));
        }

        let first = self.parse_statement()?;

        if self.next_is(TokenKind::RBracket)? {
            return match first {
                Statement::Expression(e) => {
                    let close = self.advance()?;
                    let span = open.span.combine(close.span);
                    Ok(Expression::Block(BlockExpr { stmts: vec![], return_expr: Box::new(e), span }))
                }
                _ => {
                    let tok = self.peek()?;
                    Err(self.unexpected(tok, vec![TokenKind::Semicolon, TokenKind::Newline]))
                }
            };
        }

        self.expect_separator()?;
        let mut stmts = vec![first];
        while !self.next_is(TokenKind::LambdaArrow)? {
            stmts.push(self.parse_statement()?);
            self.expect_separator()?;
        }
        self.advance()?;
        let ret = self.parse_expression()?;
        let close = self.expect(TokenKind::RBracket)?;
        let span = open.span.combine(close.span);
        Ok(Expression::Block(BlockExpr { stmts, return_expr: Box::new(ret), span }))
    }

    /// `'for' '{' for_element ((';' | '\n') for_element)* (';' | '\n')? '}' expr`.
    fn for_expr(&mut self) -> ParseResult<Expression<'a>> {
        let start = self.expect(TokenKind::For)?.span;
        self.expect(TokenKind::LBracket)?;
        let elements = self.for_element_list()?;
        self.expect(TokenKind::RBracket)?;
        let ret = self.parse_expression()?;
        let span = start.combine(ret.span());
        Ok(Expression::For(ForExpr { elements, return_expr: Box::new(ret), span }))
    }

    pub(crate) fn for_element_list(&mut self) -> ParseResult<Vec<ForElement<'a>>> {
        let mut elements = vec![self.for_element()?];
        while self.peek_kind()?.is_separator() {
            self.advance()?;
            if self.next_is(TokenKind::RBracket)? {
                break;
            }
            elements.push(self.for_element()?);
        }
        Ok(elements)
    }

    fn for_element(&mut self) -> ParseResult<ForElement<'a>> {
        let name = self.identifier()?;
        if self.eat(TokenKind::LArrow)? {
            let rhs = self.parse_expression()?;
            let span = name.span.combine(rhs.span());
            Ok(ForElement::Monadic(ForMonadicElement { name, rhs, span }))
        } else if self.eat(TokenKind::Assign)? {
            let rhs = self.parse_expression()?;
            let span = name.span.combine(rhs.span());
            Ok(ForElement::Let(ForLetElement { name, rhs, span }))
        } else {
            let tok = self.peek()?;
            Err(self.unexpected(tok, vec![TokenKind::LArrow, TokenKind::Assign]))
        }
    }

    /// `(` already peeked but not consumed. Parses the first inner
    /// expression, then branches on what follows it to decide between a
    /// grouped expression, a unary lambda, a tuple, or a typed lambda
    /// parameter list.
    fn paren_initial_expr(&mut self) -> ParseResult<Expression<'a>> {
        let open = self.expect(TokenKind::LParanthesis)?;
        let first = self.parse_expression()?;

        if self.next_is(TokenKind::RParanthesis)? {
            return self.finish_grouped_or_unary_lambda(open.span, first);
        }

        if self.next_is(TokenKind::Colon)? {
            return self.finish_typed_lambda_params(open.span, vec![first]);
        }

        if self.next_is(TokenKind::Comma)? {
            let mut exprs = vec![first];
            while self.eat(TokenKind::Comma)? {
                exprs.push(self.parse_expression()?);
            }
            if self.next_is(TokenKind::Colon)? {
                return self.finish_typed_lambda_params(open.span, exprs);
            }
            return self.finish_tuple_or_lambda(open.span, exprs);
        }

        let tok = self.peek()?;
        Err(self.unexpected(tok, vec![TokenKind::RParanthesis, TokenKind::Colon, TokenKind::Comma]))
    }

    /// `first` was followed directly by `)`. Either a grouped expression, or
    /// (if `=>` follows, with an optional `-> type` in between) a unary
    /// lambda whose sole parameter is `first` reinterpreted as a name.
    fn finish_grouped_or_unary_lambda(
        &mut self,
        open: Span,
        first: Expression<'a>,
    ) -> ParseResult<Expression<'a>> {
        let close = self.expect(TokenKind::RParanthesis)?;

        let ret_type =
            if self.eat(TokenKind::RArrow)? { Some(self.parse_type()?) } else { None };

        if self.eat(TokenKind::LambdaArrow)? {
            let param = self.expr_to_lambda_param(first)?;
            let body = self.parse_expression()?;
            let span = open.combine(body.span());
            return Ok(Expression::Lambda(LambdaExpr {
                params: vec![param],
                ret_type,
                body: Box::new(body),
                span,
            }));
        }

        if ret_type.is_some() {
            return Err(ParseError::MissingLambdaArrow(close.span));
        }

        Ok(first.with_span(open.combine(close.span)))
    }

    /// The comma-separated list was followed by `)`, with no mid-list `:`
    /// detected. Either a lambda parameter list (if `=>` follows) or a
    /// plain tuple.
    fn finish_tuple_or_lambda(
        &mut self,
        open: Span,
        exprs: Vec<Expression<'a>>,
    ) -> ParseResult<Expression<'a>> {
        let close = self.expect(TokenKind::RParanthesis)?;

        let ret_type =
            if self.eat(TokenKind::RArrow)? { Some(self.parse_type()?) } else { None };

        if self.eat(TokenKind::LambdaArrow)? {
            let mut params = Vec::with_capacity(exprs.len());
            for e in exprs {
                params.push(self.expr_to_lambda_param(e)?);
            }
            let body = self.parse_expression()?;
            let span = open.combine(body.span());
            return Ok(Expression::Lambda(LambdaExpr { params, ret_type, body: Box::new(body), span }));
        }

        if ret_type.is_some() {
            return Err(ParseError::MissingLambdaArrow(close.span));
        }

        let span = open.combine(close.span);
        Ok(Expression::Tuple(TupleExpr { elems: exprs, span }))
    }

    /// A `:` was seen after `exprs`' last element: the whole list becomes a
    /// typed lambda parameter list, the type just parsed belongs to the
    /// last already-collected expression, and any further `, name (':'
    /// type)?` pairs continue the list.
    fn finish_typed_lambda_params(
        &mut self,
        open: Span,
        exprs: Vec<Expression<'a>>,
    ) -> ParseResult<Expression<'a>> {
        let mut params = Vec::with_capacity(exprs.len());
        for e in exprs {
            params.push(self.expr_to_lambda_param(e)?);
        }

        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type()?;
        {
            let last = params.last_mut().expect("a typed list always has at least one element");
            last.span = last.name.span.combine(ty.span());
            last.ty = Some(ty);
        }

        while self.eat(TokenKind::Comma)? {
            params.push(self.lambda_parameter()?);
        }

        let close = self.expect(TokenKind::RParanthesis)?;
        let ret_type =
            if self.eat(TokenKind::RArrow)? { Some(self.parse_type()?) } else { None };

        if !self.eat(TokenKind::LambdaArrow)? {
            return Err(ParseError::MissingLambdaArrow(close.span));
        }

        let body = self.parse_expression()?;
        let span = open.combine(body.span());
        Ok(Expression::Lambda(LambdaExpr { params, ret_type, body: Box::new(body), span }))
    }

    /// `IDENT (':' type)?` - a single lambda parameter parsed directly
    /// (used once the list has already committed to typed-parameter form).
    fn lambda_parameter(&mut self) -> ParseResult<LambdaParam<'a>> {
        let name = self.identifier()?;
        let mut span = name.span;
        let ty = if self.eat(TokenKind::Colon)? {
            let t = self.parse_type()?;
            span = name.span.combine(t.span());
            Some(t)
        } else {
            None
        };
        Ok(LambdaParam { name, ty, span })
    }

    fn expr_to_lambda_param(&self, expr: Expression<'a>) -> ParseResult<LambdaParam<'a>> {
        match expr {
            Expression::Identifier(IdentExpr { name, span }) => {
                Ok(LambdaParam { name: crate::ast::Identifier { name, span }, ty: None, span })
            }
            other => Err(ParseError::MalformedLambdaParam(other.span())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_expression;

    #[test]
    fn left_associative_addition() {
        let e = parse_expression("a + b + c").unwrap();
        match e {
            Expression::Binary(BinaryExpr { op: BinOp::Addition, left, .. }) => {
                assert!(matches!(*left, Expression::Binary(BinaryExpr { op: BinOp::Addition, .. })));
            }
            other => panic!("expected nested Addition, got {other:?}"),
        }
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let e = parse_expression("a + b * c").unwrap();
        match e {
            Expression::Binary(BinaryExpr { op: BinOp::Addition, right, .. }) => {
                assert!(matches!(*right, Expression::Binary(BinaryExpr { op: BinOp::Multiplication, .. })));
            }
            other => panic!("expected Addition with Multiplication rhs, got {other:?}"),
        }
    }

    #[test]
    fn prefix_operators_nest() {
        let e = parse_expression("- - x").unwrap();
        match e {
            Expression::Unary(UnaryExpr { op: UnOp::UnaryMinus, operand, .. }) => {
                assert!(matches!(*operand, Expression::Unary(UnaryExpr { op: UnOp::UnaryMinus, .. })));
            }
            other => panic!("expected nested UnaryMinus, got {other:?}"),
        }
    }

    #[test]
    fn call_expression() {
        let e = parse_expression("f(a, b)").unwrap();
        match e {
            Expression::Call(CallExpr { args, .. }) => assert_eq!(args.len(), 2),
            other => panic!("expected CallExpr, got {other:?}"),
        }
    }

    #[test]
    fn member_access_and_call_chain() {
        let e = parse_expression("a.b(c)").unwrap();
        assert!(matches!(e, Expression::Call(_)));
    }

    #[test]
    fn grouped_expression_collapses() {
        let grouped = parse_expression("(a)").unwrap();
        let bare = parse_expression("a").unwrap();
        match (grouped, bare) {
            (Expression::Identifier(g), Expression::Identifier(b)) => assert_eq!(g.name, b.name),
            other => panic!("expected matching IdentExpr pair, got {other:?}"),
        }
    }

    #[test]
    fn unary_lambda_via_parens() {
        let e = parse_expression("(a) => a").unwrap();
        match e {
            Expression::Lambda(LambdaExpr { params, .. }) => assert_eq!(params.len(), 1),
            other => panic!("expected LambdaExpr, got {other:?}"),
        }
    }

    #[test]
    fn tuple_expression() {
        let e = parse_expression("(a, b, c)").unwrap();
        match e {
            Expression::Tuple(TupleExpr { elems, .. }) => assert_eq!(elems.len(), 3),
            other => panic!("expected TupleExpr, got {other:?}"),
        }
    }

    #[test]
    fn multi_param_lambda() {
        let e = parse_expression("(a, b) => a + b").unwrap();
        match e {
            Expression::Lambda(LambdaExpr { params, .. }) => assert_eq!(params.len(), 2),
            other => panic!("expected LambdaExpr, got {other:?}"),
        }
    }

    #[test]
    fn typed_lambda_params() {
        let e = parse_expression("(a: Int, b: Int) => a + b").unwrap();
        match e {
            Expression::Lambda(LambdaExpr { params, .. }) => {
                assert!(params[0].ty.is_some());
                assert!(params[1].ty.is_some());
            }
            other => panic!("expected LambdaExpr, got {other:?}"),
        }
    }

    #[test]
    fn typed_lambda_param_type_attaches_to_element_before_colon() {
        let e = parse_expression("(a, b: Int) => b").unwrap();
        match e {
            Expression::Lambda(LambdaExpr { params, .. }) => {
                assert!(params[0].ty.is_none());
                assert!(params[1].ty.is_some());
            }
            other => panic!("expected LambdaExpr, got {other:?}"),
        }
    }

    #[test]
    fn lambda_with_explicit_return_type() {
        let e = parse_expression("(a: Int) -> Int => a").unwrap();
        match e {
            Expression::Lambda(LambdaExpr { ret_type, .. }) => assert!(ret_type.is_some()),
            other => panic!("expected LambdaExpr, got {other:?}"),
        }
    }

    #[test]
    fn tuple_of_two_without_arrow_is_not_a_lambda() {
        let e = parse_expression("(a, 1)").unwrap();
        assert!(matches!(e, Expression::Tuple(_)));
    }

    #[test]
    fn malformed_lambda_param_is_an_error() {
        let err = parse_expression("(1) => 2").unwrap_err();
        assert!(matches!(err, ParseError::MalformedLambdaParam(_)));
    }

    #[test]
    fn if_expression_requires_parens_and_else() {
        let e = parse_expression("if(a) b elif(c) d else e").unwrap();
        match e {
            Expression::If(IfExpr { elifs, .. }) => assert_eq!(elifs.len(), 1),
            other => panic!("expected IfExpr, got {other:?}"),
        }
    }

    #[test]
    fn block_short_form_collapses_to_bare_expr() {
        let e = parse_expression("{ a + b }").unwrap();
        match e {
            Expression::Block(BlockExpr { stmts, .. }) => assert!(stmts.is_empty()),
            other => panic!("expected BlockExpr, got {other:?}"),
        }
    }

    #[test]
    fn block_zero_statement_arrow_form() {
        let e = parse_expression("{ => a }").unwrap();
        match e {
            Expression::Block(BlockExpr { stmts, .. }) => assert!(stmts.is_empty()),
            other => panic!("expected BlockExpr, got {other:?}"),
        }
    }

    #[test]
    fn block_with_statements() {
        let e = parse_expression("{ let x = 1; let y = 2; => x + y }").unwrap();
        match e {
            Expression::Block(BlockExpr { stmts, .. }) => assert_eq!(stmts.len(), 2),
            other => panic!("expected BlockExpr, got {other:?}"),
        }
    }

    #[test]
    fn block_statements_may_be_newline_separated() {
        let e = parse_expression("{ let x = 1\n let y = 2\n => x + y }").unwrap();
        match e {
            Expression::Block(BlockExpr { stmts, .. }) => assert_eq!(stmts.len(), 2),
            other => panic!("expected BlockExpr, got {other:?}"),
        }
    }

    #[test]
    fn for_expression_monadic_and_let_elements() {
        let e = parse_expression("for { x <- xs; y = 1 } x + y").unwrap();
        match e {
            Expression::For(ForExpr { elements, .. }) => {
                assert!(matches!(elements[0], ForElement::Monadic(_)));
                assert!(matches!(elements[1], ForElement::Let(_)));
            }
            other => panic!("expected ForExpr, got {other:?}"),
        }
    }
}
