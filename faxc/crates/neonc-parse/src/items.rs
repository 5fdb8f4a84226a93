//! Top-level item parsing (`TopLevel` grammar).
//!
//! ```text
//! top_level        = function_def | namespace_def | type_def | typeclass_def
//!                   | direct_import | typeclass_import | let_stmt_top
//! function_def     = 'fun' IDENT '(' param_list? ')' '->' type block_stmts
//! param_list       = param ( ',' param )*
//! param            = IDENT ':' type
//! namespace_def    = 'namespace' IDENT '{' top_level* '}'
//! type_def         = 'type' IDENT '=' type
//! typeclass_def    = 'typeclass' IDENT '{' typeclass_member* '}'
//! typeclass_member = 'fun' IDENT '(' param_list? ')' '->' type
//! direct_import    = 'import' ( IDENT '::' )* IDENT
//! typeclass_import = 'import' 'typeclass' ( IDENT '::' )* IDENT 'for' type
//! let_stmt_top     = 'let' IDENT ( ':' type )? '=' expr
//! ```
//!
//! `namespace` and `import` have no dedicated `TokenKind`: they are ordinary
//! `IDENTIFIER` tokens, recognized by spelling only at a position where a
//! top-level item is expected. `typeclass` and `for` already have their own
//! keyword tokens (`TokenKind::Typeclass`, `TokenKind::For`) from the lexer's
//! closed keyword set, so `typeclass_import` consumes them as such rather
//! than as further soft keywords.

use crate::ast::{
    DirectImport, FunctionDefinition, FunctionParam, Namespace, TopLevel, TypeDefinition,
    TypeclassDefinition, TypeclassImport, TypeclassMember,
};
use crate::error::ParseResult;
use crate::Parser;
use neonc_lex::TokenKind;

const NAMESPACE_KW: &str = "namespace";
const IMPORT_KW: &str = "import";

impl<'a> Parser<'a> {
    pub(crate) fn parse_program(&mut self) -> ParseResult<Vec<TopLevel<'a>>> {
        let mut items = Vec::new();
        while !self.next_is(TokenKind::EndOfFile)? {
            items.push(self.top_level_item()?);
        }
        Ok(items)
    }

    fn top_level_item(&mut self) -> ParseResult<TopLevel<'a>> {
        match self.peek_kind()? {
            TokenKind::Fun => self.function_def(),
            TokenKind::Type => self.type_def(),
            TokenKind::Typeclass => self.typeclass_def(),
            TokenKind::Let => Ok(TopLevel::Let(self.let_assignment()?)),
            TokenKind::Identifier if self.peek_is_soft_keyword(NAMESPACE_KW)? => self.namespace_def(),
            TokenKind::Identifier if self.peek_is_soft_keyword(IMPORT_KW)? => self.import_item(),
            _ => {
                let tok = self.advance()?;
                Err(self.unexpected(
                    tok,
                    vec![
                        TokenKind::Fun,
                        TokenKind::Type,
                        TokenKind::Typeclass,
                        TokenKind::Let,
                        TokenKind::Identifier,
                    ],
                ))
            }
        }
    }

    fn peek_is_soft_keyword(&mut self, word: &str) -> ParseResult<bool> {
        let tok = self.peek()?;
        Ok(tok.kind == TokenKind::Identifier && tok.lexeme == word)
    }

    fn param_list(&mut self) -> ParseResult<Vec<FunctionParam<'a>>> {
        let mut params = Vec::new();
        if self.next_is(TokenKind::RParanthesis)? {
            return Ok(params);
        }
        params.push(self.function_param()?);
        while self.eat(TokenKind::Comma)? {
            params.push(self.function_param()?);
        }
        Ok(params)
    }

    fn function_param(&mut self) -> ParseResult<FunctionParam<'a>> {
        let name = self.identifier()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type()?;
        let span = name.span.combine(ty.span());
        Ok(FunctionParam { name, ty, span })
    }

    fn function_def(&mut self) -> ParseResult<TopLevel<'a>> {
        let start = self.expect(TokenKind::Fun)?.span;
        let name = self.identifier()?;
        self.expect(TokenKind::LParanthesis)?;
        let params = self.param_list()?;
        self.expect(TokenKind::RParanthesis)?;
        self.expect(TokenKind::RArrow)?;
        let ret_type = self.parse_type()?;
        let (body, body_span) = self.stmt_list()?;
        let span = start.combine(body_span);
        Ok(TopLevel::Function(FunctionDefinition { name, params, ret_type, body, span }))
    }

    fn namespace_def(&mut self) -> ParseResult<TopLevel<'a>> {
        let start = self.advance()?.span;
        let name = self.identifier()?;
        self.expect(TokenKind::LBracket)?;
        let mut items = Vec::new();
        while !self.next_is(TokenKind::RBracket)? {
            items.push(self.top_level_item()?);
        }
        let close = self.expect(TokenKind::RBracket)?;
        let span = start.combine(close.span);
        Ok(TopLevel::Namespace(Namespace { name, items, span }))
    }

    fn type_def(&mut self) -> ParseResult<TopLevel<'a>> {
        let start = self.expect(TokenKind::Type)?.span;
        let name = self.identifier()?;
        self.expect(TokenKind::Assign)?;
        let ty = self.parse_type()?;
        let span = start.combine(ty.span());
        Ok(TopLevel::TypeDef(TypeDefinition { name, ty, span }))
    }

    fn typeclass_def(&mut self) -> ParseResult<TopLevel<'a>> {
        let start = self.expect(TokenKind::Typeclass)?.span;
        let name = self.identifier()?;
        self.expect(TokenKind::LBracket)?;
        let mut members = Vec::new();
        while !self.next_is(TokenKind::RBracket)? {
            members.push(self.typeclass_member()?);
        }
        let close = self.expect(TokenKind::RBracket)?;
        let span = start.combine(close.span);
        Ok(TopLevel::TypeclassDef(TypeclassDefinition { name, members, span }))
    }

    fn typeclass_member(&mut self) -> ParseResult<TypeclassMember<'a>> {
        let start = self.expect(TokenKind::Fun)?.span;
        let name = self.identifier()?;
        self.expect(TokenKind::LParanthesis)?;
        let params = self.param_list()?;
        self.expect(TokenKind::RParanthesis)?;
        self.expect(TokenKind::RArrow)?;
        let ret_type = self.parse_type()?;
        let span = start.combine(ret_type.span());
        Ok(TypeclassMember { name, params, ret_type, span })
    }

    /// Dispatches between `direct_import` and `typeclass_import` once the
    /// soft `import` keyword has been consumed.
    fn import_item(&mut self) -> ParseResult<TopLevel<'a>> {
        let start = self.advance()?.span;

        if self.eat(TokenKind::Typeclass)? {
            let mut path = Vec::new();
            let mut name = self.identifier()?;
            while self.eat(TokenKind::ColonColon)? {
                path.push(name);
                name = self.identifier()?;
            }
            self.expect(TokenKind::For)?;
            let instance = self.parse_type()?;
            let span = start.combine(instance.span());
            return Ok(TopLevel::TypeclassImport(TypeclassImport {
                path,
                typeclass: name,
                instance,
                span,
            }));
        }

        let mut path = Vec::new();
        let mut imported = self.identifier()?;
        while self.eat(TokenKind::ColonColon)? {
            path.push(imported);
            imported = self.identifier()?;
        }
        let span = start.combine(imported.span);
        Ok(TopLevel::DirectImport(DirectImport { path, imported, span }))
    }
}
