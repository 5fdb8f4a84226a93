//! neonc-parse - AST node definitions.
//!
//! Every node carries a `Span`. Identifiers, strings, and other lexemes are
//! non-owning views into the source buffer (`&'a str`), not interned
//! `Symbol`s: the AST borrows its source rather than owning copies of it.

use neonc_util::Span;

/// A bare identifier occurrence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Identifier<'a> {
    pub name: &'a str,
    pub span: Span,
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A type expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Type<'a> {
    Named(NamedType<'a>),
    SelfType(SelfType),
    Optional(OptionalType<'a>),
    Tuple(TupleType<'a>),
    Union(UnionType<'a>),
    Lambda(LambdaType<'a>),
}

impl<'a> Type<'a> {
    pub fn span(&self) -> Span {
        match self {
            Type::Named(t) => t.span,
            Type::SelfType(t) => t.span,
            Type::Optional(t) => t.span,
            Type::Tuple(t) => t.span,
            Type::Union(t) => t.span,
            Type::Lambda(t) => t.span,
        }
    }

    /// Rewrite this node's own span, e.g. to extend a grouped `(type)` to
    /// cover the parens. Does not touch child spans.
    pub fn with_span(mut self, span: Span) -> Self {
        match &mut self {
            Type::Named(t) => t.span = span,
            Type::SelfType(t) => t.span = span,
            Type::Optional(t) => t.span = span,
            Type::Tuple(t) => t.span = span,
            Type::Union(t) => t.span = span,
            Type::Lambda(t) => t.span = span,
        }
        self
    }
}

/// `a::b::c` - an empty `path` means an unqualified name.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedType<'a> {
    pub path: Vec<Identifier<'a>>,
    pub name: Identifier<'a>,
    pub span: Span,
}

/// The `Self` type keyword.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelfType {
    pub span: Span,
}

/// `T?`. Chains (`T??`) nest as `Optional(Optional(T))`.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionalType<'a> {
    pub inner: Box<Type<'a>>,
    pub span: Span,
}

/// `(A & B & ...)`, at least two parts.
#[derive(Debug, Clone, PartialEq)]
pub struct TupleType<'a> {
    pub parts: Vec<Type<'a>>,
    pub span: Span,
}

/// `(A | B | ...)`, at least two parts.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionType<'a> {
    pub parts: Vec<Type<'a>>,
    pub span: Span,
}

/// `(A, B) => C` or `A => C`. `params` may be empty for a zero-arg lambda.
#[derive(Debug, Clone, PartialEq)]
pub struct LambdaType<'a> {
    pub params: Vec<Type<'a>>,
    pub ret: Box<Type<'a>>,
    pub span: Span,
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

/// A value expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression<'a> {
    Integer(IntegerLit),
    Double(DoubleLit),
    Boolean(BooleanLit),
    String(StringLit<'a>),
    Identifier(IdentExpr<'a>),
    SelfValue(SelfExpr),
    Binary(BinaryExpr<'a>),
    Unary(UnaryExpr<'a>),
    Call(CallExpr<'a>),
    If(IfExpr<'a>),
    Lambda(LambdaExpr<'a>),
    Tuple(TupleExpr<'a>),
    Block(BlockExpr<'a>),
    For(ForExpr<'a>),
}

impl<'a> Expression<'a> {
    pub fn span(&self) -> Span {
        match self {
            Expression::Integer(e) => e.span,
            Expression::Double(e) => e.span,
            Expression::Boolean(e) => e.span,
            Expression::String(e) => e.span,
            Expression::Identifier(e) => e.span,
            Expression::SelfValue(e) => e.span,
            Expression::Binary(e) => e.span,
            Expression::Unary(e) => e.span,
            Expression::Call(e) => e.span,
            Expression::If(e) => e.span,
            Expression::Lambda(e) => e.span,
            Expression::Tuple(e) => e.span,
            Expression::Block(e) => e.span,
            Expression::For(e) => e.span,
        }
    }

    /// Rewrite this node's own span, e.g. to extend a grouped `(expr)` to
    /// cover the parens. Does not touch child spans.
    pub fn with_span(mut self, span: Span) -> Self {
        match &mut self {
            Expression::Integer(e) => e.span = span,
            Expression::Double(e) => e.span = span,
            Expression::Boolean(e) => e.span = span,
            Expression::String(e) => e.span = span,
            Expression::Identifier(e) => e.span = span,
            Expression::SelfValue(e) => e.span = span,
            Expression::Binary(e) => e.span = span,
            Expression::Unary(e) => e.span = span,
            Expression::Call(e) => e.span = span,
            Expression::If(e) => e.span = span,
            Expression::Lambda(e) => e.span = span,
            Expression::Tuple(e) => e.span = span,
            Expression::Block(e) => e.span = span,
            Expression::For(e) => e.span = span,
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegerLit {
    pub value: i64,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleLit {
    pub value: f64,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BooleanLit {
    pub value: bool,
    pub span: Span,
}

/// Raw lexeme including the surrounding quotes; escape sequences are left
/// uninterpreted, matching the lexer's `StandardString` token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StringLit<'a> {
    pub raw: &'a str,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdentExpr<'a> {
    pub name: &'a str,
    pub span: Span,
}

/// The `self` value keyword.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelfExpr {
    pub span: Span,
}

/// Binary operators, ordered to match the binding-power table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseAnd,
    Equal,
    NotEqual,
    LessThan,
    LessEq,
    GreaterThan,
    GreaterEq,
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Remainder,
    MemberAccess,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr<'a> {
    pub op: BinOp,
    pub left: Box<Expression<'a>>,
    pub right: Box<Expression<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    UnaryPlus,
    UnaryMinus,
    LogicalNot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr<'a> {
    pub op: UnOp,
    pub operand: Box<Expression<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr<'a> {
    pub callee: Box<Expression<'a>>,
    pub args: Vec<Expression<'a>>,
    pub span: Span,
}

/// `if(cond) then elif(cond) body ... else else_branch`. `else` is mandatory
/// in expression position (contrast `IfStmt`, where it is optional).
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr<'a> {
    pub cond: Box<Expression<'a>>,
    pub then_branch: Box<Expression<'a>>,
    pub elifs: Vec<ElifExpr<'a>>,
    pub else_branch: Box<Expression<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElifExpr<'a> {
    pub cond: Expression<'a>,
    pub body: Expression<'a>,
    pub span: Span,
}

/// `(params) (-> ret_type)? => body`.
#[derive(Debug, Clone, PartialEq)]
pub struct LambdaExpr<'a> {
    pub params: Vec<LambdaParam<'a>>,
    pub ret_type: Option<Type<'a>>,
    pub body: Box<Expression<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LambdaParam<'a> {
    pub name: Identifier<'a>,
    pub ty: Option<Type<'a>>,
    pub span: Span,
}

/// At least two elements; a single parenthesized expression collapses to
/// its inner value instead of becoming a one-element tuple.
#[derive(Debug, Clone, PartialEq)]
pub struct TupleExpr<'a> {
    pub elems: Vec<Expression<'a>>,
    pub span: Span,
}

/// Always ends with `return_expr`; `stmts` may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockExpr<'a> {
    pub stmts: Vec<Statement<'a>>,
    pub return_expr: Box<Expression<'a>>,
    pub span: Span,
}

/// `for { element; element } return_expr` - a monadic comprehension.
#[derive(Debug, Clone, PartialEq)]
pub struct ForExpr<'a> {
    pub elements: Vec<ForElement<'a>>,
    pub return_expr: Box<Expression<'a>>,
    pub span: Span,
}

/// `name <- rhs` (monadic bind) or `name = rhs` (plain let) inside a `for`.
#[derive(Debug, Clone, PartialEq)]
pub enum ForElement<'a> {
    Let(ForLetElement<'a>),
    Monadic(ForMonadicElement<'a>),
}

impl<'a> ForElement<'a> {
    pub fn span(&self) -> Span {
        match self {
            ForElement::Let(e) => e.span,
            ForElement::Monadic(e) => e.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForLetElement<'a> {
    pub name: Identifier<'a>,
    pub rhs: Expression<'a>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForMonadicElement<'a> {
    pub name: Identifier<'a>,
    pub rhs: Expression<'a>,
    pub span: Span,
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

/// A statement. `For` is not listed among spec.md §3's `Statement` variants,
/// but §4.6's dispatch table requires a `for` statement form, and
/// `original_source/include/ast/statement/ForStmt.hpp` gives its shape; it is
/// added here to reconcile the two (see DESIGN.md).
#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'a> {
    Let(LetAssignment<'a>),
    While(WhileStmt<'a>),
    If(IfStmt<'a>),
    For(ForStmt<'a>),
    Return(ReturnStmt<'a>),
    Expression(Expression<'a>),
}

impl<'a> Statement<'a> {
    pub fn span(&self) -> Span {
        match self {
            Statement::Let(s) => s.span,
            Statement::While(s) => s.span,
            Statement::If(s) => s.span,
            Statement::For(s) => s.span,
            Statement::Return(s) => s.span,
            Statement::Expression(e) => e.span(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LetAssignment<'a> {
    pub name: Identifier<'a>,
    pub ty: Option<Type<'a>>,
    pub rhs: Expression<'a>,
    pub span: Span,
}

/// `while cond { stmt_list }` - the condition is a bare expression, no
/// parenthesization (unlike `IfStmt`/`IfExpr`).
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt<'a> {
    pub cond: Expression<'a>,
    pub body: Vec<Statement<'a>>,
    pub span: Span,
}

/// Distinct from `IfExpr`: body is a statement block and `else` is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt<'a> {
    pub cond: Expression<'a>,
    pub body: Vec<Statement<'a>>,
    pub elifs: Vec<ElifStmt<'a>>,
    pub else_: Option<ElseStmt<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElifStmt<'a> {
    pub cond: Expression<'a>,
    pub body: Vec<Statement<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElseStmt<'a> {
    pub body: Vec<Statement<'a>>,
    pub span: Span,
}

/// `for { element; element } { stmt_list }` - statement form, mirroring
/// `WhileStmt`'s header-then-block shape rather than `ForExpr`'s
/// header-then-expression shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt<'a> {
    pub elements: Vec<ForElement<'a>>,
    pub body: Vec<Statement<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt<'a> {
    pub expr: Expression<'a>,
    pub span: Span,
}

// ---------------------------------------------------------------------------
// Top-level items
// ---------------------------------------------------------------------------

/// A source file is a sequence of `TopLevel` items.
#[derive(Debug, Clone, PartialEq)]
pub enum TopLevel<'a> {
    Function(FunctionDefinition<'a>),
    Namespace(Namespace<'a>),
    TypeDef(TypeDefinition<'a>),
    TypeclassDef(TypeclassDefinition<'a>),
    DirectImport(DirectImport<'a>),
    TypeclassImport(TypeclassImport<'a>),
    Let(LetAssignment<'a>),
}

impl<'a> TopLevel<'a> {
    pub fn span(&self) -> Span {
        match self {
            TopLevel::Function(t) => t.span,
            TopLevel::Namespace(t) => t.span,
            TopLevel::TypeDef(t) => t.span,
            TopLevel::TypeclassDef(t) => t.span,
            TopLevel::DirectImport(t) => t.span,
            TopLevel::TypeclassImport(t) => t.span,
            TopLevel::Let(t) => t.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionParam<'a> {
    pub name: Identifier<'a>,
    pub ty: Type<'a>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition<'a> {
    pub name: Identifier<'a>,
    pub params: Vec<FunctionParam<'a>>,
    pub ret_type: Type<'a>,
    pub body: Vec<Statement<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Namespace<'a> {
    pub name: Identifier<'a>,
    pub items: Vec<TopLevel<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeDefinition<'a> {
    pub name: Identifier<'a>,
    pub ty: Type<'a>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeclassMember<'a> {
    pub name: Identifier<'a>,
    pub params: Vec<FunctionParam<'a>>,
    pub ret_type: Type<'a>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeclassDefinition<'a> {
    pub name: Identifier<'a>,
    pub members: Vec<TypeclassMember<'a>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectImport<'a> {
    pub path: Vec<Identifier<'a>>,
    pub imported: Identifier<'a>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeclassImport<'a> {
    pub path: Vec<Identifier<'a>>,
    pub typeclass: Identifier<'a>,
    pub instance: Type<'a>,
    pub span: Span,
}
