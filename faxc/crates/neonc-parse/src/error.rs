//! Parse error taxonomy.

use neonc_lex::{LexError, TokenKind};
use neonc_util::Span;
use thiserror::Error;

/// Every parse routine returns `Result<T, ParseError>` and propagates the
/// first failure unchanged; there is no error recovery and no rewrapping.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("unexpected token {actual:?} at {span:?}, expected one of {expected:?}")]
    UnexpectedToken {
        actual: TokenKind,
        span: Span,
        expected: Vec<TokenKind>,
    },

    #[error("malformed lambda parameter at {0:?}: expected a bare identifier")]
    MalformedLambdaParam(Span),

    #[error("missing '=>' after typed lambda parameter list at {0:?}")]
    MissingLambdaArrow(Span),

    #[error(transparent)]
    Lex(#[from] LexError),
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. } => *span,
            ParseError::MalformedLambdaParam(span) => *span,
            ParseError::MissingLambdaArrow(span) => *span,
            ParseError::Lex(e) => e.span(),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
