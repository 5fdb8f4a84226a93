//! Lexer failure modes.

use neonc_util::Span;
use thiserror::Error;

/// Everything that can go wrong while tokenizing a source buffer.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// A byte (or byte run) matched no lexical rule.
    #[error("unknown token at {span:?}")]
    UnknownToken { span: Span },

    /// A `"` was opened but no closing `"` was found before end of input.
    #[error("unclosed string literal starting at {span:?}")]
    UnclosedString { span: Span },

    /// An integer literal's digits don't fit in a signed 64-bit value.
    #[error("integer literal at {span:?} overflows a 64-bit signed integer")]
    IntegerOverflow { span: Span },
}

impl LexError {
    /// The span of the offending source text, regardless of variant.
    pub const fn span(&self) -> Span {
        match self {
            LexError::UnknownToken { span }
            | LexError::UnclosedString { span }
            | LexError::IntegerOverflow { span } => *span,
        }
    }
}

/// Result alias for lexer operations.
pub type LexResult<T> = std::result::Result<T, LexError>;
