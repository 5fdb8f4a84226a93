//! Shared plumbing for the Neon compiler front end.
//!
//! Currently this is just [`span::Span`]. `neonc-lex` and `neonc-parse`
//! depend on it rather than duplicating a span type each.

pub mod span;

pub use span::Span;
