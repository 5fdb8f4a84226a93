//! neonc-lex - Lexical analyzer for the Neon front end.
//!
//! Tokenizes a UTF-8 source buffer into a stream of [`Token`]s. The lexer is
//! one-token-lookahead and streaming: it never materializes the whole token
//! stream unless the caller asks it to (via [`lex`] or `Lexer`'s `Iterator`
//! impl). Identifiers and keywords are ASCII-only, matching Neon's lexical
//! surface; there is no Unicode identifier support.

mod cursor;
mod error;
mod lexer;
mod token;
mod unicode;

pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use token::{Token, TokenKind};

/// Tokenize `source`, yielding every non-trivia token up to and including a
/// single trailing `END_OF_FILE`. This is the library's public entry point
/// named in the design (`lex(source) -> Iterator<Result<Token, LexError>>`);
/// on an empty buffer it yields exactly one token, `END_OF_FILE`.
///
/// [`Lexer`] itself (usable directly for peek/advance control) stops short of
/// `END_OF_FILE` when driven as an `Iterator`, which is more convenient for
/// callers that only want the significant token stream; this wrapper adds
/// the trailing marker back so `lex` matches its documented contract.
///
/// Stops for good the first time `advance` returns a `LexError`, rather than
/// just when it sees `END_OF_FILE`: the lexer is sticky on error (it never
/// moves the cursor past the offending byte), so a caller driving this past
/// an error without that check would loop forever re-reading the same
/// cached `Err`.
pub fn lex(source: &str) -> impl Iterator<Item = LexResult<Token<'_>>> {
    let mut lexer = Lexer::new(source);
    let mut done = false;
    std::iter::from_fn(move || {
        if done {
            return None;
        }
        let token = lexer.advance();
        match &token {
            Ok(tok) if tok.kind == TokenKind::EndOfFile => done = true,
            Err(_) => done = true,
            _ => {}
        }
        Some(token)
    })
}


/// Property tests for spec's §8 "Quantified invariants" over arbitrary
/// source buffers, not just the handful of fixed programs above: token
/// determinism and the lexeme/span correspondence hold for *any* input,
/// including ones that don't lex cleanly.
#[cfg(test)]
mod quickchecks {
    use super::*;
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    /// A source buffer drawn from Neon's own lexical alphabet (identifier
    /// characters, digits, the operator/punctuation bytes, quotes,
    /// whitespace, newlines) so generated inputs exercise real lexer rules
    /// instead of mostly bottoming out in `UnknownToken`.
    #[derive(Clone, Debug)]
    struct SourceSample(String);

    impl Arbitrary for SourceSample {
        fn arbitrary(g: &mut Gen) -> Self {
            const ALPHABET: &[u8] = b"abcXYZ_01239. \t\n+-*/%<>=!&|(){},:;\"";
            let len = usize::arbitrary(g) % 40;
            let s = (0..len)
                .map(|_| *g.choose(ALPHABET).unwrap() as char)
                .collect();
            SourceSample(s)
        }
    }

    /// `lex(S)` is a pure function of `S`: running it twice on the same
    /// buffer yields the identical token sequence, errors included.
    #[quickcheck]
    fn lex_is_deterministic(sample: SourceSample) -> bool {
        let a: Vec<_> = lex(&sample.0).collect();
        let b: Vec<_> = lex(&sample.0).collect();
        a == b
    }

    /// For every token `t` the lexer produces, `S[t.span] == t.lexeme`.
    #[quickcheck]
    fn token_lexeme_matches_its_span(sample: SourceSample) -> bool {
        lex(&sample.0).all(|result| match result {
            Ok(token) => sample.0.get(token.span.start..token.span.end) == Some(token.lexeme),
            Err(_) => true,
        })
    }
}
