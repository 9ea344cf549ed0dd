//! Token cursor shared by the parsing strategies
//!
//! A [`TokenStream`] owns its tokens and a single read cursor. The token
//! sequence never changes after lexing; only the cursor moves. A parser
//! borrows the stream mutably for the duration of one parse, so two
//! parsers can never move the same cursor at once.

use super::lexer::Token;
use std::fmt;

/// Ordered token sequence with a read cursor.
///
/// The cursor ranges over `0..=len()`; `len()` means "past the end".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
    current_index: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current_index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The token under the cursor, or `None` once the cursor is past the end.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.current_index)
    }

    /// True once every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.current_index >= self.tokens.len()
    }

    /// Move the cursor forward one token.
    ///
    /// Returns whether a token is available at the new position. Advancing
    /// from the last token pins the cursor at `len()` and returns `false`.
    pub fn advance(&mut self) -> bool {
        if self.current_index + 1 >= self.tokens.len() {
            self.current_index = self.tokens.len();
            return false;
        }

        self.current_index += 1;
        true
    }

    /// Move the cursor back `n` tokens.
    ///
    /// Returns `true` if the cursor moved the full distance. Asking for more
    /// than the cursor's position clamps it to 0 and returns `false`.
    pub fn retreat(&mut self, n: usize) -> bool {
        if n > self.current_index {
            self.current_index = 0;
            return false;
        }

        self.current_index -= n;
        true
    }

    pub fn retreat_one(&mut self) -> bool {
        self.retreat(1)
    }

    /// Set the cursor directly, clamped to `len()`.
    ///
    /// Used to rewind before retrying the same tokens with another parser.
    pub fn reset(&mut self, index: usize) {
        self.current_index = index.min(self.tokens.len());
    }
}

/// Token texts, each followed by a single space.
impl fmt::Display for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{} ", token.text())?;
        }
        Ok(())
    }
}
