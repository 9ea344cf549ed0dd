//! Error types for logix.

use crate::parser::{LexError, ParseError};
use thiserror::Error;

/// Any failure turning text into a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The text contains a character no token starts with
    #[error("lexical analysis failed: {0}")]
    Lex(#[from] LexError),

    /// The tokens do not form an expression
    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),
}

/// Result type for logix operations.
pub type Result<T> = std::result::Result<T, Error>;
