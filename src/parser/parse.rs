//! Shared parser infrastructure
//!
//! This module provides the [`ParseError`] type, the [`ExpressionParser`]
//! contract every strategy implements, and the two entry points used by
//! callers:
//!
//! - [`parse_as`] runs exactly one strategy over a stream.
//! - [`parse_with_fallback`] tries infix first, rewinds, then tries prefix.
//!
//! # Parser Architecture
//!
//! - `infix`: recursive descent, one method per grammar non-terminal
//! - `prefix`: operator-first recursive descent, dispatching on token kind
//! - `postfix`: single pass with an explicit operand stack
//!
//! The leaf rules for constants and variables are provided methods on
//! [`ExpressionParser`], so all three strategies build leaves the same way.

use super::ast::Ast;
use super::infix::InfixParser;
use super::lexer::{Token, TokenKind};
use super::postfix::PostfixParser;
use super::prefix::PrefixParser;
use super::printer::Notation;
use super::stream::TokenStream;
use thiserror::Error;
use tracing::{debug, info};

/// Deepest connective or group nesting any parser accepts. Every tree walk
/// recurses once per level.
pub const MAX_NESTING_DEPTH: usize = 100;

/// Parser error type
///
/// `position` is the token index at which the failure was detected. Every
/// message names it as "token N", the index shown in the token dump.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    EmptyInput,

    #[error("unexpected end of input at token {position}")]
    UnexpectedEnd { position: usize },

    #[error("unexpected {found} at token {position} (column {column})")]
    UnexpectedToken {
        found: String,
        column: usize,
        position: usize,
    },

    #[error("expected ')' at token {position}, found {found}")]
    UnclosedParen { found: String, position: usize },

    #[error("unconsumed {found} at token {position} (column {column})")]
    TrailingTokens {
        found: String,
        column: usize,
        position: usize,
    },

    #[error("'{operator}' at token {position} is missing an operand")]
    StackUnderflow { operator: String, position: usize },

    #[error("expression at token {position} is nested deeper than {} levels", MAX_NESTING_DEPTH)]
    TooDeep { position: usize },

    #[error("{remaining} operands left without an operator")]
    LeftoverOperands { remaining: usize },

    #[error("not an infix expression ({infix}) nor a prefix expression ({prefix})")]
    Unrecognized {
        infix: Box<ParseError>,
        prefix: Box<ParseError>,
    },
}

impl ParseError {
    pub(crate) fn unexpected(token: &Token, position: usize) -> Self {
        ParseError::UnexpectedToken {
            found: token.to_string(),
            column: token.column(),
            position,
        }
    }

    pub(crate) fn trailing(token: &Token, position: usize) -> Self {
        ParseError::TrailingTokens {
            found: token.to_string(),
            column: token.column(),
            position,
        }
    }

    /// Token index of the failure, when the error has a single one.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedEnd { position }
            | ParseError::UnexpectedToken { position, .. }
            | ParseError::UnclosedParen { position, .. }
            | ParseError::TrailingTokens { position, .. }
            | ParseError::StackUnderflow { position, .. }
            | ParseError::TooDeep { position } => Some(*position),
            ParseError::EmptyInput
            | ParseError::LeftoverOperands { .. }
            | ParseError::Unrecognized { .. } => None,
        }
    }
}

/// Contract shared by the parsing strategies.
///
/// Implementors borrow a [`TokenStream`] for their whole lifetime and move
/// its cursor as they consume tokens. On failure the cursor is left where
/// the failure was detected.
pub trait ExpressionParser {
    fn stream(&mut self) -> &mut TokenStream;

    /// Parse the whole stream. Succeeds only if every token is consumed.
    fn parse(&mut self) -> Result<Ast, ParseError>;

    /// `Constant := 'T' | 'F' | 'True' | 'False'`
    fn visit_constant(&mut self) -> Result<Ast, ParseError> {
        let stream = self.stream();
        let position = stream.current_index();
        let token = stream
            .current_token()
            .ok_or(ParseError::UnexpectedEnd { position })?;

        let value = match token.value() {
            Some(value) if token.kind().is_constant() => value,
            _ => return Err(ParseError::unexpected(token, position)),
        };

        stream.advance();
        Ok(Ast::Constant(value))
    }

    /// `Variable := any identifier not matching a keyword`
    fn visit_variable(&mut self) -> Result<Ast, ParseError> {
        let stream = self.stream();
        let position = stream.current_index();
        let token = stream
            .current_token()
            .ok_or(ParseError::UnexpectedEnd { position })?;

        if token.kind() != TokenKind::Variable || token.text().is_empty() {
            return Err(ParseError::unexpected(token, position));
        }

        let ast = Ast::Variable(token.text().to_string());
        stream.advance();
        Ok(ast)
    }

    /// Fails with [`ParseError::TrailingTokens`] unless the cursor is past
    /// the last token.
    fn expect_end(&mut self) -> Result<(), ParseError> {
        let stream = self.stream();
        match stream.current_token() {
            Some(token) => Err(ParseError::trailing(token, stream.current_index())),
            None => Ok(()),
        }
    }
}

/// Parse `stream` with exactly one strategy, starting at its current cursor.
pub fn parse_as(stream: &mut TokenStream, notation: Notation) -> Result<Ast, ParseError> {
    let result = match notation {
        Notation::Infix => InfixParser::new(stream).parse(),
        Notation::Prefix => PrefixParser::new(stream).parse(),
        Notation::Postfix => PostfixParser::new(stream).parse(),
    };

    match &result {
        Ok(_) => info!(%notation, "parsed expression"),
        Err(err) => debug!(%notation, error = %err, "parse attempt failed"),
    }

    result
}

/// Try infix, then rewind to the first token and try prefix.
///
/// Postfix is never attempted here; callers that want it use [`parse_as`].
/// Returns the notation that accepted the input alongside the tree.
pub fn parse_with_fallback(stream: &mut TokenStream) -> Result<(Notation, Ast), ParseError> {
    if stream.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let infix = match parse_as(stream, Notation::Infix) {
        Ok(ast) => return Ok((Notation::Infix, ast)),
        Err(err) => err,
    };

    stream.reset(0);

    match parse_as(stream, Notation::Prefix) {
        Ok(ast) => Ok((Notation::Prefix, ast)),
        Err(prefix) => Err(ParseError::Unrecognized {
            infix: Box::new(infix),
            prefix: Box::new(prefix),
        }),
    }
}
