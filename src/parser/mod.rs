//! Propositional logic expression parser
//!
//! This module turns expression text into an Abstract Syntax Tree (AST) and
//! back:
//! - [`lexer`]: Tokenization (text → [`TokenStream`])
//! - [`stream`]: The token cursor shared by the parsers
//! - [`ast`]: AST node definitions
//! - [`parse`]: Error type, parser contract and entry points
//! - [`infix`], [`prefix`], [`postfix`]: The three parsing strategies
//! - [`printer`]: Rendering a tree in each notation
//!
//! # Grammar
//!
//! ```text
//! Expression      := AndOrExpression ( ( '->' | '<->' ) AndOrExpression )?
//! AndOrExpression := NotExpression ( ( 'And' | 'Or' ) NotExpression )?
//! NotExpression   := 'Not'? Factor
//! Factor          := Constant | Variable | '(' Expression ')'
//! Constant        := 'T' | 'F' | 'True' | 'False'   (any case)
//! Variable        := any identifier not matching a keyword
//! ```
//!
//! The grammar governs infix input. Prefix and postfix input use the same
//! connectives without parentheses.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent for infix and prefix, and an explicit
//! operand stack for postfix. No external parser generator dependencies.

pub mod ast;
pub mod infix;
pub mod lexer;
pub mod parse;
pub mod postfix;
pub mod prefix;
pub mod printer;
pub mod stream;

#[cfg(test)]
mod property_tests;

pub use ast::{AndOrOp, Ast, ImplicationOp};
pub use infix::InfixParser;
pub use lexer::{lex, LexError, Lexer, Token, TokenKind};
pub use parse::{parse_as, parse_with_fallback, ExpressionParser, ParseError, MAX_NESTING_DEPTH};
pub use postfix::PostfixParser;
pub use prefix::PrefixParser;
pub use printer::{render, Notation};
pub use stream::TokenStream;
