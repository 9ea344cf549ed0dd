//! # Introduction
//!
//! logix recognizes propositional logic expressions built from `Not`, `And`,
//! `Or`, `->`, `<->`, variables and the constants `T`/`F`, and renders a
//! recognized expression in infix, prefix and postfix notation. It only
//! recognizes structure; it never evaluates an expression.
//!
//! ## Pipeline
//!
//! ```text
//! Text → Lexer → TokenStream → Parser → AST → Printer → Text
//! ```
//!
//! 1. [`parser`]: tokenises the text, parses it with one of three
//!    strategies (infix, prefix, postfix), and prints the resulting AST.
//! 2. [`session`]: the read loop's core. It lexes a line once, runs the
//!    selected strategy (by default infix, falling back to prefix) and keeps
//!    a history of results.
//! 3. [`ui`]: ratatui-based REPL over a [`session::Session`]; not part of the
//!    stable library API.
//!
//! ## Example
//!
//! ```
//! use logix::parser::{lex, parse_with_fallback, render, Notation};
//!
//! let mut stream = lex("Not ( P Or F )").unwrap();
//! let (_, ast) = parse_with_fallback(&mut stream).unwrap();
//! assert_eq!(render(&ast, Notation::Prefix), "¬ ∨ P false");
//! ```

pub mod error;
pub mod parser;
pub mod session;
pub mod ui;

pub use error::{Error, Result};
pub use parser::{render, Ast, Notation, TokenStream};
pub use session::{analyze, Analysis, Parsed, Session, Strategy};
