//! Notation printer
//!
//! Renders an [`Ast`] back to linear text. Each notation is an independent
//! read-only walk over the tree. [`Ast::Factor`] is transparent in every
//! notation; the infix walk already wraps each negation and binary node in
//! parentheses, which keeps infix output re-parseable.
//!
//! Spacing follows a fixed shape per notation:
//!
//! | Notation | `P And Q`     |
//! |----------|---------------|
//! | Infix    | `( P ∧ Q ) `  |
//! | Prefix   | `∧ P Q`       |
//! | Postfix  | `P Q ∧ `      |

use super::ast::Ast;
use std::fmt;

const NEGATION: &str = "¬";

/// Linear text renderings of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    Infix,
    Prefix,
    Postfix,
}

impl Notation {
    pub const ALL: [Notation; 3] = [Notation::Infix, Notation::Prefix, Notation::Postfix];
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Infix => write!(f, "Infix"),
            Notation::Prefix => write!(f, "Prefix"),
            Notation::Postfix => write!(f, "Postfix"),
        }
    }
}

/// Render `ast` in the requested notation.
pub fn render(ast: &Ast, notation: Notation) -> String {
    let mut out = String::new();
    match notation {
        Notation::Infix => write_infix(ast, &mut out),
        Notation::Prefix => write_prefix(ast, &mut out),
        Notation::Postfix => write_postfix(ast, &mut out),
    }
    out
}

fn constant_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Appends `token` followed by one space.
fn push_spaced(out: &mut String, token: &str) {
    out.push_str(token);
    out.push(' ');
}

fn write_infix(ast: &Ast, out: &mut String) {
    match ast {
        Ast::Constant(value) => push_spaced(out, constant_text(*value)),
        Ast::Variable(name) => push_spaced(out, name),
        Ast::Factor(inner) => write_infix(inner, out),
        Ast::Not(operand) => {
            push_spaced(out, "(");
            push_spaced(out, NEGATION);
            write_infix(operand, out);
            push_spaced(out, ")");
        }
        Ast::AndOr { left, right, op } => {
            push_spaced(out, "(");
            write_infix(left, out);
            push_spaced(out, op.symbol());
            write_infix(right, out);
            push_spaced(out, ")");
        }
        Ast::Implication { left, right, op } => {
            push_spaced(out, "(");
            write_infix(left, out);
            push_spaced(out, op.symbol());
            write_infix(right, out);
            push_spaced(out, ")");
        }
    }
}

// Prefix joins tokens with single spaces and leaves no trailing one.
fn write_prefix(ast: &Ast, out: &mut String) {
    fn push_joined(out: &mut String, token: &str) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }

    match ast {
        Ast::Constant(value) => push_joined(out, constant_text(*value)),
        Ast::Variable(name) => push_joined(out, name),
        Ast::Factor(inner) => write_prefix(inner, out),
        Ast::Not(operand) => {
            push_joined(out, NEGATION);
            write_prefix(operand, out);
        }
        Ast::AndOr { left, right, op } => {
            push_joined(out, op.symbol());
            write_prefix(left, out);
            write_prefix(right, out);
        }
        Ast::Implication { left, right, op } => {
            push_joined(out, op.symbol());
            write_prefix(left, out);
            write_prefix(right, out);
        }
    }
}

fn write_postfix(ast: &Ast, out: &mut String) {
    match ast {
        Ast::Constant(value) => push_spaced(out, constant_text(*value)),
        Ast::Variable(name) => push_spaced(out, name),
        Ast::Factor(inner) => write_postfix(inner, out),
        Ast::Not(operand) => {
            write_postfix(operand, out);
            push_spaced(out, NEGATION);
        }
        Ast::AndOr { left, right, op } => {
            write_postfix(left, out);
            write_postfix(right, out);
            push_spaced(out, op.symbol());
        }
        Ast::Implication { left, right, op } => {
            write_postfix(left, out);
            write_postfix(right, out);
            push_spaced(out, op.symbol());
        }
    }
}
