// AST (Abstract Syntax Tree) definitions for propositional logic expressions

use super::printer::{render, Notation};
use rustc_hash::FxHashSet;
use std::fmt;

/// Conjunction and disjunction, the middle precedence band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AndOrOp {
    And,
    Or,
}

impl AndOrOp {
    pub fn symbol(self) -> &'static str {
        match self {
            AndOrOp::And => "∧",
            AndOrOp::Or => "∨",
        }
    }
}

/// Implication and biconditional, the loosest precedence band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImplicationOp {
    Then,
    Iff,
}

impl ImplicationOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ImplicationOp::Then => "->",
            ImplicationOp::Iff => "<->",
        }
    }
}

/// A parsed logical expression.
///
/// Every parent owns its children exclusively, so the tree has no sharing
/// and no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast {
    Constant(bool),
    Variable(String),
    /// An explicitly parenthesized sub-expression. It has no logical
    /// meaning of its own but records where the input grouped.
    Factor(Box<Ast>),
    Not(Box<Ast>),
    AndOr {
        left: Box<Ast>,
        right: Box<Ast>,
        op: AndOrOp,
    },
    Implication {
        left: Box<Ast>,
        right: Box<Ast>,
        op: ImplicationOp,
    },
}

impl Ast {
    pub fn constant(value: bool) -> Self {
        Ast::Constant(value)
    }

    pub fn var(name: impl Into<String>) -> Self {
        Ast::Variable(name.into())
    }

    pub fn factor(inner: Ast) -> Self {
        Ast::Factor(Box::new(inner))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(operand: Ast) -> Self {
        Ast::Not(Box::new(operand))
    }

    pub fn and_or(left: Ast, op: AndOrOp, right: Ast) -> Self {
        Ast::AndOr {
            left: Box::new(left),
            right: Box::new(right),
            op,
        }
    }

    pub fn implication(left: Ast, op: ImplicationOp, right: Ast) -> Self {
        Ast::Implication {
            left: Box::new(left),
            right: Box::new(right),
            op,
        }
    }

    pub fn and(left: Ast, right: Ast) -> Self {
        Self::and_or(left, AndOrOp::And, right)
    }

    pub fn or(left: Ast, right: Ast) -> Self {
        Self::and_or(left, AndOrOp::Or, right)
    }

    pub fn implies(left: Ast, right: Ast) -> Self {
        Self::implication(left, ImplicationOp::Then, right)
    }

    pub fn iff(left: Ast, right: Ast) -> Self {
        Self::implication(left, ImplicationOp::Iff, right)
    }

    /// Returns the same tree with every [`Ast::Factor`] node removed.
    ///
    /// Two trees that differ only in explicit grouping compare equal after
    /// stripping.
    pub fn strip_factors(&self) -> Ast {
        match self {
            Ast::Constant(value) => Ast::Constant(*value),
            Ast::Variable(name) => Ast::Variable(name.clone()),
            Ast::Factor(inner) => inner.strip_factors(),
            Ast::Not(operand) => Ast::not(operand.strip_factors()),
            Ast::AndOr { left, right, op } => {
                Ast::and_or(left.strip_factors(), *op, right.strip_factors())
            }
            Ast::Implication { left, right, op } => {
                Ast::implication(left.strip_factors(), *op, right.strip_factors())
            }
        }
    }

    /// Distinct variable names in the order they first appear.
    pub fn variables(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        let mut names = Vec::new();
        self.collect_variables(&mut seen, &mut names);
        names
    }

    fn collect_variables<'a>(&'a self, seen: &mut FxHashSet<&'a str>, names: &mut Vec<&'a str>) {
        match self {
            Ast::Constant(_) => {}
            Ast::Variable(name) => {
                if seen.insert(name.as_str()) {
                    names.push(name.as_str());
                }
            }
            Ast::Factor(inner) | Ast::Not(inner) => inner.collect_variables(seen, names),
            Ast::AndOr { left, right, .. } | Ast::Implication { left, right, .. } => {
                left.collect_variables(seen, names);
                right.collect_variables(seen, names);
            }
        }
    }
}

/// Formats as infix notation.
impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, Notation::Infix))
    }
}
