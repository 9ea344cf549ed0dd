//! Property-based tests for the lexer, parsers and printer.
//!
//! 1. **Lexer never panics** on arbitrary input
//! 2. **Prefix and postfix round-trip**: rendering a tree and parsing the
//!    text back with the same notation yields the same tree
//! 3. **Infix round-trip**: the same holds for infix up to grouping nodes
//! 4. **Fallback agrees** with the dedicated parser on rendered infix and
//!    prefix text

use proptest::prelude::*;

use super::ast::{AndOrOp, Ast, ImplicationOp};
use super::lexer::lex;
use super::parse::{parse_as, parse_with_fallback};
use super::printer::{render, Notation};

// ============================================================================
// Generators
// ============================================================================

const KEYWORDS: &[&str] = &["t", "f", "true", "false", "and", "or", "not"];

fn variable_name() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,4}"
        .prop_filter("keywords are not variables", |name| {
            !KEYWORDS.contains(&name.to_ascii_lowercase().as_str())
        })
}

fn leaf() -> impl Strategy<Value = Ast> {
    prop_oneof![
        any::<bool>().prop_map(Ast::constant),
        variable_name().prop_map(Ast::var),
    ]
}

fn and_or_op() -> impl Strategy<Value = AndOrOp> {
    prop_oneof![Just(AndOrOp::And), Just(AndOrOp::Or)]
}

fn implication_op() -> impl Strategy<Value = ImplicationOp> {
    prop_oneof![Just(ImplicationOp::Then), Just(ImplicationOp::Iff)]
}

/// Arbitrary expression trees, including explicit grouping nodes.
fn ast() -> impl Strategy<Value = Ast> {
    leaf().prop_recursive(5, 48, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Ast::not),
            inner.clone().prop_map(Ast::factor),
            (inner.clone(), and_or_op(), inner.clone())
                .prop_map(|(left, op, right)| Ast::and_or(left, op, right)),
            (inner.clone(), implication_op(), inner)
                .prop_map(|(left, op, right)| Ast::implication(left, op, right)),
        ]
    })
}

/// Text built from the lexer's alphabet plus a few characters it rejects.
fn lexer_soup() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("P".to_string()),
            Just("and".to_string()),
            Just("Not".to_string()),
            Just("T".to_string()),
            Just("(".to_string()),
            Just(")".to_string()),
            Just("->".to_string()),
            Just("<->".to_string()),
            Just("<-".to_string()),
            Just("<".to_string()),
            Just("-".to_string()),
            Just("∧".to_string()),
            Just("¬".to_string()),
            Just(" ".to_string()),
            Just("#".to_string()),
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

fn reparse(text: &str, notation: Notation) -> Ast {
    let mut stream = lex(text).unwrap_or_else(|e| panic!("lex {text:?}: {e}"));
    parse_as(&mut stream, notation).unwrap_or_else(|e| panic!("parse {text:?}: {e}"))
}

/// Default is 512 cases; override via `PROPTEST_CASES`.
fn proptest_config() -> ProptestConfig {
    let default = ProptestConfig::default();
    ProptestConfig {
        cases: default.cases.max(512),
        ..default
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn lexer_never_panics(input in "\\PC{0,64}") {
        let _ = lex(&input);
    }

    #[test]
    fn lexer_never_panics_on_operator_soup(input in lexer_soup()) {
        let _ = lex(&input);
    }

    #[test]
    fn parsers_never_panic(input in lexer_soup()) {
        if let Ok(stream) = lex(&input) {
            for notation in Notation::ALL {
                let mut stream = stream.clone();
                let _ = parse_as(&mut stream, notation);
            }
        }
    }

    #[test]
    fn prefix_round_trips(tree in ast()) {
        let text = render(&tree, Notation::Prefix);
        prop_assert_eq!(reparse(&text, Notation::Prefix), tree.strip_factors());
    }

    #[test]
    fn postfix_round_trips(tree in ast()) {
        let text = render(&tree, Notation::Postfix);
        prop_assert_eq!(reparse(&text, Notation::Postfix), tree.strip_factors());
    }

    #[test]
    fn infix_round_trips_up_to_grouping(tree in ast()) {
        let text = render(&tree, Notation::Infix);
        let reparsed = reparse(&text, Notation::Infix);
        prop_assert_eq!(reparsed.strip_factors(), tree.strip_factors());
        prop_assert_eq!(render(&reparsed, Notation::Infix), text);
    }

    #[test]
    fn fallback_accepts_rendered_infix(tree in ast()) {
        let text = render(&tree, Notation::Infix);
        let mut stream = lex(&text).unwrap();
        let (notation, reparsed) = parse_with_fallback(&mut stream).unwrap();
        prop_assert_eq!(notation, Notation::Infix);
        prop_assert_eq!(reparsed.strip_factors(), tree.strip_factors());
    }

    #[test]
    fn variables_survive_rendering(tree in ast(), notation in prop_oneof![
        Just(Notation::Infix),
        Just(Notation::Prefix),
        Just(Notation::Postfix),
    ]) {
        let reparsed = reparse(&render(&tree, notation), notation);
        prop_assert_eq!(reparsed.variables(), tree.variables());
    }
}
