//! Line-at-a-time analysis
//!
//! A [`Session`] is the core of the read loop: each submitted line is
//! lexed once, parsed with the selected [`Strategy`], and rendered in all
//! three notations. Every result, success or failure, is kept in the
//! session history so the front ends can show it.

use crate::error::{Error, Result};
use crate::parser::{
    lex, parse_as, parse_with_fallback, render, Ast, Notation, ParseError, TokenStream,
};
use std::fmt;
use tracing::{debug, warn};

/// Which parser(s) a line is handed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Infix, then prefix on the same tokens after rewinding
    #[default]
    Auto,
    Infix,
    Prefix,
    Postfix,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Auto,
        Strategy::Infix,
        Strategy::Prefix,
        Strategy::Postfix,
    ];

    /// The single notation this strategy parses, or `None` for [`Strategy::Auto`].
    pub fn notation(self) -> Option<Notation> {
        match self {
            Strategy::Auto => None,
            Strategy::Infix => Some(Notation::Infix),
            Strategy::Prefix => Some(Notation::Prefix),
            Strategy::Postfix => Some(Notation::Postfix),
        }
    }

    /// The next strategy in [`Strategy::ALL`], wrapping around.
    pub fn next(self) -> Self {
        match self {
            Strategy::Auto => Strategy::Infix,
            Strategy::Infix => Strategy::Prefix,
            Strategy::Prefix => Strategy::Postfix,
            Strategy::Postfix => Strategy::Auto,
        }
    }

    /// Run this strategy over `stream` from its current cursor.
    pub fn parse(self, stream: &mut TokenStream) -> std::result::Result<(Notation, Ast), ParseError> {
        match self.notation() {
            None => parse_with_fallback(stream),
            Some(notation) => parse_as(stream, notation).map(|ast| (notation, ast)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Auto => write!(f, "Auto"),
            Strategy::Infix => write!(f, "Infix"),
            Strategy::Prefix => write!(f, "Prefix"),
            Strategy::Postfix => write!(f, "Postfix"),
        }
    }
}

/// A successfully parsed line with its renderings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    /// The notation whose parser accepted the line
    pub notation: Notation,
    pub ast: Ast,
    pub infix: String,
    pub prefix: String,
    pub postfix: String,
    pub variables: Vec<String>,
}

impl Parsed {
    pub fn new(notation: Notation, ast: Ast) -> Self {
        let variables = ast.variables().into_iter().map(str::to_string).collect();
        Self {
            notation,
            infix: render(&ast, Notation::Infix),
            prefix: render(&ast, Notation::Prefix),
            postfix: render(&ast, Notation::Postfix),
            variables,
            ast,
        }
    }

    pub fn rendering(&self, notation: Notation) -> &str {
        match notation {
            Notation::Infix => &self.infix,
            Notation::Prefix => &self.prefix,
            Notation::Postfix => &self.postfix,
        }
    }
}

/// The result of analyzing one input line.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub input: String,
    pub strategy: Strategy,
    /// `None` when lexing failed
    pub tokens: Option<TokenStream>,
    pub outcome: Result<Parsed>,
}

impl Analysis {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Lex `input` once and parse it with `strategy`.
pub fn analyze(input: &str, strategy: Strategy) -> Analysis {
    debug!(%strategy, input, "analyzing line");

    let mut stream = match lex(input) {
        Ok(stream) => stream,
        Err(err) => {
            warn!(error = %err, "lexical analysis failed");
            return Analysis {
                input: input.to_string(),
                strategy,
                tokens: None,
                outcome: Err(Error::Lex(err)),
            };
        }
    };

    let outcome = strategy
        .parse(&mut stream)
        .map(|(notation, ast)| Parsed::new(notation, ast))
        .map_err(Error::Parse);

    if let Err(err) = &outcome {
        warn!(error = %err, "no parser accepted the line");
    }

    Analysis {
        input: input.to_string(),
        strategy,
        tokens: Some(stream),
        outcome,
    }
}

/// History of analyzed lines plus the strategy applied to the next one.
#[derive(Debug, Default)]
pub struct Session {
    strategy: Strategy,
    history: Vec<Analysis>,
}

impl Session {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            history: Vec::new(),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Switch to the next strategy and return it.
    pub fn cycle_strategy(&mut self) -> Strategy {
        self.strategy = self.strategy.next();
        self.strategy
    }

    /// Analyze `line` with the current strategy and record the result.
    pub fn submit(&mut self, line: &str) -> &Analysis {
        let analysis = analyze(line, self.strategy);
        self.history.push(analysis);
        &self.history[self.history.len() - 1]
    }

    pub fn history(&self) -> &[Analysis] {
        &self.history
    }

    pub fn latest(&self) -> Option<&Analysis> {
        self.history.last()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::LexError;

    #[test]
    fn test_analyze_infix() {
        let analysis = analyze("P And Q", Strategy::Auto);
        let parsed = analysis.outcome.as_ref().unwrap();
        assert_eq!(parsed.notation, Notation::Infix);
        assert_eq!(parsed.infix, "( P ∧ Q ) ");
        assert_eq!(parsed.prefix, "∧ P Q");
        assert_eq!(parsed.postfix, "P Q ∧ ");
        assert_eq!(parsed.variables, vec!["P", "Q"]);
        assert_eq!(
            analysis.tokens.as_ref().map(ToString::to_string),
            Some("P And Q ".to_string())
        );
    }

    #[test]
    fn test_auto_falls_back_to_prefix() {
        let analysis = analyze("Or P Q", Strategy::Auto);
        assert_eq!(analysis.outcome.unwrap().notation, Notation::Prefix);
    }

    #[test]
    fn test_postfix_only_when_selected() {
        assert!(analyze("P Q Or", Strategy::Auto).outcome.is_err());

        let parsed = analyze("P Q Or", Strategy::Postfix).outcome.unwrap();
        assert_eq!(parsed.notation, Notation::Postfix);
        assert_eq!(parsed.rendering(Notation::Infix), "( P ∨ Q ) ");
    }

    #[test]
    fn test_single_strategy_does_not_fall_back() {
        assert!(matches!(
            analyze("Or P Q", Strategy::Infix).outcome,
            Err(Error::Parse(ParseError::UnexpectedToken { .. }))
        ));
    }

    #[test]
    fn test_lex_failure_has_no_tokens() {
        let analysis = analyze("P # Q", Strategy::Auto);
        assert!(analysis.tokens.is_none());
        assert_eq!(
            analysis.outcome.unwrap_err(),
            Error::Lex(LexError::InvalidCharacter { ch: '#', column: 3 })
        );
    }

    #[test]
    fn test_session_history_and_strategy() {
        let mut session = Session::new(Strategy::Auto);
        assert!(session.submit("P -> Q").is_ok());
        assert!(!session.submit("P ->").is_ok());

        assert_eq!(session.cycle_strategy(), Strategy::Infix);
        assert_eq!(session.submit("T").strategy, Strategy::Infix);

        assert_eq!(session.history().len(), 3);
        assert_eq!(session.latest().map(|a| a.input.as_str()), Some("T"));

        session.clear();
        assert!(session.latest().is_none());
    }

    #[test]
    fn test_strategy_cycle_wraps() {
        let mut strategy = Strategy::Auto;
        for expected in Strategy::ALL.iter().cycle().skip(1).take(4) {
            strategy = strategy.next();
            assert_eq!(strategy, *expected);
        }
        assert_eq!(strategy, Strategy::Auto);
    }
}
