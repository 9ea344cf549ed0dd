//! Lexer (tokenizer) for propositional logic expressions
//!
//! Converts raw input text into a [`TokenStream`] consumed by the parsers.
//! The scan is a single left-to-right pass driven by an explicit
//! [`LexState`] machine. A sentinel space is appended to the input so the
//! last identifier or operator always sees a terminator.

use super::stream::TokenStream;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Kinds of lexical units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    True,
    False,
    Variable,
    And,
    Or,
    Not,
    Then, // ->
    Eq,   // <->
    LeftParen,
    RightParen,
}

impl TokenKind {
    /// True for the two boolean constants.
    pub fn is_constant(self) -> bool {
        matches!(self, TokenKind::True | TokenKind::False)
    }
}

/// A single lexical unit.
///
/// `value` is fixed at construction: `Some(true)` for [`TokenKind::True`],
/// `Some(false)` for [`TokenKind::False`] and `None` for everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    kind: TokenKind,
    value: Option<bool>,
    column: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind, column: usize) -> Self {
        let value = match kind {
            TokenKind::True => Some(true),
            TokenKind::False => Some(false),
            _ => None,
        };
        Self {
            text: text.into(),
            kind,
            value,
            column,
        }
    }

    /// The literal spelling as it appeared in the input.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn value(&self) -> Option<bool> {
        self.value
    }

    /// 1-based column of the token's first character.
    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Variable => write!(f, "variable '{}'", self.text),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("invalid character '{ch}' at column {column}")]
    InvalidCharacter { ch: char, column: usize },

    /// A `<` that is not followed by exactly `->`.
    #[error("incomplete '<->' at column {column}: found '<{found}'")]
    IncompleteBiconditional { found: String, column: usize },
}

/// States of the scanning machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    None,
    Identifier,
    SeenLeftAngle,
}

/// Lexer for propositional logic expressions
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    state: LexState,
}

impl Lexer {
    /// Create a new lexer for the given input string.
    pub fn new(input: &str) -> Self {
        let mut chars: Vec<char> = input.chars().collect();
        chars.push(' ');
        Self {
            input: chars,
            position: 0,
            state: LexState::None,
        }
    }

    /// Tokenize the entire input.
    ///
    /// No partial stream is returned: the first invalid character aborts
    /// the scan.
    pub fn tokenize(&mut self) -> Result<TokenStream, LexError> {
        let mut tokens = Vec::new();
        let mut ident = String::new();
        let mut ident_start = 0;

        while let Some(ch) = self.peek() {
            let column = self.position + 1;

            match self.state {
                LexState::None => {
                    if ch.is_whitespace() {
                        self.position += 1;
                    } else if ch.is_ascii_alphabetic() || ch == '_' {
                        // Re-scanned in the Identifier state
                        ident_start = column;
                        self.state = LexState::Identifier;
                    } else {
                        self.position += 1;
                        match ch {
                            '(' => tokens.push(Token::new("(", TokenKind::LeftParen, column)),
                            ')' => tokens.push(Token::new(")", TokenKind::RightParen, column)),
                            '∧' => tokens.push(Token::new("∧", TokenKind::And, column)),
                            '∨' => tokens.push(Token::new("∨", TokenKind::Or, column)),
                            '¬' => tokens.push(Token::new("¬", TokenKind::Not, column)),
                            '-' if self.peek() == Some('>') => {
                                self.position += 1;
                                tokens.push(Token::new("->", TokenKind::Then, column));
                            }
                            '<' => self.state = LexState::SeenLeftAngle,
                            _ => return Err(LexError::InvalidCharacter { ch, column }),
                        }
                    }
                }
                LexState::Identifier => {
                    if ch.is_ascii_alphanumeric() || ch == '_' {
                        ident.push(ch);
                        self.position += 1;
                    } else {
                        // The terminator is re-scanned in the None state
                        tokens.push(classify_identifier(std::mem::take(&mut ident), ident_start));
                        self.state = LexState::None;
                    }
                }
                LexState::SeenLeftAngle => {
                    let next = self.peek_ahead(1);
                    if ch == '-' && next == Some('>') {
                        self.position += 2;
                        tokens.push(Token::new("<->", TokenKind::Eq, column - 1));
                        self.state = LexState::None;
                    } else {
                        let found: String = [Some(ch), next].into_iter().flatten().collect();
                        return Err(LexError::IncompleteBiconditional {
                            found: found.trim_end().to_string(),
                            column: column - 1,
                        });
                    }
                }
            }
        }

        debug!(tokens = tokens.len(), "lexed token stream");
        Ok(TokenStream::new(tokens))
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }
}

/// Keywords are matched case-insensitively; anything else is a variable
/// keeping its literal spelling.
fn classify_identifier(ident: String, column: usize) -> Token {
    let kind = match ident.to_ascii_lowercase().as_str() {
        "true" | "t" => TokenKind::True,
        "false" | "f" => TokenKind::False,
        "and" => TokenKind::And,
        "or" => TokenKind::Or,
        "not" => TokenKind::Not,
        _ => TokenKind::Variable,
    };
    Token::new(ident, kind, column)
}

/// Tokenize `input` into a fresh [`TokenStream`].
pub fn lex(input: &str) -> Result<TokenStream, LexError> {
    Lexer::new(input).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        lex(input).unwrap().tokens().iter().map(Token::kind).collect()
    }

    #[test]
    fn test_simple_tokens() {
        assert_eq!(
            kinds("P And (Q Or Not R)"),
            vec![
                TokenKind::Variable,
                TokenKind::And,
                TokenKind::LeftParen,
                TokenKind::Variable,
                TokenKind::Or,
                TokenKind::Not,
                TokenKind::Variable,
                TokenKind::RightParen,
            ]
        );
    }

    #[test]
    fn test_arrows() {
        assert_eq!(
            kinds("P->Q<->R"),
            vec![
                TokenKind::Variable,
                TokenKind::Then,
                TokenKind::Variable,
                TokenKind::Eq,
                TokenKind::Variable,
            ]
        );
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(
            kinds("TRUE t False f AND or nOt"),
            vec![
                TokenKind::True,
                TokenKind::True,
                TokenKind::False,
                TokenKind::False,
                TokenKind::And,
                TokenKind::Or,
                TokenKind::Not,
            ]
        );
    }

    #[test]
    fn test_constant_values() {
        let stream = lex("T false P").unwrap();
        let values: Vec<_> = stream.tokens().iter().map(Token::value).collect();
        assert_eq!(values, vec![Some(true), Some(false), None]);
    }

    #[test]
    fn test_variable_keeps_spelling() {
        let stream = lex("p_1 Trueish").unwrap();
        assert_eq!(stream.tokens()[0].text(), "p_1");
        assert_eq!(stream.tokens()[1].text(), "Trueish");
        assert_eq!(stream.tokens()[1].kind(), TokenKind::Variable);
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(
            kinds("¬ ∧ ∨"),
            vec![TokenKind::Not, TokenKind::And, TokenKind::Or]
        );
    }

    #[test]
    fn test_columns() {
        let stream = lex("  P <-> Q").unwrap();
        let columns: Vec<_> = stream.tokens().iter().map(Token::column).collect();
        assert_eq!(columns, vec![3, 5, 9]);
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(
            lex("P # Q").unwrap_err(),
            LexError::InvalidCharacter { ch: '#', column: 3 }
        );
    }

    #[test]
    fn test_lone_dash() {
        assert!(matches!(
            lex("P - Q"),
            Err(LexError::InvalidCharacter { ch: '-', .. })
        ));
    }

    #[test]
    fn test_incomplete_biconditional() {
        assert!(matches!(
            lex("P <- Q"),
            Err(LexError::IncompleteBiconditional { ref found, column: 3 }) if found == "-"
        ));
        assert!(matches!(
            lex("P <"),
            Err(LexError::IncompleteBiconditional { .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        let stream = lex("").unwrap();
        assert!(stream.is_empty());
        assert!(lex("   \t ").unwrap().is_empty());
    }

    #[test]
    fn test_identifier_terminated_by_paren() {
        assert_eq!(
            kinds("(P)"),
            vec![TokenKind::LeftParen, TokenKind::Variable, TokenKind::RightParen]
        );
    }
}
