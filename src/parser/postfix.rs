//! Postfix (reverse Polish) expression parsing
//!
//! A single left-to-right pass over the stream with an explicit operand
//! stack. Leaves are pushed; connectives pop their operands and push the
//! node they build. The first pop for a binary connective is its right
//! operand. A well-formed expression leaves exactly one tree on the stack.

use super::ast::{AndOrOp, Ast, ImplicationOp};
use super::lexer::TokenKind;
use super::parse::{ExpressionParser, ParseError, MAX_NESTING_DEPTH};
use super::stream::TokenStream;

/// A stacked subtree and the number of connectives on its deepest path.
type Operand = (Ast, usize);

pub struct PostfixParser<'s> {
    stream: &'s mut TokenStream,
    stack: Vec<Operand>,
}

impl<'s> PostfixParser<'s> {
    pub fn new(stream: &'s mut TokenStream) -> Self {
        Self {
            stream,
            stack: Vec::new(),
        }
    }

    fn pop_operand(&mut self, operator: &str) -> Result<Operand, ParseError> {
        self.stack.pop().ok_or_else(|| ParseError::StackUnderflow {
            operator: operator.to_string(),
            position: self.stream.current_index(),
        })
    }

    /// Pops `(left, right)` for a binary connective, with the taller height.
    fn pop_pair(&mut self, operator: &str) -> Result<(Ast, Ast, usize), ParseError> {
        let (right, right_height) = self.pop_operand(operator)?;
        let (left, left_height) = self.pop_operand(operator)?;
        Ok((left, right, left_height.max(right_height)))
    }
}

impl ExpressionParser for PostfixParser<'_> {
    fn stream(&mut self) -> &mut TokenStream {
        self.stream
    }

    fn parse(&mut self) -> Result<Ast, ParseError> {
        self.stack.clear();

        while let Some(token) = self.stream.current_token() {
            let position = self.stream.current_index();
            let kind = token.kind();
            let column = token.column();
            let operator = token.text().to_string();

            let (node, below) = match kind {
                // Leaf rules advance the cursor themselves
                TokenKind::True | TokenKind::False => {
                    let leaf = self.visit_constant()?;
                    self.stack.push((leaf, 0));
                    continue;
                }
                TokenKind::Variable => {
                    let leaf = self.visit_variable()?;
                    self.stack.push((leaf, 0));
                    continue;
                }
                TokenKind::And | TokenKind::Or => {
                    let op = if kind == TokenKind::And {
                        AndOrOp::And
                    } else {
                        AndOrOp::Or
                    };
                    let (left, right, height) = self.pop_pair(&operator)?;
                    (Ast::and_or(left, op, right), height)
                }
                TokenKind::Then | TokenKind::Eq => {
                    let op = if kind == TokenKind::Then {
                        ImplicationOp::Then
                    } else {
                        ImplicationOp::Iff
                    };
                    let (left, right, height) = self.pop_pair(&operator)?;
                    (Ast::implication(left, op, right), height)
                }
                TokenKind::Not => {
                    let (operand, height) = self.pop_operand(&operator)?;
                    (Ast::not(operand), height)
                }
                TokenKind::LeftParen | TokenKind::RightParen => {
                    return Err(ParseError::UnexpectedToken {
                        found: format!("'{}'", operator),
                        column,
                        position,
                    });
                }
            };

            if below == MAX_NESTING_DEPTH {
                return Err(ParseError::TooDeep { position });
            }
            self.stack.push((node, below + 1));

            if !self.stream.advance() {
                break;
            }
        }

        match self.stack.len() {
            0 => Err(ParseError::EmptyInput),
            1 => self
                .stack
                .pop()
                .map(|(ast, _)| ast)
                .ok_or(ParseError::EmptyInput),
            remaining => Err(ParseError::LeftoverOperands { remaining }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::lex;

    fn parse(input: &str) -> Result<Ast, ParseError> {
        let mut stream = lex(input).unwrap();
        PostfixParser::new(&mut stream).parse()
    }

    #[test]
    fn test_binary_operand_order() {
        assert_eq!(
            parse("P Q ->").unwrap(),
            Ast::implies(Ast::var("P"), Ast::var("Q"))
        );
    }

    #[test]
    fn test_nested() {
        assert_eq!(
            parse("P Q Not Or Q R And <->").unwrap(),
            Ast::iff(
                Ast::or(Ast::var("P"), Ast::not(Ast::var("Q"))),
                Ast::and(Ast::var("Q"), Ast::var("R")),
            )
        );
    }

    #[test]
    fn test_glyph_input() {
        assert_eq!(
            parse("P Q ∧").unwrap(),
            Ast::and(Ast::var("P"), Ast::var("Q"))
        );
        assert_eq!(
            parse("T ¬").unwrap(),
            Ast::not(Ast::constant(true))
        );
    }

    #[test]
    fn test_single_leaf() {
        assert_eq!(parse("F").unwrap(), Ast::constant(false));
    }

    #[test]
    fn test_underflow() {
        assert!(matches!(
            parse("P ∧"),
            Err(ParseError::StackUnderflow { ref operator, position: 1 }) if operator == "∧"
        ));
        assert!(matches!(
            parse("Not"),
            Err(ParseError::StackUnderflow { position: 0, .. })
        ));
    }

    #[test]
    fn test_leftover_operands() {
        assert_eq!(
            parse("P Q R And"),
            Err(ParseError::LeftoverOperands { remaining: 2 })
        );
    }

    #[test]
    fn test_parentheses_rejected() {
        assert!(matches!(
            parse("P Q ( And"),
            Err(ParseError::UnexpectedToken { position: 2, column: 5, .. })
        ));
    }

    #[test]
    fn test_nesting_limit() {
        let negations = |depth: usize| format!("P{}", " Not".repeat(depth));

        assert!(parse(&negations(MAX_NESTING_DEPTH)).is_ok());
        assert_eq!(
            parse(&negations(MAX_NESTING_DEPTH + 1)),
            Err(ParseError::TooDeep { position: MAX_NESTING_DEPTH + 1 })
        );
        assert!(matches!(
            parse(&negations(60_000)),
            Err(ParseError::TooDeep { .. })
        ));
    }

    #[test]
    fn test_height_follows_taller_operand() {
        let under = format!("P{} Q Or", " Not".repeat(MAX_NESTING_DEPTH - 1));
        assert!(parse(&under).is_ok());

        let over = format!("P{} Q Or", " Not".repeat(MAX_NESTING_DEPTH));
        assert!(matches!(parse(&over), Err(ParseError::TooDeep { .. })));
    }

    #[test]
    fn test_consumes_entire_stream() {
        let mut stream = lex("P Not Q Or").unwrap();
        PostfixParser::new(&mut stream).parse().unwrap();
        assert!(stream.is_at_end());
    }
}
