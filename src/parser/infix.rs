//! Infix expression parsing
//!
//! Recursive descent with one method per non-terminal:
//!
//! ```text
//! Expression      := AndOrExpression ( ( '->' | '<->' ) AndOrExpression )?
//! AndOrExpression := NotExpression ( ( 'And' | 'Or' ) NotExpression )?
//! NotExpression   := 'Not'? Factor
//! Factor          := Constant | Variable | '(' Expression ')'
//! ```
//!
//! Each band consumes at most one connective, so `P And Q And R` is
//! rejected; chains must be grouped with parentheses.

use super::ast::{AndOrOp, Ast, ImplicationOp};
use super::lexer::TokenKind;
use super::parse::{ExpressionParser, ParseError, MAX_NESTING_DEPTH};
use super::stream::TokenStream;

/// Operator-precedence recursive descent parser
pub struct InfixParser<'s> {
    stream: &'s mut TokenStream,
    /// Open parentheses around the cursor
    depth: usize,
}

impl<'s> InfixParser<'s> {
    pub fn new(stream: &'s mut TokenStream) -> Self {
        Self { stream, depth: 0 }
    }

    fn current_kind(&self) -> Option<TokenKind> {
        self.stream.current_token().map(|token| token.kind())
    }

    /// Step past a connective; there must be an operand after it.
    fn advance_to_operand(&mut self) -> Result<(), ParseError> {
        if self.stream.advance() {
            Ok(())
        } else {
            Err(ParseError::UnexpectedEnd {
                position: self.stream.current_index(),
            })
        }
    }

    fn visit_expression(&mut self) -> Result<Ast, ParseError> {
        let left = self.visit_and_or_expression()?;

        let op = match self.current_kind() {
            Some(TokenKind::Then) => ImplicationOp::Then,
            Some(TokenKind::Eq) => ImplicationOp::Iff,
            _ => return Ok(left),
        };

        self.advance_to_operand()?;
        let right = self.visit_and_or_expression()?;

        Ok(Ast::implication(left, op, right))
    }

    fn visit_and_or_expression(&mut self) -> Result<Ast, ParseError> {
        let left = self.visit_not_expression()?;

        let op = match self.current_kind() {
            Some(TokenKind::And) => AndOrOp::And,
            Some(TokenKind::Or) => AndOrOp::Or,
            _ => return Ok(left),
        };

        self.advance_to_operand()?;
        let right = self.visit_not_expression()?;

        Ok(Ast::and_or(left, op, right))
    }

    fn visit_not_expression(&mut self) -> Result<Ast, ParseError> {
        match self.current_kind() {
            None => Err(ParseError::UnexpectedEnd {
                position: self.stream.current_index(),
            }),
            Some(TokenKind::Not) => {
                self.advance_to_operand()?;
                let operand = self.visit_factor()?;
                Ok(Ast::not(operand))
            }
            Some(_) => self.visit_factor(),
        }
    }

    fn visit_factor(&mut self) -> Result<Ast, ParseError> {
        let position = self.stream.current_index();
        let token = self
            .stream
            .current_token()
            .ok_or(ParseError::UnexpectedEnd { position })?;

        match token.kind() {
            TokenKind::True | TokenKind::False => self.visit_constant(),
            TokenKind::Variable => self.visit_variable(),
            TokenKind::LeftParen => {
                if self.depth == MAX_NESTING_DEPTH {
                    return Err(ParseError::TooDeep { position });
                }
                self.depth += 1;
                self.advance_to_operand()?;
                let inner = self.visit_expression()?;

                let position = self.stream.current_index();
                match self.stream.current_token() {
                    Some(token) if token.kind() == TokenKind::RightParen => {}
                    Some(token) => {
                        return Err(ParseError::UnclosedParen {
                            found: token.to_string(),
                            position,
                        })
                    }
                    None => {
                        return Err(ParseError::UnclosedParen {
                            found: "end of input".to_string(),
                            position,
                        })
                    }
                }

                self.stream.advance();
                self.depth -= 1;
                Ok(Ast::factor(inner))
            }
            _ => Err(ParseError::unexpected(token, position)),
        }
    }
}

impl ExpressionParser for InfixParser<'_> {
    fn stream(&mut self) -> &mut TokenStream {
        self.stream
    }

    fn parse(&mut self) -> Result<Ast, ParseError> {
        if self.stream.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        self.depth = 0;
        let ast = self.visit_expression()?;
        self.expect_end()?;
        Ok(ast)
    }
}
