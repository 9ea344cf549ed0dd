//! Prefix (Polish) expression parsing
//!
//! Operator-first recursive descent: the connective is consumed before its
//! operands, and each operand is dispatched on the kind of the token that
//! starts it. Prefix notation needs no grouping, so parentheses are not
//! part of this grammar and are rejected like any other unexpected token.

use super::ast::{AndOrOp, Ast, ImplicationOp};
use super::lexer::TokenKind;
use super::parse::{ExpressionParser, ParseError, MAX_NESTING_DEPTH};
use super::stream::TokenStream;

pub struct PrefixParser<'s> {
    stream: &'s mut TokenStream,
    /// Connectives still waiting for operands
    depth: usize,
}

impl<'s> PrefixParser<'s> {
    pub fn new(stream: &'s mut TokenStream) -> Self {
        Self { stream, depth: 0 }
    }

    /// Parse one complete prefix sub-expression starting at the cursor.
    fn visit_operand(&mut self) -> Result<Ast, ParseError> {
        let position = self.stream.current_index();
        let token = self
            .stream
            .current_token()
            .ok_or(ParseError::UnexpectedEnd { position })?;

        match token.kind() {
            TokenKind::True | TokenKind::False => self.visit_constant(),
            TokenKind::Variable => self.visit_variable(),
            TokenKind::And => self.visit_and_or_expression(AndOrOp::And),
            TokenKind::Or => self.visit_and_or_expression(AndOrOp::Or),
            TokenKind::Not => self.visit_not_expression(),
            TokenKind::Then => self.visit_implication(ImplicationOp::Then),
            TokenKind::Eq => self.visit_implication(ImplicationOp::Iff),
            TokenKind::LeftParen | TokenKind::RightParen => {
                Err(ParseError::unexpected(token, position))
            }
        }
    }

    /// Step past the connective under the cursor; an operand must follow.
    ///
    /// Each call opens one nesting level, closed by [`Self::leave`].
    fn skip_connective(&mut self) -> Result<(), ParseError> {
        if self.depth == MAX_NESTING_DEPTH {
            return Err(ParseError::TooDeep {
                position: self.stream.current_index(),
            });
        }
        self.depth += 1;

        if self.stream.advance() {
            Ok(())
        } else {
            Err(ParseError::UnexpectedEnd {
                position: self.stream.current_index(),
            })
        }
    }

    fn leave(&mut self, ast: Ast) -> Result<Ast, ParseError> {
        self.depth -= 1;
        Ok(ast)
    }

    fn visit_and_or_expression(&mut self, op: AndOrOp) -> Result<Ast, ParseError> {
        self.skip_connective()?;
        let left = self.visit_operand()?;
        let right = self.visit_operand()?;
        self.leave(Ast::and_or(left, op, right))
    }

    fn visit_implication(&mut self, op: ImplicationOp) -> Result<Ast, ParseError> {
        self.skip_connective()?;
        let left = self.visit_operand()?;
        let right = self.visit_operand()?;
        self.leave(Ast::implication(left, op, right))
    }

    fn visit_not_expression(&mut self) -> Result<Ast, ParseError> {
        self.skip_connective()?;
        let operand = self.visit_operand()?;
        self.leave(Ast::not(operand))
    }
}

impl ExpressionParser for PrefixParser<'_> {
    fn stream(&mut self) -> &mut TokenStream {
        self.stream
    }

    fn parse(&mut self) -> Result<Ast, ParseError> {
        if self.stream.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        self.depth = 0;
        let ast = self.visit_operand()?;
        self.expect_end()?;
        Ok(ast)
    }
}
