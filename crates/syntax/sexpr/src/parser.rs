//! Recursive-descent parser.

use thiserror::Error;
use tslisp_ir::{
    CallExpression, Expr, Identifier, MAX_NESTING, NumberLiteral, Program, StringLiteral, Token,
    TokenKind,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found}")]
    Expected {
        expected: &'static str,
        found: String,
    },

    #[error("expression nesting exceeds {limit} levels")]
    TooDeep { limit: usize },
}

impl ParseError {
    fn expected(expected: &'static str, found: Option<&Token>) -> Self {
        ParseError::Expected {
            expected,
            found: found.map_or_else(|| "end of input".to_string(), Token::to_string),
        }
    }
}

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    /// Parse expressions until the tokens run out.
    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();
        while !self.is_at_end() {
            body.push(self.parse_expression()?);
        }
        Ok(Program::new(body))
    }

    fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        match self.peek().map(|t| t.kind) {
            Some(TokenKind::LeftParen) => Ok(self.parse_call_expression()?.into()),
            Some(TokenKind::StringLiteral) => Ok(self.parse_string_literal()?.into()),
            Some(TokenKind::NumberLiteral) => Ok(self.parse_number_literal()?.into()),
            Some(TokenKind::Text) => Ok(self.parse_identifier()?.into()),
            _ => Err(ParseError::expected("expression", self.peek())),
        }
    }

    fn parse_string_literal(&mut self) -> Result<StringLiteral, ParseError> {
        let token = self.consume(TokenKind::StringLiteral, "string literal")?;
        Ok(StringLiteral::new(token.text))
    }

    fn parse_number_literal(&mut self) -> Result<NumberLiteral, ParseError> {
        let token = self.consume(TokenKind::NumberLiteral, "number literal")?;
        Ok(NumberLiteral::new(token.text))
    }

    /// `text` followed by any number of `. text` member segments.
    fn parse_identifier(&mut self) -> Result<Identifier, ParseError> {
        let head = self.consume(TokenKind::Text, "text")?;

        let mut rest = Vec::new();
        while self.check(TokenKind::Dot) && self.check_next(TokenKind::Text) {
            self.advance();
            rest.push(self.consume(TokenKind::Text, "text")?.text);
        }

        Ok(Identifier::with_segments(head.text, rest))
    }

    fn parse_call_expression(&mut self) -> Result<CallExpression, ParseError> {
        self.consume(TokenKind::LeftParen, "'('")?;

        if self.depth >= MAX_NESTING {
            return Err(ParseError::TooDeep { limit: MAX_NESTING });
        }
        self.depth += 1;
        let call = self.parse_call_body();
        self.depth -= 1;
        call
    }

    fn parse_call_body(&mut self) -> Result<CallExpression, ParseError> {
        let callee = self.parse_identifier()?;

        let mut arguments = Vec::new();
        while !self.is_at_end() && !self.check(TokenKind::RightParen) {
            arguments.push(self.parse_expression()?);
        }

        self.consume(TokenKind::RightParen, "')'")?;

        Ok(CallExpression::new(callee, arguments))
    }

    // helpers

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    fn check_next(&self, kind: TokenKind) -> bool {
        self.tokens
            .get(self.current + 1)
            .is_some_and(|t| t.kind == kind)
    }

    fn advance(&mut self) {
        self.current += 1;
    }

    fn consume(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, ParseError> {
        if !self.check(kind) {
            return Err(ParseError::expected(expected, self.peek()));
        }
        let token = self.tokens[self.current].clone();
        self.advance();
        Ok(token)
    }
}
