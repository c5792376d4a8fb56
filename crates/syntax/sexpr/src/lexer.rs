//! Single-pass lexer.

use thiserror::Error;
use tslisp_ir::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("unterminated block comment")]
    UnterminatedComment,

    #[error("unexpected token '{0}'")]
    UnexpectedChar(char),
}

pub struct Lexer {
    source: Vec<char>,
    current: usize,
    line: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            current: 0,
            line: 1,
        }
    }

    /// Line the lexer has reached, starting at 1.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(c) = self.peek() {
            match c {
                '\n' => {
                    self.line += 1;
                    self.advance();
                }
                c if c.is_whitespace() => self.advance(),
                '(' => tokens.push(self.single(TokenKind::LeftParen, c)),
                ')' => tokens.push(self.single(TokenKind::RightParen, c)),
                '.' => tokens.push(self.single(TokenKind::Dot, c)),
                '+' => tokens.push(self.single(TokenKind::Plus, c)),
                '-' => tokens.push(self.single(TokenKind::Minus, c)),
                '*' => tokens.push(self.single(TokenKind::Star, c)),
                '/' => match self.peek_next() {
                    Some('/') => self.line_comment(),
                    Some('*') => self.block_comment()?,
                    _ => tokens.push(self.single(TokenKind::Slash, c)),
                },
                '"' => tokens.push(self.string()?),
                c if c.is_ascii_alphabetic() => tokens.push(self.text()),
                c if c.is_ascii_digit() => tokens.push(self.number()),
                c => return Err(LexError::UnexpectedChar(c)),
            }
        }

        Ok(tokens)
    }

    fn single(&mut self, kind: TokenKind, c: char) -> Token {
        self.advance();
        Token::new(kind, c.to_string())
    }

    fn line_comment(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    fn block_comment(&mut self) -> Result<(), LexError> {
        // `/*`
        self.advance();
        self.advance();

        loop {
            match self.peek() {
                None => return Err(LexError::UnterminatedComment),
                Some('*') if self.peek_next() == Some('/') => {
                    self.advance();
                    self.advance();
                    return Ok(());
                }
                Some(c) => {
                    if c == '\n' {
                        self.line += 1;
                    }
                    self.advance();
                }
            }
        }
    }

    fn string(&mut self) -> Result<Token, LexError> {
        // Opening quote.
        self.advance();

        let mut value = String::new();
        loop {
            match self.peek() {
                None => return Err(LexError::UnterminatedString),
                Some('"') => break,
                Some(c) => {
                    if c == '\n' {
                        self.line += 1;
                    }
                    value.push(c);
                    self.advance();
                }
            }
        }

        // Closing quote.
        self.advance();
        Ok(Token::new(TokenKind::StringLiteral, value))
    }

    /// Identifiers. Reserved words (`true`, `null`, ...) stay plain text.
    fn text(&mut self) -> Token {
        let value = self.take_while(|c| c.is_ascii_alphanumeric());
        Token::new(TokenKind::Text, value)
    }

    fn number(&mut self) -> Token {
        let mut raw = self.take_while(|c| c.is_ascii_digit());

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            raw.push('.');
            self.advance();
            raw.push_str(&self.take_while(|c| c.is_ascii_digit()));
        }

        Token::new(TokenKind::NumberLiteral, raw)
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut out = String::new();
        while let Some(c) = self.peek().filter(|&c| pred(c)) {
            out.push(c);
            self.advance();
        }
        out
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.source.get(self.current + 1).copied()
    }

    fn advance(&mut self) {
        self.current += 1;
    }
}
