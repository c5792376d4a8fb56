//! Lexical tokens.

use serde::Serialize;
use std::fmt;

/// The closed set of token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    LeftParen,
    RightParen,
    Dot,
    Plus,
    Minus,
    Star,
    Slash,
    /// Reserved. `true` lexes as [`TokenKind::Text`].
    True,
    /// Reserved. `false` lexes as [`TokenKind::Text`].
    False,
    /// Reserved. `undefined` lexes as [`TokenKind::Text`].
    Undefined,
    /// Reserved. `null` lexes as [`TokenKind::Text`].
    Null,
    /// Identifier text.
    Text,
    StringLiteral,
    NumberLiteral,
}

impl TokenKind {
    /// Human-readable description used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::Dot => "'.'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Undefined => "undefined",
            TokenKind::Null => "null",
            TokenKind::Text => "text",
            TokenKind::StringLiteral => "string literal",
            TokenKind::NumberLiteral => "number literal",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A token: a kind and the text it was lexed from.
///
/// For string literals the text is the content between the quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Text | TokenKind::NumberLiteral => write!(f, "{} '{}'", self.kind, self.text),
            TokenKind::StringLiteral => write!(f, "{} \"{}\"", self.kind, self.text),
            kind => write!(f, "{}", kind),
        }
    }
}
