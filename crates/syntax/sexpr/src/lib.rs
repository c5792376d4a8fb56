//! S-expression front end.
//!
//! [`Lexer`] turns source text into tokens, [`Parser`] turns tokens into a
//! [`Program`]. Both stop at the first error.

mod lexer;
mod parser;

pub use lexer::{LexError, Lexer};
pub use parser::{ParseError, Parser};

use tslisp_ir::{Program, Token};

/// Tokenize source text.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Parse an already tokenized program.
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    Parser::new(tokens).parse()
}

#[cfg(test)]
mod tests;
