//! Compile tslisp source to JavaScript.
//!
//! ```
//! assert_eq!(tslisp_core::compile("(add 1 2)").unwrap(), "(1+2)");
//! ```
//!
//! The pipeline runs lexer, parser and generator in order, each over the
//! full output of the previous stage, and stops at the first error.

use std::fmt;

use thiserror::Error;
use tracing::{debug, trace};

pub use tslisp_codegen_js::{Arity, Builtin, GenerateError, builtins};
pub use tslisp_ir::{MAX_NESTING, Program, Token, TokenKind};
pub use tslisp_syntax::{LexError, ParseError};

/// The pipeline stage an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lex,
    Parse,
    Generate,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Lex => "lex",
            Stage::Parse => "parse",
            Stage::Generate => "generate",
        })
    }
}

/// Errors that can occur during compilation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("generate error: {0}")]
    Generate(#[from] GenerateError),
}

impl CompileError {
    pub fn stage(&self) -> Stage {
        match self {
            CompileError::Lex(_) => Stage::Lex,
            CompileError::Parse(_) => Stage::Parse,
            CompileError::Generate(_) => Stage::Generate,
        }
    }

    /// The underlying message, without the stage prefix.
    pub fn message(&self) -> String {
        match self {
            CompileError::Lex(err) => err.to_string(),
            CompileError::Parse(err) => err.to_string(),
            CompileError::Generate(err) => err.to_string(),
        }
    }
}

/// Tokenize source text.
pub fn tokenize(source: &str) -> Result<Vec<Token>, CompileError> {
    let tokens = tslisp_syntax::tokenize(source)?;
    debug!(tokens = tokens.len(), "tokenized");
    Ok(tokens)
}

/// Tokenize and parse source text.
pub fn parse(source: &str) -> Result<Program, CompileError> {
    let tokens = tokenize(source)?;
    let program = tslisp_syntax::parse(tokens)?;
    debug!(statements = program.body.len(), "parsed");
    Ok(program)
}

/// Compile source text to JavaScript.
pub fn compile(source: &str) -> Result<String, CompileError> {
    let program = parse(source)?;
    let code = tslisp_codegen_js::generate(&program)?;
    trace!(%code, "generated");
    Ok(code)
}
