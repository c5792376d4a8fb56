//! Token and AST types for tslisp.
//!
//! This crate defines the data shared between the compiler stages:
//! the lexer produces [`Token`]s, the parser turns them into a
//! [`Program`], and code generators walk the program with a [`Visitor`].
//!
//! # Source language
//!
//! A program is a sequence of expressions. An expression is either a
//! literal, an identifier, or a call:
//!
//! ```text
//! (def greeting "hello")
//! (print greeting (add 1 2.5))
//! (console.log (getprop obj name))
//! ```

mod ast;
mod token;

pub use ast::{
    CallExpression, Expr, Identifier, MAX_NESTING, NumberLiteral, Program, StringLiteral, Visitor,
};
pub use token::{Token, TokenKind};
