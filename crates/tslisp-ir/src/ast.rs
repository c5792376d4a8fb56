//! Abstract syntax tree.
//!
//! Nodes are built bottom-up by the parser and never mutated afterwards.
//! Passes that need a different node (such as a renamed callee) build a
//! new one.

use serde::Serialize;
use std::fmt;

/// Deepest call nesting the stages accept. Parsing and generation recurse
/// once per level, so deeper input is rejected instead of exhausting the stack.
pub const MAX_NESTING: usize = 256;

/// A whole compilation unit: top-level expressions in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Program {
    pub body: Vec<Expr>,
}

impl Program {
    pub fn new(body: Vec<Expr>) -> Self {
        Self { body }
    }

    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_program(self)
    }
}

/// An expression in a program body or argument list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Expr {
    #[serde(rename = "CallExpression")]
    Call(CallExpression),
    Identifier(Identifier),
    StringLiteral(StringLiteral),
    NumberLiteral(NumberLiteral),
}

impl Expr {
    /// Dispatch to the visitor method for this variant.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Call(call) => visitor.visit_call(call),
            Expr::Identifier(ident) => visitor.visit_identifier(ident),
            Expr::StringLiteral(lit) => visitor.visit_string(lit),
            Expr::NumberLiteral(lit) => visitor.visit_number(lit),
        }
    }
}

impl From<CallExpression> for Expr {
    fn from(call: CallExpression) -> Self {
        Expr::Call(call)
    }
}

impl From<Identifier> for Expr {
    fn from(ident: Identifier) -> Self {
        Expr::Identifier(ident)
    }
}

impl From<StringLiteral> for Expr {
    fn from(lit: StringLiteral) -> Self {
        Expr::StringLiteral(lit)
    }
}

impl From<NumberLiteral> for Expr {
    fn from(lit: NumberLiteral) -> Self {
        Expr::NumberLiteral(lit)
    }
}

/// `(callee arg...)`. The callee is always an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallExpression {
    pub callee: Identifier,
    pub arguments: Vec<Expr>,
}

impl CallExpression {
    pub fn new(callee: Identifier, arguments: Vec<Expr>) -> Self {
        Self { callee, arguments }
    }
}

/// A name, possibly a dotted member path such as `console.log`.
///
/// Segments are kept separately; [`Identifier::name`] joins them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identifier {
    segments: Vec<String>,
}

impl Identifier {
    /// A single-segment identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            segments: vec![name.into()],
        }
    }

    /// An identifier with a head segment followed by member segments.
    pub fn with_segments(head: impl Into<String>, rest: impl IntoIterator<Item = String>) -> Self {
        let mut segments = vec![head.into()];
        segments.extend(rest);
        Self { segments }
    }

    /// Build an identifier from a dotted path like `"console.log"`.
    pub fn from_path(path: &str) -> Self {
        Self {
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_dotted(&self) -> bool {
        self.segments.len() > 1
    }

    /// The flattened name, segments joined by `.`.
    pub fn name(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// A string literal. The value is the source text between the quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringLiteral {
    pub value: String,
}

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A number literal, kept as its raw source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberLiteral {
    pub raw: String,
}

impl NumberLiteral {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

/// One method per node variant.
///
/// Traversal order is up to the implementor; [`Expr::accept`] only
/// dispatches on the variant.
pub trait Visitor {
    type Output;

    fn visit_program(&mut self, program: &Program) -> Self::Output;
    fn visit_call(&mut self, call: &CallExpression) -> Self::Output;
    fn visit_identifier(&mut self, ident: &Identifier) -> Self::Output;
    fn visit_string(&mut self, lit: &StringLiteral) -> Self::Output;
    fn visit_number(&mut self, lit: &NumberLiteral) -> Self::Output;
}
