//! AST to JavaScript code generation.

mod control;
mod list;
mod logic;
mod math;
mod module;
mod obj;

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;
use tslisp_ir::{
    CallExpression, Expr, Identifier, MAX_NESTING, NumberLiteral, Program, StringLiteral, Visitor,
};

/// Errors that can occur during generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("{builtin} expects {expected}, got {got}")]
    InvalidArgCount {
        builtin: &'static str,
        expected: Arity,
        got: usize,
    },

    #[error("expression nesting exceeds {limit} levels")]
    TooDeep { limit: usize },
}

/// How many arguments a builtin accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    Between(usize, usize),
    AtLeast(usize),
    Even,
    Any,
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::Between(min, max) => (min..=max).contains(&count),
            Arity::AtLeast(n) => count >= n,
            Arity::Even => count % 2 == 0,
            Arity::Any => true,
        }
    }
}

fn count_word(n: usize) -> String {
    match n {
        0 => "zero".into(),
        1 => "one".into(),
        2 => "two".into(),
        3 => "three".into(),
        n => n.to_string(),
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "argument" } else { "arguments" }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Arity::Exactly(n) => write!(f, "exactly {} {}", count_word(n), plural(n)),
            Arity::Between(min, max) => {
                write!(f, "{} or {} arguments", count_word(min), count_word(max))
            }
            Arity::AtLeast(n) => write!(f, "at least {} {}", count_word(n), plural(n)),
            Arity::Even => f.write_str("an even number of arguments"),
            Arity::Any => f.write_str("any number of arguments"),
        }
    }
}

/// Emits code for a builtin from its already generated arguments.
pub(crate) type Emit = fn(&[String]) -> String;

/// A builtin form: its name, arity contract and emitter.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub arity: Arity,
    emit: Emit,
}

impl Builtin {
    pub(crate) const fn new(name: &'static str, arity: Arity, emit: Emit) -> Self {
        Self { name, arity, emit }
    }

    fn check_arity(&self, got: usize) -> Result<(), GenerateError> {
        if self.arity.accepts(got) {
            Ok(())
        } else {
            Err(GenerateError::InvalidArgCount {
                builtin: self.name,
                expected: self.arity,
                got,
            })
        }
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Builtin families in table order.
const LIBRARIES: &[&[Builtin]] = &[
    math::BUILTINS,
    logic::BUILTINS,
    list::BUILTINS,
    obj::BUILTINS,
    module::BUILTINS,
    control::BUILTINS,
];

static TABLE: LazyLock<HashMap<&'static str, &'static Builtin>> = LazyLock::new(|| {
    LIBRARIES
        .iter()
        .flat_map(|library| library.iter())
        .map(|builtin| (builtin.name, builtin))
        .collect()
});

/// Look up a builtin by callee name.
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    TABLE.get(name).copied()
}

/// All builtins, grouped by family.
pub fn builtins() -> impl Iterator<Item = &'static Builtin> {
    LIBRARIES.iter().flat_map(|library| library.iter())
}

/// Generate JavaScript for a whole program.
pub fn generate(program: &Program) -> Result<String, GenerateError> {
    program.accept(&mut JsGenerator::new())
}

/// Generate JavaScript for a single expression.
pub fn generate_expr(expr: &Expr) -> Result<String, GenerateError> {
    expr.accept(&mut JsGenerator::new())
}

/// The JavaScript emitter. Each visit returns the code for its node; the only
/// state is the current call nesting.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsGenerator {
    depth: usize,
}

impl Visitor for JsGenerator {
    type Output = Result<String, GenerateError>;

    fn visit_program(&mut self, program: &Program) -> Self::Output {
        Ok(self.generate_all(&program.body)?.join(";"))
    }

    fn visit_call(&mut self, call: &CallExpression) -> Self::Output {
        if self.depth >= MAX_NESTING {
            return Err(GenerateError::TooDeep { limit: MAX_NESTING });
        }

        // Arguments first, so builtins compose over generated text.
        self.depth += 1;
        let args = self.generate_all(&call.arguments);
        self.depth -= 1;
        let args = args?;

        match lookup(&call.callee.name()) {
            Some(builtin) => {
                builtin.check_arity(args.len())?;
                Ok((builtin.emit)(&args))
            }
            None => Ok(call_expression(&call.callee, &args)),
        }
    }

    fn visit_identifier(&mut self, ident: &Identifier) -> Self::Output {
        Ok(ident.name())
    }

    fn visit_string(&mut self, lit: &StringLiteral) -> Self::Output {
        Ok(js_string_literal(&lit.value))
    }

    fn visit_number(&mut self, lit: &NumberLiteral) -> Self::Output {
        Ok(lit.raw.clone())
    }
}

impl JsGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn generate_all(&mut self, exprs: &[Expr]) -> Result<Vec<String>, GenerateError> {
        let mut out = Vec::with_capacity(exprs.len());
        for expr in exprs {
            out.push(expr.accept(self)?);
        }
        Ok(out)
    }
}

/// Plain call: `callee(a,b)`.
pub(crate) fn call_expression(callee: &Identifier, args: &[String]) -> String {
    format!("{}({})", callee.name(), args.join(","))
}

/// `(a<op>b<op>c)`.
pub(crate) fn infix(op: &str, args: &[String]) -> String {
    format!("({})", args.join(op))
}

pub(crate) fn js_string_literal(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t");
    format!("\"{}\"", escaped)
}

/// True when the whole of `code` sits inside one matching pair of parens.
///
/// `(a)&&(b)` and `(a).b` start with `(` but are not enclosed.
pub(crate) fn is_parenthesized(code: &str) -> bool {
    if !code.starts_with('(') {
        return false;
    }

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, c) in code.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return idx == code.len() - 1;
                }
            }
            _ => {}
        }
    }

    false
}
