//! JavaScript backend for tslisp.
//!
//! Walks a [`Program`](tslisp_ir::Program) and emits JavaScript source.
//! Calls to builtin forms (`add`, `if`, `def`, ...) are compiled to
//! dedicated syntax; any other call becomes a plain function call.

mod codegen;

pub use codegen::{Arity, Builtin, GenerateError, JsGenerator, builtins, generate, generate_expr, lookup};
