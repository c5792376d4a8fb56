//! Control flow, bindings and the `print` alias.

use super::{Arity, Builtin, call_expression, is_parenthesized};
use tslisp_ir::Identifier;

pub(super) const BUILTINS: &[Builtin] = &[
    Builtin::new("if", Arity::Between(2, 3), if_),
    Builtin::new("def", Arity::Exactly(2), def),
    Builtin::new("await", Arity::Exactly(1), await_),
    Builtin::new("throw", Arity::Exactly(1), throw),
    Builtin::new("typeof", Arity::Exactly(1), typeof_),
    Builtin::new("print", Arity::Any, print),
];

const CONSOLE_LOG: &str = "console.log";

fn if_(args: &[String]) -> String {
    let condition = &args[0];
    let then_branch = &args[1];

    let head = if is_parenthesized(condition) {
        format!("if{}{}", condition, then_branch)
    } else {
        format!("if({}){}", condition, then_branch)
    };

    match args.get(2) {
        Some(else_branch) => format!("{};else {}", head, else_branch),
        None => head,
    }
}

fn def(args: &[String]) -> String {
    format!("const {} = {}", args[0], args[1])
}

fn await_(args: &[String]) -> String {
    format!("await {}", args[0])
}

fn throw(args: &[String]) -> String {
    format!("throw {}", args[0])
}

fn typeof_(args: &[String]) -> String {
    format!("typeof {}", args[0])
}

/// Emits a plain call through a fresh `console.log` callee.
fn print(args: &[String]) -> String {
    call_expression(&Identifier::from_path(CONSOLE_LOG), args)
}
