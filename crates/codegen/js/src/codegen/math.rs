//! Arithmetic builtins.

use super::{Arity, Builtin, infix};

pub(super) const BUILTINS: &[Builtin] = &[
    Builtin::new("add", Arity::AtLeast(1), add),
    Builtin::new("sub", Arity::AtLeast(1), sub),
];

fn add(args: &[String]) -> String {
    infix("+", args)
}

fn sub(args: &[String]) -> String {
    infix("-", args)
}
