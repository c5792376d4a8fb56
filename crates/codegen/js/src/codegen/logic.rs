//! Logical builtins.

use super::{Arity, Builtin, infix};

pub(super) const BUILTINS: &[Builtin] = &[
    Builtin::new("or", Arity::AtLeast(1), or),
    Builtin::new("and", Arity::AtLeast(1), and),
    Builtin::new("not", Arity::Exactly(1), not),
];

fn or(args: &[String]) -> String {
    infix("||", args)
}

fn and(args: &[String]) -> String {
    infix("&&", args)
}

fn not(args: &[String]) -> String {
    format!("!({})", args[0])
}
