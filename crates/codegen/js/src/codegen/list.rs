//! Array literal and indexing builtins.

use super::{Arity, Builtin};

pub(super) const BUILTINS: &[Builtin] = &[
    Builtin::new("array", Arity::Any, array),
    Builtin::new("idx", Arity::Exactly(2), idx),
    Builtin::new("len", Arity::Exactly(1), len),
];

fn array(args: &[String]) -> String {
    format!("[{}]", args.join(","))
}

/// Works on arrays and strings alike.
fn idx(args: &[String]) -> String {
    format!("{}[{}]", args[0], args[1])
}

fn len(args: &[String]) -> String {
    format!("{}.length", args[0])
}
