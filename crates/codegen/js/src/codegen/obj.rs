//! Object literal, construction and property access builtins.

use super::{Arity, Builtin};

pub(super) const BUILTINS: &[Builtin] = &[
    Builtin::new("object", Arity::Even, object),
    Builtin::new("new", Arity::AtLeast(1), new),
    Builtin::new("getprop", Arity::Exactly(2), getprop),
];

/// Arguments alternate key, value.
fn object(args: &[String]) -> String {
    let entries: Vec<String> = args
        .chunks_exact(2)
        .map(|pair| format!("{}:{}", pair[0], pair[1]))
        .collect();
    format!("{{{}}}", entries.join(","))
}

/// First argument is the constructor.
fn new(args: &[String]) -> String {
    format!("new {}({})", args[0], args[1..].join(","))
}

fn getprop(args: &[String]) -> String {
    format!("{}.{}", args[0], args[1])
}
