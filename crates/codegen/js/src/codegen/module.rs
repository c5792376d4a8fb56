//! ES module builtins.

use super::{Arity, Builtin};

pub(super) const BUILTINS: &[Builtin] = &[
    Builtin::new("import", Arity::Exactly(2), import),
    Builtin::new("export", Arity::Exactly(1), export),
];

/// `(import name "specifier")`
fn import(args: &[String]) -> String {
    format!("import {} from {}", args[0], args[1])
}

fn export(args: &[String]) -> String {
    format!("export {}", args[0])
}
