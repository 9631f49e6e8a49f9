use crate::interpreter::{
    evaluator::function::{def, introspect, invoke},
    value::{
        core::Unit,
        operator::{Behavior, Delimiter, MAX_POWER, MIN_POWER, Marker, Operator},
        scope::Scope,
    },
};

/// Defines the built-in operators by generating a lookup table and a name
/// list.
///
/// Each entry provides:
/// - a string name,
/// - the prefix and suffix arity,
/// - the left and right binding power,
/// - optionally, how many leading suffix operands are quoted,
/// - the behavior performed on dispatch.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table the base scope is built from),
/// - `BUILTIN_OPERATORS` (public list of built-in names).
macro_rules! builtin_operators {
    (
        $(
            $name:literal => {
                arity: ($prefix:expr, $suffix:expr),
                powers: ($left:expr, $right:expr),
                $(quoted: $quoted:expr,)?
                behavior: $behavior:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:        &'static str,
            prefix:      usize,
            suffix:      usize,
            left_power:  i32,
            right_power: i32,
            quoted:      usize,
            behavior:    Behavior,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name,
                             prefix: $prefix,
                             suffix: $suffix,
                             left_power: $left,
                             right_power: $right,
                             quoted: 0 $(+ $quoted)?,
                             behavior: $behavior },
            )*
        ];
        pub const BUILTIN_OPERATORS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_operators! {
    "__stack"  => { arity: (0, 0), powers: (0, 0), behavior: Behavior::Native(introspect::stack) },
    "__scope"  => { arity: (0, 0), powers: (0, 0), behavior: Behavior::Native(introspect::scope) },
    "__dump"   => { arity: (0, 1), powers: (0, 0), behavior: Behavior::Native(introspect::dump) },
    "__def"    => { arity: (0, 2), powers: (0, 0), quoted: 1, behavior: Behavior::Definition(def::def) },
    "__invoke" => { arity: (1, 0), powers: (0, 0), behavior: Behavior::Native(invoke::invoke) },
    ";"        => { arity: (0, 0), powers: (MIN_POWER, MAX_POWER), behavior: Behavior::Marker(Marker::Plain) },
    ","        => { arity: (0, 0), powers: (MIN_POWER, MAX_POWER), behavior: Behavior::Marker(Marker::Separator) },
    "{"        => { arity: (0, 0), powers: (MIN_POWER + 1, MAX_POWER), behavior: Behavior::Open(Delimiter::Block) },
    "}"        => { arity: (0, 0), powers: (MIN_POWER, MAX_POWER), behavior: Behavior::Marker(Marker::Close(Delimiter::Block)) },
    "("        => { arity: (0, 0), powers: (MAX_POWER, MAX_POWER), behavior: Behavior::Open(Delimiter::Group) },
    ")"        => { arity: (0, 0), powers: (MIN_POWER, MAX_POWER), behavior: Behavior::Marker(Marker::Close(Delimiter::Group)) },
    "fn"       => { arity: (0, 2), powers: (0, 0), behavior: Behavior::Marker(Marker::Plain) },
}

impl BuiltinDef {
    fn operator(&self) -> Operator {
        Operator::new(self.name, self.prefix, self.suffix, self.behavior)
            .with_powers(self.left_power, self.right_power)
            .with_quoted(self.quoted)
    }
}

/// Builds the base scope holding every built-in operator.
///
/// # Example
/// ```
/// use glyph::interpreter::evaluator::function::core::{BUILTIN_OPERATORS, base_scope};
///
/// let scope = base_scope();
/// assert_eq!(scope.bindings().len(), BUILTIN_OPERATORS.len());
/// assert!(scope.get("__def").is_some_and(|unit| unit.as_operator().is_some()));
/// assert!(scope.calls().is_empty());
/// ```
#[must_use]
pub fn base_scope() -> Scope {
    let mut scope = Scope::new();
    for builtin in BUILTIN_TABLE {
        let operator = Unit::from(builtin.operator());
        if scope.bind(builtin.name, operator, 0).is_err() {
            unreachable!("duplicate built-in operator {}", builtin.name);
        }
    }
    scope
}

/// Returns `true` if `name` is bound by a built-in operator.
///
/// # Example
/// ```
/// use glyph::interpreter::evaluator::function::core::is_builtin;
///
/// assert!(is_builtin("__invoke"));
/// assert!(is_builtin("fn"));
/// assert!(!is_builtin("x"));
/// ```
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_OPERATORS.contains(&name)
}
