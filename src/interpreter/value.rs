/// The `Unit` type.
///
/// Defines the tagged union every atom, operand and binding is made of:
/// integers, strings, names, groups, operators and code blocks. Includes
/// kind names and display forms that identify each variant unambiguously in
/// diagnostics.
pub mod core;
/// Operator definitions.
///
/// Declares `Operator`, its binding powers and arities, and the `Behavior`
/// performed when an invocation is dispatched: a pure syntax marker, a
/// literal opener, or a native function.
pub mod operator;
/// Scopes, retained calls and code blocks.
///
/// A scope owns its bindings and the calls retained while a block literal is
/// read; a code block wraps a finished scope and replays those calls on
/// demand.
pub mod scope;
