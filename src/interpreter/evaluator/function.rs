/// The built-in operator table.
///
/// Declares the arity, binding powers and behavior of every operator present
/// in the base scope, including the reserved separators and delimiters, and
/// builds the base scope from them.
pub mod core;
/// The `__def` operator implementation.
///
/// Binds a value under a name in the innermost scope.
pub mod def;
/// Diagnostic operator implementations.
///
/// `__stack`, `__scope` and `__dump` write the argument buffer, the current
/// bindings, or a single value to the context's output.
pub mod introspect;
/// The `__invoke` operator implementation.
///
/// Replays the calls a code block retained while it was read.
pub mod invoke;
