/// Core evaluation state.
///
/// Contains the `Context` holding the scope stack, the shared argument buffer
/// and the diagnostic output, together with name resolution and binding.
pub mod core;

/// Built-in operators.
///
/// Defines the operator table of the base scope and the native behaviors of
/// `__def`, `__invoke`, `__stack`, `__scope` and `__dump`.
pub mod function;
