/// The precedence engine.
///
/// Holds the `Parser` state and the binding-power loop that decides which
/// operator receives which operands on the shared argument buffer.
pub mod core;

/// Invocation dispatch.
///
/// Takes a saturated operator together with its operand window and either
/// runs it, retains it in the current scope, or reads the literal it opens.
pub mod dispatch;

/// Block and group literals.
pub mod block;

/// The atom reader.
///
/// Wraps the lexer and turns each token into a `Unit`, translating lexical
/// failures into parse errors that carry the current line.
pub mod reader;
