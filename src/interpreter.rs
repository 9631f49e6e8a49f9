/// The evaluator module holds the interpreter state and the built-in
/// operators.
///
/// The evaluator owns the scope stack and the argument buffer, resolves names
/// innermost scope first, and provides the native behaviors the engine
/// dispatches to. It is the runtime half of the single-pass engine.
///
/// # Responsibilities
/// - Keeps bindings and retained calls in a stack of scopes.
/// - Resolves names and binds new ones without clobbering the same scope.
/// - Implements `__def`, `__invoke`, `__stack`, `__scope` and `__dump`.
pub mod evaluator;
/// The lexer module tokenizes source code for the reader.
///
/// The lexer cuts the raw source text into the four atom shapes of the
/// language: string literals, integers, names and symbol runs. It skips
/// whitespace and counts lines for error reporting.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Decodes string escapes and checks integer range.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module drives the operator-precedence engine.
///
/// The parser pulls atoms from the reader, resolves them, and assembles
/// operator invocations directly on the argument buffer without building a
/// tree. Each saturated invocation is executed at once or retained, depending
/// on how deeply block literals are nested.
///
/// # Responsibilities
/// - Climbs binding powers to decide which operator receives which operands.
/// - Dispatches invocations immediately at top level and retains them inside
///   blocks.
/// - Builds code blocks and groups from `{ ... }` and `( ... )`.
pub mod parser;
/// The value module defines the runtime data types.
///
/// This module declares the `Unit` tagged union, operator definitions with
/// their arity and binding power, and scopes with their retained calls.
///
/// # Responsibilities
/// - Defines the `Unit` enum and its display forms.
/// - Describes operators and the behavior dispatched for them.
/// - Owns bindings and retained calls in scopes and code blocks.
pub mod value;
