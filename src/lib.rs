//! # glyph
//!
//! glyph is a minimal extensible language written in Rust.
//! Its only syntax is operators: every name can be bound to an operator with
//! its own arity and binding power, and a single-pass precedence engine reads
//! and runs the program at the same time, without building a syntax tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::evaluator::core::Context;

/// Provides unified error types for reading and running programs.
///
/// This module defines every error that can be raised while lexing, while the
/// precedence engine collects operands, or while a native operator runs. Each
/// error carries the source line it was raised on.
///
/// # Responsibilities
/// - Defines `ParseError` for malformed source and arity failures.
/// - Defines `RuntimeError` for failures inside native operators.
/// - Wraps both in `Error`, the error type of the evaluator.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, the precedence engine, the evaluator
/// state and the value types into a complete runtime. It exposes the public
/// API for running programs and for embedding the engine with custom
/// operators.
///
/// # Responsibilities
/// - Coordinates the lexer, reader, precedence engine and evaluator.
/// - Provides entry points for reading and running user code.
/// - Manages the flow of values and errors between them.
pub mod interpreter;

/// Runs a program and reports whether it succeeded.
///
/// The source is read and executed in one pass against a fresh context whose
/// diagnostic output goes to standard output.
///
/// # Errors
/// Returns the first error raised while reading or running the program.
///
/// # Examples
/// ```
/// use glyph::get_result;
///
/// // A binding followed by a dump of its value.
/// let source = "__def x 5 ; __dump x ;";
/// assert!(get_result(source).is_ok());
///
/// // An operand nobody consumes.
/// let source = "1 2 ;";
/// assert!(get_result(source).is_err());
/// ```
pub fn get_result(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = Context::new();
    context.execute(source)?;
    Ok(())
}
