//! # whilst
//!
//! whilst is a tree-walking interpreter for a minimal imperative
//! while-language. It lexes, parses, and evaluates programs made of
//! assignments, conditionals, and loops against a caller-owned variable
//! store.

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
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::Namespace, parser::core::parse};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one closed node type covering every language construct.
/// - Keeps the tree immutable after parsing; evaluation only reads it.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while interpreting a
/// program. Lexical and parse errors carry the offending source line and a
/// caret marking the failing column span; runtime errors describe the
/// operation that failed.
///
/// # Responsibilities
/// - Defines error types for all failure modes (lexer, parser, evaluator).
/// - Renders diagnostics with 1-based line numbers and caret underlines.
/// - Integrates with the standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, and the runtime
/// value representation to provide a complete interpreter for the language.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, token cursor, parser, evaluator.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely promote `i64` to `f64` without silent precision loss.
pub mod util;

/// Parses and evaluates a program against the given namespace.
///
/// The namespace may be pre-populated with initial bindings; it is mutated
/// in place by the assignments the program executes. The first lexical or
/// parse error aborts the run before any evaluation happens, leaving the
/// namespace untouched.
///
/// # Errors
/// Returns an error if lexing, parsing, or evaluation fails.
///
/// # Examples
/// ```
/// use whilst::{
///     interpreter::{evaluator::Namespace, value::Value},
///     run,
/// };
///
/// let mut namespace = Namespace::new();
/// run("x := 2 * 3; y := x < 10", &mut namespace).unwrap();
///
/// assert_eq!(namespace["x"], Value::Integer(6));
/// assert_eq!(namespace["y"], Value::Bool(true));
/// ```
pub fn run(source: &str, namespace: &mut Namespace) -> Result<(), Box<dyn std::error::Error>> {
    let program = parse(source)?;
    program.visit(namespace)?;
    Ok(())
}
