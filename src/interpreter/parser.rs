/// Single-lookahead token cursor.
///
/// Wraps the lexer behind a one-token window and provides the expectation
/// primitives (`eat`, `try_eat`, `eat_list`) the grammar rules are written
/// in terms of.
pub mod cursor;

/// Core parsing logic and program structure.
///
/// Contains the top-level entry point and the rules for suites and blocks,
/// plus shared error propagation.
pub mod core;

/// Statement parsing.
///
/// Implements the rules for the statement forms: `skip`, conditionals,
/// loops, and assignments.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the expression precedence ladder, from logical or down to
/// multiplication.
pub mod binary;

/// Unary operator parsing.
///
/// Handles negation prefixes and the atomic operands they apply to:
/// literals, names, and parenthesized expressions.
pub mod unary;
