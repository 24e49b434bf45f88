/// The evaluator module executes AST nodes against a namespace.
///
/// The evaluator walks the AST, runs statements in source order, computes
/// expression values, and mutates the namespace through assignments. It is
/// the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Visits statement nodes for effect and expression nodes for values.
/// - Manages variable state through the `Namespace` map.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a meaningful language element such as a literal, a name,
/// a keyword, or an operator. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source locations.
/// - Handles numeric and boolean literals, names, keywords, and operators.
/// - Reports lexical errors for unrecognized characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer through a single-lookahead cursor
/// and constructs an AST representing the syntactic structure of statements
/// and expressions, by recursive descent over a fixed precedence ladder.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Validates the grammar, reporting errors with location info.
/// - Enforces that the whole input is consumed by a single program.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types computed during execution: integers,
/// reals, and booleans. It also implements the arithmetic, comparison, and
/// truth-test operations on them, including safe promotion from integer to
/// real.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements arithmetic, comparison, and logic with error checking.
/// - Provides safe promotion between numeric types (integer to real).
pub mod value;
