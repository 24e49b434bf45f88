/// Lexical errors.
///
/// Defines the error raised when the lexer meets a character that belongs to
/// no token class. Lexical errors are fatal; the whole run aborts on the
/// first one.
pub mod lexical_error;
/// Parsing errors.
///
/// Defines the error raised when the parser meets a token whose kind or
/// payload does not fit the grammar. Parse errors are fatal; there is no
/// resynchronization and no partial tree is surfaced.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types that can be raised during evaluation, such as
/// division by zero, integer overflow, or arithmetic on a non-numeric value.
pub mod runtime_error;
/// Source snippets for diagnostics.
///
/// Provides the shared rendering of the offending source line with a caret
/// underline, used by both lexical and parse errors.
pub mod snippet;

pub use lexical_error::LexicalError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use snippet::Snippet;

#[derive(Debug)]
/// A fatal front-end error: either lexical or syntactic.
///
/// The parser pulls tokens from the lexer on demand, so both failure kinds
/// can surface while parsing; this sum carries whichever one occurred first.
pub enum SyntaxError {
    /// The lexer met an unrecognized character.
    Lexical(LexicalError),
    /// The parser met an unexpected token.
    Parse(ParseError),
}

impl From<LexicalError> for SyntaxError {
    fn from(error: LexicalError) -> Self {
        Self::Lexical(error)
    }
}

impl From<ParseError> for SyntaxError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical(error) => write!(f, "{error}"),
            Self::Parse(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for SyntaxError {}
