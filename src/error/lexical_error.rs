use crate::error::Snippet;

#[derive(Debug)]
/// Raised when the lexer meets a character that starts no token.
///
/// The error is fatal: no recovery is attempted and the whole run aborts.
pub struct LexicalError {
    /// The unrecognized character.
    pub character: char,
    /// The offending source line with the failing column marked.
    pub at:        Snippet,
}

impl std::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Error on line {}: Unrecognized character '{}'.{}",
               self.at.line_number(),
               self.character,
               self.at)
    }
}

impl std::error::Error for LexicalError {}
