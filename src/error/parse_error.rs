use crate::error::Snippet;

#[derive(Debug)]
/// Raised when the parser meets a token that does not fit the grammar.
///
/// The error carries what the parser was looking for and what it found
/// instead, both already rendered for the user. Parse errors are fatal;
/// there is no resynchronization and no partial tree is surfaced.
pub struct ParseError {
    /// Description of the expected token or construct.
    pub expected: String,
    /// Description of the token actually found.
    pub found:    String,
    /// The offending source line with the failing token marked.
    pub at:       Snippet,
}

impl ParseError {
    /// Builds a parse error from rendered descriptions of both sides.
    #[must_use]
    pub fn new(expected: &str, found: &str, at: Snippet) -> Self {
        Self { expected: expected.to_string(),
               found: found.to_string(),
               at }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Error on line {}: Expected {}, found {}.{}",
               self.at.line_number(),
               self.expected,
               self.found,
               self.at)
    }
}

impl std::error::Error for ParseError {}
