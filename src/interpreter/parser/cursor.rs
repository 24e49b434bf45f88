use crate::{
    error::{ParseError, SyntaxError},
    interpreter::lexer::{Lexer, Pos, Token},
};

/// A shape of token the parser can ask for.
///
/// Exact patterns match one specific token, payload included; [`Name`]
/// matches any identifier regardless of its payload. The grammar rules
/// build their expectations out of these.
///
/// [`Name`]: TokenPattern::Name
#[derive(Debug, Clone, PartialEq)]
pub enum TokenPattern {
    /// Matches one specific token, payload included.
    Exact(Token),
    /// Matches any identifier token.
    Name,
}

impl TokenPattern {
    /// Checks whether a token fits this pattern.
    #[must_use]
    pub fn matches(&self, token: &Token) -> bool {
        match self {
            Self::Exact(expected) => expected == token,
            Self::Name => matches!(token, Token::Identifier(_)),
        }
    }
}

impl From<Token> for TokenPattern {
    fn from(token: Token) -> Self {
        Self::Exact(token)
    }
}

impl std::fmt::Display for TokenPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(token) => write!(f, "{token}"),
            Self::Name => write!(f, "a name"),
        }
    }
}

/// A single-lookahead cursor over the token stream.
///
/// The cursor always holds exactly one token, pulled lazily from the
/// wrapped [`Lexer`]. Every successful consumption advances the window by
/// exactly one token; once [`Token::Eof`] is in the window it stays there,
/// so the grammar rules never have to guard against running off the end.
pub struct TokenCursor<'source> {
    lexer:   Lexer<'source>,
    current: (Token, Pos),
}

impl<'source> TokenCursor<'source> {
    /// Creates a cursor over the given source text, priming the lookahead
    /// window with the first token.
    ///
    /// # Errors
    /// Returns a `SyntaxError` if the source starts with an unrecognized
    /// character.
    pub fn new(source: &'source str) -> Result<Self, SyntaxError> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// The token currently in the lookahead window.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current.0
    }

    /// Consumes the current token unconditionally and pulls the next one
    /// into the window.
    ///
    /// At end of input this is a no-op returning [`Token::Eof`] again.
    ///
    /// # Errors
    /// Returns a `SyntaxError` if pulling the next token hits an
    /// unrecognized character.
    pub fn advance(&mut self) -> Result<Token, SyntaxError> {
        if matches!(self.current.0, Token::Eof) {
            return Ok(Token::Eof);
        }
        let next = self.lexer.next_token()?;
        let (token, _) = std::mem::replace(&mut self.current, next);
        Ok(token)
    }

    /// Consumes the current token, asserting that it matches the pattern.
    ///
    /// # Parameters
    /// - `pattern`: The expected token shape; a bare [`Token`] converts
    ///   into an exact pattern.
    ///
    /// # Returns
    /// The consumed token.
    ///
    /// # Errors
    /// Returns a `SyntaxError` naming the expectation if the current token
    /// does not match, leaving the cursor untouched.
    pub fn eat(&mut self, pattern: impl Into<TokenPattern>) -> Result<Token, SyntaxError> {
        let pattern = pattern.into();
        if pattern.matches(&self.current.0) {
            self.advance()
        } else {
            Err(self.unexpected(&pattern.to_string()))
        }
    }

    /// Consumes the current token only if it matches the pattern.
    ///
    /// A non-match is not an error: the cursor is left untouched and
    /// `false` is returned, so callers can branch on optional syntax.
    ///
    /// # Errors
    /// Returns a `SyntaxError` only if, after a match, pulling the next
    /// token hits an unrecognized character.
    pub fn try_eat(&mut self, pattern: impl Into<TokenPattern>) -> Result<bool, SyntaxError> {
        if pattern.into().matches(&self.current.0) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes the current token, asserting that it matches one of
    /// several alternative patterns.
    ///
    /// Used where a rule dispatches on its leading token, such as the
    /// statement rule choosing between a keyword and an assignment target.
    ///
    /// # Returns
    /// The consumed token; callers match on it to pick the alternative.
    ///
    /// # Errors
    /// Returns a `SyntaxError` listing every alternative if none matches.
    pub fn eat_list(&mut self, patterns: &[TokenPattern]) -> Result<Token, SyntaxError> {
        if patterns.iter().any(|pattern| pattern.matches(&self.current.0)) {
            self.advance()
        } else {
            Err(self.unexpected(&render_alternatives(patterns)))
        }
    }

    /// Builds the parse error for an unexpected token in the window.
    ///
    /// # Parameters
    /// - `expected`: Rendered description of what the grammar was looking
    ///   for at this point.
    #[must_use]
    pub fn unexpected(&self, expected: &str) -> SyntaxError {
        let (token, pos) = &self.current;
        ParseError::new(expected, &token.to_string(), self.lexer.snippet(*pos)).into()
    }
}

/// Renders a list of patterns as a prose alternative, e.g. `'a', 'b' or
/// 'c'`.
fn render_alternatives(patterns: &[TokenPattern]) -> String {
    match patterns {
        [] => String::from("nothing"),
        [only] => only.to_string(),
        [head @ .., last] => {
            let head = head.iter()
                           .map(ToString::to_string)
                           .collect::<Vec<_>>()
                           .join(", ");
            format!("{head} or {last}")
        },
    }
}
