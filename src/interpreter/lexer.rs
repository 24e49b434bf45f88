use logos::Logos;

use crate::error::{LexicalError, Snippet};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `skip`
    #[token("skip")]
    Skip,
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `do`
    #[token("do")]
    Do,
    /// Name tokens; variable names such as `x` or `count`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// `:=`
    #[token(":=")]
    Assign,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `|`
    #[token("|")]
    Pipe,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `=`
    #[token("=")]
    Equals,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `!`
    #[token("!")]
    Bang,
    /// `¬`
    #[token("¬")]
    NotSign,

    /// Line breaks; counted for error locations, then skipped.
    #[token("\n", newline)]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
    /// End of input. Never matched by a pattern; the [`Lexer`] wrapper
    /// yields it once the source is exhausted.
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "number {value}"),
            Self::Bool(value) => write!(f, "literal '{value}'"),
            Self::Skip => write!(f, "'skip'"),
            Self::If => write!(f, "'if'"),
            Self::Then => write!(f, "'then'"),
            Self::Else => write!(f, "'else'"),
            Self::While => write!(f, "'while'"),
            Self::Do => write!(f, "'do'"),
            Self::Identifier(name) => write!(f, "name '{name}'"),
            Self::Assign => write!(f, "':='"),
            Self::Semicolon => write!(f, "';'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Pipe => write!(f, "'|'"),
            Self::Ampersand => write!(f, "'&'"),
            Self::Equals => write!(f, "'='"),
            Self::LessEqual => write!(f, "'<='"),
            Self::GreaterEqual => write!(f, "'>='"),
            Self::Less => write!(f, "'<'"),
            Self::Greater => write!(f, "'>'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Bang => write!(f, "'!'"),
            Self::NotSign => write!(f, "'¬'"),
            Self::Comment | Self::NewLine | Self::Ignored => write!(f, "whitespace"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset at which the current
/// line starts, so that token positions can be reported as line and column.
/// Updated as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current 0-based line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

/// The source location of one token.
///
/// Line and column are 0-based and counted in characters, not bytes;
/// `length` is the token's width in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pos {
    /// 0-based line the token starts on.
    pub line:   usize,
    /// 0-based character column the token starts at.
    pub column: usize,
    /// Width of the token in characters; at least 1.
    pub length: usize,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit into an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
/// Parses a boolean literal from the current token slice (`true` or `false`).
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(true)` if the slice is `"true"`.
/// - `Some(false)` if the slice is `"false"`.
/// - `None` otherwise.
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
/// Skips a line break while keeping the location bookkeeping current.
///
/// # Parameters
/// - `lex`: Mutable reference to the Logos lexer at the newline.
///
/// # Returns
/// `logos::Skip`, so the newline never surfaces as a token.
fn newline(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    logos::Skip
}

/// A position-aware token stream over one program text.
///
/// Wraps the generated lexer and pairs every token with its [`Pos`]. Once
/// the input is exhausted it yields [`Token::Eof`] indefinitely, so a parser
/// with one token of lookahead never runs off the end of the stream.
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, Token>,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer over the given source text.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner: Token::lexer(source) }
    }

    /// Produces the next token together with its source position.
    ///
    /// # Returns
    /// The next `(Token, Pos)` pair, or `(Token::Eof, ..)` at the end of
    /// the input.
    ///
    /// # Errors
    /// Returns a `LexicalError` if the input contains a character that
    /// starts no token.
    pub fn next_token(&mut self) -> Result<(Token, Pos), LexicalError> {
        match self.inner.next() {
            Some(Ok(token)) => {
                let pos = self.pos_of(self.inner.span());
                Ok((token, pos))
            },
            Some(Err(())) => Err(self.lexical_error()),
            None => Ok((Token::Eof, self.end_pos())),
        }
    }

    /// Extracts the source line a position refers to, for diagnostics.
    ///
    /// # Parameters
    /// - `pos`: The position to highlight; its column span becomes the
    ///   caret underline.
    #[must_use]
    pub fn snippet(&self, pos: Pos) -> Snippet {
        let text = self.inner
                       .source()
                       .lines()
                       .nth(pos.line)
                       .unwrap_or_default()
                       .to_string();
        Snippet { line: pos.line,
                  column: pos.column,
                  width: pos.length,
                  text }
    }

    /// Computes the position of a byte span on the current line.
    fn pos_of(&self, span: std::ops::Range<usize>) -> Pos {
        let source = self.inner.source();
        let column = source[self.inner.extras.line_start..span.start].chars()
                                                                     .count();
        let length = source[span].chars().count().max(1);
        Pos { line: self.inner.extras.line,
              column,
              length }
    }

    /// The position just past the last character of the input.
    fn end_pos(&self) -> Pos {
        let source = self.inner.source();
        let column = source[self.inner.extras.line_start..].chars().count();
        Pos { line: self.inner.extras.line,
              column,
              length: 1 }
    }

    /// Builds the error for an unrecognized character at the current span.
    fn lexical_error(&self) -> LexicalError {
        let pos = self.pos_of(self.inner.span());
        let character = self.inner.slice().chars().next().unwrap_or_default();
        LexicalError { character,
                       at: self.snippet(Pos { length: 1, ..pos }) }
    }
}
