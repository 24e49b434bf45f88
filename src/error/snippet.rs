/// A highlighted region of one source line, used in diagnostics.
///
/// Line and column are stored 0-based, the way the lexer tracks them;
/// rendering adds 1 to the line number for the user. The caret underline
/// spans `width` characters starting at `column`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    /// 0-based line index of the highlighted region.
    pub line:   usize,
    /// 0-based character column where the region starts.
    pub column: usize,
    /// Width of the region in characters; at least 1.
    pub width:  usize,
    /// The literal text of the offending source line.
    pub text:   String,
}

impl Snippet {
    /// The 1-based line number, as shown to the user.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line + 1
    }
}

impl std::fmt::Display for Snippet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "    {}", self.text)?;
        write!(f, "    {}{}", " ".repeat(self.column), "^".repeat(self.width))
    }
}
