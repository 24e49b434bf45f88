use crate::{
    ast::Node,
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{cursor::TokenCursor, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a complete program.
///
/// This is the entry point for parsing. The whole input must be consumed
/// by one suite; trailing tokens after it are a parse error rather than
/// being silently ignored.
///
/// Grammar: `program := suite EOF`
///
/// # Parameters
/// - `source`: The program text.
///
/// # Returns
/// The root [`Node::Suite`] of the program.
///
/// # Errors
/// Returns a `SyntaxError` on the first lexical or grammar violation; no
/// partial tree is surfaced.
pub fn parse(source: &str) -> ParseResult<Node> {
    let mut cursor = TokenCursor::new(source)?;
    let program = parse_suite(&mut cursor)?;
    cursor.eat(Token::Eof)?;

    Ok(program)
}

/// Parses a semicolon-separated sequence of blocks.
///
/// The loop continues only while a `;` separator is present and stops
/// cleanly on any other token; there is no trailing-semicolon form.
///
/// Grammar: `suite := block (";" block)*`
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the first block.
///
/// # Returns
/// A [`Node::Suite`] owning the blocks in source order.
pub fn parse_suite(cursor: &mut TokenCursor) -> ParseResult<Node> {
    let mut statements = vec![parse_block(cursor)?];
    while cursor.try_eat(Token::Semicolon)? {
        statements.push(parse_block(cursor)?);
    }

    Ok(Node::Suite(statements))
}

/// Parses one element of a suite.
///
/// A block is either a single statement or a parenthesized sub-suite,
/// which is how multi-statement bodies are grouped under `then`, `else`,
/// and `do`.
///
/// Grammar: `block := statement | "(" suite ")"`
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the start of the block.
///
/// # Returns
/// The statement node, or the inner suite for a parenthesized group.
pub fn parse_block(cursor: &mut TokenCursor) -> ParseResult<Node> {
    if cursor.try_eat(Token::LParen)? {
        let suite = parse_suite(cursor)?;
        cursor.eat(Token::RParen)?;

        return Ok(suite);
    }
    parse_statement(cursor)
}
