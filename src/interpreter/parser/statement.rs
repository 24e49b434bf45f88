use crate::{
    ast::Node,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_expression,
            core::{ParseResult, parse_suite},
            cursor::{TokenCursor, TokenPattern},
        },
    },
};

/// Parses a single statement.
///
/// Dispatches on the leading token: the keywords `skip`, `if`, and `while`
/// introduce their statement forms, and a bare name is an assignment
/// target.
///
/// Grammar:
/// ```text
/// statement := "skip"
///            | "if" expression "then" suite ("else" suite)?
///            | "while" expression "do" suite
///            | NAME ":=" expression
/// ```
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the start of the statement.
///
/// # Returns
/// The parsed statement node.
///
/// # Errors
/// Returns a `SyntaxError` listing the admissible leading tokens if none
/// of the statement forms applies.
pub fn parse_statement(cursor: &mut TokenCursor) -> ParseResult<Node> {
    let leading = cursor.eat_list(&[TokenPattern::Exact(Token::Skip),
                                    TokenPattern::Exact(Token::If),
                                    TokenPattern::Exact(Token::While),
                                    TokenPattern::Name])?;
    match leading {
        Token::Skip => Ok(Node::Skip),
        Token::If => parse_if(cursor),
        Token::While => parse_while(cursor),
        Token::Identifier(name) => parse_assignment(cursor, name),
        _ => unreachable!(),
    }
}

/// Parses a conditional statement, after the `if` keyword.
///
/// Both branch bodies are suites, so a bare `;` after a branch continues
/// that branch rather than the enclosing suite; parentheses delimit where
/// a branch ends.
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the condition.
///
/// # Returns
/// A [`Node::If`]; a missing else clause is recorded as `None` and
/// evaluates as a no-op.
fn parse_if(cursor: &mut TokenCursor) -> ParseResult<Node> {
    let condition = parse_expression(cursor)?;
    cursor.eat(Token::Then)?;
    let body = parse_suite(cursor)?;

    let else_body = if cursor.try_eat(Token::Else)? {
        Some(Box::new(parse_suite(cursor)?))
    } else {
        None
    };

    Ok(Node::If { condition: Box::new(condition),
                  body: Box::new(body),
                  else_body })
}

/// Parses a loop statement, after the `while` keyword.
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the condition.
///
/// # Returns
/// A [`Node::While`] whose body is the suite following `do`.
fn parse_while(cursor: &mut TokenCursor) -> ParseResult<Node> {
    let condition = parse_expression(cursor)?;
    cursor.eat(Token::Do)?;
    let body = parse_suite(cursor)?;

    Ok(Node::While { condition: Box::new(condition),
                     body:      Box::new(body), })
}

/// Parses an assignment statement, after its target name.
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the `:=` token.
/// - `name`: The already-consumed target variable name.
///
/// # Returns
/// A [`Node::Assign`] binding the right-hand side to the name.
fn parse_assignment(cursor: &mut TokenCursor, name: String) -> ParseResult<Node> {
    cursor.eat(Token::Assign)?;
    let value = parse_expression(cursor)?;

    Ok(Node::Assign { name,
                      value: Box::new(value) })
}
