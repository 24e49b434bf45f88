use crate::{
    ast::Node,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_expression, core::ParseResult, cursor::TokenCursor},
        value::Value,
    },
};

/// Parses a factor: an operand with an optional negation prefix.
///
/// Both spellings of the negation operator, `!` and `¬`, are accepted and
/// produce the same node. The prefix applies at most once; `!!x` is a
/// parse error at the inner operand.
///
/// Grammar: `factor := ("!" | "¬")? operand`
///
/// # Parameters
/// - `cursor`: Single-lookahead token cursor.
///
/// # Returns
/// The operand node, wrapped in [`Node::Not`] when a prefix was present.
pub fn parse_factor(cursor: &mut TokenCursor) -> ParseResult<Node> {
    let negated = cursor.try_eat(Token::Bang)? || cursor.try_eat(Token::NotSign)?;
    let operand = parse_operand(cursor)?;

    if negated {
        Ok(Node::Not(Box::new(operand)))
    } else {
        Ok(operand)
    }
}

/// Parses the atomic unit of an expression.
///
/// Grammar: `operand := NUMBER | BOOLEAN | NAME | "(" expression ")"`
///
/// # Parameters
/// - `cursor`: Single-lookahead token cursor.
///
/// # Returns
/// A [`Node::Constant`] for literals, a [`Node::Variable`] for names, or
/// the inner expression for a parenthesized group.
///
/// # Errors
/// Returns a `SyntaxError` when the current token starts no operand.
pub fn parse_operand(cursor: &mut TokenCursor) -> ParseResult<Node> {
    match cursor.current().clone() {
        Token::Integer(value) => {
            cursor.advance()?;
            Ok(Node::Constant(Value::Integer(value)))
        },
        Token::Bool(value) => {
            cursor.advance()?;
            Ok(Node::Constant(Value::Bool(value)))
        },
        Token::Identifier(name) => {
            cursor.advance()?;
            Ok(Node::Variable(name))
        },
        Token::LParen => {
            cursor.advance()?;
            let inner = parse_expression(cursor)?;
            cursor.eat(Token::RParen)?;
            Ok(inner)
        },
        _ => Err(cursor.unexpected("a literal, a name or '('")),
    }
}
