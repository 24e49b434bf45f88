//! Every tier in this ladder admits at most one operator application:
//! there is no repetition within a rule, so `1 + 2 + 3` does not parse as
//! a left-associative chain. The second `+` is left for the enclosing
//! rule, and if nothing accounts for it the parse fails. Chained forms
//! must be written with parentheses, e.g. `(1 + 2) + 3`.

use crate::{
    ast::{CmpOp, Node},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, cursor::TokenCursor, unary::parse_factor},
    },
};

/// Parses a full expression, starting at the loosest-binding tier.
///
/// This is the entry point for expression parsing; it handles logical or
/// itself and descends through the precedence ladder for its operands.
///
/// Grammar: `expression := logical_and ("|" logical_and)?`
///
/// # Parameters
/// - `cursor`: Single-lookahead token cursor.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(cursor: &mut TokenCursor) -> ParseResult<Node> {
    let lhs = parse_logical_and(cursor)?;
    if cursor.try_eat(Token::Pipe)? {
        let rhs = parse_logical_and(cursor)?;

        return Ok(Node::Or(Box::new(lhs), Box::new(rhs)));
    }

    Ok(lhs)
}

/// Parses the logical and tier.
///
/// Grammar: `logical_and := equality ("&" equality)?`
///
/// # Parameters
/// - `cursor`: Single-lookahead token cursor.
///
/// # Returns
/// A [`Node::And`], or the bare operand when no `&` follows.
pub fn parse_logical_and(cursor: &mut TokenCursor) -> ParseResult<Node> {
    let lhs = parse_equality(cursor)?;
    if cursor.try_eat(Token::Ampersand)? {
        let rhs = parse_equality(cursor)?;

        return Ok(Node::And(Box::new(lhs), Box::new(rhs)));
    }

    Ok(lhs)
}

/// Parses the equality tier.
///
/// Grammar: `equality := relational ("=" relational)?`
///
/// # Parameters
/// - `cursor`: Single-lookahead token cursor.
///
/// # Returns
/// A [`Node::Eq`], or the bare operand when no `=` follows.
pub fn parse_equality(cursor: &mut TokenCursor) -> ParseResult<Node> {
    let lhs = parse_relational(cursor)?;
    if cursor.try_eat(Token::Equals)? {
        let rhs = parse_relational(cursor)?;

        return Ok(Node::Eq(Box::new(lhs), Box::new(rhs)));
    }

    Ok(lhs)
}

/// Parses the relational tier.
///
/// All four comparison operators live at the same strength, so at most
/// one of them applies per expression.
///
/// Grammar: `relational := additive (("<" | "<=" | ">" | ">=") additive)?`
///
/// # Parameters
/// - `cursor`: Single-lookahead token cursor.
///
/// # Returns
/// A [`Node::Cmp`] carrying the operator discriminant, or the bare
/// operand when no comparison follows.
pub fn parse_relational(cursor: &mut TokenCursor) -> ParseResult<Node> {
    let lhs = parse_additive(cursor)?;
    let op = match cursor.current() {
        Token::Less => CmpOp::Less,
        Token::LessEqual => CmpOp::LessEqual,
        Token::Greater => CmpOp::Greater,
        Token::GreaterEqual => CmpOp::GreaterEqual,
        _ => return Ok(lhs),
    };
    cursor.advance()?;
    let rhs = parse_additive(cursor)?;

    Ok(Node::Cmp { op,
                   lhs: Box::new(lhs),
                   rhs: Box::new(rhs) })
}

/// Parses the additive tier.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)?`
///
/// # Parameters
/// - `cursor`: Single-lookahead token cursor.
///
/// # Returns
/// A [`Node::Add`] or [`Node::Sub`], or the bare operand when neither
/// operator follows.
pub fn parse_additive(cursor: &mut TokenCursor) -> ParseResult<Node> {
    let lhs = parse_multiplicative(cursor)?;
    if cursor.try_eat(Token::Plus)? {
        let rhs = parse_multiplicative(cursor)?;

        return Ok(Node::Add(Box::new(lhs), Box::new(rhs)));
    }
    if cursor.try_eat(Token::Minus)? {
        let rhs = parse_multiplicative(cursor)?;

        return Ok(Node::Sub(Box::new(lhs), Box::new(rhs)));
    }

    Ok(lhs)
}

/// Parses the multiplicative tier, the tightest binary strength.
///
/// Grammar: `multiplicative := factor (("*" | "/") factor)?`
///
/// # Parameters
/// - `cursor`: Single-lookahead token cursor.
///
/// # Returns
/// A [`Node::Mul`] or [`Node::Div`], or the bare operand when neither
/// operator follows.
pub fn parse_multiplicative(cursor: &mut TokenCursor) -> ParseResult<Node> {
    let lhs = parse_factor(cursor)?;
    if cursor.try_eat(Token::Star)? {
        let rhs = parse_factor(cursor)?;

        return Ok(Node::Mul(Box::new(lhs), Box::new(rhs)));
    }
    if cursor.try_eat(Token::Slash)? {
        let rhs = parse_factor(cursor)?;

        return Ok(Node::Div(Box::new(lhs), Box::new(rhs)));
    }

    Ok(lhs)
}
