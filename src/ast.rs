use crate::interpreter::value::Value;

/// An abstract syntax tree (AST) node.
///
/// `Node` covers every construct of the language in one closed variant set:
/// statement forms (`Suite`, `If`, `While`, `Skip`, `Assign`) and expression
/// forms (everything else). A tree is built once by the parser and then only
/// traversed; evaluation never inserts or removes nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An ordered sequence of statements treated as one unit.
    ///
    /// Statement order is semantically significant: evaluation visits the
    /// children strictly in source order, with no early exit.
    Suite(Vec<Self>),
    /// A conditional statement.
    If {
        /// The condition expression.
        condition: Box<Self>,
        /// The suite visited when the condition holds.
        body:      Box<Self>,
        /// The suite visited otherwise; a missing else clause is a no-op.
        else_body: Option<Box<Self>>,
    },
    /// A loop re-evaluating its condition before every iteration.
    While {
        /// The condition expression.
        condition: Box<Self>,
        /// The body suite.
        body:      Box<Self>,
    },
    /// The no-op statement.
    Skip,
    /// Binds the value of an expression to a variable name.
    Assign {
        /// The target variable name.
        name:  String,
        /// The right-hand side expression.
        value: Box<Self>,
    },
    /// A literal value captured from the source text.
    Constant(Value),
    /// Reference to a variable by name; unbound names read as integer `0`.
    Variable(String),
    /// Logical negation of the operand's truth value.
    Not(Box<Self>),
    /// Multiplication.
    Mul(Box<Self>, Box<Self>),
    /// True (real) division; `7 / 2` is `3.5`, never `3`.
    Div(Box<Self>, Box<Self>),
    /// Addition.
    Add(Box<Self>, Box<Self>),
    /// Subtraction.
    Sub(Box<Self>, Box<Self>),
    /// Equality comparison.
    Eq(Box<Self>, Box<Self>),
    /// Relational comparison, with the operator kept as a discriminant.
    Cmp {
        /// Which relational operator to apply.
        op:  CmpOp,
        /// Left operand.
        lhs: Box<Self>,
        /// Right operand.
        rhs: Box<Self>,
    },
    /// Logical and.
    And(Box<Self>, Box<Self>),
    /// Logical or.
    Or(Box<Self>, Box<Self>),
}

/// Represents a relational operator carried by a [`Node::Cmp`] node.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CmpOp {
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

impl std::fmt::Display for CmpOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}
