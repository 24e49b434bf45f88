use std::collections::HashMap;

use crate::{ast::Node, error::RuntimeError, interpreter::value::Value};

/// The result of an evaluation step.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The mutable variable store a program runs against.
///
/// Created by the caller, possibly pre-populated with initial bindings,
/// and mutated exclusively by assignment statements. Each run owns its
/// namespace for the duration of the call; nothing is shared or global.
pub type Namespace = HashMap<String, Value>;

impl Node {
    /// Executes this node as a statement, for its effect on the
    /// namespace.
    ///
    /// Statements return no value; assignment is the only operation that
    /// writes to the namespace. Suites run their children strictly in
    /// source order with no early exit.
    ///
    /// # Parameters
    /// - `namespace`: The variable store to run against.
    ///
    /// # Errors
    /// Returns a `RuntimeError` if evaluating any contained expression
    /// fails.
    ///
    /// # Panics
    /// Panics when called on an expression node; the parser only ever
    /// puts statement nodes in statement position.
    pub fn visit(&self, namespace: &mut Namespace) -> EvalResult<()> {
        match self {
            Self::Suite(statements) => {
                for statement in statements {
                    statement.visit(namespace)?;
                }
                Ok(())
            },

            Self::If { condition,
                       body,
                       else_body, } => {
                if condition.value(namespace)?.truthy() {
                    body.visit(namespace)
                } else if let Some(else_body) = else_body {
                    else_body.visit(namespace)
                } else {
                    Ok(())
                }
            },

            Self::While { condition, body } => {
                while condition.value(namespace)?.truthy() {
                    body.visit(namespace)?;
                }
                Ok(())
            },

            Self::Skip => Ok(()),

            Self::Assign { name, value } => {
                let value = value.value(namespace)?;
                namespace.insert(name.clone(), value);
                Ok(())
            },

            Self::Constant(_)
            | Self::Variable(_)
            | Self::Not(_)
            | Self::Mul(..)
            | Self::Div(..)
            | Self::Add(..)
            | Self::Sub(..)
            | Self::Eq(..)
            | Self::Cmp { .. }
            | Self::And(..)
            | Self::Or(..) => unreachable!(),
        }
    }

    /// Evaluates this node as an expression and returns its value.
    ///
    /// Expression evaluation only reads the namespace; the parser never
    /// places an assignment in expression position, so evaluation cannot
    /// mutate state from here.
    ///
    /// # Parameters
    /// - `namespace`: The variable store to read from.
    ///
    /// # Errors
    /// Returns a `RuntimeError` for division by zero, integer overflow,
    /// lossy promotion, or arithmetic on a boolean.
    ///
    /// # Panics
    /// Panics when called on a statement node; the parser only ever puts
    /// expression nodes in expression position.
    pub fn value(&self, namespace: &Namespace) -> EvalResult<Value> {
        match self {
            Self::Constant(value) => Ok(*value),

            // Unbound names read as integer zero, never an error.
            Self::Variable(name) => {
                Ok(namespace.get(name).copied().unwrap_or(Value::Integer(0)))
            },

            Self::Not(operand) => Ok(Value::Bool(!operand.value(namespace)?.truthy())),

            Self::Mul(lhs, rhs) => lhs.value(namespace)?.multiply(rhs.value(namespace)?),
            Self::Div(lhs, rhs) => lhs.value(namespace)?.divide(rhs.value(namespace)?),
            Self::Add(lhs, rhs) => lhs.value(namespace)?.add(rhs.value(namespace)?),
            Self::Sub(lhs, rhs) => lhs.value(namespace)?.subtract(rhs.value(namespace)?),

            Self::Eq(lhs, rhs) => {
                Ok(Value::Bool(lhs.value(namespace)?.equals(rhs.value(namespace)?)))
            },
            Self::Cmp { op, lhs, rhs } => {
                lhs.value(namespace)?.compare(*op, rhs.value(namespace)?)
            },

            Self::And(lhs, rhs) => {
                Ok(Value::Bool(lhs.value(namespace)?.truthy()
                               && rhs.value(namespace)?.truthy()))
            },
            Self::Or(lhs, rhs) => {
                Ok(Value::Bool(lhs.value(namespace)?.truthy()
                               || rhs.value(namespace)?.truthy()))
            },

            Self::Suite(_)
            | Self::If { .. }
            | Self::While { .. }
            | Self::Skip
            | Self::Assign { .. } => unreachable!(),
        }
    }
}
