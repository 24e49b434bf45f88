use crate::{
    ast::CmpOp,
    error::RuntimeError,
    interpreter::evaluator::EvalResult,
    util::num::i64_to_f64_checked,
};

/// A run-time value: an integer, a real, or a boolean.
///
/// Programs are dynamically typed; the variant of a value is only known at
/// evaluation time. Integers and reals mix freely in arithmetic, with
/// integers promoted to reals when needed. Source literals are integers
/// and booleans only; reals enter a program exclusively through division.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double-precision real.
    Real(f64),
    /// A boolean.
    Bool(bool),
}

impl Value {
    /// The user-facing name of this value's type, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Bool(_) => "boolean",
        }
    }

    /// The truth value used by conditions and logical operators.
    ///
    /// Booleans are themselves; numbers are true when nonzero.
    #[must_use]
    pub fn truthy(&self) -> bool {
        match self {
            Self::Integer(value) => *value != 0,
            Self::Real(value) => *value != 0.0,
            Self::Bool(value) => *value,
        }
    }

    /// Adds two values.
    ///
    /// Integer addition is checked; mixed operands are promoted to reals.
    ///
    /// # Errors
    /// - `Overflow` if integer addition leaves the 64-bit range.
    /// - `ExpectedNumber` if either operand is a boolean.
    /// - `LiteralTooLarge` if promotion to real would lose precision.
    pub fn add(self, rhs: Self) -> EvalResult<Self> {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => {
                a.checked_add(b)
                 .map(Self::Integer)
                 .ok_or(RuntimeError::Overflow { operation: "+" })
            },
            (lhs, rhs) => Ok(Self::Real(lhs.as_real("+")? + rhs.as_real("+")?)),
        }
    }

    /// Subtracts `rhs` from this value.
    ///
    /// Integer subtraction is checked; mixed operands are promoted to
    /// reals.
    ///
    /// # Errors
    /// - `Overflow` if integer subtraction leaves the 64-bit range.
    /// - `ExpectedNumber` if either operand is a boolean.
    /// - `LiteralTooLarge` if promotion to real would lose precision.
    pub fn subtract(self, rhs: Self) -> EvalResult<Self> {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => {
                a.checked_sub(b)
                 .map(Self::Integer)
                 .ok_or(RuntimeError::Overflow { operation: "-" })
            },
            (lhs, rhs) => Ok(Self::Real(lhs.as_real("-")? - rhs.as_real("-")?)),
        }
    }

    /// Multiplies two values.
    ///
    /// Integer multiplication is checked; mixed operands are promoted to
    /// reals.
    ///
    /// # Errors
    /// - `Overflow` if integer multiplication leaves the 64-bit range.
    /// - `ExpectedNumber` if either operand is a boolean.
    /// - `LiteralTooLarge` if promotion to real would lose precision.
    pub fn multiply(self, rhs: Self) -> EvalResult<Self> {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => {
                a.checked_mul(b)
                 .map(Self::Integer)
                 .ok_or(RuntimeError::Overflow { operation: "*" })
            },
            (lhs, rhs) => Ok(Self::Real(lhs.as_real("*")? * rhs.as_real("*")?)),
        }
    }

    /// Divides this value by `rhs`.
    ///
    /// Division is always true division over reals, even between two
    /// integers: `7 / 2` is `3.5`, never `3`.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero.
    /// - `ExpectedNumber` if either operand is a boolean.
    /// - `LiteralTooLarge` if promotion to real would lose precision.
    #[allow(clippy::float_cmp)]
    pub fn divide(self, rhs: Self) -> EvalResult<Self> {
        let divisor = rhs.as_real("/")?;
        if divisor == 0.0 {
            return Err(RuntimeError::DivisionByZero);
        }

        Ok(Self::Real(self.as_real("/")? / divisor))
    }

    /// Tests two values for equality.
    ///
    /// Equality never fails: an integer and a real compare numerically,
    /// and a boolean is equal only to an equal boolean. An integer too
    /// large to promote exactly compares unequal to every real.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn equals(self, rhs: Self) -> bool {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Real(a), Self::Real(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Real(b)) | (Self::Real(b), Self::Integer(a)) => {
                i64_to_f64_checked(a, ()).map_or(false, |a| a == b)
            },
            _ => false,
        }
    }

    /// Applies a relational operator to two values.
    ///
    /// # Errors
    /// - `ExpectedNumber` if either operand is a boolean.
    /// - `LiteralTooLarge` if promotion to real would lose precision.
    pub fn compare(self, op: CmpOp, rhs: Self) -> EvalResult<Self> {
        let holds = match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => relation_holds(op, &a, &b),
            (lhs, rhs) => {
                let operation = op.to_string();
                relation_holds(op, &lhs.as_real(&operation)?, &rhs.as_real(&operation)?)
            },
        };

        Ok(Self::Bool(holds))
    }

    /// Promotes this value to a real for mixed or real arithmetic.
    ///
    /// # Parameters
    /// - `operation`: The operator being applied, named in the error when
    ///   the operand is not a number.
    ///
    /// # Errors
    /// - `ExpectedNumber` if the value is a boolean.
    /// - `LiteralTooLarge` if the integer is not exactly representable as
    ///   an `f64`.
    pub fn as_real(self, operation: &str) -> EvalResult<f64> {
        match self {
            Self::Integer(value) => i64_to_f64_checked(value, RuntimeError::LiteralTooLarge),
            Self::Real(value) => Ok(value),
            Self::Bool(_) => {
                Err(RuntimeError::ExpectedNumber { operation: operation.to_string(),
                                                   found:     self.type_name(), })
            },
        }
    }
}

/// Checks one relational operator against an ordered pair.
///
/// `f64` comparisons follow IEEE semantics, so nothing compares against a
/// NaN.
fn relation_holds<T: PartialOrd>(op: CmpOp, lhs: &T, rhs: &T) -> bool {
    match op {
        CmpOp::Less => lhs < rhs,
        CmpOp::LessEqual => lhs <= rhs,
        CmpOp::Greater => lhs > rhs,
        CmpOp::GreaterEqual => lhs >= rhs,
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            // Debug formatting keeps the decimal point on whole reals,
            // so `8 / 2` prints as `4.0`, not `4`.
            Self::Real(value) => write!(f, "{value:?}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}
