#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An arithmetic or relational operator was applied to a non-number.
    ExpectedNumber {
        /// The operator that was applied, e.g. `+` or `<`.
        operation: String,
        /// The type name of the offending operand.
        found:     &'static str,
    },
    /// Integer arithmetic overflowed the 64-bit range.
    Overflow {
        /// The operator whose result overflowed.
        operation: &'static str,
    },
    /// The right operand of a division was zero.
    DivisionByZero,
    /// An integer was too large to be promoted to a real without
    /// losing precision.
    LiteralTooLarge,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedNumber { operation, found } => {
                write!(f, "Runtime error: '{operation}' expects a number, got a {found}.")
            },

            Self::Overflow { operation } => {
                write!(f, "Runtime error: Integer overflow in '{operation}'.")
            },

            Self::DivisionByZero => write!(f, "Runtime error: Division by zero."),

            Self::LiteralTooLarge => {
                write!(f, "Runtime error: Integer is too large to convert to a real.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
