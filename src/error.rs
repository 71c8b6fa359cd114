//! Error types
//!
//! Failures reported by the arithmetic functions. The text functions are
//! total and never return an error.

use thiserror::Error;

/// Broad classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a value outside the operation's domain
    InvalidArgument,
    /// The exact result does not fit in the return type
    Overflow,
}

/// Errors returned by the arithmetic operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Division with a zero divisor
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Factorial of a negative number
    #[error("Factorial is not defined for negative numbers")]
    NegativeFactorial,

    /// Factorial result larger than `u128::MAX`
    #[error("Factorial of {n} does not fit in 128 bits")]
    FactorialOverflow { n: i64 },
}

/// Result alias for the library operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the category this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::DivisionByZero | Error::NegativeFactorial => ErrorKind::InvalidArgument,
            Error::FactorialOverflow { .. } => ErrorKind::Overflow,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_fixed() {
        assert_eq!(Error::DivisionByZero.to_string(), "Cannot divide by zero");
        assert_eq!(
            Error::NegativeFactorial.to_string(),
            "Factorial is not defined for negative numbers"
        );
    }

    #[test]
    fn test_kind_classification() {
        assert!(Error::DivisionByZero.is_invalid_argument());
        assert!(Error::NegativeFactorial.is_invalid_argument());
        assert_eq!(
            Error::FactorialOverflow { n: 40 }.kind(),
            ErrorKind::Overflow
        );
    }
}
