//! Record error definitions

use std::error::Error;
use std::fmt;

/// Record validation error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Code does not have exactly `expected` characters
    InvalidLength { expected: usize, actual: usize },
    /// Code contains a byte that is not a decimal digit
    InvalidDigit { code: String, position: usize },
    /// Numeric index does not fit in a 9-digit code
    OutOfRange(u64),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::InvalidLength { expected, actual } => write!(
                f,
                "Invalid code length: expected {} digits, got {}",
                expected, actual
            ),
            RecordError::InvalidDigit { code, position } => {
                write!(f, "Invalid digit at position {} in code {:?}", position, code)
            }
            RecordError::OutOfRange(value) => {
                write!(f, "Value out of range for a 9-digit code: {}", value)
            }
        }
    }
}

impl Error for RecordError {}

/// Result type for record construction
pub type RecordResult<T> = Result<T, RecordError>;
