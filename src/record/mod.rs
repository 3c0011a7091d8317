//! Record module
//!
//! A record wraps a validated 9-digit numeric code. Equality and hashing are
//! defined by the code alone, so two records built from the same string are
//! interchangeable as table keys.

use std::fmt;
use std::str::FromStr;

pub mod error;
pub use error::{RecordError, RecordResult};

/// Number of decimal digits in every record code
pub const CODE_LENGTH: usize = 9;

/// Exclusive upper bound of the numeric value of a code
pub const CODE_SPACE: u64 = 1_000_000_000;

/// Immutable record keyed by a 9-digit code
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Record {
    code: String,
}

impl Record {
    /// Create a new record from a code string
    ///
    /// # Returns
    /// * `Ok(Record)` if the code has exactly 9 decimal digits
    /// * `Err(RecordError)` otherwise
    pub fn new(code: impl Into<String>) -> RecordResult<Self> {
        let code = code.into();

        // Count characters, not bytes; non-ASCII input is rejected as a digit error below
        let length = code.chars().count();
        if length != CODE_LENGTH {
            return Err(RecordError::InvalidLength {
                expected: CODE_LENGTH,
                actual: length,
            });
        }

        if let Some(position) = code.bytes().position(|b| !b.is_ascii_digit()) {
            return Err(RecordError::InvalidDigit { code, position });
        }

        Ok(Record { code })
    }

    /// Create a record from a numeric value, zero-padded to 9 digits
    pub fn from_index(value: u64) -> RecordResult<Self> {
        if value >= CODE_SPACE {
            return Err(RecordError::OutOfRange(value));
        }
        Ok(Record {
            code: format!("{:09}", value),
        })
    }

    /// Get the code string
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Iterate over the digit values of the code, most significant first
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.code.bytes().map(|b| b - b'0')
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for Record {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Record::new(s)
    }
}

impl AsRef<str> for Record {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
