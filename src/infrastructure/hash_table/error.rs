//! Hash table error definitions

use std::error::Error;
use std::fmt;

/// Hash table construction error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A table needs at least one slot
    ZeroCapacity,
    /// Unknown table variant name
    UnknownKind(String),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::ZeroCapacity => write!(f, "Table capacity must be greater than zero"),
            TableError::UnknownKind(name) => write!(f, "Unknown table kind: {}", name),
        }
    }
}

impl Error for TableError {}

/// Result type for hash table operations
pub type TableResult<T> = Result<T, TableError>;
