//! Benchmark driver error definitions

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use hashbench::{RecordError, TableError};

/// Benchmark driver error types
#[derive(Debug)]
pub enum BenchError {
    /// I/O error while reading or writing a file
    IoError(std::io::Error),
    /// Dataset line that is not a valid record
    InvalidRecord {
        path: PathBuf,
        line: usize,
        source: RecordError,
    },
    /// Table could not be built
    Table(TableError),
    /// Report serialization error
    Serialize(serde_json::Error),
    /// Invalid command line argument
    InvalidArgument(String),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::IoError(err) => write!(f, "I/O error: {}", err),
            BenchError::InvalidRecord { path, line, source } => {
                write!(f, "{}:{}: {}", path.display(), line, source)
            }
            BenchError::Table(err) => write!(f, "Table error: {}", err),
            BenchError::Serialize(err) => write!(f, "Serialization error: {}", err),
            BenchError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl Error for BenchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BenchError::IoError(err) => Some(err),
            BenchError::InvalidRecord { source, .. } => Some(source),
            BenchError::Table(err) => Some(err),
            BenchError::Serialize(err) => Some(err),
            BenchError::InvalidArgument(_) => None,
        }
    }
}

impl From<std::io::Error> for BenchError {
    fn from(err: std::io::Error) -> Self {
        BenchError::IoError(err)
    }
}

impl From<TableError> for BenchError {
    fn from(err: TableError) -> Self {
        BenchError::Table(err)
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(err: serde_json::Error) -> Self {
        BenchError::Serialize(err)
    }
}

/// Result type for benchmark driver operations
pub type BenchResult<T> = Result<T, BenchError>;
