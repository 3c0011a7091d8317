//! Hashbench collision-resolution library
//!
//! Fixed-size hash tables keyed by 9-digit codes, one per collision
//! strategy, instrumented with collision counts and positional statistics.

// Record model
pub mod record;

// Hash functions and table variants
pub mod infrastructure;

// Logging setup
pub mod logger;

// Re-export record items for easier access
pub use record::{Record, RecordError};

// Re-export table items for easier access
pub use infrastructure::hash_table::{
    ChainingTable, DoubleHashingTable, GapStats, HashTable, InsertOutcome, LinearProbingTable,
    QuadraticProbingTable, TableError, TableKind,
};
