// Fixed-size hash tables keyed by 9-digit codes
//
// Four collision-resolution strategies behind one trait: separate chaining,
// linear probing, quadratic probing and double hashing. Tables never resize
// and never delete; they exist to be measured.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::record::Record;

pub mod chaining;
pub mod double;
pub mod error;
pub mod linear;
pub mod open_addressing;
pub mod quadratic;
pub mod stats;

pub use chaining::ChainingTable;
pub use double::DoubleHashingTable;
pub use error::{TableError, TableResult};
pub use linear::LinearProbingTable;
pub use open_addressing::Slot;
pub use quadratic::QuadraticProbingTable;
pub use stats::{gap_statistics, GapStats};

/// Result of inserting a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The record was stored and the size grew by one
    Inserted,
    /// An equal record was already stored; nothing changed
    AlreadyPresent,
    /// Every probe in the budget hit another record; the table is full for this key
    Rejected { attempts: usize },
}

impl InsertOutcome {
    /// Check whether the record is stored after the insert
    pub fn is_stored(&self) -> bool {
        !matches!(self, InsertOutcome::Rejected { .. })
    }
}

/// Uniform interface over every table variant
pub trait HashTable {
    /// Which variant this table is
    fn kind(&self) -> TableKind;

    /// Human-readable variant name
    fn name(&self) -> &'static str {
        self.kind().label()
    }

    /// Insert a record, counting collisions along the way
    fn insert(&mut self, record: Record) -> InsertOutcome;

    /// Check whether an equal record is stored; never counts collisions
    fn search(&self, record: &Record) -> bool;

    /// Collisions counted by all inserts so far
    fn collision_count(&self) -> u64;

    /// Number of distinct records stored
    fn size(&self) -> usize;

    /// Number of slots or buckets, fixed at construction
    fn capacity(&self) -> usize;

    /// `size / capacity`, computed on every call
    fn load_factor(&self) -> f64 {
        self.size() as f64 / self.capacity() as f64
    }

    /// Length of the longest bucket (chaining only)
    fn largest_bucket(&self) -> usize {
        0
    }

    /// Lengths of the three longest non-empty buckets, longest first (chaining only)
    fn top_three_buckets(&self) -> Vec<usize> {
        Vec::new()
    }

    /// Longest run of consecutive occupied slots (open addressing only)
    fn longest_cluster(&self) -> usize {
        0
    }

    /// Gaps between consecutive occupied positions
    fn gap_statistics(&self) -> GapStats;

    /// Write a human-readable statistics dump
    fn write_diagnostics(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Print the statistics dump to stdout
    fn print_diagnostics(&self) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(err) = self.write_diagnostics(&mut handle) {
            log::warn!("Failed to print {} diagnostics: {}", self.name(), err);
        }
    }
}

/// Collision-resolution strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TableKind {
    Chaining,
    LinearProbing,
    QuadraticProbing,
    DoubleHashing,
}

impl TableKind {
    /// Every variant, chaining first
    pub const ALL: [TableKind; 4] = [
        TableKind::Chaining,
        TableKind::LinearProbing,
        TableKind::QuadraticProbing,
        TableKind::DoubleHashing,
    ];

    /// Label used in logs and reports
    pub fn label(&self) -> &'static str {
        match self {
            TableKind::Chaining => "Chaining",
            TableKind::LinearProbing => "Linear-Probing",
            TableKind::QuadraticProbing => "Quadratic-Probing",
            TableKind::DoubleHashing => "Double-Hashing",
        }
    }

    /// Check whether the variant stores records directly in a slot array
    pub fn is_open_addressing(&self) -> bool {
        !matches!(self, TableKind::Chaining)
    }

    /// Build an empty table of this variant
    pub fn build(&self, capacity: usize) -> TableResult<Box<dyn HashTable + Send>> {
        Ok(match self {
            TableKind::Chaining => Box::new(ChainingTable::new(capacity)?),
            TableKind::LinearProbing => Box::new(LinearProbingTable::new(capacity)?),
            TableKind::QuadraticProbing => Box::new(QuadraticProbingTable::new(capacity)?),
            TableKind::DoubleHashing => Box::new(DoubleHashingTable::new(capacity)?),
        })
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TableKind {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "chaining" => Ok(TableKind::Chaining),
            "linear" | "linearprobing" => Ok(TableKind::LinearProbing),
            "quadratic" | "quadraticprobing" => Ok(TableKind::QuadraticProbing),
            "double" | "doublehashing" => Ok(TableKind::DoubleHashing),
            _ => Err(TableError::UnknownKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
