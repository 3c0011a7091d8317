// Open addressing with linear probing

use std::io::{self, Write};

use crate::infrastructure::hash::knuth_hash;
use crate::record::Record;

use super::error::{TableError, TableResult};
use super::open_addressing::SlotArray;
use super::stats::GapStats;
use super::{HashTable, InsertOutcome, TableKind};

/// Fixed-capacity table stepping one slot at a time
#[derive(Debug, Clone)]
pub struct LinearProbingTable {
    slots: SlotArray,
}

impl LinearProbingTable {
    /// Create a new table with the specified number of slots
    pub fn new(capacity: usize) -> TableResult<Self> {
        if capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        Ok(LinearProbingTable {
            slots: SlotArray::new(capacity),
        })
    }

    /// Primary slot for a record
    pub fn home_index(&self, record: &Record) -> usize {
        (knuth_hash(record.code()) % self.slots.capacity() as u64) as usize
    }

    /// Slot examined on the given attempt, starting from `home`
    ///
    /// Equivalent to stepping `index = (index + 1) mod capacity` once per attempt.
    pub fn probe_index(capacity: usize, home: usize, attempt: usize) -> usize {
        (home + attempt % capacity) % capacity
    }
}

impl HashTable for LinearProbingTable {
    fn kind(&self) -> TableKind {
        TableKind::LinearProbing
    }

    fn insert(&mut self, record: Record) -> InsertOutcome {
        let home = self.home_index(&record);
        let capacity = self.slots.capacity();
        let outcome = self
            .slots
            .insert_with(record, |attempt| Self::probe_index(capacity, home, attempt));

        if let InsertOutcome::Rejected { attempts } = outcome {
            log::debug!("{}: insert dropped after {} attempts", self.name(), attempts);
        }
        outcome
    }

    fn search(&self, record: &Record) -> bool {
        let home = self.home_index(record);
        let capacity = self.slots.capacity();
        self.slots
            .search_with(record, |attempt| Self::probe_index(capacity, home, attempt))
    }

    fn collision_count(&self) -> u64 {
        self.slots.collisions()
    }

    fn size(&self) -> usize {
        self.slots.size()
    }

    fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    fn longest_cluster(&self) -> usize {
        self.slots.longest_cluster()
    }

    fn gap_statistics(&self) -> GapStats {
        self.slots.gap_statistics()
    }

    fn write_diagnostics(&self, out: &mut dyn Write) -> io::Result<()> {
        self.slots.write_summary(self.name(), out)
    }
}
