// Open addressing with double hashing

use std::io::{self, Write};

use crate::infrastructure::hash::{digit_sum_hash, double_hash_step};
use crate::record::Record;

use super::error::{TableError, TableResult};
use super::open_addressing::SlotArray;
use super::stats::GapStats;
use super::{HashTable, InsertOutcome, TableKind};

/// Fixed-capacity table whose probe step depends on the key
#[derive(Debug, Clone)]
pub struct DoubleHashingTable {
    slots: SlotArray,
}

impl DoubleHashingTable {
    /// Create a new table with the specified number of slots
    pub fn new(capacity: usize) -> TableResult<Self> {
        if capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        Ok(DoubleHashingTable {
            slots: SlotArray::new(capacity),
        })
    }

    /// Primary slot for a record
    pub fn home_index(&self, record: &Record) -> usize {
        digit_sum_hash(record.code()) as usize % self.slots.capacity()
    }

    /// Probe step for a record, in `[1, capacity - 1]`
    pub fn step(&self, record: &Record) -> usize {
        double_hash_step(record.code(), self.slots.capacity())
    }

    /// Slot examined on the given attempt
    pub fn probe_index(capacity: usize, home: usize, step: usize, attempt: usize) -> usize {
        let offset = ((attempt % capacity) as u128 * step as u128 % capacity as u128) as usize;
        (home + offset) % capacity
    }
}

impl HashTable for DoubleHashingTable {
    fn kind(&self) -> TableKind {
        TableKind::DoubleHashing
    }

    fn insert(&mut self, record: Record) -> InsertOutcome {
        let home = self.home_index(&record);
        let step = self.step(&record);
        let capacity = self.slots.capacity();
        let outcome = self.slots.insert_with(record, |attempt| {
            Self::probe_index(capacity, home, step, attempt)
        });

        if let InsertOutcome::Rejected { attempts } = outcome {
            log::debug!("{}: insert dropped after {} attempts", self.name(), attempts);
        }
        outcome
    }

    fn search(&self, record: &Record) -> bool {
        let home = self.home_index(record);
        let step = self.step(record);
        let capacity = self.slots.capacity();
        self.slots.search_with(record, |attempt| {
            Self::probe_index(capacity, home, step, attempt)
        })
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
