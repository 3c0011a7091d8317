// Open addressing with quadratic probing
//
// Probe sequence: index_i = (h + i + i^2) mod capacity, with c1 = c2 = 1.
// For capacities that are not powers of two the sequence may revisit slots
// and miss others, so an insert can be rejected while free slots remain.

use std::io::{self, Write};

use crate::infrastructure::hash::horner31_hash;
use crate::record::Record;

use super::error::{TableError, TableResult};
use super::open_addressing::SlotArray;
use super::stats::GapStats;
use super::{HashTable, InsertOutcome, TableKind};

/// Code whose probe sequence is printed in the diagnostics
pub const TRACE_SAMPLE_CODE: &str = "000000001";

/// Number of probe steps printed in the diagnostics
pub const TRACE_STEPS: usize = 5;

/// Fixed-capacity table probing at quadratically growing offsets
#[derive(Debug, Clone)]
pub struct QuadraticProbingTable {
    slots: SlotArray,
}

impl QuadraticProbingTable {
    /// Create a new table with the specified number of slots
    pub fn new(capacity: usize) -> TableResult<Self> {
        if capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        Ok(QuadraticProbingTable {
            slots: SlotArray::new(capacity),
        })
    }

    /// Primary slot for a code
    pub fn home_index(&self, code: &str) -> usize {
        horner31_hash(code) as usize % self.slots.capacity()
    }

    /// Slot examined on the given attempt, starting from `home`
    pub fn probe_index(capacity: usize, home: usize, attempt: usize) -> usize {
        // Reduce first so i^2 cannot overflow
        let i = attempt % capacity;
        let square = (i * i) % capacity;
        (home % capacity + i + square) % capacity
    }

    /// Primary index of `code` followed by its first `steps` probe indices
    pub fn probe_trace(&self, code: &str, steps: usize) -> Vec<usize> {
        let capacity = self.slots.capacity();
        let home = self.home_index(code);
        (0..=steps)
            .map(|attempt| Self::probe_index(capacity, home, attempt))
            .collect()
    }
}

impl HashTable for QuadraticProbingTable {
    fn kind(&self) -> TableKind {
        TableKind::QuadraticProbing
    }

    fn insert(&mut self, record: Record) -> InsertOutcome {
        let home = self.home_index(record.code());
        let capacity = self.slots.capacity();
        let outcome = self
            .slots
            .insert_with(record, |attempt| Self::probe_index(capacity, home, attempt));

        if let InsertOutcome::Rejected { attempts } = outcome {
            log::warn!("{}: could not insert after {} attempts", self.name(), attempts);
        }
        outcome
    }

    fn search(&self, record: &Record) -> bool {
        let home = self.home_index(record.code());
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
        self.slots.write_summary(self.name(), out)?;

        let trace: Vec<String> = self
            .probe_trace(TRACE_SAMPLE_CODE, TRACE_STEPS)
            .iter()
            .map(usize::to_string)
            .collect();

        writeln!(out, "Probe sequence for {}:", TRACE_SAMPLE_CODE)?;
        writeln!(out, "  {}", trace.join(" -> "))
    }
}
