// Hash table with separate chaining

use std::io::{self, Write};

use crate::infrastructure::hash::chaining_hash;
use crate::record::Record;

use super::error::{TableError, TableResult};
use super::stats::{gap_statistics, largest_n, GapStats};
use super::{HashTable, InsertOutcome, TableKind};

/// Array of unbounded buckets; never rejects an insert
#[derive(Debug, Clone)]
pub struct ChainingTable {
    /// Records in insertion order, one vector per bucket
    buckets: Vec<Vec<Record>>,
    /// Number of distinct records stored
    size: usize,
    /// Pre-existing bucket members seen by every insert
    collisions: u64,
}

impl ChainingTable {
    /// Create a new table with the specified number of buckets
    pub fn new(capacity: usize) -> TableResult<Self> {
        if capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }

        Ok(ChainingTable {
            buckets: vec![Vec::new(); capacity],
            size: 0,
            collisions: 0,
        })
    }

    /// Calculate the bucket index for a given record
    pub fn bucket_index(&self, record: &Record) -> usize {
        chaining_hash(record.code()) as usize % self.buckets.len()
    }

    /// Records stored in the bucket at `index`
    pub fn bucket(&self, index: usize) -> &[Record] {
        &self.buckets[index]
    }

    /// Number of buckets holding no record
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|bucket| bucket.is_empty()).count()
    }

    fn occupied_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets
            .iter()
            .filter(|bucket| !bucket.is_empty())
            .map(Vec::len)
    }
}

impl HashTable for ChainingTable {
    fn kind(&self) -> TableKind {
        TableKind::Chaining
    }

    fn insert(&mut self, record: Record) -> InsertOutcome {
        let index = self.bucket_index(&record);
        let bucket = &mut self.buckets[index];

        // Every record already in the bucket is one collision, duplicate or not
        self.collisions += bucket.len() as u64;

        if bucket.contains(&record) {
            return InsertOutcome::AlreadyPresent;
        }

        bucket.push(record);
        self.size += 1;
        InsertOutcome::Inserted
    }

    fn search(&self, record: &Record) -> bool {
        self.buckets[self.bucket_index(record)].contains(record)
    }

    fn collision_count(&self) -> u64 {
        self.collisions
    }

    fn size(&self) -> usize {
        self.size
    }

    fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn largest_bucket(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    fn top_three_buckets(&self) -> Vec<usize> {
        largest_n(self.occupied_lengths(), 3)
    }

    fn gap_statistics(&self) -> GapStats {
        gap_statistics(
            self.buckets
                .iter()
                .enumerate()
                .filter(|(_, bucket)| !bucket.is_empty())
                .map(|(index, _)| index),
        )
    }

    fn write_diagnostics(&self, out: &mut dyn Write) -> io::Result<()> {
        let capacity = self.buckets.len();
        let empty = self.empty_buckets();
        let non_empty = capacity - empty;

        writeln!(out, "** {} statistics **", self.name())?;
        writeln!(
            out,
            "Empty buckets: {} ({:.2}%)",
            empty,
            empty as f64 * 100.0 / capacity as f64
        )?;
        writeln!(out, "Largest bucket: {}", self.largest_bucket())?;

        if non_empty > 0 {
            writeln!(
                out,
                "Mean records per non-empty bucket: {:.2}",
                self.size as f64 / non_empty as f64
            )?;
        }

        writeln!(out, "Three largest buckets:")?;
        for length in self.top_three_buckets() {
            writeln!(out, "  - {} records", length)?;
        }

        let gaps = self.gap_statistics();
        if gaps.is_empty() {
            writeln!(out, "No gaps to measure")?;
        } else {
            writeln!(out, "Smallest gap: {}", gaps.min)?;
            writeln!(out, "Largest gap: {}", gaps.max)?;
            writeln!(out, "Mean gap: {:.2}", gaps.mean)?;
        }
        Ok(())
    }
}
