// Slot array and probe loop shared by the open-addressing tables

use std::io::{self, Write};

use crate::record::Record;

use super::stats::{gap_statistics, longest_run, GapStats};
use super::InsertOutcome;

/// State of a single open-addressing slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Slot {
    /// Never written
    #[default]
    Empty,
    /// Holds a record
    Occupied(Record),
    /// Deleted placeholder
    ///
    /// Nothing in this crate removes records, so no slot ever reaches this
    /// state. Insertion still reuses it and search still probes past it.
    Tombstone,
}

impl Slot {
    /// Check whether the slot holds a record
    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }
}

/// Fixed-capacity slot array with collision accounting
///
/// The probe function maps an attempt number (0 for the primary slot) to a
/// slot index. Every variant supplies its own.
#[derive(Debug, Clone)]
pub(crate) struct SlotArray {
    slots: Vec<Slot>,
    size: usize,
    collisions: u64,
}

impl SlotArray {
    /// Create an array of `capacity` empty slots
    pub(crate) fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, Slot::default);
        SlotArray {
            slots,
            size: 0,
            collisions: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn collisions(&self) -> u64 {
        self.collisions
    }

    #[cfg(test)]
    pub(crate) fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[cfg(test)]
    pub(crate) fn slots_mut(&mut self) -> &mut [Slot] {
        &mut self.slots
    }

    /// Insert a record following the given probe sequence
    ///
    /// Tries at most `capacity` slots. Each occupied slot holding a different
    /// record counts as one collision.
    pub(crate) fn insert_with<F>(&mut self, record: Record, probe: F) -> InsertOutcome
    where
        F: Fn(usize) -> usize,
    {
        let capacity = self.capacity();

        for attempt in 0..capacity {
            let index = probe(attempt);
            match &self.slots[index] {
                Slot::Empty | Slot::Tombstone => {}
                Slot::Occupied(existing) if *existing == record => {
                    return InsertOutcome::AlreadyPresent;
                }
                Slot::Occupied(_) => {
                    self.collisions += 1;
                    continue;
                }
            }

            self.slots[index] = Slot::Occupied(record);
            self.size += 1;
            return InsertOutcome::Inserted;
        }

        InsertOutcome::Rejected { attempts: capacity }
    }

    /// Look up a record following the given probe sequence
    ///
    /// An empty slot ends the search; a tombstone does not.
    pub(crate) fn search_with<F>(&self, record: &Record, probe: F) -> bool
    where
        F: Fn(usize) -> usize,
    {
        for attempt in 0..self.capacity() {
            match &self.slots[probe(attempt)] {
                Slot::Empty => return false,
                Slot::Tombstone => {}
                Slot::Occupied(existing) => {
                    if existing == record {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Indices of occupied slots in ascending order
    pub(crate) fn occupied_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_occupied())
            .map(|(index, _)| index)
    }

    pub(crate) fn gap_statistics(&self) -> GapStats {
        gap_statistics(self.occupied_indices())
    }

    pub(crate) fn longest_cluster(&self) -> usize {
        longest_run(self.slots.iter().map(Slot::is_occupied))
    }

    /// Write the statistics common to every open-addressing variant
    pub(crate) fn write_summary(&self, title: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "** {} statistics **", title)?;
        writeln!(
            out,
            "Load factor: {:.4}",
            self.size as f64 / self.capacity() as f64
        )?;
        writeln!(out, "Collisions: {}", self.collisions)?;
        writeln!(out, "Longest cluster: {}", self.longest_cluster())?;

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
