//! Benchmark scenarios module
//!
//! A scenario pairs one table size with one dataset size and lists the table
//! variants worth running on it. Each variant gets a fresh table; the table
//! itself is always driven by a single thread.

use std::time::Instant;

use hashbench::{HashTable, InsertOutcome, Record, TableKind};
use rayon::prelude::*;

use crate::error::BenchResult;
use crate::metrics::ExperimentResult;

/// One table size combined with one dataset size
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub table_size: usize,
    pub dataset_size: usize,
    pub kinds: Vec<TableKind>,
}

impl Scenario {
    /// Expected load factor if every record were distinct
    pub fn nominal_load(&self) -> f64 {
        self.dataset_size as f64 / self.table_size as f64
    }

    /// Run every variant of this scenario over `records`
    pub fn run(&self, records: &[Record], parallel: bool) -> BenchResult<Vec<ExperimentResult>> {
        if parallel {
            self.kinds
                .par_iter()
                .map(|kind| run_table(*kind, self.table_size, records))
                .collect()
        } else {
            self.kinds
                .iter()
                .map(|kind| run_table(*kind, self.table_size, records))
                .collect()
        }
    }
}

/// Build the scenario grid
///
/// Chaining always runs. Open-addressing variants only run while the nominal
/// load stays at or below `max_open_load`.
pub fn plan(table_sizes: &[usize], dataset_sizes: &[usize], max_open_load: f64) -> Vec<Scenario> {
    let mut scenarios = Vec::with_capacity(table_sizes.len() * dataset_sizes.len());

    for &table_size in table_sizes {
        for &dataset_size in dataset_sizes {
            let load = dataset_size as f64 / table_size as f64;
            let kinds = TableKind::ALL
                .into_iter()
                .filter(|kind| !kind.is_open_addressing() || load <= max_open_load)
                .collect();

            scenarios.push(Scenario {
                table_size,
                dataset_size,
                kinds,
            });
        }
    }

    scenarios
}

/// Insert then search every record in a fresh table of `kind`
pub fn run_table(kind: TableKind, table_size: usize, records: &[Record]) -> BenchResult<ExperimentResult> {
    let mut table = kind.build(table_size)?;
    log::info!("Testing {} (table {}, dataset {})", kind, table_size, records.len());

    let start = Instant::now();
    let mut rejected = 0;
    for record in records {
        if let InsertOutcome::Rejected { .. } = table.insert(record.clone()) {
            rejected += 1;
        }
    }
    let insert_time = start.elapsed();

    let start = Instant::now();
    let found = records.iter().filter(|record| table.search(record)).count();
    let search_time = start.elapsed();

    if rejected > 0 {
        log::warn!("{}: {} inserts rejected", kind, rejected);
    }

    Ok(ExperimentResult::collect(
        table.as_ref(),
        records.len(),
        insert_time,
        search_time,
        rejected,
        found,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(count: u64) -> Vec<Record> {
        (0..count)
            .map(|n| Record::from_index(n * 9_973).unwrap())
            .collect()
    }

    #[test]
    fn test_plan_skips_open_addressing_above_threshold() {
        let scenarios = plan(&[1000, 10000], &[500, 100_000], 0.75);
        assert_eq!(scenarios.len(), 4);

        assert_eq!(scenarios[0].kinds, TableKind::ALL.to_vec());
        assert_eq!(scenarios[1].kinds, vec![TableKind::Chaining]);
        assert_eq!(scenarios[2].kinds, TableKind::ALL.to_vec());
        assert_eq!(scenarios[3].kinds, vec![TableKind::Chaining]);
        assert_eq!(scenarios[1].nominal_load(), 100.0);
    }

    #[test]
    fn test_plan_threshold_is_inclusive() {
        let scenarios = plan(&[100], &[75], 0.75);
        assert_eq!(scenarios[0].kinds.len(), 4);
    }

    #[test]
    fn test_run_table_counts_hits() {
        let data = records(300);
        for kind in TableKind::ALL {
            let result = run_table(kind, 1000, &data).unwrap();
            assert_eq!(result.kind, kind);
            assert_eq!(result.dataset_size, 300);
            assert_eq!(result.found + result.rejected, 300);
            assert!(result.load_factor <= 0.3);
        }
    }

    #[test]
    fn test_chaining_run_overloaded_table() {
        let data = records(500);
        let result = run_table(TableKind::Chaining, 10, &data).unwrap();
        assert_eq!(result.found, 500);
        assert_eq!(result.rejected, 0);
        assert_eq!(result.load_factor, 50.0);
        assert!(result.largest_bucket >= 50);
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let data = records(200);
        let scenario = plan(&[400], &[200], 0.75).remove(0);

        let sequential = scenario.run(&data, false).unwrap();
        let parallel = scenario.run(&data, true).unwrap();

        assert_eq!(sequential.len(), 4);
        for (a, b) in sequential.iter().zip(&parallel) {
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.collisions, b.collisions);
            assert_eq!(a.gaps, b.gaps);
        }
    }

    #[test]
    fn test_run_table_zero_capacity() {
        assert!(run_table(TableKind::LinearProbing, 0, &records(1)).is_err());
    }
}
