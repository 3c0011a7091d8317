//! Metrics collected for one table run

use std::fmt;
use std::time::Duration;

use hashbench::{GapStats, HashTable, TableKind};
use serde::Serialize;

/// Measurements of one table filled with one dataset
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentResult {
    pub kind: TableKind,
    pub table_size: usize,
    pub dataset_size: usize,
    pub insert_ms: f64,
    pub search_ms: f64,
    pub collisions: u64,
    pub load_factor: f64,
    pub largest_bucket: usize,
    pub top_three_buckets: Vec<usize>,
    pub gaps: GapStats,
    pub longest_cluster: usize,
    /// Inserts refused because the probe budget ran out
    pub rejected: usize,
    /// Searches that found their record
    pub found: usize,
    /// Human-readable dump from the table
    #[serde(skip)]
    pub diagnostics: String,
}

impl ExperimentResult {
    /// Snapshot the read-only accessors of a populated table
    pub fn collect(
        table: &dyn HashTable,
        dataset_size: usize,
        insert_time: Duration,
        search_time: Duration,
        rejected: usize,
        found: usize,
    ) -> Self {
        let mut diagnostics = Vec::new();
        if let Err(err) = table.write_diagnostics(&mut diagnostics) {
            log::warn!("Failed to capture {} diagnostics: {}", table.name(), err);
        }

        ExperimentResult {
            kind: table.kind(),
            table_size: table.capacity(),
            dataset_size,
            insert_ms: insert_time.as_secs_f64() * 1000.0,
            search_ms: search_time.as_secs_f64() * 1000.0,
            collisions: table.collision_count(),
            load_factor: table.load_factor(),
            largest_bucket: table.largest_bucket(),
            top_three_buckets: table.top_three_buckets(),
            gaps: table.gap_statistics(),
            longest_cluster: table.longest_cluster(),
            rejected,
            found,
            diagnostics: String::from_utf8_lossy(&diagnostics).into_owned(),
        }
    }

    pub fn csv_header() -> &'static str {
        "Kind,TableSize,DatasetSize,InsertMs,SearchMs,Collisions,LoadFactor,LargestBucket,\
         SmallestGap,LargestGap,MeanGap,LongestCluster,Rejected,TopThreeBuckets"
    }

    pub fn to_csv(&self) -> String {
        let top_three: Vec<String> = self
            .top_three_buckets
            .iter()
            .map(usize::to_string)
            .collect();

        format!(
            "{},{},{},{:.3},{:.3},{},{:.4},{},{},{},{:.2},{},{},\"{}\"",
            self.kind,
            self.table_size,
            self.dataset_size,
            self.insert_ms,
            self.search_ms,
            self.collisions,
            self.load_factor,
            self.largest_bucket,
            self.gaps.min,
            self.gaps.max,
            self.gaps.mean,
            self.longest_cluster,
            self.rejected,
            top_three.join("; ")
        )
    }
}

impl fmt::Display for ExperimentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Kind: {} | Table: {} | Dataset: {} | Insert: {:.2}ms | Search: {:.2}ms | \
             Collisions: {} | Load factor: {:.4}",
            self.kind,
            self.table_size,
            self.dataset_size,
            self.insert_ms,
            self.search_ms,
            self.collisions,
            self.load_factor
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbench::{ChainingTable, Record};

    fn sample() -> ExperimentResult {
        let mut table = ChainingTable::new(4).unwrap();
        for code in ["000000001", "000000005", "000000003"] {
            table.insert(Record::new(code).unwrap());
        }
        ExperimentResult::collect(
            &table,
            3,
            Duration::from_millis(12),
            Duration::from_micros(2500),
            0,
            3,
        )
    }

    #[test]
    fn test_collect_reads_table_accessors() {
        let result = sample();
        assert_eq!(result.kind, TableKind::Chaining);
        assert_eq!(result.table_size, 4);
        // Codes 1 and 5 share bucket 1
        assert_eq!(result.collisions, 1);
        assert_eq!(result.largest_bucket, 2);
        assert_eq!(result.top_three_buckets, vec![2, 1]);
        assert_eq!(result.load_factor, 0.75);
        assert!(result.diagnostics.contains("Chaining statistics"));
    }

    #[test]
    fn test_csv_line_matches_header() {
        let result = sample();
        let line = result.to_csv();
        assert!(line.starts_with("Chaining,4,3,12.000,2.500,1,0.7500,2,"));
        assert!(line.ends_with(",\"2; 1\""));
        assert_eq!(
            ExperimentResult::csv_header().split(',').count(),
            line.split(',').count()
        );
    }

    #[test]
    fn test_json_skips_diagnostics() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"kind\":\"Chaining\""));
        assert!(!json.contains("diagnostics"));
    }
}
