//! Hashbench benchmark driver
//!
//! Generates random datasets, fills every table variant with them, and
//! writes the measurements as CSV, text and JSON reports.

// Use jemalloc as global allocator
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;

mod dataset;
mod error;
mod metrics;
mod report;
mod scenarios;

use error::{BenchError, BenchResult};
use metrics::ExperimentResult;

#[derive(Parser, Debug, Clone)]
#[command(name = "hashbench-bench")]
#[command(about = "Collision-resolution benchmark for fixed-size hash tables")]
struct Args {
    /// Directory holding the dataset files
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Directory receiving the reports
    #[arg(short = 'o', long, default_value = "resultados")]
    output_dir: PathBuf,

    #[arg(short = 't', long, value_delimiter = ',', default_value = "1000,10000,100000")]
    table_sizes: Vec<usize>,

    #[arg(short = 'd', long, value_delimiter = ',', default_value = "100000,1000000,10000000")]
    dataset_sizes: Vec<usize>,

    #[arg(long, default_value = "12345")]
    seed: u64,

    /// Highest nominal load factor at which open-addressing tables still run
    #[arg(long, default_value = "0.75")]
    max_open_load: f64,

    /// Reuse dataset files already present in the data directory
    #[arg(long)]
    skip_generate: bool,

    /// Run the variants of each scenario on separate threads
    #[arg(long)]
    parallel: bool,
}

impl Args {
    fn validate(&self) -> BenchResult<()> {
        if self.table_sizes.iter().any(|&size| size == 0) {
            return Err(BenchError::InvalidArgument(
                "table sizes must be greater than zero".to_string(),
            ));
        }
        if self.max_open_load.is_nan() || self.max_open_load <= 0.0 {
            return Err(BenchError::InvalidArgument(format!(
                "max open load must be positive, got {}",
                self.max_open_load
            )));
        }
        Ok(())
    }
}

fn generate_datasets(args: &Args) -> BenchResult<()> {
    std::fs::create_dir_all(&args.data_dir)?;

    // One generator across all files, so the files differ from each other
    let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
    for &size in &args.dataset_sizes {
        let path = dataset::dataset_path(&args.data_dir, size);
        dataset::generate_dataset(&path, size, &mut rng)?;
    }
    Ok(())
}

fn print_result(result: &ExperimentResult) {
    println!();
    println!("--- {} ---", result.kind);
    println!("Insert time: {:.2}ms", result.insert_ms);
    println!("Search time: {:.2}ms", result.search_ms);
    println!("Collisions: {}", result.collisions);
    println!("Load factor: {:.4}", result.load_factor);
    print!("{}", result.diagnostics);
}

fn run(args: &Args) -> BenchResult<Vec<ExperimentResult>> {
    let mut results = Vec::new();

    for scenario in scenarios::plan(&args.table_sizes, &args.dataset_sizes, args.max_open_load) {
        println!();
        println!("{}", "=".repeat(70));
        println!(
            "** TEST: Table={}, Dataset={} (Load={:.2}) **",
            scenario.table_size,
            scenario.dataset_size,
            scenario.nominal_load()
        );

        let path = dataset::dataset_path(&args.data_dir, scenario.dataset_size);
        let records = dataset::load_dataset(&path)?;
        if records.is_empty() {
            log::warn!("No records loaded from {}", path.display());
            continue;
        }

        if scenario.kinds.len() < hashbench::TableKind::ALL.len() {
            log::info!(
                "Open addressing skipped: load factor {:.2} exceeds {:.2}, only chaining runs",
                scenario.nominal_load(),
                args.max_open_load
            );
        }

        for result in scenario.run(&records, args.parallel)? {
            print_result(&result);
            results.push(result);
        }
    }

    Ok(results)
}

fn main() -> ExitCode {
    hashbench::logger::initialize_logger();
    let args = Args::parse();

    println!("Hashbench Benchmark Tool");
    println!("========================");
    println!("Table sizes: {:?}", args.table_sizes);
    println!("Dataset sizes: {:?}", args.dataset_sizes);
    println!("Seed: {}", args.seed);
    println!();

    let outcome = args
        .validate()
        .and_then(|()| {
            if args.skip_generate {
                Ok(())
            } else {
                generate_datasets(&args)
            }
        })
        .and_then(|()| run(&args))
        .and_then(|results| report::write_all(&args.output_dir, &results, args.seed));

    match outcome {
        Ok(_) => {
            println!();
            println!("** EXPERIMENTS COMPLETE **");
            println!("Results exported to '{}'", args.output_dir.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["hashbench-bench"]);
        assert_eq!(args.table_sizes, vec![1000, 10000, 100000]);
        assert_eq!(args.dataset_sizes, vec![100000, 1000000, 10000000]);
        assert_eq!(args.seed, 12345);
        assert_eq!(args.max_open_load, 0.75);
        assert!(!args.parallel);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_args_reject_zero_table_size() {
        let args = Args::parse_from(["hashbench-bench", "--table-sizes", "0,10"]);
        assert!(matches!(args.validate(), Err(BenchError::InvalidArgument(_))));
    }

    #[test]
    fn test_end_to_end_small_run() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("data");
        let output_dir = dir.path().join("out");
        let args = Args::parse_from([
            "hashbench-bench",
            "--data-dir",
            data_dir.to_str().unwrap(),
            "--output-dir",
            output_dir.to_str().unwrap(),
            "--table-sizes",
            "100,2000",
            "--dataset-sizes",
            "1000",
        ]);

        generate_datasets(&args).unwrap();
        let results = run(&args).unwrap();

        // Load 10 runs chaining only; load 0.5 runs all four variants
        assert_eq!(results.len(), 5);
        assert!(results.iter().all(|r| r.dataset_size == 1000));

        report::write_all(&args.output_dir, &results, args.seed).unwrap();
        assert!(output_dir.join(report::CSV_FILE).exists());
    }

    #[test]
    fn test_dataset_sizes_sharing_thousands_stay_separate() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("data");
        let args = Args::parse_from([
            "hashbench-bench",
            "--data-dir",
            data_dir.to_str().unwrap(),
            "--table-sizes",
            "1000",
            "--dataset-sizes",
            "500,800,1000,1500",
        ]);

        generate_datasets(&args).unwrap();
        for &size in &args.dataset_sizes {
            let records = dataset::load_dataset(&dataset::dataset_path(&data_dir, size)).unwrap();
            assert_eq!(records.len(), size);
        }

        let results = run(&args).unwrap();
        // Loads 0.5 and 0.8: all four variants, then chaining only
        for (size, expected) in [(500, 4), (800, 1), (1000, 1), (1500, 1)] {
            let runs = results.iter().filter(|r| r.dataset_size == size).count();
            assert_eq!(runs, expected, "dataset of {} records", size);
        }
    }
}
