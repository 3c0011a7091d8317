//! Report generation: CSV, detailed text, comparative analysis and JSON

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use hashbench::TableKind;
use serde::Serialize;

use crate::error::BenchResult;
use crate::metrics::ExperimentResult;

pub const CSV_FILE: &str = "resultados_completos.csv";
pub const DETAILED_FILE: &str = "relatorio_detalhado.txt";
pub const COMPARATIVE_FILE: &str = "analise_comparativa.txt";
pub const JSON_FILE: &str = "resultados.json";

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    seed: u64,
    results: &'a [ExperimentResult],
}

/// Write every report into `dir`, returning the files written
pub fn write_all(dir: &Path, results: &[ExperimentResult], seed: u64) -> BenchResult<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let paths = vec![
        write_csv(&dir.join(CSV_FILE), results)?,
        write_detailed(&dir.join(DETAILED_FILE), results)?,
        write_comparative(&dir.join(COMPARATIVE_FILE), results)?,
        write_json(&dir.join(JSON_FILE), results, seed)?,
    ];

    for path in &paths {
        log::info!("Report written: {}", path.display());
    }
    Ok(paths)
}

pub fn write_csv(path: &Path, results: &[ExperimentResult]) -> BenchResult<PathBuf> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", ExperimentResult::csv_header())?;
    for result in results {
        writeln!(writer, "{}", result.to_csv())?;
    }
    writer.flush()?;
    Ok(path.to_path_buf())
}

pub fn write_detailed(path: &Path, results: &[ExperimentResult]) -> BenchResult<PathBuf> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "DETAILED REPORT - HASH TABLE EXPERIMENTS")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;

    for result in results {
        let top_three: Vec<String> = result
            .top_three_buckets
            .iter()
            .map(usize::to_string)
            .collect();

        writeln!(writer, "{}", result)?;
        writeln!(writer, "Largest bucket: {}", result.largest_bucket)?;
        writeln!(writer, "Longest cluster: {}", result.longest_cluster)?;
        writeln!(
            writer,
            "Gaps - Smallest: {}, Largest: {}, Mean: {:.2}",
            result.gaps.min, result.gaps.max, result.gaps.mean
        )?;
        writeln!(writer, "Three largest buckets: [{}]", top_three.join(", "))?;
        writeln!(writer, "Rejected inserts: {}", result.rejected)?;
        writeln!(writer, "{}", "-".repeat(60))?;
    }

    writer.flush()?;
    Ok(path.to_path_buf())
}

pub fn write_comparative(path: &Path, results: &[ExperimentResult]) -> BenchResult<PathBuf> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "COMPARATIVE ANALYSIS - HASH TABLE PERFORMANCE")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    writeln!(writer, "HASH FUNCTIONS:")?;
    writeln!(writer, "- Chaining: multiplication by the prime 37")?;
    writeln!(writer, "- Linear Probing: Knuth multiplicative (golden ratio)")?;
    writeln!(writer, "- Quadratic Probing: Horner polynomial with prime 31")?;
    writeln!(writer, "- Double Hashing: digit sum, stepped by Horner with prime 7")?;
    writeln!(writer)?;

    let mut by_kind: BTreeMap<TableKind, Vec<&ExperimentResult>> = BTreeMap::new();
    for result in results {
        by_kind.entry(result.kind).or_default().push(result);
    }

    for (kind, mut group) in by_kind {
        group.sort_by_key(|r| (r.table_size, r.dataset_size));

        writeln!(writer, "{}:", kind.label().to_uppercase())?;
        writeln!(writer, "{}", "-".repeat(40))?;
        for r in group {
            writeln!(
                writer,
                "  Table {:>6} | Dataset {:>8} | Ins: {:>9.2}ms | Search: {:>9.2}ms | Collisions: {:>12} | Load: {:.2}",
                r.table_size, r.dataset_size, r.insert_ms, r.search_ms, r.collisions, r.load_factor
            )?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "DETAILED ANALYSIS:")?;
    writeln!(writer, "{}", "-".repeat(40))?;

    let best_insert = results
        .iter()
        .min_by(|a, b| a.insert_ms.total_cmp(&b.insert_ms));
    let best_search = results
        .iter()
        .min_by(|a, b| a.search_ms.total_cmp(&b.search_ms));
    let fewest_collisions = results.iter().min_by_key(|r| r.collisions);

    if let Some(r) = best_insert {
        writeln!(writer, "Best insert: {} ({:.2}ms)", r.kind, r.insert_ms)?;
    }
    if let Some(r) = best_search {
        writeln!(writer, "Best search: {} ({:.2}ms)", r.kind, r.search_ms)?;
    }
    if let Some(r) = fewest_collisions {
        writeln!(writer, "Fewest collisions: {} ({} collisions)", r.kind, r.collisions)?;
    }
    writeln!(writer)?;

    write_conclusions(&mut writer)?;
    writer.flush()?;
    Ok(path.to_path_buf())
}

// Fixed guidance closing the comparative analysis
fn write_conclusions(writer: &mut impl Write) -> std::io::Result<()> {
    const CONCLUSIONS: &[&str] = &[
        "1. Chaining: best for high load factors (> 1.0)",
        "   - Never rejects an insert",
        "   - Cost grows linearly with the load factor",
        "",
        "2. Linear Probing: simple but suffers primary clustering",
        "   - Good cache locality",
        "   - Degrades quickly at high load",
        "",
        "3. Quadratic Probing: avoids primary clustering",
        "   - Better than linear at moderate load",
        "   - May suffer secondary clustering",
        "",
        "4. Double Hashing: best statistical distribution",
        "   - Fewer collisions than the other open-addressing variants",
        "   - Most uniform spread",
        "",
        "5. Recommended load factor:",
        "   - Open addressing: 0.5 - 0.75 (best: 0.65)",
        "   - Chaining: 1.0 - 3.0 (best: 1.0 - 2.0)",
        "",
        "6. Choosing a strategy:",
        "   - Chaining if load > 0.75 or inserts are frequent",
        "   - Double hashing if load <= 0.75 and search is critical",
        "   - Linear probing if simplicity matters most",
    ];

    writeln!(writer, "CONCLUSIONS:")?;
    writeln!(writer, "{}", "-".repeat(40))?;
    for line in CONCLUSIONS {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

pub fn write_json(path: &Path, results: &[ExperimentResult], seed: u64) -> BenchResult<PathBuf> {
    let report = JsonReport {
        generated_at: Local::now().to_rfc3339(),
        seed,
        results,
    };

    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(path.to_path_buf())
}
