//! Dataset files: one zero-padded 9-digit code per line

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use hashbench::record::CODE_SPACE;
use hashbench::Record;
use rand::Rng;

use crate::error::{BenchError, BenchResult};

/// Path of the dataset file holding `count` codes
///
/// Whole thousands use a `k` suffix; any other count is spelled out, so
/// every distinct count maps to its own file.
pub fn dataset_path(dir: &Path, count: usize) -> PathBuf {
    if count > 0 && count % 1000 == 0 {
        dir.join(format!("dataset_{}k.txt", count / 1000))
    } else {
        dir.join(format!("dataset_{}.txt", count))
    }
}

/// Write `count` random codes to `path`
pub fn generate_dataset<R: Rng>(path: &Path, count: usize, rng: &mut R) -> BenchResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for _ in 0..count {
        writeln!(writer, "{:09}", rng.gen_range(0..CODE_SPACE))?;
    }
    writer.flush()?;

    log::info!("Generated {} with {} records", path.display(), count);
    Ok(())
}

/// Read every record from `path`
///
/// Lines are trimmed; blank lines are skipped. The first invalid line aborts
/// the load with its 1-based line number.
pub fn load_dataset(path: &Path) -> BenchResult<Vec<Record>> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let code = line.trim();
        if code.is_empty() {
            continue;
        }

        let record = Record::new(code).map_err(|source| BenchError::InvalidRecord {
            path: path.to_path_buf(),
            line: index + 1,
            source,
        })?;
        records.push(record);
    }

    log::info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::fs;

    #[test]
    fn test_dataset_path() {
        assert_eq!(
            dataset_path(Path::new("data"), 100_000),
            PathBuf::from("data/dataset_100k.txt")
        );
        assert_eq!(
            dataset_path(Path::new("data"), 500),
            PathBuf::from("data/dataset_500.txt")
        );
        assert_eq!(
            dataset_path(Path::new("data"), 1500),
            PathBuf::from("data/dataset_1500.txt")
        );
    }

    #[test]
    fn test_dataset_path_distinct_per_count() {
        let dir = Path::new("data");
        let counts = [500, 800, 1000, 1500, 2000];
        let paths: std::collections::HashSet<PathBuf> =
            counts.iter().map(|&count| dataset_path(dir, count)).collect();
        assert_eq!(paths.len(), counts.len());
    }

    #[test]
    fn test_generate_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dataset_path(dir.path(), 2000);

        let mut rng = StdRng::seed_from_u64(12345);
        generate_dataset(&path, 2000, &mut rng).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2000);
        assert!(contents.lines().all(|line| line.len() == 9));

        let records = load_dataset(&path).unwrap();
        assert_eq!(records.len(), 2000);
    }

    #[test]
    fn test_generation_is_deterministic_per_seed() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");

        generate_dataset(&first, 100, &mut StdRng::seed_from_u64(7)).unwrap();
        generate_dataset(&second, 100, &mut StdRng::seed_from_u64(7)).unwrap();

        assert_eq!(
            fs::read_to_string(&first).unwrap(),
            fs::read_to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_load_trims_and_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codes.txt");
        fs::write(&path, "000000001\n  000000002  \n\n000000003\r\n").unwrap();

        let records = load_dataset(&path).unwrap();
        let codes: Vec<&str> = records.iter().map(Record::code).collect();
        assert_eq!(codes, vec!["000000001", "000000002", "000000003"]);
    }

    #[test]
    fn test_load_reports_bad_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "000000001\n12345\n").unwrap();

        match load_dataset(&path) {
            Err(BenchError::InvalidRecord { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_dataset(&dir.path().join("missing.txt"));
        assert!(matches!(result, Err(BenchError::IoError(_))));
    }
}
