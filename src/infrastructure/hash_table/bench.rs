use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Import the table variants from the crate
use hashbench::{HashTable, Record, TableKind};

// Test configuration
const TABLE_CAPACITY: usize = 10_000;
const RECORD_COUNT: usize = 7_000;

// Seeded so every run measures the same dataset
fn generate_records(count: usize) -> Vec<Record> {
    let mut rng = StdRng::seed_from_u64(12345);
    (0..count)
        .filter_map(|_| Record::from_index(rng.gen_range(0..1_000_000_000u64)).ok())
        .collect()
}

fn populated(kind: TableKind, records: &[Record]) -> Box<dyn HashTable + Send> {
    let mut table = kind.build(TABLE_CAPACITY).unwrap();
    for record in records {
        table.insert(record.clone());
    }
    table
}

// Benchmark filling an empty table with the whole dataset
pub fn bench_insertions(c: &mut Criterion) {
    let records = generate_records(RECORD_COUNT);

    let mut group = c.benchmark_group("Insert");

    for kind in TableKind::ALL {
        group.bench_function(kind.label(), |b| {
            b.iter_batched(
                || kind.build(TABLE_CAPACITY).unwrap(),
                |mut table| {
                    for record in &records {
                        black_box(table.insert(record.clone()));
                    }
                    table
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// Benchmark looking up every record of a populated table
pub fn bench_searches(c: &mut Criterion) {
    let records = generate_records(RECORD_COUNT);

    let mut group = c.benchmark_group("Search");

    for kind in TableKind::ALL {
        let table = populated(kind, &records);
        group.bench_function(kind.label(), |b| {
            b.iter(|| {
                for record in &records {
                    black_box(table.search(black_box(record)));
                }
            });
        });
    }

    group.finish();
}

// Benchmark the positional statistics scan
pub fn bench_gap_statistics(c: &mut Criterion) {
    let records = generate_records(RECORD_COUNT);

    let mut group = c.benchmark_group("GapStatistics");

    for kind in TableKind::ALL {
        let table = populated(kind, &records);
        group.bench_function(kind.label(), |b| b.iter(|| black_box(table.gap_statistics())));
    }

    group.finish();
}

criterion_group!(benches, bench_insertions, bench_searches, bench_gap_statistics);
criterion_main!(benches);
