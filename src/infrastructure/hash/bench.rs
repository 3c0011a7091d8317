use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

// Reference the main crate
extern crate hashbench;

// Import the hash functions from the main crate
use hashbench::infrastructure::hash::{
    chaining_hash, digit_sum_hash, double_hash_step, horner31_hash, horner7_hash, knuth_hash,
};

// Generate a batch of random zero-padded 9-digit codes
fn generate_codes(count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| format!("{:09}", rng.gen_range(0..1_000_000_000u32)))
        .collect()
}

// Benchmark each hash function over the same batch of codes
pub fn bench_code_hashes(c: &mut Criterion) {
    let codes = generate_codes(1000);

    let mut group = c.benchmark_group("CodeHashes");

    group.bench_function("chaining_hash", |b: &mut criterion::Bencher| {
        b.iter(|| {
            for code in &codes {
                black_box(chaining_hash(black_box(code)));
            }
        })
    });
    group.bench_function("knuth_hash", |b: &mut criterion::Bencher| {
        b.iter(|| {
            for code in &codes {
                black_box(knuth_hash(black_box(code)));
            }
        })
    });
    group.bench_function("horner31_hash", |b: &mut criterion::Bencher| {
        b.iter(|| {
            for code in &codes {
                black_box(horner31_hash(black_box(code)));
            }
        })
    });
    group.bench_function("digit_sum_hash", |b: &mut criterion::Bencher| {
        b.iter(|| {
            for code in &codes {
                black_box(digit_sum_hash(black_box(code)));
            }
        })
    });
    group.bench_function("horner7_hash", |b: &mut criterion::Bencher| {
        b.iter(|| {
            for code in &codes {
                black_box(horner7_hash(black_box(code)));
            }
        })
    });

    group.finish();
}

// Benchmark the double hashing step derivation, which adds a modulo on top of horner7
pub fn bench_double_hash_step(c: &mut Criterion) {
    let codes = generate_codes(1000);

    let mut group = c.benchmark_group("DoubleHashStep");

    for capacity in [1_000usize, 100_000] {
        group.bench_function(format!("capacity_{}", capacity), |b: &mut criterion::Bencher| {
            b.iter(|| {
                for code in &codes {
                    black_box(double_hash_step(black_box(code), capacity));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_code_hashes, bench_double_hash_step);
criterion_main!(benches);
