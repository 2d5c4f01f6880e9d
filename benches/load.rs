use std::fmt::Write;
use std::hint::black_box;
use criterion::{criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use speedup::{Layout, Results};

const VERSIONS: [(&str, &str); 12] = [
    ("version1_parallel_for", "ptr"),
    ("version2_sections",     "ptr"),
    ("version3_combined",     "ptr"),
    ("version1_optimized",    "flat"),
    ("version2_optimized",    "flat"),
    ("version3_optimized",    "flat"),
    ("novel_simd_avx2",       "novel"),
    ("novel_omp_simd",        "novel"),
    ("novel_tiled",           "novel"),
    ("novel_tasks",           "novel"),
    ("novel_branchless",      "novel"),
    ("novel_ultimate",        "novel"),
];

/// `repeats` timed runs per (version, thread count).
fn synthetic_csv(repeats: usize) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    let mut csv = String::from("version,threads,time_seconds,baseline\n");
    writeln!(csv, "sequential,1,0.494,ptr").unwrap();
    writeln!(csv, "sequential_flat,1,0.678,flat").unwrap();
    for _ in 0..repeats {
        for (version, baseline) in VERSIONS {
            for threads in [16, 8, 4, 2] {
                let time = 0.7 / threads as f64 * rng.gen_range(0.9..1.6);
                writeln!(csv, "{version},{threads},{time:.6},{baseline}").unwrap();
            }
        }
    }
    csv
}

fn criterion_benchmark(c: &mut Criterion) {
    let layout = Layout::standard();

    for repeats in [1, 100] {
        let csv = synthetic_csv(repeats);
        c.bench_function(&format!("load x{repeats}"), |b| b.iter(|| {
            Results::from_reader(black_box(csv.as_bytes())).unwrap()
        }));

        let results = Results::from_reader(csv.as_bytes()).unwrap();
        c.bench_function(&format!("plot x{repeats}"), |b| b.iter(|| {
            for group in &layout.scaling {
                black_box(group.plot(&results).unwrap());
            }
            black_box(layout.time.plot(&results));
        }));
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
