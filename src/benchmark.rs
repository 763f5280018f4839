use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;
use sort_trace::request::{random_array, MAX_ARRAY_SIZE, MIN_ARRAY_SIZE};
use sort_trace::{Algorithm, SortDirection};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct BenchmarkResult {
    name: String,
    ops_per_second: f64,
    avg_ns: f64,
    avg_steps: f64,
    correct: bool,
}

#[derive(Serialize)]
struct FullResults {
    results: Vec<BenchmarkResult>,
    correctness: bool,
}

const WARMUP_ITERATIONS: usize = 10;
const BENCH_ITERATIONS: usize = 200;
const DIRECTIONS: [SortDirection; 2] = [SortDirection::Ascending, SortDirection::Descending];

// Beyond what the request layer accepts, to show how the quadratic traces grow
const LARGE_ARRAY_SIZE: usize = 1000;
const LARGE_ARRAYS: usize = 4;

fn generate_test_data(seeds: &[u64]) -> Vec<Vec<i64>> {
    let mut tests = Vec::new();

    for (n, &seed) in seeds.iter().enumerate() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let size = MIN_ARRAY_SIZE + n % (MAX_ARRAY_SIZE - MIN_ARRAY_SIZE + 1);
        tests.push(random_array(&mut rng, size));
    }

    for &seed in seeds.iter().take(LARGE_ARRAYS) {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed ^ 0xdead_beef);
        tests.push(random_array(&mut rng, LARGE_ARRAY_SIZE));
    }

    // Best and worst cases for the quadratic sorters
    tests.push((1..=MAX_ARRAY_SIZE as i64).collect());
    tests.push((1..=MAX_ARRAY_SIZE as i64).rev().collect());
    tests.push(vec![42; MAX_ARRAY_SIZE]);

    tests
}

fn verify_correctness(algorithm: Algorithm, tests: &[Vec<i64>]) -> bool {
    for test in tests {
        for direction in DIRECTIONS {
            let log = algorithm.sort(test, direction);
            if !direction.is_sorted(&log.replay(test)) {
                return false;
            }
        }
    }
    true
}

fn benchmark(algorithm: Algorithm, tests: &[Vec<i64>]) -> BenchmarkResult {
    let correct = verify_correctness(algorithm, tests);

    if !correct {
        return BenchmarkResult {
            name: algorithm.name().to_string(),
            ops_per_second: 0.0,
            avg_ns: f64::INFINITY,
            avg_steps: 0.0,
            correct: false,
        };
    }

    // Warmup
    for test in tests.iter().take(WARMUP_ITERATIONS) {
        std::hint::black_box(algorithm.sort(test, SortDirection::Ascending));
    }

    let mut total_time = Duration::ZERO;
    let mut total_steps = 0usize;
    let mut iterations = 0usize;

    for (test, direction) in tests
        .iter()
        .cycle()
        .zip(DIRECTIONS.iter().cycle())
        .take(BENCH_ITERATIONS)
    {
        let start = Instant::now();
        let log = algorithm.sort(test, *direction);
        total_time += start.elapsed();
        total_steps += log.total_steps();
        iterations += 1;
    }

    let avg_ns = total_time.as_nanos() as f64 / iterations as f64;

    BenchmarkResult {
        name: algorithm.name().to_string(),
        ops_per_second: 1_000_000_000.0 / avg_ns,
        avg_ns,
        avg_steps: total_steps as f64 / iterations as f64,
        correct,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Seeds for reproducible benchmarks
    let seeds: Vec<u64> = (0..96).map(|i| 12345 + i * 7).collect();
    let tests = generate_test_data(&seeds);

    eprintln!("Sort Trace Benchmark");
    eprintln!("====================");
    let count = tests.len();
    eprintln!("{count} arrays, {BENCH_ITERATIONS} timed traces per algorithm\n");

    let mut results = Vec::new();
    let mut all_correct = true;

    for algorithm in Algorithm::ALL {
        let result = benchmark(algorithm, &tests);
        eprintln!(
            "{:<10} {:>12.0} ops/s {:>10.0} ns {:>8.1} steps {}",
            result.name,
            result.ops_per_second,
            result.avg_ns,
            result.avg_steps,
            if result.correct { "ok" } else { "WRONG" }
        );
        all_correct &= result.correct;
        results.push(result);
    }

    let full_results = FullResults {
        results,
        correctness: all_correct,
    };

    println!("{}", serde_json::to_string(&full_results)?);
    Ok(())
}
