//! Timing harness comparing serial and parallel stepping

use conway_life::Grid;
use rand::{SeedableRng, rngs::StdRng};
use std::time::Instant;

fn random_grid(size: usize) -> Grid {
    Grid::new(size, size).randomize_with(&mut StdRng::seed_from_u64(42))
}

fn bench_serial(size: usize, iterations: u32) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn bench_parallel(size: usize, iterations: u32) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.step_parallel();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [50, 100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = bench_serial(size, iterations);
        let parallel_ms = bench_parallel(size, iterations);

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Throughput at 2000x2000 ===\n");

    let size = 2000;
    let cells = (size * size) as f64;
    let parallel_ms = bench_parallel(size, iterations);

    println!(
        "Parallel: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        cells / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
