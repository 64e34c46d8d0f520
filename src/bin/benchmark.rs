//! Generation throughput of the bordered grid on seeded random fills

use std::time::Instant;
use bordered_life::Grid;

const DENSITY: f64 = 0.3;
const SEED: u64 = 0x5eed;

fn benchmark_update(size: usize, iterations: u32) -> (f64, usize) {
    let mut grid = Grid::random(size, size, DENSITY, SEED);

    let start = Instant::now();
    for _ in 0..iterations {
        grid.update();
    }
    let ms_per_gen = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    (ms_per_gen, grid.population())
}

fn main() {
    println!("=== Bordered Grid Update Benchmark ===\n");

    let sizes = [10, 50, 100, 200, 500];
    let iterations = 20;

    println!("{:>10} {:>12} {:>14} {:>12}", "Size", "ms/gen", "Mcells/sec", "Alive");
    println!("{:-<52}", "");

    for size in sizes {
        let (ms, alive) = benchmark_update(size, iterations);
        let cells = (size * size) as f64;
        println!(
            "{:>10} {:>12.3} {:>14.1} {:>12}",
            format!("{}x{}", size, size),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0,
            alive
        );
    }

    println!("\n=== Memory (500x500 interior) ===\n");
    let size = 500;
    let padded = (size + 2) * (size + 2);
    println!("Cells incl. border: {:>10}", padded);
    println!("Border overhead:    {:>9.2}%", (padded - size * size) as f64 / padded as f64 * 100.0);
}
