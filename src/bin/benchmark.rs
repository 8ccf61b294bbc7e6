//! Tick throughput for each strategy across grid sizes

use std::time::Instant;
use life_engine::{Fill, Strategy, Universe};

fn benchmark(size: usize, strategy: Strategy, iterations: u32) -> anyhow::Result<f64> {
    let mut universe = Universe::with_fill(size, size, Fill::Seeded { density: 0.3, seed: 1 })?
        .with_strategy(strategy);

    let start = Instant::now();
    for _ in 0..iterations {
        universe.tick();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    println!("=== Universe Tick Benchmark ===\n");

    let sizes = [64, 128, 256, 512, 1024, 2048];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Auto", "Speedup");
    println!("{:-<60}", "");

    for size in sizes {
        let serial_ms = benchmark(size, Strategy::Serial, iterations)?;
        let parallel_ms = benchmark(size, Strategy::Parallel, iterations)?;
        let auto_ms = benchmark(size, Strategy::Auto, iterations)?;

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{size}x{size}"),
            serial_ms,
            parallel_ms,
            auto_ms,
            serial_ms / parallel_ms
        );
    }

    let size = 2048;
    let cells = (size * size) as f64;
    let fastest = benchmark(size, Strategy::Parallel, iterations)?;
    println!("\n=== Throughput at {size}x{size} ===\n");
    println!("Parallel: {:.2} ms/gen, {:.1}M cells/sec", fastest, cells / (fastest / 1000.0) / 1_000_000.0);
    Ok(())
}
