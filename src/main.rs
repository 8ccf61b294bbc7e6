//! Headless driver: runs a universe for a number of generations, logging
//! population as it goes, then prints the final grid as text.

use anyhow::Context;
use life_engine::{Simulation, UniverseConfig, config::env_parse};
use log::info;

const GENERATIONS_VAR: &str = "LIFE_GENERATIONS";
const DEFAULT_GENERATIONS: u64 = 100;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = UniverseConfig::from_env();
    let generations = env_parse(GENERATIONS_VAR).unwrap_or(DEFAULT_GENERATIONS);

    let universe = config
        .build()
        .with_context(|| format!("building universe from {config:?}"))?;
    info!(
        "running {}x{} universe for {generations} generations ({:?})",
        universe.width(),
        universe.height(),
        universe.strategy()
    );

    let mut simulation = Simulation::new(universe);
    for _ in 0..generations {
        simulation.step();
        let universe = simulation.universe();
        info!(
            "generation {:>5}: population {:>6} ({:.3} ms)",
            universe.generation(),
            universe.population(),
            simulation.last_tick_ms
        );
    }

    print!("{}", simulation.universe());
    Ok(())
}
