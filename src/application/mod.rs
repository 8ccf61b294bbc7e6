mod simulation;

pub use simulation::{Simulation, MIN_UPDATES_PER_SECOND, MAX_UPDATES_PER_SECOND};
