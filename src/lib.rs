// Domain layer - Core simulation engine
pub mod domain;

// Application layer - Frame-loop coordination
pub mod application;

pub mod config;
pub mod error;

// Re-exports for convenience
pub use domain::{Cell, Universe, Fill, CellsView, ViewHandle, Strategy, Pattern, presets};
pub use domain::{Rule, ConwayRule, ThresholdRule};
pub use application::Simulation;
pub use config::UniverseConfig;
pub use error::UniverseError;
