//! Construction settings for a universe.

use std::env;

use log::warn;

use crate::domain::{Fill, Strategy, Universe, DEFAULT_DENSITY, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniverseConfig {
    pub width: usize,
    pub height: usize,
    pub fill: Fill,
    pub strategy: Strategy,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fill: Fill::Random { density: DEFAULT_DENSITY },
            strategy: Strategy::default(),
        }
    }
}

impl UniverseConfig {
    pub const WIDTH_VAR: &'static str = "LIFE_WIDTH";
    pub const HEIGHT_VAR: &'static str = "LIFE_HEIGHT";
    pub const SEED_VAR: &'static str = "LIFE_SEED";

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Defaults overridden by `LIFE_WIDTH`, `LIFE_HEIGHT` and `LIFE_SEED`.
    /// Unparsable values are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(width) = env_parse(Self::WIDTH_VAR) {
            config.width = width;
        }
        if let Some(height) = env_parse(Self::HEIGHT_VAR) {
            config.height = height;
        }
        if let Some(seed) = env_parse(Self::SEED_VAR) {
            config.fill = Fill::Seeded { density: DEFAULT_DENSITY, seed };
        }
        config
    }

    /// Validate and construct
    pub fn build(&self) -> Result<Universe> {
        Ok(Universe::with_fill(self.width, self.height, self.fill)?.with_strategy(self.strategy))
    }
}

/// Read and parse one environment variable
pub fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring {name}={raw:?}: not a valid value");
            None
        }
    }
}
