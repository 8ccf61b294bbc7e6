use log::{debug, warn};

use crate::domain::{Fill, ThresholdRule, Universe};
use crate::error::Result;

pub const MIN_UPDATES_PER_SECOND: f32 = 1.0;
pub const MAX_UPDATES_PER_SECOND: f32 = 60.0;

/// Simulation coordinates a universe with the per-frame inputs of an
/// external frame loop: slider thresholds, run/pause and clicks.
/// The caller renders from `universe().cells_view()` after each `advance`.
pub struct Simulation {
    universe: Universe,
    rule: ThresholdRule,
    pub is_running: bool,
    pub updates_per_second: f32,
    pub update_timer: f32,
    /// Duration of the most recent tick
    pub last_tick_ms: f32,
}

impl Simulation {
    pub fn new(universe: Universe) -> Self {
        Self {
            universe,
            rule: ThresholdRule::CLASSIC,
            is_running: true,
            updates_per_second: MAX_UPDATES_PER_SECOND,
            update_timer: 0.0,
            last_tick_ms: 0.0,
        }
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn rule(&self) -> ThresholdRule {
        self.rule
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
    }

    /// Take new slider values, pulled into `[1, 8]`
    pub fn set_thresholds(&mut self, birth: u8, survival_min: u8, survival_max: u8) {
        let rule = ThresholdRule::new(birth, survival_min, survival_max).clamped();
        if !rule.survival_is_satisfiable() {
            warn!(
                "survival range {}..={} is empty, live cells will all die",
                rule.survival_min, rule.survival_max
            );
        }
        self.rule = rule;
    }

    /// Adjust simulation speed
    pub fn adjust_speed(&mut self, delta: f32) {
        self.updates_per_second = (self.updates_per_second + delta)
            .clamp(MIN_UPDATES_PER_SECOND, MAX_UPDATES_PER_SECOND);
    }

    /// Feed one frame's elapsed time; ticks at most once, and only while
    /// running. Returns whether a generation was computed.
    pub fn advance(&mut self, delta_seconds: f32) -> bool {
        if !self.is_running {
            return false;
        }

        self.update_timer += delta_seconds;
        if self.update_timer < 1.0 / self.updates_per_second {
            return false;
        }

        self.step();
        self.update_timer = 0.0;
        true
    }

    /// Tick once regardless of the running state or timer
    pub fn step(&mut self) {
        let start = std::time::Instant::now();
        self.universe.step(&self.rule);
        self.last_tick_ms = start.elapsed().as_secs_f32() * 1000.0;
    }

    /// Forward a click already converted to grid coordinates
    pub fn toggle_cell(&mut self, row: i64, col: i64) {
        self.universe.toggle_cell(row, col);
    }

    /// Randomize the current grid in place of the old one
    pub fn randomize(&mut self, fill: Fill) -> Result<()> {
        let (width, height) = (self.universe.width(), self.universe.height());
        self.universe.resize(width, height, fill)
    }

    pub fn clear(&mut self) {
        self.universe.clear();
        self.is_running = false;
    }

    /// Swap in a freshly sized universe and pause
    pub fn resize(&mut self, width: usize, height: usize, fill: Fill) -> Result<()> {
        self.universe.resize(width, height, fill)?;
        self.is_running = false;
        self.update_timer = 0.0;
        debug!("simulation resized to {width}x{height}");
        Ok(())
    }
}
