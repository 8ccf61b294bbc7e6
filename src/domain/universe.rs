use std::fmt;

use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Cell, CellsView, ConwayRule, Grid, Rule, Strategy, ThresholdRule, ViewHandle};
use crate::error::{Result, UniverseError};

pub const DEFAULT_WIDTH: usize = 64;
pub const DEFAULT_HEIGHT: usize = 64;
/// Chance of a cell starting alive under a random fill
pub const DEFAULT_DENSITY: f64 = 0.5;

/// Initial contents of a freshly built or resized universe
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fill {
    Dead,
    /// Each cell alive with probability `density`, thread-local entropy
    Random { density: f64 },
    /// Reproducible random fill
    Seeded { density: f64, seed: u64 },
}

impl Default for Fill {
    fn default() -> Self {
        Fill::Random { density: DEFAULT_DENSITY }
    }
}

impl Fill {
    fn density(&self) -> Option<f64> {
        match *self {
            Fill::Dead => None,
            Fill::Random { density } | Fill::Seeded { density, .. } => Some(density),
        }
    }

    fn validate(&self) -> Result<()> {
        match self.density() {
            Some(d) if !(0.0..=1.0).contains(&d) => Err(UniverseError::InvalidDensity(d)),
            _ => Ok(()),
        }
    }

    /// Produce `len` cells; density must already be validated
    fn cells(&self, len: usize) -> Vec<Cell> {
        match *self {
            Fill::Dead => vec![Cell::Dead; len],
            Fill::Random { density } => random_cells(len, &mut rand::rng(), density),
            Fill::Seeded { density, seed } => {
                random_cells(len, &mut StdRng::seed_from_u64(seed), density)
            }
        }
    }
}

fn random_cells(len: usize, rng: &mut impl Rng, density: f64) -> Vec<Cell> {
    (0..len).map(|_| Cell::from_alive(rng.random_bool(density))).collect()
}

fn check_dimensions(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(UniverseError::ZeroDimension { width, height });
    }
    width
        .checked_mul(height)
        .filter(|&len| len <= isize::MAX as usize && width <= i64::MAX as usize && height <= i64::MAX as usize)
        .ok_or(UniverseError::TooLarge { width, height })
}

/// Universe is the complete simulation state: a toroidal double-buffered
/// grid plus its generation counter.
///
/// It is either idle (readable between calls) or inside a single `tick`;
/// the second state is never observable because every mutating method takes
/// `&mut self`. The `epoch` increments on every mutation and backs
/// [`ViewHandle`] checks.
#[derive(Clone, Debug)]
pub struct Universe {
    grid: Grid,
    generation: u64,
    epoch: u64,
    strategy: Strategy,
}

impl Universe {
    /// Randomly filled universe at the default density
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_fill(width, height, Fill::default())
    }

    /// Universe with every cell dead
    pub fn dead(width: usize, height: usize) -> Result<Self> {
        Self::with_fill(width, height, Fill::Dead)
    }

    pub fn with_fill(width: usize, height: usize, fill: Fill) -> Result<Self> {
        let len = check_dimensions(width, height)?;
        fill.validate()?;
        debug!("building {width}x{height} universe with {fill:?}");
        Ok(Self {
            grid: Grid::from_cells(width, height, fill.cells(len)),
            generation: 0,
            epoch: 0,
            strategy: Strategy::default(),
        })
    }

    /// Set the tick strategy (builder pattern)
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn width(&self) -> usize {
        self.grid.dimensions().0
    }

    pub fn height(&self) -> usize {
        self.grid.dimensions().1
    }

    /// Completed ticks since construction, resize or clear
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Mutation counter; never reset, not even by `resize`
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Advance one generation under the classic B3/S23 rule
    pub fn tick(&mut self) {
        self.step(&ConwayRule);
    }

    /// Advance one generation with caller-supplied thresholds
    pub fn tick_with(&mut self, birth: u8, survival_min: u8, survival_max: u8) {
        self.step(&ThresholdRule::new(birth, survival_min, survival_max));
    }

    /// Advance one generation under any neighbor-count rule
    pub fn step(&mut self, rule: &dyn Rule) {
        let (width, height) = self.grid.dimensions();
        let parallel = self.strategy.is_parallel_for(width * height);
        self.grid.step(rule, parallel);
        self.generation += 1;
        self.bump_epoch();
        trace!(
            "generation {} ({}, parallel={parallel})",
            self.generation,
            rule.name()
        );
    }

    /// Flip the cell at `(row mod height, col mod width)`
    pub fn toggle_cell(&mut self, row: i64, col: i64) {
        self.grid.toggle(row, col);
        self.bump_epoch();
    }

    /// Write one cell, with the same wraparound as `toggle_cell`
    pub fn set_cell(&mut self, row: i64, col: i64, cell: Cell) {
        self.grid.set(row, col, cell);
        self.bump_epoch();
    }

    pub fn cell(&self, row: i64, col: i64) -> Cell {
        self.grid.get(row, col)
    }

    /// Live neighbors with toroidal wrapping, in `[0, 8]`
    pub fn neighbor_count(&self, row: i64, col: i64) -> u8 {
        self.grid.neighbor_count(row, col)
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Kill every cell and restart the generation count
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.bump_epoch();
    }

    /// Replace the whole state with a fresh grid of the new size.
    /// On error the universe is left untouched.
    pub fn resize(&mut self, width: usize, height: usize, fill: Fill) -> Result<()> {
        let fresh = Self::with_fill(width, height, fill)?;
        let epoch = self.epoch;
        *self = Self { strategy: self.strategy, epoch, ..fresh };
        self.bump_epoch();
        Ok(())
    }

    /// Borrowed byte view of the current generation
    pub fn cells_view(&self) -> CellsView<'_> {
        let (width, height) = self.grid.dimensions();
        CellsView::new(bytemuck::cast_slice(self.grid.cells()), width, height, self.epoch)
    }

    /// Raw base address of the current buffer, `width * height` bytes.
    /// Invalid after the next `tick`, `toggle_cell`, `set_cell`, `clear`
    /// or `resize`; re-fetch every frame.
    pub fn cells_ptr(&self) -> *const u8 {
        self.cells_view().as_ptr()
    }

    pub fn view_handle(&self) -> ViewHandle {
        ViewHandle::at(self.epoch)
    }

    /// Re-borrow the view a handle was taken for, if nothing mutated since
    pub fn resolve(&self, handle: ViewHandle) -> Result<CellsView<'_>> {
        if handle.epoch() != self.epoch {
            warn!("stale view handle at epoch {}, universe at {}", handle.epoch(), self.epoch);
            return Err(UniverseError::StaleView { handle, current: self.epoch });
        }
        Ok(self.cells_view())
    }

    fn bump_epoch(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }
}

impl Default for Universe {
    fn default() -> Self {
        let len = DEFAULT_WIDTH * DEFAULT_HEIGHT;
        Self {
            grid: Grid::from_cells(
                DEFAULT_WIDTH,
                DEFAULT_HEIGHT,
                random_cells(len, &mut rand::rng(), DEFAULT_DENSITY),
            ),
            generation: 0,
            epoch: 0,
            strategy: Strategy::default(),
        }
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.cells_view().rows() {
            for &byte in line {
                let symbol = if byte == Cell::Alive.as_byte() { '◼' } else { '◻' };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
