mod cell;
mod grid;
mod rules;
mod patterns;
mod strategy;
mod universe;
mod view;

pub use cell::Cell;
pub use grid::Grid;
pub use rules::{Rule, ConwayRule, ThresholdRule, next_state, THRESHOLD_MIN, THRESHOLD_MAX};
pub use patterns::{Pattern, presets};
pub use strategy::{Strategy, PARALLEL_THRESHOLD};
pub use universe::{Universe, Fill, DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_DENSITY};
pub use view::{CellsView, ViewHandle};
