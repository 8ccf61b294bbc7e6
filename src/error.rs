use thiserror::Error;

use crate::domain::ViewHandle;

/// Errors reported by universe construction and view resolution.
/// Per-frame operations never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UniverseError {
    #[error("universe dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("universe of {width}x{height} cells does not fit in memory")]
    TooLarge { width: usize, height: usize },

    #[error("random fill density must lie in [0, 1], got {0}")]
    InvalidDensity(f64),

    #[error("view handle from epoch {} is stale, universe is at epoch {current}", .handle.epoch())]
    StaleView { handle: ViewHandle, current: u64 },
}

pub type Result<T> = std::result::Result<T, UniverseError>;
