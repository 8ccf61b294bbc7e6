//! Strategy enum for selecting how a tick walks the grid.
//!
//! Every strategy reads only the current buffer and writes only the scratch
//! buffer, so they produce identical generations and differ in speed alone.

/// Grids with at least this many cells tick in parallel under `Auto`
pub const PARALLEL_THRESHOLD: usize = 64 * 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Row by row on the calling thread
    Serial,
    /// Rows of the scratch buffer split across the rayon pool
    Parallel,
    /// Parallel once the grid reaches `PARALLEL_THRESHOLD` cells
    #[default]
    Auto,
}

impl Strategy {
    pub fn all() -> [Strategy; 3] {
        [Strategy::Serial, Strategy::Parallel, Strategy::Auto]
    }

    /// Display name for logs and benchmark output
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Serial => "Serial",
            Strategy::Parallel => "Parallel",
            Strategy::Auto => "Auto",
        }
    }

    /// Whether a grid with `cell_count` cells should use the rayon pool
    pub fn is_parallel_for(&self, cell_count: usize) -> bool {
        match self {
            Strategy::Serial => false,
            Strategy::Parallel => true,
            Strategy::Auto => cell_count >= PARALLEL_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_auto() {
        assert_eq!(Strategy::default(), Strategy::Auto);
    }

    #[test]
    fn test_auto_switches_at_threshold() {
        assert!(!Strategy::Auto.is_parallel_for(PARALLEL_THRESHOLD - 1));
        assert!(Strategy::Auto.is_parallel_for(PARALLEL_THRESHOLD));
        assert!(!Strategy::Serial.is_parallel_for(usize::MAX));
        assert!(Strategy::Parallel.is_parallel_for(1));
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = Strategy::all().iter().map(|s| s.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Strategy::all().len());
    }
}
