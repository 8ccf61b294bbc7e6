use super::{Cell, Universe};

/// A named arrangement of live cells that can be stamped onto a universe
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    /// `(row, col)` offsets of live cells from the top-left corner
    pub cells: Vec<(i64, i64)>,
}

impl Pattern {
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i64, i64)>) -> Self {
        Self { name, description, cells }
    }

    /// Bounding box as `(rows, cols)`
    pub fn extent(&self) -> (i64, i64) {
        let rows = self.cells.iter().map(|&(r, _)| r).max().map_or(0, |r| r + 1);
        let cols = self.cells.iter().map(|&(_, c)| c).max().map_or(0, |c| c + 1);
        (rows, cols)
    }

    /// Set the pattern's cells alive with the top-left corner at
    /// `(row, col)`; cells past an edge wrap around
    pub fn place_on(&self, universe: &mut Universe, row: i64, col: i64) {
        for &(dr, dc) in &self.cells {
            universe.set_cell(row.wrapping_add(dr), col.wrapping_add(dc), Cell::Alive);
        }
    }
}

/// Small library of classic patterns
pub mod presets {
    use super::*;

    /// Block - simplest still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", vec![(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(1, 0), (1, 1), (1, 2)])
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![(0, 0), (0, 1), (1, 0), (2, 3), (3, 2), (3, 3)],
        )
    }

    /// Glider - moves one cell diagonally every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceship (period 4)",
            vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
        )
    }

    /// Lightweight spaceship, travels horizontally
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Spaceship (period 4)",
            vec![(0, 1), (0, 4), (1, 0), (2, 0), (2, 4), (3, 0), (3, 1), (3, 2), (3, 3)],
        )
    }

    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah, stabilizes at gen 1103",
            vec![(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
        )
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), toad(), beacon(), glider(), lwss(), r_pentomino()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(universe: &Universe) -> Vec<u8> {
        universe.cells_view().as_bytes().to_vec()
    }

    #[test]
    fn test_extent() {
        assert_eq!(presets::block().extent(), (2, 2));
        assert_eq!(presets::lwss().extent(), (4, 5));
        assert_eq!(Pattern::new("Empty", "", vec![]).extent(), (0, 0));
    }

    #[test]
    fn test_place_wraps_past_edges() {
        let mut universe = Universe::dead(5, 5).unwrap();
        presets::block().place_on(&mut universe, 4, 4);
        for (row, col) in [(4, 4), (4, 0), (0, 4), (0, 0)] {
            assert_eq!(universe.cell(row, col), Cell::Alive);
        }
        assert_eq!(universe.population(), 4);
    }

    #[test]
    fn test_period_two_oscillators() {
        for pattern in [presets::blinker(), presets::toad(), presets::beacon()] {
            let mut universe = Universe::dead(10, 10).unwrap();
            pattern.place_on(&mut universe, 3, 3);
            let start = snapshot(&universe);
            universe.tick();
            assert_ne!(snapshot(&universe), start, "{} should change", pattern.name);
            universe.tick();
            assert_eq!(snapshot(&universe), start, "{} should return", pattern.name);
        }
    }

    #[test]
    fn test_patterns_are_populated() {
        for pattern in presets::all_patterns() {
            let mut universe = Universe::dead(12, 12).unwrap();
            pattern.place_on(&mut universe, 2, 2);
            assert_eq!(universe.population(), pattern.cells.len(), "{}", pattern.name);
        }
    }
}
