use super::{Cell, Rule};
use rayon::prelude::*;

/// Grid owns the two same-sized cell buffers of a universe.
///
/// `current` is the generation everyone reads. `scratch` is only written
/// during `step` and then swapped in, so a neighbor count never sees a
/// partially computed generation. Both buffers always hold exactly
/// `width * height` cells in row-major order.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    current: Vec<Cell>,
    scratch: Vec<Cell>,
}

impl Grid {
    /// Wrap an initial generation. Callers guarantee non-zero dimensions
    /// and `cells.len() == width * height`.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert!(width > 0 && height > 0);
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            scratch: vec![Cell::Dead; cells.len()],
            current: cells,
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The current generation, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.current
    }

    /// Map arbitrary signed coordinates onto the torus
    pub fn wrap(&self, row: i64, col: i64) -> (usize, usize) {
        let r = row.rem_euclid(self.height as i64) as usize;
        let c = col.rem_euclid(self.width as i64) as usize;
        (r, c)
    }

    /// Row-major offset of `(row, col)` after wrapping; always in bounds
    pub fn index(&self, row: i64, col: i64) -> usize {
        let (r, c) = self.wrap(row, col);
        r * self.width + c
    }

    pub fn get(&self, row: i64, col: i64) -> Cell {
        self.current[self.index(row, col)]
    }

    pub fn set(&mut self, row: i64, col: i64, cell: Cell) {
        let idx = self.index(row, col);
        self.current[idx] = cell;
    }

    pub fn toggle(&mut self, row: i64, col: i64) {
        let idx = self.index(row, col);
        self.current[idx] = self.current[idx].toggle();
    }

    /// Set every cell of the current buffer to dead
    pub fn clear(&mut self) {
        self.current.fill(Cell::Dead);
    }

    /// Live neighbors of `(row, col)` with toroidal wrapping, in `[0, 8]`
    pub fn neighbor_count(&self, row: i64, col: i64) -> u8 {
        let (r, c) = self.wrap(row, col);
        count_live_neighbors(&self.current, self.width, self.height, r, c)
    }

    pub fn population(&self) -> usize {
        self.current.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Compute the next generation into the scratch buffer, then swap it in
    pub fn step(&mut self, rule: &dyn Rule, parallel: bool) {
        let Self { width, height, current, scratch } = &mut *self;
        let (width, height) = (*width, *height);
        let current: &[Cell] = current;

        if parallel {
            scratch
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(row, out)| evolve_row(current, width, height, row, out, rule));
        } else {
            scratch
                .chunks_mut(width)
                .enumerate()
                .for_each(|(row, out)| evolve_row(current, width, height, row, out, rule));
        }

        std::mem::swap(&mut self.current, &mut self.scratch);
    }
}

/// Fill one output row from the read-only current generation
fn evolve_row(
    current: &[Cell],
    width: usize,
    height: usize,
    row: usize,
    out: &mut [Cell],
    rule: &dyn Rule,
) {
    let base = row * width;
    for (col, next) in out.iter_mut().enumerate() {
        let neighbors = count_live_neighbors(current, width, height, row, col);
        *next = rule.evolve(current[base + col], neighbors);
    }
}

/// Sum the eight surrounding cells. `row` and `col` must already be in
/// range; neighbors wrap modulo the dimensions. On grids narrower than
/// three cells the same position can be visited more than once, which
/// keeps the count bounded by 8.
fn count_live_neighbors(cells: &[Cell], width: usize, height: usize, row: usize, col: usize) -> u8 {
    let rows = [(row + height - 1) % height, row, (row + 1) % height];
    let cols = [(col + width - 1) % width, col, (col + 1) % width];

    let mut count = 0;
    for (dr, &r) in rows.iter().enumerate() {
        for (dc, &c) in cols.iter().enumerate() {
            if dr == 1 && dc == 1 {
                continue;
            }
            count += cells[r * width + c].as_byte();
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConwayRule;

    fn grid_with(width: usize, height: usize, alive: &[(i64, i64)]) -> Grid {
        let mut grid = Grid::from_cells(width, height, vec![Cell::Dead; width * height]);
        for &(row, col) in alive {
            grid.set(row, col, Cell::Alive);
        }
        grid
    }

    #[test]
    fn test_wrap_negative_and_large_coordinates() {
        let grid = grid_with(4, 3, &[]);
        assert_eq!(grid.wrap(-1, -1), (2, 3));
        assert_eq!(grid.wrap(3, 4), (0, 0));
        assert_eq!(grid.wrap(i64::MIN, i64::MAX), (i64::MIN.rem_euclid(3) as usize, i64::MAX.rem_euclid(4) as usize));
        assert!(grid.index(i64::MAX, i64::MIN) < 12);
    }

    #[test]
    fn test_fully_alive_3x3_counts_eight_at_origin() {
        let all: Vec<(i64, i64)> = (0..3).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
        let grid = grid_with(3, 3, &all);
        assert_eq!(grid.neighbor_count(0, 0), 8);
    }

    #[test]
    fn test_lone_cell_seen_by_every_other_cell_on_3x3_torus() {
        let grid = grid_with(3, 3, &[(0, 0)]);
        assert_eq!(grid.neighbor_count(0, 0), 0);
        for row in 0..3 {
            for col in 0..3 {
                if (row, col) != (0, 0) {
                    assert_eq!(grid.neighbor_count(row, col), 1, "({row}, {col})");
                }
            }
        }
    }

    #[test]
    fn test_neighbors_wrap_across_corners() {
        let grid = grid_with(5, 5, &[(4, 4), (0, 4), (4, 0)]);
        assert_eq!(grid.neighbor_count(0, 0), 3);
    }

    #[test]
    fn test_step_swaps_buffers_and_keeps_lengths() {
        let mut grid = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        grid.step(&ConwayRule, false);
        assert_eq!(grid.current.len(), 25);
        assert_eq!(grid.scratch.len(), 25);
        // Blinker flips to vertical
        assert_eq!(grid.get(1, 2), Cell::Alive);
        assert_eq!(grid.get(2, 2), Cell::Alive);
        assert_eq!(grid.get(3, 2), Cell::Alive);
        assert_eq!(grid.population(), 3);
    }

    #[test]
    fn test_parallel_step_matches_serial() {
        let alive = [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3), (10, 10), (10, 11), (11, 10)];
        let mut serial = grid_with(17, 13, &alive);
        let mut parallel = serial.clone();
        for _ in 0..20 {
            serial.step(&ConwayRule, false);
            parallel.step(&ConwayRule, true);
            assert_eq!(serial.cells(), parallel.cells());
        }
    }

    #[test]
    fn test_narrow_grid_counts_stay_bounded() {
        let grid = grid_with(1, 1, &[(0, 0)]);
        assert_eq!(grid.neighbor_count(0, 0), 8);
        let grid = grid_with(2, 1, &[(0, 0), (0, 1)]);
        assert!(grid.neighbor_count(0, 0) <= 8);
    }
}
