use super::Cell;

/// Lowest threshold value the interactive sliders offer
pub const THRESHOLD_MIN: u8 = 1;
/// Highest threshold value; also the largest possible neighbor count
pub const THRESHOLD_MAX: u8 = 8;

/// Pure transition function.
///
/// A dead cell is born only when `neighbors` equals `birth` exactly (a single
/// value, not a range). A live cell survives while `neighbors` lies in
/// `survival_min..=survival_max`. Out-of-range thresholds are compared as
/// given, so `survival_min > survival_max` means nothing ever survives.
pub const fn next_state(
    current: Cell,
    neighbors: u8,
    birth: u8,
    survival_min: u8,
    survival_max: u8,
) -> Cell {
    match current {
        Cell::Dead => Cell::from_alive(neighbors == birth),
        Cell::Alive => Cell::from_alive(survival_min <= neighbors && neighbors <= survival_max),
    }
}

/// Trait for neighbor-count rules
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Apply rule to compute next cell state
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell;
}

/// Conway's Game of Life (B3/S23)
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "Conway"
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        ThresholdRule::CLASSIC.evolve(current, neighbors)
    }
}

/// Rule with caller-supplied birth and survival thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThresholdRule {
    pub birth: u8,
    pub survival_min: u8,
    pub survival_max: u8,
}

impl ThresholdRule {
    pub const CLASSIC: Self = Self::new(3, 2, 3);

    pub const fn new(birth: u8, survival_min: u8, survival_max: u8) -> Self {
        Self { birth, survival_min, survival_max }
    }

    /// Same thresholds pulled into the slider range `[1, 8]`
    pub fn clamped(self) -> Self {
        Self {
            birth: self.birth.clamp(THRESHOLD_MIN, THRESHOLD_MAX),
            survival_min: self.survival_min.clamp(THRESHOLD_MIN, THRESHOLD_MAX),
            survival_max: self.survival_max.clamp(THRESHOLD_MIN, THRESHOLD_MAX),
        }
    }

    /// False when no neighbor count can satisfy survival
    pub const fn survival_is_satisfiable(&self) -> bool {
        self.survival_min <= self.survival_max
    }
}

impl Default for ThresholdRule {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl Rule for ThresholdRule {
    fn name(&self) -> &'static str {
        "Threshold"
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        next_state(current, neighbors, self.birth, self.survival_min, self.survival_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conway_rules() {
        let rule = ConwayRule;

        // Underpopulation
        assert_eq!(rule.evolve(Cell::Alive, 0), Cell::Dead);
        assert_eq!(rule.evolve(Cell::Alive, 1), Cell::Dead);

        // Survival
        assert_eq!(rule.evolve(Cell::Alive, 2), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Alive, 3), Cell::Alive);

        // Overpopulation
        assert_eq!(rule.evolve(Cell::Alive, 4), Cell::Dead);
        assert_eq!(rule.evolve(Cell::Alive, 8), Cell::Dead);

        // Reproduction
        assert_eq!(rule.evolve(Cell::Dead, 3), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Dead, 2), Cell::Dead);
        assert_eq!(rule.evolve(Cell::Dead, 4), Cell::Dead);
    }

    #[test]
    fn test_birth_is_exact_match_not_range() {
        // Birth compares for equality against one threshold; counts above
        // the threshold do not give birth.
        let rule = ThresholdRule::new(4, 2, 3);
        assert_eq!(rule.evolve(Cell::Dead, 4), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Dead, 3), Cell::Dead);
        assert_eq!(rule.evolve(Cell::Dead, 5), Cell::Dead);
    }

    #[test]
    fn test_survival_range_is_inclusive() {
        let rule = ThresholdRule::new(3, 1, 5);
        for n in 1..=5 {
            assert_eq!(rule.evolve(Cell::Alive, n), Cell::Alive);
        }
        assert_eq!(rule.evolve(Cell::Alive, 0), Cell::Dead);
        assert_eq!(rule.evolve(Cell::Alive, 6), Cell::Dead);
    }

    #[test]
    fn test_inverted_survival_range_kills_everything() {
        let rule = ThresholdRule::new(3, 5, 2);
        assert!(!rule.survival_is_satisfiable());
        for n in 0..=8 {
            assert_eq!(rule.evolve(Cell::Alive, n), Cell::Dead);
        }
    }

    #[test]
    fn test_out_of_range_thresholds_compare_literally() {
        assert_eq!(next_state(Cell::Dead, 0, 0, 0, 0), Cell::Alive);
        assert_eq!(next_state(Cell::Alive, 8, 200, 0, 255), Cell::Alive);
        assert_eq!(next_state(Cell::Dead, 8, 200, 0, 255), Cell::Dead);
    }

    #[test]
    fn test_clamped_pulls_into_slider_range() {
        let rule = ThresholdRule::new(0, 9, 200).clamped();
        assert_eq!(rule, ThresholdRule::new(1, 8, 8));
        assert_eq!(ThresholdRule::CLASSIC.clamped(), ThresholdRule::CLASSIC);
    }

    #[test]
    fn test_conway_matches_classic_thresholds() {
        for n in 0..=8 {
            for cell in [Cell::Dead, Cell::Alive] {
                assert_eq!(ConwayRule.evolve(cell, n), ThresholdRule::default().evolve(cell, n));
            }
        }
    }
}
