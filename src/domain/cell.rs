use bytemuck::NoUninit;

/// Cell is the binary state of one grid position.
/// The discriminants are the byte values a renderer reads from the
/// exposed buffer: `0` is dead, `1` is alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, NoUninit)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Flip between alive and dead
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Byte value as seen through the exposed buffer
    pub const fn as_byte(self) -> u8 {
        self as u8
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Cell::from_alive(alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        assert_eq!(Cell::Alive.toggle().toggle(), Cell::Alive);
        assert_eq!(Cell::Dead.toggle().toggle(), Cell::Dead);
    }

    #[test]
    fn test_byte_values() {
        assert_eq!(Cell::Dead.as_byte(), 0);
        assert_eq!(Cell::Alive.as_byte(), 1);
        assert_eq!(Cell::default(), Cell::Dead);
    }

    #[test]
    fn test_cast_slice_matches_discriminants() {
        let cells = [Cell::Alive, Cell::Dead, Cell::Alive];
        let bytes: &[u8] = bytemuck::cast_slice(&cells);
        assert_eq!(bytes, &[1, 0, 1]);
    }
}
