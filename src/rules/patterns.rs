/// Predefined patterns for initializing a life grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// A small oscillator
    Blinker,
    /// A small oscillator
    Toad,
    /// A small stationary pattern
    Block,
    /// A diagonal spaceship
    Glider,
    /// A horizontal spaceship
    LightweightSpaceship,
}

impl Pattern {
    /// Live cells of the pattern as (dx, dy) offsets from its anchor
    pub fn offsets(&self) -> &'static [(i32, i32)] {
        match self {
            Pattern::Blinker => &[
                (0, -1), (0, 0), (0, 1)
            ],
            Pattern::Toad => &[
                (-1, 0), (0, 0), (1, 0),
                (-2, 1), (-1, 1), (0, 1)
            ],
            Pattern::Block => &[
                (0, 0), (1, 0),
                (0, 1), (1, 1)
            ],
            Pattern::Glider => &[
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2)
            ],
            Pattern::LightweightSpaceship => &[
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3)
            ],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Blinker => "blinker",
            Pattern::Toad => "toad",
            Pattern::Block => "block",
            Pattern::Glider => "glider",
            Pattern::LightweightSpaceship => "lightweight spaceship",
        }
    }

    /// Get the cells for a pattern anchored at position (x, y).
    /// Cells whose coordinates would overflow are left out.
    pub fn cells(&self, x: i64, y: i64) -> Vec<(i64, i64)> {
        self.offsets()
            .iter()
            .filter_map(|&(dx, dy)| Some((x.checked_add(dx.into())?, y.checked_add(dy.into())?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_counts() {
        assert_eq!(Pattern::Blinker.offsets().len(), 3);
        assert_eq!(Pattern::Toad.offsets().len(), 6);
        assert_eq!(Pattern::Block.offsets().len(), 4);
        assert_eq!(Pattern::Glider.offsets().len(), 5);
        assert_eq!(Pattern::LightweightSpaceship.offsets().len(), 9);
    }

    #[test]
    fn test_cells_are_anchored() {
        assert_eq!(Pattern::Blinker.cells(3, 3), vec![(3, 2), (3, 3), (3, 4)]);
    }

    #[test]
    fn test_overflowing_cells_are_dropped() {
        assert_eq!(Pattern::Blinker.cells(0, i64::MAX), vec![(0, i64::MAX - 1), (0, i64::MAX)]);
        assert_eq!(Pattern::Block.cells(i64::MAX, i64::MAX), vec![(i64::MAX, i64::MAX)]);
    }
}
