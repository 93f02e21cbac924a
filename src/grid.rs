//! Reference grid storage with wrapping boundaries

use crate::rules::{life, Cell, Neighborhood, Pattern, MAX_INTENSITY};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Width or height was zero
    ZeroSize { width: u32, height: u32 },
    /// The cell buffer would not fit in memory
    TooLarge { width: u32, height: u32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::ZeroSize { width, height } => {
                write!(f, "grid dimensions must be non-zero, got {}x{}", width, height)
            }
            GridError::TooLarge { width, height } => {
                write!(f, "grid of {}x{} cells is too large to allocate", width, height)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Rectangular grid of cells stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

/// Index in a 1D array for a 2D grid position
pub fn get_index(x: u32, y: u32, width: u32) -> usize {
    (y as usize) * (width as usize) + x as usize
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroSize { width, height });
        }
        let max_cells = isize::MAX as usize / std::mem::size_of::<Cell>();
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|&len| len <= max_cells)
            .ok_or(GridError::TooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![0; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Raw cell buffer for handing to a renderer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }

    /// Value at (x, y). Panics if the position is outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Cell {
        assert!(
            x < self.width && y < self.height,
            "({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        self.cells[get_index(x, y, self.width)]
    }

    /// Value at (x, y), wrapping around the edges in both directions
    pub fn get_wrapped(&self, x: i64, y: i64) -> Cell {
        let wx = x.rem_euclid(i64::from(self.width)) as u32;
        let wy = y.rem_euclid(i64::from(self.height)) as u32;
        self.cells[get_index(wx, wy, self.width)]
    }

    /// Write a cell. Positions outside the grid are ignored; returns whether the write happened.
    pub fn set(&mut self, x: u32, y: u32, value: Cell) -> bool {
        if x < self.width && y < self.height {
            let idx = get_index(x, y, self.width);
            self.cells[idx] = value;
            true
        } else {
            false
        }
    }

    /// Moore neighborhood of (x, y) using wrapping boundaries
    pub fn neighborhood(&self, x: u32, y: u32) -> Neighborhood {
        let (x, y) = (i64::from(x), i64::from(y));
        Neighborhood {
            n: self.get_wrapped(x, y - 1),
            ne: self.get_wrapped(x + 1, y - 1),
            e: self.get_wrapped(x + 1, y),
            se: self.get_wrapped(x + 1, y + 1),
            s: self.get_wrapped(x, y + 1),
            sw: self.get_wrapped(x - 1, y + 1),
            w: self.get_wrapped(x - 1, y),
            nw: self.get_wrapped(x - 1, y - 1),
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&v| life(v) == 1).count()
    }

    /// Sum of all cell values
    pub fn total(&self) -> i64 {
        self.cells.iter().map(|&v| i64::from(v)).sum()
    }

    /// Place a pattern with its anchor at (x, y), giving every live cell `value`.
    /// Cells falling outside the grid are skipped; returns how many were placed.
    pub fn place_pattern(&mut self, pattern: &Pattern, x: i64, y: i64, value: Cell) -> usize {
        let mut placed = 0;
        for (cell_x, cell_y) in pattern.cells(x, y) {
            let in_bounds = u32::try_from(cell_x)
                .ok()
                .zip(u32::try_from(cell_y).ok())
                .map(|(cx, cy)| self.set(cx, cy, value))
                .unwrap_or(false);
            if in_bounds {
                placed += 1;
            } else {
                log::warn!(
                    "Skipping {} cell at ({}, {}) outside the grid",
                    pattern.name(),
                    cell_x,
                    cell_y
                );
            }
        }
        placed
    }

    /// Fill with a diagonal grayscale ramp from 0 (top left) to `MAX_INTENSITY` (bottom right)
    pub fn fill_gradient(&mut self) {
        let span = u64::from(self.width - 1) + u64::from(self.height - 1);
        for y in 0..self.height {
            for x in 0..self.width {
                let value = if span == 0 {
                    0
                } else {
                    ((u64::from(x) + u64::from(y)) * MAX_INTENSITY as u64 / span) as Cell
                };
                let idx = get_index(x, y, self.width);
                self.cells[idx] = value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_is_rejected() {
        assert_eq!(Grid::new(0, 4), Err(GridError::ZeroSize { width: 0, height: 4 }));
        assert!(Grid::new(4, 0).is_err());
    }

    #[test]
    fn test_oversized_grid_is_rejected() {
        assert_eq!(
            Grid::new(u32::MAX, u32::MAX),
            Err(GridError::TooLarge { width: u32::MAX, height: u32::MAX })
        );
    }

    #[test]
    fn test_neighborhood_wraps_at_corner() {
        let mut grid = Grid::new(3, 3).unwrap();
        let mut value = 1;
        for y in 0..3 {
            for x in 0..3 {
                grid.set(x, y, value);
                value += 1;
            }
        }
        // 1 2 3
        // 4 5 6
        // 7 8 9
        let nbrs = grid.neighborhood(0, 0);
        assert_eq!(nbrs, Neighborhood { n: 7, ne: 8, e: 2, se: 5, s: 4, sw: 6, w: 3, nw: 9 });
        let nbrs = grid.neighborhood(1, 1);
        assert_eq!(nbrs.to_array(), [2, 3, 6, 9, 8, 7, 4, 1]);
    }

    #[test]
    fn test_set_out_of_range_is_ignored() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(!grid.set(2, 0, 5));
        assert!(grid.set(1, 1, 5));
        assert_eq!(grid.get(1, 1), 5);
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_place_pattern_clips() {
        let mut grid = Grid::new(4, 4).unwrap();
        assert_eq!(grid.place_pattern(&Pattern::Blinker, 0, 0, 100), 2);
        assert_eq!(grid.population(), 2);
        assert_eq!(grid.total(), 200);
    }

    #[test]
    fn test_place_pattern_far_outside_is_skipped() {
        let mut grid = Grid::new(4, 4).unwrap();
        assert_eq!(grid.place_pattern(&Pattern::Glider, i64::from(i32::MAX), 0, 1), 0);
        assert_eq!(grid.place_pattern(&Pattern::Glider, i64::MAX, i64::MIN, 1), 0);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_gradient_spans_intensity_range() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.fill_gradient();
        assert_eq!(grid.get(0, 0), 0);
        assert_eq!(grid.get(3, 2), MAX_INTENSITY);
        assert_eq!(grid.get(2, 1), 153);

        let mut single = Grid::new(1, 1).unwrap();
        single.fill_gradient();
        assert_eq!(single.cells(), &[0]);
    }

    #[test]
    fn test_as_bytes_covers_every_cell() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set(0, 0, 1);
        let bytes = grid.as_bytes();
        assert_eq!(bytes.len(), 6 * std::mem::size_of::<Cell>());
        assert_eq!(&bytes[..4], &1i32.to_ne_bytes());
    }
}
