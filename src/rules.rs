//! Rules module for the cell simulation
//!
//! This module contains the per-cell transition rules, the neighborhood record
//! they read, and the seed patterns used to initialize a grid.
pub mod patterns;
pub mod registry;

pub use patterns::Pattern;
pub use registry::{Rule, RuleFn, UnknownRule};

use bytemuck::{Pod, Zeroable};

/// A single grid cell value.
///
/// Life rules treat 0 as dead and anything positive as alive. Image rules treat
/// it as a grayscale intensity, conventionally in 0..=255.
pub type Cell = i32;

/// Value a dead cell takes when `conway` brings it to life
pub const BIRTH_VALUE: Cell = 100;

/// Brightest grayscale intensity; `negative` mirrors values around it
pub const MAX_INTENSITY: Cell = 255;

/// The eight Moore neighbors of a cell, keyed by compass direction.
///
/// Field order (N, NE, E, SE, S, SW, W, NW) is also the order used by
/// [`Neighborhood::from_array`] and [`Neighborhood::to_array`].
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Neighborhood {
    pub n: Cell,
    pub ne: Cell,
    pub e: Cell,
    pub se: Cell,
    pub s: Cell,
    pub sw: Cell,
    pub w: Cell,
    pub nw: Cell,
}

impl Neighborhood {
    /// Build a neighborhood from values ordered N, NE, E, SE, S, SW, W, NW
    pub fn from_array(values: [Cell; 8]) -> Self {
        bytemuck::cast(values)
    }

    /// Values ordered N, NE, E, SE, S, SW, W, NW
    pub fn to_array(self) -> [Cell; 8] {
        bytemuck::cast(self)
    }

    /// A neighborhood where every neighbor holds `value`
    pub fn uniform(value: Cell) -> Self {
        Self::from_array([value; 8])
    }

    pub fn values(&self) -> impl Iterator<Item = Cell> {
        self.to_array().into_iter()
    }

    /// Number of live neighbors (0..=8)
    pub fn living(&self) -> Cell {
        self.values().map(life).sum()
    }

    /// Largest raw neighbor value, live or not
    pub fn largest(&self) -> Cell {
        self.values().fold(Cell::MIN, Cell::max)
    }
}

/// Returns 1 if the cell is alive (strictly positive), 0 otherwise.
pub fn life(value: Cell) -> Cell {
    if value > 0 {
        1
    } else {
        0
    }
}

/// Conway's Game of Life (B3/S23):
/// 1. A live cell with two or three live neighbors survives, keeping its value
/// 2. Any other live cell dies
/// 3. A dead cell with exactly three live neighbors is born with `BIRTH_VALUE`
pub fn conway(cntr: Cell, nbrs: &Neighborhood) -> Cell {
    let living = nbrs.living();

    if life(cntr) == 1 {
        if living == 2 || living == 3 {
            cntr
        } else {
            0
        }
    } else if living == 3 {
        BIRTH_VALUE
    } else {
        0
    }
}

/// Conway's rules where a live cell's value is its generation.
///
/// Survivors keep their value; a newborn takes one more than the largest
/// neighbor value.
pub fn generational(cntr: Cell, nbrs: &Neighborhood) -> Cell {
    let living = nbrs.living();

    if life(cntr) == 1 {
        if living == 2 || living == 3 {
            cntr
        } else {
            0
        }
    } else if living == 3 {
        nbrs.largest().saturating_add(1)
    } else {
        0
    }
}

/// Moves a cell halfway towards the average of its orthogonal neighbors,
/// smoothing sharp transitions. Diagonals are ignored.
pub fn blur(cntr: Cell, nbrs: &Neighborhood) -> Cell {
    let sum = i64::from(nbrs.n) + i64::from(nbrs.e) + i64::from(nbrs.s) + i64::from(nbrs.w);
    let avg = sum.div_euclid(4);
    // Both operands fit in i32, so their halved sum does too.
    (i64::from(cntr) + avg).div_euclid(2) as Cell
}

/// Photographic negative: inverts the intensity around `MAX_INTENSITY`.
pub fn negative(cntr: Cell, _nbrs: &Neighborhood) -> Cell {
    MAX_INTENSITY.saturating_sub(cntr)
}
