use crate::config::{Seed, SimConfig};
use crate::grid::{Grid, GridError};
use crate::rules::{Rule, BIRTH_VALUE};

/// Reference driver: applies one rule to every cell, one generation at a time.
///
/// Two grids are kept. Each step reads `grids[frame_num % 2]` and writes the
/// other, so a rule never observes values from the generation being built.
pub struct Simulation {
    grids: [Grid; 2],
    frame_num: usize,
    current_rule: Rule,
}

impl Simulation {
    pub fn new(config: &SimConfig) -> Result<Self, GridError> {
        let mut front = Grid::new(config.width, config.height)?;
        let back = front.clone();

        match config.seed {
            Seed::Empty => {}
            Seed::Pattern(pattern) => {
                let x = i64::from(config.width / 2);
                let y = i64::from(config.height / 2);
                front.place_pattern(&pattern, x, y, BIRTH_VALUE);
            }
            Seed::Gradient => front.fill_gradient(),
        }

        log::info!(
            "Simulation created: {}x{} grid, rule '{}', seed {:?}",
            config.width,
            config.height,
            config.rule,
            config.seed
        );

        Ok(Self::from_grid_buffers([front, back], config.rule))
    }

    /// Start from an already populated grid
    pub fn with_grid(grid: Grid, rule: Rule) -> Self {
        let back = grid.clone();
        Self::from_grid_buffers([grid, back], rule)
    }

    fn from_grid_buffers(grids: [Grid; 2], rule: Rule) -> Self {
        Self {
            grids,
            frame_num: 0,
            current_rule: rule,
        }
    }

    /// The most recently computed generation
    pub fn current(&self) -> &Grid {
        &self.grids[self.frame_num % 2]
    }

    /// Number of generations stepped so far
    pub fn generation(&self) -> usize {
        self.frame_num
    }

    pub fn rule(&self) -> Rule {
        self.current_rule
    }

    /// Switch rules; takes effect from the next step
    pub fn change_rule(&mut self, rule: Rule) {
        log::info!(
            "Rule changed from '{}' to '{}' at generation {}",
            self.current_rule,
            rule,
            self.frame_num
        );
        self.current_rule = rule;
    }

    /// Advance one generation
    pub fn step(&mut self) {
        let read = self.frame_num % 2;
        let (first, second) = self.grids.split_at_mut(1);
        let (input, output) = if read == 0 {
            (&first[0], &mut second[0])
        } else {
            (&second[0], &mut first[0])
        };

        let width = input.width();
        let rule = self.current_rule.func();
        let cells = output.cells_mut();
        for y in 0..input.height() {
            for x in 0..width {
                let idx = crate::grid::get_index(x, y, width);
                cells[idx] = rule(input.get(x, y), &input.neighborhood(x, y));
            }
        }

        self.frame_num += 1;
        log::debug!(
            "Generation {} ({}): population {}",
            self.frame_num,
            self.current_rule,
            self.current().population()
        );
    }

    /// Advance `generations` steps
    pub fn run(&mut self, generations: usize) {
        for _ in 0..generations {
            self.step();
        }
    }

    pub fn live_cell_count(&self) -> usize {
        self.current().population()
    }
}
