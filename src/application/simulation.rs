use crate::domain::Grid;
use std::time::Instant;

/// Simulation orchestrates the run: it owns the current grid and replaces
/// it wholesale with each generation's result. This is the application
/// layer that coordinates domain logic.
pub struct Simulation {
    grid: Grid,
    generation: u64,
    /// Time spent computing the most recent generation
    pub last_step_time_ms: f32,
}

impl Simulation {
    /// Create a new simulation over an all-dead grid of the given size
    pub fn new(width: usize, height: usize) -> Self {
        Self::from_grid(Grid::new(width, height))
    }

    /// Create a simulation starting from an existing grid
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
            last_step_time_ms: 0.0,
        }
    }

    /// Randomize the grid and reset the generation counter
    pub fn randomize(mut self) -> Self {
        self.grid = self.grid.randomize();
        self.generation = 0;
        self
    }

    /// The current generation's grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of generations computed so far
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance the simulation by one generation, recording how long the
    /// transition took
    pub fn step(&mut self) {
        let start = Instant::now();
        self.grid = self.grid.step();
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    #[test]
    fn test_step_advances_generation() {
        let mut sim = Simulation::new(4, 4);
        assert_eq!(sim.generation(), 0);

        sim.step();
        sim.step();
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_step_replaces_grid() {
        let mut grid = Grid::new(5, 5);
        presets::blinker().place_on(&mut grid, 1, 2);
        let initial = grid.clone();

        let mut sim = Simulation::from_grid(grid);
        sim.step();
        assert_ne!(*sim.grid(), initial);

        sim.step();
        assert_eq!(*sim.grid(), initial);
    }

    #[test]
    fn test_randomize_resets_generation() {
        let mut sim = Simulation::new(8, 8);
        sim.step();

        let sim = sim.randomize();
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_grid_dimensions_stable_across_steps() {
        let mut sim = Simulation::new(6, 3);
        for _ in 0..10 {
            sim.step();
        }
        assert_eq!(sim.grid().dimensions(), (6, 3));
    }
}
