use super::Cell;
use rand::Rng;
use rayon::prelude::*;

/// Grid manages the 2D cellular automaton grid.
/// Dimensions are fixed at construction; evolution never mutates in place
/// and instead returns a freshly allocated grid, so every cell transitions
/// off the same prior snapshot.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height)
            .then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position (for seeding patterns)
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Number of alive cells in the grid
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Count live neighbors on a bounded grid: the up-to-8 adjacent
    /// positions, with out-of-range positions skipped rather than wrapped.
    /// Corner cells see at most 3 neighbors, edge cells at most 5.
    fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let w = self.width as isize;
        let h = self.height as isize;

        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(|(dx, dy)| {
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                (nx >= 0 && nx < w && ny >= 0 && ny < h)
                    .then(|| self.cells[self.get_index(nx as usize, ny as usize)])
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Compute the next generation. Pure: the input grid is untouched and
    /// the result has identical dimensions. Total over every rectangular
    /// grid, including 0x0 and 1x1.
    pub fn step(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.cells[self.get_index(x, y)];
                current.evolve(self.count_live_neighbors(x, y))
            })
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Parallel next generation using rayon, one row per task.
    /// Same semantics as `step`: reads only the prior snapshot, writes only
    /// the output buffer. Worthwhile for grids beyond roughly 100x100.
    pub fn step_parallel(&self) -> Self {
        let cells: Vec<Cell> = (0..self.height)
            .into_par_iter()
            .flat_map_iter(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.cells[self.get_index(x, y)];
                current.evolve(self.count_live_neighbors(x, y))
            })
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Clear all cells to dead state
    pub fn clear(mut self) -> Self {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
        self
    }

    /// Randomize the grid, each cell independently alive with probability 0.5
    pub fn randomize(self) -> Self {
        self.randomize_with(&mut rand::rng())
    }

    /// Randomize with a caller-supplied RNG, so a seeded generator can
    /// produce reproducible grids
    pub fn randomize_with<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(0.5) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
        self
    }

}
