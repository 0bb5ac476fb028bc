use super::{Cell, Grid};

/// A seed pattern that can be stamped onto a grid
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    /// Relative coordinates of alive cells
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Place pattern on grid at the given offset. Cells that land outside
    /// the grid are dropped, consistent with the bounded grid model.
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) {
        for &(dx, dy) in &self.cells {
            grid.set(x + dx, y + dy, Cell::Alive);
        }
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0), (2, 0),
            ],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            block(),
            r_pentomino(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_fit_their_bounding_box() {
        for pattern in presets::all_patterns() {
            assert!(!pattern.cells.is_empty(), "{} has no cells", pattern.name);
            for &(x, y) in &pattern.cells {
                assert!(
                    x < pattern.width && y < pattern.height,
                    "{} cell ({x}, {y}) outside {}x{}",
                    pattern.name,
                    pattern.width,
                    pattern.height
                );
            }
        }
    }

    #[test]
    fn test_pattern_names_are_unique() {
        let patterns = presets::all_patterns();
        let mut names: Vec<_> = patterns.iter().map(|p| p.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), patterns.len());
    }

    #[test]
    fn test_pattern_dimensions() {
        let blinker = presets::blinker();
        assert_eq!((blinker.width, blinker.height), (3, 1));

        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
    }

    #[test]
    fn test_place_on_sets_alive_cells() {
        let mut grid = Grid::new(5, 5);
        presets::block().place_on(&mut grid, 1, 1);

        assert_eq!(grid.population(), 4);
        assert_eq!(grid.get(1, 1), Some(Cell::Alive));
        assert_eq!(grid.get(2, 2), Some(Cell::Alive));
    }

    #[test]
    fn test_place_near_edge_clips() {
        // Only the in-bounds part of the blinker lands
        let mut grid = Grid::new(2, 2);
        presets::blinker().place_on(&mut grid, 1, 0);
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_blinker_placed_on_grid_oscillates() {
        let mut grid = Grid::new(5, 5);
        presets::blinker().place_on(&mut grid, 1, 2);

        let stepped = grid.step();
        assert_eq!(stepped.population(), 3);
        assert_eq!(stepped.get(2, 1), Some(Cell::Alive));
        assert_eq!(stepped.get(2, 2), Some(Cell::Alive));
        assert_eq!(stepped.get(2, 3), Some(Cell::Alive));

        assert_eq!(stepped.step(), grid);
    }
}
