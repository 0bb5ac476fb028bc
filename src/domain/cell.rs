/// Cell is the fundamental unit of the automaton.
/// Each cell is either Dead or Alive; no other attributes exist.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Next state as a pure function of the current state and the
    /// live-neighbor count. An alive cell survives with 2 or 3 neighbors,
    /// a dead cell is born with exactly 3, everything else ends up dead.
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}
