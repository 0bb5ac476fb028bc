use crate::application::Simulation;
use crate::domain::Grid;
use std::io::{self, Write};

/// ANSI: move the cursor home, then clear the screen, so each frame
/// overdraws the previous one in place
const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Write one grid as text: alive cells as `*`, dead cells as spaces,
/// cells separated by a single space, one row per line
pub fn write_grid<W: Write>(grid: &Grid, out: &mut W) -> io::Result<()> {
    let (width, height) = grid.dimensions();
    let mut line = String::with_capacity(width * 2);

    for y in 0..height {
        line.clear();
        for x in 0..width {
            if x > 0 {
                line.push(' ');
            }
            let alive = grid.get(x, y).is_some_and(|cell| cell.is_alive());
            line.push(if alive { '*' } else { ' ' });
        }
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Draw one full frame: clear the terminal, render the grid, then a status
/// line with the generation number and how long its transition took
pub fn draw_frame<W: Write>(sim: &Simulation, out: &mut W) -> io::Result<()> {
    write!(out, "{CLEAR_SCREEN}")?;
    write_grid(sim.grid(), out)?;
    writeln!(
        out,
        "generation {} ({:.4} sec)",
        sim.generation(),
        sim.last_step_time_ms / 1000.0
    )?;
    out.flush()
}
