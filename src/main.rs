use conway_life::{Simulation, rendering};
use std::io;
use std::process;
use std::thread;
use std::time::Duration;

struct Config {
    width: usize,
    height: usize,
    generations: u64,
    interval: Duration,
}

fn arg(args: &mut impl Iterator<Item = String>, name: &str, default: u64) -> Result<u64, String> {
    match args.next() {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("invalid {name}: {raw:?}")),
        None => Ok(default),
    }
}

fn parse_args() -> Result<Config, String> {
    let mut args = std::env::args().skip(1);
    Ok(Config {
        width: arg(&mut args, "width", 200)? as usize,
        height: arg(&mut args, "height", 150)? as usize,
        generations: arg(&mut args, "generations", 999_999)?,
        interval: Duration::from_millis(arg(&mut args, "interval-ms", 50)?),
    })
}

fn main() -> io::Result<()> {
    let config = parse_args().unwrap_or_else(|err| {
        eprintln!("{err}");
        eprintln!("usage: conway_life [width] [height] [generations] [interval-ms]");
        process::exit(2);
    });

    let mut sim = Simulation::new(config.width, config.height).randomize();
    let mut out = io::stdout().lock();

    for _ in 0..config.generations {
        rendering::draw_frame(&sim, &mut out)?;
        thread::sleep(config.interval);
        sim.step();
    }

    Ok(())
}
