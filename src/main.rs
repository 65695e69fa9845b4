//! CLI for dungeon generation

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use dungeon_random::{Config, DungeonGenerator, RenderMode};

/// Random dungeon of rooms and corridors, printed as text
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Canvas width
    #[arg(long, default_value_t = 80)]
    width: usize,

    /// Canvas height
    #[arg(long, default_value_t = 20)]
    height: usize,

    /// Smallest room side, walls included
    #[arg(long, default_value_t = 3)]
    min_room: usize,

    /// Largest room side, walls included
    #[arg(long, default_value_t = 10)]
    max_room: usize,

    /// Shortest corridor
    #[arg(long, default_value_t = 2)]
    min_corridor: usize,

    /// Longest corridor
    #[arg(long, default_value_t = 8)]
    max_corridor: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Rendering mode, `standard` or `dungeon`. Asked for if not given.
    #[arg(short, long)]
    mode: Option<RenderMode>,

    /// Print a summary after the map
    #[arg(short, long)]
    report: bool,
}

/// Ask for the rendering mode until a valid answer or end of input
fn prompt_mode() -> anyhow::Result<RenderMode> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Rendering mode [standard/dungeon]: ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(RenderMode::default());
        };
        match line.context("Failed to read rendering mode")?.parse::<RenderMode>() {
            Ok(mode) => return Ok(mode),
            Err(e) => eprintln!("{}", e),
        }
    }
}

/// Generate dungeon, print output
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = Config {
        canvas_width: args.width,
        canvas_height: args.height,
        min_room_size: args.min_room,
        max_room_size: args.max_room,
        min_corridor_length: args.min_corridor,
        max_corridor_length: args.max_corridor,
    };
    let mut generator =
        DungeonGenerator::new(config, args.seed).context("Invalid generation parameters")?;
    let mode = match args.mode {
        Some(mode) => mode,
        None => prompt_mode()?,
    };

    let dungeon = generator.generate();
    println!("{}", dungeon.render(mode));
    if args.report {
        println!("Seed: {}", generator.seed());
        dungeon.print_report();
    }
    Ok(())
}
