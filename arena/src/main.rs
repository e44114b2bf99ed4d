//! `orchard-arena`: pit two strategies against each other on seeded boards.

use std::io::{self, Write};

use clap::Parser;
use crossterm::style::{Color, Stylize};
use orchard_agent::StrategyKind;
use orchard_arena::{Arena, ArenaConfig, Matchup, Seat};
use orchard_core::Point;

#[derive(Parser, Debug)]
#[command(name = "orchard-arena")]
#[command(about = "Play fruit-collecting matches between two agent strategies")]
struct Cli {
    #[arg(long, default_value_t = 10)]
    width: i32,
    #[arg(long, default_value_t = 10)]
    height: i32,
    /// Number of fruit categories
    #[arg(long, default_value_t = 5)]
    types: u32,
    /// Maximum (odd) number of items per category
    #[arg(long, default_value_t = 7)]
    max_per_type: u32,
    #[arg(long, default_value_t = 200)]
    turn_limit: u32,
    /// Seed of the first match; later matches count up from it
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Strategy of the first player (greedy or planner)
    #[arg(long, default_value_t = StrategyKind::Planner)]
    first: StrategyKind,
    /// Strategy of the second player (greedy or planner)
    #[arg(long, default_value_t = StrategyKind::Greedy)]
    second: StrategyKind,
    #[arg(long, default_value_t = 1)]
    matches: u32,
    /// Print each match's starting board
    #[arg(long)]
    show_board: bool,
}

const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::Blue,
];

fn print_board(out: &mut impl Write, arena: &Arena) -> io::Result<()> {
    let board = arena.board();
    let start = arena.position(Seat::First);
    for y in 0..board.height() {
        for x in 0..board.width() {
            let p = Point::new(x, y);
            match board.fruit_at(p) {
                _ if p == start => write!(out, "{} ", "@".bold())?,
                Some(f) => {
                    let color = PALETTE[(f.id() as usize - 1) % PALETTE.len()];
                    write!(out, "{} ", f.id().to_string().with(color))?
                }
                None => write!(out, "{} ", ".".dark_grey())?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let base = ArenaConfig {
        width: cli.width,
        height: cli.height,
        fruit_types: cli.types,
        max_per_type: cli.max_per_type,
        turn_limit: cli.turn_limit,
        seed: cli.seed,
    };
    base.validate()?;

    let kinds = [cli.first, cli.second];
    let mut matchup = Matchup::new(kinds);
    let mut stdout = io::stdout().lock();
    let (mut first, mut second, mut draws) = (0, 0, 0);
    for i in 0..cli.matches {
        let config = ArenaConfig {
            seed: base.seed.wrapping_add(i as u64),
            ..base
        };
        if cli.show_board {
            print_board(&mut stdout, &Arena::new(config)?)?;
        }
        let outcome = matchup.play(config)?;
        writeln!(stdout, "match {} (seed {}): {outcome}", i + 1, config.seed)?;
        match outcome.winner {
            Some(Seat::First) => first += 1,
            Some(Seat::Second) => second += 1,
            None => draws += 1,
        }
    }
    writeln!(
        stdout,
        "{} (first) {first} - {second} {} (second), {draws} draws",
        kinds[0], kinds[1]
    )?;
    Ok(())
}
