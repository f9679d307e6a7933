use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use ghostfleet::{init_logging, AttackEvent, Board, Layout, Player, Target};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board layout file: a `lines x columns` header followed by one
    /// `symbol size row col H|V color` record per ship.
    layout: PathBuf,

    /// Player name used in the end-of-game summary.
    #[arg(long, default_value = "")]
    name: String,

    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,

    /// Reveal ship positions before every shot (the fleet still moves before
    /// the bomb lands).
    #[arg(long)]
    reveal: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let layout = Layout::load(&cli.layout)?;
    let board = Board::new(&layout)?;
    let mut player = Player::new(&cli.name, board);

    println!(
        "{}: {} ships on a {} x {} sea. Sink them all.",
        player.name(),
        player.ships_left(),
        player.board().num_lines(),
        player.board().num_columns(),
    );

    let mut turns = 0u64;
    let stdin = io::stdin();
    while !player.is_fleet_destroyed() {
        println!();
        print!("{}", player.show_board(cli.reveal));

        print!("Target (row letter + column letter, e.g. Bc): ");
        io::stdout().flush()?;
        let mut buf = String::new();
        if stdin.read_line(&mut buf)? == 0 {
            println!();
            log::info!("input exhausted, abandoning game");
            return Ok(());
        }
        let input = buf.trim();
        if input.is_empty() {
            continue;
        }

        let bomb = match player.get_bomb(input) {
            Ok(bomb) => bomb,
            Err(err) => {
                println!("{}.", err);
                continue;
            }
        };

        let start = Instant::now();
        let event = player.attack_board(&mut rng, &bomb);
        player.add_time_elapsed(start.elapsed().as_secs());
        turns += 1;

        narrate(event, bomb.target());
    }

    println!(
        "{} sank the fleet in {} shots ({}s of play).",
        player.name(),
        turns,
        player.time_elapsed(),
    );
    Ok(())
}

fn narrate(event: AttackEvent, target: Target) {
    match event {
        AttackEvent::Missed => println!("You have missed the ships."),
        AttackEvent::Rehit => {
            println!("You have hit a part of a ship that had already been damaged.")
        }
        AttackEvent::Hit {
            symbol,
            color,
            destroyed,
        } => {
            println!("You have hit {}.", paint(symbol, color));
            if destroyed {
                println!("You have sunk the ship.");
            }
        }
    }
    println!("The bomb fell at {}.", target);
}

fn paint(symbol: char, color: u8) -> String {
    format!("\x1b[38;5;{}m{}\x1b[0m", color, symbol)
}
