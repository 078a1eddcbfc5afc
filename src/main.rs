//! Binary entrypoint for the labyrinth CLI.
//!
//! Running with no arguments starts a game in the built-in labyrinth;
//! `--world <file>` swaps in a JSON world seed. Game text goes to stdout,
//! logs to stderr (verbosity via `-v`), so piped transcripts stay clean.
//!
//! See the library crate docs for module-level details: `labyrinth::`.
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};

use labyrinth::game::{Game, World};
use labyrinth::logutil::escape_log;

#[derive(Parser)]
#[command(name = "labyrinth")]
#[command(about = "A treasure-hunt text adventure for the terminal")]
#[command(version)]
struct Cli {
    /// World definition file (JSON); the built-in labyrinth when omitted
    #[arg(short, long)]
    world: Option<String>,

    /// Verbose logging (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    info!("Starting labyrinth v{}", env!("CARGO_PKG_VERSION"));

    let world = match &cli.world {
        Some(path) => {
            World::load(path).with_context(|| format!("failed to load world from {}", path))?
        }
        None => World::canonical(),
    };

    let mut game = Game::new(world);
    println!("{}", game.welcome());

    let stdin = io::stdin();
    // Suppress prompts when input is piped so transcripts stay readable
    let interactive = atty::is(atty::Stream::Stdin);
    let mut line = String::new();

    while !game.is_over() {
        if interactive {
            print!("{}", game.prompt());
            io::stdout().flush()?;
        }
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) => {
                // Input closed: treat it like quitting at the prompt
                println!();
                for message in game.handle_line("quit") {
                    println!("{}", message);
                }
                break;
            }
            Ok(_) => {
                debug!("input: {}", escape_log(line.trim_end()));
                for message in game.handle_line(&line) {
                    println!("{}", message);
                }
            }
            Err(e) => {
                warn!("stdin read failed: {}", e);
                println!("Could not read that ({}). Try again.", e);
            }
        }
    }

    debug!("session ended after {} steps", game.state().steps_taken);
    Ok(())
}

fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    // Default to warnings so gameplay output stays clean; -v opens it up
    let base_level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    builder.format(|fmt, record| {
        writeln!(
            fmt,
            "{} [{}] {}",
            chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
            record.level(),
            record.args()
        )
    });
    builder.init();
}
