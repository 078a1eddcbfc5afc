//! Command parsing and dispatch: one line of player input in, one reply out.

use log::debug;

use super::actions;
use super::puzzle::{self, PuzzleSession, PuzzleStart};
use super::state::GameState;
use super::treasure::{self, TreasureSession, TreasureStart};
use super::types::Direction;
use super::world::World;

/// Player commands recognized by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Look,
    Inventory,
    Take(String),
    Use(String),
    Solve,
    Help,
    Quit,
    /// `go` with a word that is not a direction.
    BadDirection(String),
    /// A known verb missing its argument; carries the usage hint.
    Usage(&'static str),
    /// Empty input line.
    Empty,
    Unknown(String),
}

/// An in-flight dialog that consumes raw input lines until it resolves.
#[derive(Debug)]
pub enum Interaction {
    Riddle(PuzzleSession),
    Chest(TreasureSession),
}

/// What the caller should do with one dispatched command.
#[derive(Debug)]
pub enum Reply {
    /// Print and finish the turn.
    Text(String),
    /// Print, then feed the following lines to the interaction.
    Begin {
        text: String,
        interaction: Interaction,
    },
    /// Print and stop the game.
    Quit(String),
}

/// Tokenize one raw input line into a [`Command`]. Input is case-folded;
/// item arguments keep only their first token.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return Command::Empty;
    }

    if let Some(direction) = Direction::parse(parts[0]) {
        return Command::Move(direction);
    }

    match parts[0] {
        "look" => Command::Look,
        "inventory" | "inv" => Command::Inventory,
        "go" => match parts.get(1) {
            Some(word) => match Direction::parse(word) {
                Some(direction) => Command::Move(direction),
                None => Command::BadDirection((*word).to_string()),
            },
            None => Command::Usage("Usage: go [north|south|east|west|up|down]"),
        },
        "take" => match parts.get(1) {
            Some(item) => Command::Take((*item).to_string()),
            None => Command::Usage("Usage: take [item]"),
        },
        "use" => match parts.get(1) {
            Some(item) => Command::Use((*item).to_string()),
            None => Command::Usage("Usage: use [item]"),
        },
        "solve" => Command::Solve,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(parts[0].to_string()),
    }
}

/// Route one command. Mutation happens in the action functions; the caller
/// handles printing and the end-of-turn sequence.
pub fn dispatch(world: &mut World, state: &mut GameState, input: &str) -> Reply {
    let command = parse_command(input);
    debug!("command parsed: {:?}", command);

    match command {
        Command::Empty => Reply::Text("Enter a command! Type 'help' if you are unsure.".to_string()),
        Command::Move(direction) => Reply::Text(actions::move_player(world, state, direction)),
        Command::BadDirection(word) => Reply::Text(format!("You can't go {} from here.", word)),
        Command::Look => Reply::Text(actions::describe_room(world, state)),
        Command::Inventory => Reply::Text(actions::show_inventory(state)),
        Command::Take(item) => Reply::Text(actions::take_item(world, state, &item)),
        Command::Use(item) => Reply::Text(actions::use_item(world, state, &item)),
        Command::Help => Reply::Text(actions::show_help(world)),
        Command::Usage(hint) => Reply::Text(hint.to_string()),
        Command::Solve => begin_solve(world, state),
        Command::Quit => {
            state.game_over = true;
            debug!("quit after {} steps", state.steps_taken);
            Reply::Quit("Thanks for playing! Goodbye.".to_string())
        }
        Command::Unknown(token) => Reply::Text(format!(
            "Unknown command: {}. Type 'help' for the list of commands.",
            token
        )),
    }
}

/// `solve` goes straight to the chest in the treasure room; everywhere else
/// it opens the room's riddle.
fn begin_solve(world: &mut World, state: &mut GameState) -> Reply {
    if state.current_room == world.treasure_room {
        return match treasure::begin(world, state) {
            TreasureStart::Opened(text) => Reply::Text(text),
            TreasureStart::Locked { session, text } => Reply::Begin {
                text,
                interaction: Interaction::Chest(session),
            },
        };
    }
    match puzzle::begin(world, state) {
        PuzzleStart::NoPuzzle(text) | PuzzleStart::AlreadySolved(text) => Reply::Text(text),
        PuzzleStart::Question { session, text } => Reply::Begin {
            text,
            interaction: Interaction::Riddle(session),
        },
    }
}
