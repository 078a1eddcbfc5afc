//! The game engine: world model, player state, actions, riddles, events,
//! and the turn loop that ties them together. The CLI in `main.rs` only
//! reads lines and prints what [`Game::handle_line`] returns.

pub mod actions;
pub mod commands;
pub mod errors;
pub mod events;
pub mod puzzle;
pub mod rng;
pub mod session;
pub mod state;
pub mod treasure;
pub mod types;
pub mod world;

pub use commands::{dispatch, parse_command, Command, Interaction, Reply};
pub use errors::WorldError;
pub use events::{random_event, trigger_trap};
pub use puzzle::{PuzzleReply, PuzzleSession, PuzzleStart, PuzzleState};
pub use rng::pseudo_random;
pub use session::{check_win_condition, Game};
pub use state::GameState;
pub use treasure::{TreasureReply, TreasureSession, TreasureStart, TreasureStep};
pub use types::{CommandHelp, Direction, ItemDef, Puzzle, Room, UseBehavior};
pub use world::World;
