//! # Labyrinth - a treasure hunt for the terminal
//!
//! Labyrinth is a single-player, turn-based text adventure. The player
//! walks a small room graph, collects and uses items, answers riddles, and
//! tries to open a locked chest to win. Everything is synchronous and
//! deterministic: "random" events replay identically for the same walk.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use labyrinth::game::{Game, World};
//!
//! fn main() {
//!     let mut game = Game::new(World::canonical());
//!     println!("{}", game.welcome());
//!     for message in game.handle_line("north") {
//!         println!("{}", message);
//!     }
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - The whole engine: world model, state, actions, riddles,
//!   the chest dialog, events, and the [`game::Game`] turn loop
//! - [`logutil`] - Log sanitization helpers for raw player input
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   CLI (main)    │ ← read a line, print the replies
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │   Game session  │ ← dialogs, win check, event roll
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │ World + State   │ ← room graph, tables, inventory
//! └─────────────────┘
//! ```

pub mod game;
pub mod logutil;
