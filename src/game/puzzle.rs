//! Riddle solving as an explicit state machine.
//!
//! `solve` opens a [`PuzzleSession`]; every following input line is fed to
//! [`PuzzleSession::submit`] until the session reaches a terminal state.
//! The caller owns the line loop, which is what makes the whole flow
//! scriptable in tests.

use log::debug;

use super::events;
use super::state::GameState;
use super::treasure::{self, TreasureStart};
use super::world::World;

/// Lifecycle of one riddle attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleState {
    AwaitingAnswer,
    Solved,
    Abandoned,
}

/// One open riddle. Created by [`begin`], driven by [`submit`](Self::submit).
#[derive(Debug)]
pub struct PuzzleSession {
    room_id: String,
    state: PuzzleState,
}

/// Outcome of asking for the riddle in the current room.
#[derive(Debug)]
pub enum PuzzleStart {
    /// Nothing to solve here.
    NoPuzzle(String),
    /// This room's riddle is already done.
    AlreadySolved(String),
    /// The riddle is open; show the question and await answers.
    Question { session: PuzzleSession, text: String },
}

/// Outcome of one submitted answer.
#[derive(Debug)]
pub enum PuzzleReply {
    /// Correct answer in an ordinary room. Terminal.
    Solved(String),
    /// Correct answer in the treasure room hands over to the chest.
    Unlock(TreasureStart),
    /// Wrong answer in the trap room. Terminal, the trap has spoken.
    Trap(String),
    /// Wrong answer elsewhere; the session stays open.
    Retry(String),
    /// Blank answer; the player walked away. Terminal.
    Abandoned(String),
}

/// Ask for the riddle in the player's current room.
pub fn begin(world: &World, state: &GameState) -> PuzzleStart {
    let room = match world.room(&state.current_room) {
        Some(room) => room,
        None => return PuzzleStart::NoPuzzle("There is nothing to solve here.".to_string()),
    };
    let puzzle = match &room.puzzle {
        Some(puzzle) => puzzle,
        None => return PuzzleStart::NoPuzzle("There is nothing to solve here.".to_string()),
    };
    if state.solved_puzzles.contains(&room.id) {
        return PuzzleStart::AlreadySolved(
            "You have already solved the riddle in this room.".to_string(),
        );
    }
    debug!("riddle opened in {}", room.id);
    PuzzleStart::Question {
        session: PuzzleSession {
            room_id: room.id.clone(),
            state: PuzzleState::AwaitingAnswer,
        },
        text: puzzle.question.clone(),
    }
}

impl PuzzleSession {
    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    pub fn state(&self) -> PuzzleState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state != PuzzleState::AwaitingAnswer
    }

    /// Feed one answer line. Blank gives up; a wrong answer in the trap
    /// room springs the trap; a wrong answer anywhere else leaves the
    /// session open for another try.
    pub fn submit(&mut self, world: &mut World, state: &mut GameState, answer: &str) -> PuzzleReply {
        let answer = answer.trim();
        if answer.is_empty() {
            self.state = PuzzleState::Abandoned;
            debug!("riddle abandoned in {}", self.room_id);
            return PuzzleReply::Abandoned("You step back from the riddle.".to_string());
        }

        let canonical = world
            .room(&self.room_id)
            .and_then(|room| room.puzzle.as_ref())
            .map(|puzzle| puzzle.answer.clone());
        let canonical = match canonical {
            Some(canonical) => canonical,
            None => {
                self.state = PuzzleState::Abandoned;
                return PuzzleReply::Abandoned("The riddle fades away.".to_string());
            }
        };

        if world.answer_matches(&canonical, answer) {
            self.state = PuzzleState::Solved;
            state.solved_puzzles.insert(self.room_id.clone());
            debug!("riddle solved in {}", self.room_id);
            if self.room_id == world.treasure_room {
                return PuzzleReply::Unlock(treasure::begin(world, state));
            }
            let reward = world
                .rewards
                .get(&self.room_id)
                .cloned()
                .unwrap_or_else(|| world.default_reward.clone());
            return PuzzleReply::Solved(reward);
        }

        if self.room_id == world.trap_room {
            self.state = PuzzleState::Abandoned;
            let trap = events::trigger_trap(state);
            return PuzzleReply::Trap(format!("Wrong answer! {}", trap));
        }

        PuzzleReply::Retry("Wrong. Try again, or press Enter to step away.".to_string())
    }
}
