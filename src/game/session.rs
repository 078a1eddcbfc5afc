//! One running game: the world, the player state, the dialog in progress,
//! and the turn sequence that ties them together.

use log::{debug, info};

use super::actions;
use super::commands::{self, Interaction, Reply};
use super::events;
use super::puzzle::PuzzleReply;
use super::state::GameState;
use super::treasure::{TreasureReply, TreasureStart, TreasureStep};
use super::world::World;

/// True when the player stands in the treasure room and the chest is gone
/// from it. While the chest still sits in its room this is false no matter
/// where the player is.
pub fn check_win_condition(world: &World, state: &GameState) -> bool {
    if state.current_room != world.treasure_room {
        return false;
    }
    match world.room(&world.treasure_room) {
        Some(room) => !room.items.iter().any(|item| item == &world.chest_item),
        None => false,
    }
}

/// A full game.
///
/// [`handle_line`](Self::handle_line) consumes one line of player input and
/// returns every message it produced, in order. The caller only reads and
/// prints; the sequencing (open dialogs, the win check, the event roll)
/// all happens in here.
pub struct Game {
    world: World,
    state: GameState,
    interaction: Option<Interaction>,
}

impl Game {
    pub fn new(world: World) -> Self {
        let state = GameState::new(&world);
        Self {
            world,
            state,
            interaction: None,
        }
    }

    /// Banner and opening description for a fresh game.
    pub fn welcome(&self) -> String {
        let mut out = String::new();
        out.push_str("Welcome to the Treasure Labyrinth!\n");
        out.push_str(&"=".repeat(50));
        out.push('\n');
        out.push_str("Type 'help' to list the commands.\n\n");
        out.push_str(&actions::describe_room(&self.world, &self.state));
        out
    }

    /// Prompt matching the current dialog position.
    pub fn prompt(&self) -> &'static str {
        match &self.interaction {
            None => "> ",
            Some(Interaction::Riddle(_)) => "Your answer: ",
            Some(Interaction::Chest(session)) => match session.step() {
                TreasureStep::ConfirmCode => "(yes/no): ",
                TreasureStep::AwaitingCode => "Code: ",
            },
        }
    }

    pub fn is_over(&self) -> bool {
        self.state.game_over
    }

    pub fn has_won(&self) -> bool {
        check_win_condition(&self.world, &self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process one line of input and return the messages it produced.
    ///
    /// The line either advances the open dialog or runs one command. When
    /// that completes the turn (no dialog left open), the win check and the
    /// event roll run before this returns. Once the game is over, lines are
    /// ignored.
    pub fn handle_line(&mut self, line: &str) -> Vec<String> {
        if self.state.game_over {
            return Vec::new();
        }
        let mut messages = Vec::new();
        match self.interaction.take() {
            Some(Interaction::Riddle(mut session)) => {
                match session.submit(&mut self.world, &mut self.state, line) {
                    PuzzleReply::Retry(text) => {
                        messages.push(text);
                        self.interaction = Some(Interaction::Riddle(session));
                    }
                    PuzzleReply::Solved(text)
                    | PuzzleReply::Trap(text)
                    | PuzzleReply::Abandoned(text) => {
                        messages.push(text);
                        self.finish_turn(&mut messages);
                    }
                    PuzzleReply::Unlock(start) => match start {
                        TreasureStart::Opened(text) => {
                            messages.push(text);
                            self.finish_turn(&mut messages);
                        }
                        TreasureStart::Locked { session, text } => {
                            messages.push(text);
                            self.interaction = Some(Interaction::Chest(session));
                        }
                    },
                }
            }
            Some(Interaction::Chest(mut session)) => {
                match session.submit(&mut self.world, line) {
                    TreasureReply::CodePrompt(text) => {
                        messages.push(text);
                        self.interaction = Some(Interaction::Chest(session));
                    }
                    TreasureReply::SteppedBack(text)
                    | TreasureReply::Opened(text)
                    | TreasureReply::WrongCode(text) => {
                        messages.push(text);
                        self.finish_turn(&mut messages);
                    }
                }
            }
            None => match commands::dispatch(&mut self.world, &mut self.state, line) {
                Reply::Text(text) => {
                    messages.push(text);
                    self.finish_turn(&mut messages);
                }
                Reply::Begin { text, interaction } => {
                    messages.push(text);
                    self.interaction = Some(interaction);
                }
                Reply::Quit(text) => {
                    messages.push(text);
                }
            },
        }
        messages
    }

    /// End-of-turn sequence: victory first, then the event roll.
    fn finish_turn(&mut self, messages: &mut Vec<String>) {
        if self.state.game_over {
            return;
        }
        if check_win_condition(&self.world, &self.state) {
            self.state.game_over = true;
            info!("game won in {} steps", self.state.steps_taken);
            messages.push(format!(
                "\nVICTORY! You found the treasure!\nSteps taken: {}",
                self.state.steps_taken
            ));
            return;
        }
        if let Some(event) = events::random_event(&mut self.world, &mut self.state) {
            debug!("event at step {}", self.state.steps_taken);
            messages.push(event);
        }
    }
}
