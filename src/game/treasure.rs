//! Opening the treasure chest: instantly with the right key, or through a
//! short yes/no dialog and a single code attempt.

use log::debug;

use super::state::GameState;
use super::world::World;

/// Where the chest dialog stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreasureStep {
    /// Asked "try entering a code? (yes/no)".
    ConfirmCode,
    /// Waiting for the one code attempt.
    AwaitingCode,
}

/// One keyless approach to the chest.
#[derive(Debug)]
pub struct TreasureSession {
    step: TreasureStep,
}

/// Outcome of approaching the chest.
#[derive(Debug)]
pub enum TreasureStart {
    /// The key was in hand; the chest is open. Terminal.
    Opened(String),
    /// No key: the code dialog is waiting on a yes/no.
    Locked { session: TreasureSession, text: String },
}

/// Outcome of one dialog line.
#[derive(Debug)]
pub enum TreasureReply {
    /// Player said yes; now waiting for the code itself.
    CodePrompt(String),
    /// Player declined. Terminal.
    SteppedBack(String),
    /// Code accepted, chest open. Terminal.
    Opened(String),
    /// Code rejected, chest still locked. Terminal.
    WrongCode(String),
}

/// Approach the chest. With the key in the inventory it opens at once; the
/// key stays with the player afterwards. Without it, a dialog starts.
pub fn begin(world: &mut World, state: &GameState) -> TreasureStart {
    if state.has_item(&world.key_item) {
        let key = world.key_item.clone();
        let victory = open_chest(world);
        debug!("chest opened with {}", key);
        return TreasureStart::Opened(format!(
            "You slide the {} into the lock and it clicks. The chest swings open!\n{}",
            key, victory
        ));
    }
    TreasureStart::Locked {
        session: TreasureSession {
            step: TreasureStep::ConfirmCode,
        },
        text: "The chest is locked tight and you have no key. Try entering a code? (yes/no)"
            .to_string(),
    }
}

/// Take the chest out of the treasure room and report the win.
fn open_chest(world: &mut World) -> String {
    let chest = world.chest_item.clone();
    let treasure_room = world.treasure_room.clone();
    if let Some(room) = world.room_mut(&treasure_room) {
        room.items.retain(|item| item != &chest);
    }
    "The treasure is yours! You win!".to_string()
}

impl TreasureSession {
    pub fn step(&self) -> TreasureStep {
        self.step
    }

    /// Feed one dialog line. Only an exact "yes" (any case) moves on to the
    /// code; the code gets a single attempt against the treasure room's
    /// stored answer.
    pub fn submit(&mut self, world: &mut World, input: &str) -> TreasureReply {
        match self.step {
            TreasureStep::ConfirmCode => {
                if input.trim().eq_ignore_ascii_case("yes") {
                    self.step = TreasureStep::AwaitingCode;
                    TreasureReply::CodePrompt("Enter the code:".to_string())
                } else {
                    TreasureReply::SteppedBack("You step away from the chest.".to_string())
                }
            }
            TreasureStep::AwaitingCode => {
                let code = world
                    .room(&world.treasure_room)
                    .and_then(|room| room.puzzle.as_ref())
                    .map(|puzzle| puzzle.answer.clone());
                match code {
                    Some(code) if world.answer_matches(&code, input) => {
                        let victory = open_chest(world);
                        debug!("chest opened by code");
                        TreasureReply::Opened(format!(
                            "The code is right! The lock springs open. {}",
                            victory
                        ))
                    }
                    _ => TreasureReply::WrongCode(
                        "Wrong code. The chest stays locked.".to_string(),
                    ),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::world::World;

    fn at_the_chest() -> (World, GameState) {
        let world = World::canonical();
        let mut state = GameState::new(&world);
        state.current_room = world.treasure_room.clone();
        (world, state)
    }

    fn chest_present(world: &World) -> bool {
        world
            .room(&world.treasure_room)
            .map(|room| room.items.iter().any(|item| item == &world.chest_item))
            .unwrap_or(false)
    }

    #[test]
    fn the_key_opens_the_chest_and_survives() {
        let (mut world, mut state) = at_the_chest();
        state.inventory.push("treasure_key".to_string());
        match begin(&mut world, &state) {
            TreasureStart::Opened(text) => assert!(text.contains("You win!")),
            TreasureStart::Locked { .. } => panic!("expected the key to open the chest"),
        }
        assert!(!chest_present(&world));
        assert!(state.has_item("treasure_key"));
    }

    #[test]
    fn declining_the_code_leaves_everything_as_it_was() {
        let (mut world, state) = at_the_chest();
        let mut session = match begin(&mut world, &state) {
            TreasureStart::Locked { session, .. } => session,
            TreasureStart::Opened(_) => panic!("no key was carried"),
        };
        assert!(matches!(
            session.submit(&mut world, "no"),
            TreasureReply::SteppedBack(_)
        ));
        assert!(chest_present(&world));
    }

    #[test]
    fn only_yes_reaches_the_code_prompt() {
        let (mut world, state) = at_the_chest();
        let mut session = match begin(&mut world, &state) {
            TreasureStart::Locked { session, .. } => session,
            TreasureStart::Opened(_) => panic!("no key was carried"),
        };
        assert!(matches!(
            session.submit(&mut world, "YES"),
            TreasureReply::CodePrompt(_)
        ));
        assert_eq!(session.step(), TreasureStep::AwaitingCode);
    }

    #[test]
    fn the_right_code_wins_even_spelled_loosely() {
        let (mut world, state) = at_the_chest();
        let mut session = match begin(&mut world, &state) {
            TreasureStart::Locked { session, .. } => session,
            TreasureStart::Opened(_) => panic!("no key was carried"),
        };
        session.submit(&mut world, "yes");
        match session.submit(&mut world, "a towel") {
            TreasureReply::Opened(text) => assert!(text.contains("You win!")),
            other => panic!("expected the chest to open, got {:?}", other),
        }
        assert!(!chest_present(&world));
    }

    #[test]
    fn a_wrong_code_keeps_the_chest_locked() {
        let (mut world, state) = at_the_chest();
        let mut session = match begin(&mut world, &state) {
            TreasureStart::Locked { session, .. } => session,
            TreasureStart::Opened(_) => panic!("no key was carried"),
        };
        session.submit(&mut world, "yes");
        assert!(matches!(
            session.submit(&mut world, "gold"),
            TreasureReply::WrongCode(_)
        ));
        assert!(chest_present(&world));
    }
}
