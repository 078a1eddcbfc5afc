//! Mutable per-game state.

use std::collections::HashSet;

use super::world::World;

/// Everything that changes over the course of one game, apart from room
/// item lists, which live on the [`World`] and are mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Items the player carries, in pickup order.
    pub inventory: Vec<String>,
    /// Id of the room the player stands in. Always a key of the room map.
    pub current_room: String,
    /// Set on quit, trap death, or victory. Nothing mutates after this.
    pub game_over: bool,
    /// Successful moves so far. Doubles as the seed for event rolls.
    pub steps_taken: u64,
    /// Rooms whose riddle has been answered. Grows only.
    pub solved_puzzles: HashSet<String>,
    /// Containers already opened, so each only ever yields once.
    pub emptied_containers: HashSet<String>,
}

impl GameState {
    /// Fresh state positioned at the world's start room.
    pub fn new(world: &World) -> Self {
        Self {
            inventory: Vec::new(),
            current_room: world.start_room.clone(),
            game_over: false,
            steps_taken: 0,
            solved_puzzles: HashSet::new(),
            emptied_containers: HashSet::new(),
        }
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|carried| carried == item)
    }

    /// Remove one `item` from the inventory, keeping the order of the rest.
    /// Returns false when the item was not carried.
    pub fn remove_item(&mut self, item: &str) -> bool {
        match self.inventory.iter().position(|carried| carried == item) {
            Some(index) => {
                self.inventory.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::world::World;

    #[test]
    fn fresh_state_starts_at_the_start_room() {
        let world = World::canonical();
        let state = GameState::new(&world);
        assert_eq!(state.current_room, world.start_room);
        assert_eq!(state.steps_taken, 0);
        assert!(!state.game_over);
        assert!(state.inventory.is_empty());
    }

    #[test]
    fn remove_item_keeps_order() {
        let world = World::canonical();
        let mut state = GameState::new(&world);
        state.inventory = vec!["torch".into(), "coin".into(), "sword".into()];
        assert!(state.remove_item("coin"));
        assert_eq!(state.inventory, vec!["torch", "sword"]);
        assert!(!state.remove_item("coin"));
    }
}
