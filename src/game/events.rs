//! Deterministic random events rolled at the end of each turn, plus the
//! trap they sometimes lead to.

use log::debug;

use super::rng::pseudo_random;
use super::state::GameState;
use super::world::World;

/// Roll for an end-of-turn event. Returns the event text, or `None` when
/// the roll misses. Everything keys off `steps_taken`, so identical walks
/// replay identical events.
pub fn random_event(world: &mut World, state: &mut GameState) -> Option<String> {
    if pseudo_random(state.steps_taken, 10) != 0 {
        return None;
    }
    let kind = pseudo_random(state.steps_taken + 1, 3);
    debug!("event roll hit at step {}: kind {}", state.steps_taken, kind);
    match kind {
        0 => {
            let loot = world.loot_item.clone();
            let here = state.current_room.clone();
            if let Some(room) = world.room_mut(&here) {
                room.items.push(loot.clone());
            }
            Some(format!("You spot a shiny {} on the floor!", loot))
        }
        1 => {
            let mut text = String::from("You hear a strange rustle in the darkness...");
            if state.has_item(&world.scare_ward_item) {
                text.push_str(&format!(
                    " With the {} in your hand, you drive the unseen thing away.",
                    world.scare_ward_item
                ));
            }
            Some(text)
        }
        _ => {
            if state.current_room == world.trap_room && !state.has_item(&world.trap_ward_item) {
                Some(format!("Danger! {}", trigger_trap(state)))
            } else {
                Some("You sense danger nearby, but slip past it.".to_string())
            }
        }
    }
}

/// Spring the trap. A carried item is lost to it; with empty hands the
/// floor itself decides whether the player walks away.
pub fn trigger_trap(state: &mut GameState) -> String {
    let mut text = String::from("The trap snaps shut! The floor shudders under your feet...\n");
    if !state.inventory.is_empty() {
        let index = pseudo_random(state.steps_taken, state.inventory.len() as u64) as usize;
        let lost = state.inventory.remove(index);
        debug!("trap took {} at step {}", lost, state.steps_taken);
        text.push_str(&format!("You lost an item: {}.", lost));
    } else if pseudo_random(state.steps_taken, 10) < 3 {
        state.game_over = true;
        debug!("trap death at step {}", state.steps_taken);
        text.push_str("The floor gives way beneath you. Everything goes dark. Game over.");
    } else {
        text.push_str("You throw yourself aside just in time!");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::world::World;

    #[test]
    fn empty_hands_at_step_zero_are_fatal() {
        let world = World::canonical();
        let mut state = GameState::new(&world);
        let text = trigger_trap(&mut state);
        assert!(state.game_over);
        assert!(text.contains("Game over"));
    }

    #[test]
    fn the_trap_picks_its_victim_by_roll() {
        let world = World::canonical();
        let mut state = GameState::new(&world);
        state.steps_taken = 5;
        state.inventory = vec!["torch".into(), "coin".into(), "sword".into()];
        let expected = state.inventory[pseudo_random(5, 3) as usize].clone();
        let text = trigger_trap(&mut state);
        assert!(text.contains(&format!("You lost an item: {}.", expected)));
        assert_eq!(state.inventory.len(), 2);
        assert!(!state.game_over);
    }

    #[test]
    fn a_dodged_trap_leaves_no_mark() {
        let world = World::canonical();
        let mut state = GameState::new(&world);
        let seed = (0..500)
            .find(|s| pseudo_random(*s, 10) >= 3)
            .expect("some roll must clear the death threshold");
        state.steps_taken = seed;
        let text = trigger_trap(&mut state);
        assert!(text.contains("just in time"));
        assert!(!state.game_over);
    }
}
