//! Player-facing actions: movement, inventory, item use, and the look and
//! help read-outs. Every action answers with the text the player should
//! see; an invalid action is an ordinary message, never an error.

use log::debug;

use super::state::GameState;
use super::types::{Direction, UseBehavior};
use super::world::World;

fn lost_message(room_id: &str) -> String {
    format!("You seem to be lost! There is no room called {}.", room_id)
}

/// Walk through an exit. A missing exit leaves everything untouched.
pub fn move_player(world: &World, state: &mut GameState, direction: Direction) -> String {
    let room = match world.room(&state.current_room) {
        Some(room) => room,
        None => return lost_message(&state.current_room),
    };
    match room.exits.get(&direction) {
        Some(target) => {
            state.current_room = target.clone();
            state.steps_taken += 1;
            debug!("moved {} to {} (step {})", direction, target, state.steps_taken);
            format!("You go {} and reach the {}.", direction, target)
        }
        None => format!("You can't go {} from here.", direction),
    }
}

/// Pick up an item lying in the current room.
pub fn take_item(world: &mut World, state: &mut GameState, item: &str) -> String {
    let takeable = world.item_def(item).map_or(true, |def| def.takeable);
    let refusal = world
        .item_def(item)
        .and_then(|def| def.take_refusal.clone());

    let room = match world.room_mut(&state.current_room) {
        Some(room) => room,
        None => return lost_message(&state.current_room),
    };
    let index = match room.items.iter().position(|present| present == item) {
        Some(index) => index,
        None => return format!("There is no {} here.", item),
    };
    if !takeable {
        return refusal.unwrap_or_else(|| format!("The {} won't budge.", item));
    }
    room.items.remove(index);
    state.inventory.push(item.to_string());
    debug!("took {} in {}", item, state.current_room);
    format!("You picked up: {}.", item)
}

/// Use an item from the inventory, dispatching on its configured behavior.
pub fn use_item(world: &World, state: &mut GameState, item: &str) -> String {
    if !state.has_item(item) {
        return format!("You don't have a {}.", item);
    }
    let behavior = world.item_def(item).and_then(|def| def.on_use.as_ref());
    match behavior {
        None => format!("You don't know how to use the {}.", item),
        Some(UseBehavior::Flavor { text }) => text.clone(),
        Some(UseBehavior::Container {
            yields,
            discovery,
            empty,
        }) => {
            if state.emptied_containers.contains(item) {
                empty.clone()
            } else {
                state.emptied_containers.insert(item.to_string());
                state.inventory.push(yields.clone());
                debug!("container {} yielded {}", item, yields);
                discovery.clone()
            }
        }
        Some(UseBehavior::Transmute {
            into,
            room,
            success,
            inert,
        }) => {
            if state.current_room == *room {
                state.remove_item(item);
                state.inventory.push(into.clone());
                debug!("{} became {} in {}", item, into, room);
                success.clone()
            } else {
                inert.clone()
            }
        }
    }
}

pub fn show_inventory(state: &GameState) -> String {
    if state.inventory.is_empty() {
        "Your inventory is empty.".to_string()
    } else {
        format!("You are carrying: {}.", state.inventory.join(", "))
    }
}

/// Full description of the current room: header, flavor text, items, exits,
/// and a nudge toward `solve` while the riddle is still open.
pub fn describe_room(world: &World, state: &GameState) -> String {
    let room = match world.room(&state.current_room) {
        Some(room) => room,
        None => return lost_message(&state.current_room),
    };
    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n", room.id.to_uppercase()));
    out.push_str(&room.description);
    out.push('\n');
    if room.items.is_empty() {
        out.push_str("Items: none\n");
    } else {
        out.push_str(&format!("Items: {}\n", room.items.join(", ")));
    }
    let mut exits = Vec::new();
    for direction in Direction::ALL {
        if let Some(target) = room.exits.get(&direction) {
            exits.push(format!("{} -> {}", direction, target));
        }
    }
    if exits.is_empty() {
        out.push_str("Exits: none");
    } else {
        out.push_str(&format!("Exits: {}", exits.join(", ")));
    }
    if room.puzzle.is_some() && !state.solved_puzzles.contains(&room.id) {
        out.push_str("\nSomething here waits to be answered. Try 'solve'.");
    }
    out
}

pub fn show_help(world: &World) -> String {
    let rows: Vec<String> = world
        .commands
        .iter()
        .map(|row| format!("  {:<20} {}", row.name, row.summary))
        .collect();
    format!("Available commands:\n{}", rows.join("\n"))
}
