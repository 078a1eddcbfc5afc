// End-to-end walkthroughs of the canonical labyrinth, driven line by line
// through the public Game API exactly the way the CLI drives it.

use labyrinth::game::{Game, World};

/// Feed every line to the game and collect everything it printed.
fn play(game: &mut Game, lines: &[&str]) -> Vec<String> {
    let mut transcript = Vec::new();
    for line in lines {
        transcript.extend(game.handle_line(line));
    }
    transcript
}

#[test]
fn go_north_from_the_entrance_reaches_the_hall() {
    let mut game = Game::new(World::canonical());
    let messages = game.handle_line("go north");
    assert_eq!(game.state().current_room, "hall");
    assert_eq!(game.state().steps_taken, 1);
    assert!(messages[0].contains("hall"), "got {:?}", messages);
}

#[test]
fn walls_do_not_move_the_player() {
    let mut game = Game::new(World::canonical());
    // the entrance has no south exit
    let messages = game.handle_line("south");
    assert!(messages[0].contains("can't go south"));
    assert_eq!(game.state().current_room, "entrance");
    assert_eq!(game.state().steps_taken, 0);
}

#[test]
fn using_an_item_you_do_not_carry_changes_nothing() {
    let mut game = Game::new(World::canonical());
    let messages = game.handle_line("use torch");
    assert!(messages[0].contains("don't have"));
    assert!(game.state().inventory.is_empty());
    assert_eq!(game.state().current_room, "entrance");
}

#[test]
fn the_key_route_wins_the_game() {
    let mut game = Game::new(World::canonical());

    let transcript = play(
        &mut game,
        &[
            "take torch",     // wards off the trap room on the way up
            "north",          // hall
            "west",           // garden
            "take bronze_box",
            "use bronze_box", // yields the rusty_key
            "east",           // hall
            "north",          // trap_room
            "north",          // crystal_cave
            "up",             // treasure_room
            "use rusty_key",  // becomes the treasure_key up here
            "solve",          // the key opens the chest outright
        ],
    );

    assert!(game.is_over());
    assert!(game.has_won());
    assert_eq!(game.state().steps_taken, 6);
    assert!(transcript.iter().any(|m| m.contains("rusty_key")));
    assert!(transcript.iter().any(|m| m.contains("treasure_key")));
    assert!(transcript.iter().any(|m| m.contains("VICTORY")));
    // the chest is gone from the room, and opening it kept the key
    let treasure = game.world().room("treasure_room").unwrap();
    assert!(!treasure.items.iter().any(|item| item == "treasure_chest"));
    assert!(game.state().has_item("treasure_key"));
    assert!(!game.state().has_item("rusty_key"));
}

#[test]
fn the_code_route_wins_without_the_key() {
    let mut game = Game::new(World::canonical());
    play(&mut game, &["take torch", "north", "north", "north", "up"]);
    assert_eq!(game.state().current_room, "treasure_room");

    let chest = game.handle_line("solve");
    assert!(chest[0].contains("locked"), "got {:?}", chest);
    assert_eq!(game.prompt(), "(yes/no): ");

    let prompt = game.handle_line("yes");
    assert!(prompt[0].contains("code"), "got {:?}", prompt);
    assert_eq!(game.prompt(), "Code: ");

    let outcome = game.handle_line("towel");
    assert!(outcome.iter().any(|m| m.contains("You win!")), "got {:?}", outcome);
    assert!(outcome.iter().any(|m| m.contains("VICTORY")));
    assert!(game.is_over());
    assert!(game.has_won());
}

#[test]
fn stepping_back_from_the_chest_leaves_the_game_running() {
    let mut game = Game::new(World::canonical());
    play(&mut game, &["take torch", "north", "north", "north", "up"]);

    game.handle_line("solve");
    let outcome = game.handle_line("no");
    assert!(outcome[0].contains("step away"));
    assert!(!game.is_over());
    assert!(!game.has_won());
    assert_eq!(game.prompt(), "> ");
}

#[test]
fn quitting_ends_the_session_without_a_win() {
    let mut game = Game::new(World::canonical());
    let messages = game.handle_line("quit");
    assert!(messages[0].contains("Thanks for playing"));
    assert!(game.is_over());
    assert!(!game.has_won());
    // further lines fall on deaf ears
    assert!(game.handle_line("north").is_empty());
}

#[test]
fn unknown_commands_and_missing_arguments_cost_nothing() {
    let mut game = Game::new(World::canonical());

    let unknown = game.handle_line("warble");
    assert!(unknown[0].contains("Unknown command: warble"));

    let usage = game.handle_line("take");
    assert!(usage[0].contains("Usage: take"));

    let bad_go = game.handle_line("go sideways");
    assert!(bad_go[0].contains("can't go sideways"));

    assert_eq!(game.state().current_room, "entrance");
    assert_eq!(game.state().steps_taken, 0);
    assert!(game.state().inventory.is_empty());
}

#[test]
fn the_cellar_world_is_playable_to_victory() {
    let world = World::load("data/worlds/cellar.json").unwrap();
    let mut game = Game::new(world);

    play(&mut game, &["take torch", "north", "down"]);
    assert_eq!(game.state().current_room, "vault");

    game.handle_line("solve");
    game.handle_line("yes");
    let outcome = game.handle_line("towel");
    assert!(outcome.iter().any(|m| m.contains("VICTORY")), "got {:?}", outcome);
    assert!(game.has_won());
}
