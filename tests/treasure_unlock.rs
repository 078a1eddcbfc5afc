// The chest dialog end to end: the key path, the code path, refusals, and
// the single-attempt rule.

use labyrinth::game::{Game, World};

fn walk_to_the_chest(game: &mut Game) {
    for line in ["take torch", "north", "north", "north", "up"] {
        game.handle_line(line);
    }
    assert_eq!(game.state().current_room, "treasure_room");
}

/// Canonical world with a spare treasure key lying at the entrance, for
/// exercising the key path without the bronze-box detour.
fn world_with_a_spare_key() -> World {
    let mut world = World::canonical();
    if let Some(room) = world.room_mut("entrance") {
        room.items.push("treasure_key".to_string());
    }
    world.validate().unwrap();
    world
}

fn chest_present(game: &Game) -> bool {
    game.world()
        .room("treasure_room")
        .map(|room| room.items.iter().any(|item| item == "treasure_chest"))
        .unwrap_or(false)
}

#[test]
fn a_carried_key_opens_the_chest_on_the_spot() {
    let mut game = Game::new(world_with_a_spare_key());
    game.handle_line("take treasure_key");
    walk_to_the_chest(&mut game);

    let outcome = game.handle_line("solve");
    assert!(outcome[0].contains("clicks"), "got {:?}", outcome);
    assert!(outcome.iter().any(|m| m.contains("VICTORY")));
    assert!(game.is_over());
    assert!(game.has_won());
    assert!(!chest_present(&game));
    // opening the chest does not consume the key
    assert!(game.state().has_item("treasure_key"));
}

#[test]
fn the_stored_riddle_is_never_asked_at_the_chest() {
    let mut game = Game::new(World::canonical());
    walk_to_the_chest(&mut game);

    let opening = game.handle_line("solve");
    assert!(opening[0].contains("(yes/no)"), "got {:?}", opening);
    assert!(
        !opening[0].contains("wetter"),
        "the chest must not leak its riddle, got {:?}",
        opening
    );
}

#[test]
fn anything_but_yes_steps_back_from_the_chest() {
    let mut game = Game::new(World::canonical());
    walk_to_the_chest(&mut game);

    game.handle_line("solve");
    let outcome = game.handle_line("maybe");
    assert!(outcome[0].contains("step away"));
    assert!(chest_present(&game));
    assert!(!game.is_over());
}

#[test]
fn the_code_gets_one_attempt_per_approach() {
    let mut game = Game::new(World::canonical());
    walk_to_the_chest(&mut game);

    game.handle_line("solve");
    game.handle_line("yes");
    let wrong = game.handle_line("opal");
    assert!(wrong[0].contains("Wrong code"), "got {:?}", wrong);
    assert!(chest_present(&game));
    assert!(!game.is_over());

    // no retry loop, but nothing stops another approach
    assert_eq!(game.prompt(), "> ");
    let again = game.handle_line("solve");
    assert!(again[0].contains("(yes/no)"));
}

#[test]
fn an_alternative_spelling_of_the_code_counts() {
    let mut game = Game::new(World::canonical());
    walk_to_the_chest(&mut game);

    game.handle_line("solve");
    game.handle_line("yes");
    let outcome = game.handle_line("a towel");
    assert!(outcome.iter().any(|m| m.contains("You win!")), "got {:?}", outcome);
    assert!(!chest_present(&game));
    assert!(game.has_won());
}

#[test]
fn victory_reports_the_walked_steps() {
    let mut game = Game::new(World::canonical());
    walk_to_the_chest(&mut game);

    game.handle_line("solve");
    game.handle_line("yes");
    let outcome = game.handle_line("towel");
    let banner = outcome
        .iter()
        .find(|m| m.contains("VICTORY"))
        .expect("a victory banner");
    assert!(banner.contains("Steps taken: 4"), "got {:?}", banner);
}
