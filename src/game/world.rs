//! World definitions: the room graph and the static content tables.
//!
//! A `World` is built once at startup, either from [`World::canonical`] or
//! from a JSON seed file, and validated before play begins. Room item lists
//! are the only part the engine mutates afterwards.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use super::errors::WorldError;
use super::types::{CommandHelp, Direction, ItemDef, Puzzle, Room};

/// Room id where a fresh game starts.
pub const START_ROOM_ID: &str = "entrance";
/// Room id holding the treasure chest.
pub const TREASURE_ROOM_ID: &str = "treasure_room";
/// Room id where hazards and failed riddles bite.
pub const TRAP_ROOM_ID: &str = "trap_room";
/// The chest the whole game is about. Never takeable.
pub const TREASURE_CHEST_ITEM: &str = "treasure_chest";
/// Item that opens the chest outright.
pub const TREASURE_KEY_ITEM: &str = "treasure_key";
/// Item dropped into rooms by lucky event rolls.
pub const LOOT_ITEM: &str = "coin";
/// Carrying this makes trap-room hazards miss.
pub const TRAP_WARD_ITEM: &str = "torch";
/// Carrying this shrugs off scare events.
pub const SCARE_WARD_ITEM: &str = "sword";

const DEFAULT_REWARD: &str = "Correct! The riddle gives way.";

/// Static game content: the room graph plus every table the engine
/// consults. Only `rooms[..].items` changes during play.
#[derive(Debug, Clone)]
pub struct World {
    pub rooms: HashMap<String, Room>,
    /// Per-item behavior. Items with no entry use the defaults.
    pub items: HashMap<String, ItemDef>,
    /// Canonical riddle answer -> other accepted spellings.
    pub alternative_answers: HashMap<String, Vec<String>>,
    /// Room id -> message granted for solving its riddle.
    pub rewards: HashMap<String, String>,
    pub default_reward: String,
    /// Rows of the `help` table.
    pub commands: Vec<CommandHelp>,
    pub start_room: String,
    pub treasure_room: String,
    pub trap_room: String,
    pub chest_item: String,
    pub key_item: String,
    pub loot_item: String,
    pub trap_ward_item: String,
    pub scare_ward_item: String,
}

impl World {
    /// The built-in nine-room labyrinth.
    pub fn canonical() -> Self {
        let mut rooms = HashMap::new();
        for room in canonical_rooms() {
            rooms.insert(room.id.clone(), room);
        }
        Self {
            rooms,
            items: canonical_items(),
            alternative_answers: canonical_alternative_answers(),
            rewards: canonical_rewards(),
            default_reward: DEFAULT_REWARD.to_string(),
            commands: canonical_commands(),
            start_room: START_ROOM_ID.to_string(),
            treasure_room: TREASURE_ROOM_ID.to_string(),
            trap_room: TRAP_ROOM_ID.to_string(),
            chest_item: TREASURE_CHEST_ITEM.to_string(),
            key_item: TREASURE_KEY_ITEM.to_string(),
            loot_item: LOOT_ITEM.to_string(),
            trap_ward_item: TRAP_WARD_ITEM.to_string(),
            scare_ward_item: SCARE_WARD_ITEM.to_string(),
        }
    }

    /// Load and validate a world from a JSON seed file.
    ///
    /// Tables the seed leaves out fall back to the canonical defaults, so a
    /// minimal seed only has to describe its rooms.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WorldError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let seed: WorldSeed =
            serde_json::from_str(&contents).map_err(|e| WorldError::Parse {
                path: path.display().to_string(),
                source: e,
            })?;
        debug!("loaded world seed from {} ({} rooms)", path.display(), seed.rooms.len());
        Self::from_seed(seed)
    }

    fn from_seed(seed: WorldSeed) -> Result<Self, WorldError> {
        let mut rooms = HashMap::new();
        for room_seed in seed.rooms {
            let mut room = Room::new(&room_seed.id, &room_seed.description);
            for (word, target) in room_seed.exits {
                match Direction::parse(&word) {
                    Some(direction) => room = room.with_exit(direction, &target),
                    None => {
                        debug!("room {}: skipping exit with unknown direction '{}'", room_seed.id, word);
                        continue;
                    }
                }
            }
            for item in room_seed.items {
                room = room.with_item(&item);
            }
            if let Some(puzzle) = room_seed.puzzle {
                room = room.with_puzzle(&puzzle.question, &puzzle.answer);
            }
            if rooms.insert(room_seed.id.clone(), room).is_some() {
                return Err(WorldError::DuplicateRoom(room_seed.id));
            }
        }

        let world = Self {
            rooms,
            items: seed.items.unwrap_or_else(canonical_items),
            alternative_answers: seed
                .alternative_answers
                .unwrap_or_else(canonical_alternative_answers),
            rewards: seed.rewards.unwrap_or_else(canonical_rewards),
            default_reward: seed.default_reward.unwrap_or_else(|| DEFAULT_REWARD.to_string()),
            commands: seed.commands.unwrap_or_else(canonical_commands),
            start_room: seed.start_room,
            treasure_room: seed.treasure_room,
            trap_room: seed.trap_room,
            chest_item: seed.chest_item,
            key_item: seed.key_item,
            loot_item: seed.loot_item,
            trap_ward_item: seed.trap_ward_item,
            scare_ward_item: seed.scare_ward_item,
        };
        world.validate()?;
        Ok(world)
    }

    /// Check the invariants the engine relies on: designated rooms exist,
    /// every exit leads somewhere, the chest sits locked in the treasure
    /// room, and no item is seeded into two rooms at once.
    pub fn validate(&self) -> Result<(), WorldError> {
        for (role, id) in [
            ("start", &self.start_room),
            ("treasure", &self.treasure_room),
            ("trap", &self.trap_room),
        ] {
            if !self.rooms.contains_key(id.as_str()) {
                return Err(WorldError::MissingRoom {
                    role,
                    id: id.clone(),
                });
            }
        }

        for room in self.rooms.values() {
            for target in room.exits.values() {
                if !self.rooms.contains_key(target) {
                    return Err(WorldError::UnknownExit {
                        room: room.id.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        let mut placements: HashMap<&str, &str> = HashMap::new();
        for room in self.rooms.values() {
            for item in &room.items {
                if let Some(first) = placements.insert(item.as_str(), room.id.as_str()) {
                    return Err(WorldError::DuplicateItem {
                        item: item.clone(),
                        first: first.to_string(),
                        second: room.id.clone(),
                    });
                }
            }
        }

        if let Some(treasure) = self.rooms.get(&self.treasure_room) {
            if treasure.puzzle.is_none() {
                return Err(WorldError::MissingPuzzle(self.treasure_room.clone()));
            }
            if !treasure.items.iter().any(|item| item == &self.chest_item) {
                return Err(WorldError::MisplacedChest {
                    item: self.chest_item.clone(),
                    room: self.treasure_room.clone(),
                });
            }
        }
        if self.items.get(&self.chest_item).map_or(true, |def| def.takeable) {
            return Err(WorldError::TakeableChest(self.chest_item.clone()));
        }

        Ok(())
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn room_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    pub fn item_def(&self, id: &str) -> Option<&ItemDef> {
        self.items.get(id)
    }

    /// True when `given` matches the `canonical` riddle answer directly or
    /// through the alternative-answers table. The given side is trimmed and
    /// case-folded; table entries are stored lowercase.
    pub fn answer_matches(&self, canonical: &str, given: &str) -> bool {
        let given = given.trim().to_lowercase();
        if given == canonical.to_lowercase() {
            return true;
        }
        self.alternative_answers
            .get(canonical)
            .map_or(false, |alternatives| alternatives.iter().any(|alt| alt == &given))
    }
}

// ============================================================================
// Canonical content
// ============================================================================

fn canonical_rooms() -> Vec<Room> {
    let mut rooms = Vec::new();

    let entrance = Room::new(
        START_ROOM_ID,
        "A narrow stone passage under the old fortress. Moss glows faintly along \
the walls, and somewhere ahead water drips in the dark.",
    )
    .with_exit(Direction::North, "hall")
    .with_item(TRAP_WARD_ITEM);
    rooms.push(entrance);

    let hall = Room::new(
        "hall",
        "A vaulted hall held up by cracked pillars. Four archways lead deeper \
into the labyrinth.",
    )
    .with_exit(Direction::South, START_ROOM_ID)
    .with_exit(Direction::North, TRAP_ROOM_ID)
    .with_exit(Direction::East, "library")
    .with_exit(Direction::West, "garden")
    .with_puzzle("What can you catch but never throw?", "cold");
    rooms.push(hall);

    let garden = Room::new(
        "garden",
        "An underground garden gone wild. Pale vines curl around broken statues, \
and the air smells of wet earth.",
    )
    .with_exit(Direction::East, "hall")
    .with_exit(Direction::North, "alchemy_lab")
    .with_item("bronze_box")
    .with_puzzle(
        "What has roots nobody sees and stands taller than the trees?",
        "mountain",
    );
    rooms.push(garden);

    let alchemy_lab = Room::new(
        "alchemy_lab",
        "Benches of cracked retorts and scorched notes. Whoever worked here left \
in a hurry.",
    )
    .with_exit(Direction::South, "garden")
    .with_exit(Direction::East, "crystal_cave")
    .with_puzzle("Feed me and I live, give me a drink and I die. What am I?", "fire");
    rooms.push(alchemy_lab);

    let library = Room::new(
        "library",
        "Shelves of swollen, rotting tomes. A reading stand still holds a book \
open to a page nobody finished.",
    )
    .with_exit(Direction::West, "hall")
    .with_exit(Direction::North, "mirror_room")
    .with_puzzle("The more you take, the more you leave behind. What am I?", "footsteps");
    rooms.push(library);

    let mirror_room = Room::new(
        "mirror_room",
        "Tall mirrors lean from every wall. Your reflections move a heartbeat \
too late.",
    )
    .with_exit(Direction::South, "library")
    .with_exit(Direction::West, TRAP_ROOM_ID)
    .with_puzzle("What can be broken without being held or touched?", "promise");
    rooms.push(mirror_room);

    let trap_room = Room::new(
        TRAP_ROOM_ID,
        "The floor here is scarred with seams and holes, and it is not stone \
that crunches underfoot. Step carefully.",
    )
    .with_exit(Direction::South, "hall")
    .with_exit(Direction::East, "mirror_room")
    .with_exit(Direction::North, "crystal_cave")
    .with_item(SCARE_WARD_ITEM)
    .with_puzzle("I speak without a mouth and hear without ears. What am I?", "echo");
    rooms.push(trap_room);

    let crystal_cave = Room::new(
        "crystal_cave",
        "Veins of crystal throw back every flicker of light. The ceiling rises \
out of sight.",
    )
    .with_exit(Direction::South, TRAP_ROOM_ID)
    .with_exit(Direction::West, "alchemy_lab")
    .with_exit(Direction::Up, TREASURE_ROOM_ID)
    .with_puzzle("What is always in front of you but can never be seen?", "future");
    rooms.push(crystal_cave);

    let treasure_room = Room::new(
        TREASURE_ROOM_ID,
        "A round chamber with a single pedestal. On it rests a massive \
iron-bound chest.",
    )
    .with_exit(Direction::Down, "crystal_cave")
    .with_item(TREASURE_CHEST_ITEM)
    .with_puzzle("What gets wetter the more it dries?", "towel");
    rooms.push(treasure_room);

    rooms
}

fn canonical_items() -> HashMap<String, ItemDef> {
    let mut items = HashMap::new();
    items.insert(
        TRAP_WARD_ITEM.to_string(),
        ItemDef::flavor("The torch flares up and pushes the shadows back."),
    );
    items.insert(
        SCARE_WARD_ITEM.to_string(),
        ItemDef::flavor("You swing the sword. You feel bolder already."),
    );
    items.insert(
        "bronze_box".to_string(),
        ItemDef::container(
            "rusty_key",
            "You pry the bronze box open and find a rusty_key inside!",
            "The bronze box is empty.",
        ),
    );
    items.insert(
        "rusty_key".to_string(),
        ItemDef::transmute(
            TREASURE_KEY_ITEM,
            TREASURE_ROOM_ID,
            "You clean the rusty_key and it becomes a treasure_key!",
            "You turn the key over in your hands, but nothing here fits it.",
        ),
    );
    items.insert(
        TREASURE_CHEST_ITEM.to_string(),
        ItemDef::fixed("You can't lift the chest, it is far too heavy."),
    );
    items
}

fn canonical_alternative_answers() -> HashMap<String, Vec<String>> {
    let entries: [(&str, &[&str]); 8] = [
        ("cold", &["a cold", "the cold"]),
        ("mountain", &["a mountain", "mountains"]),
        ("fire", &["a fire", "flame", "flames"]),
        ("footsteps", &["steps", "footprints"]),
        ("promise", &["a promise", "promises"]),
        ("echo", &["an echo", "the echo"]),
        ("future", &["the future", "tomorrow"]),
        ("towel", &["a towel"]),
    ];
    entries
        .iter()
        .map(|(answer, alternatives)| {
            (
                answer.to_string(),
                alternatives.iter().map(|alt| alt.to_string()).collect(),
            )
        })
        .collect()
}

fn canonical_rewards() -> HashMap<String, String> {
    let entries = [
        ("hall", "A hidden drawer clicks open. You receive a bronze amulet!"),
        (TRAP_ROOM_ID, "The riddle's magic disarms the trap. The floor stops shifting."),
        ("library", "A loose shelf swings aside, revealing a hidden map of the labyrinth!"),
        ("mirror_room", "The mirrors ripple once and fall still. Your reflections bow."),
        ("crystal_cave", "The crystals flare bright, bathing the cave in warm light."),
        ("alchemy_lab", "Among the scorched notes you find a recipe for a potion of courage!"),
        ("garden", "The garden stirs. Every flower turns toward you and blooms."),
    ];
    entries
        .iter()
        .map(|(room, message)| (room.to_string(), message.to_string()))
        .collect()
}

fn canonical_commands() -> Vec<CommandHelp> {
    vec![
        CommandHelp::new("go <direction>", "move through an exit (north, south, east, west, up, down)"),
        CommandHelp::new("north / south / ...", "move without typing go"),
        CommandHelp::new("look", "describe the room around you"),
        CommandHelp::new("take <item>", "pick up an item"),
        CommandHelp::new("use <item>", "use an item you carry"),
        CommandHelp::new("inventory", "list what you carry"),
        CommandHelp::new("solve", "attempt the riddle in this room"),
        CommandHelp::new("help", "show this table"),
        CommandHelp::new("quit / exit", "leave the game"),
    ]
}

// ============================================================================
// Seed structures matching the JSON world-file format
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct WorldSeed {
    #[serde(default = "default_start_room")]
    start_room: String,
    #[serde(default = "default_treasure_room")]
    treasure_room: String,
    #[serde(default = "default_trap_room")]
    trap_room: String,
    #[serde(default = "default_chest_item")]
    chest_item: String,
    #[serde(default = "default_key_item")]
    key_item: String,
    #[serde(default = "default_loot_item")]
    loot_item: String,
    #[serde(default = "default_trap_ward_item")]
    trap_ward_item: String,
    #[serde(default = "default_scare_ward_item")]
    scare_ward_item: String,
    rooms: Vec<RoomSeed>,
    #[serde(default)]
    items: Option<HashMap<String, ItemDef>>,
    #[serde(default)]
    alternative_answers: Option<HashMap<String, Vec<String>>>,
    #[serde(default)]
    rewards: Option<HashMap<String, String>>,
    #[serde(default)]
    default_reward: Option<String>,
    #[serde(default)]
    commands: Option<Vec<CommandHelp>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RoomSeed {
    id: String,
    description: String,
    /// Direction word -> room id. Unknown direction words are skipped.
    #[serde(default)]
    exits: HashMap<String, String>,
    #[serde(default)]
    items: Vec<String>,
    #[serde(default)]
    puzzle: Option<Puzzle>,
}

fn default_start_room() -> String {
    START_ROOM_ID.to_string()
}

fn default_treasure_room() -> String {
    TREASURE_ROOM_ID.to_string()
}

fn default_trap_room() -> String {
    TRAP_ROOM_ID.to_string()
}

fn default_chest_item() -> String {
    TREASURE_CHEST_ITEM.to_string()
}

fn default_key_item() -> String {
    TREASURE_KEY_ITEM.to_string()
}

fn default_loot_item() -> String {
    LOOT_ITEM.to_string()
}

fn default_trap_ward_item() -> String {
    TRAP_WARD_ITEM.to_string()
}

fn default_scare_ward_item() -> String {
    SCARE_WARD_ITEM.to_string()
}
