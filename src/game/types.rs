use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Compass and vertical directions the labyrinth uses for exits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl Direction {
    /// Every direction, in the order exit listings are printed.
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse a direction word or its single-letter alias, any case.
    pub fn parse(token: &str) -> Option<Direction> {
        match token.to_lowercase().as_str() {
            "n" | "north" => Some(Direction::North),
            "s" | "south" => Some(Direction::South),
            "e" | "east" => Some(Direction::East),
            "w" | "west" => Some(Direction::West),
            "u" | "up" => Some(Direction::Up),
            "d" | "down" => Some(Direction::Down),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        write!(f, "{}", name)
    }
}

/// A riddle attached to a room: the question asked by `solve` and the
/// canonical answer. Alternative spellings live in the world's answer table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Puzzle {
    pub question: String,
    pub answer: String,
}

impl Puzzle {
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

/// One room of the labyrinth. `items` is the only part that changes during
/// play; everything else is fixed once the world is loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub exits: HashMap<Direction, String>,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub puzzle: Option<Puzzle>,
}

impl Room {
    pub fn new(id: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            exits: HashMap::new(),
            items: Vec::new(),
            puzzle: None,
        }
    }

    pub fn with_exit(mut self, direction: Direction, destination: &str) -> Self {
        self.exits.insert(direction, destination.to_string());
        self
    }

    pub fn with_item(mut self, item: &str) -> Self {
        self.items.push(item.to_string());
        self
    }

    pub fn with_puzzle(mut self, question: &str, answer: &str) -> Self {
        self.puzzle = Some(Puzzle::new(question, answer));
        self
    }
}

/// What happens when an item is used from the inventory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UseBehavior {
    /// Print a message, change nothing (torch, sword).
    Flavor { text: String },
    /// First use grants the contained item; afterwards the box is empty.
    Container {
        yields: String,
        discovery: String,
        empty: String,
    },
    /// In `room`, swap the used item for `into`; anywhere else print `inert`.
    Transmute {
        into: String,
        room: String,
        success: String,
        inert: String,
    },
}

/// Static per-item configuration. Items with no entry fall back to the
/// defaults: takeable, nothing special on use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemDef {
    #[serde(default = "default_takeable")]
    pub takeable: bool,
    #[serde(default)]
    pub take_refusal: Option<String>,
    #[serde(default)]
    pub on_use: Option<UseBehavior>,
}

fn default_takeable() -> bool {
    true
}

impl Default for ItemDef {
    fn default() -> Self {
        Self {
            takeable: true,
            take_refusal: None,
            on_use: None,
        }
    }
}

impl ItemDef {
    /// Takeable item whose use only prints `text`.
    pub fn flavor(text: &str) -> Self {
        Self {
            on_use: Some(UseBehavior::Flavor {
                text: text.to_string(),
            }),
            ..Self::default()
        }
    }

    /// Container that yields `yields` exactly once.
    pub fn container(yields: &str, discovery: &str, empty: &str) -> Self {
        Self {
            on_use: Some(UseBehavior::Container {
                yields: yields.to_string(),
                discovery: discovery.to_string(),
                empty: empty.to_string(),
            }),
            ..Self::default()
        }
    }

    /// Item that turns into `into` when used in `room`.
    pub fn transmute(into: &str, room: &str, success: &str, inert: &str) -> Self {
        Self {
            on_use: Some(UseBehavior::Transmute {
                into: into.to_string(),
                room: room.to_string(),
                success: success.to_string(),
                inert: inert.to_string(),
            }),
            ..Self::default()
        }
    }

    /// Scenery that refuses to be picked up.
    pub fn fixed(refusal: &str) -> Self {
        Self {
            takeable: false,
            take_refusal: Some(refusal.to_string()),
            on_use: None,
        }
    }
}

/// One row of the `help` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandHelp {
    pub name: String,
    pub summary: String,
}

impl CommandHelp {
    pub fn new(name: &str, summary: &str) -> Self {
        Self {
            name: name.to_string(),
            summary: summary.to_string(),
        }
    }
}
