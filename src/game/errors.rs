use thiserror::Error;

/// Errors that can arise while loading or validating a world definition.
#[derive(Debug, Error)]
pub enum WorldError {
    /// Wrapper around IO errors (seed file reads).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The seed file was not valid JSON for the expected shape.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two rooms in the seed share one id.
    #[error("duplicate room id: {0}")]
    DuplicateRoom(String),

    /// An exit points at a room that does not exist.
    #[error("room {room} has an exit to unknown room {target}")]
    UnknownExit { room: String, target: String },

    /// A designated room (start, treasure, trap) is missing from the map.
    #[error("{role} room {id} is not defined")]
    MissingRoom { role: &'static str, id: String },

    /// The treasure room carries no puzzle, so the chest would have no code.
    #[error("treasure room {0} must define a puzzle")]
    MissingPuzzle(String),

    /// The chest must stay scenery; a takeable chest breaks the win check.
    #[error("chest item {0} must not be takeable")]
    TakeableChest(String),

    /// The chest has to start inside the treasure room.
    #[error("chest item {item} must start in treasure room {room}")]
    MisplacedChest { item: String, room: String },

    /// The same item is seeded into more than one room.
    #[error("item {item} is placed in both {first} and {second}")]
    DuplicateItem {
        item: String,
        first: String,
        second: String,
    },
}
