use crate::board::Orientation;
use crate::tiles::Letter;
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded wordfile
    #[cfg(all(feature = "serde", feature = "bincode"))]
    #[error("Wordfile {0} could not be deserialized")]
    WordlistDeserializeError(String),

    /// Error writing bincoded wordfile
    #[cfg(all(feature = "serde", feature = "bincode"))]
    #[error("Wordfile {0} could not be serialized")]
    WordlistSerializeError(String),

    /// The word is not in the lexicon
    #[error("Word \"{0}\" is not in the lexicon")]
    WordNotInLexicon(String),

    /// Attempt to place (part of) a word outside the board
    #[error("Playing {len} tiles at row={row}, col={col} ({orientation}) does not fit")]
    PlacementOutOfBounds {
        row: usize,
        col: usize,
        orientation: Orientation,
        len: usize,
    },

    /// Attempt to replace a tile already on the board with a different letter
    #[error("Cell at row={row}, col={col} holds {found}, can not place {letter}")]
    PlacementConflict {
        row: usize,
        col: usize,
        found: Letter,
        letter: Letter,
    },

    /// The rack does not hold enough tiles for the new cells
    #[error("Need {needed} tile(s) {letter}, rack has {available}")]
    InsufficientTiles {
        letter: Letter,
        needed: usize,
        available: usize,
    },

    /// A play must contain at least one letter
    #[error("Empty word")]
    EmptyWord,

    /// Character is not one of `A`..`Z`
    #[error("Invalid letter '{0}'")]
    InvalidLetter(char),

    /// Orientation must be `H` or `V`
    #[error("Invalid orientation '{0}' (expect H or V)")]
    InvalidOrientation(char),

    /// No room for another tile on the rack
    #[error("Rack is full")]
    RackFull,

    /// The game has no players
    #[error("Game has no players")]
    NoPlayers,

    /// Every letter of the word is already on the board
    #[error("Word does not place any new tile")]
    NoTilesPlaced,

    /// Error parsing board state from strings
    #[error("Invalid number of rows {0} (expect 15)")]
    InvalidRowCount(usize),

    /// Parsing a row on the board needs 15 cells
    #[error("Invalid row \"{0}\": length {1}, expect 15")]
    InvalidRowLength(String, usize),
}
