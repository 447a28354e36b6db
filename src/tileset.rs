//! The letter scoring table and tile distribution.
use crate::tiles::Letter;
use std::convert::TryFrom;

/// letter, count, points
type TileInfo = (char, u32, u32);

/// Tile distribution and points per letter, `A`..`Z`.
/// The counts add up to a bag of 134 tiles used to refill racks.
pub const TILESET: [TileInfo; Letter::COUNT] = [
    ('A', 12, 1),
    ('B', 4, 3),
    ('C', 7, 3),
    ('D', 4, 2),
    ('E', 12, 1),
    ('F', 4, 4),
    ('G', 4, 2),
    ('H', 2, 4),
    ('I', 13, 1),
    ('J', 1, 8),
    ('K', 1, 5),
    ('L', 6, 1),
    ('M', 6, 3),
    ('N', 6, 1),
    ('O', 12, 1),
    ('P', 4, 3),
    ('Q', 2, 10),
    ('R', 7, 1),
    ('S', 7, 1),
    ('T', 7, 1),
    ('U', 4, 1),
    ('V', 4, 4),
    ('W', 1, 4),
    ('X', 1, 8),
    ('Y', 1, 4),
    ('Z', 2, 10),
];

/// Return the points for `letter`.
pub fn points(letter: Letter) -> u32 {
    TILESET[letter.index()].2
}

/// Return the number of tiles with `letter` in the distribution.
pub fn count(letter: Letter) -> u32 {
    TILESET[letter.index()].1
}

/// Return the points for a character in either case, or 0 if it is not a letter.
pub fn letter_points(ch: char) -> u32 {
    Letter::try_from(ch).map_or(0, points)
}

/// Return the sum of the letter points of `word`.
/// ## Examples
/// ```
/// use wordgame_engine::word_score;
/// assert_eq!(word_score("card"), 7);
/// ```
pub fn word_score(word: &str) -> u32 {
    word.chars().map(letter_points).sum()
}
