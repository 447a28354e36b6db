use crate::error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// A letter tile `A`..`Z`.
///
/// Internally stored as the index `0..26`, so it can be used directly to
/// address a [`LetterCounts`](crate::LetterCounts).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Letter(u8);

impl Letter {
    /// Number of different letters
    pub const COUNT: usize = 26;

    /// Create letter from index `0..26`, or None if out of range.
    pub fn from_index(index: usize) -> Option<Letter> {
        if index < Self::COUNT {
            Some(Letter(index as u8))
        } else {
            None
        }
    }

    /// Index `0..26` of this letter.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Uppercase character for this letter.
    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Iterate over `A`..`Z`.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..Self::COUNT as u8).map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = Error;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch.to_ascii_uppercase() {
            uc @ 'A'..='Z' => Ok(Letter(uc as u8 - b'A')),
            _ => Err(Error::InvalidLetter(ch)),
        }
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.to_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Encode a word as a list of letters. Lowercase input is accepted.
/// ## Errors
/// [`InvalidLetter`](Error::InvalidLetter) if a character is not in `a`..`z` or `A`..`Z`.
/// ## Examples
/// ```
/// use wordgame_engine::{encode, Error};
/// let letters = encode("Cat")?;
/// let word: String = letters.into_iter().map(char::from).collect();
/// assert_eq!(word, "CAT");
/// # Ok::<(), Error>(())
/// ```
pub fn encode(word: &str) -> Result<Vec<Letter>, Error> {
    word.chars().map(Letter::try_from).collect()
}
