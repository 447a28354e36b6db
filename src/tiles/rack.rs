use super::{Letter, LetterCounts};
use crate::error::Error;
use std::convert::TryFrom;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use tinyvec::ArrayVec;

/// Maximum number of tiles a player holds
pub const RACK_SIZE: usize = 7;

type Tiles = ArrayVec<[Letter; RACK_SIZE]>;

/// The letter tiles of a player. Duplicates are allowed, order is irrelevant.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Rack(Tiles);

impl Deref for Rack {
    type Target = [Letter];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Rack {
    pub fn new() -> Rack {
        Rack(Tiles::new())
    }

    pub fn is_full(&self) -> bool {
        self.0.len() == RACK_SIZE
    }

    /// Add a tile.
    /// ## Errors
    /// [`RackFull`](Error::RackFull) if the rack already holds `RACK_SIZE` tiles.
    pub fn push(&mut self, letter: Letter) -> Result<(), Error> {
        if self.is_full() {
            return Err(Error::RackFull);
        }
        self.0.push(letter);
        Ok(())
    }

    /// Remove one tile with `letter`. Returns false if the rack has none.
    pub fn remove(&mut self, letter: Letter) -> bool {
        match self.0.iter().position(|&l| l == letter) {
            Some(i) => {
                self.0.remove(i);
                true
            }
            None => false,
        }
    }

    /// Count the tiles per letter.
    pub fn counts(&self) -> LetterCounts {
        self.0.iter().copied().collect()
    }
}

/// Parse a rack from a string like `"CATXXXX"`.
impl FromStr for Rack {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rack = Rack::new();
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            rack.push(Letter::try_from(ch)?)?;
        }
        Ok(rack)
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = self
            .iter()
            .map(Letter::to_string)
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let rack: Rack = "cat xx".parse().unwrap();
        assert_eq!(rack.len(), 5);
        assert_eq!(rack.to_string(), "C A T X X");
    }

    #[test]
    #[should_panic(expected = "RackFull")]
    fn test_rack_full() {
        "ABCDEFGH".parse::<Rack>().unwrap();
    }

    #[test]
    fn test_remove() {
        let mut rack: Rack = "AXA".parse().unwrap();
        let a = Letter::try_from('A').unwrap();
        let z = Letter::try_from('Z').unwrap();
        assert!(rack.remove(a));
        assert!(!rack.remove(z));
        assert_eq!(rack.to_string(), "X A");
        assert_eq!(rack.counts().get(a), 1);
    }
}
