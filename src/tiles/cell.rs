use super::Letter;
use crate::error::Error;
use std::convert::TryFrom;
use std::fmt;

/// A square on the board that is either empty or holds a [`Letter`](crate::Letter)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Cell(Option<Letter>);

impl Cell {
    /// An empty cell
    pub const EMPTY: Self = Self(None);

    /// Create new `Cell` holding `letter`
    pub fn from_letter(letter: Letter) -> Cell {
        Cell(Some(letter))
    }

    /// Get the contained letter or None
    pub fn letter(&self) -> Option<Letter> {
        self.0
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

/// `'.'` and `' '` parse as an empty cell.
impl TryFrom<char> for Cell {
    type Error = Error;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '.' | ' ' => Ok(Cell::EMPTY),
            _ => Letter::try_from(ch).map(Cell::from_letter),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(letter) => write!(f, "{}", letter),
            None => write!(f, "."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell() {
        assert!(Cell::try_from('.').unwrap().is_empty());
        assert!(Cell::try_from(' ').unwrap().is_empty());
        let cell = Cell::try_from('k').unwrap();
        assert_eq!(cell.to_string(), "K");
        assert!(Cell::try_from('#').is_err());
    }
}
