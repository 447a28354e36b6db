use crate::tiles::{encode, Cell, Letter, LetterCounts, Rack};
use crate::Error;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// The dimension of the board: `BOARD_SIZE` x `BOARD_SIZE` squares
pub const BOARD_SIZE: usize = 15;

const N: usize = BOARD_SIZE;
type Row = [Cell; N];
type State = [Row; N];

/// Direction in which a word is written on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    /// Column increases for each letter
    Horizontal,
    /// Row increases for each letter
    Vertical,
}

impl Orientation {
    /// (row, column) step between two letters.
    fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

impl TryFrom<char> for Orientation {
    type Error = Error;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            'H' | 'h' => Ok(Orientation::Horizontal),
            'V' | 'v' => Ok(Orientation::Vertical),
            _ => Err(Error::InvalidOrientation(ch)),
        }
    }
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Orientation::try_from(ch),
            (Some(ch), Some(_)) => Err(Error::InvalidOrientation(ch)),
            (None, _) => Err(Error::InvalidOrientation(' ')),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "H"),
            Orientation::Vertical => write!(f, "V"),
        }
    }
}

/// The cells that a word fills on the board, as (row, col, letter).
/// Cells that already held the right letter are not included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    cells: Vec<(usize, usize, Letter)>,
}

impl Placement {
    pub fn cells(&self) -> &[(usize, usize, Letter)] {
        &self.cells
    }

    /// Number of tiles used from the rack
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The letters taken from the rack, in the order of use.
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.cells.iter().map(|&(_, _, letter)| letter)
    }

    fn counts(&self) -> LetterCounts {
        self.letters().collect()
    }
}

/// Display the board state as 15 lines of 15 squares.
/// Empty squares show as ".".
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = self
            .horizontal
            .iter()
            .map(|row| row.iter().map(Cell::to_string).collect::<String>())
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", repr)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            horizontal: [[Cell::EMPTY; N]; N],
        }
    }
}

/// Represents the letters on a board of 15x15 squares.
///
/// Once a square holds a letter, it is never changed to a different letter.
///
/// ## Examples
/// ```
/// use wordgame_engine::{Board, Orientation, Rack, Error};
/// let mut board = Board::new();
/// let mut rack: Rack = "CATXXXX".parse()?;
/// let placement = board.place_word("cat", 7, 7, Orientation::Horizontal, &mut rack)?;
/// assert_eq!(placement.len(), 3);
/// assert_eq!(rack.len(), 4);
/// assert!(board.is_occupied(7, 9));
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    horizontal: State,
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Board {
        Board::default()
    }

    /// Parse board state from a list of strings.
    /// The list must contain 15 rows of 15 characters, `.` or ` ` for an empty square.
    /// ## Errors
    /// If the list of strings has wrong dimensions or cannot be parsed as rows.
    ///
    /// ## Examples
    /// ```
    /// use wordgame_engine::{Board, Error};
    /// let mut state = vec!["..............."; 15];
    /// state[7] = ".......CAT.....";
    /// let board = Board::new().with_state_from_strings(&state)?;
    /// assert_eq!(board.letter_at(7, 8).map(char::from), Some('A'));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_state_from_strings(mut self, rows: &[&str]) -> Result<Board, Error> {
        self.set_state_from_strings(rows)?;
        Ok(self)
    }

    /// Set board state from list of strings
    /// ## Errors
    /// If the list of strings has wrong dimensions or cannot be parsed as rows.
    pub fn set_state_from_strings(&mut self, rows: &[&str]) -> Result<(), Error> {
        if rows.len() != N {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let mut state = [[Cell::EMPTY; N]; N];
        for (i, &row) in rows.iter().enumerate() {
            let cells = row
                .chars()
                .map(Cell::try_from)
                .collect::<Result<Vec<_>, Error>>()?;
            if cells.len() != N {
                return Err(Error::InvalidRowLength(String::from(row), cells.len()));
            }
            state[i].copy_from_slice(&cells);
        }
        self.horizontal = state;
        Ok(())
    }

    /// Return the board rows
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.horizontal
    }

    /// Get the letter at `row`, `col`, or None if the cell is empty or off the board.
    pub fn letter_at(&self, row: usize, col: usize) -> Option<Letter> {
        if row < N && col < N {
            self.horizontal[row][col].letter()
        } else {
            None
        }
    }

    /// Check if cell at `row`, `col` is occupied.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.letter_at(row, col).is_some()
    }

    /// Place `word` starting at `row`, `col` in the given direction, using tiles from `rack`.
    ///
    /// Letters already on the board must match the word and do not use a tile.
    /// For every empty square one tile is taken from the rack. The word is
    /// checked completely before anything is changed: on error the board and
    /// the rack are left untouched.
    ///
    /// Placing a word where all its letters are already on the board succeeds
    /// with an empty [`Placement`].
    /// ## Errors
    /// - [`EmptyWord`](Error::EmptyWord), [`InvalidLetter`](Error::InvalidLetter)
    ///   if the word can not be encoded.
    /// - [`PlacementOutOfBounds`](Error::PlacementOutOfBounds) if the word does not fit on the
    ///   board.
    /// - [`PlacementConflict`](Error::PlacementConflict) if a square holds a different letter.
    /// - [`InsufficientTiles`](Error::InsufficientTiles) if the rack lacks a tile for a new square.
    pub fn place_word(
        &mut self,
        word: &str,
        row: usize,
        col: usize,
        orientation: Orientation,
        rack: &mut Rack,
    ) -> Result<Placement, Error> {
        let placement = self.try_word(word, row, col, orientation, rack)?;
        self.commit(&placement, rack);
        Ok(placement)
    }

    /// Check if `word` can be placed, without changing the board or the rack.
    /// Returns the squares that would be filled.
    /// ## Errors
    /// See [`place_word`](Board::place_word).
    pub fn try_word(
        &self,
        word: &str,
        row: usize,
        col: usize,
        orientation: Orientation,
        rack: &Rack,
    ) -> Result<Placement, Error> {
        let result = self.check_word(word, row, col, orientation, rack);
        if let Err(err) = &result {
            tracing::debug!(
                "cannot place {} at ({}, {}) {}: {}",
                word,
                row,
                col,
                orientation,
                err
            );
        }
        result
    }

    fn check_word(
        &self,
        word: &str,
        row: usize,
        col: usize,
        orientation: Orientation,
        rack: &Rack,
    ) -> Result<Placement, Error> {
        let letters = encode(word)?;
        let len = letters.len();
        if len == 0 {
            return Err(Error::EmptyWord);
        }
        let (dr, dc) = orientation.step();
        // no arithmetic on row or col before they are known to be on the board
        let fits = row < N
            && col < N
            && match orientation {
                Orientation::Horizontal => len - 1 <= N - 1 - col,
                Orientation::Vertical => len - 1 <= N - 1 - row,
            };
        if !fits {
            return Err(Error::PlacementOutOfBounds {
                row,
                col,
                orientation,
                len,
            });
        }
        let mut cells = Vec::with_capacity(len);
        for (i, &letter) in letters.iter().enumerate() {
            let (r, c) = (row + i * dr, col + i * dc);
            match self.horizontal[r][c].letter() {
                None => cells.push((r, c, letter)),
                Some(found) if found == letter => {}
                Some(found) => {
                    return Err(Error::PlacementConflict {
                        row: r,
                        col: c,
                        found,
                        letter,
                    })
                }
            }
        }
        let placement = Placement { cells };
        // all new tiles at once, so a word needing a letter twice can not pass with one tile
        if let Some((letter, needed, available)) = placement.counts().shortage(&rack.counts()) {
            return Err(Error::InsufficientTiles {
                letter,
                needed,
                available,
            });
        }
        Ok(placement)
    }

    /// Write a checked placement on the board and take its tiles from `rack`.
    pub(crate) fn commit(&mut self, placement: &Placement, rack: &mut Rack) {
        for &(r, c, letter) in placement.cells() {
            let removed = rack.remove(letter);
            debug_assert!(removed, "placement was not checked against rack");
            self.horizontal[r][c] = Cell::from_letter(letter);
            tracing::trace!("placed {} at ({}, {})", letter, r, c);
        }
    }
}
