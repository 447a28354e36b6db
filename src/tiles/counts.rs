use super::Letter;
use std::iter::FromIterator;

/// Number of tiles per letter, used as a multiset of letters.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct LetterCounts([usize; Letter::COUNT]);

impl LetterCounts {
    pub fn new() -> LetterCounts {
        LetterCounts::default()
    }

    /// Number of tiles with `letter`.
    pub fn get(&self, letter: Letter) -> usize {
        self.0[letter.index()]
    }

    /// Add one `letter`.
    pub fn add(&mut self, letter: Letter) {
        self.0[letter.index()] += 1;
    }

    /// Remove one `letter`. Returns false if there was none left.
    pub fn take(&mut self, letter: Letter) -> bool {
        let count = &mut self.0[letter.index()];
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }

    /// Total number of tiles.
    pub fn len(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the letters present, with their count, in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (Letter, usize)> + '_ {
        Letter::all()
            .map(move |letter| (letter, self.get(letter)))
            .filter(|&(_, count)| count > 0)
    }

    /// Returns the first letter for which we need more tiles than `available`
    /// holds, as (letter, needed, available).
    pub fn shortage(&self, available: &LetterCounts) -> Option<(Letter, usize, usize)> {
        self.iter()
            .map(|(letter, needed)| (letter, needed, available.get(letter)))
            .find(|&(_, needed, have)| needed > have)
    }

    /// True if every letter occurs in `other` at least as often as in `self`.
    pub fn is_subset(&self, other: &LetterCounts) -> bool {
        self.shortage(other).is_none()
    }
}

impl FromIterator<Letter> for LetterCounts {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut counts = LetterCounts::new();
        for letter in iter {
            counts.add(letter);
        }
        counts
    }
}
