use crate::tiles::Letter;
use crate::tileset;
use multiset::HashMultiSet;
use rand::{seq::SliceRandom, Rng};
use std::ops::Deref;

/// The tiles that racks are refilled from.
///
/// Drawing does not deplete the bag: every draw picks a tile at random,
/// weighted by the number of tiles of that letter.
#[derive(Debug, Clone)]
pub struct TileBag {
    bag: HashMultiSet<Letter>,
    /// Same tiles, sorted. Multiset iteration order is not stable.
    tiles: Vec<Letter>,
}

impl Deref for TileBag {
    type Target = HashMultiSet<Letter>;

    fn deref(&self) -> &Self::Target {
        &self.bag
    }
}

impl Default for TileBag {
    fn default() -> Self {
        TileBag::standard()
    }
}

impl TileBag {
    fn new(bag: HashMultiSet<Letter>) -> Self {
        let mut tiles: Vec<Letter> = bag.iter().copied().collect();
        tiles.sort_unstable();
        TileBag { bag, tiles }
    }

    /// A bag with the tile distribution of the [`TILESET`](crate::TILESET).
    pub fn standard() -> Self {
        let mut bag = HashMultiSet::new();
        for letter in Letter::all() {
            bag.insert_times(letter, tileset::count(letter) as usize);
        }
        Self::new(bag)
    }

    /// A bag holding exactly `tiles`.
    pub fn from_tiles<T: AsRef<[Letter]>>(tiles: T) -> TileBag {
        let mut bag = HashMultiSet::new();
        for &tile in tiles.as_ref() {
            bag.insert(tile);
        }
        Self::new(bag)
    }

    /// Draw a random tile, or None if the bag is empty.
    /// The same `rng` state always draws the same tile.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Option<Letter> {
        self.tiles.choose(rng).copied()
    }

    /// Number of tiles with `letter` in the bag.
    pub fn count(&self, letter: Letter) -> usize {
        self.bag.count_of(&letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::encode;
    use rand::{rngs::StdRng, SeedableRng};
    use std::convert::TryFrom;

    #[test]
    fn test_standard_bag() {
        let bag = TileBag::standard();
        assert_eq!(bag.len(), 134);
        assert_eq!(bag.count(Letter::try_from('I').unwrap()), 13);
        assert_eq!(bag.count(Letter::try_from('W').unwrap()), 1);
    }

    #[test]
    fn test_draw() {
        let mut rng = StdRng::seed_from_u64(123);
        let bag = TileBag::from_tiles(encode("QQ").unwrap());
        for _ in 0..10 {
            assert_eq!(bag.draw(&mut rng).map(char::from), Some('Q'));
        }
        assert_eq!(bag.len(), 2);
        assert_eq!(TileBag::from_tiles(Vec::<Letter>::new()).draw(&mut rng), None);
    }

    #[test]
    fn test_draw_seeded() {
        let bag = TileBag::standard();
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..7)
                .filter_map(|_| bag.draw(&mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(7), draw(7));
        // a new bag with the same tiles draws the same
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(TileBag::standard().draw(&mut rng), draw(7).first().copied());
        assert_eq!(draw(7).len(), 7);
    }

    #[test]
    fn test_draw_matches_count() {
        let mut rng = StdRng::seed_from_u64(99);
        let bag = TileBag::from_tiles(encode("ABAA").unwrap());
        let (a, b) = (Letter::try_from('A').unwrap(), Letter::try_from('B').unwrap());
        assert_eq!((bag.count(a), bag.count(b)), (3, 1));
        assert_eq!(bag.count(Letter::try_from('Z').unwrap()), 0);
        let mut drawn = HashMultiSet::new();
        for _ in 0..400 {
            drawn.insert(bag.draw(&mut rng).unwrap());
        }
        assert_eq!(drawn.len(), 400);
        assert_eq!(drawn.count_of(&a) + drawn.count_of(&b), 400);
        // weighted 3 to 1
        assert!(drawn.count_of(&a) > 2 * drawn.count_of(&b));
    }
}
