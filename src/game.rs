use crate::board::{Board, Orientation};
use crate::finder::{Suggestion, WordFinder};
use crate::lexicon::Lexicon;
use crate::tilebag::TileBag;
use crate::tiles::Rack;
use crate::tileset::word_score;
use crate::Error;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A player with a name, a score and a rack of tiles.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    score: u32,
    rack: Rack,
}

impl Player {
    /// New player with score 0 and an empty rack.
    pub fn new(name: &str) -> Player {
        Player {
            name: String::from(name),
            score: 0,
            rack: Rack::new(),
        }
    }

    /// Start with the tiles in `rack`.
    pub fn with_rack(mut self, rack: Rack) -> Player {
        self.rack = rack;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total score. It never decreases.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    /// Draw tiles from `bag` until the rack is full.
    pub fn refill<R: Rng>(&mut self, bag: &TileBag, rng: &mut R) {
        while !self.rack.is_full() {
            let letter = match bag.draw(rng) {
                Some(letter) => letter,
                None => break,
            };
            if self.rack.push(letter).is_err() {
                break;
            }
        }
        tracing::trace!("{} refilled rack: {}", self.name, self.rack);
    }
}

/// A game on one board with a lexicon and players taking turns.
///
/// ## Examples
/// ```
/// use wordgame_engine::{Game, Lexicon, Orientation, Error};
/// let lexicon = Lexicon::from_words(&["cat", "car", "card"]);
/// let mut game = Game::new(lexicon).with_seed(7).with_players(&["ann", "bob"])?;
/// if let Some(s) = game.suggest() {
///     let score = game.play(&s.word, 7, 7, Orientation::Horizontal)?;
///     assert_eq!(score, s.score);
///     assert_eq!(game.current_player().map(|p| p.name()), Some("bob"));
/// }
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    lexicon: Lexicon,
    board: Board,
    players: Vec<Player>,
    current: usize,
    bag: TileBag,
    rng: StdRng,
}

impl Game {
    /// New game with an empty board and no players.
    pub fn new(lexicon: Lexicon) -> Game {
        Game {
            lexicon,
            board: Board::new(),
            players: Vec::new(),
            current: 0,
            bag: TileBag::standard(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Seed the random tile draws, to get reproducible games.
    pub fn with_seed(mut self, seed: u64) -> Game {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Start from `board` instead of an empty board.
    pub fn with_board(mut self, board: Board) -> Game {
        self.board = board;
        self
    }

    /// Refill racks from `bag` instead of the standard bag.
    pub fn with_bag(mut self, bag: TileBag) -> Game {
        self.bag = bag;
        self
    }

    /// Add a player for each name, each with a full rack.
    /// ## Errors
    /// [`NoPlayers`](Error::NoPlayers) if `names` is empty.
    pub fn with_players(mut self, names: &[&str]) -> Result<Game, Error> {
        if names.is_empty() {
            return Err(Error::NoPlayers);
        }
        for &name in names {
            self.add_player(Player::new(name));
        }
        Ok(self)
    }

    /// Add `player`, filling up the rack.
    pub fn with_player(mut self, player: Player) -> Game {
        self.add_player(player);
        self
    }

    fn add_player(&mut self, mut player: Player) {
        player.refill(&self.bag, &mut self.rng);
        self.players.push(player);
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player whose turn it is, or None if there are no players.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    /// Index of the current player in [`players`](Game::players).
    pub fn turn(&self) -> usize {
        self.current
    }

    /// Suggest the best scoring word for the current player.
    pub fn suggest(&self) -> Option<Suggestion> {
        let player = self.current_player()?;
        WordFinder::new(&self.lexicon).best_word(&player.rack)
    }

    /// Play `word` for the current player, starting at `row`, `col`.
    ///
    /// On success the word score is added to the player, the rack is refilled
    /// and the turn passes to the next player. Returns the score.
    /// On error nothing changes, and the current player keeps the turn.
    /// ## Errors
    /// - [`NoPlayers`](Error::NoPlayers) if nobody plays.
    /// - [`WordNotInLexicon`](Error::WordNotInLexicon) if `word` is not in the lexicon.
    /// - [`NoTilesPlaced`](Error::NoTilesPlaced) if all letters are already on the board.
    /// - Any error from [`Board::place_word`](crate::Board::place_word).
    pub fn play(
        &mut self,
        word: &str,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<u32, Error> {
        let player = self.players.get_mut(self.current).ok_or(Error::NoPlayers)?;
        if !self.lexicon.contains(word) {
            return Err(Error::WordNotInLexicon(String::from(word)));
        }
        let placement = self
            .board
            .try_word(word, row, col, orientation, &player.rack)?;
        if placement.is_empty() {
            return Err(Error::NoTilesPlaced);
        }
        self.board.commit(&placement, &mut player.rack);
        let score = word_score(word);
        player.add_score(score);
        player.refill(&self.bag, &mut self.rng);
        tracing::info!(
            "{} played {} at ({}, {}) {} for {} points, total {}",
            player.name,
            word.to_uppercase(),
            row,
            col,
            orientation,
            score,
            player.score
        );
        self.next_turn();
        Ok(score)
    }

    /// Skip the turn of the current player.
    pub fn pass(&mut self) {
        if let Some(player) = self.current_player() {
            tracing::info!("{} passes", player.name);
        }
        self.next_turn();
    }

    fn next_turn(&mut self) {
        if !self.players.is_empty() {
            self.current = (self.current + 1) % self.players.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Orientation::{Horizontal, Vertical};
    use crate::tiles::encode;
    use anyhow::Result;

    fn test_game() -> Result<Game> {
        let lexicon = Lexicon::from_words(&["cat", "card", "at", "car"]);
        let game = Game::new(lexicon)
            .with_bag(TileBag::from_tiles(encode("X")?))
            .with_player(Player::new("ann").with_rack("CARDT".parse()?))
            .with_player(Player::new("bob").with_rack("AT".parse()?));
        Ok(game)
    }

    #[test]
    fn test_no_players() {
        let mut game = Game::new(Lexicon::from_words(&["cat"]));
        assert!(game.current_player().is_none());
        assert!(game.suggest().is_none());
        assert!(matches!(
            game.play("cat", 7, 7, Horizontal),
            Err(Error::NoPlayers)
        ));
        game.pass();
        assert!(matches!(
            Game::new(Lexicon::new()).with_players(&[]),
            Err(Error::NoPlayers)
        ));
    }

    #[test]
    fn test_players_dealt() -> Result<()> {
        let game = Game::new(Lexicon::new()).with_players(&["ann", "bob", "cid"])?;
        assert_eq!(game.players().len(), 3);
        for player in game.players() {
            assert!(player.rack().is_full());
            assert_eq!(player.score(), 0);
        }
        Ok(())
    }

    #[test]
    fn test_seeded_racks() -> Result<()> {
        let deal = |seed| -> Result<Vec<String>> {
            let game = Game::new(Lexicon::new())
                .with_seed(seed)
                .with_players(&["ann", "bob"])?;
            Ok(game.players().iter().map(|p| p.rack().to_string()).collect())
        };
        assert_eq!(deal(42)?, deal(42)?);
        Ok(())
    }

    #[test]
    fn test_play() -> Result<()> {
        let mut game = test_game()?;
        assert_eq!(game.players()[0].rack().to_string(), "C A R D T X X");

        let suggestion = game.suggest().unwrap();
        assert_eq!((suggestion.word.as_str(), suggestion.score), ("CARD", 7));

        assert_eq!(game.play("card", 7, 7, Horizontal)?, 7);
        let ann = &game.players()[0];
        assert_eq!(ann.score(), 7);
        assert_eq!(ann.rack().to_string(), "T X X X X X X");
        assert_eq!(game.current_player().unwrap().name(), "bob");

        // "AT" down from the A of CARD only uses the T
        assert_eq!(game.play("AT", 7, 8, Vertical)?, 2);
        assert_eq!(game.players()[1].rack().to_string(), "A X X X X X X");
        assert_eq!(game.current_player().unwrap().name(), "ann");
        Ok(())
    }

    #[test]
    fn test_rejected_play_keeps_turn() -> Result<()> {
        let mut game = test_game()?;
        game.play("card", 7, 7, Horizontal)?;
        let board = game.board().clone();

        let err = game.play("dog", 0, 0, Horizontal).unwrap_err();
        assert!(matches!(err, Error::WordNotInLexicon(ref w) if w == "dog"));
        // every letter already on the board
        let err = game.play("car", 7, 7, Horizontal).unwrap_err();
        assert!(matches!(err, Error::NoTilesPlaced));
        let err = game.play("cat", 7, 6, Vertical).unwrap_err();
        assert!(matches!(err, Error::InsufficientTiles { .. }));
        let err = game.play("cat", 14, 14, Horizontal).unwrap_err();
        assert!(matches!(err, Error::PlacementOutOfBounds { .. }));

        assert_eq!(game.board(), &board);
        let bob = game.current_player().unwrap();
        assert_eq!(bob.name(), "bob");
        assert_eq!(bob.score(), 0);
        assert_eq!(bob.rack().to_string(), "A T X X X X X");
        Ok(())
    }

    #[test]
    fn test_pass() -> Result<()> {
        let mut game = test_game()?;
        game.pass();
        assert_eq!(game.current_player().unwrap().name(), "bob");
        assert_eq!(game.turn(), 1);
        game.pass();
        assert_eq!(game.current_player().unwrap().name(), "ann");
        Ok(())
    }
}
