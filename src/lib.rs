//! A word game engine for Rust.
//! <br>
//! This crate checks words against a dictionary, places them on a 15x15 board
//! using the letter tiles of a player, and suggests the highest scoring word a
//! player can form with the tiles on the rack.
//!
//! The dictionary is stored in a [`Lexicon`], a trie over uppercase letters.
//! The [`WordFinder`] walks the trie depth first, following only the letters
//! that are still on the rack, so it visits exactly the words that can be
//! formed from the rack. Premium squares and words crossing the played word
//! are not taken into account: the score of a word is the sum of its
//! [letter points](crate::TILESET).
//!
//! # Basic usage
//!  ```
//! # use wordgame_engine::{Board, Error, Lexicon, Orientation, Rack, WordFinder, word_score};
//! let lexicon = Lexicon::from_words(&["cat", "car", "card"]);
//! let mut rack: Rack = "CARDTXX".parse()?;
//! let best = WordFinder::new(&lexicon).best_word(&rack).unwrap();
//! assert_eq!(best.word, "CARD");
//!
//! let mut board = Board::default();
//! assert!(lexicon.contains(&best.word));
//! board.place_word(&best.word, 7, 7, Orientation::Horizontal, &mut rack)?;
//! assert_eq!(word_score(&best.word), 7);
//! assert_eq!(rack.to_string(), "T X X");
//! println!("{}", board);
//! # Ok::<(), Error>(())
//! ```
mod board;
mod error;
mod finder;
mod game;
mod lexicon;
mod tilebag;
mod tiles;
mod tileset;

pub use crate::board::{Board, Orientation, Placement, BOARD_SIZE};
pub use crate::error::Error;
pub use crate::finder::{Suggestion, WordFinder};
pub use crate::game::{Game, Player};
pub use crate::lexicon::{Lexicon, NodeId};
pub use crate::tilebag::TileBag;
pub use crate::tiles::{encode, Cell, Letter, LetterCounts, Rack, RACK_SIZE};
pub use crate::tileset::{letter_points, points, word_score, TILESET};
