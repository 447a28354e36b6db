use crate::lexicon::{Lexicon, NodeId};
use crate::tiles::{Letter, LetterCounts, Rack};
use crate::tileset::word_score;
use std::convert::TryFrom;

/// A word that can be formed from a rack, with its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: String,
    pub score: u32,
}

/// Searches a [`Lexicon`] for the words that can be formed with the letters of a rack.
///
/// The search walks the trie depth first. An edge is only followed if the
/// rack still has a tile for its label; the tile is taken before and put back
/// after visiting the child. Children are visited in alphabetical order, so
/// the results are deterministic.
#[derive(Debug, Clone, Copy)]
pub struct WordFinder<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> WordFinder<'a> {
    pub fn new(lexicon: &'a Lexicon) -> WordFinder<'a> {
        WordFinder { lexicon }
    }

    /// Find the highest scoring word that can be formed with the letters of `rack`.
    ///
    /// Each tile is used at most once. If several words have the best score, the
    /// first one found wins: that is the alphabetically smallest, a prefix coming
    /// before its extensions.
    /// Returns None if no word can be formed.
    /// ## Examples
    /// ```
    /// use wordgame_engine::{Lexicon, Rack, WordFinder, Error};
    /// let lexicon = Lexicon::from_words(&["cat", "car", "card"]);
    /// let rack: Rack = "CARDT".parse()?;
    /// let best = WordFinder::new(&lexicon).best_word(&rack).unwrap();
    /// assert_eq!((best.word.as_str(), best.score), ("CARD", 7));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn best_word(&self, rack: &Rack) -> Option<Suggestion> {
        let mut best: Option<Suggestion> = None;
        self.search(rack, &mut |word| {
            let score = word_score(word);
            if best.as_ref().map_or(true, |b| score > b.score) {
                best = Some(Suggestion {
                    word: String::from(word),
                    score,
                });
            }
        });
        tracing::debug!("best word for [{}]: {:?}", rack, best);
        best
    }

    /// Return all words that can be formed with the letters of `rack`, in search order.
    pub fn all_words(&self, rack: &Rack) -> Vec<Suggestion> {
        let mut words = Vec::new();
        self.search(rack, &mut |word| {
            words.push(Suggestion {
                word: String::from(word),
                score: word_score(word),
            })
        });
        words
    }

    fn search<F: FnMut(&str)>(&self, rack: &Rack, visit: &mut F) {
        let mut counts = rack.counts();
        let mut word = String::new();
        self.visit_node(Lexicon::ROOT, &mut counts, &mut word, visit);
    }

    fn visit_node<F: FnMut(&str)>(
        &self,
        node: NodeId,
        counts: &mut LetterCounts,
        word: &mut String,
        visit: &mut F,
    ) {
        if !word.is_empty() && self.lexicon.is_terminal(node) {
            visit(word);
        }
        for (c, child) in self.lexicon.children(node) {
            let letter = match Letter::try_from(c) {
                Ok(letter) => letter,
                Err(_) => continue,
            };
            if counts.take(letter) {
                word.push(c);
                self.visit_node(child, counts, word, visit);
                word.pop();
                counts.add(letter);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::encode;
    use anyhow::Result;

    const WORDS: &[&str] = &[
        "af", "ah", "al", "aar", "aas", "bi", "bo", "bar", "bes", "bel", "belt", "cat", "car",
        "card", "città",
    ];

    fn best(lexicon: &Lexicon, rack: &str) -> Result<Option<Suggestion>> {
        Ok(WordFinder::new(lexicon).best_word(&rack.parse()?))
    }

    #[test]
    fn test_best_word() -> Result<()> {
        let lexicon = Lexicon::from_words(&["CAT", "CAR", "CARD"]);
        let s = best(&lexicon, "CARDT")?.unwrap();
        assert_eq!(s.word, "CARD");
        assert_eq!(s.score, 7);
        Ok(())
    }

    #[test]
    fn test_no_word() -> Result<()> {
        let lexicon = Lexicon::from_words(WORDS);
        assert_eq!(best(&lexicon, "")?, None);
        assert_eq!(best(&lexicon, "XYZ")?, None);
        assert_eq!(best(&Lexicon::new(), "ABC")?, None);
        Ok(())
    }

    #[test]
    fn test_tiles_used_once() -> Result<()> {
        let lexicon = Lexicon::from_words(WORDS);
        // "aar" needs two A's
        let words = WordFinder::new(&lexicon).all_words(&"ARS".parse()?);
        assert!(words.is_empty());
        let words = WordFinder::new(&lexicon).all_words(&"AARS".parse()?);
        let words: Vec<&str> = words.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["AAR", "AAS"]);
        Ok(())
    }

    #[test]
    fn test_tie_break() -> Result<()> {
        // BEL and BES both score 5; BEL comes first alphabetically
        let lexicon = Lexicon::from_words(&["bes", "bel"]);
        assert_eq!(best(&lexicon, "SLEB")?.unwrap().word, "BEL");
        Ok(())
    }

    #[test]
    fn test_all_words_order() -> Result<()> {
        let lexicon = Lexicon::from_words(WORDS);
        let words = WordFinder::new(&lexicon).all_words(&"BELTAHF".parse()?);
        let words: Vec<&str> = words.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["AF", "AH", "AL", "BEL", "BELT"]);
        Ok(())
    }

    #[test]
    fn test_producible_and_maximal() -> Result<()> {
        let lexicon = Lexicon::from_words(WORDS);
        let finder = WordFinder::new(&lexicon);
        for rack in &["ABELRST", "CATRDAI", "HALFBOI", "SABE", "TCIAT", "Q"] {
            let rack: Rack = rack.parse()?;
            // brute force over the word list, without walking the lexicon
            let max_score = WORDS
                .iter()
                .filter(|word| match encode(word) {
                    Ok(letters) => {
                        let needed: LetterCounts = letters.into_iter().collect();
                        needed.is_subset(&rack.counts())
                    }
                    Err(_) => false,
                })
                .map(|word| word_score(word))
                .max();
            let best = finder.best_word(&rack);
            if let Some(best) = &best {
                assert!(lexicon.contains(&best.word));
                let needed: LetterCounts = encode(&best.word)?.into_iter().collect();
                assert!(needed.is_subset(&rack.counts()));
            }
            assert_eq!(best.map(|s| s.score), max_score, "rack {}", rack);
        }
        Ok(())
    }

    #[test]
    fn test_non_letter_edges_skipped() -> Result<()> {
        // "CITTÀ" has an edge that no tile can match
        let lexicon = Lexicon::from_words(WORDS);
        let words = WordFinder::new(&lexicon).all_words(&"CITTAA".parse()?);
        assert!(words.iter().all(|s| s.word != "CITTÀ"));
        Ok(())
    }
}
