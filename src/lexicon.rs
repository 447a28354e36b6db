use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::read_to_string;
use std::iter::FromIterator;

/// Index of a node in the [`Lexicon`].
pub type NodeId = usize;

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Node {
    /// Outgoing edges, sorted by label.
    children: Vec<(char, u32)>,
    terminal: bool,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// A trie data structure that holds all the words of the dictionary.
///
/// Words are stored in uppercase, so all lookups are case-insensitive.
/// The nodes are kept in a single list and addressed by [`NodeId`]; the
/// root node has id [`Lexicon::ROOT`]. Nodes are only added, never removed.
///
/// ## Examples
/// ```
/// use wordgame_engine::Lexicon;
/// let lexicon = Lexicon::from_words(&["cat", "car", "card"]);
/// assert!(lexicon.contains("Card"));
/// assert!(!lexicon.contains("ca"));
/// assert!(lexicon.has_prefix("ca"));
/// ```
pub struct Lexicon {
    nodes: Vec<Node>,
    word_count: usize,
    /// Path of the wordfile used to build the lexicon.
    /// Empty if the lexicon is not build from a file.
    pub wordfile: String,
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon {
            nodes: vec![Node::default()],
            word_count: 0,
            wordfile: String::new(),
        }
    }
}

impl fmt::Display for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Lexicon: {} words, {} nodes from '{}'>",
            self.word_count,
            self.node_count(),
            self.wordfile
        )
    }
}

fn normalize(word: &str) -> impl Iterator<Item = char> + '_ {
    word.chars().flat_map(char::to_uppercase)
}

impl Lexicon {
    /// Id of the root node
    pub const ROOT: NodeId = 0;

    pub fn new() -> Lexicon {
        Lexicon::default()
    }

    /// Build a lexicon from a list of words.
    pub fn from_words<I, S>(words: I) -> Lexicon
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Lexicon::new();
        for word in words {
            lexicon.insert(word.as_ref());
        }
        lexicon
    }

    /// Read the lexicon from a file. The file must be encoded in utf-8, words
    /// are separated by whitespace.
    /// ## Errors
    /// Fails if the file can not be read.
    pub fn from_file(wordfile: &str) -> Result<Lexicon, Error> {
        let text = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut lexicon = Lexicon::from_words(text.split_whitespace());
        lexicon.wordfile = String::from(wordfile);
        tracing::info!(
            "Loaded {} words ({} nodes) from {}",
            lexicon.word_count,
            lexicon.node_count(),
            wordfile
        );
        Ok(lexicon)
    }

    #[cfg(all(feature = "serde", feature = "bincode"))]
    /// Deserialize the lexicon from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Lexicon, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut lexicon: Lexicon = bincode::deserialize_from(reader)
            .map_err(|_| Error::WordlistDeserializeError(String::from(wordfile)))?;
        lexicon.wordfile = String::from(wordfile);
        tracing::info!("Deserialized {}", lexicon);
        Ok(lexicon)
    }

    #[cfg(all(feature = "serde", feature = "bincode"))]
    /// Serialize the lexicon to a bincoded file.
    /// ## Errors
    /// If the file can not be created or written.
    pub fn serialize_into(&self, path: &str) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|_| Error::WordlistSerializeError(String::from(path)))
    }

    /// Add `word` to the lexicon. Every character is converted to uppercase.
    pub fn insert(&mut self, word: &str) {
        let mut i = Self::ROOT;
        for c in normalize(word) {
            i = match self.nodes[i].children.binary_search_by(|(c2, _)| c2.cmp(&c)) {
                Ok(pos) => self.nodes[i].children[pos].1 as usize,
                Err(pos) => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[i].children.insert(pos, (c, child as u32));
                    child
                }
            };
        }
        if !self.nodes[i].terminal {
            self.nodes[i].terminal = true;
            self.word_count += 1;
        }
    }

    /// Returns true if `word` is in the lexicon.
    /// A prefix of a word does not count, unless it is a word itself.
    pub fn contains(&self, word: &str) -> bool {
        self.node(word).map_or(false, |i| self.is_terminal(i))
    }

    /// Returns true if at least one word starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.node(prefix).is_some()
    }

    /// Get the node reached by following `prefix` from the root.
    pub fn node(&self, prefix: &str) -> Option<NodeId> {
        normalize(prefix).try_fold(Self::ROOT, |i, c| self.child(i, c))
    }

    /// Get the child of node `i` with label `c` if present.
    /// `c` must be uppercase.
    pub fn child(&self, i: NodeId, c: char) -> Option<NodeId> {
        let children = &self.nodes[i].children;
        children
            .binary_search_by(|(c2, _)| c2.cmp(&c))
            .ok()
            .map(|pos| children[pos].1 as usize)
    }

    /// Iterate over the (label, child) edges of node `i`, in alphabetical order.
    pub fn children(&self, i: NodeId) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.nodes[i]
            .children
            .iter()
            .map(|&(c, child)| (c, child as usize))
    }

    /// True if a word ends at node `i`.
    pub fn is_terminal(&self, i: NodeId) -> bool {
        self.nodes[i].terminal
    }

    /// The number of words in the lexicon
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The number of nodes in the lexicon, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Lexicon::from_words(iter)
    }
}
