//! Basic types for working with letter tiles.
mod cell;
mod counts;
mod letter;
mod rack;

pub use cell::Cell;
pub use counts::LetterCounts;
pub use letter::{encode, Letter};
pub use rack::{Rack, RACK_SIZE};
