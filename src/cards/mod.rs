//! Word cards and the deck they are drawn from.
//!
//! - `card`: Immutable `WordCard` content and its metadata
//! - `deck`: `DeckFilter` selection and the non-repeating `WordDeck`

pub mod card;
pub mod deck;

pub use card::{CardId, CardOrigin, Difficulty, Language, WordCard, WordList};
pub use deck::{DeckFilter, Draw, WordDeck};
