//! The non-repeating word deck.
//!
//! `WordDeck` owns a working copy of the cards selected at Setup. Each
//! `draw()` removes a uniformly random card from the pool, so no card is
//! shown twice for the lifetime of the deck. An empty pool yields
//! `Draw::Exhausted`; the deck never refills itself.
//!
//! The whole deck (pool order, seen ids and RNG position) serializes, so
//! a saved deck continues with exactly the draws the original would make.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::card::{CardId, CardOrigin, Difficulty, WordCard};
use crate::core::{DeckRng, DeckRngState};

/// Selects which cards from the content source enter the deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckFilter {
    /// Only cards of this difficulty. `None` accepts all.
    pub difficulty: Option<Difficulty>,

    /// Only cards carrying this category tag. `None` accepts all.
    pub category: Option<String>,

    /// Include cards shipped with the game.
    pub include_bundled: bool,

    /// Include user-authored cards.
    pub include_custom: bool,
}

impl Default for DeckFilter {
    fn default() -> Self {
        Self {
            difficulty: None,
            category: None,
            include_bundled: true,
            include_custom: true,
        }
    }
}

impl DeckFilter {
    /// Accept every card.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Only user-authored cards.
    #[must_use]
    pub fn custom_only(mut self) -> Self {
        self.include_bundled = false;
        self.include_custom = true;
        self
    }

    /// Check whether a card passes the filter.
    #[must_use]
    pub fn matches(&self, card: &WordCard) -> bool {
        let origin_ok = match card.origin() {
            CardOrigin::Bundled => self.include_bundled,
            CardOrigin::Custom => self.include_custom,
        };
        let difficulty_ok = self.difficulty.map_or(true, |d| card.difficulty() == d);
        let category_ok = self.category.as_deref().map_or(true, |c| card.has_tag(c));

        origin_ok && difficulty_ok && category_ok
    }
}

/// Result of drawing from the deck.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Draw {
    /// The next card, already removed from the pool.
    Card(WordCard),
    /// The pool is empty.
    Exhausted,
}

impl Draw {
    /// Convert into an `Option`, discarding the exhaustion signal.
    pub fn into_card(self) -> Option<WordCard> {
        match self {
            Draw::Card(card) => Some(card),
            Draw::Exhausted => None,
        }
    }
}

/// Working pool of word cards for one match.
///
/// ## Example
///
/// ```
/// use taboo_engine::cards::{CardId, Draw, WordCard, WordDeck};
/// use taboo_engine::core::DeckRng;
///
/// let cards = vec![
///     WordCard::new(CardId::new(1), "Güneş"),
///     WordCard::new(CardId::new(2), "Ay"),
/// ];
/// let mut deck = WordDeck::new(cards, DeckRng::new(42));
///
/// assert!(matches!(deck.draw(), Draw::Card(_)));
/// assert!(matches!(deck.draw(), Draw::Card(_)));
/// assert_eq!(deck.draw(), Draw::Exhausted);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WordDeck {
    pool: Vec<WordCard>,
    /// Every card id that has ever entered the pool.
    seen: FxHashSet<CardId>,
    drawn: usize,
    rng: DeckRng,
}

impl WordDeck {
    /// Build a deck from cards, dropping repeated ids (first one wins).
    pub fn new(cards: impl IntoIterator<Item = WordCard>, rng: DeckRng) -> Self {
        let mut deck = Self {
            pool: Vec::new(),
            seen: FxHashSet::default(),
            drawn: 0,
            rng,
        };
        deck.supply(cards);
        deck
    }

    /// Build a deck from a read-only content source and a filter.
    ///
    /// The source is never modified; matching cards are cloned.
    pub fn from_source(source: &[WordCard], filter: &DeckFilter, rng: DeckRng) -> Self {
        Self::new(source.iter().filter(|c| filter.matches(c)).cloned(), rng)
    }

    /// Remove and return a uniformly random card.
    pub fn draw(&mut self) -> Draw {
        let Some(index) = self.rng.gen_index(self.pool.len()) else {
            return Draw::Exhausted;
        };

        let card = self.pool.swap_remove(index);
        self.drawn += 1;
        debug!(card = %card.id(), remaining = self.pool.len(), "drew card");
        Draw::Card(card)
    }

    /// Add cards to the pool.
    ///
    /// Cards whose id has already been in this deck are skipped, so a
    /// supplied card can never repeat one already shown. Returns the
    /// number of cards actually added.
    pub fn supply(&mut self, cards: impl IntoIterator<Item = WordCard>) -> usize {
        let before = self.pool.len();
        for card in cards {
            if self.seen.insert(card.id()) {
                self.pool.push(card);
            }
        }
        self.pool.len() - before
    }

    /// Cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    /// Cards drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.pool.is_empty()
    }

    /// Snapshot of the RNG, for resuming with identical draws.
    #[must_use]
    pub fn rng_state(&self) -> DeckRngState {
        self.rng.state()
    }
}
