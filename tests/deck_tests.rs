//! Word deck tests.
//!
//! The deck must never show a card twice, whatever the seed, pool size
//! or duplicates in the content source.

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use taboo_engine::cards::{CardId, DeckFilter, Difficulty, Draw, WordCard, WordDeck};
use taboo_engine::core::DeckRng;

fn source(ids: &[u32]) -> Vec<WordCard> {
    ids.iter()
        .map(|&i| WordCard::new(CardId::new(i), format!("word-{i}")))
        .collect()
}

/// Mixed bundled and custom cards merge into one pool.
#[test]
fn test_custom_and_bundled_merge() {
    let mut cards = source(&[1, 2, 3]);
    cards.push(WordCard::new(CardId::new(100), "Anneanne").custom());
    cards.push(WordCard::new(CardId::new(101), "Dede").custom());

    let deck = WordDeck::from_source(&cards, &DeckFilter::all(), DeckRng::new(5));
    assert_eq!(deck.remaining(), 5);

    let bundled_only = DeckFilter {
        include_custom: false,
        ..DeckFilter::default()
    };
    let deck = WordDeck::from_source(&cards, &bundled_only, DeckRng::new(5));
    assert_eq!(deck.remaining(), 3);
}

/// A filter matching nothing yields an immediately exhausted deck.
#[test]
fn test_empty_filter_result() {
    let cards = source(&[1, 2]);
    let filter = DeckFilter::all().with_difficulty(Difficulty::Hard);
    let mut deck = WordDeck::from_source(&cards, &filter, DeckRng::new(5));

    assert!(deck.is_exhausted());
    assert_eq!(deck.draw(), Draw::Exhausted);
}

/// A saved deck continues with exactly the draws the original makes, and
/// still refuses cards it has already shown.
#[test]
fn test_saved_deck_resumes_identically() {
    let cards = source(&(0..30).collect::<Vec<_>>());
    let mut deck = WordDeck::new(cards.clone(), DeckRng::new(11));
    for _ in 0..10 {
        let _ = deck.draw();
    }

    let bytes = bincode::serialize(&deck).unwrap();
    let mut resumed: WordDeck = bincode::deserialize(&bytes).unwrap();
    assert_eq!(resumed.rng_state(), deck.rng_state());
    assert_eq!(resumed.remaining(), 20);
    assert_eq!(resumed.drawn(), 10);

    for _ in 0..20 {
        assert_eq!(deck.draw(), resumed.draw());
    }
    assert_eq!(resumed.draw(), Draw::Exhausted);
    assert_eq!(resumed.supply(cards), 0);
}

proptest! {
    /// Property: over a full drain no id is returned twice, and every
    /// distinct id in the source is returned exactly once.
    #[test]
    fn prop_no_repeats_until_exhausted(
        ids in prop::collection::vec(0u32..200, 0..80),
        seed in any::<u64>(),
    ) {
        let distinct: FxHashSet<u32> = ids.iter().copied().collect();
        let mut deck = WordDeck::new(source(&ids), DeckRng::new(seed));
        prop_assert_eq!(deck.remaining(), distinct.len());

        let mut seen = FxHashSet::default();
        while let Draw::Card(card) = deck.draw() {
            prop_assert!(seen.insert(card.id().raw()), "repeated {}", card.id());
        }

        prop_assert_eq!(seen, distinct);
        prop_assert_eq!(deck.draw(), Draw::Exhausted);
    }

    /// Property: supplying cards after exhaustion never re-introduces a
    /// card that was already drawn.
    #[test]
    fn prop_supply_never_repeats(
        first in prop::collection::vec(0u32..50, 1..30),
        second in prop::collection::vec(0u32..100, 0..30),
        seed in any::<u64>(),
    ) {
        let mut deck = WordDeck::new(source(&first), DeckRng::new(seed));
        let mut seen = FxHashSet::default();
        while let Draw::Card(card) = deck.draw() {
            seen.insert(card.id());
        }

        deck.supply(source(&second));
        while let Draw::Card(card) = deck.draw() {
            prop_assert!(seen.insert(card.id()), "repeated {}", card.id());
        }
    }
}
