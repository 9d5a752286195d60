//! Deck construction.
//!
//! The standard 108-card deck, per color:
//! - one 0, two each of 1-9
//! - two each of skip, reverse, draw-two
//!
//! plus four wild and four wild-draw-four.

use super::card::{Card, CardId, CardKind, Color};
use crate::core::GameRng;

/// Total cards in a full deck.
pub const DECK_SIZE: usize = 108;

/// Cards of each chromatic color in a full deck.
pub const CARDS_PER_COLOR: usize = 25;

/// Copies of each wild variant.
pub const WILDS_PER_KIND: usize = 4;

/// The full deck in catalog order. IDs are assigned sequentially from 0.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    let mut next_id = 0u32;
    let mut alloc = || {
        let id = CardId::new(next_id);
        next_id += 1;
        id
    };

    for color in Color::ALL {
        cards.push(Card::number(alloc(), color, 0));
        for value in 1..=9 {
            for _ in 0..2 {
                cards.push(Card::number(alloc(), color, value));
            }
        }
        for kind in CardKind::ACTIONS {
            for _ in 0..2 {
                cards.push(Card::colored(alloc(), color, kind));
            }
        }
    }

    for _ in 0..WILDS_PER_KIND {
        cards.push(Card::wild(alloc(), CardKind::Wild));
        cards.push(Card::wild(alloc(), CardKind::WildDrawFour));
    }

    cards
}

/// Build a full deck in uniformly random order.
#[must_use]
pub fn build_deck(rng: &mut GameRng) -> Vec<Card> {
    rng.shuffled(standard_deck())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_deck_size_and_unique_ids() {
        let deck = build_deck(&mut GameRng::new(42));
        assert_eq!(deck.len(), DECK_SIZE);

        let ids: FxHashSet<_> = deck.iter().map(Card::id).collect();
        assert_eq!(ids.len(), DECK_SIZE);
    }

    #[test]
    fn test_per_color_composition() {
        let deck = standard_deck();

        for color in Color::ALL {
            let of_color: Vec<_> = deck.iter().filter(|c| c.color() == Some(color)).collect();
            assert_eq!(of_color.len(), CARDS_PER_COLOR);

            let zeros = of_color.iter().filter(|c| c.value() == Some(0)).count();
            assert_eq!(zeros, 1);
            for value in 1..=9 {
                let count = of_color.iter().filter(|c| c.value() == Some(value)).count();
                assert_eq!(count, 2, "{color} {value}");
            }
            for kind in CardKind::ACTIONS {
                let count = of_color.iter().filter(|c| c.kind() == kind).count();
                assert_eq!(count, 2, "{color} {kind:?}");
            }
        }
    }

    #[test]
    fn test_wild_composition() {
        let deck = standard_deck();
        let wild = deck.iter().filter(|c| c.kind() == CardKind::Wild).count();
        let wild4 = deck.iter().filter(|c| c.kind() == CardKind::WildDrawFour).count();

        assert_eq!(wild, WILDS_PER_KIND);
        assert_eq!(wild4, WILDS_PER_KIND);
        assert!(deck.iter().filter(|c| c.is_wild()).all(|c| c.color().is_none()));
    }

    #[test]
    fn test_shuffled_deck_is_same_multiset() {
        let mut shuffled = build_deck(&mut GameRng::new(7));
        assert_ne!(shuffled, standard_deck());

        shuffled.sort_by_key(Card::id);
        assert_eq!(shuffled, standard_deck());
    }

    #[test]
    fn test_build_deck_is_seeded() {
        let a = build_deck(&mut GameRng::new(99));
        let b = build_deck(&mut GameRng::new(99));
        assert_eq!(a, b);
    }
}
