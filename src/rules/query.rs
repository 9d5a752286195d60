//! Derived views: which cards in a hand may be played right now.

use crate::cards::{Card, Color};
use crate::core::{GameState, NumberMatch, RulesConfig};

use super::legality::is_playable_with;

/// Everything legality depends on, captured from a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayContext {
    pub top: Card,
    /// Declared color, only set while `top` is wild.
    pub declared: Option<Color>,
    pub number_match: NumberMatch,
}

impl PlayContext {
    #[must_use]
    pub fn new(top: Card, declared: Option<Color>) -> Self {
        Self {
            top,
            declared,
            number_match: NumberMatch::default(),
        }
    }

    /// Capture the current discard context. `None` before the first discard.
    #[must_use]
    pub fn from_state(state: &GameState, rules: &RulesConfig) -> Option<Self> {
        let top = *state.top_card()?;
        Some(Self {
            top,
            declared: state.active_color(),
            number_match: rules.number_match,
        })
    }

    #[must_use]
    pub fn with_number_match(mut self, number_match: NumberMatch) -> Self {
        self.number_match = number_match;
        self
    }

    /// May `card` be played in this context?
    #[must_use]
    pub fn allows(&self, card: &Card) -> bool {
        is_playable_with(self.number_match, card, &self.top, self.declared)
    }
}

/// The playable subset of `hand`, in hand order.
#[must_use]
pub fn playable_cards(ctx: &PlayContext, hand: &[Card]) -> Vec<Card> {
    hand.iter().filter(|card| ctx.allows(card)).copied().collect()
}

#[must_use]
pub fn has_playable_card(ctx: &PlayContext, hand: &[Card]) -> bool {
    hand.iter().any(|card| ctx.allows(card))
}
