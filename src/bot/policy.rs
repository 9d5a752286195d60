//! Automated player policies.
//!
//! A policy sees only its own hand and the discard context. It decides
//! what to do; the session applies the decision through the engine.

use rustc_hash::FxHashMap;

use crate::cards::{Card, CardId, Color};
use crate::core::Action;
use crate::rules::{playable_cards, PlayContext};

/// What a bot does on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Play { card: CardId, color: Option<Color> },
    Draw,
    Pass,
}

impl Decision {
    #[must_use]
    pub fn into_action(self) -> Action {
        match self {
            Decision::Play { card, color } => Action::Play { card, color },
            Decision::Draw => Action::Draw,
            Decision::Pass => Action::Pass,
        }
    }
}

/// Policy for automated players.
pub trait PlayerPolicy: Send + Sync {
    /// Play a card or draw.
    fn decide(&self, hand: &[Card], ctx: &PlayContext) -> Decision;

    /// After drawing: play if something is now legal, otherwise pass.
    ///
    /// Never draws again in the same turn.
    fn follow_up(&self, hand: &[Card], ctx: &PlayContext) -> Decision {
        match self.decide(hand, ctx) {
            Decision::Draw => Decision::Pass,
            decision => decision,
        }
    }
}

/// Plays the first legal card in hand order; draws when nothing is legal.
///
/// Wild cards declare the color most common among the rest of the hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstPlayable;

impl PlayerPolicy for FirstPlayable {
    fn decide(&self, hand: &[Card], ctx: &PlayContext) -> Decision {
        let Some(card) = playable_cards(ctx, hand).into_iter().next() else {
            return Decision::Draw;
        };

        let color = card.is_wild().then(|| {
            let rest: Vec<Card> = hand.iter().filter(|c| c.id() != card.id()).copied().collect();
            choose_color(&rest)
        });
        Decision::Play {
            card: card.id(),
            color,
        }
    }
}

/// The chromatic color held most often in `hand`.
///
/// Wild cards are not counted. Ties go to the earliest color in
/// `Color::ALL`; an all-wild or empty hand picks red.
#[must_use]
pub fn choose_color(hand: &[Card]) -> Color {
    let mut counts: FxHashMap<Color, usize> = FxHashMap::default();
    for color in hand.iter().filter_map(Card::color) {
        *counts.entry(color).or_insert(0) += 1;
    }

    let mut best = Color::ALL[0];
    let mut best_count = 0;
    for color in Color::ALL {
        let count = counts.get(&color).copied().unwrap_or(0);
        if count > best_count {
            best = color;
            best_count = count;
        }
    }
    best
}
