//! Events produced by transitions.
//!
//! Renderers animate from events instead of diffing states. Most
//! transitions emit two to four events, so they live in a `SmallVec`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Color};
use crate::core::{Direction, PlayerId};

/// Something observable that a transition did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    CardPlayed {
        player: PlayerId,
        card: Card,
        declared_color: Option<Color>,
    },
    /// `count` may be less than the penalty when the pile ran dry.
    CardsDrawn {
        player: PlayerId,
        count: usize,
        forced: bool,
    },
    DirectionReversed {
        direction: Direction,
    },
    TurnAdvanced {
        from: PlayerId,
        to: PlayerId,
    },
    /// Discard pile (minus top) shuffled back into the draw pile.
    DiscardReshuffled {
        count: usize,
    },
    PlayerWon {
        player: PlayerId,
    },
}

/// Events from a single transition, in the order they happened.
pub type Events = SmallVec<[GameEvent; 4]>;
