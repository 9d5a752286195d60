//! Action representation.
//!
//! Three verbs cover every turn:
//! - `Play` a card from hand, with a declared color for wilds
//! - `Draw` the front card of the draw pile
//! - `Pass` the turn without playing

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::{CardId, Color};

/// A single turn action by the current player.
///
/// ```
/// use rust_uno::cards::{CardId, Color};
/// use rust_uno::core::Action;
///
/// let play = Action::play(CardId::new(5));
/// let wild = Action::play_wild(CardId::new(104), Color::Green);
/// assert_ne!(play, wild);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Play { card: CardId, color: Option<Color> },
    Draw,
    Pass,
}

impl Action {
    /// Play a non-wild card.
    #[must_use]
    pub fn play(card: CardId) -> Self {
        Action::Play { card, color: None }
    }

    /// Play a wild card, declaring `color`.
    #[must_use]
    pub fn play_wild(card: CardId, color: Color) -> Self {
        Action::Play {
            card,
            color: Some(color),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay/debugging and to let renderers show recent plays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the game (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
