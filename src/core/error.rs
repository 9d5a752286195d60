//! Error types for game setup and checked player actions.
//!
//! Engine transitions never fail; these errors come from the boundary
//! that decides whether a transition may be requested at all.

use thiserror::Error;

use crate::cards::CardId;

/// Why serialized card data was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("face value out of range (got={0}, max=9)")]
    FaceValue(u8),
    #[error("{0} is wild and cannot carry a color")]
    ColoredWild(CardId),
    #[error("{0} is colored but has no color")]
    MissingColor(CardId),
}

/// Why a game could not be started.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("player name is empty")]
    EmptyName,
    #[error("bot count must be 1..=3 (got={got})")]
    BotCount { got: usize },
    #[error("deck too small for the deal (needed={needed}, available={available})")]
    DeckTooSmall { needed: usize, available: usize },
}

/// Why a requested action was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlayError {
    #[error("game has not started")]
    NotStarted,
    #[error("game is over")]
    GameOver,
    #[error("it is not the human player's turn")]
    NotYourTurn,
    #[error("{0} is not in the current hand")]
    NotInHand(CardId),
    #[error("{0} cannot be played on the current discard")]
    NotPlayable(CardId),
    #[error("{0} is wild and needs a declared color")]
    ColorRequired(CardId),
    #[error("a playable card is in hand")]
    MustPlay,
}
