//! # rust-uno
//!
//! An UNO rules engine for one human and one to three automated players.
//!
//! ## Design Principles
//!
//! 1. **Engine Owns the Rules**: Legality, turn rotation and card effects
//!    live in `rules`. Presentation layers only read state and request
//!    transitions.
//!
//! 2. **Conservation**: Every one of the 108 cards is always in exactly one
//!    hand or pile.
//!
//! 3. **Deterministic When Seeded**: The same seed deals the same game.
//!
//! ## Architecture
//!
//! - **Persistent Piles**: `im` vectors make a state clone O(1), so the
//!   pure `transition` costs no more than the in-place one.
//!
//! - **Host-Owned Timers**: Bot turns are `PendingAction`s the host fires
//!   after a delay. A version counter cancels any that went stale.
//!
//! ## Modules
//!
//! - `core`: Players, state, actions, RNG, configuration, errors
//! - `cards`: Card model and the standard deck
//! - `rules`: Legality, setup, and the turn/effect engine
//! - `bot`: Automated player policies
//! - `session`: The controller a UI talks to

pub mod bot;
pub mod cards;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, BotTiming, CardError, Direction, GameConfig, GameRng, GameState, NumberMatch,
    PlayError, Player, PlayerId, PlayerMap, PublicState, RulesConfig, SetupError,
};

pub use crate::cards::{build_deck, standard_deck, Card, CardId, CardKind, Color, DECK_SIZE};

pub use crate::rules::{
    is_playable, playable_cards, start_game, Events, GameEvent, PlayContext, RulesEngine, UnoRules,
};

pub use crate::bot::{choose_color, Decision, FirstPlayable, PlayerPolicy};

pub use crate::session::{BotStep, PendingAction, PlayRequest, Session};
