//! UNO rules: legality, setup, and the turn/effect engine.
//!
//! - `legality`: may a card be played on the discard top?
//! - `query`: playable subsets of a hand
//! - `setup`: deal a new game
//! - `engine`: play/draw/pass transitions and the `RulesEngine` trait
//! - `event`: what each transition did

pub mod engine;
pub mod event;
pub mod legality;
pub mod query;
pub mod setup;

pub use engine::{RulesEngine, UnoRules};
pub use event::{Events, GameEvent};
pub use legality::{is_playable, is_playable_with};
pub use query::{has_playable_card, playable_cards, PlayContext};
pub use setup::{start_game, BOT_RANGE};
