//! Core types: players, state, actions, RNG, configuration, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{BotTiming, GameConfig, NumberMatch, RulesConfig};
pub use error::{CardError, PlayError, SetupError};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{Direction, GameState, PlayerSummary, PublicState};
