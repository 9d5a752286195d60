//! Card catalog and deck builder.
//!
//! ## Key Types
//!
//! - `CardId`: Identity of one physical card, unique within a deck
//! - `Color`: The four chromatic colors
//! - `CardKind`: Number (with face value), skip, reverse, draw-two, wild, wild-draw-four
//! - `Card`: Immutable identity + color + kind
//!
//! `build_deck` produces the 108-card deck in shuffled order.

pub mod card;
pub mod deck;

pub use card::{Card, CardId, CardKind, Color, MAX_FACE_VALUE};
pub use deck::{build_deck, standard_deck, CARDS_PER_COLOR, DECK_SIZE, WILDS_PER_KIND};
