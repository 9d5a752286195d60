//! Game state: the authoritative aggregate and its public view.
//!
//! ## GameState
//!
//! Complete game state:
//! - Players and their hands
//! - Draw pile (front = next card drawn) and discard pile (back = top card)
//! - Turn, direction, declared wild color, winner
//! - Action history and RNG
//!
//! Piles use `im` persistent vectors so a whole state clones in O(1),
//! which keeps pure `(state, action) -> state'` transitions cheap.
//!
//! ## PublicState
//!
//! What a renderer is allowed to see: hand sizes instead of hands.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{Card, Color};

/// Rotation order of turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Ascending seat order (+1).
    #[default]
    Ascending,
    /// Descending seat order (-1).
    Descending,
}

impl Direction {
    /// +1 or -1.
    #[must_use]
    pub const fn sign(self) -> i64 {
        match self {
            Direction::Ascending => 1,
            Direction::Descending => -1,
        }
    }

    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

/// Full game state.
///
/// Mutated only by the rules engine. Every card is in exactly one of:
/// a hand, the draw pile, the discard pile, or `out_of_play`.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Seated players, fixed for the whole game.
    pub players: PlayerMap<Player>,

    /// Whose turn it is.
    pub turn: PlayerId,

    /// Front = next card to draw.
    pub draw_pile: Vector<Card>,

    /// Back = top of discard.
    pub discard_pile: Vector<Card>,

    /// Cards removed from the game during setup.
    pub out_of_play: Vector<Card>,

    pub direction: Direction,

    /// False until dealing completes.
    pub started: bool,

    /// Set exactly once, when a player empties their hand.
    pub winner: Option<PlayerId>,

    /// Color nominated for a wild top card.
    pub declared_color: Option<Color>,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Every applied action, in order.
    pub history: Vector<ActionRecord>,

    /// RNG for mid-game reshuffles.
    pub rng: GameRng,
}

impl GameState {
    /// Create an undealt state: empty hands, the whole deck in the draw pile.
    #[must_use]
    pub fn new(players: PlayerMap<Player>, draw_pile: Vector<Card>, rng: GameRng) -> Self {
        Self {
            players,
            turn: PlayerId::new(0),
            draw_pile,
            discard_pile: Vector::new(),
            out_of_play: Vector::new(),
            direction: Direction::default(),
            started: false,
            winner: None,
            declared_color: None,
            turn_number: 1,
            history: Vector::new(),
            rng,
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    pub fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.turn]
    }

    /// Top of the discard pile.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.discard_pile.back()
    }

    /// The declared color, only while a wild card is on top.
    #[must_use]
    pub fn active_color(&self) -> Option<Color> {
        match self.top_card() {
            Some(top) if top.is_wild() => self.declared_color,
            _ => None,
        }
    }

    /// Dealt and without a winner.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.started && self.winner.is_none()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// The seat `steps` turns away from `from` in the current direction.
    #[must_use]
    pub fn seat_after(&self, from: PlayerId, steps: usize) -> PlayerId {
        let count = self.player_count() as i64;
        let offset = self.direction.sign() * steps as i64;
        let index = (from.index() as i64 + offset).rem_euclid(count);
        PlayerId::new(index as u8)
    }

    /// Cards across all hands and piles (108 for a full deck).
    #[must_use]
    pub fn total_cards(&self) -> usize {
        let in_hands: usize = self.players.values().map(Player::hand_size).sum();
        in_hands + self.draw_pile.len() + self.discard_pile.len() + self.out_of_play.len()
    }

    /// Record an action by the current player.
    pub fn record(&mut self, action: Action) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(self.turn, action, self.turn_number, sequence));
    }

    /// Snapshot of the public information.
    #[must_use]
    pub fn public_state(&self) -> PublicState {
        PublicState {
            players: self
                .players
                .values()
                .map(|p| PlayerSummary {
                    id: p.id,
                    name: p.name.clone(),
                    hand_size: p.hand_size(),
                    is_bot: p.is_bot,
                })
                .collect(),
            turn: self.turn,
            top_card: self.top_card().copied(),
            declared_color: self.active_color(),
            draw_pile_size: self.draw_pile.len(),
            direction: self.direction,
            winner: self.winner,
            started: self.started,
        }
    }
}

/// One player as seen by everyone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub hand_size: usize,
    pub is_bot: bool,
}

/// Public game state - observable by all players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicState {
    pub players: Vec<PlayerSummary>,
    pub turn: PlayerId,
    pub top_card: Option<Card>,
    pub declared_color: Option<Color>,
    pub draw_pile_size: usize,
    pub direction: Direction,
    pub winner: Option<PlayerId>,
    pub started: bool,
}
