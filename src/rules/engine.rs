//! Turn/effect engine.
//!
//! `UnoRules` applies the three transitions (play, draw, pass) to a
//! `GameState`. Every transition is atomic and returns the events it
//! produced. Calls against an unstarted or finished game, draws from an
//! empty pile, and plays of cards missing from the acting hand are no-ops
//! with no events.

use tracing::{debug, info, warn};

use super::event::{Events, GameEvent};
use super::query::{playable_cards, PlayContext};
use crate::cards::{Card, CardId, CardKind, Color};
use crate::core::{Action, GameState, PlayerId, RulesConfig};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty vec if nobody can act
/// - `apply_action`: Must be deterministic given the state's RNG
/// - `is_terminal`: Return None if the game continues
pub trait RulesEngine {
    /// Rule variants in force.
    fn rules(&self) -> &RulesConfig;

    /// Enumerate all legal actions for the current player.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Apply an action for the current player, in place.
    fn apply_action(&self, state: &mut GameState, action: &Action) -> Events;

    /// The winner, once the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<PlayerId> {
        state.winner
    }

    /// Pure transition: `(state, action) -> state'`.
    ///
    /// The input state is untouched; piles share structure with it.
    fn transition(&self, state: &GameState, action: &Action) -> (GameState, Events) {
        let mut next = state.clone();
        let events = self.apply_action(&mut next, action);
        (next, events)
    }
}

/// The UNO rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnoRules {
    config: RulesConfig,
}

impl UnoRules {
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// Legality context for the current discard.
    #[must_use]
    pub fn context(&self, state: &GameState) -> Option<PlayContext> {
        PlayContext::from_state(state, &self.config)
    }

    /// The playable subset of `hand` against the current discard, in hand order.
    #[must_use]
    pub fn playable_cards(&self, state: &GameState, hand: &[Card]) -> Vec<Card> {
        self.context(state)
            .map(|ctx| playable_cards(&ctx, hand))
            .unwrap_or_default()
    }

    /// Play `card_id` from the current player's hand.
    ///
    /// `color` is the declared color for a wild card; it is ignored for
    /// colored cards. Legality is the caller's responsibility.
    pub fn play_card(&self, state: &mut GameState, card_id: CardId, color: Option<Color>) -> Events {
        let mut events = Events::new();
        if !state.is_live() {
            return events;
        }

        let player = state.turn;
        let Some(card) = state.current_player_mut().take_card(card_id) else {
            warn!(player = %player, card = %card_id, "played card is not in hand");
            return events;
        };

        let declared = if card.is_wild() { color } else { None };
        state.record(Action::Play { card: card_id, color: declared });
        state.discard_pile.push_back(card);
        state.declared_color = declared;
        events.push(GameEvent::CardPlayed {
            player,
            card,
            declared_color: declared,
        });
        debug!(player = %player, card = %card, declared = ?declared, "card played");

        let kind = card.kind();
        if kind == CardKind::Reverse {
            state.direction = state.direction.reversed();
            events.push(GameEvent::DirectionReversed {
                direction: state.direction,
            });
        }

        let penalty = kind.forced_draw();
        if penalty > 0 {
            let victim = state.seat_after(player, 1);
            self.draw_into_hand(state, victim, penalty, true, &mut events);
        }

        if state.players[player].hand.is_empty() {
            state.winner = Some(player);
            events.push(GameEvent::PlayerWon { player });
            info!(player = %player, name = %state.players[player].name, "game won");
            return events;
        }

        self.advance(state, kind.turn_steps(), &mut events);
        events
    }

    /// Move the front card of the draw pile into the current player's hand.
    ///
    /// Does not advance the turn.
    pub fn draw_card(&self, state: &mut GameState) -> Events {
        let mut events = Events::new();
        if !state.is_live() {
            return events;
        }

        let player = state.turn;
        if self.draw_into_hand(state, player, 1, false, &mut events) == 0 {
            return Events::new();
        }
        state.record(Action::Draw);
        events
    }

    /// End the current player's turn without playing.
    pub fn pass_turn(&self, state: &mut GameState) -> Events {
        let mut events = Events::new();
        if !state.is_live() {
            return events;
        }

        state.record(Action::Pass);
        self.advance(state, 1, &mut events);
        events
    }

    /// Can a draw yield a card right now?
    #[must_use]
    pub fn can_draw(&self, state: &GameState) -> bool {
        !state.draw_pile.is_empty() || (self.config.reshuffle_discard && state.discard_pile.len() > 1)
    }

    fn advance(&self, state: &mut GameState, steps: usize, events: &mut Events) {
        let from = state.turn;
        let to = state.seat_after(from, steps);
        state.turn = to;
        state.turn_number += 1;
        events.push(GameEvent::TurnAdvanced { from, to });
        debug!(from = %from, to = %to, steps, "turn advanced");
    }

    /// Transfer up to `count` cards from the front of the draw pile.
    ///
    /// Returns the number actually transferred.
    fn draw_into_hand(
        &self,
        state: &mut GameState,
        player: PlayerId,
        count: usize,
        forced: bool,
        events: &mut Events,
    ) -> usize {
        if self.config.reshuffle_discard && state.draw_pile.len() < count {
            self.reshuffle_discard(state, events);
        }

        let drawn: Vec<Card> = std::iter::from_fn(|| state.draw_pile.pop_front())
            .take(count)
            .collect();
        let drawn_count = drawn.len();
        state.players[player].hand.extend(drawn);

        if drawn_count > 0 {
            events.push(GameEvent::CardsDrawn {
                player,
                count: drawn_count,
                forced,
            });
        }
        if drawn_count < count {
            debug!(player = %player, wanted = count, got = drawn_count, "draw pile exhausted");
        }
        drawn_count
    }

    /// Shuffle every discard except the top card back under the draw pile.
    fn reshuffle_discard(&self, state: &mut GameState, events: &mut Events) {
        if state.discard_pile.len() <= 1 {
            return;
        }
        let Some(top) = state.discard_pile.pop_back() else {
            return;
        };

        let spent: Vec<Card> = std::mem::take(&mut state.discard_pile).into_iter().collect();
        let count = spent.len();
        let refill = state.rng.shuffled(spent);
        state.draw_pile.extend(refill);
        state.discard_pile.push_back(top);

        events.push(GameEvent::DiscardReshuffled { count });
        debug!(count, "discard pile reshuffled into draw pile");
    }
}

impl RulesEngine for UnoRules {
    fn rules(&self) -> &RulesConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        if !state.is_live() {
            return vec![];
        }

        let mut actions = Vec::new();
        for card in self.playable_cards(state, &state.current_player().hand) {
            if card.is_wild() {
                actions.extend(Color::ALL.map(|color| Action::play_wild(card.id(), color)));
            } else {
                actions.push(Action::play(card.id()));
            }
        }

        if self.can_draw(state) {
            actions.push(Action::Draw);
        }
        actions.push(Action::Pass);
        actions
    }

    fn apply_action(&self, state: &mut GameState, action: &Action) -> Events {
        match *action {
            Action::Play { card, color } => self.play_card(state, card, color),
            Action::Draw => self.draw_card(state),
            Action::Pass => self.pass_turn(state),
        }
    }
}
