//! Game session: the controller a presentation layer talks to.
//!
//! `Session` owns the one `GameState` and is the only thing that mutates
//! it. Human input goes through checked methods that refuse illegal
//! requests with a `PlayError`; bot turns go through `PendingAction`s that
//! the host schedules and fires back.
//!
//! ## Usage
//!
//! ```
//! use rust_uno::core::GameConfig;
//! use rust_uno::session::Session;
//!
//! let mut session = Session::new(GameConfig::new().with_seed(5));
//! session.start_game("Ada", 2).unwrap();
//!
//! // Human plays (or draws) ... then bots take their turns:
//! while let Some(pending) = session.next_bot_action() {
//!     // a real host waits `pending.delay` first
//!     session.run_pending(pending);
//! }
//! ```

pub mod scheduler;

pub use scheduler::{BotStep, PendingAction};

use tracing::{debug, warn};

use crate::bot::{Decision, FirstPlayable, PlayerPolicy};
use crate::cards::{Card, CardId, Color};
use crate::core::{Action, GameConfig, GameState, PlayError, PlayerId, SetupError};
use crate::rules::{has_playable_card, start_game, Events, RulesEngine, UnoRules};

/// Outcome of clicking a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayRequest {
    /// A colored card was played.
    Played(Events),
    /// A wild card is waiting for `select_color`.
    NeedsColor(CardId),
}

/// Session controller.
pub struct Session<P: PlayerPolicy = FirstPlayable> {
    config: GameConfig,
    rules: UnoRules,
    policy: P,
    state: Option<GameState>,
    /// Bumped on every mutation; gates pending bot actions.
    version: u64,
    pending_wild: Option<CardId>,
    /// The current bot already drew this turn.
    bot_drew: bool,
}

impl Session<FirstPlayable> {
    /// Create a session with the default bot policy.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_policy(config, FirstPlayable)
    }
}

impl<P: PlayerPolicy> Session<P> {
    #[must_use]
    pub fn with_policy(config: GameConfig, policy: P) -> Self {
        Self {
            rules: UnoRules::new(config.rules),
            config,
            policy,
            state: None,
            version: 0,
            pending_wild: None,
            bot_drew: false,
        }
    }

    /// Deal a new game, replacing any game in progress.
    pub fn start_game(&mut self, player_name: &str, bot_count: usize) -> Result<&GameState, SetupError> {
        let state = start_game(player_name, bot_count, &self.config)?;
        self.version += 1;
        self.pending_wild = None;
        self.bot_drew = false;
        Ok(self.state.insert(state))
    }

    /// Drop the current game. Outstanding pending actions become stale.
    pub fn reset(&mut self) {
        self.state = None;
        self.version += 1;
        self.pending_wild = None;
        self.bot_drew = false;
    }

    /// Read-only view of the game, `None` before `start_game`.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The wild card waiting for a color, if any.
    #[must_use]
    pub fn pending_wild(&self) -> Option<CardId> {
        self.pending_wild
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.as_ref().and_then(|s| s.winner)
    }

    /// The playable subset of `hand` against the current discard.
    #[must_use]
    pub fn playable_cards(&self, hand: &[Card]) -> Vec<Card> {
        match &self.state {
            Some(state) => self.rules.playable_cards(state, hand),
            None => Vec::new(),
        }
    }

    /// The human may draw (or pass): it is their turn and nothing in hand is playable.
    #[must_use]
    pub fn can_draw(&self) -> bool {
        self.human_state().is_ok_and(|state| !self.has_playable(state))
    }

    /// Click on a card: play it, or park it until a color is chosen.
    pub fn request_play(&mut self, card: CardId) -> Result<PlayRequest, PlayError> {
        let state = self.human_state()?;
        let held = self.playable_in_hand(state, card)?;

        if held.is_wild() {
            self.pending_wild = Some(card);
            return Ok(PlayRequest::NeedsColor(card));
        }
        Ok(PlayRequest::Played(self.apply(Action::play(card))))
    }

    /// Resolve a parked wild card. Ignored when nothing is pending.
    pub fn select_color(&mut self, color: Color) -> Option<Events> {
        let Some(card) = self.pending_wild.take() else {
            warn!(color = %color, "color selected with no pending wild card");
            return None;
        };
        match self.play_card(card, Some(color)) {
            Ok(events) => Some(events),
            Err(err) => {
                warn!(card = %card, color = %color, error = %err, "pending wild card could not be played");
                None
            }
        }
    }

    /// Play a card from the human's hand.
    pub fn play_card(&mut self, card: CardId, color: Option<Color>) -> Result<Events, PlayError> {
        let state = self.human_state()?;
        let held = self.playable_in_hand(state, card)?;
        if held.is_wild() && color.is_none() {
            return Err(PlayError::ColorRequired(card));
        }
        Ok(self.apply(Action::Play { card, color }))
    }

    /// Draw one card for the human. The turn stays with them.
    pub fn draw_card(&mut self) -> Result<Events, PlayError> {
        self.stuck_human()?;
        Ok(self.apply(Action::Draw))
    }

    /// End the human's turn without playing.
    pub fn pass_turn(&mut self) -> Result<Events, PlayError> {
        self.stuck_human()?;
        Ok(self.apply(Action::Pass))
    }

    /// The bot action the host should schedule next, if a bot is to act.
    #[must_use]
    pub fn next_bot_action(&self) -> Option<PendingAction> {
        let state = self.state.as_ref()?;
        if !state.is_live() || !state.current_player().is_bot {
            return None;
        }

        let (step, delay) = if self.bot_drew {
            (BotStep::FollowUp, self.config.timing.follow_up_delay)
        } else {
            (BotStep::Decide, self.config.timing.think_delay)
        };
        Some(PendingAction {
            version: self.version,
            actor: state.turn,
            step,
            delay,
        })
    }

    /// Fire a scheduled bot action. Stale actions do nothing and return `None`.
    pub fn run_pending(&mut self, pending: PendingAction) -> Option<Events> {
        if !pending.is_current(self.version) {
            warn!(actor = %pending.actor, scheduled = pending.version, current = self.version, "stale bot action dropped");
            return None;
        }

        let state = self.state.as_ref()?;
        if !state.is_live() || state.turn != pending.actor || !state.current_player().is_bot {
            warn!(actor = %pending.actor, "bot action fired for an actor that cannot act");
            return None;
        }

        let ctx = self.rules.context(state)?;
        let hand = &state.current_player().hand;
        let decision = match pending.step {
            BotStep::Decide => self.policy.decide(hand, &ctx),
            BotStep::FollowUp => self.policy.follow_up(hand, &ctx),
        };
        debug!(actor = %pending.actor, step = ?pending.step, decision = ?decision, "bot decided");

        let events = self.apply(decision.into_action());
        if decision == Decision::Draw {
            self.bot_drew = true;
        }
        Some(events)
    }

    /// Run bot turns back to back until the human is to act or the game ends.
    pub fn run_bots(&mut self) -> Events {
        let mut all = Events::new();
        while let Some(pending) = self.next_bot_action() {
            match self.run_pending(pending) {
                Some(events) => all.extend(events),
                None => break,
            }
        }
        all
    }

    fn apply(&mut self, action: Action) -> Events {
        let Some(state) = self.state.as_mut() else {
            return Events::new();
        };

        let before = state.turn;
        let events = self.rules.apply_action(state, &action);
        if state.turn != before || state.is_over() {
            self.bot_drew = false;
        }
        self.pending_wild = None;
        self.version += 1;
        events
    }

    fn live_state(&self) -> Result<&GameState, PlayError> {
        let state = self.state.as_ref().ok_or(PlayError::NotStarted)?;
        if state.is_over() {
            return Err(PlayError::GameOver);
        }
        Ok(state)
    }

    fn human_state(&self) -> Result<&GameState, PlayError> {
        let state = self.live_state()?;
        if state.current_player().is_bot {
            return Err(PlayError::NotYourTurn);
        }
        Ok(state)
    }

    fn has_playable(&self, state: &GameState) -> bool {
        self.rules
            .context(state)
            .is_some_and(|ctx| has_playable_card(&ctx, &state.current_player().hand))
    }

    fn stuck_human(&self) -> Result<(), PlayError> {
        let state = self.human_state()?;
        if self.has_playable(state) {
            return Err(PlayError::MustPlay);
        }
        Ok(())
    }

    fn playable_in_hand(&self, state: &GameState, card: CardId) -> Result<Card, PlayError> {
        let held = *state
            .current_player()
            .card(card)
            .ok_or(PlayError::NotInHand(card))?;
        let ctx = self.rules.context(state).ok_or(PlayError::NotStarted)?;
        if !ctx.allows(&held) {
            return Err(PlayError::NotPlayable(card));
        }
        Ok(held)
    }
}
