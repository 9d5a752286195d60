//! Game setup: seat players, deal, expose the first discard.

use tracing::{debug, info};

use crate::cards::{build_deck, DECK_SIZE};
use crate::core::{GameConfig, GameRng, GameState, Player, PlayerId, PlayerMap, SetupError};

/// Bots allowed at the table.
pub const BOT_RANGE: std::ops::RangeInclusive<usize> = 1..=3;

/// Build a shuffled deck, seat one human and `bot_count` bots, and deal.
///
/// Each player receives `config.hand_size` cards from the front of the
/// deck, in seat order. The first non-wild card after the deal becomes the
/// discard top; wild cards passed over on the way are removed from play.
///
/// ```
/// use rust_uno::core::GameConfig;
/// use rust_uno::rules::start_game;
///
/// let state = start_game("Ada", 3, &GameConfig::new().with_seed(1)).unwrap();
/// assert_eq!(state.player_count(), 4);
/// assert_eq!(state.current_player().hand.len(), 7);
/// assert!(!state.top_card().unwrap().is_wild());
/// ```
pub fn start_game(player_name: &str, bot_count: usize, config: &GameConfig) -> Result<GameState, SetupError> {
    let name = player_name.trim();
    if name.is_empty() {
        return Err(SetupError::EmptyName);
    }
    if !BOT_RANGE.contains(&bot_count) {
        return Err(SetupError::BotCount { got: bot_count });
    }

    let player_count = 1 + bot_count;
    let needed = player_count * config.hand_size + 1;
    if needed > DECK_SIZE {
        return Err(SetupError::DeckTooSmall {
            needed,
            available: DECK_SIZE,
        });
    }

    let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    let deck = build_deck(&mut rng.for_context("deal"));
    let seed = rng.seed();

    let players = PlayerMap::new(player_count, |id| {
        if id.index() == 0 {
            Player::human(id, name)
        } else {
            Player::bot(id)
        }
    });
    let mut state = GameState::new(players, deck.into_iter().collect(), rng);

    for id in PlayerId::all(player_count) {
        let rest = state.draw_pile.split_off(config.hand_size);
        let hand = std::mem::replace(&mut state.draw_pile, rest);
        state.players[id].hand = hand.into_iter().collect();
    }

    loop {
        match state.draw_pile.pop_front() {
            Some(card) if card.is_wild() => {
                debug!(card = %card, "wild removed while opening discard");
                state.out_of_play.push_back(card);
            }
            Some(card) => {
                state.discard_pile.push_back(card);
                break;
            }
            None => {
                return Err(SetupError::DeckTooSmall {
                    needed: needed + state.out_of_play.len(),
                    available: DECK_SIZE,
                });
            }
        }
    }

    state.started = true;
    info!(players = player_count, seed, "game started");
    Ok(state)
}
