//! End-to-end game flow tests.
//!
//! These tests deal real games, then rig hands and piles to reach the
//! table situations that matter: matching plays, skips, forced draws on
//! an empty pile, bot color choice, and the winning play.

use im::Vector;
use rust_uno::bot::{Decision, FirstPlayable, PlayerPolicy};
use rust_uno::cards::{Card, CardId, CardKind, Color, DECK_SIZE};
use rust_uno::core::{BotTiming, Direction, GameConfig, GameState, PlayerId, RulesConfig};
use rust_uno::rules::{is_playable, start_game, GameEvent, RulesEngine, UnoRules};
use rust_uno::session::{PlayRequest, Session};

fn num(id: u32, color: Color, n: u8) -> Card {
    Card::number(CardId::new(id), color, n)
}

/// A dealt 4-player game whose human holds `hand` over `top`.
fn rigged(hand: Vec<Card>, top: Card) -> GameState {
    let mut state = start_game("Ada", 3, &GameConfig::new().with_seed(42)).unwrap();
    state.players[PlayerId::new(0)].hand = hand;
    state.discard_pile = Vector::unit(top);
    state.declared_color = None;
    state
}

#[test]
fn test_number_on_number_of_other_color() {
    let rules = UnoRules::default();
    let red_five = num(500, Color::Red, 5);
    let blue_five = num(501, Color::Blue, 5);
    let mut state = rigged(vec![red_five, num(502, Color::Yellow, 0)], blue_five);

    assert!(is_playable(&red_five, &blue_five, None));
    rules.play_card(&mut state, red_five.id(), None);

    assert_eq!(state.top_card(), Some(&red_five));
    assert_eq!(state.turn, PlayerId::new(1));
}

#[test]
fn test_skip_with_four_players() {
    let rules = UnoRules::default();
    let skip = Card::colored(CardId::new(500), Color::Red, CardKind::Skip);
    let mut state = rigged(vec![skip, num(502, Color::Yellow, 0)], num(501, Color::Red, 3));

    rules.play_card(&mut state, skip.id(), None);

    assert_eq!(state.direction, Direction::Ascending);
    assert_eq!(state.turn, PlayerId::new(2));
}

#[test]
fn test_wild_draw_four_on_empty_draw_pile() {
    let rules = UnoRules::default();
    let wd4 = Card::wild(CardId::new(500), CardKind::WildDrawFour);
    let mut state = rigged(vec![wd4, num(502, Color::Yellow, 0)], num(501, Color::Red, 3));
    state.draw_pile.clear();
    let victim_hand = state.player(PlayerId::new(1)).hand.clone();

    let events = rules.play_card(&mut state, wd4.id(), Some(Color::Green));

    assert_eq!(state.player(PlayerId::new(1)).hand, victim_hand);
    assert_eq!(state.turn, PlayerId::new(2));
    assert_eq!(state.active_color(), Some(Color::Green));
    assert!(!events.iter().any(|e| matches!(e, GameEvent::CardsDrawn { .. })));
}

#[test]
fn test_bot_plays_wild_and_declares_majority_color() {
    let hand = vec![
        num(500, Color::Red, 2),
        num(501, Color::Red, 7),
        Card::colored(CardId::new(502), Color::Blue, CardKind::Skip),
        Card::wild(CardId::new(503), CardKind::Wild),
    ];
    let top = Card::colored(CardId::new(504), Color::Green, CardKind::Reverse);
    let mut state = rigged(vec![num(505, Color::Yellow, 0)], top);
    state.players[PlayerId::new(1)].hand = hand;
    state.turn = PlayerId::new(1);

    let rules = UnoRules::default();
    let ctx = rules.context(&state).unwrap();
    let decision = FirstPlayable.decide(&state.current_player().hand, &ctx);
    assert_eq!(
        decision,
        Decision::Play {
            card: CardId::new(503),
            color: Some(Color::Red)
        }
    );

    rules.apply_action(&mut state, &decision.into_action());
    assert_eq!(state.top_card().map(Card::id), Some(CardId::new(503)));
    assert_eq!(state.active_color(), Some(Color::Red));
    assert_eq!(state.turn, PlayerId::new(2));
}

#[test]
fn test_last_card_wins() {
    let rules = UnoRules::default();
    let last = num(500, Color::Red, 8);
    let mut state = rigged(vec![last], num(501, Color::Red, 3));

    let events = rules.play_card(&mut state, last.id(), None);

    assert_eq!(state.winner, Some(PlayerId::new(0)));
    assert_eq!(state.turn, PlayerId::new(0));
    assert!(!events.iter().any(|e| matches!(e, GameEvent::TurnAdvanced { .. })));
    assert!(rules.legal_actions(&state).is_empty());
}

#[test]
fn test_deal_removes_hands_and_discard() {
    for bots in 1..=3 {
        let state = start_game("Ada", bots, &GameConfig::new().with_seed(bots as u64)).unwrap();
        let players = bots + 1;
        let removed = DECK_SIZE - state.draw_pile.len() - state.out_of_play.len();

        assert_eq!(removed, 7 * players + 1);
        assert_eq!(state.total_cards(), DECK_SIZE);
    }
}

/// Drive the human through the session the same way a bot would.
fn human_turn(session: &mut Session) {
    let state = session.state().unwrap();
    let rules = UnoRules::new(session.config().rules);
    let ctx = rules.context(state).unwrap();
    let hand = state.current_player().hand.clone();

    match FirstPlayable.decide(&hand, &ctx) {
        Decision::Play { card, color } => match session.request_play(card).unwrap() {
            PlayRequest::Played(_) => {}
            PlayRequest::NeedsColor(_) => {
                session.select_color(color.unwrap_or(Color::Red)).unwrap();
            }
        },
        Decision::Draw | Decision::Pass => {
            session.draw_card().unwrap();
            let state = session.state().unwrap();
            let ctx = rules.context(state).unwrap();
            match FirstPlayable.follow_up(&state.current_player().hand, &ctx) {
                Decision::Play { card, color } => {
                    session.play_card(card, color).unwrap();
                }
                _ => {
                    session.pass_turn().unwrap();
                }
            }
        }
    }
}

#[test]
fn test_session_full_game_conserves_cards() {
    for seed in 0..8 {
        let config = GameConfig::new()
            .with_seed(seed)
            .with_timing(BotTiming::immediate())
            .with_rules(RulesConfig::default().with_reshuffle(true));
        let mut session = Session::new(config);
        session.start_game("Ada", 3).unwrap();

        for _ in 0..500 {
            if session.winner().is_some() {
                break;
            }
            human_turn(&mut session);
            assert_eq!(session.state().unwrap().total_cards(), DECK_SIZE);
            session.run_bots();
            assert_eq!(session.state().unwrap().total_cards(), DECK_SIZE);
        }

        let state = session.state().unwrap();
        if let Some(winner) = state.winner {
            assert!(state.player(winner).hand.is_empty());
            assert_eq!(state.turn, winner);
        }
    }
}
