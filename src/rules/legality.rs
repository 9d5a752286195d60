//! Legality checking: may a card be played on the current discard?
//!
//! Precedence:
//! 1. Wild candidates are always playable.
//! 2. On a wild top, the candidate must match the declared color
//!    (no declared color means anything goes).
//! 3. Otherwise match by color, by kind, or by number value.

use crate::cards::{Card, Color};
use crate::core::NumberMatch;

/// Check a candidate under the default (`AnyNumber`) rules.
///
/// ```
/// use rust_uno::cards::{Card, CardId, Color};
/// use rust_uno::rules::is_playable;
///
/// let top = Card::number(CardId::new(1), Color::Blue, 5);
/// let red_five = Card::number(CardId::new(2), Color::Red, 5);
/// assert!(is_playable(&red_five, &top, None));
/// ```
#[must_use]
pub fn is_playable(candidate: &Card, top: &Card, declared: Option<Color>) -> bool {
    is_playable_with(NumberMatch::AnyNumber, candidate, top, declared)
}

/// Check a candidate under an explicit number-matching rule.
///
/// With `AnyNumber`, kind equality makes every number card playable on
/// every other number card regardless of face value.
#[must_use]
pub fn is_playable_with(
    number_match: NumberMatch,
    candidate: &Card,
    top: &Card,
    declared: Option<Color>,
) -> bool {
    if candidate.is_wild() {
        return true;
    }

    if top.is_wild() {
        return declared.map_or(true, |color| candidate.color() == Some(color));
    }

    if candidate.color() == top.color() {
        return true;
    }

    match (candidate.value(), top.value()) {
        (Some(a), Some(b)) => match number_match {
            NumberMatch::AnyNumber => true,
            NumberMatch::SameValue => a == b,
        },
        _ => candidate.kind().same_kind(top.kind()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardKind};

    fn num(id: u32, color: Color, n: u8) -> Card {
        Card::number(CardId::new(id), color, n)
    }

    fn action(id: u32, color: Color, kind: CardKind) -> Card {
        Card::colored(CardId::new(id), color, kind)
    }

    #[test]
    fn test_wild_always_playable() {
        let wild = Card::wild(CardId::new(1), CardKind::Wild);
        let wild4 = Card::wild(CardId::new(2), CardKind::WildDrawFour);
        let top = action(3, Color::Red, CardKind::Skip);

        assert!(is_playable(&wild, &top, None));
        assert!(is_playable(&wild4, &wild, Some(Color::Blue)));
    }

    #[test]
    fn test_color_match() {
        let top = num(1, Color::Red, 3);
        assert!(is_playable(&action(2, Color::Red, CardKind::Reverse), &top, None));
        assert!(!is_playable(&action(3, Color::Blue, CardKind::Reverse), &top, None));
    }

    #[test]
    fn test_action_kind_match_across_colors() {
        let top = action(1, Color::Green, CardKind::DrawTwo);
        assert!(is_playable(&action(2, Color::Yellow, CardKind::DrawTwo), &top, None));
        assert!(!is_playable(&action(3, Color::Yellow, CardKind::Skip), &top, None));
        assert!(!is_playable(&num(4, Color::Yellow, 2), &top, None));
    }

    #[test]
    fn test_any_number_matches_any_number() {
        let top = num(1, Color::Blue, 5);
        assert!(is_playable(&num(2, Color::Red, 5), &top, None));
        assert!(is_playable(&num(3, Color::Red, 8), &top, None));
    }

    #[test]
    fn test_same_value_rule_tightens_numbers() {
        let top = num(1, Color::Blue, 5);
        let rule = NumberMatch::SameValue;

        assert!(is_playable_with(rule, &num(2, Color::Red, 5), &top, None));
        assert!(!is_playable_with(rule, &num(3, Color::Red, 8), &top, None));
        assert!(is_playable_with(rule, &num(4, Color::Blue, 8), &top, None));
    }

    #[test]
    fn test_wild_top_with_declared_color() {
        let top = Card::wild(CardId::new(1), CardKind::Wild);
        let red = num(2, Color::Red, 1);

        assert!(is_playable(&red, &top, Some(Color::Red)));
        assert!(!is_playable(&red, &top, Some(Color::Green)));
    }

    #[test]
    fn test_wild_top_without_declared_color_allows_anything() {
        let top = Card::wild(CardId::new(1), CardKind::WildDrawFour);
        assert!(is_playable(&num(2, Color::Yellow, 9), &top, None));
        assert!(is_playable(&action(3, Color::Blue, CardKind::Skip), &top, None));
    }

    #[test]
    fn test_declared_color_ignored_on_colored_top() {
        let top = num(1, Color::Red, 4);
        let blue_skip = action(2, Color::Blue, CardKind::Skip);
        assert!(!is_playable(&blue_skip, &top, Some(Color::Blue)));
    }
}
