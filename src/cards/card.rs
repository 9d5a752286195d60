//! Card identity and attributes.
//!
//! A `Card` is an immutable value. Its `CardKind` carries the face value
//! for number cards, so "number is set iff kind is number" holds by
//! construction. Wild variants have no color.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::CardError;

/// Highest face value on a number card.
pub const MAX_FACE_VALUE: u8 = 9;

/// Unique identifier for one physical card in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// One of the four chromatic colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// All chromatic colors, in catalog order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a card does when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// Face value 0-9.
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl CardKind {
    /// The three colored action kinds, in catalog order.
    pub const ACTIONS: [CardKind; 3] = [CardKind::Skip, CardKind::Reverse, CardKind::DrawTwo];

    /// Is this `Wild` or `WildDrawFour`?
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, CardKind::Wild | CardKind::WildDrawFour)
    }

    /// Kind equality that ignores a number card's face value.
    #[must_use]
    pub fn same_kind(self, other: CardKind) -> bool {
        std::mem::discriminant(&self) == std::mem::discriminant(&other)
    }

    /// Cards the next player must take when this kind is played.
    #[must_use]
    pub const fn forced_draw(self) -> usize {
        match self {
            CardKind::DrawTwo => 2,
            CardKind::WildDrawFour => 4,
            _ => 0,
        }
    }

    /// Turn steps taken after this kind is played (skips and draws jump two).
    #[must_use]
    pub const fn turn_steps(self) -> usize {
        match self {
            CardKind::Skip | CardKind::DrawTwo | CardKind::WildDrawFour => 2,
            _ => 1,
        }
    }

    /// Short face label.
    #[must_use]
    pub fn symbol(self) -> String {
        match self {
            CardKind::Number(n) => n.to_string(),
            CardKind::Skip => "⊘".to_string(),
            CardKind::Reverse => "⟲".to_string(),
            CardKind::DrawTwo => "+2".to_string(),
            CardKind::Wild => "W".to_string(),
            CardKind::WildDrawFour => "+4".to_string(),
        }
    }
}

/// An immutable card.
///
/// ```
/// use rust_uno::cards::{Card, CardId, CardKind, Color};
///
/// let five = Card::number(CardId::new(1), Color::Red, 5);
/// assert_eq!(five.value(), Some(5));
/// assert_eq!(five.to_string(), "red 5");
///
/// let wild = Card::wild(CardId::new(2), CardKind::WildDrawFour);
/// assert_eq!(wild.color(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    id: CardId,
    color: Option<Color>,
    kind: CardKind,
}

/// Wire shape of a card before its invariants are checked.
#[derive(Deserialize)]
struct RawCard {
    id: CardId,
    color: Option<Color>,
    kind: CardKind,
}

impl TryFrom<RawCard> for Card {
    type Error = CardError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        match (raw.kind, raw.color) {
            (CardKind::Number(value), _) if value > MAX_FACE_VALUE => Err(CardError::FaceValue(value)),
            (kind, Some(_)) if kind.is_wild() => Err(CardError::ColoredWild(raw.id)),
            (kind, None) if !kind.is_wild() => Err(CardError::MissingColor(raw.id)),
            (kind, color) => Ok(Self {
                id: raw.id,
                color,
                kind,
            }),
        }
    }
}

impl Card {
    /// A number card. `value` must be at most `MAX_FACE_VALUE`.
    ///
    /// Debug builds panic on a larger value; release builds cap it.
    #[must_use]
    pub fn number(id: CardId, color: Color, value: u8) -> Self {
        debug_assert!(value <= MAX_FACE_VALUE, "face value {value} is above {MAX_FACE_VALUE}");
        Self {
            id,
            color: Some(color),
            kind: CardKind::Number(value.min(MAX_FACE_VALUE)),
        }
    }

    /// A colored card of the given kind.
    ///
    /// Wild kinds are accepted but lose the color.
    #[must_use]
    pub fn colored(id: CardId, color: Color, kind: CardKind) -> Self {
        if kind.is_wild() {
            return Self::wild(id, kind);
        }
        if let CardKind::Number(value) = kind {
            return Self::number(id, color, value);
        }
        Self {
            id,
            color: Some(color),
            kind,
        }
    }

    /// A colorless wild card. Non-wild kinds fall back to plain `Wild`.
    #[must_use]
    pub fn wild(id: CardId, kind: CardKind) -> Self {
        let kind = if kind.is_wild() { kind } else { CardKind::Wild };
        Self {
            id,
            color: None,
            kind,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Chromatic color, `None` for wild variants.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    #[must_use]
    pub fn kind(&self) -> CardKind {
        self.kind
    }

    /// Face value, present only for number cards.
    #[must_use]
    pub fn value(&self) -> Option<u8> {
        match self.kind {
            CardKind::Number(n) => Some(n),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_wild(&self) -> bool {
        self.kind.is_wild()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Some(color) => write!(f, "{} {}", color, self.kind.symbol()),
            None => match self.kind {
                CardKind::WildDrawFour => f.write_str("wild +4"),
                _ => f.write_str("wild"),
            },
        }
    }
}
