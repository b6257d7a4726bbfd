use super::suit::Suit;
use serde::Deserialize;
use serde::Serialize;

/// A single mahjong tile.
///
/// Immutable value type. Equality and ordering are by `(suit, value)`,
/// which is also the canonical sort order of a hand.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tile {
    suit: Suit,
    value: u8,
}

impl Tile {
    /// Number of distinct tile kinds across every suit.
    pub const KINDS: usize = 9 * 6;

    pub fn new(suit: Suit, value: u8) -> Self {
        debug_assert!(value >= 1 && value <= suit.ranks(), "{}{} out of range", value, suit);
        Self { suit, value }
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    pub fn value(&self) -> u8 {
        self.value
    }
    pub fn is_numbered(&self) -> bool {
        self.suit.is_numbered()
    }
    pub fn is_honor(&self) -> bool {
        self.suit.is_honor()
    }
    pub fn is_flower(&self) -> bool {
        self.suit.is_flower()
    }
    /// The tile one step up the same numbered suit, if any.
    pub fn succ(&self) -> Option<Self> {
        (self.is_numbered() && self.value < 9).then(|| Self::new(self.suit, self.value + 1))
    }
    /// The tile one step down the same numbered suit, if any.
    pub fn pred(&self) -> Option<Self> {
        (self.is_numbered() && self.value > 1).then(|| Self::new(self.suit, self.value - 1))
    }
    /// Dense slot index, nine slots per suit.
    pub fn index(&self) -> usize {
        u8::from(self.suit) as usize * 9 + (self.value - 1) as usize
    }
    /// Every distinct tile kind of the given suits, in canonical order.
    pub fn kinds(suits: &[Suit]) -> Vec<Self> {
        suits
            .iter()
            .flat_map(|&suit| (1..=suit.ranks()).map(move |value| Self::new(suit, value)))
            .collect()
    }
}

impl From<usize> for Tile {
    fn from(index: usize) -> Self {
        Self::new(Suit::from((index / 9) as u8), (index % 9) as u8 + 1)
    }
}

/// "3m" three of Wan, "7p" seven of Tong, "2d" green dragon
impl TryFrom<&str> for Tile {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        let value = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or_else(|| anyhow::anyhow!("invalid tile value in '{}'", s))? as u8;
        let suit = chars
            .next()
            .ok_or_else(|| anyhow::anyhow!("missing suit in '{}'", s))
            .and_then(Suit::try_from)?;
        match (chars.next(), value) {
            (Some(_), _) => Err(anyhow::anyhow!("trailing characters in '{}'", s)),
            (None, v) if v < 1 || v > suit.ranks() => {
                Err(anyhow::anyhow!("value out of range in '{}'", s))
            }
            (None, v) => Ok(Self::new(suit, v)),
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}
