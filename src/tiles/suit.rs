use serde::Deserialize;
use serde::Serialize;

/// Tile suit. Declaration order is the canonical sort order.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    #[default]
    Wan = 0,
    Tiao = 1,
    Tong = 2,
    Wind = 3,
    Dragon = 4,
    Flower = 5,
}

impl Suit {
    pub const MIN: Self = Suit::Wan;
    pub const MAX: Self = Suit::Flower;
    /// The three suits that carry values 1-9 and can form runs.
    pub const NUMBERED: [Self; 3] = [Suit::Wan, Suit::Tiao, Suit::Tong];
    /// Honor suits. Never part of a run.
    pub const HONORS: [Self; 2] = [Suit::Wind, Suit::Dragon];

    pub fn all() -> [Self; 6] {
        [
            Suit::Wan,
            Suit::Tiao,
            Suit::Tong,
            Suit::Wind,
            Suit::Dragon,
            Suit::Flower,
        ]
    }
    /// Highest value a tile of this suit may carry.
    /// winds: 1 east 2 south 3 west 4 north
    /// dragons: 1 red 2 green 3 white
    pub fn ranks(&self) -> u8 {
        match self {
            Suit::Wan | Suit::Tiao | Suit::Tong => 9,
            Suit::Wind => 4,
            Suit::Dragon => 3,
            Suit::Flower => 8,
        }
    }
    pub fn is_numbered(&self) -> bool {
        matches!(self, Suit::Wan | Suit::Tiao | Suit::Tong)
    }
    pub fn is_honor(&self) -> bool {
        matches!(self, Suit::Wind | Suit::Dragon)
    }
    pub fn is_flower(&self) -> bool {
        matches!(self, Suit::Flower)
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Wan,
            1 => Suit::Tiao,
            2 => Suit::Tong,
            3 => Suit::Wind,
            4 => Suit::Dragon,
            5 => Suit::Flower,
            _ => panic!("invalid suit {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

impl TryFrom<char> for Suit {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'm' => Ok(Suit::Wan),
            's' => Ok(Suit::Tiao),
            'p' => Ok(Suit::Tong),
            'w' => Ok(Suit::Wind),
            'd' => Ok(Suit::Dragon),
            'f' => Ok(Suit::Flower),
            _ => Err(anyhow::anyhow!("invalid suit character '{}'", c)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Wan => "m",
                Suit::Tiao => "s",
                Suit::Tong => "p",
                Suit::Wind => "w",
                Suit::Dragon => "d",
                Suit::Flower => "f",
            }
        )
    }
}
