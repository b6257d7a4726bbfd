use super::tile::Tile;
use serde::Deserialize;
use serde::Serialize;

/// How a kong came to be. Only an added kong can be robbed.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kong {
    /// Four of a kind drawn into the hand.
    Concealed,
    /// Three in hand plus a claimed discard.
    Exposed,
    /// A fourth tile laid onto an existing pong.
    Added,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeldKind {
    Pong,
    Chi,
    Kong(Kong),
}

/// A set of tiles laid face up, removed from the concealed hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    kind: MeldKind,
    tiles: Vec<Tile>,
}

impl Meld {
    pub fn pong(tile: Tile) -> Self {
        Self {
            kind: MeldKind::Pong,
            tiles: vec![tile; 3],
        }
    }
    pub fn kong(tile: Tile, how: Kong) -> Self {
        Self {
            kind: MeldKind::Kong(how),
            tiles: vec![tile; 4],
        }
    }
    pub fn chi(mut tiles: [Tile; 3]) -> Self {
        tiles.sort_unstable();
        Self {
            kind: MeldKind::Chi,
            tiles: tiles.to_vec(),
        }
    }
    pub fn kind(&self) -> MeldKind {
        self.kind
    }
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
    pub fn size(&self) -> usize {
        self.tiles.len()
    }
    /// The tile a pong or kong is made of. For a chi, its lowest tile.
    pub fn head(&self) -> Tile {
        self.tiles[0]
    }
    pub fn is_pong_of(&self, tile: Tile) -> bool {
        self.kind == MeldKind::Pong && self.head() == tile
    }
    pub fn is_kong(&self) -> bool {
        matches!(self.kind, MeldKind::Kong(_))
    }
    /// Lay a fourth tile onto a pong. No-op unless this is a pong of `tile`.
    pub fn upgrade(&mut self, tile: Tile) -> bool {
        match self.is_pong_of(tile) {
            true => {
                self.kind = MeldKind::Kong(Kong::Added);
                self.tiles.push(tile);
                true
            }
            false => false,
        }
    }
    /// Take the fourth tile back off an added kong, returning it.
    pub fn downgrade(&mut self) -> Option<Tile> {
        match self.kind {
            MeldKind::Kong(Kong::Added) => {
                self.kind = MeldKind::Pong;
                self.tiles.pop()
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for Meld {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let tiles = self
            .tiles
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "[{}]", tiles)
    }
}
