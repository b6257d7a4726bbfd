use crate::PlayerId;
use crate::tiles::Tile;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionKind {
    Draw,
    Discard,
    Pong,
    Kong,
    Win,
    Chi,
    Ready,
    Flower,
    RobKong,
    Pass,
}

impl ActionKind {
    /// Kinds a player may answer a claim window with.
    pub fn is_reaction(&self) -> bool {
        matches!(
            self,
            ActionKind::Pong
                | ActionKind::Kong
                | ActionKind::Win
                | ActionKind::Chi
                | ActionKind::RobKong
                | ActionKind::Pass
        )
    }
    /// Reactions that end the game when they win arbitration.
    pub fn is_winning(&self) -> bool {
        matches!(self, ActionKind::Win | ActionKind::RobKong)
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            ActionKind::Draw => "DRAW",
            ActionKind::Discard => "DISCARD",
            ActionKind::Pong => "PONG",
            ActionKind::Kong => "KONG",
            ActionKind::Win => "WIN",
            ActionKind::Chi => "CHI",
            ActionKind::Ready => "READY",
            ActionKind::Flower => "FLOWER",
            ActionKind::RobKong => "ROB",
            ActionKind::Pass => "PASS",
        };
        write!(f, "{}", s)
    }
}

/// One player's move, as delivered by the session layer.
///
/// `tile` is the tile acted on (discarded, claimed, konged, replaced).
/// `tiles` carries the full run for a chi.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    kind: ActionKind,
    player: PlayerId,
    tile: Option<Tile>,
    tiles: Vec<Tile>,
}

impl Action {
    pub fn new(kind: ActionKind, player: impl Into<PlayerId>) -> Self {
        Self {
            kind,
            player: player.into(),
            tile: None,
            tiles: Vec::new(),
        }
    }
    pub fn with_tile(mut self, tile: Tile) -> Self {
        self.tile = Some(tile);
        self
    }
    pub fn with_tiles(mut self, tiles: Vec<Tile>) -> Self {
        self.tiles = tiles;
        self
    }

    pub fn draw(player: impl Into<PlayerId>) -> Self {
        Self::new(ActionKind::Draw, player)
    }
    pub fn discard(player: impl Into<PlayerId>, tile: Tile) -> Self {
        Self::new(ActionKind::Discard, player).with_tile(tile)
    }
    pub fn pong(player: impl Into<PlayerId>, tile: Tile) -> Self {
        Self::new(ActionKind::Pong, player).with_tile(tile)
    }
    pub fn kong(player: impl Into<PlayerId>, tile: Tile) -> Self {
        Self::new(ActionKind::Kong, player).with_tile(tile)
    }
    pub fn chi(player: impl Into<PlayerId>, tile: Tile, run: [Tile; 3]) -> Self {
        Self::new(ActionKind::Chi, player)
            .with_tile(tile)
            .with_tiles(run.to_vec())
    }
    /// Self-drawn win. Claims on a discard carry the discarded tile.
    pub fn win(player: impl Into<PlayerId>) -> Self {
        Self::new(ActionKind::Win, player)
    }
    pub fn ready(player: impl Into<PlayerId>) -> Self {
        Self::new(ActionKind::Ready, player)
    }
    pub fn flower(player: impl Into<PlayerId>, tile: Tile) -> Self {
        Self::new(ActionKind::Flower, player).with_tile(tile)
    }
    pub fn rob(player: impl Into<PlayerId>, tile: Tile) -> Self {
        Self::new(ActionKind::RobKong, player).with_tile(tile)
    }
    pub fn pass(player: impl Into<PlayerId>) -> Self {
        Self::new(ActionKind::Pass, player)
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }
    pub fn player(&self) -> &PlayerId {
        &self.player
    }
    pub fn tile(&self) -> Option<Tile> {
        self.tile
    }
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.tile {
            Some(tile) => write!(f, "{} {} {}", self.player, self.kind, tile),
            None => write!(f, "{} {}", self.player, self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::Suit;

    #[test]
    fn reactions() {
        assert!(ActionKind::Pong.is_reaction());
        assert!(ActionKind::Pass.is_reaction());
        assert!(!ActionKind::Discard.is_reaction());
        assert!(!ActionKind::Ready.is_reaction());
        assert!(ActionKind::RobKong.is_winning());
        assert!(!ActionKind::Kong.is_winning());
    }

    #[test]
    fn display() {
        let tile = Tile::new(Suit::Wan, 5);
        assert_eq!(Action::discard("ana", tile).to_string(), "ana DISCARD 5m");
        assert_eq!(Action::pass("bo").to_string(), "bo PASS");
    }

    #[test]
    fn serde_shape() {
        let action = Action::pong("ana", Tile::new(Suit::Tong, 2));
        let json = serde_json::to_string(&action).unwrap();
        let back = serde_json::from_str::<Action>(&json).unwrap();
        assert_eq!(action, back);
    }
}
