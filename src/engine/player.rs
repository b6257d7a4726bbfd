use crate::PlayerId;
use crate::Points;
use crate::htmajong::Readiness;
use crate::thmajong::Tally;
use crate::tiles::Meld;
use crate::tiles::Tile;
use serde::Deserialize;
use serde::Serialize;

/// Per-player state owned by a rule variant.
/// Each payload is only ever mutated by the variant that defines it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariantState {
    #[default]
    Plain,
    Huitong(Readiness),
    Taihu(Tally),
}

impl VariantState {
    pub fn readiness(&self) -> Option<&Readiness> {
        match self {
            VariantState::Huitong(r) => Some(r),
            _ => None,
        }
    }
    pub fn tally(&self) -> Option<&Tally> {
        match self {
            VariantState::Taihu(t) => Some(t),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) hand: Vec<Tile>,
    pub(crate) discards: Vec<Tile>,
    pub(crate) melds: Vec<Meld>,
    pub(crate) flowers: Vec<Tile>,
    pub(crate) score: Points,
    pub(crate) variant: VariantState,
}

impl Player {
    pub fn new(id: PlayerId, mut hand: Vec<Tile>, variant: VariantState) -> Self {
        hand.sort_unstable();
        Self {
            id,
            hand,
            discards: Vec::new(),
            melds: Vec::new(),
            flowers: Vec::new(),
            score: 0,
            variant,
        }
    }
    pub fn id(&self) -> &PlayerId {
        &self.id
    }
    pub fn hand(&self) -> &[Tile] {
        &self.hand
    }
    pub fn discards(&self) -> &[Tile] {
        &self.discards
    }
    pub fn melds(&self) -> &[Meld] {
        &self.melds
    }
    pub fn flowers(&self) -> &[Tile] {
        &self.flowers
    }
    pub fn score(&self) -> Points {
        self.score
    }
    pub fn variant(&self) -> &VariantState {
        &self.variant
    }
    /// Every tile this player accounts for.
    pub fn tile_count(&self) -> usize {
        self.hand.len()
            + self.discards.len()
            + self.flowers.len()
            + self.melds.iter().map(Meld::size).sum::<usize>()
    }
    /// Hand holds `3n + 1` tiles: the player is waiting to draw or claim.
    pub fn needs_tile(&self) -> bool {
        self.hand.len() % 3 == 1
    }
    /// Hand holds `3n + 2` tiles: the player must discard or win.
    pub fn must_discard(&self) -> bool {
        self.hand.len() % 3 == 2
    }
    /// Put a tile into the concealed hand, keeping it sorted.
    pub(crate) fn receive(&mut self, tile: Tile) {
        let i = self.hand.partition_point(|t| *t <= tile);
        self.hand.insert(i, tile);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let hand = self
            .hand
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let melds = self
            .melds
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join("");
        write!(f, "{:<8} {:>5}  {} {}", self.id, self.score, hand, melds)
    }
}
