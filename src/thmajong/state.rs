use crate::Position;
use crate::engine::GameState;
use crate::engine::VariantState;
use serde::Deserialize;
use serde::Serialize;

/// Running counts a Taihu player carries into settlement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    kongs: u32,
    flowers: u32,
}

impl Tally {
    pub fn kongs(&self) -> u32 {
        self.kongs
    }
    /// Flowers set aside so far, whether dealt or drawn.
    pub fn flowers(&self) -> u32 {
        self.flowers
    }
}

/// A seat's tally. Players of another variant read as zero.
pub fn tally(state: &GameState, pos: Position) -> Tally {
    state
        .player(pos)
        .variant()
        .tally()
        .copied()
        .unwrap_or_default()
}

pub(super) fn add_kong(state: &mut GameState, pos: Position) {
    let mut tally = tally(state, pos);
    tally.kongs += 1;
    state.player_mut(pos).variant = VariantState::Taihu(tally);
}

pub(super) fn add_flower(state: &mut GameState, pos: Position) {
    let mut tally = tally(state, pos);
    tally.flowers += 1;
    state.player_mut(pos).variant = VariantState::Taihu(tally);
}
