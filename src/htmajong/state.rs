use crate::Position;
use crate::engine::GameState;
use crate::engine::VariantState;
use crate::tiles::Tile;
use serde::Deserialize;
use serde::Serialize;

/// A Huitong player's ready declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readiness {
    declared: bool,
    round: u32,
    waits: Vec<Tile>,
}

impl Readiness {
    pub fn declared(&self) -> bool {
        self.declared
    }
    /// Round the declaration was made in. Zero when undeclared.
    pub fn round(&self) -> u32 {
        self.round
    }
    /// Tiles the hand was waiting on when declared.
    pub fn waits(&self) -> &[Tile] {
        &self.waits
    }
    /// Declared in the first round, which is what scores.
    pub fn is_early(&self) -> bool {
        self.declared && self.round == 1
    }
}

/// Read a seat's readiness. Players of another variant read as undeclared.
pub fn readiness(state: &GameState, pos: Position) -> Readiness {
    state
        .player(pos)
        .variant()
        .readiness()
        .cloned()
        .unwrap_or_default()
}

pub(super) fn declare(state: &mut GameState, pos: Position, waits: Vec<Tile>) {
    let round = state.round();
    state.player_mut(pos).variant = VariantState::Huitong(Readiness {
        declared: true,
        round,
        waits,
    });
}
