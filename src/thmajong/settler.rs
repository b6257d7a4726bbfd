use super::state::tally;
use super::winning::Winning;
use crate::Points;
use crate::Position;
use crate::engine::GameState;
use crate::engine::Settlement;
use crate::engine::Settler;
use crate::engine::WinPattern;
use crate::engine::WinType;
use crate::engine::WinningAlgorithm;

/// Flowers that make up one multiple of the base, unless a game
/// overrides it through `flower_unit` in its config.
pub const FLOWER_UNIT: Points = 10;

/// Taihu scoring. Patterns, set-aside flowers, a self-draw and kongs
/// all add flowers; every `flower_unit` flowers is one more multiple of the base.
#[derive(Debug, Default, Clone, Copy)]
pub struct Scorer;

impl Scorer {
    /// Flowers the winner brings to settlement.
    pub fn flowers(state: &GameState, winner: Position, win_type: WinType, patterns: &[WinPattern]) -> Points {
        let tally = tally(state, winner);
        let drawn = match win_type {
            WinType::SelfDraw => 2,
            _ => 0,
        };
        Winning.score(patterns) + tally.flowers() as Points + drawn + 2 * tally.kongs() as Points
    }
}

impl Settler for Scorer {
    fn settle(
        &self,
        state: &GameState,
        winner: Position,
        loser: Option<Position>,
        win_type: WinType,
        patterns: Vec<WinPattern>,
    ) -> Settlement {
        let flowers = Self::flowers(state, winner, win_type, &patterns);
        let unit = state
            .config()
            .extra_u64("flower_unit")
            .and_then(|u| Points::try_from(u).ok())
            .filter(|u| *u > 0)
            .unwrap_or(FLOWER_UNIT);
        let base = match state.config().base() {
            0 => 1,
            b => b,
        };
        let multiplier = (flowers / unit).max(1);
        let total = multiplier * base;
        let reason = format!("{} flowers by {}", flowers, win_type);
        Settlement::new(state, winner, loser, win_type, patterns, base, total, reason)
    }
}
