use super::action::Action;
use super::action::ActionKind;
use super::error::Violation;
use super::player::VariantState;
use super::settlement::Settlement;
use super::settlement::WinPattern;
use super::settlement::WinType;
use super::state::GameState;
use super::task::Task;
use crate::HAND_SIZE;
use crate::Points;
use crate::Position;
use crate::Priority;
use crate::tiles::Tile;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

/// Builds, shuffles and deals the wall.
pub trait DeckGenerator: Send + Sync {
    /// Every tile of a full set, unshuffled.
    fn generate(&self) -> Vec<Tile>;
    /// Deterministic for a given seed.
    fn shuffle(&self, tiles: &mut Vec<Tile>, seed: u64) {
        tiles.shuffle(&mut SmallRng::seed_from_u64(seed));
    }
    /// Thirteen tiles to every seat and a fourteenth to the dealer,
    /// taken from the front of the wall.
    fn deal(&self, wall: &mut VecDeque<Tile>, players: usize, dealer: Position) -> Vec<Vec<Tile>> {
        let mut hands = vec![Vec::with_capacity(HAND_SIZE + 1); players];
        for _ in 0..HAND_SIZE {
            for hand in hands.iter_mut() {
                hand.extend(wall.pop_front());
            }
        }
        hands[dealer].extend(wall.pop_front());
        hands
    }
    fn total(&self) -> usize {
        self.generate().len()
    }
}

/// Validates and applies actions. Holds all of a variant's move rules.
pub trait ActionHandler: Send + Sync {
    /// Pure. Never mutates.
    fn validate(&self, state: &GameState, action: &Action) -> Result<(), Violation>;
    /// Re-checks preconditions before mutating, so a failure leaves `state` as it was.
    fn execute(&self, state: &mut GameState, action: &Action) -> Result<(), Violation>;
    /// Kinds the player could legally choose right now, outside any claim window.
    fn available(&self, state: &GameState, player: Position) -> Vec<ActionKind>;
    /// Initial variant payload for a new player.
    fn fresh(&self) -> VariantState;
    /// Runs once after dealing.
    fn prepare(&self, _: &mut GameState) {}
}

/// Decides who may react to an action, and with what priority.
pub trait TaskJudge: Send + Sync {
    fn judge(&self, state: &GameState, action: &Action) -> Vec<Task>;
    fn priority(&self, kind: ActionKind) -> Priority;
    /// Highest priority among a set of offered kinds.
    fn rank(&self, kinds: &[ActionKind]) -> Priority {
        kinds.iter().map(|k| self.priority(*k)).max().unwrap_or_default()
    }
}

/// What is known about a win when its patterns are evaluated.
#[derive(Debug, Clone, Copy)]
pub struct WinContext {
    pub player: Position,
    /// The claimed tile, absent for a self-draw.
    pub candidate: Option<Tile>,
    pub win_type: WinType,
}

pub trait WinningAlgorithm: Send + Sync {
    fn can_win(&self, state: &GameState, player: Position, candidate: Option<Tile>) -> bool;
    fn patterns(&self, state: &GameState, context: &WinContext) -> Vec<WinPattern>;
    /// Sum of pattern scores. Overlapping patterns all count.
    fn score(&self, patterns: &[WinPattern]) -> Points {
        patterns.iter().map(WinPattern::score).sum()
    }
}

pub trait Settler: Send + Sync {
    fn settle(
        &self,
        state: &GameState,
        winner: Position,
        loser: Option<Position>,
        win_type: WinType,
        patterns: Vec<WinPattern>,
    ) -> Settlement;
}
