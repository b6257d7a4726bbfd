use super::state::Tally;
use super::state::add_flower;
use super::state::add_kong;
use super::winning::Winning;
use crate::Position;
use crate::engine::Action;
use crate::engine::ActionHandler;
use crate::engine::ActionKind;
use crate::engine::GameState;
use crate::engine::VariantState;
use crate::engine::Violation;
use crate::engine::rules;
use crate::tiles;
use crate::tiles::Tile;

/// Taihu move rules: chi from the upstream seat, kongs tallied,
/// and flowers set aside and replaced from the wall as soon as they are held.
#[derive(Debug, Default, Clone, Copy)]
pub struct Actions;

impl Actions {
    fn check_flower(&self, state: &GameState, pos: Position, tile: Option<Tile>) -> Result<Tile, Violation> {
        rules::check_turn(state, pos)?;
        let tile = tile.ok_or(Violation::MissingTile)?;
        if !tile.is_flower() {
            return Err(Violation::NotAFlower);
        }
        match tiles::contains(state.player(pos).hand(), tile) {
            true => Ok(tile),
            false => Err(Violation::TileNotInHand),
        }
    }

    /// Set `flower` aside and draw its replacement. Nothing is drawn once
    /// the wall is empty.
    fn replace(&self, state: &mut GameState, pos: Position, flower: Tile) {
        let player = state.player_mut(pos);
        if tiles::remove(&mut player.hand, flower) {
            player.flowers.push(flower);
            add_flower(state, pos);
            if let Some(tile) = state.draw() {
                state.player_mut(pos).receive(tile);
            }
        }
    }

    /// Replace every held flower, including flowers drawn as replacements.
    fn bloom(&self, state: &mut GameState, pos: Position) {
        while let Some(flower) = state.player(pos).hand().iter().copied().find(Tile::is_flower) {
            log::trace!("{} sets aside {}", state.player(pos).id(), flower);
            self.replace(state, pos, flower);
        }
    }
}

impl ActionHandler for Actions {
    fn validate(&self, state: &GameState, action: &Action) -> Result<(), Violation> {
        let pos = rules::seat(state, action)?;
        let tile = action.tile();
        match action.kind() {
            ActionKind::Draw => rules::check_draw(state, pos),
            ActionKind::Discard => rules::check_discard(state, pos, tile).map(drop),
            ActionKind::Pong => rules::check_pong(state, pos, tile).map(drop),
            ActionKind::Chi => rules::check_chi(state, pos, tile, action.tiles()).map(drop),
            ActionKind::Kong => rules::check_kong(state, pos, tile).map(drop),
            ActionKind::Win => rules::check_win(state, pos, tile, &Winning).map(drop),
            ActionKind::Flower => self.check_flower(state, pos, tile).map(drop),
            ActionKind::Pass => match state.window() {
                Some(_) => Ok(()),
                None => Err(Violation::NothingToClaim),
            },
            ActionKind::Ready | ActionKind::RobKong => Err(Violation::Unsupported),
        }
    }

    fn execute(&self, state: &mut GameState, action: &Action) -> Result<(), Violation> {
        let pos = rules::seat(state, action)?;
        let tile = action.tile();
        match action.kind() {
            ActionKind::Draw => {
                rules::draw(state, pos)?;
                self.bloom(state, pos);
                Ok(())
            }
            ActionKind::Discard => rules::discard(state, pos, tile).map(drop),
            ActionKind::Pong => rules::pong(state, pos, tile).map(drop),
            ActionKind::Chi => rules::chi(state, pos, tile, action.tiles()).map(drop),
            ActionKind::Kong => {
                rules::kong(state, pos, tile)?;
                add_kong(state, pos);
                self.bloom(state, pos);
                Ok(())
            }
            ActionKind::Win => rules::win(state, pos, tile, &Winning).map(drop),
            ActionKind::Flower => {
                let flower = self.check_flower(state, pos, tile)?;
                self.replace(state, pos, flower);
                self.bloom(state, pos);
                Ok(())
            }
            ActionKind::Pass | ActionKind::Ready | ActionKind::RobKong => self.validate(state, action),
        }
    }

    fn available(&self, state: &GameState, pos: Position) -> Vec<ActionKind> {
        if rules::check_turn(state, pos).is_err() {
            return Vec::new();
        }
        let hand = state.player(pos).hand();
        let mut kinds = Vec::new();
        if rules::check_draw(state, pos).is_ok() {
            kinds.push(ActionKind::Draw);
        }
        if state.player(pos).must_discard() {
            kinds.push(ActionKind::Discard);
            if tiles::unique(hand)
                .into_iter()
                .any(|t| rules::check_kong(state, pos, Some(t)).is_ok())
            {
                kinds.push(ActionKind::Kong);
            }
            if rules::check_win(state, pos, None, &Winning).is_ok() {
                kinds.push(ActionKind::Win);
            }
        }
        if hand.iter().any(Tile::is_flower) {
            kinds.push(ActionKind::Flower);
        }
        kinds
    }

    fn fresh(&self) -> VariantState {
        VariantState::Taihu(Tally::default())
    }

    /// Dealt flowers are replaced seat by seat, starting with the dealer.
    fn prepare(&self, state: &mut GameState) {
        for step in 0..state.seats() {
            let pos = (state.dealer() + step) % state.seats();
            self.bloom(state, pos);
        }
    }
}
