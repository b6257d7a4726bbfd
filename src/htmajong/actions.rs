use super::state::Readiness;
use super::state::declare;
use super::state::readiness;
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

/// Huitong move rules. No chi, no flowers; a ready declaration
/// is allowed once, during the first round.
#[derive(Debug, Default, Clone, Copy)]
pub struct Actions;

impl Actions {
    /// Tiles the hand would wait on after the declaration.
    /// With a tile still to discard, every discard is considered.
    fn check_ready(&self, state: &GameState, pos: Position) -> Result<Vec<Tile>, Violation> {
        rules::check_turn(state, pos)?;
        if state.round() != 1 {
            return Err(Violation::ReadyWindowClosed);
        }
        if readiness(state, pos).declared() {
            return Err(Violation::AlreadyReady);
        }
        let hand = state.player(pos).hand();
        let waits = match state.player(pos).must_discard() {
            false => tiles::waits(hand),
            true => {
                let mut waits = tiles::unique(hand)
                    .into_iter()
                    .filter_map(|discard| tiles::remove_all(hand, &[discard]))
                    .flat_map(|rest| tiles::waits(&rest))
                    .collect::<Vec<_>>();
                tiles::sort(&mut waits);
                waits.dedup();
                waits
            }
        };
        match waits.is_empty() {
            true => Err(Violation::NotReady),
            false => Ok(waits),
        }
    }

    fn check_rob(&self, state: &GameState, pos: Position, tile: Option<Tile>) -> Result<(), Violation> {
        rules::check_rob(state, pos, tile)?;
        rules::check_win(state, pos, tile, &Winning).map(drop)
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
            ActionKind::Kong => rules::check_kong(state, pos, tile).map(drop),
            ActionKind::Win => rules::check_win(state, pos, tile, &Winning).map(drop),
            ActionKind::RobKong => self.check_rob(state, pos, tile),
            ActionKind::Ready => self.check_ready(state, pos).map(drop),
            ActionKind::Pass => match state.window() {
                Some(_) => Ok(()),
                None => Err(Violation::NothingToClaim),
            },
            ActionKind::Chi | ActionKind::Flower => Err(Violation::Unsupported),
        }
    }

    fn execute(&self, state: &mut GameState, action: &Action) -> Result<(), Violation> {
        let pos = rules::seat(state, action)?;
        let tile = action.tile();
        match action.kind() {
            ActionKind::Draw => rules::draw(state, pos).map(drop),
            ActionKind::Discard => rules::discard(state, pos, tile).map(drop),
            ActionKind::Pong => rules::pong(state, pos, tile).map(drop),
            ActionKind::Kong => rules::kong(state, pos, tile).map(drop),
            ActionKind::Win => rules::win(state, pos, tile, &Winning).map(drop),
            ActionKind::RobKong => {
                self.check_rob(state, pos, tile)?;
                rules::win(state, pos, tile, &Winning).map(drop)
            }
            ActionKind::Ready => {
                let waits = self.check_ready(state, pos)?;
                log::debug!("{} declares ready on {:?}", action.player(), waits);
                declare(state, pos, waits);
                Ok(())
            }
            ActionKind::Pass | ActionKind::Chi | ActionKind::Flower => self.validate(state, action),
        }
    }

    fn available(&self, state: &GameState, pos: Position) -> Vec<ActionKind> {
        if rules::check_turn(state, pos).is_err() {
            return Vec::new();
        }
        let player = state.player(pos);
        let mut kinds = Vec::new();
        if rules::check_draw(state, pos).is_ok() {
            kinds.push(ActionKind::Draw);
        }
        if player.must_discard() {
            kinds.push(ActionKind::Discard);
            let kong = tiles::unique(player.hand())
                .into_iter()
                .any(|t| rules::check_kong(state, pos, Some(t)).is_ok());
            if kong {
                kinds.push(ActionKind::Kong);
            }
            if rules::check_win(state, pos, None, &Winning).is_ok() {
                kinds.push(ActionKind::Win);
            }
        }
        if self.check_ready(state, pos).is_ok() {
            kinds.push(ActionKind::Ready);
        }
        kinds
    }

    fn fresh(&self) -> VariantState {
        VariantState::Huitong(Readiness::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameConfig;
    use crate::engine::Player;
    use crate::engine::Task;
    use crate::tiles::Meld;
    use crate::tiles::parse;

    fn t(s: &str) -> Tile {
        Tile::try_from(s).unwrap()
    }
    fn table(hands: [&str; 3], wall: &str) -> GameState {
        let players = hands
            .iter()
            .enumerate()
            .map(|(i, h)| Player::new(format!("p{}", i), parse(h).unwrap(), Actions.fresh()))
            .collect();
        GameState::new(players, parse(wall).unwrap().into(), GameConfig::default().with_players(3))
    }

    #[test]
    fn ready_needs_a_waiting_hand() {
        let state = table(["123m 456m 789m 111p 2s 9s", "1m", "1m"], "1s");
        assert_eq!(Actions.check_ready(&state, 0), Ok(vec![t("2s"), t("9s")]));
        let state = table(["147m 258m 369m 147p 2s 9s", "1m", "1m"], "1s");
        assert_eq!(Actions.check_ready(&state, 0), Err(Violation::NotReady));
        assert_eq!(Actions.check_ready(&state, 1), Err(Violation::NotYourTurn));
    }

    #[test]
    fn ready_once_in_the_first_round() {
        let mut state = table(["123m 456m 789m 111p 2s 9s", "1m", "1m"], "1s");
        let ready = Action::ready("p0");
        Actions.execute(&mut state, &ready).unwrap();
        assert!(readiness(&state, 0).is_early());
        assert_eq!(Actions.validate(&state, &ready), Err(Violation::AlreadyReady));
        let mut late = table(["123m 456m 789m 111p 2s 9s", "1m", "1m"], "1s");
        late.round = 2;
        assert_eq!(Actions.validate(&late, &ready), Err(Violation::ReadyWindowClosed));
    }

    #[test]
    fn no_chi_or_flowers() {
        let state = table(["123m 456m 789m 111p 2s 9s", "1m", "1m"], "1s");
        assert_eq!(
            Actions.validate(&state, &Action::chi("p1", t("1m"), [t("1m"), t("2m"), t("3m")])),
            Err(Violation::Unsupported)
        );
        assert_eq!(
            Actions.validate(&state, &Action::flower("p0", t("1m"))),
            Err(Violation::Unsupported)
        );
    }

    #[test]
    fn rob_requires_an_open_kong() {
        let mut state = table(["123m 456m 789m 111p 5s 5s", "123m 456m 789m 111p 5s", "1m"], "1s");
        let rob = Action::rob("p1", t("5s"));
        assert_eq!(Actions.validate(&state, &rob), Err(Violation::NothingToClaim));
        state.player_mut(0).hand = parse("123m 456m 789m 111p 5s").unwrap();
        let mut meld = Meld::pong(t("5s"));
        meld.upgrade(t("5s"));
        state.player_mut(0).melds.push(meld);
        state.last_action = Some(Action::kong("p0", t("5s")));
        state.tasks = vec![Task::new("p1".into(), vec![ActionKind::RobKong], t("5s"), 90)];
        assert_eq!(Actions.validate(&state, &rob), Ok(()));
        let before = state.tile_total();
        Actions.execute(&mut state, &rob).unwrap();
        assert_eq!(state.player(1).hand().len(), 14);
        assert_eq!(state.player(0).melds()[0].kind(), crate::tiles::MeldKind::Pong);
        assert_eq!(state.tile_total(), before);
    }

    #[test]
    fn available_on_own_turn() {
        let state = table(["123m 456m 789m 111p 2s 2s", "1m", "1m"], "1s");
        let kinds = Actions.available(&state, 0);
        assert!(kinds.contains(&ActionKind::Discard));
        assert!(kinds.contains(&ActionKind::Win));
        assert!(kinds.contains(&ActionKind::Ready));
        assert!(!kinds.contains(&ActionKind::Draw));
        assert!(Actions.available(&state, 1).is_empty());
    }
}
