use super::winning::Winning;
use crate::Position;
use crate::Priority;
use crate::engine::Action;
use crate::engine::ActionKind;
use crate::engine::GameState;
use crate::engine::Task;
use crate::engine::TaskJudge;
use crate::engine::WinningAlgorithm;
use crate::tiles;
use crate::tiles::Kong;
use crate::tiles::MeldKind;
use crate::tiles::Tile;

/// Taihu claim windows. A discard may be won, konged, ponged, or
/// chi'd by the next seat. An added kong may be won off.
#[derive(Debug, Default, Clone, Copy)]
pub struct Judge;

impl Judge {
    fn on_discard(&self, state: &GameState, pos: Position, author: Position, tile: Tile) -> Vec<ActionKind> {
        let hand = state.player(pos).hand();
        let mut kinds = Vec::new();
        if Winning.can_win(state, pos, Some(tile)) {
            kinds.push(ActionKind::Win);
        }
        if tiles::count(hand, tile) >= 3 && !state.deck().is_empty() {
            kinds.push(ActionKind::Kong);
        }
        if tiles::count(hand, tile) >= 2 {
            kinds.push(ActionKind::Pong);
        }
        if state.next(author) == pos && !tiles::runs_with(hand, tile).is_empty() {
            kinds.push(ActionKind::Chi);
        }
        kinds
    }
}

impl TaskJudge for Judge {
    fn judge(&self, state: &GameState, action: &Action) -> Vec<Task> {
        let (Some(tile), Some(author)) = (action.tile(), state.position(action.player())) else {
            return Vec::new();
        };
        let added = || {
            state
                .player(author)
                .melds()
                .iter()
                .any(|m| m.kind() == MeldKind::Kong(Kong::Added) && m.head() == tile)
        };
        let mut tasks = Vec::new();
        for step in 1..state.seats() {
            let pos = (author + step) % state.seats();
            let kinds = match action.kind() {
                ActionKind::Discard => self.on_discard(state, pos, author, tile),
                ActionKind::Kong if added() && Winning.can_win(state, pos, Some(tile)) => vec![ActionKind::Win],
                _ => continue,
            };
            if !kinds.is_empty() {
                let priority = self.rank(&kinds);
                tasks.push(Task::new(state.player(pos).id().clone(), kinds, tile, priority));
            }
        }
        tasks
    }

    fn priority(&self, kind: ActionKind) -> Priority {
        match kind {
            ActionKind::Win => crate::PRIORITY_WIN,
            ActionKind::Kong => crate::PRIORITY_KONG,
            ActionKind::Pong => crate::PRIORITY_PONG,
            ActionKind::Chi => crate::PRIORITY_CHI,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameConfig;
    use crate::engine::Player;
    use crate::engine::VariantState;
    use crate::tiles::Meld;
    use crate::tiles::parse;

    fn t(s: &str) -> Tile {
        Tile::try_from(s).unwrap()
    }
    fn table(hands: [&str; 4]) -> GameState {
        let players = hands
            .iter()
            .enumerate()
            .map(|(i, h)| Player::new(format!("p{}", i), parse(h).unwrap(), VariantState::Plain))
            .collect();
        GameState::new(players, parse("1m").unwrap().into(), GameConfig::default())
    }

    #[test]
    fn chi_is_offered_downstream_only() {
        let state = table([
            "1m",
            "46p 147m 258m 369s 1w 2w",
            "46p 147m 258m 369s 1w 2w",
            "55p 147m 258m 369s 1d 2d",
        ]);
        let tasks = Judge.judge(&state, &Action::discard("p0", t("5p")));
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].player(), "p1");
        assert_eq!(tasks[0].available(), &[ActionKind::Chi]);
        assert_eq!(tasks[0].priority(), crate::PRIORITY_CHI);
        assert_eq!(tasks[1].player(), "p3");
        assert_eq!(tasks[1].available(), &[ActionKind::Pong]);
    }

    #[test]
    fn honors_never_chi() {
        let state = table(["1m", "23w 147m 258m 369s 1d 2d", "1m", "1m"]);
        assert!(Judge.judge(&state, &Action::discard("p0", t("1w"))).is_empty());
    }

    #[test]
    fn win_ranks_above_pong_and_chi() {
        let state = table(["1m", "123m 456m 789m 11w 46p", "1m", "1m"]);
        let tasks = Judge.judge(&state, &Action::discard("p0", t("5p")));
        assert_eq!(tasks[0].available(), &[ActionKind::Win, ActionKind::Chi]);
        assert_eq!(tasks[0].priority(), crate::PRIORITY_WIN);
    }

    #[test]
    fn added_kong_offers_a_win() {
        let mut state = table(["1m", "123m 456m 789m 111p 5s", "1m", "1m"]);
        let mut meld = Meld::pong(t("5s"));
        meld.upgrade(t("5s"));
        state.player_mut(0).melds.push(meld);
        let tasks = Judge.judge(&state, &Action::kong("p0", t("5s")));
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].available(), &[ActionKind::Win]);
    }
}
