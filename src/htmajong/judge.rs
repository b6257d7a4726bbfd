use super::winning::Winning;
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

/// Huitong claim windows: win, kong or pong a discard;
/// rob an added kong.
#[derive(Debug, Default, Clone, Copy)]
pub struct Judge;

impl TaskJudge for Judge {
    fn judge(&self, state: &GameState, action: &Action) -> Vec<Task> {
        let (Some(tile), Some(author)) = (action.tile(), state.position(action.player())) else {
            return Vec::new();
        };
        let added = state
            .player(author)
            .melds()
            .iter()
            .any(|m| m.kind() == MeldKind::Kong(Kong::Added) && m.head() == tile);
        (1..state.seats())
            .map(|step| (author + step) % state.seats())
            .filter_map(|pos| {
                let hand = state.player(pos).hand();
                let kinds = match action.kind() {
                    ActionKind::Discard => [
                        (ActionKind::Win, Winning.can_win(state, pos, Some(tile))),
                        (ActionKind::Kong, tiles::count(hand, tile) >= 3 && !state.deck().is_empty()),
                        (ActionKind::Pong, tiles::count(hand, tile) >= 2),
                    ]
                    .into_iter()
                    .filter(|(_, ok)| *ok)
                    .map(|(kind, _)| kind)
                    .collect::<Vec<_>>(),
                    ActionKind::Kong if added && Winning.can_win(state, pos, Some(tile)) => {
                        vec![ActionKind::RobKong]
                    }
                    _ => Vec::new(),
                };
                match kinds.is_empty() {
                    true => None,
                    false => Some(Task::new(
                        state.player(pos).id().clone(),
                        kinds.clone(),
                        tile,
                        self.rank(&kinds),
                    )),
                }
            })
            .collect()
    }

    fn priority(&self, kind: ActionKind) -> Priority {
        match kind {
            ActionKind::Win => crate::PRIORITY_WIN,
            ActionKind::RobKong => crate::PRIORITY_ROB,
            ActionKind::Kong => crate::PRIORITY_KONG,
            ActionKind::Pong => crate::PRIORITY_PONG,
            ActionKind::Chi => crate::PRIORITY_CHI,
            _ => 0,
        }
    }
}
