use super::action::ActionKind;
use super::task::Reply;
use super::task::Task;
use crate::Priority;
use std::cmp::Reverse;

/// What to do with a claim window after a reply arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Some open task could still outrank every claim so far.
    Wait,
    /// The claim on this task wins.
    Claim(usize),
    /// Everybody passed.
    Abandon,
}

/// Rank claims by priority, then by seat distance from the author of the
/// window. An open task is ranked by the best reaction it still offers.
pub fn verdict<P, D>(tasks: &[Task], priority: P, distance: D) -> Verdict
where
    P: Fn(ActionKind) -> Priority,
    D: Fn(&Task) -> usize,
{
    let key = |task: &Task, p: Priority| (p, Reverse(distance(task)));
    let best = tasks
        .iter()
        .enumerate()
        .filter_map(|(i, t)| match t.reply() {
            Reply::Claimed(action) => Some((key(t, priority(action.kind())), i)),
            _ => None,
        })
        .max();
    let open = tasks
        .iter()
        .filter(|t| t.is_open())
        .map(|t| key(t, t.priority()))
        .max();
    match (best, open) {
        (None, None) => Verdict::Abandon,
        (None, Some(_)) => Verdict::Wait,
        (Some((claim, _)), Some(open)) if open > claim => Verdict::Wait,
        (Some((_, i)), _) => Verdict::Claim(i),
    }
}
