use super::action::Action;
use super::action::ActionKind;
use crate::Millis;
use crate::PlayerId;
use crate::Priority;
use crate::tiles::Tile;
use serde::Deserialize;
use serde::Serialize;

/// A task holder's answer to a claim window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reply {
    #[default]
    Open,
    Passed,
    Claimed(Action),
}

/// A pending opportunity for one player to react to another player's action.
/// Every task opened by the same action shares one deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    player: PlayerId,
    available: Vec<ActionKind>,
    tile: Tile,
    priority: Priority,
    deadline: Millis,
    reply: Reply,
}

impl Task {
    pub fn new(player: PlayerId, available: Vec<ActionKind>, tile: Tile, priority: Priority) -> Self {
        Self {
            player,
            available,
            tile,
            priority,
            deadline: 0,
            reply: Reply::Open,
        }
    }
    pub fn player(&self) -> &PlayerId {
        &self.player
    }
    pub fn available(&self) -> &[ActionKind] {
        &self.available
    }
    pub fn tile(&self) -> Tile {
        self.tile
    }
    pub fn priority(&self) -> Priority {
        self.priority
    }
    pub fn deadline(&self) -> Millis {
        self.deadline
    }
    pub fn reply(&self) -> &Reply {
        &self.reply
    }
    pub fn is_open(&self) -> bool {
        self.reply == Reply::Open
    }
    pub fn offers(&self, kind: ActionKind) -> bool {
        kind == ActionKind::Pass || self.available.contains(&kind)
    }
    pub(crate) fn stamp(&mut self, deadline: Millis) {
        self.deadline = deadline;
    }
    pub(crate) fn answer(&mut self, reply: Reply) {
        self.reply = reply;
    }
}
