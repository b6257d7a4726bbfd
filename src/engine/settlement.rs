use super::state::GameState;
use crate::PlayerId;
use crate::Points;
use crate::Position;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinType {
    SelfDraw,
    Discard,
    RobKong,
}

impl std::fmt::Display for WinType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            WinType::SelfDraw => write!(f, "self-draw"),
            WinType::Discard => write!(f, "discard"),
            WinType::RobKong => write!(f, "rob-the-kong"),
        }
    }
}

/// A named scoring feature of a winning hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinPattern {
    name: String,
    score: Points,
}

impl WinPattern {
    pub fn new(name: impl Into<String>, score: Points) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn score(&self) -> Points {
        self.score
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    from: PlayerId,
    to: PlayerId,
    amount: Points,
    reason: String,
}

impl Transfer {
    pub fn from(&self) -> &PlayerId {
        &self.from
    }
    pub fn to(&self) -> &PlayerId {
        &self.to
    }
    pub fn amount(&self) -> Points {
        self.amount
    }
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// The outcome of a won game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    winner: PlayerId,
    loser: Option<PlayerId>,
    win_type: WinType,
    patterns: Vec<WinPattern>,
    base: Points,
    total: Points,
    transfers: Vec<Transfer>,
}

impl Settlement {
    /// Build a settlement and its transfers.
    /// Every transfer carries `total` and the same `reason`.
    /// A self-draw is paid by every other player; otherwise only the loser pays.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        state: &GameState,
        winner: Position,
        loser: Option<Position>,
        win_type: WinType,
        patterns: Vec<WinPattern>,
        base: Points,
        total: Points,
        reason: String,
    ) -> Self {
        let to = state.player(winner).id().clone();
        let payers = match (win_type, loser) {
            (WinType::SelfDraw, _) | (_, None) => state
                .players()
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != winner)
                .map(|(_, p)| p.id().clone())
                .collect::<Vec<_>>(),
            (_, Some(loser)) => vec![state.player(loser).id().clone()],
        };
        let transfers = payers
            .into_iter()
            .map(|from| Transfer {
                from,
                to: to.clone(),
                amount: total,
                reason: reason.clone(),
            })
            .collect();
        Self {
            winner: to,
            loser: loser.map(|l| state.player(l).id().clone()),
            win_type,
            patterns,
            base,
            total,
            transfers,
        }
    }
    pub fn winner(&self) -> &PlayerId {
        &self.winner
    }
    pub fn loser(&self) -> Option<&PlayerId> {
        self.loser.as_ref()
    }
    pub fn win_type(&self) -> WinType {
        self.win_type
    }
    pub fn patterns(&self) -> &[WinPattern] {
        &self.patterns
    }
    pub fn base(&self) -> Points {
        self.base
    }
    pub fn total(&self) -> Points {
        self.total
    }
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }
    /// Net points each player gains (negative when paying).
    pub fn delta(&self, player: &PlayerId) -> Points {
        self.transfers
            .iter()
            .map(|t| match (t.to == *player, t.from == *player) {
                (true, false) => t.amount,
                (false, true) => -t.amount,
                _ => 0,
            })
            .sum()
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let patterns = self
            .patterns
            .iter()
            .map(|p| format!("{}({})", p.name, p.score))
            .collect::<Vec<_>>()
            .join(" ");
        write!(
            f,
            "{} wins by {} for {} [{}]",
            self.winner, self.win_type, self.total, patterns
        )
    }
}
