use super::action::Action;
use super::action::ActionKind;
use super::arbiter;
use super::arbiter::Verdict;
use super::config::GameConfig;
use super::error::GameError;
use super::error::Violation;
use super::player::Player;
use super::settlement::Settlement;
use super::settlement::WinType;
use super::state::GameState;
use super::strategy::*;
use super::task::Reply;
use super::task::Task;
use crate::Millis;
use crate::PlayerId;
use crate::Position;
use std::collections::VecDeque;
use std::time::Duration;

/// Generic turn and claim state machine.
///
/// Knows nothing about any rule set: every rule question is delegated to the
/// five strategies it is built from. One engine runs one game.
///
/// ```text
/// AwaitingPlayer --discard/added kong with claimants--> AwaitingReactions
/// AwaitingReactions --claim wins | all pass | timeout--> AwaitingPlayer | GameOver
/// AwaitingPlayer --win | wall exhausted--> GameOver
/// ```
pub struct Engine {
    deck: Box<dyn DeckGenerator>,
    handler: Box<dyn ActionHandler>,
    judge: Box<dyn TaskJudge>,
    winning: Box<dyn WinningAlgorithm>,
    settler: Box<dyn Settler>,
    timeout: Duration,
    state: Option<GameState>,
}

impl Engine {
    pub fn new(
        deck: Box<dyn DeckGenerator>,
        handler: Box<dyn ActionHandler>,
        judge: Box<dyn TaskJudge>,
        winning: Box<dyn WinningAlgorithm>,
        settler: Box<dyn Settler>,
    ) -> Self {
        Self {
            deck,
            handler,
            judge,
            winning,
            settler,
            timeout: crate::TASK_TIMEOUT,
            state: None,
        }
    }
    /// Length of every reaction window.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn initialize(&mut self, players: Vec<PlayerId>, config: GameConfig) -> Result<(), GameError> {
        if self.state.is_some() {
            return Err(GameError::InvalidState("game already initialized"));
        }
        let n = players.len();
        let needed = n * crate::HAND_SIZE + 1;
        if n != config.players()
            || !(crate::MIN_PLAYERS..=crate::MAX_PLAYERS).contains(&n)
            || self.deck.total() < needed
        {
            return Err(GameError::PlayerCount {
                expected: config.players(),
                actual: n,
            });
        }
        if (1..n).any(|i| players[..i].contains(&players[i])) {
            return Err(GameError::InvalidState("duplicate player id"));
        }
        let seed = config.seed().unwrap_or_else(rand::random);
        let mut tiles = self.deck.generate();
        self.deck.shuffle(&mut tiles, seed);
        let mut wall = VecDeque::from(tiles);
        let hands = self.deck.deal(&mut wall, n, 0);
        let players = players
            .into_iter()
            .zip(hands)
            .map(|(id, hand)| Player::new(id, hand, self.handler.fresh()))
            .collect();
        let mut state = GameState::new(players, wall, config);
        self.handler.prepare(&mut state);
        log::info!("dealt {} players from seed {}, {} tiles left", n, seed, state.deck().len());
        self.state = Some(state);
        Ok(())
    }

    /// Apply one player's action.
    ///
    /// Rejected actions leave the state exactly as it was.
    pub fn handle(&mut self, action: Action) -> Result<(), GameError> {
        let state = self.live()?;
        let pos = state.position(action.player()).ok_or(Violation::UnknownPlayer)?;
        let pending = !state.tasks().is_empty();
        let action = Self::fill(state, action);
        match pending {
            true => self.react(action),
            false => self.act(pos, action),
        }
    }

    /// Close the reaction window if its deadline has passed: every open task
    /// counts as a pass. Returns whether anything expired. Never an error.
    pub fn expire(&mut self, now: Millis) -> bool {
        let Some(state) = self.state.as_mut().filter(|s| !s.is_over()) else {
            return false;
        };
        let due = state
            .tasks
            .iter()
            .map(Task::deadline)
            .min()
            .is_some_and(|deadline| now > deadline);
        if due {
            state
                .tasks
                .iter_mut()
                .filter(|t| t.is_open())
                .for_each(|t| t.answer(Reply::Passed));
            log::debug!("reaction window expired");
            self.resolve();
        }
        due
    }
    pub fn process_task_timeout(&mut self) -> bool {
        self.expire(crate::now())
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }
    pub fn snapshot(&self) -> Option<GameState> {
        self.state.clone()
    }
    pub fn is_over(&self) -> bool {
        self.state.as_ref().is_some_and(GameState::is_over)
    }
    pub fn settlement(&self) -> Option<&Settlement> {
        self.state.as_ref().and_then(GameState::settlement)
    }
    pub fn tasks(&self) -> &[Task] {
        self.state.as_ref().map(GameState::tasks).unwrap_or_default()
    }
    /// Tiles in a full set for this engine's variant.
    pub fn total(&self) -> usize {
        self.deck.total()
    }
    /// What `player` may do right now. Pass is listed while they hold an open task.
    pub fn available(&self, player: &PlayerId) -> Vec<ActionKind> {
        let Ok(state) = self.live() else {
            return Vec::new();
        };
        let Some(pos) = state.position(player) else {
            return Vec::new();
        };
        match state.tasks().iter().find(|t| t.player() == player) {
            Some(task) if task.is_open() => task
                .available()
                .iter()
                .copied()
                .chain(std::iter::once(ActionKind::Pass))
                .collect(),
            Some(_) => Vec::new(),
            None if !state.tasks().is_empty() => Vec::new(),
            None => self.handler.available(state, pos),
        }
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> Option<&mut GameState> {
        self.state.as_mut()
    }
}

impl Engine {
    fn live(&self) -> Result<&GameState, GameError> {
        match self.state.as_ref() {
            None => Err(GameError::InvalidState("game not initialized")),
            Some(state) if state.is_over() => Err(GameError::InvalidState("game is over")),
            Some(state) => Ok(state),
        }
    }
    /// Borrows only the state, leaving the strategies free to use alongside it.
    fn running(state: &mut Option<GameState>) -> Result<&mut GameState, GameError> {
        match state.as_mut() {
            None => Err(GameError::InvalidState("game not initialized")),
            Some(state) if state.is_over() => Err(GameError::InvalidState("game is over")),
            Some(state) => Ok(state),
        }
    }

    /// Reactions that name no tile act on the tile of the open window.
    fn fill(state: &GameState, action: Action) -> Action {
        let tile = state.window().and_then(Action::tile);
        match (action.kind(), action.tile(), tile) {
            (ActionKind::Pass, _, _) => action,
            (kind, None, Some(tile)) if kind.is_reaction() => action.with_tile(tile),
            _ => action,
        }
    }

    /// Regular path: the player whose turn it is moves.
    fn act(&mut self, pos: Position, action: Action) -> Result<(), GameError> {
        let state = Self::running(&mut self.state)?;
        self.handler.validate(state, &action)?;
        if action.kind() == ActionKind::Win {
            return self.win(pos, action);
        }
        self.handler.execute(state, &action)?;
        log::debug!("{}", action);
        let mut tasks = self.judge.judge(state, &action);
        let kind = action.kind();
        state.last_action = Some(action);
        if !tasks.is_empty() {
            let deadline = crate::now() + self.timeout.as_millis() as Millis;
            tasks.iter_mut().for_each(|t| t.stamp(deadline));
            log::debug!("{} reaction(s) open until {}", tasks.len(), deadline);
            state.tasks = tasks;
        } else if matches!(kind, ActionKind::Discard | ActionKind::Pass) {
            state.advance();
        }
        self.exhaust();
        Ok(())
    }

    /// Reaction path: a task holder answers the open window.
    fn react(&mut self, action: Action) -> Result<(), GameError> {
        let state = Self::running(&mut self.state)?;
        let kind = action.kind();
        if !kind.is_reaction() {
            return Err(Violation::AwaitingReactions.into());
        }
        let i = state
            .tasks
            .iter()
            .position(|t| t.player() == action.player())
            .ok_or(Violation::NoTask)?;
        if !state.tasks[i].is_open() {
            return Err(Violation::AlreadyReplied.into());
        }
        if !state.tasks[i].offers(kind) {
            return Err(Violation::NotOffered.into());
        }
        if kind != ActionKind::Pass {
            self.handler.validate(state, &action)?;
        }
        log::debug!("{}", action);
        let reply = match kind {
            ActionKind::Pass => Reply::Passed,
            _ => Reply::Claimed(action),
        };
        state.tasks[i].answer(reply);
        self.resolve();
        Ok(())
    }

    /// Settle the window once arbitration can decide it.
    fn resolve(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        let view: &GameState = state;
        let author = view.window_author().unwrap_or(view.current());
        let verdict = arbiter::verdict(
            view.tasks(),
            |kind| self.judge.priority(kind),
            |task| {
                view.position(task.player())
                    .map(|p| view.distance(author, p))
                    .unwrap_or(usize::MAX)
            },
        );
        match verdict {
            Verdict::Wait => {}
            Verdict::Abandon => self.abandon(),
            Verdict::Claim(i) => {
                let claim = match state.tasks[i].reply() {
                    Reply::Claimed(action) => action.clone(),
                    _ => return self.abandon(),
                };
                let Some(pos) = state.position(claim.player()) else {
                    return self.abandon();
                };
                if claim.kind().is_winning() {
                    if let Err(e) = self.win(pos, claim) {
                        log::warn!("winning claim failed: {}", e);
                        self.abandon();
                    }
                    return;
                }
                match self.handler.execute(state, &claim) {
                    Ok(()) => {
                        log::debug!("{} takes the tile", claim);
                        state.tasks.clear();
                        state.pass_to(pos);
                        state.last_action = Some(claim);
                        self.exhaust();
                    }
                    Err(e) => {
                        log::warn!("claim {} failed: {}", claim, e);
                        self.abandon();
                    }
                }
            }
        }
    }

    /// Nobody took the tile. After a discard the turn moves on;
    /// after a kong the konger keeps it.
    fn abandon(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        let kind = state.window().map(Action::kind);
        state.tasks.clear();
        if kind == Some(ActionKind::Discard) {
            state.advance();
        }
        self.exhaust();
    }

    /// End the game, scoring the patterns found before the winning tile moved.
    fn win(&mut self, pos: Position, action: Action) -> Result<(), GameError> {
        let state = Self::running(&mut self.state)?;
        let loser = state.window_author();
        let win_type = match state.window().map(Action::kind) {
            None => WinType::SelfDraw,
            Some(ActionKind::Kong) => WinType::RobKong,
            Some(_) => WinType::Discard,
        };
        let context = WinContext {
            player: pos,
            candidate: state.window().and_then(Action::tile),
            win_type,
        };
        let patterns = self.winning.patterns(state, &context);
        self.handler.execute(state, &action)?;
        let settlement = self.settler.settle(state, pos, loser, win_type, patterns);
        for transfer in settlement.transfers() {
            if let Some(to) = state.position(transfer.to()) {
                state.player_mut(to).score += transfer.amount();
            }
            if let Some(from) = state.position(transfer.from()) {
                state.player_mut(from).score -= transfer.amount();
            }
        }
        log::info!("{}", settlement);
        state.tasks.clear();
        state.pass_to(pos);
        state.last_action = Some(action);
        state.settlement = Some(settlement);
        state.over = true;
        Ok(())
    }

    /// The wall ran out before anyone won.
    fn exhaust(&mut self) {
        if let Some(state) = self.state.as_mut().filter(|s| !s.is_over() && s.is_exhausted()) {
            log::info!("wall exhausted after {} rounds", state.round());
            state.over = true;
        }
    }
}
