use super::action::Action;
use super::action::ActionKind;
use super::config::GameConfig;
use super::player::Player;
use super::settlement::Settlement;
use super::task::Task;
use crate::Position;
use crate::tiles::Tile;
use serde::Deserialize;
use serde::Serialize;
use std::collections::VecDeque;

/// Everything about one game in one room.
///
/// Only the engine and the strategies it drives mutate this.
/// Seats are numbered in join order; seat 0 deals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) players: Vec<Player>,
    pub(crate) deck: VecDeque<Tile>,
    pub(crate) current: Position,
    pub(crate) dealer: Position,
    pub(crate) round: u32,
    pub(crate) last_action: Option<Action>,
    pub(crate) config: GameConfig,
    pub(crate) over: bool,
    pub(crate) settlement: Option<Settlement>,
    pub(crate) tasks: Vec<Task>,
}

impl GameState {
    pub fn new(players: Vec<Player>, deck: VecDeque<Tile>, config: GameConfig) -> Self {
        Self {
            players,
            deck,
            current: 0,
            dealer: 0,
            round: 1,
            last_action: None,
            config,
            over: false,
            settlement: None,
            tasks: Vec::new(),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, pos: Position) -> &Player {
        &self.players[pos]
    }
    pub(crate) fn player_mut(&mut self, pos: Position) -> &mut Player {
        &mut self.players[pos]
    }
    pub fn deck(&self) -> &VecDeque<Tile> {
        &self.deck
    }
    pub fn current(&self) -> Position {
        self.current
    }
    pub fn dealer(&self) -> Position {
        self.dealer
    }
    pub fn round(&self) -> u32 {
        self.round
    }
    pub fn last_action(&self) -> Option<&Action> {
        self.last_action.as_ref()
    }
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
    pub fn is_over(&self) -> bool {
        self.over
    }
    pub fn settlement(&self) -> Option<&Settlement> {
        self.settlement.as_ref()
    }
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn seats(&self) -> usize {
        self.players.len()
    }
    pub fn position(&self, id: &str) -> Option<Position> {
        self.players.iter().position(|p| p.id() == id)
    }
    pub fn next(&self, pos: Position) -> Position {
        (pos + 1) % self.seats()
    }
    /// The seat that plays immediately before `pos`.
    pub fn upstream(&self, pos: Position) -> Position {
        (pos + self.seats() - 1) % self.seats()
    }
    /// Seats travelled clockwise from `from` to reach `to`.
    pub fn distance(&self, from: Position, to: Position) -> usize {
        (to + self.seats() - from) % self.seats()
    }
    /// The action whose claim window is open, if any.
    pub fn window(&self) -> Option<&Action> {
        match self.tasks.is_empty() {
            true => None,
            false => self.last_action.as_ref(),
        }
    }
    /// Seat that authored the open claim window.
    pub fn window_author(&self) -> Option<Position> {
        self.window().and_then(|a| self.position(a.player()))
    }
    /// Tile and author of an open window opened by an action of `kind`.
    pub fn claimable(&self, kind: ActionKind) -> Option<(Tile, Position)> {
        self.window()
            .filter(|a| a.kind() == kind)
            .and_then(|a| a.tile().zip(self.position(a.player())))
    }

    /// Pass the turn clockwise. The round ticks over when it returns to the dealer.
    pub(crate) fn advance(&mut self) {
        self.pass_to(self.next(self.current));
    }
    /// Hand the turn clockwise to `pos`, as a claim does. The round ticks over
    /// if the move passes or lands on the dealer.
    pub(crate) fn pass_to(&mut self, pos: Position) {
        let steps = self.distance(self.current, pos);
        let dealer = self.distance(self.current, self.dealer);
        if (1..=steps).contains(&dealer) {
            self.round += 1;
        }
        self.current = pos;
    }
    /// Take the next tile off the front of the wall.
    pub(crate) fn draw(&mut self) -> Option<Tile> {
        self.deck.pop_front()
    }
    /// The current player needs a tile and the wall has none left.
    pub fn is_exhausted(&self) -> bool {
        self.deck.is_empty() && self.tasks.is_empty() && self.player(self.current).needs_tile()
    }
    /// Tiles accounted for across wall, hands, melds, discards and flowers.
    pub fn tile_total(&self) -> usize {
        self.deck.len() + self.players.iter().map(Player::tile_count).sum::<usize>()
    }
}
