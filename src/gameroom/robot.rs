use crate::PlayerId;
use crate::Position;
use crate::engine::Action;
use crate::engine::ActionKind;
use crate::engine::Engine;
use crate::engine::GameState;
use crate::tiles;
use crate::tiles::Tile;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// CPU player that only ever sends legal actions. Wins whenever it can,
/// otherwise claims and passes at random and throws its loneliest tiles.
pub struct Robot {
    rng: SmallRng,
}

impl Default for Robot {
    fn default() -> Self {
        Self::seeded(rand::random())
    }
}

impl Robot {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// The move `player` makes right now, if they have one.
    pub fn decide(&mut self, engine: &Engine, player: &PlayerId) -> Option<Action> {
        let available = engine.available(player);
        let state = engine.state()?;
        let pos = state.position(player)?;
        let hand = state.player(pos).hand();
        if let Some(task) = engine.tasks().iter().find(|t| t.player() == player && t.is_open()) {
            let tile = task.tile();
            return Some(match available.as_slice() {
                kinds if kinds.contains(&ActionKind::Win) => Action::win(player.clone()).with_tile(tile),
                kinds if kinds.contains(&ActionKind::RobKong) => Action::rob(player.clone(), tile),
                _ if self.rng.random_bool(0.5) => Action::pass(player.clone()),
                kinds if kinds.contains(&ActionKind::Kong) => Action::kong(player.clone(), tile),
                kinds if kinds.contains(&ActionKind::Pong) => Action::pong(player.clone(), tile),
                kinds if kinds.contains(&ActionKind::Chi) => match tiles::runs_with(hand, tile).first() {
                    Some(run) => Action::chi(player.clone(), tile, *run),
                    None => Action::pass(player.clone()),
                },
                _ => Action::pass(player.clone()),
            });
        }
        let has = |kind| available.contains(&kind);
        if has(ActionKind::Win) {
            return Some(Action::win(player.clone()));
        }
        if has(ActionKind::Draw) {
            return Some(Action::draw(player.clone()));
        }
        if has(ActionKind::Flower) {
            let flower = hand.iter().copied().find(Tile::is_flower)?;
            return Some(Action::flower(player.clone(), flower));
        }
        if has(ActionKind::Ready) && self.rng.random_bool(0.5) {
            return Some(Action::ready(player.clone()));
        }
        if has(ActionKind::Kong) && self.rng.random_bool(0.5) {
            if let Some(tile) = Self::kong(state, pos) {
                return Some(Action::kong(player.clone(), tile));
            }
        }
        if has(ActionKind::Discard) {
            return self.loneliest(hand).map(|tile| Action::discard(player.clone(), tile));
        }
        None
    }

    /// A tile the player can kong on their own turn.
    fn kong(state: &GameState, pos: Position) -> Option<Tile> {
        let player = state.player(pos);
        tiles::unique(player.hand()).into_iter().find(|t| {
            tiles::count(player.hand(), *t) == 4 || player.melds().iter().any(|m| m.is_pong_of(*t))
        })
    }

    /// One of the tiles with the fewest copies and neighbours in hand.
    fn loneliest(&mut self, hand: &[Tile]) -> Option<Tile> {
        let company = |tile: &Tile| {
            hand.iter()
                .filter(|t| **t == *tile || Some(**t) == tile.succ() || Some(**t) == tile.pred())
                .count()
        };
        let fewest = hand.iter().map(company).min()?;
        hand.iter()
            .copied()
            .filter(|t| company(t) == fewest)
            .collect::<Vec<_>>()
            .choose(&mut self.rng)
            .copied()
    }
}

/// Let robots play `engine` until the game ends, one action at a time,
/// asking players in seat order. Returns the number of actions taken.
pub fn autoplay(engine: &mut Engine, robot: &mut Robot) -> anyhow::Result<usize> {
    let players = engine
        .state()
        .map(|s| s.players().iter().map(|p| p.id().clone()).collect::<Vec<_>>())
        .ok_or_else(|| anyhow::anyhow!("game not initialized"))?;
    let mut steps = 0;
    while !engine.is_over() {
        let action = players
            .iter()
            .find_map(|p| robot.decide(engine, p))
            .ok_or_else(|| anyhow::anyhow!("no player can move"))?;
        log::trace!("{}", action);
        engine.handle(action)?;
        steps += 1;
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variant;
    use crate::engine::GameConfig;
    use crate::engine::Action;

    fn start(variant: Variant, seed: u64) -> Engine {
        let mut engine = variant.engine();
        let players = (0..4).map(|i| format!("bot{}", i)).collect();
        engine
            .initialize(players, GameConfig::default().with_seed(seed))
            .unwrap();
        engine
    }

    #[test]
    fn loneliest_avoids_runs_and_pairs() {
        let mut robot = Robot::seeded(0);
        let hand = tiles::parse("123m 55p 9s").unwrap();
        assert_eq!(robot.loneliest(&hand), Tile::try_from("9s").ok());
    }

    #[test]
    fn robots_finish_every_game() {
        for variant in Variant::all() {
            for seed in 0..8 {
                let mut engine = start(variant, seed);
                let total = engine.total();
                autoplay(&mut engine, &mut Robot::seeded(seed)).unwrap();
                let state = engine.state().unwrap();
                assert!(state.is_over());
                assert_eq!(state.tile_total(), total);
                let net = state.players().iter().map(|p| p.score()).sum::<crate::Points>();
                assert_eq!(net, 0);
            }
        }
    }

    proptest::proptest! {
        #![proptest_config(proptest::prelude::ProptestConfig::with_cases(32))]
        #[test]
        fn self_play_keeps_every_invariant(seed in proptest::prelude::any::<u64>(), seats in 2usize..=4, taihu in proptest::prelude::any::<bool>()) {
            let variant = if taihu { Variant::Taihu } else { Variant::Huitong };
            let mut engine = variant.engine();
            let players = (0..seats).map(|i| format!("bot{}", i)).collect::<Vec<_>>();
            engine
                .initialize(players.clone(), GameConfig::default().with_players(seats).with_seed(seed))
                .unwrap();
            let mut robot = Robot::seeded(seed);
            let mut round = 1;
            while !engine.is_over() {
                let before = engine.snapshot().unwrap();
                let idle = players
                    .iter()
                    .find(|p| before.position(p) != Some(before.current()))
                    .cloned()
                    .unwrap();
                proptest::prop_assert!(engine.handle(Action::draw(idle)).is_err());
                proptest::prop_assert_eq!(engine.state().unwrap(), &before);
                let action = players.iter().find_map(|p| robot.decide(&engine, p)).unwrap();
                engine.handle(action).unwrap();
                let state = engine.state().unwrap();
                proptest::prop_assert_eq!(state.tile_total(), engine.total());
                proptest::prop_assert!(state.round() >= round);
                round = state.round();
            }
            let state = engine.state().unwrap();
            let net = state.players().iter().map(|p| p.score()).sum::<crate::Points>();
            proptest::prop_assert_eq!(net, 0);
            if let Some(settlement) = state.settlement() {
                let paid = settlement.transfers().iter().map(|t| t.amount()).sum::<crate::Points>();
                let payers = if settlement.loser().is_some() { 1 } else { seats as crate::Points - 1 };
                proptest::prop_assert_eq!(paid, settlement.total() * payers);
            }
        }
    }
}
