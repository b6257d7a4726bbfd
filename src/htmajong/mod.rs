//! Huitong rules: 108 numbered tiles, no chi, no flowers. A player may
//! declare ready once during the first round, and an added kong can be robbed.
pub mod actions;
pub mod deck;
pub mod judge;
pub mod settler;
pub mod state;
pub mod winning;

pub use actions::*;
pub use deck::*;
pub use judge::*;
pub use settler::*;
pub use state::*;
pub use winning::*;

use crate::engine::Engine;

/// A fresh, uninitialized Huitong engine.
pub fn engine() -> Engine {
    Engine::new(
        Box::new(Deck),
        Box::new(Actions),
        Box::new(Judge),
        Box::new(Winning),
        Box::new(Scorer),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Action;
    use crate::engine::ActionKind;
    use crate::engine::GameConfig;
    use crate::engine::WinType;
    use crate::tiles::Meld;
    use crate::tiles::MeldKind;
    use crate::tiles::Tile;
    use crate::tiles::parse;

    fn t(s: &str) -> Tile {
        Tile::try_from(s).unwrap()
    }
    fn started(hands: [&str; 4], wall: &str) -> Engine {
        let mut engine = engine();
        let ids = (0..4).map(|i| format!("p{}", i)).collect();
        engine
            .initialize(ids, GameConfig::default().with_seed(3).with_base(1))
            .unwrap();
        let state = engine.state_mut().unwrap();
        for (player, hand) in state.players.iter_mut().zip(hands) {
            player.hand = parse(hand).unwrap();
        }
        state.deck = parse(wall).unwrap().into();
        engine
    }

    #[test]
    fn early_ready_doubles_the_win() {
        let mut engine = started(
            [
                "123m 456m 789m 111p 2s 9s",
                "258s 258p 369m 369s 1p",
                "369p 147m 258s 369m 7s",
                "111m 333s 333p 444m 5p",
            ],
            "1m 2m 3m 4m",
        );
        assert!(engine.available(&"p0".into()).contains(&ActionKind::Ready));
        engine.handle(Action::ready("p0")).unwrap();
        let readiness = readiness(engine.state().unwrap(), 0);
        assert!(readiness.is_early());
        assert_eq!(readiness.waits(), &[t("2s"), t("9s")]);
        engine.handle(Action::discard("p0", t("9s"))).unwrap();
        assert!(engine.tasks().is_empty());
        engine.handle(Action::draw("p1")).unwrap();
        engine.handle(Action::discard("p1", t("2s"))).unwrap();
        assert_eq!(engine.available(&"p0".into()), vec![ActionKind::Win, ActionKind::Pass]);
        engine.handle(Action::win("p0")).unwrap();
        let settlement = engine.settlement().unwrap();
        assert_eq!(settlement.win_type(), WinType::Discard);
        assert!(settlement.patterns().iter().any(|p| p.name() == DECLARED_READY));
        assert!(settlement.patterns().iter().any(|p| p.name() == DEALER_WIN));
        assert_eq!(settlement.total(), 5 * 2 * 2);
        assert_eq!(settlement.delta(&"p1".into()), -20);
        assert_eq!(engine.state().unwrap().player(0).score(), 20);
    }

    #[test]
    fn dealer_pong_closes_the_ready_window() {
        let mut engine = started(
            [
                "1p 99s 147m 258m 147s 36p",
                "123m 456m 789m 222p 5s",
                "369p 147m 258s 369m 7s",
                "111m 333s 333p 444m 5p",
            ],
            "9p 9s 1s 2s",
        );
        engine.handle(Action::discard("p0", t("1p"))).unwrap();
        engine.handle(Action::draw("p1")).unwrap();
        assert!(engine.available(&"p1".into()).contains(&ActionKind::Ready));
        engine.handle(Action::discard("p1", t("9p"))).unwrap();
        engine.handle(Action::draw("p2")).unwrap();
        engine.handle(Action::discard("p2", t("9s"))).unwrap();
        assert_eq!(engine.available(&"p0".into()), vec![ActionKind::Pong, ActionKind::Pass]);
        engine.handle(Action::pong("p0", t("9s"))).unwrap();
        let state = engine.state().unwrap();
        assert_eq!(state.current(), 0);
        assert_eq!(state.round(), 2);
        engine.handle(Action::discard("p0", t("6p"))).unwrap();
        engine.handle(Action::draw("p1")).unwrap();
        assert_eq!(engine.state().unwrap().round(), 2);
        assert_eq!(engine.available(&"p1".into()), vec![ActionKind::Discard]);
        assert!(engine.handle(Action::ready("p1")).is_err());
        assert!(!readiness(engine.state().unwrap(), 1).declared());
    }

    #[test]
    fn added_kong_can_be_robbed() {
        let mut engine = started(
            [
                "2p 147m 147s 258m 9s",
                "123m 456m 789m 11s 13p",
                "369p 147m 258s 369m 7s",
                "111m 333s 333p 444m 5p",
            ],
            "1m 2m 3m 4m",
        );
        engine.state_mut().unwrap().players[0].melds.push(Meld::pong(t("2p")));
        engine.handle(Action::kong("p0", t("2p"))).unwrap();
        assert_eq!(engine.tasks().len(), 1);
        assert_eq!(engine.available(&"p1".into()), vec![ActionKind::RobKong, ActionKind::Pass]);
        assert!(engine.handle(Action::draw("p1")).is_err());
        engine.handle(Action::rob("p1", t("2p"))).unwrap();
        let state = engine.state().unwrap();
        assert!(state.is_over());
        assert_eq!(state.player(0).melds()[0].kind(), MeldKind::Pong);
        let settlement = state.settlement().unwrap();
        assert_eq!(settlement.win_type(), WinType::RobKong);
        assert_eq!(settlement.loser().map(String::as_str), Some("p0"));
        assert_eq!(settlement.total(), 2);
        assert_eq!(settlement.transfers().len(), 1);
    }
}
