use super::winning::DECLARED_READY;
use super::winning::Winning;
use crate::Points;
use crate::Position;
use crate::engine::GameState;
use crate::engine::Settlement;
use crate::engine::Settler;
use crate::engine::WinPattern;
use crate::engine::WinType;
use crate::engine::WinningAlgorithm;

pub const DEALER_WIN: &str = "dealer win";

/// Huitong scoring: base times fan, doubled for each of self-draw,
/// an early ready declaration, robbing a kong, and the dealer winning.
#[derive(Debug, Default, Clone, Copy)]
pub struct Scorer;

/// Size of a win by fan.
pub fn grade(fan: Points) -> &'static str {
    match fan {
        f if f >= 10 => "grand win",
        f if f >= 6 => "big win",
        _ => "small win",
    }
}

impl Settler for Scorer {
    fn settle(
        &self,
        state: &GameState,
        winner: Position,
        loser: Option<Position>,
        win_type: WinType,
        mut patterns: Vec<WinPattern>,
    ) -> Settlement {
        let fan = Winning.score(&patterns);
        let base = match state.config().base() {
            0 => 1,
            b => b,
        };
        let doubles = [
            win_type == WinType::SelfDraw,
            patterns.iter().any(|p| p.name() == DECLARED_READY),
            win_type == WinType::RobKong,
            winner == state.dealer(),
        ];
        if winner == state.dealer() {
            patterns.push(WinPattern::new(DEALER_WIN, 0));
        }
        let total = doubles
            .iter()
            .filter(|d| **d)
            .fold(base * fan, |total, _| total * 2);
        let reason = format!("{} by {}", grade(fan), win_type);
        Settlement::new(state, winner, loser, win_type, patterns, base, total, reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameConfig;
    use crate::engine::Player;
    use crate::engine::VariantState;
    use crate::htmajong::winning::ALL_ONE_SUIT;
    use crate::htmajong::winning::PLAIN_WIN;

    fn state(base: Points) -> GameState {
        let players = ["a", "b", "c"]
            .iter()
            .map(|id| Player::new(id.to_string(), Vec::new(), VariantState::Plain))
            .collect();
        GameState::new(players, Default::default(), GameConfig::default().with_players(3).with_base(base))
    }

    #[test]
    fn discard_win_is_base_times_fan() {
        let patterns = vec![WinPattern::new(ALL_ONE_SUIT, 10), WinPattern::new(PLAIN_WIN, 1)];
        let settlement = Scorer.settle(&state(2), 1, Some(2), WinType::Discard, patterns);
        assert_eq!(settlement.total(), 22);
        assert_eq!(settlement.transfers().len(), 1);
        assert_eq!(settlement.transfers()[0].reason(), "grand win by discard");
    }

    #[test]
    fn doublings_stack() {
        let patterns = vec![WinPattern::new(DECLARED_READY, 5)];
        let settlement = Scorer.settle(&state(1), 0, None, WinType::SelfDraw, patterns);
        assert_eq!(settlement.total(), 5 * 2 * 2 * 2);
        assert!(settlement.patterns().iter().any(|p| p.name() == DEALER_WIN && p.score() == 0));
        assert_eq!(settlement.transfers().len(), 2);
        assert!(settlement.transfers()[0].reason().starts_with("small win"));
    }

    #[test]
    fn robbing_doubles_and_zero_base_counts_as_one() {
        let patterns = vec![WinPattern::new(PLAIN_WIN, 1)];
        let settlement = Scorer.settle(&state(0), 2, Some(1), WinType::RobKong, patterns);
        assert_eq!(settlement.base(), 1);
        assert_eq!(settlement.total(), 2);
    }

    #[test]
    fn grades() {
        assert_eq!(grade(1), "small win");
        assert_eq!(grade(6), "big win");
        assert_eq!(grade(10), "grand win");
    }
}
