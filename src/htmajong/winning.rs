use super::state::readiness;
use crate::Position;
use crate::engine::GameState;
use crate::engine::WinContext;
use crate::engine::WinPattern;
use crate::engine::WinningAlgorithm;
use crate::engine::rules;
use crate::tiles;
use crate::tiles::Counts;
use crate::tiles::MeldKind;
use crate::tiles::Tile;

pub const ALL_ONE_SUIT: &str = "all one suit";
pub const DRAGON_SEVEN_PAIRS: &str = "dragon seven pairs";
pub const SEVEN_PAIRS: &str = "seven pairs";
pub const ALL_TRIPLETS: &str = "all triplets";
pub const MISSING_ONE_SUIT: &str = "missing one suit";
pub const DECLARED_READY: &str = "declared ready";
pub const PLAIN_WIN: &str = "plain win";

/// Huitong hand evaluation. Patterns are scored in fan.
#[derive(Debug, Default, Clone, Copy)]
pub struct Winning;

impl WinningAlgorithm for Winning {
    fn can_win(&self, state: &GameState, player: Position, candidate: Option<Tile>) -> bool {
        tiles::is_complete(&Counts::from(
            rules::concealed(state, player, candidate).as_slice(),
        ))
    }

    fn patterns(&self, state: &GameState, context: &WinContext) -> Vec<WinPattern> {
        let concealed = Counts::from(rules::concealed(state, context.player, context.candidate).as_slice());
        let whole = rules::whole_hand(state, context.player, context.candidate);
        let melds = state.player(context.player).melds();
        let mut patterns = Vec::new();
        if tiles::is_one_suit(&whole) {
            patterns.push(WinPattern::new(ALL_ONE_SUIT, 10));
        }
        if tiles::has_quad_pair(&concealed) {
            patterns.push(WinPattern::new(DRAGON_SEVEN_PAIRS, 8));
        } else if tiles::is_seven_pairs(&concealed) {
            patterns.push(WinPattern::new(SEVEN_PAIRS, 6));
        }
        if tiles::is_all_triplets(&concealed) && melds.iter().all(|m| m.kind() != MeldKind::Chi) {
            patterns.push(WinPattern::new(ALL_TRIPLETS, 6));
        }
        if tiles::numbered_suits(&whole) == 2 {
            patterns.push(WinPattern::new(MISSING_ONE_SUIT, 2));
        }
        if readiness(state, context.player).is_early() {
            patterns.push(WinPattern::new(DECLARED_READY, 5));
        }
        if patterns.is_empty() {
            patterns.push(WinPattern::new(PLAIN_WIN, 1));
        }
        patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameConfig;
    use crate::engine::Player;
    use crate::engine::VariantState;
    use crate::engine::WinType;
    use crate::htmajong::Readiness;
    use crate::tiles::Meld;
    use crate::tiles::parse;

    fn seat(hand: &str) -> GameState {
        let players = vec![
            Player::new("a".into(), parse(hand).unwrap(), VariantState::Huitong(Readiness::default())),
            Player::new("b".into(), Vec::new(), VariantState::Huitong(Readiness::default())),
        ];
        GameState::new(players, Default::default(), GameConfig::default().with_players(2))
    }
    fn names(state: &GameState, candidate: Option<&str>) -> Vec<String> {
        let context = WinContext {
            player: 0,
            candidate: candidate.map(|c| Tile::try_from(c).unwrap()),
            win_type: WinType::Discard,
        };
        Winning
            .patterns(state, &context)
            .into_iter()
            .map(|p| p.name().to_string())
            .collect()
    }
    #[test]
    fn melds_plus_pair_always_win() {
        for hand in [
            "123m 456m 789m 111p 22s",
            "111m 222m 333m 444m 55m",
            "123p 234p 345p 678s 99s",
            "11223344556677m",
        ] {
            assert!(Winning.can_win(&seat(hand), 0, None), "{}", hand);
        }
    }

    #[test]
    fn scattered_hands_never_win() {
        for hand in ["147m 258p 369s 1m 4p 7s 9m 9p", "13579m 13579p 1357s"] {
            assert!(!Winning.can_win(&seat(hand), 0, None), "{}", hand);
        }
    }

    #[test]
    fn candidate_completes_the_hand() {
        let state = seat("123m 456m 789m 111p 2s");
        assert!(Winning.can_win(&state, 0, Tile::try_from("2s").ok()));
        assert!(!Winning.can_win(&state, 0, Tile::try_from("3s").ok()));
    }

    #[test]
    fn pattern_battery() {
        assert_eq!(names(&seat("111222333444m 5m"), Some("5m")), vec![ALL_ONE_SUIT, ALL_TRIPLETS]);
        assert_eq!(names(&seat("11m 22m 33m 44p 55p 66p 7p"), Some("7p")), vec![SEVEN_PAIRS, MISSING_ONE_SUIT]);
        assert_eq!(names(&seat("1111m 22m 44p 55p 66p 7p"), Some("7p")), vec![DRAGON_SEVEN_PAIRS, MISSING_ONE_SUIT]);
        assert_eq!(names(&seat("123m 456p 789s 111p 2s"), Some("2s")), vec![PLAIN_WIN]);
    }

    #[test]
    fn melds_count_toward_suit_patterns() {
        let mut state = seat("123m 456m 789m 5p");
        state.player_mut(0).melds.push(Meld::pong(Tile::try_from("9p").unwrap()));
        assert_eq!(names(&state, Some("5p")), vec![MISSING_ONE_SUIT]);
    }

    #[test]
    fn chi_spoils_all_triplets() {
        let mut state = seat("111m 222p 5s");
        state
            .player_mut(0)
            .melds
            .push(Meld::chi([Tile::try_from("1s").unwrap(), Tile::try_from("2s").unwrap(), Tile::try_from("3s").unwrap()]));
        assert!(!names(&state, Some("5s")).contains(&ALL_TRIPLETS.to_string()));
    }

    #[test]
    fn early_ready_scores() {
        let mut state = seat("123m 456m 789m 111p 2s");
        crate::htmajong::state::declare(&mut state, 0, vec![Tile::try_from("2s").unwrap()]);
        assert!(names(&state, Some("2s")).contains(&DECLARED_READY.to_string()));
    }
}
