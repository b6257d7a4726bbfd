use super::state::tally;
use crate::Position;
use crate::engine::GameState;
use crate::engine::WinContext;
use crate::engine::WinPattern;
use crate::engine::WinType;
use crate::engine::WinningAlgorithm;
use crate::engine::rules;
use crate::tiles;
use crate::tiles::Counts;
use crate::tiles::MeldKind;
use crate::tiles::Tile;

pub const NO_FLOWER_SELF_DRAW: &str = "no-flower self-draw";
pub const ALL_ONE_SUIT: &str = "all one suit";
pub const DRAGON_SEVEN_PAIRS: &str = "dragon seven pairs";
pub const SEVEN_PAIRS: &str = "seven pairs";
pub const ALL_TRIPLETS: &str = "all triplets";
pub const SINGLE_WAIT: &str = "single wait";
pub const PLAIN_WIN: &str = "plain win";

/// Taihu hand evaluation. Patterns are scored in flowers.
#[derive(Debug, Default, Clone, Copy)]
pub struct Winning;

impl WinningAlgorithm for Winning {
    fn can_win(&self, state: &GameState, player: Position, candidate: Option<Tile>) -> bool {
        tiles::is_complete(&Counts::from(
            rules::concealed(state, player, candidate).as_slice(),
        ))
    }

    fn patterns(&self, state: &GameState, context: &WinContext) -> Vec<WinPattern> {
        let player = state.player(context.player);
        let concealed = Counts::from(rules::concealed(state, context.player, context.candidate).as_slice());
        let whole = rules::whole_hand(state, context.player, context.candidate);
        let mut patterns = Vec::new();
        if context.win_type == WinType::SelfDraw
            && player.flowers().is_empty()
            && tally(state, context.player).flowers() == 0
        {
            patterns.push(WinPattern::new(NO_FLOWER_SELF_DRAW, 10));
        }
        if tiles::is_one_suit(&whole) {
            patterns.push(WinPattern::new(ALL_ONE_SUIT, 10));
        }
        if tiles::has_quad_pair(&concealed) {
            patterns.push(WinPattern::new(DRAGON_SEVEN_PAIRS, 8));
        } else if tiles::is_seven_pairs(&concealed) {
            patterns.push(WinPattern::new(SEVEN_PAIRS, 6));
        }
        if tiles::is_all_triplets(&concealed) && player.melds().iter().all(|m| m.kind() != MeldKind::Chi) {
            patterns.push(WinPattern::new(ALL_TRIPLETS, 6));
        }
        if player.melds().len() == 4 {
            patterns.push(WinPattern::new(SINGLE_WAIT, 5));
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
    use crate::thmajong::Tally;
    use crate::tiles::Meld;
    use crate::tiles::parse;

    fn t(s: &str) -> Tile {
        Tile::try_from(s).unwrap()
    }
    fn seat(hand: &str) -> GameState {
        let players = vec![
            Player::new("a".into(), parse(hand).unwrap(), VariantState::Taihu(Tally::default())),
            Player::new("b".into(), Vec::new(), VariantState::Taihu(Tally::default())),
        ];
        GameState::new(players, Default::default(), GameConfig::default().with_players(2))
    }
    fn names(state: &GameState, candidate: Option<&str>, win_type: WinType) -> Vec<String> {
        let context = WinContext {
            player: 0,
            candidate: candidate.map(t),
            win_type,
        };
        Winning
            .patterns(state, &context)
            .into_iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    #[test]
    fn honors_form_triplets_but_never_runs() {
        assert!(Winning.can_win(&seat("123m 456m 111w 222d 33p"), 0, None));
        assert!(!Winning.can_win(&seat("123m 456m 123w 222d 33p"), 0, None));
    }

    #[test]
    fn flowers_never_win() {
        assert!(!Winning.can_win(&seat("123m 456m 789m 111p 2s 1f"), 0, None));
    }

    #[test]
    fn self_draw_without_flowers() {
        let state = seat("123m 456p 789s 111p 22s");
        assert_eq!(names(&state, None, WinType::SelfDraw), vec![NO_FLOWER_SELF_DRAW]);
        assert_eq!(names(&state, None, WinType::Discard), vec![PLAIN_WIN]);
        let mut flowered = seat("123m 456p 789s 111p 22s");
        flowered.player_mut(0).flowers.push(t("2f"));
        assert_eq!(names(&flowered, None, WinType::SelfDraw), vec![PLAIN_WIN]);
    }

    #[test]
    fn single_wait_after_four_melds() {
        let mut state = seat("5s");
        for tile in ["1m", "9m", "1w", "2d"] {
            state.player_mut(0).melds.push(Meld::pong(t(tile)));
        }
        assert_eq!(names(&state, Some("5s"), WinType::Discard), vec![ALL_TRIPLETS, SINGLE_WAIT]);
    }

    #[test]
    fn pattern_battery() {
        assert_eq!(
            names(&seat("11m 22m 33m 44m 55m 66m 7m"), Some("7m"), WinType::Discard),
            vec![ALL_ONE_SUIT, SEVEN_PAIRS]
        );
        assert_eq!(
            names(&seat("1111w 22m 44p 55p 66p 7p"), Some("7p"), WinType::Discard),
            vec![DRAGON_SEVEN_PAIRS]
        );
        assert_eq!(
            names(&seat("111m 222w 333d 444p 5s"), Some("5s"), WinType::Discard),
            vec![ALL_TRIPLETS]
        );
    }
}
