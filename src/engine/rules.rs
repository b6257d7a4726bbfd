//! Move mechanics shared by every variant: turn checks, drawing,
//! discarding, and claiming melds off another player's discard.
//!
//! Each `check_*` is pure. Each mutating function runs its check first and
//! computes every removal before touching the state, so a rejected move
//! changes nothing.
use super::action::Action;
use super::action::ActionKind;
use super::error::Violation;
use super::state::GameState;
use super::strategy::WinningAlgorithm;
use crate::Position;
use crate::tiles;
use crate::tiles::Kong;
use crate::tiles::Meld;
use crate::tiles::MeldKind;
use crate::tiles::Tile;

/// The concealed hand with the candidate tile added.
pub fn concealed(state: &GameState, pos: Position, candidate: Option<Tile>) -> Vec<Tile> {
    let mut tiles = state.player(pos).hand().to_vec();
    tiles.extend(candidate);
    tiles.sort_unstable();
    tiles
}

/// The concealed hand, the candidate, and every melded tile.
pub fn whole_hand(state: &GameState, pos: Position, candidate: Option<Tile>) -> Vec<Tile> {
    let mut tiles = concealed(state, pos, candidate);
    tiles.extend(state.player(pos).melds().iter().flat_map(|m| m.tiles().iter().copied()));
    tiles
}

/// Seat of the acting player.
pub fn seat(state: &GameState, action: &Action) -> Result<Position, Violation> {
    state.position(action.player()).ok_or(Violation::UnknownPlayer)
}

/// No claim window is open and it is `pos`'s turn.
pub fn check_turn(state: &GameState, pos: Position) -> Result<(), Violation> {
    match (state.tasks().is_empty(), state.current() == pos) {
        (false, _) => Err(Violation::AwaitingReactions),
        (true, false) => Err(Violation::NotYourTurn),
        (true, true) => Ok(()),
    }
}

pub fn check_draw(state: &GameState, pos: Position) -> Result<(), Violation> {
    check_turn(state, pos)?;
    if !state.player(pos).needs_tile() {
        return Err(Violation::MustDiscard);
    }
    if state.deck().is_empty() {
        return Err(Violation::WallEmpty);
    }
    Ok(())
}

pub fn check_discard(state: &GameState, pos: Position, tile: Option<Tile>) -> Result<Tile, Violation> {
    check_turn(state, pos)?;
    let tile = tile.ok_or(Violation::MissingTile)?;
    if !state.player(pos).must_discard() {
        return Err(Violation::MustDraw);
    }
    if !tiles::contains(state.player(pos).hand(), tile) {
        return Err(Violation::TileNotInHand);
    }
    Ok(tile)
}

/// The discard up for claim. `pos` must not be its author, and a tile named
/// by the claimant must be that discard.
pub fn check_claim(state: &GameState, pos: Position, tile: Option<Tile>) -> Result<(Tile, Position), Violation> {
    let (discard, author) = state
        .claimable(ActionKind::Discard)
        .ok_or(Violation::NothingToClaim)?;
    match (author == pos, tile) {
        (true, _) => Err(Violation::NothingToClaim),
        (_, Some(t)) if t != discard => Err(Violation::NothingToClaim),
        _ => Ok((discard, author)),
    }
}

pub fn check_pong(state: &GameState, pos: Position, tile: Option<Tile>) -> Result<Tile, Violation> {
    let (discard, _) = check_claim(state, pos, tile)?;
    match tiles::count(state.player(pos).hand(), discard) >= 2 {
        true => Ok(discard),
        false => Err(Violation::NotEnoughTiles),
    }
}

/// Which kong `pos` can make with `tile`: exposed off an open discard,
/// otherwise concealed or added on the player's own turn.
pub fn check_kong(state: &GameState, pos: Position, tile: Option<Tile>) -> Result<(Tile, Kong), Violation> {
    if state.deck().is_empty() {
        return Err(Violation::WallEmpty);
    }
    let hand = state.player(pos).hand();
    if state.window().is_some() {
        let (discard, _) = check_claim(state, pos, tile)?;
        return match tiles::count(hand, discard) >= 3 {
            true => Ok((discard, Kong::Exposed)),
            false => Err(Violation::NotEnoughTiles),
        };
    }
    check_turn(state, pos)?;
    let tile = tile.ok_or(Violation::MissingTile)?;
    if !state.player(pos).must_discard() {
        return Err(Violation::MustDraw);
    }
    if tiles::count(hand, tile) == 4 {
        return Ok((tile, Kong::Concealed));
    }
    match tiles::contains(hand, tile) && state.player(pos).melds().iter().any(|m| m.is_pong_of(tile)) {
        true => Ok((tile, Kong::Added)),
        false => Err(Violation::NotEnoughTiles),
    }
}

/// Chi: only from the upstream seat, only numbered suits, and `run` (when
/// given) must be a run through the discard whose other tiles are in hand.
/// With no run given, the lowest available run is chosen.
pub fn check_chi(state: &GameState, pos: Position, tile: Option<Tile>, run: &[Tile]) -> Result<[Tile; 3], Violation> {
    let (discard, author) = check_claim(state, pos, tile)?;
    if state.upstream(pos) != author {
        return Err(Violation::NotUpstream);
    }
    if !discard.is_numbered() {
        return Err(Violation::NotARun);
    }
    let hand = state.player(pos).hand();
    match run {
        [] => tiles::runs_with(hand, discard)
            .into_iter()
            .next()
            .ok_or(Violation::NotARun),
        [a, b, c] => {
            if !tiles::is_sequence(run) || !tiles::contains(run, discard) {
                return Err(Violation::NotARun);
            }
            let others = tiles::remove_all(run, &[discard]).ok_or(Violation::NotARun)?;
            match tiles::contains_all(hand, &others) {
                true => Ok([*a, *b, *c]),
                false => Err(Violation::TileNotInHand),
            }
        }
        _ => Err(Violation::NotARun),
    }
}

/// A win: on a discard or an added kong when a window is open,
/// otherwise a self-draw on the player's own turn.
pub fn check_win(
    state: &GameState,
    pos: Position,
    tile: Option<Tile>,
    winning: &dyn WinningAlgorithm,
) -> Result<Option<Tile>, Violation> {
    let candidate = match state.window() {
        Some(window) if window.kind() == ActionKind::Kong => Some(check_rob(state, pos, tile)?),
        Some(_) => Some(check_claim(state, pos, tile)?.0),
        None => {
            check_turn(state, pos)?;
            if !state.player(pos).must_discard() {
                return Err(Violation::MustDraw);
            }
            None
        }
    };
    match winning.can_win(state, pos, candidate) {
        true => Ok(candidate),
        false => Err(Violation::CannotWin),
    }
}

/// The tile laid on an added kong that is up for robbing.
pub fn check_rob(state: &GameState, pos: Position, tile: Option<Tile>) -> Result<Tile, Violation> {
    let (added, author) = state
        .claimable(ActionKind::Kong)
        .ok_or(Violation::NothingToClaim)?;
    match (author == pos, tile) {
        (true, _) => Err(Violation::NothingToClaim),
        (_, Some(t)) if t != added => Err(Violation::NothingToClaim),
        _ => Ok(added),
    }
}

pub fn draw(state: &mut GameState, pos: Position) -> Result<Tile, Violation> {
    check_draw(state, pos)?;
    let tile = state.draw().ok_or(Violation::WallEmpty)?;
    state.player_mut(pos).receive(tile);
    Ok(tile)
}

pub fn discard(state: &mut GameState, pos: Position, tile: Option<Tile>) -> Result<Tile, Violation> {
    let tile = check_discard(state, pos, tile)?;
    let player = state.player_mut(pos);
    tiles::remove(&mut player.hand, tile);
    player.discards.push(tile);
    Ok(tile)
}

pub fn pong(state: &mut GameState, pos: Position, tile: Option<Tile>) -> Result<Tile, Violation> {
    let tile = check_pong(state, pos, tile)?;
    let (_, author) = check_claim(state, pos, Some(tile))?;
    let hand = tiles::remove_all(state.player(pos).hand(), &[tile, tile]).ok_or(Violation::NotEnoughTiles)?;
    take_discard(state, author);
    let player = state.player_mut(pos);
    player.hand = hand;
    player.melds.push(Meld::pong(tile));
    Ok(tile)
}

/// Lay down a kong and draw its replacement tile from the wall.
pub fn kong(state: &mut GameState, pos: Position, tile: Option<Tile>) -> Result<(Tile, Kong), Violation> {
    let (tile, how) = check_kong(state, pos, tile)?;
    let taken = match how {
        Kong::Exposed => 3,
        Kong::Concealed => 4,
        Kong::Added => 1,
    };
    let hand = tiles::remove_all(state.player(pos).hand(), &vec![tile; taken]).ok_or(Violation::NotEnoughTiles)?;
    if how == Kong::Exposed {
        let (_, author) = check_claim(state, pos, Some(tile))?;
        take_discard(state, author);
    }
    let replacement = state.draw().ok_or(Violation::WallEmpty)?;
    let player = state.player_mut(pos);
    player.hand = hand;
    match how {
        Kong::Added => {
            if let Some(meld) = player.melds.iter_mut().find(|m| m.is_pong_of(tile)) {
                meld.upgrade(tile);
            }
        }
        _ => player.melds.push(Meld::kong(tile, how)),
    }
    player.receive(replacement);
    Ok((tile, how))
}

pub fn chi(state: &mut GameState, pos: Position, tile: Option<Tile>, run: &[Tile]) -> Result<[Tile; 3], Violation> {
    let run = check_chi(state, pos, tile, run)?;
    let (discard, author) = check_claim(state, pos, tile)?;
    let others = tiles::remove_all(&run, &[discard]).ok_or(Violation::NotARun)?;
    let hand = tiles::remove_all(state.player(pos).hand(), &others).ok_or(Violation::TileNotInHand)?;
    take_discard(state, author);
    let player = state.player_mut(pos);
    player.hand = hand;
    player.melds.push(Meld::chi(run));
    Ok(run)
}

/// Move the winning tile into the winner's hand: off the discarder's pile,
/// or back off a robbed kong. A self-draw moves nothing.
pub fn win(
    state: &mut GameState,
    pos: Position,
    tile: Option<Tile>,
    winning: &dyn WinningAlgorithm,
) -> Result<Option<Tile>, Violation> {
    let candidate = check_win(state, pos, tile, winning)?;
    let author = state.window_author();
    let robbed = state.window().map(|w| w.kind()) == Some(ActionKind::Kong);
    match (candidate, author) {
        (Some(tile), Some(author)) if robbed => {
            let meld = state
                .player_mut(author)
                .melds
                .iter_mut()
                .find(|m| m.kind() == MeldKind::Kong(Kong::Added) && m.head() == tile);
            if let Some(meld) = meld {
                meld.downgrade();
            }
            state.player_mut(pos).receive(tile);
        }
        (Some(tile), Some(author)) => {
            take_discard(state, author);
            state.player_mut(pos).receive(tile);
        }
        _ => {}
    }
    Ok(candidate)
}

/// Remove the claimed tile from the top of its author's discard pile.
fn take_discard(state: &mut GameState, author: Position) {
    state.player_mut(author).discards.pop();
}
