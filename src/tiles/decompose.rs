use super::counts::Counts;
use super::suit::Suit;
use super::tile::Tile;

/// Whether the multiset splits into one pair plus any number of
/// triplets and runs. Size must be `3n + 2`.
pub fn is_standard(counts: &Counts) -> bool {
    if counts.len() % 3 != 2 || counts.iter().any(|(t, _)| t.is_flower()) {
        return false;
    }
    counts
        .iter()
        .filter(|(_, n)| *n >= 2)
        .map(|(pair, _)| pair)
        .collect::<Vec<_>>()
        .into_iter()
        .any(|pair| {
            let mut rest = *counts;
            rest.remove(pair);
            rest.remove(pair);
            strip(&rest)
        })
}

/// Like [`is_standard`] but every meld must be a triplet.
pub fn is_all_triplets(counts: &Counts) -> bool {
    if counts.len() % 3 != 2 || counts.iter().any(|(t, _)| t.is_flower()) {
        return false;
    }
    counts.iter().filter(|(_, n)| *n == 2).count() == 1
        && counts.iter().all(|(_, n)| n == 2 || n == 3)
}

/// Seven pairs: exactly fourteen concealed tiles, every count 2 or 4.
pub fn is_seven_pairs(counts: &Counts) -> bool {
    counts.len() == 14
        && counts.iter().all(|(t, n)| !t.is_flower() && (n == 2 || n == 4))
}

/// Seven pairs where at least one "pair" is four of a kind.
pub fn has_quad_pair(counts: &Counts) -> bool {
    is_seven_pairs(counts) && counts.iter().any(|(_, n)| n == 4)
}

/// Any winning shape the decomposition search knows about.
pub fn is_complete(counts: &Counts) -> bool {
    is_seven_pairs(counts) || is_standard(counts)
}

/// Tiles that would complete `hand`. Kinds already held four times are excluded.
pub fn waits(hand: &[Tile]) -> Vec<Tile> {
    let counts = Counts::from(hand);
    Tile::kinds(&[Suit::Wan, Suit::Tiao, Suit::Tong, Suit::Wind, Suit::Dragon])
        .into_iter()
        .filter(|tile| counts.get(*tile) < 4)
        .filter(|tile| {
            let mut with = counts;
            with.add(*tile);
            is_complete(&with)
        })
        .collect()
}

/// Recursively remove melds starting from the lowest remaining tile,
/// trying a triplet before a run.
fn strip(counts: &Counts) -> bool {
    let Some(low) = counts.first() else {
        return true;
    };
    if counts.get(low) >= 3 {
        let mut rest = *counts;
        (0..3).for_each(|_| {
            rest.remove(low);
        });
        if strip(&rest) {
            return true;
        }
    }
    match low.succ().zip(low.succ().and_then(|t| t.succ())) {
        Some((mid, high)) if counts.get(mid) > 0 && counts.get(high) > 0 => {
            let mut rest = *counts;
            rest.remove(low);
            rest.remove(mid);
            rest.remove(high);
            strip(&rest)
        }
        _ => false,
    }
}
