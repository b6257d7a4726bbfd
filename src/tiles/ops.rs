use super::meld::MeldKind;
use super::suit::Suit;
use super::tile::Tile;
use std::collections::BTreeMap;

/// Sort tiles into canonical `(suit, value)` order.
pub fn sort(tiles: &mut [Tile]) {
    tiles.sort_unstable();
}

/// Number of copies of `target` in `tiles`.
pub fn count(tiles: &[Tile], target: Tile) -> usize {
    tiles.iter().filter(|t| **t == target).count()
}

pub fn contains(tiles: &[Tile], target: Tile) -> bool {
    tiles.contains(&target)
}

/// Multiset containment: every tile of `targets` is matched by a distinct tile of `tiles`.
pub fn contains_all(tiles: &[Tile], targets: &[Tile]) -> bool {
    remove_all(tiles, targets).is_some()
}

/// Remove the first copy of `target`. Returns whether a tile was removed.
pub fn remove(tiles: &mut Vec<Tile>, target: Tile) -> bool {
    tiles
        .iter()
        .position(|t| *t == target)
        .map(|i| tiles.remove(i))
        .is_some()
}

/// Multiset difference. `None` when `targets` is not contained in `tiles`,
/// in which case nothing observable has changed.
pub fn remove_all(tiles: &[Tile], targets: &[Tile]) -> Option<Vec<Tile>> {
    let mut rest = tiles.to_vec();
    targets
        .iter()
        .all(|t| remove(&mut rest, *t))
        .then_some(rest)
}

/// Distinct tiles in first-seen order.
pub fn unique(tiles: &[Tile]) -> Vec<Tile> {
    let mut seen = Vec::with_capacity(tiles.len());
    for tile in tiles {
        if !seen.contains(tile) {
            seen.push(*tile);
        }
    }
    seen
}

pub fn group_by_suit(tiles: &[Tile]) -> BTreeMap<Suit, Vec<Tile>> {
    tiles.iter().fold(BTreeMap::new(), |mut groups, tile| {
        groups.entry(tile.suit()).or_insert_with(Vec::new).push(*tile);
        groups
    })
}

/// Three consecutive tiles of one numbered suit, in any order.
pub fn is_sequence(tiles: &[Tile]) -> bool {
    if tiles.len() != 3 || !tiles[0].is_numbered() {
        return false;
    }
    let mut run = tiles.to_vec();
    sort(&mut run);
    run[0].succ() == Some(run[1]) && run[1].succ() == Some(run[2])
}

pub fn is_pair(tiles: &[Tile]) -> bool {
    tiles.len() == 2 && tiles[0] == tiles[1]
}

pub fn is_triplet(tiles: &[Tile]) -> bool {
    tiles.len() == 3 && tiles.iter().all(|t| *t == tiles[0])
}

pub fn is_quad(tiles: &[Tile]) -> bool {
    tiles.len() == 4 && tiles.iter().all(|t| *t == tiles[0])
}

/// Number of distinct numbered suits present.
pub fn numbered_suits(tiles: &[Tile]) -> usize {
    Suit::NUMBERED
        .iter()
        .filter(|suit| tiles.iter().any(|t| t.suit() == **suit))
        .count()
}

/// Every tile of one numbered suit.
pub fn is_one_suit(tiles: &[Tile]) -> bool {
    tiles.first().is_some_and(|first| {
        first.is_numbered() && tiles.iter().all(|t| t.suit() == first.suit())
    })
}

/// Whether `tiles` form a meld of the given kind.
pub fn can_form(tiles: &[Tile], kind: MeldKind) -> bool {
    match kind {
        MeldKind::Pong => is_triplet(tiles),
        MeldKind::Kong(_) => is_quad(tiles),
        MeldKind::Chi => is_sequence(tiles),
    }
}

/// Every run containing `tile` whose other two tiles are held in `hand`.
pub fn runs_with(hand: &[Tile], tile: Tile) -> Vec<[Tile; 3]> {
    let below = tile.pred();
    let above = tile.succ();
    [
        below.and_then(|b| b.pred().map(|bb| [bb, b, tile])),
        below.zip(above).map(|(b, a)| [b, tile, a]),
        above.and_then(|a| a.succ().map(|aa| [tile, a, aa])),
    ]
    .into_iter()
    .flatten()
    .filter(|run| {
        run.iter()
            .filter(|t| **t != tile)
            .all(|t| contains(hand, *t))
    })
    .collect()
}

/// Parse compact notation: value digits followed by a suit letter,
/// e.g. `"123m 456p 11w"`. Whitespace is ignored.
pub fn parse(notation: &str) -> anyhow::Result<Vec<Tile>> {
    let mut tiles = Vec::new();
    let mut values = Vec::new();
    for c in notation.chars().filter(|c| !c.is_whitespace()) {
        match c.to_digit(10) {
            Some(v) => values.push(v as u8),
            None => {
                let suit = Suit::try_from(c)?;
                if values.is_empty() {
                    return Err(anyhow::anyhow!("suit '{}' without values", c));
                }
                for v in values.drain(..) {
                    if v < 1 || v > suit.ranks() {
                        return Err(anyhow::anyhow!("value {} out of range for '{}'", v, c));
                    }
                    tiles.push(Tile::new(suit, v));
                }
            }
        }
    }
    match values.is_empty() {
        true => Ok(tiles),
        false => Err(anyhow::anyhow!("dangling values in '{}'", notation)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::Kong;

    fn t(s: &str) -> Tile {
        Tile::try_from(s).unwrap()
    }

    #[test]
    fn parse_compact_groups() {
        let tiles = parse("123m 45p 1w").unwrap();
        assert_eq!(tiles.len(), 6);
        assert_eq!(tiles[0], t("1m"));
        assert_eq!(tiles[4], t("5p"));
        assert_eq!(tiles[5], t("1w"));
        assert!(parse("123").is_err());
        assert!(parse("m").is_err());
        assert!(parse("9d").is_err());
    }

    #[test]
    fn counting_and_removal() {
        let mut tiles = parse("1123m").unwrap();
        assert_eq!(count(&tiles, t("1m")), 2);
        assert!(remove(&mut tiles, t("1m")));
        assert_eq!(count(&tiles, t("1m")), 1);
        assert!(!remove(&mut tiles, t("9m")));
        assert_eq!(tiles.len(), 3);
    }

    #[test]
    fn remove_all_is_atomic() {
        let tiles = parse("1123m").unwrap();
        assert_eq!(remove_all(&tiles, &parse("11m").unwrap()), Some(parse("23m").unwrap()));
        assert_eq!(remove_all(&tiles, &parse("111m").unwrap()), None);
        assert!(contains_all(&tiles, &parse("13m").unwrap()));
        assert!(!contains_all(&tiles, &parse("33m").unwrap()));
    }

    #[test]
    fn meld_shapes() {
        assert!(is_sequence(&parse("312s").unwrap()));
        assert!(!is_sequence(&parse("124s").unwrap()));
        assert!(!is_sequence(&parse("123w").unwrap()));
        assert!(!is_sequence(&[t("1m"), t("2s"), t("3m")]));
        assert!(is_triplet(&parse("777p").unwrap()));
        assert!(is_quad(&parse("2222d").unwrap()));
        assert!(is_pair(&parse("55m").unwrap()));
        assert!(can_form(&parse("999s").unwrap(), MeldKind::Pong));
        assert!(can_form(&parse("9999s").unwrap(), MeldKind::Kong(Kong::Concealed)));
        assert!(!can_form(&parse("999s").unwrap(), MeldKind::Chi));
    }

    #[test]
    fn grouping_and_uniques() {
        let tiles = parse("12m 3p 1m 2w").unwrap();
        let groups = group_by_suit(&tiles);
        assert_eq!(groups[&Suit::Wan].len(), 3);
        assert_eq!(groups[&Suit::Tong].len(), 1);
        assert_eq!(groups[&Suit::Wind].len(), 1);
        assert_eq!(unique(&tiles), vec![t("1m"), t("2m"), t("3p"), t("2w")]);
    }

    #[test]
    fn suit_spread() {
        assert!(is_one_suit(&parse("123789m 55m").unwrap()));
        assert!(!is_one_suit(&parse("123m 5p").unwrap()));
        assert!(!is_one_suit(&parse("11w").unwrap()));
        assert!(!is_one_suit(&[]));
        assert_eq!(numbered_suits(&parse("1m 2p 3p 1w").unwrap()), 2);
    }

    #[test]
    fn runs_through_a_tile() {
        let hand = parse("1245m").unwrap();
        let runs = runs_with(&hand, t("3m"));
        assert_eq!(runs.len(), 3);
        assert!(runs_with(&hand, t("9m")).is_empty());
        assert!(runs_with(&parse("11w").unwrap(), t("1w")).is_empty());
    }
}
