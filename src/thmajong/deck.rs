use crate::engine::DeckGenerator;
use crate::tiles::Suit;
use crate::tiles::Tile;

/// The full set: four of every numbered, wind and dragon tile,
/// plus one of each of the eight flowers. 144 tiles.
#[derive(Debug, Default, Clone, Copy)]
pub struct Deck;

impl DeckGenerator for Deck {
    fn generate(&self) -> Vec<Tile> {
        Tile::kinds(&[Suit::Wan, Suit::Tiao, Suit::Tong, Suit::Wind, Suit::Dragon])
            .into_iter()
            .flat_map(|tile| [tile; 4])
            .chain(Tile::kinds(&[Suit::Flower]))
            .collect()
    }
    fn total(&self) -> usize {
        3 * 9 * 4 + 4 * 4 + 3 * 4 + 8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::Counts;

    #[test]
    fn one_hundred_forty_four_tiles() {
        let tiles = Deck.generate();
        assert_eq!(tiles.len(), 144);
        assert_eq!(tiles.len(), Deck.total());
        let counts = Counts::from(tiles.as_slice());
        assert_eq!(tiles.iter().filter(|t| t.is_flower()).count(), 8);
        assert!(counts.iter().all(|(t, n)| n == if t.is_flower() { 1 } else { 4 }));
        assert_eq!(counts.distinct(), 27 + 4 + 3 + 8);
    }
}
