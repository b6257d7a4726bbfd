use crate::engine::DeckGenerator;
use crate::tiles::Suit;
use crate::tiles::Tile;

/// Wan, Tiao and Tong, one through nine, four of each: 108 tiles.
#[derive(Debug, Default, Clone, Copy)]
pub struct Deck;

impl DeckGenerator for Deck {
    fn generate(&self) -> Vec<Tile> {
        Tile::kinds(&Suit::NUMBERED)
            .into_iter()
            .flat_map(|tile| [tile; 4])
            .collect()
    }
    fn total(&self) -> usize {
        3 * 9 * 4
    }
}
