use super::tile::Tile;

/// Tile multiset indexed by [`Tile::index`].
///
/// The working representation of the hand-decomposition search:
/// removing and restoring a meld is a handful of array writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts([u8; Tile::KINDS]);

impl Default for Counts {
    fn default() -> Self {
        Self([0; Tile::KINDS])
    }
}

impl From<&[Tile]> for Counts {
    fn from(tiles: &[Tile]) -> Self {
        tiles.iter().fold(Self::default(), |mut counts, tile| {
            counts.add(*tile);
            counts
        })
    }
}

impl Counts {
    pub fn get(&self, tile: Tile) -> u8 {
        self.0[tile.index()]
    }
    pub fn add(&mut self, tile: Tile) {
        self.0[tile.index()] += 1;
    }
    /// Take one copy of `tile`. Returns false, untouched, when none is left.
    pub fn remove(&mut self, tile: Tile) -> bool {
        match self.0[tile.index()] {
            0 => false,
            _ => {
                self.0[tile.index()] -= 1;
                true
            }
        }
    }
    pub fn len(&self) -> usize {
        self.0.iter().map(|n| *n as usize).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|n| *n == 0)
    }
    /// Lowest tile still present.
    pub fn first(&self) -> Option<Tile> {
        self.0.iter().position(|n| *n > 0).map(Tile::from)
    }
    /// Distinct tiles present, with their multiplicity, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Tile, u8)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, n)| **n > 0)
            .map(|(i, n)| (Tile::from(i), *n))
    }
    pub fn distinct(&self) -> usize {
        self.0.iter().filter(|n| **n > 0).count()
    }
}
