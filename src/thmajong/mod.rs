//! Taihu rules: the full 144-tile set with honors and flowers. Chi is
//! allowed from the upstream seat, and a hand's worth is counted in flowers.
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

/// A fresh, uninitialized Taihu engine.
pub fn engine() -> Engine {
    Engine::new(
        Box::new(Deck),
        Box::new(Actions),
        Box::new(Judge),
        Box::new(Winning),
        Box::new(Scorer),
    )
}
