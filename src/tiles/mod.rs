pub mod counts;
pub use counts::*;

pub mod decompose;
pub use decompose::*;

pub mod meld;
pub use meld::*;

pub mod ops;
pub use ops::*;

pub mod suit;
pub use suit::*;

pub mod tile;
pub use tile::*;
