mod error;
mod robot;
mod snapshot;
mod table;

pub use error::*;
pub use robot::*;
pub use snapshot::*;
pub use table::*;
