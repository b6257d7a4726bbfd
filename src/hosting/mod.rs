mod archive;
mod config;
mod error;
mod hall;

pub use archive::*;
pub use config::*;
pub use error::*;
pub use hall::*;
