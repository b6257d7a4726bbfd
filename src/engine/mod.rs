pub mod action;
pub use action::*;

pub mod arbiter;

pub mod config;
pub use config::*;

#[allow(clippy::module_inception)]
pub mod engine;
pub use engine::*;

pub mod error;
pub use error::*;

pub mod player;
pub use player::*;

pub mod rules;

pub mod settlement;
pub use settlement::*;

pub mod state;
pub use state::*;

pub mod strategy;
pub use strategy::*;

pub mod task;
pub use task::*;
