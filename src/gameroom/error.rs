use crate::engine::GameError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A writer panicked while holding the table lock.
    #[error("table lock poisoned")]
    Poisoned,
    #[error(transparent)]
    Game(#[from] GameError),
}
