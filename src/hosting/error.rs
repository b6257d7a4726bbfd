use crate::RoomId;
use crate::engine::GameError;
use crate::gameroom::TableError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HallError {
    #[error("room {0} not found")]
    NotFound(RoomId),
    #[error("room lock poisoned")]
    Poisoned,
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("unknown variant '{0}'")]
    UnknownVariant(String),
}

impl From<TableError> for HallError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::Poisoned => HallError::Poisoned,
            TableError::Game(e) => HallError::Game(e),
        }
    }
}
