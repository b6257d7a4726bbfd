use thiserror::Error;

/// Which rule an action broke. Carried by [`GameError::InvalidAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("not your turn")]
    NotYourTurn,
    #[error("tile not in hand")]
    TileNotInHand,
    #[error("not enough matching tiles")]
    NotEnoughTiles,
    #[error("nothing to claim")]
    NothingToClaim,
    #[error("chi is only allowed from the upstream seat")]
    NotUpstream,
    #[error("tiles do not form a run with the discard")]
    NotARun,
    #[error("waiting for reactions to the last discard")]
    AwaitingReactions,
    #[error("no pending reaction for this player")]
    NoTask,
    #[error("action not offered in this reaction window")]
    NotOffered,
    #[error("already replied to this reaction window")]
    AlreadyReplied,
    #[error("the wall is empty")]
    WallEmpty,
    #[error("hand is not a winning hand")]
    CannotWin,
    #[error("must draw first")]
    MustDraw,
    #[error("must discard first")]
    MustDiscard,
    #[error("ready may only be declared in the first round")]
    ReadyWindowClosed,
    #[error("already declared ready")]
    AlreadyReady,
    #[error("hand is not one tile from winning")]
    NotReady,
    #[error("not a flower")]
    NotAFlower,
    #[error("unknown player")]
    UnknownPlayer,
    #[error("action requires a tile")]
    MissingTile,
    #[error("action not supported by this variant")]
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Recoverable. The state is untouched.
    #[error("invalid action: {0}")]
    InvalidAction(#[from] Violation),
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
    #[error("expected {expected} players, got {actual}")]
    PlayerCount { expected: usize, actual: usize },
}
