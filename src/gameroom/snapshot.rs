use crate::Millis;
use crate::PlayerId;
use crate::RoomId;
use crate::Variant;
use crate::engine::GameState;
use serde::Deserialize;
use serde::Serialize;

/// A serializable copy of one room's game, taken under the table lock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    room: RoomId,
    variant: Variant,
    taken: Millis,
    state: GameState,
}

impl Snapshot {
    pub fn new(room: RoomId, variant: Variant, state: GameState) -> Self {
        Self {
            room,
            variant,
            taken: crate::now(),
            state,
        }
    }
    pub fn room(&self) -> &RoomId {
        &self.room
    }
    pub fn variant(&self) -> Variant {
        self.variant
    }
    /// Wall-clock millis when the copy was made.
    pub fn taken(&self) -> Millis {
        self.taken
    }
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The view `viewer` is allowed to see: other players' concealed hands
    /// and the wall are emptied. Not for persistence.
    pub fn redacted(&self, viewer: &PlayerId) -> Self {
        let mut copy = self.clone();
        copy.state.deck.clear();
        copy.state
            .players
            .iter_mut()
            .filter(|p| p.id() != viewer)
            .for_each(|p| p.hand.clear());
        copy
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
