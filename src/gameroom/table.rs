use super::error::TableError;
use super::snapshot::Snapshot;
use crate::Millis;
use crate::PlayerId;
use crate::RoomId;
use crate::Variant;
use crate::engine::Action;
use crate::engine::ActionKind;
use crate::engine::Engine;
use crate::engine::GameConfig;
use crate::engine::Settlement;
use std::sync::RwLock;
use std::sync::TryLockError;
use std::time::Duration;
use tokio::time::Instant;

/// What an eviction pass found at one table.
#[derive(Debug, Clone, PartialEq)]
pub enum Reap {
    /// A writer holds the lock. Treated as activity.
    Busy,
    /// Touched within the idle window.
    Active,
    /// Idle long enough to drop. Carries a snapshot if anything changed
    /// since the last one.
    Idle(Option<Snapshot>),
}

struct Seat {
    engine: Engine,
    last_active: Instant,
    dirty: bool,
}

/// One room's game behind a reader-writer lock.
///
/// Actions, timeouts and eviction take the write lock, so a room processes
/// one of them at a time. Queries share the read lock.
pub struct Table {
    room: RoomId,
    variant: Variant,
    seat: RwLock<Seat>,
}

impl Table {
    pub fn new(room: RoomId, variant: Variant) -> Self {
        Self::with_timeout(room, variant, crate::TASK_TIMEOUT)
    }
    pub fn with_timeout(room: RoomId, variant: Variant, timeout: Duration) -> Self {
        Self {
            room,
            variant,
            seat: RwLock::new(Seat {
                engine: variant.engine().with_timeout(timeout),
                last_active: Instant::now(),
                dirty: false,
            }),
        }
    }
    pub fn room(&self) -> &RoomId {
        &self.room
    }
    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn initialize(&self, players: Vec<PlayerId>, config: GameConfig) -> Result<(), TableError> {
        self.write(|engine| engine.initialize(players, config))?
            .map_err(TableError::from)
            .inspect(|_| log::info!("room {} started a {} game", self.room, self.variant))
    }

    pub fn handle(&self, action: Action) -> Result<(), TableError> {
        log::debug!("room {} <- {}", self.room, action);
        self.write(|engine| engine.handle(action))?
            .map_err(TableError::from)
    }

    /// Apply reaction timeouts. Only a closed window counts as activity.
    pub fn expire(&self, now: Millis) -> Result<bool, TableError> {
        let mut seat = self.seat.write().map_err(|_| TableError::Poisoned)?;
        let expired = seat.engine.expire(now);
        if expired {
            seat.dirty = true;
            seat.last_active = Instant::now();
        }
        Ok(expired)
    }

    pub fn snapshot(&self) -> Result<Option<Snapshot>, TableError> {
        self.read(|engine| engine.snapshot())
            .map(|state| state.map(|s| Snapshot::new(self.room.clone(), self.variant, s)))
    }
    pub fn is_over(&self) -> Result<bool, TableError> {
        self.read(Engine::is_over)
    }
    pub fn settlement(&self) -> Result<Option<Settlement>, TableError> {
        self.read(|engine| engine.settlement().cloned())
    }
    pub fn available(&self, player: &PlayerId) -> Result<Vec<ActionKind>, TableError> {
        self.read(|engine| engine.available(player))
    }
    pub fn last_active(&self) -> Result<Instant, TableError> {
        self.seat
            .read()
            .map(|seat| seat.last_active)
            .map_err(|_| TableError::Poisoned)
    }

    /// Decide whether this table can be dropped, without waiting on a busy lock.
    /// An idle, dirty table hands back its final snapshot and is marked clean.
    pub fn reap(&self, idle_after: Duration, now: Instant) -> Reap {
        let mut seat = match self.seat.try_write() {
            Ok(seat) => seat,
            Err(TryLockError::WouldBlock) => return Reap::Busy,
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
        };
        if now.saturating_duration_since(seat.last_active) < idle_after {
            return Reap::Active;
        }
        Reap::Idle(self.flush(&mut seat))
    }

    /// Snapshot the table if it changed since the last snapshot.
    pub fn checkpoint(&self) -> Result<Option<Snapshot>, TableError> {
        let mut seat = self.seat.write().map_err(|_| TableError::Poisoned)?;
        Ok(self.flush(&mut seat))
    }

    fn flush(&self, seat: &mut Seat) -> Option<Snapshot> {
        if !seat.dirty {
            return None;
        }
        seat.dirty = false;
        seat.engine
            .snapshot()
            .map(|state| Snapshot::new(self.room.clone(), self.variant, state))
    }

    /// Run a mutation under the write lock. Every write is activity,
    /// accepted or not; only accepted ones dirty the table.
    fn write<T, E>(&self, f: impl FnOnce(&mut Engine) -> Result<T, E>) -> Result<Result<T, E>, TableError> {
        let mut seat = self.seat.write().map_err(|_| TableError::Poisoned)?;
        let result = f(&mut seat.engine);
        seat.last_active = Instant::now();
        if result.is_ok() {
            seat.dirty = true;
        }
        Ok(result)
    }
    /// Look at the engine under the read lock.
    pub fn peek<T>(&self, f: impl FnOnce(&Engine) -> T) -> Result<T, TableError> {
        self.read(f)
    }
    #[cfg(test)]
    pub(crate) fn rig<T>(&self, f: impl FnOnce(&mut Engine) -> T) -> T {
        f(&mut self.seat.write().unwrap().engine)
    }
    fn read<T>(&self, f: impl FnOnce(&Engine) -> T) -> Result<T, TableError> {
        self.seat
            .read()
            .map(|seat| f(&seat.engine))
            .map_err(|_| TableError::Poisoned)
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("room", &self.room)
            .field("variant", &self.variant)
            .finish()
    }
}
