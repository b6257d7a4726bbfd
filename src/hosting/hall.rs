use super::archive::Archive;
use super::config::HallConfig;
use super::error::HallError;
use crate::Millis;
use crate::PlayerId;
use crate::RoomId;
use crate::Variant;
use crate::engine::Action;
use crate::engine::GameConfig;
use crate::gameroom::Reap;
use crate::gameroom::Snapshot;
use crate::gameroom::Table;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Every open room, one [`Table`] each.
///
/// Rooms never share a lock: the map only hands out `Arc<Table>`s, and each
/// table serializes its own writers.
pub struct Hall {
    tables: DashMap<RoomId, Arc<Table>>,
    config: HallConfig,
    archive: Arc<dyn Archive>,
}

impl Hall {
    pub fn new(config: HallConfig, archive: Arc<dyn Archive>) -> Self {
        Self {
            tables: DashMap::new(),
            config,
            archive,
        }
    }
    pub fn config(&self) -> &HallConfig {
        &self.config
    }

    /// The room's table, opened with `variant` if the room is new.
    /// An existing room keeps the variant it was opened with.
    pub fn get_or_create(&self, room: &RoomId, variant: Variant) -> Arc<Table> {
        self.tables
            .entry(room.clone())
            .or_insert_with(|| {
                log::info!("opened room {} ({})", room, variant);
                Arc::new(Table::with_timeout(room.clone(), variant, self.config.task_timeout))
            })
            .value()
            .clone()
    }
    /// Like [`Hall::get_or_create`], for a variant named by the session layer.
    pub fn open(&self, room: &RoomId, variant: &str) -> Result<Arc<Table>, HallError> {
        let variant = variant
            .parse::<Variant>()
            .map_err(|_| HallError::UnknownVariant(variant.to_string()))?;
        Ok(self.get_or_create(room, variant))
    }
    pub fn get(&self, room: &RoomId) -> Result<Arc<Table>, HallError> {
        self.tables
            .get(room)
            .map(|t| t.value().clone())
            .ok_or_else(|| HallError::NotFound(room.clone()))
    }
    pub fn remove(&self, room: &RoomId) -> Option<Arc<Table>> {
        self.tables
            .remove(room)
            .map(|(_, table)| table)
            .inspect(|_| log::info!("closed room {}", room))
    }
    pub fn count(&self) -> usize {
        self.tables.len()
    }

    /// Deal a game in an existing room.
    pub fn start(&self, room: &RoomId, players: Vec<PlayerId>) -> Result<(), HallError> {
        let config = GameConfig::default().with_players(players.len());
        self.start_with(room, players, config)
    }
    pub fn start_with(&self, room: &RoomId, players: Vec<PlayerId>, config: GameConfig) -> Result<(), HallError> {
        Ok(self.get(room)?.initialize(players, config)?)
    }
    pub fn act(&self, room: &RoomId, action: Action) -> Result<(), HallError> {
        Ok(self.get(room)?.handle(action)?)
    }

    /// Close every expired reaction window. Returns how many rooms moved on.
    pub fn tick(&self) -> usize {
        self.tick_at(crate::now())
    }
    pub fn tick_at(&self, now: Millis) -> usize {
        self.tables()
            .into_iter()
            .filter(|table| match table.expire(now) {
                Ok(expired) => expired,
                Err(e) => {
                    log::warn!("room {}: {}", table.room(), e);
                    false
                }
            })
            .count()
    }

    /// Drop tables idle for longer than `evict_after`, then the least
    /// recently active ones while over capacity. Busy tables are skipped.
    /// Dirty tables are archived. Returns how many were evicted.
    pub async fn evict(&self, now: Instant) -> usize {
        let mut evicted = Vec::new();
        for table in self.tables() {
            if let Some(reaped) = self.reap(&table, self.config.evict_after, now) {
                evicted.push(reaped);
            }
        }
        if let Some(capacity) = self.config.capacity {
            let mut oldest = self
                .tables()
                .into_iter()
                .filter_map(|t| t.last_active().ok().map(|at| (at, t)))
                .collect::<Vec<_>>();
            oldest.sort_by_key(|(at, _)| *at);
            let excess = oldest.len().saturating_sub(capacity);
            for (_, table) in oldest.into_iter().take(excess) {
                if let Some(reaped) = self.reap(&table, std::time::Duration::ZERO, now) {
                    evicted.push(reaped);
                }
            }
        }
        let count = evicted.len();
        for snapshot in evicted.into_iter().flatten() {
            self.store(snapshot).await;
        }
        if count > 0 {
            log::info!("evicted {} rooms, {} open", count, self.count());
        }
        count
    }

    /// Archive every dirty table and close every room.
    pub async fn shutdown(&self) {
        let tables = self.tables();
        self.tables.clear();
        for table in tables {
            match table.checkpoint() {
                Ok(Some(snapshot)) => self.store(snapshot).await,
                Ok(None) => {}
                Err(e) => log::warn!("room {}: {}", table.room(), e),
            }
        }
        log::info!("hall shut down");
    }

    /// Evict on a fixed interval until the handle is aborted.
    pub fn spawn_sweeper(self: &Arc<Self>) -> JoinHandle<()> {
        let hall = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(hall.config.sweep_interval);
            interval.tick().await;
            loop {
                interval.tick().await;
                hall.evict(Instant::now()).await;
            }
        })
    }
    /// Check reaction deadlines on a fixed interval until the handle is aborted.
    pub fn spawn_ticker(self: &Arc<Self>) -> JoinHandle<()> {
        let hall = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(hall.config.tick_interval);
            loop {
                interval.tick().await;
                hall.tick();
            }
        })
    }

    /// Copies of every table handle, so no map lock outlives this call.
    fn tables(&self) -> Vec<Arc<Table>> {
        self.tables.iter().map(|entry| entry.value().clone()).collect()
    }

    /// Remove `table` if it is idle and still the room's table.
    /// Some(snapshot) when reaped; the snapshot is None if the table was clean.
    /// The table is snapshotted before the map entry is touched.
    fn reap(&self, table: &Arc<Table>, idle_after: std::time::Duration, now: Instant) -> Option<Option<Snapshot>> {
        let Reap::Idle(snapshot) = table.reap(idle_after, now) else {
            return None;
        };
        if self
            .tables
            .remove_if(table.room(), |_, current| Arc::ptr_eq(current, table))
            .is_none()
        {
            log::debug!("room {} left the hall while being reaped", table.room());
        }
        Some(snapshot)
    }

    async fn store(&self, snapshot: Snapshot) {
        let room = snapshot.room().clone();
        if let Err(e) = self.archive.store(snapshot).await {
            log::error!("failed to archive room {}: {}", room, e);
        }
    }
}
