use crate::gameroom::Snapshot;
use tokio::sync::Mutex;

/// Where evicted and shut-down games go.
#[async_trait::async_trait]
pub trait Archive: Send + Sync {
    async fn store(&self, snapshot: Snapshot) -> anyhow::Result<()>;
}

/// Logs every snapshot and keeps it in memory.
#[derive(Debug, Default)]
pub struct Ledger {
    kept: Mutex<Vec<Snapshot>>,
}

impl Ledger {
    pub async fn snapshots(&self) -> Vec<Snapshot> {
        self.kept.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl Archive for Ledger {
    async fn store(&self, snapshot: Snapshot) -> anyhow::Result<()> {
        log::info!(
            "archived room {} ({}, {} bytes)",
            snapshot.room(),
            snapshot.variant(),
            snapshot.to_json()?.len()
        );
        self.kept.lock().await.push(snapshot);
        Ok(())
    }
}
