//! Background worker that serializes remote saves.

use serde_json::Value;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::gateway::PersistenceGateway;

/// Handle to the single task that writes snapshots to the remote store.
///
/// Snapshots are saved strictly in submission order, one at a time. When
/// several queue up behind a slow save only the newest of them is sent.
pub struct RemoteWriter {
    tx: mpsc::UnboundedSender<Value>,
    worker: JoinHandle<()>,
}

impl RemoteWriter {
    /// Spawns the worker on the current tokio runtime.
    pub fn spawn(gateway: PersistenceGateway) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(run(gateway, rx));
        Self { tx, worker }
    }

    /// Queues a snapshot. Never waits for the store.
    pub fn submit(&self, document: Value) {
        if self.tx.send(document).is_err() {
            tracing::warn!("Remote save worker has stopped, snapshot dropped");
        }
    }

    /// Stops accepting snapshots and waits until everything queued is saved.
    pub async fn close(self) {
        let Self { tx, worker } = self;
        drop(tx);
        if let Err(err) = worker.await {
            tracing::error!("Remote save worker failed: {}", err);
        }
    }
}

async fn run(gateway: PersistenceGateway, mut rx: mpsc::UnboundedReceiver<Value>) {
    tracing::debug!("Remote save worker started");

    while let Some(mut document) = rx.recv().await {
        let mut skipped = 0usize;
        while let Ok(newer) = rx.try_recv() {
            document = newer;
            skipped += 1;
        }
        if skipped > 0 {
            tracing::debug!(skipped, "Coalesced queued snapshots");
        }
        gateway.save(&document).await;
    }

    tracing::debug!("Remote save worker stopped");
}
