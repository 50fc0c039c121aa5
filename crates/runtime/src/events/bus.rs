//! Named in-process replication bus.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tokio::task::JoinHandle;

use super::types::ReplicationMessage;

/// Hands out replication channels by name.
///
/// Every session holding a channel with the same name on the same hub sees the
/// same stream of messages. There is no replay: a subscriber only receives
/// what is published after it attached.
#[derive(Clone)]
pub struct ReplicationHub {
    channels: Arc<Mutex<HashMap<String, broadcast::Sender<ReplicationMessage>>>>,
    capacity: usize,
}

impl ReplicationHub {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Creates a hub whose channels buffer `capacity` messages per subscriber.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            channels: Arc::new(Mutex::new(HashMap::new())),
            capacity: capacity.max(1),
        }
    }

    /// Opens (or joins) the channel called `name`.
    pub fn channel(&self, name: &str) -> ReplicationChannel {
        let mut channels = self
            .channels
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let sender = channels
            .entry(name.to_string())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .clone();

        ReplicationChannel {
            name: Arc::from(name),
            sender,
        }
    }
}

impl Default for ReplicationHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle on one named channel; cheap to clone.
#[derive(Clone)]
pub struct ReplicationChannel {
    name: Arc<str>,
    sender: broadcast::Sender<ReplicationMessage>,
}

impl ReplicationChannel {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Best-effort publish; having no subscribers is not an error.
    pub fn publish(&self, message: ReplicationMessage) {
        let kind = message.kind();
        match self.sender.send(message) {
            Ok(receivers) => {
                tracing::trace!("Published {} on '{}' to {} receivers", kind, self.name, receivers)
            }
            Err(_) => tracing::trace!("No subscribers for {} on '{}'", kind, self.name),
        }
    }

    pub fn subscribe(&self) -> Subscription {
        Subscription {
            name: Arc::clone(&self.name),
            receiver: self.sender.subscribe(),
        }
    }

    /// Runs `handler` on a background task for every message, in delivery order.
    ///
    /// Must be called inside a tokio runtime. Dropping the returned guard stops
    /// the task.
    pub fn subscribe_with<F>(&self, mut handler: F) -> SubscriptionGuard
    where
        F: FnMut(ReplicationMessage) + Send + 'static,
    {
        let mut subscription = self.subscribe();
        let task = tokio::spawn(async move {
            while let Some(message) = subscription.recv().await {
                handler(message);
            }
        });
        SubscriptionGuard { task }
    }
}

/// Receiving end of a [`ReplicationChannel`].
pub struct Subscription {
    name: Arc<str>,
    receiver: broadcast::Receiver<ReplicationMessage>,
}

impl Subscription {
    /// Waits for the next message. Messages lost to lag are skipped, never
    /// redelivered. Returns `None` once every publisher is gone.
    pub async fn recv(&mut self) -> Option<ReplicationMessage> {
        loop {
            match self.receiver.recv().await {
                Ok(message) => return Some(message),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Subscriber on '{}' dropped {} messages", self.name, skipped);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Non-blocking variant of [`Subscription::recv`].
    pub fn try_recv(&mut self) -> Option<ReplicationMessage> {
        loop {
            match self.receiver.try_recv() {
                Ok(message) => return Some(message),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!("Subscriber on '{}' dropped {} messages", self.name, skipped);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }
}

/// Keeps a [`ReplicationChannel::subscribe_with`] task alive.
pub struct SubscriptionGuard {
    task: JoinHandle<()>,
}

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        self.task.abort();
    }
}
