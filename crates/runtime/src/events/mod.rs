//! Replication between the writer session and its displays.
//!
//! The writer publishes full snapshots and result announcements on a named
//! channel; subscribers apply them as they arrive. Delivery is best-effort.

mod bus;
mod types;

pub use bus::{ReplicationChannel, ReplicationHub, Subscription, SubscriptionGuard};
pub use types::ReplicationMessage;

pub(crate) use types::now_millis;
