//! Messages carried by the replication channel.

use game_core::{GameState, ResultCode};
use serde::{Deserialize, Serialize};

/// Envelope exchanged between the writer and its displays.
///
/// Serialized with a `type` tag, e.g.
/// `{"type":"SHOW_RESULT","result":"single","timestamp":1700000000000}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReplicationMessage {
    /// Full snapshot; receivers replace their state wholesale.
    StateUpdate {
        state: Box<GameState>,
        timestamp: i64,
    },
    /// A result to announce on display surfaces.
    ShowResult { result: ResultCode, timestamp: i64 },
}

impl ReplicationMessage {
    pub fn state_update(state: &GameState) -> Self {
        Self::StateUpdate {
            state: Box::new(state.clone()),
            timestamp: now_millis(),
        }
    }

    pub fn show_result(result: ResultCode) -> Self {
        Self::ShowResult {
            result,
            timestamp: now_millis(),
        }
    }

    /// Sender clock at publish time, Unix epoch milliseconds.
    pub fn timestamp(&self) -> i64 {
        match self {
            Self::StateUpdate { timestamp, .. } | Self::ShowResult { timestamp, .. } => *timestamp,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::StateUpdate { .. } => "STATE_UPDATE",
            Self::ShowResult { .. } => "SHOW_RESULT",
        }
    }
}

pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
