use crate::result::ResultCode;

use super::{BallCount, PitcherStats, Runners, Team, TeamPair};

/// Snapshot needed to reverse exactly one recorded at-bat.
///
/// Field names follow the persisted document (`scoreBefore`, not
/// `scoresBefore`) so older histories keep loading.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UndoEntry {
    pub team: Team,
    pub batter_index: usize,
    pub result: ResultCode,
    pub runners_before: Runners,
    pub count_before: BallCount,
    #[cfg_attr(feature = "serde", serde(rename = "scoreBefore"))]
    pub scores_before: TeamPair<Vec<u32>>,
    pub outs_before: u8,
    pub pitcher_stats_before: TeamPair<PitcherStats>,
}

/// Most recent announced result, embedded in the state so surfaces that only
/// poll the durable store can still notice a new result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LastResult {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub result: ResultCode,
    /// Unix epoch milliseconds.
    pub timestamp: i64,
}
