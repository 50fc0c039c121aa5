/// Rule constants for a single live game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Label in `positions` that marks the fielding pitcher inside the lineup.
    pub pitcher_position_label: String,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Innings tracked on the line score. Extra innings stop at this cap.
    pub const MAX_INNINGS: usize = 12;
    /// Batting order length; every per-slot sequence has this many entries.
    pub const LINEUP_SIZE: usize = 9;
    pub const BALLS_FOR_WALK: u8 = 4;
    pub const STRIKES_FOR_OUT: u8 = 3;
    pub const OUTS_PER_HALF: u8 = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PITCHER_LABEL: &'static str = "投";

    pub fn new() -> Self {
        Self {
            pitcher_position_label: Self::DEFAULT_PITCHER_LABEL.to_string(),
        }
    }

    pub fn with_pitcher_label(label: impl Into<String>) -> Self {
        Self {
            pitcher_position_label: label.into(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
