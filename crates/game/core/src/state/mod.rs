//! Authoritative live-game record.
//!
//! This module owns the data structures that describe the scoreboard, the
//! lineups and the undo history. Runtime layers clone, persist and replicate
//! this state but mutate it exclusively through the engine.
pub mod types;

pub use types::{
    BallCount, Base, CountField, Half, Inning, LastResult, PitcherStats, Runners, StatField,
    Team, TeamPair, TeamStats, UndoEntry,
};

use crate::config::GameConfig;
use crate::result::ResultCode;

/// Canonical snapshot of one live game.
///
/// Serialized with camelCase keys; this is the document exchanged with the
/// remote store, the local cache and the replication channel.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameState {
    pub teams: TeamPair<String>,
    pub inning: Inning,
    pub count: BallCount,
    pub runners: Runners,

    /// Runs per inning, index = inning number - 1.
    ///
    /// Documents written by older builds may carry a shorter sequence; the
    /// engine never indexes past the end.
    pub scores: TeamPair<Vec<u32>>,
    pub stats: TeamPair<TeamStats>,

    pub lineup: TeamPair<Vec<String>>,
    /// Defensive position labels, parallel to `lineup`.
    pub positions: TeamPair<Vec<String>>,
    /// Designated pitcher outside the batting order (empty when unset).
    pub pitcher: TeamPair<String>,
    pub current_batter: TeamPair<usize>,

    /// One result sequence per lineup slot.
    pub at_bat_results: TeamPair<Vec<Vec<ResultCode>>>,
    pub pitcher_stats: TeamPair<PitcherStats>,

    /// Undo stack; one entry per recorded at-bat not yet undone.
    pub result_history: Vec<UndoEntry>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub last_result: Option<LastResult>,
}

impl GameState {
    /// Creates the default template: blank teams, top of the first, all zeros.
    pub fn new() -> Self {
        Self {
            teams: TeamPair::default(),
            inning: Inning::default(),
            count: BallCount::default(),
            runners: Runners::EMPTY,
            scores: TeamPair::splat(vec![0; GameConfig::MAX_INNINGS]),
            stats: TeamPair::default(),
            lineup: TeamPair::splat(vec![String::new(); GameConfig::LINEUP_SIZE]),
            positions: TeamPair::splat(vec![String::new(); GameConfig::LINEUP_SIZE]),
            pitcher: TeamPair::default(),
            current_batter: TeamPair::default(),
            at_bat_results: TeamPair::splat(vec![Vec::new(); GameConfig::LINEUP_SIZE]),
            pitcher_stats: TeamPair::default(),
            result_history: Vec::new(),
            last_result: None,
        }
    }

    /// Team currently at bat (top: away, bottom: home).
    pub fn batting_team(&self) -> Team {
        self.inning.half.batting_team()
    }

    /// Team currently in the field.
    pub fn pitching_team(&self) -> Team {
        self.inning.half.pitching_team()
    }

    /// Sum of a team's line score.
    pub fn total_runs(&self, team: Team) -> u32 {
        self.scores[team].iter().sum()
    }

    /// Name in the batting order slot that is due up, if one was entered.
    pub fn current_batter_name(&self) -> Option<&str> {
        let team = self.batting_team();
        self.lineup[team]
            .get(self.current_batter[team])
            .map(String::as_str)
            .filter(|name| !name.trim().is_empty())
    }

    /// Pitcher working for the fielding team.
    ///
    /// A designated pitcher wins; otherwise the lineup entry whose position
    /// carries the configured pitcher label.
    pub fn current_pitcher_name(&self, config: &GameConfig) -> Option<&str> {
        let team = self.pitching_team();

        let designated = self.pitcher[team].trim();
        if !designated.is_empty() {
            return Some(designated);
        }

        self.positions[team]
            .iter()
            .position(|label| *label == config.pitcher_position_label)
            .and_then(|slot| self.lineup[team].get(slot))
            .map(String::as_str)
            .filter(|name| !name.trim().is_empty())
    }

    /// Results recorded so far for the batter who is due up.
    pub fn current_batter_results(&self) -> &[ResultCode] {
        let team = self.batting_team();
        self.at_bat_results[team]
            .get(self.current_batter[team])
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_shape() {
        let state = GameState::new();

        for team in Team::BOTH {
            assert_eq!(state.scores[team].len(), GameConfig::MAX_INNINGS);
            assert_eq!(state.lineup[team].len(), GameConfig::LINEUP_SIZE);
            assert_eq!(state.positions[team].len(), GameConfig::LINEUP_SIZE);
            assert_eq!(state.at_bat_results[team].len(), GameConfig::LINEUP_SIZE);
        }
        assert_eq!(state.inning, Inning::new(1, Half::Top));
        assert_eq!(state.batting_team(), Team::Away);
        assert_eq!(state.pitching_team(), Team::Home);
    }

    #[test]
    fn test_current_pitcher_resolution() {
        let config = GameConfig::default();
        let mut state = GameState::new();
        assert_eq!(state.current_pitcher_name(&config), None);

        state.lineup.home[8] = "Aoyagi".to_string();
        state.positions.home[8] = GameConfig::DEFAULT_PITCHER_LABEL.to_string();
        assert_eq!(state.current_pitcher_name(&config), Some("Aoyagi"));

        state.pitcher.home = "Murakami".to_string();
        assert_eq!(state.current_pitcher_name(&config), Some("Murakami"));
    }

    #[test]
    fn test_current_batter_name_skips_blank_slots() {
        let mut state = GameState::new();
        assert_eq!(state.current_batter_name(), None);

        state.lineup.away[0] = "Chikamoto".to_string();
        assert_eq!(state.current_batter_name(), Some("Chikamoto"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_document_keys() {
        let value = serde_json::to_value(GameState::new()).unwrap();

        assert_eq!(value["inning"]["half"], "top");
        assert_eq!(value["currentBatter"]["away"], 0);
        assert_eq!(value["pitcherStats"]["home"]["pitchCount"], 0);
        assert!(value["atBatResults"]["home"].is_array());
        assert!(value["resultHistory"].as_array().unwrap().is_empty());
    }
}
