//! Derived pitcher line.

use crate::state::Team;

use super::GameEngine;

/// Innings pitched in scoreboard notation.
///
/// Completed innings plus a tenth per extra out, so 4 outs is `1.1` and not
/// `1.33`. Computed as a single division so the common values compare equal
/// to their literals.
pub fn innings_pitched(outs: u32) -> f64 {
    let full = outs / 3;
    let partial = outs % 3;
    f64::from(full * 10 + partial) / 10.0
}

impl GameEngine<'_> {
    /// Charges a strikeout to the pitching team's line.
    pub fn record_strikeout(&mut self) {
        let team = self.state.pitching_team();
        self.state.pitcher_stats[team].strikeouts += 1;
        self.update_pitcher_stats(team);
    }

    /// Charges an out to the pitching team's line.
    pub fn record_out(&mut self) {
        let team = self.state.pitching_team();
        self.state.pitcher_stats[team].outs += 1;
        self.update_pitcher_stats(team);
    }

    /// Counts one pitch for the pitching team.
    pub fn record_pitch(&mut self) {
        let team = self.state.pitching_team();
        self.state.pitcher_stats[team].pitch_count += 1;
    }

    /// Counts a walk for the pitching team.
    pub fn record_walk(&mut self) {
        let team = self.state.pitching_team();
        self.state.pitcher_stats[team].walks += 1;
    }

    /// Recomputes the derived fields of `team`'s pitcher line.
    ///
    /// Runs allowed are read off the opposing line score rather than tracked
    /// per pitcher.
    pub fn update_pitcher_stats(&mut self, team: Team) {
        let runs = self.state.total_runs(team.opponent());
        let line = &mut self.state.pitcher_stats[team];
        line.runs = runs;
        line.innings = innings_pitched(line.outs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GameState;

    #[test]
    fn test_innings_notation() {
        assert_eq!(innings_pitched(0), 0.0);
        assert_eq!(innings_pitched(1), 0.1);
        assert_eq!(innings_pitched(3), 1.0);
        assert_eq!(innings_pitched(4), 1.1);
        assert_eq!(innings_pitched(6), 2.0);
        assert_eq!(innings_pitched(26), 8.2);
    }

    #[test]
    fn test_update_reads_runs_from_opposing_line() {
        let mut state = GameState::new();
        state.scores.away[0] = 2;
        state.scores.away[3] = 1;
        state.scores.home[1] = 5;
        state.pitcher_stats.home.outs = 4;

        let mut engine = GameEngine::new(&mut state);
        engine.update_pitcher_stats(Team::Home);
        engine.update_pitcher_stats(Team::Away);

        assert_eq!(state.pitcher_stats.home.runs, 3);
        assert_eq!(state.pitcher_stats.home.innings, 1.1);
        assert_eq!(state.pitcher_stats.away.runs, 5);
        assert_eq!(state.pitcher_stats.away.innings, 0.0);
    }

    #[test]
    fn test_record_out_targets_fielding_team() {
        let mut state = GameState::new();
        let mut engine = GameEngine::new(&mut state);
        for _ in 0..3 {
            engine.record_out();
        }
        engine.record_strikeout();

        assert_eq!(state.pitcher_stats.home.outs, 3);
        assert_eq!(state.pitcher_stats.home.innings, 1.0);
        assert_eq!(state.pitcher_stats.home.strikeouts, 1);
        assert_eq!(state.pitcher_stats.away.outs, 0);
    }
}
