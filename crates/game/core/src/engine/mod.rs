//! Scoreboard transition rules.
//!
//! The [`GameEngine`] is the only writer of [`GameState`]. Every operator
//! action (recording a result, calling a pitch, moving an out, undoing) is a
//! method here; all of them run to completion synchronously and touch nothing
//! but the borrowed state.

mod at_bat;
mod board;
mod errors;
mod inning;
mod lineup;
mod pitching;

pub use errors::EngineError;
pub use pitching::innings_pitched;

use crate::config::GameConfig;
use crate::state::GameState;

/// Game engine borrowing the live state for the duration of one operation.
///
/// Operations are grouped by concern:
/// - at-bat recording and undo (`at_bat`)
/// - outs and half-inning changes (`inning`)
/// - derived pitcher line (`pitching`)
/// - count, runners, line score (`board`)
/// - lineup editing (`lineup`)
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine over the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Read-only view of the state being mutated.
    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Moves the batting team's order to the next slot, wrapping after the ninth.
    pub fn next_batter(&mut self) {
        let team = self.state.batting_team();
        let current = self.state.current_batter[team];
        self.state.current_batter[team] = (current + 1) % GameConfig::LINEUP_SIZE;
    }

    /// Moves the batting team's order back one slot, wrapping before the first.
    pub fn previous_batter(&mut self) {
        let team = self.state.batting_team();
        let current = self.state.current_batter[team] % GameConfig::LINEUP_SIZE;
        self.state.current_batter[team] =
            (current + GameConfig::LINEUP_SIZE - 1) % GameConfig::LINEUP_SIZE;
    }

    /// Recomputes everything derived from the line score: each team's `R`
    /// column and the runs charged to each pitcher line.
    pub(crate) fn refresh_runs(&mut self) {
        for team in crate::state::Team::BOTH {
            self.state.stats[team].r = self.state.total_runs(team);
            self.update_pitcher_stats(team);
        }
    }
}
