//! Pitch-by-pitch count, base runners and line score corrections.

use crate::config::GameConfig;
use crate::state::{Base, CountField, StatField, Team};

use super::{EngineError, GameEngine};

impl GameEngine<'_> {
    /// Clears balls and strikes; outs are kept.
    pub fn reset_count(&mut self) {
        self.state.count.ball = 0;
        self.state.count.strike = 0;
    }

    /// Zeroes a single field of the count.
    pub fn clear_count_field(&mut self, field: CountField) {
        let count = &mut self.state.count;
        match field {
            CountField::Ball => count.ball = 0,
            CountField::Strike => count.strike = 0,
            CountField::Out => count.out = 0,
        }
    }

    /// Calls a ball. Ball four puts the batter on first, counts a walk for
    /// the pitcher and brings up the next batter.
    ///
    /// Returns `true` when the pitch issued a walk.
    pub fn add_ball(&mut self) -> bool {
        self.state.count.ball += 1;
        self.record_pitch();

        if self.state.count.ball >= GameConfig::BALLS_FOR_WALK {
            self.state.runners.first = true;
            self.record_walk();
            self.reset_count();
            self.next_batter();
            return true;
        }
        false
    }

    /// Calls a strike. Strike three is a strikeout plus a visible out; the
    /// batting order only advances if that out did not end the half-inning,
    /// so the next half starts with whoever was due up.
    ///
    /// Returns `true` when the pitch ended the half-inning.
    pub fn add_strike(&mut self) -> bool {
        self.state.count.strike += 1;
        self.record_pitch();

        if self.state.count.strike < GameConfig::STRIKES_FOR_OUT {
            return false;
        }

        self.record_strikeout();
        let side_retired = self.add_out();
        if !side_retired {
            self.next_batter();
        }
        side_retired
    }

    pub fn toggle_runner(&mut self, base: Base) {
        let occupied = self.state.runners.base_mut(base);
        *occupied = !*occupied;
    }

    /// Adds `delta` runs (floored at zero) to the batting team's current
    /// inning and refreshes the `R` column and the runs charged to the pitcher.
    pub fn adjust_score(&mut self, delta: i32) -> Result<(), EngineError> {
        let team = self.state.batting_team();
        let inning = self.state.inning;
        let cell = inning
            .score_index()
            .and_then(|index| self.state.scores[team].get_mut(index))
            .ok_or(EngineError::InningOffBoard {
                team,
                inning: inning.number,
            })?;

        *cell = cell.saturating_add_signed(delta);
        self.refresh_runs();
        Ok(())
    }

    /// Adjusts a hand-kept accumulator (`H` or `E`), floored at zero.
    pub fn adjust_stat(&mut self, team: Team, field: StatField, delta: i32) {
        let stats = &mut self.state.stats[team];
        let value = match field {
            StatField::Hits => &mut stats.h,
            StatField::Errors => &mut stats.e,
        };
        *value = value.saturating_add_signed(delta);
    }
}
