//! Recording plate-appearance results and undoing them.

use crate::config::GameConfig;
use crate::result::ResultCode;
use crate::state::UndoEntry;

use super::GameEngine;

impl GameEngine<'_> {
    /// Records how the current batter's turn ended.
    ///
    /// Pushes an undo snapshot, appends the code to the batter's results,
    /// bumps `H` for hits and charges strikeouts/outs to the pitcher's line,
    /// then clears balls and strikes and moves to the next batter.
    ///
    /// The visible out count is left alone: advancing `count.out` (and with it
    /// the half-inning) is a separate [`GameEngine::add_out`] call.
    pub fn record_at_bat(&mut self, result: ResultCode) {
        let team = self.state.batting_team();
        let batter_index = self.state.current_batter[team];

        self.state.result_history.push(UndoEntry {
            team,
            batter_index,
            result,
            runners_before: self.state.runners,
            count_before: self.state.count,
            scores_before: self.state.scores.clone(),
            outs_before: self.state.count.out,
            pitcher_stats_before: self.state.pitcher_stats.clone(),
        });

        if let Some(results) = self.state.at_bat_results[team].get_mut(batter_index) {
            results.push(result);
        }

        if result.is_hit() {
            self.state.stats[team].h += 1;
        }

        if result.is_strikeout() {
            self.record_strikeout();
        }
        for _ in 0..result.pitcher_outs() {
            self.record_out();
        }

        self.reset_count();
        self.state.current_batter[team] = (batter_index + 1) % GameConfig::LINEUP_SIZE;
    }

    /// Reverses the most recent recorded at-bat.
    ///
    /// Returns `false` without touching the state when nothing is left to undo.
    /// The result is removed by value: the last occurrence of the recorded
    /// code in that batter's sequence, which is not necessarily the last
    /// element if the sequence was edited out of order.
    pub fn undo_last_result(&mut self) -> bool {
        let Some(entry) = self.state.result_history.pop() else {
            return false;
        };

        if let Some(results) = self.state.at_bat_results[entry.team].get_mut(entry.batter_index)
            && let Some(index) = results.iter().rposition(|code| *code == entry.result)
        {
            results.remove(index);
        }

        if entry.result.is_hit() {
            let hits = &mut self.state.stats[entry.team].h;
            *hits = hits.saturating_sub(1);
        }

        self.state.runners = entry.runners_before;
        self.state.count = entry.count_before;
        self.state.count.out = entry.outs_before;
        self.state.scores = entry.scores_before;
        self.state.pitcher_stats = entry.pitcher_stats_before;
        self.state.current_batter[entry.team] = entry.batter_index;
        self.refresh_runs();

        true
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::GameEngine;
    use crate::result::ResultCode;
    use crate::state::{GameState, Half, Team};

    #[test]
    fn test_single_then_undo() {
        let mut state = GameState::new();
        let mut engine = GameEngine::new(&mut state);

        engine.record_at_bat(ResultCode::Single);
        let after = engine.state().clone();
        assert_eq!(after.at_bat_results.away[0], vec![ResultCode::Single]);
        assert_eq!(after.stats.away.h, 1);
        assert_eq!(after.current_batter.away, 1);
        assert_eq!(after.result_history.len(), 1);

        assert!(engine.undo_last_result());
        let undone = engine.state();
        assert!(undone.at_bat_results.away[0].is_empty());
        assert_eq!(undone.stats.away.h, 0);
        assert_eq!(undone.current_batter.away, 0);
        assert!(undone.result_history.is_empty());
    }

    #[test]
    fn test_undo_with_empty_history_is_noop() {
        let mut state = GameState::new();
        let before = state.clone();

        assert!(!GameEngine::new(&mut state).undo_last_result());
        assert_eq!(state, before);
    }

    #[test]
    fn test_strikeout_charges_pitcher_but_not_visible_outs() {
        let mut state = GameState::new();
        state.count.ball = 2;
        state.count.strike = 2;
        state.count.out = 1;

        GameEngine::new(&mut state).record_at_bat(ResultCode::Strikeout);

        assert_eq!(state.pitcher_stats.home.outs, 1);
        assert_eq!(state.pitcher_stats.home.strikeouts, 1);
        assert_eq!(state.pitcher_stats.away.outs, 0);
        assert_eq!(state.count.ball, 0);
        assert_eq!(state.count.strike, 0);
        assert_eq!(state.count.out, 1);
    }

    #[test]
    fn test_double_play_charges_two_outs() {
        let mut state = GameState::new();
        state.inning.half = Half::Bottom;

        GameEngine::new(&mut state).record_at_bat(ResultCode::Dp);

        assert_eq!(state.pitcher_stats.away.outs, 2);
        assert_eq!(state.pitcher_stats.away.strikeouts, 0);
        assert_eq!(state.pitcher_stats.away.innings, 0.2);
        assert_eq!(state.current_batter[Team::Home], 1);
    }

    #[test]
    fn test_non_out_codes_leave_pitcher_line_alone() {
        let mut state = GameState::new();
        let mut engine = GameEngine::new(&mut state);

        for code in [
            ResultCode::Walk,
            ResultCode::Hbp,
            ResultCode::Error,
            ResultCode::Sacrifice,
            ResultCode::Fc,
        ] {
            engine.record_at_bat(code);
        }

        assert_eq!(state.pitcher_stats.home.outs, 0);
        assert_eq!(state.stats.away.h, 0);
        assert_eq!(state.current_batter.away, 5);
    }

    #[test]
    fn test_batting_order_wraps_after_ninth() {
        let mut state = GameState::new();
        let mut engine = GameEngine::new(&mut state);

        for _ in 0..9 {
            engine.record_at_bat(ResultCode::Groundout);
        }
        engine.record_at_bat(ResultCode::Double);

        assert_eq!(state.current_batter.away, 1);
        assert_eq!(
            state.at_bat_results.away[0],
            vec![ResultCode::Groundout, ResultCode::Double]
        );
    }

    #[test]
    fn test_record_then_undo_restores_everything() {
        let mut state = GameState::new();
        state.runners.second = true;
        state.count.ball = 3;
        state.scores.away[0] = 2;
        state.stats.away.r = 2;
        state.pitcher_stats.home.runs = 2;
        let before = state.clone();

        let sequence = [
            ResultCode::Single,
            ResultCode::Strikeout,
            ResultCode::Homerun,
            ResultCode::Dp,
            ResultCode::Walk,
            ResultCode::Single,
        ];

        let mut engine = GameEngine::new(&mut state);
        for code in sequence {
            engine.record_at_bat(code);
        }
        for _ in sequence {
            assert!(engine.undo_last_result());
        }

        assert_eq!(state, before);
    }

    #[test]
    fn test_undo_removes_last_occurrence_by_value() {
        let mut state = GameState::new();
        state.at_bat_results.away[0] = vec![
            ResultCode::Single,
            ResultCode::Flyout,
        ];

        let mut engine = GameEngine::new(&mut state);
        engine.record_at_bat(ResultCode::Single);
        // Operator edits the sequence behind the history's back.
        state.at_bat_results.away[0].push(ResultCode::Flyout);

        assert!(GameEngine::new(&mut state).undo_last_result());
        assert_eq!(
            state.at_bat_results.away[0],
            vec![
                ResultCode::Single,
                ResultCode::Flyout,
                ResultCode::Flyout
            ]
        );
    }
}
