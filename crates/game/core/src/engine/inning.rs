//! Outs and half-inning changes.

use crate::config::GameConfig;
use crate::state::{Half, Runners};

use super::GameEngine;

impl GameEngine<'_> {
    /// Adds a visible out and charges it to the pitcher.
    ///
    /// On the third out the count settles back to zero, the bases are cleared
    /// and the half-inning advances. Returns `true` when the half-inning changed.
    pub fn add_out(&mut self) -> bool {
        self.state.count.out += 1;
        self.record_out();
        self.reset_count();

        if self.state.count.out >= GameConfig::OUTS_PER_HALF {
            self.state.count.out = 0;
            self.clear_runners();
            self.advance_inning();
            return true;
        }
        false
    }

    /// Top goes to bottom of the same inning; bottom goes to the top of the
    /// next one, never past the last inning on the board.
    pub fn advance_inning(&mut self) {
        let inning = &mut self.state.inning;
        match inning.half {
            Half::Top => inning.half = Half::Bottom,
            Half::Bottom => {
                inning.half = Half::Top;
                if inning.number < GameConfig::MAX_INNINGS as u32 {
                    inning.number += 1;
                }
            }
        }
    }

    /// Operator correction: steps back one half-inning, stopping at the top of the first.
    pub fn previous_inning(&mut self) {
        let inning = &mut self.state.inning;
        match inning.half {
            Half::Bottom => inning.half = Half::Top,
            Half::Top if inning.number > 1 => {
                inning.number -= 1;
                inning.half = Half::Bottom;
            }
            Half::Top => {}
        }
    }

    pub fn clear_runners(&mut self) {
        self.state.runners = Runners::EMPTY;
    }
}
