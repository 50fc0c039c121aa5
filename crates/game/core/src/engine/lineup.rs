//! Team names, batting order and defensive assignments.

use crate::state::Team;

use super::{EngineError, GameEngine};

impl GameEngine<'_> {
    pub fn set_team_name(&mut self, team: Team, name: impl Into<String>) {
        self.state.teams[team] = name.into();
    }

    /// Writes the batter name for a lineup slot (0-based).
    pub fn set_lineup_entry(
        &mut self,
        team: Team,
        slot: usize,
        name: impl Into<String>,
    ) -> Result<(), EngineError> {
        let entry = self.state.lineup[team]
            .get_mut(slot)
            .ok_or(EngineError::InvalidLineupSlot { team, slot })?;
        *entry = name.into();
        Ok(())
    }

    /// Writes the defensive position label for a lineup slot (0-based).
    pub fn set_position(
        &mut self,
        team: Team,
        slot: usize,
        label: impl Into<String>,
    ) -> Result<(), EngineError> {
        let entry = self.state.positions[team]
            .get_mut(slot)
            .ok_or(EngineError::InvalidLineupSlot { team, slot })?;
        *entry = label.into();
        Ok(())
    }

    /// Sets the designated pitcher; an empty name falls back to the lineup.
    pub fn set_pitcher(&mut self, team: Team, name: impl Into<String>) {
        self.state.pitcher[team] = name.into();
    }
}
