//! Session orchestrator: owns the live state and moves it between the engine,
//! the persistence chain and the replication channel.
//!
//! One session exists per surface. The writer session applies operator
//! commands through [`GameEngine`] and pushes every result outward; subscriber
//! sessions only load, receive and render.
use game_core::{
    Base, CountField, EngineError, GameEngine, GameState, LastResult, PitcherStats, ResultCode,
    StatField, Team,
};

use crate::api::{Result, RuntimeError};
use crate::config::{Role, RuntimeConfig};
use crate::events::{ReplicationChannel, ReplicationMessage, Subscription, now_millis};
use crate::repository::{LocalCache, PersistenceGateway, RemoteWriter, decode_onto_default};

pub struct Session {
    state: GameState,
    config: RuntimeConfig,
    gateway: PersistenceGateway,
    cache: LocalCache,
    channel: ReplicationChannel,
    remote_available: bool,
    remote_writer: Option<RemoteWriter>,
}

impl Session {
    /// Creates a session holding the default template. Call
    /// [`Session::load_state`] to pick up persisted progress.
    pub fn new(
        config: RuntimeConfig,
        gateway: PersistenceGateway,
        cache: LocalCache,
        channel: ReplicationChannel,
    ) -> Self {
        Self {
            state: GameState::new(),
            config,
            gateway,
            cache,
            channel,
            remote_available: false,
            remote_writer: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn role(&self) -> Role {
        self.config.role
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Outcome of the last health probe.
    pub fn is_remote_available(&self) -> bool {
        self.remote_available
    }

    pub fn channel(&self) -> &ReplicationChannel {
        &self.channel
    }

    /// Attaches to the replication channel. Only messages published from now
    /// on are delivered.
    pub fn subscribe(&self) -> Subscription {
        self.channel.subscribe()
    }

    /// Loads the state by precedence: remote store, then local cache, then
    /// the default template.
    ///
    /// Each document is deep-merged onto the default template first, so
    /// fields added since it was written come up with their defaults. A
    /// document that still fails to decode counts as absent.
    pub async fn load_state(&mut self) -> &GameState {
        self.remote_available = self.gateway.probe_health().await;
        tracing::info!(
            role = %self.config.role,
            remote_available = self.remote_available,
            "Loading game state"
        );

        if self.remote_available && self.config.role.is_writer() && self.remote_writer.is_none() {
            self.remote_writer = Some(RemoteWriter::spawn(self.gateway.clone()));
        }

        if self.remote_available
            && let Some(state) = self.gateway.load().await.and_then(decode_onto_default)
        {
            tracing::debug!("Loaded state from remote store");
            self.state = state;
            self.cache.write(&self.state);
            return &self.state;
        }

        if let Some(state) = self.cache.read().and_then(decode_onto_default) {
            tracing::debug!("Loaded state from local cache");
            self.state = state;
            return &self.state;
        }

        tracing::debug!("No persisted state found, starting from defaults");
        self.state = GameState::new();
        &self.state
    }

    /// Writes the state to the local cache, then (writer only) publishes a
    /// `STATE_UPDATE` unless `skip_broadcast` is set and queues a remote save
    /// when the remote store was reachable at load.
    ///
    /// Never waits for the remote store and never fails. Remote saves land in
    /// the order they were queued.
    pub fn save_state(&self, skip_broadcast: bool) {
        self.cache.write(&self.state);

        if !self.config.role.is_writer() {
            return;
        }

        if !skip_broadcast {
            self.channel
                .publish(ReplicationMessage::state_update(&self.state));
        }

        if self.remote_available
            && let Some(writer) = &self.remote_writer
        {
            match serde_json::to_value(&self.state) {
                Ok(document) => writer.submit(document),
                Err(err) => tracing::warn!("Failed to encode state for remote save: {}", err),
            }
        }
    }

    /// Waits for queued remote saves to reach the store, then drops the
    /// session.
    pub async fn close(mut self) {
        if let Some(writer) = self.remote_writer.take() {
            writer.close().await;
        }
        tracing::debug!(role = %self.config.role, "Session closed");
    }

    /// Replaces the in-memory state with the default template without
    /// persisting it.
    pub fn reset_state(&mut self) {
        self.state = GameState::new();
    }

    /// Subscriber-side handling of a received message.
    ///
    /// A `STATE_UPDATE` replaces the state wholesale. A `SHOW_RESULT` leaves
    /// the state alone and hands the code back for the result announcement.
    pub fn apply_update(&mut self, message: ReplicationMessage) -> Option<ResultCode> {
        match message {
            ReplicationMessage::StateUpdate { state, .. } => {
                self.state = *state;
                None
            }
            ReplicationMessage::ShowResult { result, .. } => Some(result),
        }
    }

    pub fn current_batter_name(&self) -> Option<&str> {
        self.state.current_batter_name()
    }

    pub fn current_pitcher_name(&self) -> Option<&str> {
        self.state.current_pitcher_name(&self.config.game_config)
    }

    /// Pitcher line for the fielding team with its derived fields recomputed.
    pub fn current_pitcher_line(&self) -> PitcherStats {
        let mut snapshot = self.state.clone();
        let team = snapshot.pitching_team();
        GameEngine::new(&mut snapshot).update_pitcher_stats(team);
        snapshot.pitcher_stats[team].clone()
    }

    // ------------------------------------------------------------------
    // Operator commands (writer only). Each applies one engine transition
    // and then saves with broadcast.
    // ------------------------------------------------------------------

    fn ensure_writer(&self) -> Result<()> {
        if self.config.role.is_writer() {
            Ok(())
        } else {
            Err(RuntimeError::ReadOnlySession {
                role: self.config.role,
            })
        }
    }

    fn mutate<T>(&mut self, op: impl FnOnce(&mut GameEngine<'_>) -> T) -> Result<T> {
        self.ensure_writer()?;
        let outcome = op(&mut GameEngine::new(&mut self.state));
        self.save_state(false);
        Ok(outcome)
    }

    fn try_mutate<T>(
        &mut self,
        op: impl FnOnce(&mut GameEngine<'_>) -> std::result::Result<T, EngineError>,
    ) -> Result<T> {
        self.ensure_writer()?;
        let outcome = op(&mut GameEngine::new(&mut self.state))?;
        self.save_state(false);
        Ok(outcome)
    }

    /// Records the current batter's result, stamps it as the last result and
    /// announces it to displays.
    pub fn record_at_bat(&mut self, result: ResultCode) -> Result<()> {
        self.ensure_writer()?;

        GameEngine::new(&mut self.state).record_at_bat(result);
        let timestamp = now_millis();
        self.state.last_result = Some(LastResult { result, timestamp });

        tracing::info!(%result, "Recorded at-bat");
        self.channel
            .publish(ReplicationMessage::ShowResult { result, timestamp });
        self.save_state(false);
        Ok(())
    }

    /// Undoes the most recent at-bat. Returns `Ok(false)` when there was
    /// nothing to undo; nothing is saved in that case.
    pub fn undo_last_result(&mut self) -> Result<bool> {
        self.ensure_writer()?;

        if !GameEngine::new(&mut self.state).undo_last_result() {
            tracing::debug!("Undo requested with empty history");
            return Ok(false);
        }
        self.save_state(false);
        Ok(true)
    }

    /// Returns `true` when the out retired the side.
    pub fn add_out(&mut self) -> Result<bool> {
        self.mutate(|engine| engine.add_out())
    }

    /// Returns `true` when the pitch was ball four.
    pub fn add_ball(&mut self) -> Result<bool> {
        self.mutate(|engine| engine.add_ball())
    }

    /// Returns `true` when the pitch retired the side.
    pub fn add_strike(&mut self) -> Result<bool> {
        self.mutate(|engine| engine.add_strike())
    }

    pub fn reset_count(&mut self) -> Result<()> {
        self.mutate(|engine| engine.reset_count())
    }

    pub fn clear_count_field(&mut self, field: CountField) -> Result<()> {
        self.mutate(|engine| engine.clear_count_field(field))
    }

    pub fn toggle_runner(&mut self, base: Base) -> Result<()> {
        self.mutate(|engine| engine.toggle_runner(base))
    }

    pub fn clear_runners(&mut self) -> Result<()> {
        self.mutate(|engine| engine.clear_runners())
    }

    pub fn advance_inning(&mut self) -> Result<()> {
        self.mutate(|engine| engine.advance_inning())
    }

    pub fn previous_inning(&mut self) -> Result<()> {
        self.mutate(|engine| engine.previous_inning())
    }

    pub fn adjust_score(&mut self, delta: i32) -> Result<()> {
        self.try_mutate(|engine| engine.adjust_score(delta))
    }

    pub fn adjust_stat(&mut self, team: Team, field: StatField, delta: i32) -> Result<()> {
        self.mutate(|engine| engine.adjust_stat(team, field, delta))
    }

    pub fn next_batter(&mut self) -> Result<()> {
        self.mutate(|engine| engine.next_batter())
    }

    pub fn previous_batter(&mut self) -> Result<()> {
        self.mutate(|engine| engine.previous_batter())
    }

    pub fn set_team_name(&mut self, team: Team, name: &str) -> Result<()> {
        self.mutate(|engine| engine.set_team_name(team, name))
    }

    pub fn set_lineup_entry(&mut self, team: Team, slot: usize, name: &str) -> Result<()> {
        self.try_mutate(|engine| engine.set_lineup_entry(team, slot, name))
    }

    pub fn set_position(&mut self, team: Team, slot: usize, label: &str) -> Result<()> {
        self.try_mutate(|engine| engine.set_position(team, slot, label))
    }

    pub fn set_pitcher(&mut self, team: Team, name: &str) -> Result<()> {
        self.mutate(|engine| engine.set_pitcher(team, name))
    }

    /// Starts a new game: default template, saved and broadcast.
    pub fn reset_game(&mut self) -> Result<()> {
        self.ensure_writer()?;
        self.reset_state();
        tracing::info!("Game reset to defaults");
        self.save_state(false);
        Ok(())
    }
}
