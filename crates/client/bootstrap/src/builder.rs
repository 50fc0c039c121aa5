//! Builds the session and its adapters for front-ends.
use std::sync::Arc;

use anyhow::{Context, Result};
use runtime::{
    CacheSlot, FileCacheSlot, HttpRemoteStore, HttpSeasonStatsProvider, InMemoryCacheSlot,
    InMemoryRemoteStore, LocalCache, PersistenceGateway, RemoteStore, ReplicationHub,
    SeasonStatsCache, Session,
};

use crate::config::SessionConfig;

/// Builder that assembles the persistence chain, the replication channel and
/// the session for clients.
pub struct SessionBuilder {
    config: SessionConfig,
    hub: Option<ReplicationHub>,
}

impl SessionBuilder {
    pub fn new(config: SessionConfig) -> Self {
        Self { config, hub: None }
    }

    /// Join an existing hub so several sessions in one process share channels.
    pub fn hub(mut self, hub: ReplicationHub) -> Self {
        self.hub = Some(hub);
        self
    }

    /// Builds the session and loads its state through the persistence chain.
    pub async fn build(self) -> Result<SessionSetup> {
        let runtime_config = self.config.runtime.clone();

        let remote: Arc<dyn RemoteStore> = match &self.config.api_url {
            Some(url) => {
                tracing::info!("Using scoreboard API at {}", url);
                Arc::new(HttpRemoteStore::new(url.as_str()).context("building API client")?)
            }
            None => {
                tracing::info!("No SCOREBOARD_API_URL set, remote store kept in memory");
                Arc::new(InMemoryRemoteStore::new())
            }
        };
        let gateway = PersistenceGateway::new(remote, runtime_config.health_timeout);

        let cache = LocalCache::new(self.cache_slot(&runtime_config.cache_key)?);

        let hub = self
            .hub
            .unwrap_or_else(|| ReplicationHub::with_capacity(runtime_config.channel_capacity));
        let channel = hub.channel(&runtime_config.channel_name);

        let season_stats = match &self.config.stats_url {
            Some(url) => {
                let provider =
                    HttpSeasonStatsProvider::new(url.as_str()).context("building stats client")?;
                Some(SeasonStatsCache::new(Arc::new(provider)))
            }
            None => None,
        };

        let mut session = Session::new(runtime_config, gateway, cache, channel);
        session.load_state().await;

        Ok(SessionSetup {
            config: self.config,
            hub,
            session,
            season_stats,
        })
    }

    fn cache_slot(&self, key: &str) -> Result<Arc<dyn CacheSlot>> {
        let dir = self.config.cache_dir.clone().or_else(FileCacheSlot::default_dir);

        match dir {
            Some(dir) => {
                let slot = FileCacheSlot::new(&dir, key)
                    .with_context(|| format!("opening cache directory {}", dir.display()))?;
                tracing::debug!("Local cache at {}", slot.path().display());
                Ok(Arc::new(slot))
            }
            None => {
                tracing::warn!("No data directory available, local cache kept in memory");
                Ok(Arc::new(InMemoryCacheSlot::new()))
            }
        }
    }
}

pub struct SessionSetup {
    pub config: SessionConfig,
    pub hub: ReplicationHub,
    pub session: Session,
    pub season_stats: Option<SeasonStatsCache>,
}

#[cfg(test)]
mod tests {
    use game_core::{GameState, ResultCode, Team};
    use runtime::{ReplicationMessage, Role};

    use super::*;

    #[tokio::test]
    async fn test_sessions_share_cache_and_hub() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SessionConfig::default();
        config.cache_dir = Some(dir.path().to_path_buf());

        let SessionSetup {
            mut session, hub, ..
        } = SessionBuilder::new(config.clone()).build().await.unwrap();
        assert_eq!(session.state(), &GameState::new());
        session.record_at_bat(ResultCode::Walk).unwrap();

        config.runtime.role = Role::Subscriber;
        let display = SessionBuilder::new(config).hub(hub).build().await.unwrap();

        assert_eq!(display.session.state(), session.state());
        assert_eq!(display.session.role(), Role::Subscriber);
        assert!(display.season_stats.is_none());
    }

    #[tokio::test]
    async fn test_display_on_shared_hub_receives_broadcasts() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SessionConfig::default();
        config.cache_dir = Some(dir.path().to_path_buf());

        let SessionSetup {
            mut session, hub, ..
        } = SessionBuilder::new(config.clone()).build().await.unwrap();
        let mut display = SessionBuilder::new(config.for_display())
            .hub(hub)
            .build()
            .await
            .unwrap()
            .session;
        let mut feed = display.subscribe();

        session.set_team_name(Team::Away, "Hawks").unwrap();
        session.record_at_bat(ResultCode::Triple).unwrap();

        let mut announced = Vec::new();
        while let Some(message) = feed.try_recv() {
            if matches!(message, ReplicationMessage::StateUpdate { .. }) {
                assert!(display.apply_update(message).is_none());
            } else {
                announced.extend(display.apply_update(message));
            }
        }

        assert_eq!(announced, vec![ResultCode::Triple]);
        assert_eq!(display.state(), session.state());
        assert_eq!(display.state().teams.away, "Hawks");
    }
}
