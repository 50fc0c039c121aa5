use std::fs;
use std::sync::Arc;
use std::time::Duration;

use game_core::{GameState, ResultCode};
use runtime::{
    FileCacheSlot, InMemoryRemoteStore, LocalCache, PersistenceGateway, ReplicationHub, Role,
    RuntimeConfig, Session,
};
use tempfile::TempDir;

fn offline_session(role: Role, dir: &TempDir) -> Session {
    let config = RuntimeConfig::for_role(role);
    let store = Arc::new(InMemoryRemoteStore::new());
    store.set_reachable(false);

    let slot = FileCacheSlot::new(dir.path(), &config.cache_key).expect("cache dir");
    let hub = ReplicationHub::new();
    let channel = hub.channel(&config.channel_name);
    Session::new(
        config,
        PersistenceGateway::new(store, Duration::from_millis(100)),
        LocalCache::new(Arc::new(slot)),
        channel,
    )
}

#[tokio::test]
async fn test_offline_progress_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut operator = offline_session(Role::Writer, &dir);
    operator.load_state().await;
    operator.record_at_bat(ResultCode::Triple).unwrap();
    operator.adjust_score(2).unwrap();
    let saved = operator.state().clone();
    drop(operator);

    assert!(dir.path().join("baseballScoreboard.json").exists());

    let mut restarted = offline_session(Role::Writer, &dir);
    assert_eq!(restarted.load_state().await, &saved);
    assert_eq!(restarted.state().result_history.len(), 1);
}

#[tokio::test]
async fn test_corrupt_cache_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("baseballScoreboard.json"), "{\"teams\": ").unwrap();

    let mut display = offline_session(Role::Subscriber, &dir);

    assert_eq!(display.load_state().await, &GameState::new());
}
