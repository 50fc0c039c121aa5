use std::sync::Arc;
use std::time::Duration;

use game_core::{GameState, ResultCode, Team};
use runtime::{
    InMemoryCacheSlot, InMemoryRemoteStore, LocalCache, PersistenceGateway, ReplicationHub,
    Role, RuntimeConfig, Session,
};
use serde_json::json;

fn build_session(
    role: Role,
    hub: &ReplicationHub,
    store: Arc<InMemoryRemoteStore>,
    slot: Arc<InMemoryCacheSlot>,
) -> Session {
    let config = RuntimeConfig::for_role(role);
    let gateway = PersistenceGateway::new(store, Duration::from_millis(500));
    let channel = hub.channel(&config.channel_name);
    Session::new(config, gateway, LocalCache::new(slot), channel)
}

async fn wait_for_document(store: &InMemoryRemoteStore, state: &GameState) {
    let expected = serde_json::to_value(state).unwrap();
    for _ in 0..100 {
        if store.document().as_ref() == Some(&expected) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!(
        "remote store never caught up after {} saves",
        store.put_count()
    );
}

/// Operator and display scenario over a shared remote store.
///
/// 1. Operator loads from an empty store and starts from defaults
/// 2. Operator records at-bats; the display follows over the channel
/// 3. A late display misses earlier broadcasts and recovers via load
/// 4. Undo walks the state back to where it started
#[tokio::test]
async fn test_operator_display_scenario() {
    println!("\n════════════════════════════════════════════════════════");
    println!("  SCOREBOARD - Operator / Display Scenario Test");
    println!("════════════════════════════════════════════════════════\n");

    let hub = ReplicationHub::new();
    let store = Arc::new(InMemoryRemoteStore::new());

    // ================================================================
    // PHASE 1: Load
    // ================================================================
    let mut operator = build_session(
        Role::Writer,
        &hub,
        store.clone(),
        Arc::new(InMemoryCacheSlot::new()),
    );
    assert_eq!(operator.load_state().await, &GameState::new());
    assert!(operator.is_remote_available());
    let initial = operator.state().clone();
    println!("✓ Operator loaded defaults, remote store reachable");

    // ================================================================
    // PHASE 2: Live updates
    // ================================================================
    let mut display = build_session(
        Role::Subscriber,
        &hub,
        store.clone(),
        Arc::new(InMemoryCacheSlot::new()),
    );
    display.load_state().await;
    let mut feed = display.subscribe();

    operator.record_at_bat(ResultCode::Single).unwrap();
    operator.add_ball().unwrap();
    operator.record_at_bat(ResultCode::Strikeout).unwrap();

    let mut announced = Vec::new();
    while let Some(message) = feed.try_recv() {
        announced.extend(display.apply_update(message));
    }
    assert_eq!(announced, vec![ResultCode::Single, ResultCode::Strikeout]);
    assert_eq!(display.state(), operator.state());
    assert_eq!(display.state().stats.away.h, 1);
    assert_eq!(display.state().count.out, 0);
    assert_eq!(display.state().pitcher_stats.home.strikeouts, 1);
    println!("✓ Display followed {} announcements", announced.len());

    // ================================================================
    // PHASE 3: Late subscriber
    // ================================================================
    wait_for_document(&store, operator.state()).await;

    let mut late = build_session(
        Role::Subscriber,
        &hub,
        store.clone(),
        Arc::new(InMemoryCacheSlot::new()),
    );
    let mut late_feed = late.subscribe();
    assert!(late_feed.try_recv().is_none());
    assert_eq!(late.state(), &GameState::new());

    late.load_state().await;
    assert_eq!(late.state(), operator.state());
    println!("✓ Late display recovered through load_state");

    // ================================================================
    // PHASE 4: Undo
    // ================================================================
    assert!(operator.undo_last_result().unwrap());
    assert!(operator.undo_last_result().unwrap());
    assert!(!operator.undo_last_result().unwrap());

    let mut restored = operator.state().clone();
    restored.last_result = None;
    assert_eq!(restored, initial);
    println!("✓ Undo restored the opening state");
}

#[tokio::test]
async fn test_unreachable_remote_falls_back_to_cache() {
    let hub = ReplicationHub::new();
    let store = Arc::new(InMemoryRemoteStore::with_document(json!({
        "teams": {"home": "Remote", "away": "Remote"}
    })));
    store.set_reachable(false);

    let mut cached = GameState::new();
    cached.teams.home = "Cached".into();
    cached.inning.number = 7;
    let slot = Arc::new(InMemoryCacheSlot::with_contents(
        serde_json::to_string(&cached).unwrap(),
    ));

    let mut operator = build_session(Role::Writer, &hub, store.clone(), slot);
    operator.load_state().await;

    assert!(!operator.is_remote_available());
    assert_eq!(operator.state().teams.home, "Cached");
    assert_eq!(operator.state().inning.number, 7);

    operator.add_out().unwrap();
    tokio::task::yield_now().await;
    assert_eq!(store.put_count(), 0);
}

#[tokio::test]
async fn test_legacy_remote_document_is_merged_and_cached() {
    let hub = ReplicationHub::new();
    let store = Arc::new(InMemoryRemoteStore::with_document(json!({
        "teams": {"home": "Hawks", "away": "Lions"},
        "scores": {
            "home": [0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0],
            "away": [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]
        },
        "stats": {"home": {"r": 1, "h": 3, "e": 0}, "away": {"r": 0, "h": 1, "e": null}}
    })));
    let slot = Arc::new(InMemoryCacheSlot::new());

    let mut display = build_session(Role::Subscriber, &hub, store, slot.clone());
    let state = display.load_state().await;

    assert_eq!(state.teams.home, "Hawks");
    assert_eq!(state.scores.home.len(), 11);
    assert_eq!(state.total_runs(Team::Home), 1);
    assert_eq!(state.stats.away.e, 0);
    assert_eq!(state.pitcher.home, "");
    assert!(slot.contents().unwrap().contains("Hawks"));
}

#[tokio::test]
async fn test_undecodable_remote_document_falls_through() {
    let hub = ReplicationHub::new();
    let store = Arc::new(InMemoryRemoteStore::with_document(json!({
        "atBatResults": {"home": [["triple_play"]], "away": []}
    })));

    let mut cached = GameState::new();
    cached.teams.away = "Swallows".into();
    let slot = Arc::new(InMemoryCacheSlot::with_contents(
        serde_json::to_string(&cached).unwrap(),
    ));

    let mut display = build_session(Role::Subscriber, &hub, store, slot);
    display.load_state().await;

    assert_eq!(display.state().teams.away, "Swallows");
}

#[tokio::test]
async fn test_broadcast_before_subscribe_is_lost() {
    let hub = ReplicationHub::new();
    let store = Arc::new(InMemoryRemoteStore::new());
    store.set_reachable(false);

    let mut operator = build_session(
        Role::Writer,
        &hub,
        store.clone(),
        Arc::new(InMemoryCacheSlot::new()),
    );
    operator.load_state().await;
    operator.set_team_name(Team::Away, "Buffaloes").unwrap();

    let display = build_session(
        Role::Subscriber,
        &hub,
        store,
        Arc::new(InMemoryCacheSlot::new()),
    );
    let mut feed = display.subscribe();

    assert!(feed.try_recv().is_none());
    assert_eq!(display.state().teams.away, "");
}
