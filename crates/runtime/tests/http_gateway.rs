use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use game_core::{GameState, ResultCode};
use runtime::{
    HttpRemoteStore, InMemoryCacheSlot, LocalCache, PersistenceGateway, RemoteStore,
    ReplicationHub, Role, RuntimeConfig, Session,
};
use serde_json::{Value, json};

type Shared = Arc<Mutex<Option<Value>>>;

async fn get_state(State(store): State<Shared>) -> Json<Value> {
    let state = store.lock().unwrap().clone();
    Json(json!({ "state": state }))
}

async fn put_state(State(store): State<Shared>, Json(body): Json<Value>) -> StatusCode {
    *store.lock().unwrap() = Some(body["state"].clone());
    StatusCode::NO_CONTENT
}

async fn spawn_api(healthy: bool) -> (String, Shared) {
    let store: Shared = Arc::new(Mutex::new(None));
    let health_status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let app = Router::new()
        .route("/api/health", get(move || async move { health_status }))
        .route("/api/state", get(get_state).put(put_state))
        .with_state(store.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/api/", addr), store)
}

fn http_session(role: Role, base_url: &str) -> Session {
    let config = RuntimeConfig::for_role(role);
    let remote = HttpRemoteStore::new(base_url).unwrap();
    let gateway = PersistenceGateway::new(Arc::new(remote), config.health_timeout);
    let channel = ReplicationHub::new().channel(&config.channel_name);
    Session::new(
        config,
        gateway,
        LocalCache::new(Arc::new(InMemoryCacheSlot::new())),
        channel,
    )
}

#[tokio::test]
async fn test_writer_persists_through_http() {
    let (base_url, store) = spawn_api(true).await;

    let mut operator = http_session(Role::Writer, &base_url);
    assert_eq!(operator.load_state().await, &GameState::new());
    assert!(operator.is_remote_available());

    operator.record_at_bat(ResultCode::Homerun).unwrap();

    let mut persisted = None;
    for _ in 0..100 {
        let current = store.lock().unwrap().clone();
        if current.is_some() {
            persisted = current;
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    let persisted = persisted.expect("remote save should land");
    assert_eq!(persisted["lastResult"]["type"], "homerun");
    assert_eq!(persisted["stats"]["away"]["h"], 1);
    assert_eq!(persisted["atBatResults"]["away"][0][0], "homerun");

    let mut display = http_session(Role::Subscriber, &base_url);
    display.load_state().await;
    assert_eq!(display.state(), operator.state());
}

#[tokio::test]
async fn test_unhealthy_api_is_not_used() {
    let (base_url, store) = spawn_api(false).await;
    *store.lock().unwrap() = Some(json!({"teams": {"home": "Remote", "away": ""}}));

    let mut display = http_session(Role::Subscriber, &base_url);
    display.load_state().await;

    assert!(!display.is_remote_available());
    assert_eq!(display.state().teams.home, "");
}

#[tokio::test]
async fn test_connection_refused_probe_fails() {
    let remote = HttpRemoteStore::new("http://127.0.0.1:1/api").unwrap();
    assert!(remote.health().await.is_err());

    let gateway = PersistenceGateway::new(Arc::new(remote), Duration::from_secs(3));
    assert!(!gateway.probe_health().await);
    assert!(gateway.load().await.is_none());
}
