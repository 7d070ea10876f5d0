// Test helpers for setting up a board backed by a temporary data directory

#![allow(dead_code)]

use axum_test::TestServer;
use event_board_api::services::seed_data::bootstrap_data_files;
use event_board_api::{app, AppState, Config};
use serde_json::Value;
use tempfile::TempDir;

pub const ADMIN_PASSWORD: &str = "letmein";

pub struct TestBoard {
    pub server: TestServer,
    pub state: AppState,
    // Keeps the data directory alive for the duration of the test
    pub dir: TempDir,
}

pub fn test_config(dir: &TempDir) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        events_file: dir.path().join("events.json"),
        password_file: dir.path().join("password.txt"),
        admin_password: Some(ADMIN_PASSWORD.to_string()),
        expose_password: true,
    }
}

pub async fn setup_board() -> TestBoard {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    setup_board_with(dir, |_| {}).await
}

pub async fn setup_board_with(dir: TempDir, customize: impl FnOnce(&mut Config)) -> TestBoard {
    let mut config = test_config(&dir);
    customize(&mut config);

    let state = AppState::new(config.clone());
    bootstrap_data_files(&state.events, &state.passwords, config.admin_password.as_deref())
        .await
        .expect("Failed to bootstrap data files");

    let server = TestServer::new(app(state.clone())).expect("Failed to start test server");
    TestBoard { server, state, dir }
}

pub async fn list_events(board: &TestBoard) -> Vec<Value> {
    let response = board.server.get("/events").await;
    response.assert_status_ok();
    response.json::<Vec<Value>>()
}

pub fn ids(events: &[Value]) -> Vec<i64> {
    events
        .iter()
        .map(|e| e["id"].as_i64().expect("numeric id"))
        .collect()
}
