//! Shared helpers for client tests: a real API server on an ephemeral port with its own data directory.

#![allow(dead_code)]

use event_board_api::services::seed_data::bootstrap_data_files;
use event_board_api::{serve, AppState, Config};
use event_board_client::{Board, EventBoardClient};
use tempfile::TempDir;
use tokio::net::TcpListener;

pub const ADMIN_PASSWORD: &str = "letmein";

pub struct RunningServer {
    pub client: EventBoardClient,
    pub state: AppState,
    pub dir: TempDir,
}

impl RunningServer {
    pub fn board(&self) -> Board {
        Board::new(self.client.clone())
    }
}

pub async fn start_server() -> RunningServer {
    start_server_with(|_| {}).await
}

pub async fn start_server_with(customize: impl FnOnce(&mut Config)) -> RunningServer {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        events_file: dir.path().join("events.json"),
        password_file: dir.path().join("password.txt"),
        admin_password: Some(ADMIN_PASSWORD.to_string()),
        expose_password: true,
    };
    customize(&mut config);

    let state = AppState::new(config.clone());
    bootstrap_data_files(&state.events, &state.passwords, config.admin_password.as_deref())
        .await
        .expect("bootstrap");

    let listener = TcpListener::bind(config.bind_addr()).await.expect("bind");
    let addr = listener.local_addr().expect("local_addr");
    let server_state = state.clone();
    tokio::spawn(async move {
        let _ = serve(listener, server_state).await;
    });

    let client = EventBoardClient::new(format!("http://{}", addr)).expect("client");
    RunningServer { client, state, dir }
}

/// Board already logged in as admin with the initial collection loaded.
pub async fn admin_board(server: &RunningServer) -> Board {
    let mut board = server.board();
    assert!(board.login(ADMIN_PASSWORD).await, "login failed: {:?}", board.notice());
    assert!(board.refresh().await);
    board
}
