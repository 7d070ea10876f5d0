// Integration tests for the admin password endpoints

mod common;

use axum::http::StatusCode;
use common::{setup_board, setup_board_with, ADMIN_PASSWORD};
use event_board_api::{PasswordResponse, VerifyPasswordResponse};
use serde_json::{json, Value};

#[tokio::test]
async fn read_pass_returns_bootstrapped_password() {
    let board = setup_board().await;

    let response = board.server.get("/readPass").await;
    response.assert_status_ok();
    assert_eq!(response.json::<PasswordResponse>().password, ADMIN_PASSWORD);
}

#[tokio::test]
async fn update_password_then_read_and_verify() {
    let board = setup_board().await;

    board
        .server
        .post("/updatePassword")
        .json(&json!({"newPassword": "  correct horse  "}))
        .await
        .assert_status_ok();

    let stored = board.server.get("/readPass").await.json::<PasswordResponse>();
    assert_eq!(stored.password, "correct horse");

    let verified = board
        .server
        .post("/verifyPassword")
        .json(&json!({"password": "correct horse"}))
        .await
        .json::<VerifyPasswordResponse>();
    assert!(verified.valid);

    let rejected = board
        .server
        .post("/verifyPassword")
        .json(&json!({"password": ADMIN_PASSWORD}))
        .await
        .json::<VerifyPasswordResponse>();
    assert!(!rejected.valid);
}

#[tokio::test]
async fn blank_new_password_is_rejected() {
    let board = setup_board().await;

    for body in [json!({"newPassword": ""}), json!({"newPassword": "   "}), json!({})] {
        let response = board.server.post("/updatePassword").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["error"], "New password is required");
    }

    let stored = board.server.get("/readPass").await.json::<PasswordResponse>();
    assert_eq!(stored.password, ADMIN_PASSWORD);
}

#[tokio::test]
async fn missing_password_file_is_a_server_error() {
    let dir = tempfile::tempdir().unwrap();
    let board = setup_board_with(dir, |config| config.admin_password = None).await;
    assert!(!board.state.passwords.path().exists());

    let response = board.server.get("/readPass").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["error"], "Failed to read password file");

    board
        .server
        .post("/verifyPassword")
        .json(&json!({"password": "anything"}))
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    // Setting a password creates the file
    board
        .server
        .post("/updatePassword")
        .json(&json!({"newPassword": "fresh"}))
        .await
        .assert_status_ok();
    board.server.get("/readPass").await.assert_status_ok();
}

#[tokio::test]
async fn existing_password_file_is_not_overwritten_at_startup() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("password.txt"), "already-set").unwrap();

    let board = setup_board_with(dir, |_| {}).await;
    let stored = board.server.get("/readPass").await.json::<PasswordResponse>();
    assert_eq!(stored.password, "already-set");
}

#[tokio::test]
async fn read_pass_can_be_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let board = setup_board_with(dir, |config| config.expose_password = false).await;

    board
        .server
        .get("/readPass")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let verified = board
        .server
        .post("/verifyPassword")
        .json(&json!({"password": ADMIN_PASSWORD}))
        .await
        .json::<VerifyPasswordResponse>();
    assert!(verified.valid);
}
