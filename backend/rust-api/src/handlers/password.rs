use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::handlers::{body_rejection, error_response, store_error, ApiError, MessageResponse};
use crate::AppState;

#[derive(Serialize, Deserialize)]
pub struct PasswordResponse {
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdatePasswordRequest {
    #[serde(rename = "newPassword", default)]
    pub new_password: String,
}

#[derive(Deserialize)]
pub struct VerifyPasswordRequest {
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct VerifyPasswordResponse {
    pub valid: bool,
}

// GET /readPass
pub async fn read_pass(State(state): State<AppState>) -> Result<Json<PasswordResponse>, ApiError> {
    if !state.config.expose_password {
        return Err(error_response(StatusCode::NOT_FOUND, "Not found"));
    }

    let password = state
        .passwords
        .read()
        .await
        .map_err(|e| store_error("Failed to read password file", e))?;
    Ok(Json(PasswordResponse { password }))
}

// POST /updatePassword
pub async fn update_password(
    State(state): State<AppState>,
    payload: Result<Json<UpdatePasswordRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(payload) = payload.map_err(body_rejection)?;

    state
        .passwords
        .write(&payload.new_password)
        .await
        .map_err(|e| store_error("Error updating password", e))?;
    Ok(Json(MessageResponse {
        message: "Password updated successfully".to_string(),
    }))
}

// POST /verifyPassword
pub async fn verify_password(
    State(state): State<AppState>,
    payload: Result<Json<VerifyPasswordRequest>, JsonRejection>,
) -> Result<Json<VerifyPasswordResponse>, ApiError> {
    let Json(payload) = payload.map_err(body_rejection)?;

    let valid = state
        .passwords
        .verify(&payload.password)
        .await
        .map_err(|e| store_error("Failed to read password file", e))?;
    if !valid {
        tracing::warn!("Admin password verification failed");
    }
    Ok(Json(VerifyPasswordResponse { valid }))
}
