pub mod events;
pub mod password;

pub use events::{
    delete_event,
    list_events,
    save_event,
    update_events,
    MessageResponse,
    SaveEventRequest,
};
pub use password::{
    read_pass,
    update_password,
    verify_password,
    PasswordResponse,
    UpdatePasswordRequest,
    VerifyPasswordRequest,
    VerifyPasswordResponse,
};

use axum::{extract::rejection::JsonRejection, http::StatusCode, response::Json};

use crate::error::StoreError;

/// Error half of every handler result: a status and a `{"error": ...}` body.
pub type ApiError = (StatusCode, Json<serde_json::Value>);

pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(serde_json::json!({"error": message.into()})))
}

/// Log a store failure and map it to a response. Validation messages go back to the
/// client as-is; I/O and parse details stay in the log behind `public_message`.
pub(crate) fn store_error(public_message: &str, err: StoreError) -> ApiError {
    if err.is_validation() {
        tracing::warn!("{}: {}", public_message, err);
        return error_response(err.status_code(), err.to_string());
    }
    tracing::error!("{}: {:?}", public_message, err);
    error_response(err.status_code(), public_message)
}

/// Malformed request bodies are validation errors.
pub(crate) fn body_rejection(rejection: JsonRejection) -> ApiError {
    tracing::warn!("Rejected request body: {}", rejection.body_text());
    error_response(StatusCode::BAD_REQUEST, rejection.body_text())
}
