use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::handlers::{body_rejection, store_error, ApiError};
use crate::models::ids::parse_event_id;
use crate::models::{parse_collection, Event, EventDraft};
use crate::AppState;

#[derive(Deserialize)]
pub struct SaveEventRequest {
    // A missing `event` fails validation like an empty draft.
    #[serde(default)]
    pub event: EventDraft,
}

#[derive(Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

// GET /events
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    let events = state
        .events
        .read_all()
        .await
        .map_err(|e| store_error("Error reading events", e))?;
    Ok(Json(events))
}

// POST /saveEvent
pub async fn save_event(
    State(state): State<AppState>,
    payload: Result<Json<SaveEventRequest>, JsonRejection>,
) -> Result<Json<Event>, ApiError> {
    let Json(payload) = payload.map_err(body_rejection)?;
    tracing::debug!("Received event: {:?}", payload.event);

    let event = state
        .events
        .add(payload.event)
        .await
        .map_err(|e| store_error("Error saving event", e))?;
    Ok(Json(event))
}

// DELETE /deleteEvent/:id
pub async fn delete_event(
    Path(event_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    match parse_event_id(&event_id) {
        Ok(id) => {
            state
                .events
                .delete(id)
                .await
                .map_err(|e| store_error("Error deleting event", e))?;
        }
        Err(e) => {
            // Matches no stored event; the file still has to be readable.
            tracing::debug!("{}", e);
            state
                .events
                .read_all()
                .await
                .map_err(|e| store_error("Error deleting event", e))?;
        }
    }
    Ok(MessageResponse::new("Event deleted"))
}

// POST /updateEvents
pub async fn update_events(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(body) = payload.map_err(body_rejection)?;
    let events = parse_collection(body).map_err(|e| store_error("Error updating events", e))?;
    tracing::debug!("Received {} events for overwrite", events.len());

    state
        .events
        .reorder(events)
        .await
        .map_err(|e| store_error("Error updating events", e))?;
    Ok(MessageResponse::new("Events updated successfully"))
}
