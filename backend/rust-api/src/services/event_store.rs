//! File-backed event collection. The whole collection lives in one pretty-printed JSON
//! array that is re-read on every call and always saved sorted by `order`.

use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::models::ids::next_event_id;
use crate::models::{Event, EventDraft, EventId};
use crate::services::write_atomically;

pub struct EventStore {
    path: PathBuf,
    // Serializes read-modify-write cycles; readers rely on the atomic rename instead.
    write_lock: Mutex<()>,
}

impl EventStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn exists(&self) -> Result<bool, StoreError> {
        fs::try_exists(&self.path).await.map_err(|e| self.io_error(e))
    }

    pub async fn read_all(&self) -> Result<Vec<Event>, StoreError> {
        let data = fs::read(&self.path).await.map_err(|e| self.io_error(e))?;
        serde_json::from_slice(&data).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Persist `events` sorted by `order` (stable, ties keep input order).
    pub async fn write_all(&self, events: &[Event]) -> Result<Vec<Event>, StoreError> {
        let _guard = self.write_lock.lock().await;
        self.persist(events.to_vec()).await
    }

    /// Validate the draft, give it a fresh id and append it to the collection.
    pub async fn add(&self, draft: EventDraft) -> Result<Event, StoreError> {
        draft.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut events = self.read_all().await?;
        let id = next_event_id(events.iter().map(|e| e.id), Utc::now().timestamp_millis())
            .ok_or_else(|| {
                StoreError::validation("No event id left: the largest possible id is already in use")
            })?;
        let event = draft.into_event(id);
        events.push(event.clone());
        self.persist(events).await?;

        tracing::info!(id = event.id, title = event.title().unwrap_or_default(), "Event added");
        Ok(event)
    }

    /// Remove the event with `id`. Absent ids are not an error; returns whether one was removed.
    pub async fn delete(&self, id: EventId) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut events = self.read_all().await?;
        let before = events.len();
        events.retain(|e| e.id != id);
        let removed = events.len() != before;
        self.persist(events).await?;

        if removed {
            tracing::info!(id, "Event deleted");
        } else {
            tracing::debug!(id, "Delete requested for unknown event");
        }
        Ok(removed)
    }

    /// Replace the whole collection with caller-supplied events.
    pub async fn reorder(&self, events: Vec<Event>) -> Result<Vec<Event>, StoreError> {
        let _guard = self.write_lock.lock().await;
        self.persist(events).await
    }

    async fn persist(&self, mut events: Vec<Event>) -> Result<Vec<Event>, StoreError> {
        events.sort_by_key(|e| e.order);
        tracing::debug!(count = events.len(), path = %self.path.display(), "Saving events");

        let json = serde_json::to_vec_pretty(&events).map_err(|e| self.io_error(e.into()))?;
        write_atomically(&self.path, &json)
            .await
            .map_err(|e| self.io_error(e))?;
        Ok(events)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
