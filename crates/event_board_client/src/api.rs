//! HTTP client for the event board API (events, admin password).

use anyhow::{Context, Result};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

use crate::models::{Event, EventDraft, EventId};

/// Non-2xx answer from the server, kept intact so callers can branch on the status.
#[derive(Debug)]
pub struct StatusError {
    pub status: StatusCode,
    pub body: String,
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.status, self.body)
    }
}

impl std::error::Error for StatusError {}

#[derive(Clone)]
pub struct EventBoardClient {
    http: reqwest::Client,
    base_url: String,
}

impl EventBoardClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /events
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let resp = self.http.get(self.url("/events")).send().await?;
        parse_json(resp).await.context("Failed to fetch events")
    }

    /// POST /saveEvent -> the stored event with its server-assigned id
    pub async fn save_event(&self, draft: &EventDraft) -> Result<Event> {
        let body = serde_json::json!({ "event": draft });
        let resp = self.http.post(self.url("/saveEvent")).json(&body).send().await?;
        parse_json(resp).await.context("Failed to save event")
    }

    /// DELETE /deleteEvent/:id
    pub async fn delete_event(&self, id: EventId) -> Result<()> {
        let resp = self
            .http
            .delete(self.url(&format!("/deleteEvent/{}", id)))
            .send()
            .await?;
        expect_success(resp).await.context("Failed to delete event")?;
        Ok(())
    }

    /// POST /updateEvents with the whole collection
    pub async fn update_events(&self, events: &[Event]) -> Result<()> {
        let resp = self.http.post(self.url("/updateEvents")).json(events).send().await?;
        expect_success(resp).await.context("Failed to update events")?;
        Ok(())
    }

    /// GET /readPass -> { password }
    pub async fn read_password(&self) -> Result<String> {
        let resp = self.http.get(self.url("/readPass")).send().await?;
        let json: serde_json::Value = parse_json(resp).await.context("Failed to read password")?;
        let password = json
            .get("password")
            .and_then(|v| v.as_str())
            .context("No password in response")?;
        Ok(password.to_string())
    }

    /// POST /updatePassword
    pub async fn update_password(&self, new_password: &str) -> Result<()> {
        let body = serde_json::json!({ "newPassword": new_password });
        let resp = self.http.post(self.url("/updatePassword")).json(&body).send().await?;
        expect_success(resp).await.context("Failed to update password")?;
        Ok(())
    }

    /// POST /verifyPassword -> { valid }
    pub async fn verify_password(&self, candidate: &str) -> Result<bool> {
        let body = serde_json::json!({ "password": candidate });
        let resp = self.http.post(self.url("/verifyPassword")).json(&body).send().await?;
        let json: serde_json::Value = parse_json(resp).await.context("Failed to verify password")?;
        json.get("valid")
            .and_then(|v| v.as_bool())
            .context("No valid flag in response")
    }
}

async fn expect_success(resp: Response) -> Result<String> {
    let status = resp.status();
    let text = resp.text().await?;
    if !status.is_success() {
        return Err(StatusError { status, body: text }.into());
    }
    Ok(text)
}

async fn parse_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let text = expect_success(resp).await?;
    Ok(serde_json::from_str(&text)?)
}

/// Status of a failed request, if the server answered at all.
pub fn error_status(err: &anyhow::Error) -> Option<StatusCode> {
    err.downcast_ref::<StatusError>().map(|e| e.status)
}
