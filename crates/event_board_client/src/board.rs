//! Page state shared by the public and admin views.
//!
//! Holds the last fetched collection only. Every successful mutation re-fetches the
//! whole collection; every failure leaves a notice for the user instead of failing silently.

use reqwest::StatusCode;

use crate::api::{error_status, EventBoardClient};
use crate::models::{parse_order_input, AdminRow, Event, EventCard, EventDraft, EventId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Public,
    Admin,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

pub const INCOMPLETE_EVENT: &str = "Please fill in Title, Time, and Location.";
pub const WRONG_PASSWORD: &str = "Incorrect password, please try again.";
pub const EMPTY_PASSWORD: &str = "Please enter a valid password";
pub const ADMIN_REQUIRED: &str = "Log in as admin first.";

pub struct Board {
    client: EventBoardClient,
    events: Vec<Event>,
    mode: Mode,
    notice: Option<Notice>,
}

impl Board {
    pub fn new(client: EventBoardClient) -> Self {
        Self {
            client,
            events: Vec::new(),
            mode: Mode::Public,
            notice: None,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn public_view(&self) -> Vec<EventCard> {
        self.events.iter().map(EventCard::from).collect()
    }

    pub fn admin_view(&self) -> Vec<AdminRow> {
        self.events.iter().map(AdminRow::from).collect()
    }

    /// Replace the cached collection with the server's. Keeps the old one on failure.
    pub async fn refresh(&mut self) -> bool {
        match self.client.list_events().await {
            Ok(events) => {
                log::debug!("Fetched {} events", events.len());
                self.events = events;
                true
            }
            Err(e) => self.fail("Could not load events", e),
        }
    }

    /// Compare the entered password with the stored one. Falls back to server-side
    /// verification when the server does not expose the password.
    pub async fn login(&mut self, entered: &str) -> bool {
        let matches = match self.client.read_password().await {
            Ok(stored) => Ok(entered == stored),
            Err(e) if error_status(&e) == Some(StatusCode::NOT_FOUND) => {
                self.client.verify_password(entered).await
            }
            Err(e) => Err(e),
        };

        match matches {
            Ok(true) => {
                self.mode = Mode::Admin;
                self.notice = None;
                true
            }
            Ok(false) => {
                self.notice = Some(Notice::Error(WRONG_PASSWORD.to_string()));
                false
            }
            Err(e) => self.fail("Could not check password", e),
        }
    }

    pub fn logout(&mut self) {
        self.mode = Mode::Public;
    }

    pub async fn add_event(&mut self, draft: EventDraft) -> bool {
        if !self.require_admin() {
            return false;
        }
        if !draft.is_complete() {
            self.notice = Some(Notice::Error(INCOMPLETE_EVENT.to_string()));
            return false;
        }

        match self.client.save_event(&draft).await {
            Ok(event) => {
                log::debug!("Saved event {}", event.id);
                self.refresh().await
            }
            Err(e) => self.fail("Could not save event", e),
        }
    }

    pub async fn delete_event(&mut self, id: EventId) -> bool {
        if !self.require_admin() {
            return false;
        }

        match self.client.delete_event(id).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.fail("Could not delete event", e),
        }
    }

    /// Apply the admin view's order inputs (event id, input text), sort locally and
    /// submit the whole collection. Events without an input keep their order.
    pub async fn reorder(&mut self, inputs: &[(EventId, String)]) -> bool {
        if !self.require_admin() {
            return false;
        }

        for event in &mut self.events {
            if let Some((_, input)) = inputs.iter().find(|(id, _)| *id == event.id) {
                event.order = parse_order_input(input);
            }
        }
        self.events.sort_by_key(|e| e.order);

        match self.client.update_events(&self.events).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.fail("Could not reorder events", e),
        }
    }

    pub async fn change_password(&mut self, new_password: &str) -> bool {
        if !self.require_admin() {
            return false;
        }
        let new_password = new_password.trim();
        if new_password.is_empty() {
            self.notice = Some(Notice::Error(EMPTY_PASSWORD.to_string()));
            return false;
        }

        match self.client.update_password(new_password).await {
            Ok(()) => {
                self.notice = Some(Notice::Info("Password updated successfully!".to_string()));
                true
            }
            Err(e) => self.fail("Failed to update the password", e),
        }
    }

    fn require_admin(&mut self) -> bool {
        if self.mode == Mode::Admin {
            return true;
        }
        self.notice = Some(Notice::Error(ADMIN_REQUIRED.to_string()));
        false
    }

    fn fail(&mut self, what: &str, err: anyhow::Error) -> bool {
        log::warn!("{}: {:#}", what, err);
        self.notice = Some(Notice::Error(format!("{}: {:#}", what, err)));
        false
    }
}
