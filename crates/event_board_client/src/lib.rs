//! Client core for the event board: HTTP API client, page state for the public and
//! admin views, and a plain-text renderer.

pub mod api;
pub mod board;
pub mod models;
pub mod render;

pub use api::{EventBoardClient, StatusError};
pub use board::{Board, Mode, Notice};
pub use models::{AdminRow, Event, EventCard, EventDraft, EventId};
