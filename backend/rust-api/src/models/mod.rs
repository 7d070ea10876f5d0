//! Shared types: events as stored in the collection file, drafts as submitted by clients, id helpers.

pub mod event;
pub mod ids;

pub use event::{parse_collection, Event, EventDraft};
pub use ids::EventId;
