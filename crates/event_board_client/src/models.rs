//! Wire types for the event board API and the row models the two views render.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type EventId = i64;

/// Event as returned by `GET /events`. Only `id` and `order` are typed; every other
/// field is kept as the server stored it so a bulk update sends it back unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    #[serde(default)]
    pub order: i64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Event {
    /// Display text for `key`: strings as-is, other JSON values rendered, absent or null empty.
    pub fn text(&self, key: &str) -> String {
        match self.fields.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn title(&self) -> String {
        self.text("title")
    }
}

/// New event as entered in the admin form.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EventDraft {
    pub title: String,
    pub time: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub order: i64,
}

impl EventDraft {
    /// Form values are trimmed; an empty description is left out.
    pub fn from_form(title: &str, time: &str, location: &str, description: &str) -> Self {
        let description = description.trim();
        Self {
            title: title.trim().to_string(),
            time: time.trim().to_string(),
            location: location.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            order: 0,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.time.is_empty() && !self.location.is_empty()
    }
}

/// One entry of the public list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventCard {
    pub title: String,
    pub time: String,
    pub location: String,
    pub description: String,
}

/// One entry of the admin list: the card plus the delete target and the order input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminRow {
    pub id: EventId,
    pub card: EventCard,
    /// Current value of the order input; empty when the order is 0.
    pub order_input: String,
}

impl From<&Event> for EventCard {
    fn from(event: &Event) -> Self {
        Self {
            title: event.title(),
            time: event.text("time"),
            location: event.text("location"),
            description: event.text("description"),
        }
    }
}

impl From<&Event> for AdminRow {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            card: EventCard::from(event),
            order_input: if event.order == 0 {
                String::new()
            } else {
                event.order.to_string()
            },
        }
    }
}

/// Read an order input the way a number field is read: leading integer digits, else 0.
pub fn parse_order_input(input: &str) -> i64 {
    let s = input.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end]
        .parse::<i64>()
        .map(|n| sign * n)
        .unwrap_or(0)
}
