use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::StoreError;
use crate::models::ids::EventId;

/// A stored event. Bulk updates are trusted as-is: only `id` is structurally required,
/// `order` is coerced to an integer, and every other field is kept exactly as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    #[serde(default, deserialize_with = "crate::utils::order::deserialize")]
    pub order: i64,
    /// `title`, `time`, `location`, `description` and anything else the client stored.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Event {
    /// String value of `key`, if it is present and a string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.text("title")
    }
}

/// Event as submitted to `/saveEvent`. Any client-supplied `id` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EventDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::utils::order::deserialize")]
    pub order: i64,
}

impl EventDraft {
    pub fn new(title: &str, time: &str, location: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            time: Some(time.to_string()),
            location: Some(location.to_string()),
            ..Default::default()
        }
    }

    /// Title, time and location must all be present and non-blank.
    pub fn validate(&self) -> Result<(), StoreError> {
        let missing: Vec<&str> = [
            ("title", &self.title),
            ("time", &self.time),
            ("location", &self.location),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(StoreError::validation(format!(
                "Missing required event data: {}",
                missing.join(", ")
            )))
        }
    }

    pub fn into_event(self, id: EventId) -> Event {
        let mut fields = Map::new();
        for (key, value) in [
            ("title", self.title),
            ("time", self.time),
            ("location", self.location),
            ("description", self.description),
        ] {
            if let Some(value) = value {
                fields.insert(key.to_string(), Value::String(value));
            }
        }
        Event {
            id,
            order: self.order,
            fields,
        }
    }
}

/// Structural check for a bulk update body: a JSON array whose elements are objects
/// carrying at least a numeric `id`. Business fields are not revalidated.
pub fn parse_collection(body: Value) -> Result<Vec<Event>, StoreError> {
    let Value::Array(items) = body else {
        return Err(StoreError::validation("Expected an array of events"));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                return Err(StoreError::validation(format!(
                    "Event at index {} is not an object",
                    index
                )));
            }
            serde_json::from_value::<Event>(item).map_err(|e| {
                StoreError::validation(format!("Invalid event at index {}: {}", index, e))
            })
        })
        .collect()
}
