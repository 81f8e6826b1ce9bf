//! Calendar events, stored as opaque JSON objects.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::record::{Record, lenient_id};
use crate::resource::Resource;

/// A calendar event. Apart from `id`, fields are whatever the client sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl CalendarEvent {
    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }
}

impl Record for CalendarEvent {
    const RESOURCE: Resource = Resource::CalendarEvents;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
