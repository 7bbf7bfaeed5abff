// VAPIX request and response types
//
// Response lists arrive keyed by a capitalised collection name
// (`{"Door": [...]}`). Collections use `#[serde(default)]` so a device that
// omits an empty list still decodes; unknown fields are ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Door control ─────────────────────────────────────────────────────

/// `axtdc:GetDoorList` reply.
#[derive(Debug, Deserialize)]
pub struct DoorList {
    #[serde(rename = "Door", default)]
    pub doors: Vec<Door>,
}

/// A physical door known to the controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Door {
    pub token: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
}

// ── PACS ─────────────────────────────────────────────────────────────

/// `axudb:GetUserList` reply.
#[derive(Debug, Deserialize)]
pub struct UserList {
    #[serde(rename = "User", default)]
    pub users: Vec<User>,
}

/// A credential holder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub token: String,
    #[serde(rename = "Name", default)]
    pub name: String,
}

/// `pacsaxis:GetAccessPointList` reply.
#[derive(Debug, Deserialize)]
pub struct AccessPointList {
    #[serde(rename = "AccessPoint", default)]
    pub access_points: Vec<AccessPoint>,
}

/// A logical entry point. `entity` is the token of the door it controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessPoint {
    pub token: String,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Entity", default)]
    pub entity: String,
}

// ── Event logger ─────────────────────────────────────────────────────

/// `axlog:FetchEvents3` request envelope.
#[derive(Debug, Clone, Serialize)]
pub struct FetchEventsRequest {
    #[serde(rename = "axlog:FetchEvents3")]
    pub fetch: FetchEvents,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FetchEvents {
    pub filter_sets: Vec<FilterSet>,
    pub descending: bool,
    pub include_human_readable_time: bool,
    pub convert_filter_time_from_local: bool,
}

/// Events matching every filter in the set, starting at `start`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilterSet {
    pub start: String,
    pub filters: Vec<EventFilter>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventFilter {
    pub key: String,
    pub value: String,
}

impl EventFilter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl FetchEventsRequest {
    /// Granted and denied access decisions since `start`, newest first,
    /// with human-readable local timestamps.
    pub fn access_decisions(start: &str) -> Self {
        let filter_set = |topic: &str| FilterSet {
            start: start.to_owned(),
            filters: vec![EventFilter::new("topic1", topic)],
        };

        Self {
            fetch: FetchEvents {
                filter_sets: vec![filter_set("AccessGranted"), filter_set("Denied")],
                descending: true,
                include_human_readable_time: true,
                convert_filter_time_from_local: true,
            },
        }
    }
}

/// `axlog:FetchEvents3` reply.
#[derive(Debug, Deserialize)]
pub struct EventList {
    #[serde(rename = "Event", default)]
    pub events: Vec<Event>,
}

/// One logged device event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "rowid")]
    pub row_id: i64,
    #[serde(rename = "HumanReadableTime", default)]
    pub human_readable_time: Option<String>,
    #[serde(rename = "KeyValues", default)]
    pub key_values: Vec<KeyValue>,
}

/// Event attribute. Values are usually strings but the logger does not
/// promise it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyValue {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value", default)]
    pub value: Value,
}

impl KeyValue {
    /// The value as display text. Strings are returned unquoted.
    pub fn value_text(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}
