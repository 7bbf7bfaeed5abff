// ── Event join and line formatting ──
//
// Each event is joined against the reference directories and rendered as
// one fixed-width line. Events with an unrecognised card use a short
// form carrying the raw card number; everything else resolves the
// credential holder and uses the long form. Widths are minimums, values
// are never truncated.

use std::collections::HashMap;
use std::fmt;

use vapix_api::Event;

use crate::directory::{PLACEHOLDER, ReferenceData};

const CREDENTIAL_NOT_FOUND: &str = "CredentialNotFound";

/// An event's `KeyValues` flattened into a lookup.
///
/// Later duplicates of a key win.
#[derive(Debug, Clone, Default)]
pub struct EventAttributes {
    values: HashMap<String, String>,
}

impl EventAttributes {
    pub fn from_event(event: &Event) -> Self {
        Self {
            values: event
                .key_values
                .iter()
                .map(|kv| (kv.key.clone(), kv.value_text()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value for `key`, or [`PLACEHOLDER`].
    pub fn resolve(&self, key: &str) -> &str {
        self.get(key).unwrap_or(PLACEHOLDER)
    }
}

/// One joined event, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    /// The presented card is not enrolled; no holder to resolve.
    UnknownCredential {
        row_id: i64,
        time: String,
        door: String,
        card: String,
        topic1: String,
        topic2: String,
    },
    /// A known credential (or an event without a credential verdict).
    Credentialed {
        row_id: i64,
        time: String,
        door: String,
        user: String,
        credential_type: String,
        topic1: String,
        topic2: String,
    },
}

impl ReportLine {
    /// Join `event` against the reference directories.
    pub fn join(event: &Event, reference: &ReferenceData) -> Self {
        let attrs = EventAttributes::from_event(event);

        let row_id = event.row_id;
        let time = event
            .human_readable_time
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_owned());
        let door = reference
            .door_name(attrs.resolve("AccessPointToken"))
            .to_owned();
        let topic1 = attrs.resolve("topic1").to_owned();
        let topic2 = attrs.resolve("topic2").to_owned();

        if attrs.get("topic2") == Some(CREDENTIAL_NOT_FOUND) {
            Self::UnknownCredential {
                row_id,
                time,
                door,
                card: attrs.resolve("Card").to_owned(),
                topic1,
                topic2,
            }
        } else {
            Self::Credentialed {
                row_id,
                time,
                door,
                user: reference
                    .user_name(attrs.resolve("CredentialHolderName"))
                    .to_owned(),
                credential_type: attrs.resolve("CredentialType").to_owned(),
                topic1,
                topic2,
            }
        }
    }

    pub fn row_id(&self) -> i64 {
        match self {
            Self::UnknownCredential { row_id, .. } | Self::Credentialed { row_id, .. } => *row_id,
        }
    }
}

/// Join every event in device order.
pub fn lines<'a>(
    events: &'a [Event],
    reference: &'a ReferenceData,
) -> impl Iterator<Item = ReportLine> + 'a {
    events.iter().map(|event| ReportLine::join(event, reference))
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCredential {
                row_id,
                time,
                door,
                card,
                topic1,
                topic2,
            } => write!(
                f,
                "{row_id:8}, {time:16}, {door:32}, {card:16}, {topic1:14}, {topic2:19}"
            ),
            Self::Credentialed {
                row_id,
                time,
                door,
                user,
                credential_type,
                topic1,
                topic2,
            } => write!(
                f,
                "{row_id:8}, {time:16}, {door:32}, '{user:32}', {credential_type:24}, {topic1:14}, {topic2:19}"
            ),
        }
    }
}
