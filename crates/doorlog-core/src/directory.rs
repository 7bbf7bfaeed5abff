// ── Token directories ──
//
// Flat token → value lookups built once from the device's reference lists
// and read-only afterwards. Misses resolve to a placeholder.

use std::collections::HashMap;

use vapix_api::{AccessPoint, Door, User};

/// Rendered in place of any value that cannot be resolved.
pub const PLACEHOLDER: &str = "?key?";

/// Token → value mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    entries: HashMap<String, String>,
}

impl Directory {
    /// Value for `token`, or [`PLACEHOLDER`].
    pub fn resolve(&self, token: &str) -> &str {
        self.get(token).unwrap_or(PLACEHOLDER)
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Door token → door name.
    pub fn from_doors(doors: Vec<Door>) -> Self {
        doors.into_iter().map(|d| (d.token, d.name)).collect()
    }

    /// User token → user name.
    pub fn from_users(users: Vec<User>) -> Self {
        users.into_iter().map(|u| (u.token, u.name)).collect()
    }

    /// Access point token → door entity token.
    pub fn from_access_points(points: Vec<AccessPoint>) -> Self {
        points.into_iter().map(|p| (p.token, p.entity)).collect()
    }
}

impl FromIterator<(String, String)> for Directory {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Directory {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }
}

/// The three reference lists needed to join events.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub users: Directory,
    pub doors: Directory,
    pub access_points: Directory,
}

impl ReferenceData {
    /// Door name behind an access point: access point → door entity → name.
    pub fn door_name(&self, access_point_token: &str) -> &str {
        let entity = self.access_points.resolve(access_point_token);
        self.doors.resolve(entity)
    }

    /// Credential holder name for a user token.
    pub fn user_name(&self, user_token: &str) -> &str {
        self.users.resolve(user_token)
    }
}
