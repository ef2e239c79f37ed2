//! Strongly-typed wrappers for player identity
//!
//! Newtypes to prevent type confusion between the different string and UUID
//! concepts floating through the security layer. A `PlayerId` is a stable
//! identity; a `Username` is only a display-time label that can change
//! between sessions.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identity of a player or owner
///
/// Backed by a UUID so identities survive renames. All trust decisions key
/// off this, never off the username.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(Uuid);

impl PlayerId {
    pub fn new(id: Uuid) -> Self {
        PlayerId(id)
    }

    /// Generate a fresh random identity
    pub fn random() -> Self {
        PlayerId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for PlayerId {
    fn from(id: Uuid) -> Self {
        PlayerId(id)
    }
}

/// Display name of a player (distinct from other string types)
///
/// Cached alongside trusted identities so client screens can render a trust
/// list without ever seeing the underlying UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    pub fn new(s: impl Into<String>) -> Self {
        Username(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Username {
    fn from(s: String) -> Self {
        Username(s)
    }
}

impl From<&str> for Username {
    fn from(s: &str) -> Self {
        Username(s.to_string())
    }
}
