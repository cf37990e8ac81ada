//! Newtype id for persisted shopping lists.
//!
//! Ids double as storage keys: one entry per list, keyed by the list's
//! own id. Generation lives in the store crate (it needs a clock and a
//! randomness source); this type only carries the value.

use serde::{Deserialize, Serialize};

/// Identifier of a persisted shopping list.
///
/// Generated ids have the form `list_<epoch-millis>_<9 random
/// alphanumerics>`. Collisions are negligible but not cryptographically
/// ruled out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(String);

impl ListId {
    /// Wrap an existing id value.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// The id as a storage key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ListId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ListId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}
