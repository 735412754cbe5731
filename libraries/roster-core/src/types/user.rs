/// User domain type
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identifier, assigned by the store starting at 1
pub type UserId = i64;

/// Registered user record
///
/// Records are immutable once the store hands them out; every field is fixed
/// at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Creation timestamp (serialized as RFC3339)
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a user stamped with the current time
    pub(crate) fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
