//! In-memory user registry
//!
//! A single reader/writer lock guards both the record map and the id counter,
//! so an id is consumed exactly when its record becomes visible.

use crate::types::{User, UserId};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Concurrency-safe registry of [`User`] records
///
/// Writers (`create`) exclude everyone; readers (`get_by_id`, `list`) share
/// access. Nothing is held across I/O, so every operation completes as soon
/// as the lock is acquired.
#[derive(Debug, Default)]
pub struct UserStore {
    inner: RwLock<Registry>,
}

#[derive(Debug)]
struct Registry {
    users: HashMap<UserId, User>,
    next_id: UserId,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            users: HashMap::new(),
            next_id: 1,
        }
    }
}

impl UserStore {
    /// Create an empty store whose first assigned id is 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user and return the stored record
    ///
    /// The caller is responsible for rejecting empty names.
    pub async fn create(&self, name: impl Into<String>) -> User {
        let mut registry = self.inner.write().await;

        let id = registry.next_id;
        registry.next_id += 1;

        let user = User::new(id, name);
        registry.users.insert(id, user.clone());
        drop(registry);

        debug!("Created user {} ({})", user.id, user.name);
        user
    }

    /// Look up a user by id; `None` when the id was never issued
    pub async fn get_by_id(&self, id: UserId) -> Option<User> {
        self.inner.read().await.users.get(&id).cloned()
    }

    /// Snapshot of every stored user, in no particular order
    pub async fn list(&self) -> Vec<User> {
        self.inner.read().await.users.values().cloned().collect()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    /// Whether no user has been created yet
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.users.is_empty()
    }
}
