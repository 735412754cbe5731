/// Shared application state
use roster_core::UserStore;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserStore>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(users: Arc<UserStore>) -> Self {
        Self {
            users,
            started_at: Instant::now(),
        }
    }

    /// Time elapsed since the state was built
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
