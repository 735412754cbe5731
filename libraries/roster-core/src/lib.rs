//! Roster Core
//!
//! Transport-agnostic domain types and the in-memory user registry.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User` and its `UserId`
//! - **Store**: `UserStore`, the concurrency-safe registry that owns id assignment
//!
//! # Example
//!
//! ```rust
//! use roster_core::UserStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = UserStore::new();
//!
//! let ann = store.create("Ann").await;
//! assert_eq!(ann.id, 1);
//!
//! let found = store.get_by_id(ann.id).await;
//! assert_eq!(found.map(|u| u.name), Some("Ann".to_string()));
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod store;
pub mod types;

pub use store::UserStore;
pub use types::{User, UserId};
