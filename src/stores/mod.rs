//! In-memory state containers. Each store owns its state and mutates it only
//! through its own actions; actions catch every service error, translate it,
//! and record it for display instead of letting it escape.

pub mod auth;
pub mod project;
pub mod user;

pub use auth::{AuthStore, UserProfile};
pub use project::ProjectStore;
pub use user::UserStore;
