pub mod auth;
pub mod column;
pub mod project;
pub mod tag;
pub mod task;
