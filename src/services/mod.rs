//! Thin service functions, one HTTP call per endpoint. No batching, retry,
//! or caching; errors propagate as [`crate::error::ApiError`].

pub mod auth;
pub mod board_column;
pub mod project;
pub mod tag;
pub mod task;
pub mod user;
