pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod routes;
pub mod services;
pub mod storage;
pub mod stores;
pub mod types;
