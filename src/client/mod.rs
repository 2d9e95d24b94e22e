//! Homework API client modules
//!
//! A thin HTTP client for the homework statuses endpoint, split into the
//! client itself and its configuration.

pub mod api;
pub mod config;

// Re-export main types for convenience
pub use api::HomeworkApi;
pub use config::ClientConfig;
