//! hwbot — polls a homework review API and forwards status changes to a
//! Telegram chat.

pub mod client;
pub mod config;
pub mod homework;
pub mod notify;
pub mod poller;
pub mod result;

pub use config::AppConfig;
pub use poller::StatusPoller;
pub use result::{PollError, Result};
