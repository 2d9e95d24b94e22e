use compact_str::CompactString;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PollError>;

/// Everything that can go wrong during a poll cycle.
///
/// All of these are caught at the loop boundary, logged and suppressed;
/// none of them is fatal to the process.
#[derive(Debug, Clone, Error)]
pub enum PollError {
    #[error("request to the homework API failed: {0}")]
    Api(CompactString),

    #[error("homework API answered with HTTP {status}")]
    UnexpectedStatus { status: u16 },

    #[error("{context}: expected {expected}")]
    TypeMismatch {
        context: &'static str,
        expected: &'static str,
    },

    #[error("response is missing the `{key}` field")]
    MissingKey { key: &'static str },

    #[error("bad homework record: {0}")]
    Status(CompactString),

    #[error("failed to deliver notification: {0}")]
    Notification(CompactString),
}

impl PollError {
    pub fn api(message: impl std::fmt::Display) -> Self {
        Self::Api(message.to_string().into())
    }

    pub fn type_mismatch(context: &'static str, expected: &'static str) -> Self {
        Self::TypeMismatch { context, expected }
    }

    pub fn status(message: impl std::fmt::Display) -> Self {
        Self::Status(message.to_string().into())
    }

    pub fn notification(message: impl std::fmt::Display) -> Self {
        Self::Notification(message.to_string().into())
    }
}
