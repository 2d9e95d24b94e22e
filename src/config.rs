//! Process configuration loaded from the environment

use std::time::Duration;

use compact_str::CompactString;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Seconds between poll cycles.
pub const RETRY_PERIOD: u64 = 300;

const ENV_PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
const ENV_TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
const ENV_TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Everything the bot needs to run, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OAuth token for the homework API
    pub practicum_token: CompactString,
    /// Telegram bot token
    pub telegram_token: CompactString,
    /// Destination chat for notifications
    pub telegram_chat_id: CompactString,
    /// Homework statuses endpoint URL
    pub endpoint: CompactString,
    /// Telegram Bot API base URL
    pub telegram_api_url: CompactString,
    /// Pause between poll cycles
    pub poll_interval: Duration,
    /// Per-request timeout for outbound HTTP calls
    pub request_timeout: Duration,
    /// Move the `from_date` cursor forward after each successful cycle
    pub advance_cursor: bool,
}

/// A required environment variable is missing or empty.
///
/// This is the one condition that stops the process from starting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("required environment variable `{0}` is missing or empty")]
pub struct MissingCredential(pub &'static str);

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// All three credentials must be present and non-empty; the first one
    /// that is not aborts the load.
    pub fn from_env() -> Result<Self, MissingCredential> {
        Ok(Self {
            practicum_token: require_env(ENV_PRACTICUM_TOKEN)?,
            telegram_token: require_env(ENV_TELEGRAM_TOKEN)?,
            telegram_chat_id: require_env(ENV_TELEGRAM_CHAT_ID)?,
            endpoint: DEFAULT_ENDPOINT.into(),
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.into(),
            poll_interval: Duration::from_secs(RETRY_PERIOD),
            request_timeout: Duration::from_secs(10),
            advance_cursor: false,
        })
    }
}

fn require_env(name: &'static str) -> Result<CompactString, MissingCredential> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value.into()),
        _ => Err(MissingCredential(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_names_the_culprit() {
        let err = MissingCredential(ENV_TELEGRAM_CHAT_ID);
        assert_eq!(
            err.to_string(),
            "required environment variable `TELEGRAM_CHAT_ID` is missing or empty"
        );
    }

    #[test]
    fn from_env_rejects_empty_credentials() {
        // Env mutation is process-global, so cover all three variables in a
        // single test body.
        // SAFETY: tests in this module run on the test harness threads, but
        // nothing else reads these variables concurrently.
        unsafe {
            std::env::set_var(ENV_PRACTICUM_TOKEN, "practicum-secret");
            std::env::set_var(ENV_TELEGRAM_TOKEN, "telegram-secret");
            std::env::set_var(ENV_TELEGRAM_CHAT_ID, "  ");
        }
        assert_eq!(
            AppConfig::from_env().unwrap_err(),
            MissingCredential(ENV_TELEGRAM_CHAT_ID)
        );

        unsafe {
            std::env::set_var(ENV_TELEGRAM_CHAT_ID, "4242");
            std::env::remove_var(ENV_TELEGRAM_TOKEN);
        }
        assert_eq!(
            AppConfig::from_env().unwrap_err(),
            MissingCredential(ENV_TELEGRAM_TOKEN)
        );

        unsafe {
            std::env::set_var(ENV_TELEGRAM_TOKEN, "telegram-secret");
        }
        let config = AppConfig::from_env().expect("all credentials set");
        assert_eq!(config.practicum_token, "practicum-secret");
        assert_eq!(config.telegram_chat_id, "4242");
        assert_eq!(config.poll_interval, Duration::from_secs(300));
        assert!(!config.advance_cursor);
    }
}
