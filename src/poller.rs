//! The poll loop: fetch, validate, notify, sleep

use std::time::Duration;

use chrono::Utc;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument};

use crate::{
    client::HomeworkApi,
    homework::{render_status, validate_response},
    notify::TelegramNotifier,
    result::Result,
};

pub const NO_CHANGES_MESSAGE: &str = "No changes yet";

/// Drives the fetch → validate → notify cycle forever.
///
/// Any [`PollError`](crate::result::PollError) raised inside a cycle is
/// logged and swallowed; the loop only ends when the process is killed.
#[derive(Debug)]
pub struct StatusPoller {
    api: HomeworkApi,
    notifier: TelegramNotifier,
    /// `from_date` sent to the API each cycle
    cursor: i64,
    interval: Duration,
    /// When false (the default), the cursor stays at the startup timestamp
    /// for the whole process lifetime and every cycle re-requests the same
    /// window. That matches the behavior this bot has always had; set to
    /// true to move the cursor to "now" after each successful cycle.
    advance_cursor: bool,
}

impl StatusPoller {
    pub fn new(
        api: HomeworkApi,
        notifier: TelegramNotifier,
        interval: Duration,
        advance_cursor: bool,
    ) -> Self {
        Self {
            api,
            notifier,
            cursor: Utc::now().timestamp(),
            interval,
            advance_cursor,
        }
    }

    /// Override the startup cursor
    pub fn with_cursor(mut self, cursor: i64) -> Self {
        self.cursor = cursor;
        self
    }

    /// Current `from_date` cursor.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Run cycles until the process is killed.
    pub async fn run(mut self) {
        info!(
            interval_secs = self.interval.as_secs(),
            advance_cursor = self.advance_cursor,
            "entering poll loop"
        );

        loop {
            self.run_once().await;
            sleep(self.interval).await;
        }
    }

    /// Run a single cycle, absorbing every error into a log line.
    ///
    /// Failures are never forwarded to the chat; recipients only see status
    /// changes and "no changes yet".
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub async fn run_once(&mut self) {
        if let Err(e) = self.cycle().await {
            error!(error = %e, "poll cycle failed");
        }
    }

    async fn cycle(&mut self) -> Result<()> {
        let response = self.api.homework_statuses(self.cursor).await?;
        let homeworks = validate_response(&response)?;

        if homeworks.is_empty() {
            debug!("no homework updates yet");
            self.notifier.send(NO_CHANGES_MESSAGE).await?;
        } else {
            // Only the first record is reported; the rest of the batch is
            // dropped on the floor, as this bot has always done.
            let message = render_status(&homeworks[0])?;
            self.notifier.send(&message).await?;
        }

        if self.advance_cursor {
            self.cursor = Utc::now().timestamp();
        }

        Ok(())
    }
}
