use std::time::Duration;

use chrono::Utc;
use serde_json::Value;

use courier_client::StatusClient;
use courier_client::status::parse_status;
use courier_client::validate::validate;
use courier_common::config::AppConfig;
use courier_common::error::CourierError;
use courier_notifier::TelegramNotifier;

/// Fixed text sent when a cycle finds no homework entries.
const NO_NEW_STATUSES: &str = "No new statuses";

/// Polling loop that relays review status changes to the chat.
///
/// Single state, infinite cycle: fetch, validate, notify, sleep, repeat.
/// Nothing is retried within a cycle; the next cycle is the implicit retry.
pub struct StatusPoller {
    client: StatusClient,
    notifier: TelegramNotifier,
    poll_interval: Duration,
}

impl StatusPoller {
    pub fn new(client: StatusClient, notifier: TelegramNotifier, config: &AppConfig) -> Self {
        Self {
            client,
            notifier,
            poll_interval: Duration::from_secs(config.poll_interval_secs),
        }
    }

    /// Start the polling loop. Runs indefinitely until the task is cancelled.
    pub async fn run(&self) -> anyhow::Result<()> {
        let mut cursor = Utc::now().timestamp();

        tracing::info!(
            cursor,
            poll_interval_secs = self.poll_interval.as_secs(),
            "Status poller started"
        );

        loop {
            cursor = self.tick(cursor).await;
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Run one cycle and apply the notification policy to any failure.
    /// Returns the cursor the next cycle polls from.
    ///
    /// Must-notify errors are logged and forwarded to the chat best-effort;
    /// a failure of that secondary send is only logged, so a delivery outage
    /// can never halt the loop. Structural errors are logged and nothing more.
    pub async fn tick(&self, cursor: i64) -> i64 {
        match self.run_cycle(cursor).await {
            Ok(next) => next,
            Err(err) if err.must_notify() => {
                tracing::error!(error = %err, cursor, "Poll cycle failed");
                if let Err(send_err) = self.notifier.send(&err.to_string()).await {
                    tracing::error!(error = %send_err, "Could not forward the error to the chat");
                }
                cursor
            }
            Err(err) => {
                tracing::error!(error = %err, cursor, "Poll cycle failed");
                cursor
            }
        }
    }

    /// One fetch, validate, notify pass.
    ///
    /// Only the first homework entry is inspected; an empty list still
    /// produces a fixed "no new statuses" message. The cursor advances to
    /// the server-reported `current_date` only after the cycle's message was
    /// delivered, so any failure leaves the polling window unchanged.
    pub async fn run_cycle(&self, cursor: i64) -> Result<i64, CourierError> {
        let response = self.client.fetch(cursor).await?;
        let homeworks = validate(&response)?;

        match homeworks.first() {
            Some(entry) => self.notifier.send(&parse_status(entry)?).await?,
            None => {
                tracing::debug!(cursor, "No new statuses");
                self.notifier.send(NO_NEW_STATUSES).await?;
            }
        }

        // The next window starts where the server says this one ended. A
        // current_date that is present but not an integer keeps the previous
        // cursor instead of poisoning the next request.
        let next = match response.get("current_date").and_then(Value::as_i64) {
            Some(server_now) => server_now,
            None => {
                tracing::warn!(cursor, "Server reported an unusable current_date, keeping cursor");
                cursor
            }
        };

        Ok(next)
    }
}
