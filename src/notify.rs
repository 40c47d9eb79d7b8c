//! Push notifications
//!
//! Message composition plus the outbound Pushbullet call. The runner talks to
//! the [`Push`] trait so the notification policy can be exercised without a
//! network.

use crate::error::{ConfigError, NotifyError, NotifyResult};
use colored::Colorize;
use serde_json::json;
use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Fixed push endpoint
pub const PUSH_URL: &str = "https://api.pushbullet.com/v2/pushes";

/// Credential file read from the home directory when no key is supplied
pub const KEY_FILE: &str = "api.pub";

/// Environment variable supplying the api key programmatically
pub const API_KEY_ENV: &str = "PLING_API_KEY";

/// Anything that can deliver a title/body notification
pub trait Push {
    fn push(&self, title: &str, body: &str) -> NotifyResult<()>;
}

/// Compose the final (title, body) pair for one notification.
///
/// The two adjustments are independent and may combine: `include_code` appends
/// the return code to the body, `per_task` appends the 1-based task number to
/// the title.
pub fn compose(
    title: &str,
    body: &str,
    return_code: i32,
    task_number: usize,
    include_code: bool,
    per_task: bool,
) -> (String, String) {
    let body = if include_code {
        format!("{} : Returned {}", body, return_code)
    } else {
        body.to_string()
    };
    let title = if per_task {
        format!("{} : Task {}", title, task_number)
    } else {
        title.to_string()
    };
    (title, body)
}

/// Live notifier that posts notes to the Pushbullet API
pub struct Notifier {
    api_key: String,
    url: String,
    client: reqwest::blocking::Client,
}

impl Notifier {
    /// Create a notifier with an explicit api key
    pub fn new(api_key: impl Into<String>) -> Self {
        Notifier {
            api_key: api_key.into(),
            url: PUSH_URL.to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Create a notifier from the credential in the home directory.
    ///
    /// `PLING_API_KEY` wins when set; otherwise `api.pub` is read and trimmed.
    /// Neither being present is a fatal configuration error.
    pub fn from_home(dir: &Path) -> Result<Self, ConfigError> {
        if let Ok(key) = env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                return Ok(Notifier::new(key.trim()));
            }
        }

        let key_path = dir.join(KEY_FILE);
        let raw = fs::read_to_string(&key_path)
            .map_err(|_| ConfigError::MissingApiKey(key_path.clone()))?;
        Ok(Notifier::new(raw.trim()))
    }

    /// Point the notifier at a different endpoint (used by tests)
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

impl Push for Notifier {
    fn push(&self, title: &str, body: &str) -> NotifyResult<()> {
        let response = self
            .client
            .post(&self.url)
            .basic_auth(&self.api_key, Some(""))
            .json(&json!({ "title": title, "body": body, "type": "note" }))
            .send()?;

        // Status is reported but never interpreted; a 4xx/5xx does not
        // affect the run.
        eprintln!("{} {}", "[PUSH]".cyan(), response.status());
        Ok(())
    }
}

/// Report a failed send. Never fatal; with `verbose` the full source chain
/// (including TLS/certificate detail) is printed.
pub fn log_send_failure(err: &NotifyError, verbose: bool) {
    eprintln!("{} {}", "[PUSH]".cyan(), format!("send failed: {}", err).red());
    if verbose {
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("{} caused by: {}", "[PUSH]".cyan(), cause);
            source = cause.source();
        }
    }
}
