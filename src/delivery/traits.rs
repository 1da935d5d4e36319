//! Trait abstraction for output sinks to enable mocking in tests

use async_trait::async_trait;
use std::process::ExitStatus;
use thiserror::Error;

/// Failures while handing the report to the outside world
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Clipboard is not available: {0}")]
    ClipboardUnavailable(String),

    #[error("Clipboard rejected the text: {0}")]
    ClipboardRejected(String),

    #[error("Could not start mail client `{command}`: {source}")]
    LaunchFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Mail client `{command}` exited with {status}")]
    LauncherExited { command: String, status: ExitStatus },

    #[error("No mail client command configured")]
    NoLauncher,

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Destination for the copy action
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClipboardSink: Send + Sync {
    /// Replace the clipboard contents with `text`
    async fn write_text(&self, text: &str) -> Result<(), DeliveryError>;
}

/// Opens `mailto:` links in the user's mail client
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailLauncher: Send + Sync {
    async fn open(&self, uri: &str) -> Result<(), DeliveryError>;
}
