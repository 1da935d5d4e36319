//! Launching the local mail client

use super::traits::{DeliveryError, MailLauncher};
use crate::platform::OPEN_COMMAND;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Hands `mailto:` links to the platform opener or a configured command
#[derive(Debug, Clone, Default)]
pub struct SystemMailLauncher {
    /// Overrides the platform opener, e.g. `thunderbird -compose`.
    /// The URI is appended as the last argument.
    pub command: Option<String>,
}

impl SystemMailLauncher {
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }

    /// Program and leading arguments to run
    fn command_parts(&self) -> Vec<String> {
        match self.command.as_deref().map(str::trim) {
            Some(custom) if !custom.is_empty() => {
                custom.split_whitespace().map(str::to_string).collect()
            }
            _ => OPEN_COMMAND.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[async_trait]
impl MailLauncher for SystemMailLauncher {
    async fn open(&self, uri: &str) -> Result<(), DeliveryError> {
        let parts = self.command_parts();
        let (program, args) = parts.split_first().ok_or(DeliveryError::NoLauncher)?;
        let command_line = parts.join(" ");
        tracing::debug!("launching mail client: {command_line}");

        let mut child = Command::new(program)
            .args(args)
            .arg(uri)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| DeliveryError::LaunchFailed {
                command: command_line.clone(),
                source,
            })?;

        // The mail client may stay open indefinitely; its exit is only logged.
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if !status.success() => {
                    let err = DeliveryError::LauncherExited {
                        command: command_line,
                        status,
                    };
                    tracing::warn!("{err}");
                }
                Ok(_) => {}
                Err(e) => tracing::warn!("waiting on mail client failed: {e}"),
            }
        });

        Ok(())
    }
}
