//! System clipboard via arboard

use super::traits::{ClipboardSink, DeliveryError};
use arboard::Clipboard;
use async_trait::async_trait;

/// Writes to the desktop clipboard
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[async_trait]
impl ClipboardSink for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), DeliveryError> {
        let text = text.to_string();
        // arboard talks to the display server synchronously
        tokio::task::spawn_blocking(move || {
            let mut clipboard = Clipboard::new()
                .map_err(|e| DeliveryError::ClipboardUnavailable(e.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|e| DeliveryError::ClipboardRejected(e.to_string()))
        })
        .await?
    }
}
