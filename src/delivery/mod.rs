//! Delivery of the rendered report to the clipboard and the mail client

mod clipboard;
mod mail;
mod traits;

pub use clipboard::SystemClipboard;
pub use mail::SystemMailLauncher;
pub use traits::{ClipboardSink, MailLauncher};

#[cfg(test)]
pub use traits::{DeliveryError, MockClipboardSink, MockMailLauncher};
