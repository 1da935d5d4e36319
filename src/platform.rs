//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the copy shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Copy shortcut display for the status bar
#[cfg(target_os = "macos")]
pub const COPY_SHORTCUT: &str = "Cmd+Y";

#[cfg(not(target_os = "macos"))]
pub const COPY_SHORTCUT: &str = "Ctrl+Y";

/// Open-in-email shortcut display. Ctrl+E works on all platforms.
pub const EMAIL_SHORTCUT: &str = "Ctrl+E";

/// Command used to hand a URI to the desktop's default handler
#[cfg(target_os = "macos")]
pub const OPEN_COMMAND: &[&str] = &["open"];

#[cfg(target_os = "windows")]
pub const OPEN_COMMAND: &[&str] = &["rundll32", "url.dll,FileProtocolHandler"];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub const OPEN_COMMAND: &[&str] = &["xdg-open"];
