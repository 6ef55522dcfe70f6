//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier that turns Enter into "send" from any field
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SEND_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SEND_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Send-from-anywhere shortcut display
#[cfg(target_os = "macos")]
pub const SEND_SHORTCUT: &str = "Cmd+Enter";

#[cfg(not(target_os = "macos"))]
pub const SEND_SHORTCUT: &str = "Ctrl+Enter";
