//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for form shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the hint line
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Add-subject shortcut display
/// - macOS: "Cmd+N"
/// - Linux/Windows: "Ctrl+N"
#[cfg(target_os = "macos")]
pub const ADD_SUBJECT_SHORTCUT: &str = "Cmd+N";

#[cfg(not(target_os = "macos"))]
pub const ADD_SUBJECT_SHORTCUT: &str = "Ctrl+N";

/// Remove-subject shortcut display
/// - macOS: "Cmd+D"
/// - Linux/Windows: "Ctrl+D"
#[cfg(target_os = "macos")]
pub const REMOVE_SUBJECT_SHORTCUT: &str = "Cmd+D";

#[cfg(not(target_os = "macos"))]
pub const REMOVE_SUBJECT_SHORTCUT: &str = "Ctrl+D";

/// Password visibility toggle display
pub const TOGGLE_VISIBILITY_KEY: &str = "F2";
