//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for command shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COMMAND_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COMMAND_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Export shortcut display
/// - macOS: "Cmd+E"
/// - Linux/Windows: "Ctrl+E"
#[cfg(target_os = "macos")]
pub const EXPORT_SHORTCUT: &str = "Cmd+E";

#[cfg(not(target_os = "macos"))]
pub const EXPORT_SHORTCUT: &str = "Ctrl+E";

/// Remove-row shortcut display
#[cfg(target_os = "macos")]
pub const REMOVE_ROW_SHORTCUT: &str = "Cmd+D";

#[cfg(not(target_os = "macos"))]
pub const REMOVE_ROW_SHORTCUT: &str = "Ctrl+D";

/// Step jump shortcut display; Alt is used so digits stay typeable
pub const JUMP_SHORTCUT: &str = "Alt+1-9";

/// Whether `modifiers` carries the command modifier. Ctrl is always accepted
/// so terminals that never report Cmd still work on macOS.
pub fn is_command(modifiers: KeyModifiers) -> bool {
    modifiers.contains(COMMAND_MODIFIER) || modifiers.contains(KeyModifiers::CONTROL)
}
