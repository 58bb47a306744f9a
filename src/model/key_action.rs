//! Domain-level keyboard actions.
//!
//! Keyboard events are translated to these actions by
//! [`crate::config::KeyBindings`], so handlers never match on raw key
//! codes.

/// Action produced by a bound key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Scroll the page up by one step.
    ScrollUp,
    /// Scroll the page down by one step.
    ScrollDown,
    /// Scroll up by a viewport height.
    PageUp,
    /// Scroll down by a viewport height.
    PageDown,
    /// Jump to the top of the page.
    ScrollToTop,
    /// Jump to the bottom of the page.
    ScrollToBottom,
    /// Jump to the section after the active one.
    NextSection,
    /// Jump to the section before the active one.
    PrevSection,
    /// Quit the application.
    Quit,
}
