//! Keyboard action handling.
//!
//! Pure functions that transform [`AppState`] in response to key
//! actions. The current [`SectionLayout`] is passed in by the caller so
//! the logic is testable with synthetic layouts and never measures
//! anything itself. Every scroll change re-notifies the tracker.

use crate::model::{KeyAction, SectionId};
use crate::state::{AppState, SectionLayout};

/// Apply a key action to the state.
///
/// `viewport_height` is the visible content height in rows, used for
/// page scrolling and for clamping so the viewport never scrolls past
/// the last page row. Returns `true` if the app should quit.
pub fn handle_action(
    state: &mut AppState,
    action: KeyAction,
    layout: &SectionLayout,
    viewport_height: usize,
) -> bool {
    let max_scroll = layout.total_height.saturating_sub(viewport_height);

    match action {
        KeyAction::Quit => return true,
        KeyAction::ScrollDown => {
            state.scroll = state.scroll.saturating_add(state.scroll_step).min(max_scroll);
        }
        KeyAction::ScrollUp => {
            state.scroll = state.scroll.saturating_sub(state.scroll_step);
        }
        KeyAction::PageDown => {
            state.scroll = state.scroll.saturating_add(viewport_height).min(max_scroll);
        }
        KeyAction::PageUp => {
            state.scroll = state.scroll.saturating_sub(viewport_height);
        }
        KeyAction::ScrollToTop => {
            state.scroll = 0;
        }
        KeyAction::ScrollToBottom => {
            state.scroll = max_scroll;
        }
        KeyAction::NextSection => {
            jump_relative(state, layout, max_scroll, 1);
        }
        KeyAction::PrevSection => {
            jump_relative(state, layout, max_scroll, -1);
        }
    }

    state.tracker.on_scroll(state.scroll, layout.provider());
    false
}

/// Jump to the section adjacent to the active one, saturating at the
/// first and last sections.
fn jump_relative(state: &mut AppState, layout: &SectionLayout, max_scroll: usize, delta: isize) {
    let sections = SectionId::ALL;
    let current = state.tracker.active().index();
    let target_index = if delta >= 0 {
        current.saturating_add(delta as usize).min(sections.len() - 1)
    } else {
        current.saturating_sub(delta.unsigned_abs())
    };

    if let Some(range) = layout.range(sections[target_index]) {
        state.scroll = range.top.min(max_scroll);
    }
}
