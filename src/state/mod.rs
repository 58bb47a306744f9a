//! Application state.
//!
//! [`AppState`] owns the animation machines, the section tracker, and
//! the scroll offset. It is created on startup and owned exclusively by
//! the running [`crate::view::App`]; nothing else aliases it and it dies
//! with the app.

pub mod scroll_handler;

use crate::anim::{QuoteRotator, Typewriter};
use crate::model::{AppError, Content, SectionId};
use crate::track::{SectionRange, SectionTracker};

pub use scroll_handler::handle_action;

/// Measured vertical layout of the page at the current width.
///
/// Produced fresh on every draw from the rendered section heights and
/// handed to the tracker as its layout provider. Never cached across
/// reflows: a resize produces a new layout.
#[derive(Debug, Clone, Default)]
pub struct SectionLayout {
    entries: Vec<(SectionId, SectionRange)>,
    /// Total page height in rows.
    pub total_height: usize,
}

impl SectionLayout {
    /// Create a layout from per-section ranges and the total height.
    pub fn new(entries: Vec<(SectionId, SectionRange)>, total_height: usize) -> Self {
        Self {
            entries,
            total_height,
        }
    }

    /// Current range for a section, if it was measured.
    pub fn range(&self, id: SectionId) -> Option<SectionRange> {
        self.entries
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, range)| *range)
    }

    /// Layout provider closure for [`SectionTracker::on_scroll`].
    pub fn provider(&self) -> impl FnMut(SectionId) -> Option<SectionRange> + '_ {
        move |id| self.range(id)
    }

    /// Measured sections in declaration order.
    pub fn entries(&self) -> &[(SectionId, SectionRange)] {
        &self.entries
    }
}

/// All mutable application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded portfolio content (read-only after startup).
    pub content: Content,
    /// Typewriter machine for the hero headline.
    pub typewriter: Typewriter,
    /// Rotating hero quote.
    pub quotes: QuoteRotator,
    /// Active-section tracker behind the nav highlight.
    pub tracker: SectionTracker,
    /// Scroll offset: index of the first visible page row.
    pub scroll: usize,
    /// Blink phase of the typewriter cursor glyph.
    pub cursor_visible: bool,
    /// Rows moved per scroll key press.
    pub scroll_step: usize,
}

impl AppState {
    /// Build initial state from loaded content.
    ///
    /// Fails fast if the content violates a core precondition (no
    /// typewriter titles).
    pub fn new(content: Content, scroll_step: usize, lookahead: usize) -> Result<Self, AppError> {
        let typewriter = Typewriter::new(content.profile.titles.clone())
            .map_err(|e| AppError::InvalidContent(e.to_string()))?;
        let quotes = QuoteRotator::new(content.quotes.clone());
        let tracker = SectionTracker::new(SectionId::ALL.to_vec(), lookahead)
            .map_err(|e| AppError::InvalidContent(e.to_string()))?;

        Ok(Self {
            content,
            typewriter,
            quotes,
            tracker,
            scroll: 0,
            cursor_visible: true,
            scroll_step: scroll_step.max(1),
        })
    }

    /// Toggle the typewriter cursor blink phase.
    pub fn toggle_cursor(&mut self) {
        self.cursor_visible = !self.cursor_visible;
    }
}
