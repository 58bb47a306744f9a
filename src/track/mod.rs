//! Active-section tracking.
//!
//! Maps the current scroll offset to the section the reader is looking
//! at, for the navigation bar highlight. The tracker never measures
//! layout itself: each evaluation takes a layout provider closure so the
//! ranges are re-read from the current layout every time (they change on
//! resize and reflow) and the matching logic stays unit-testable with a
//! plain function.

use crate::model::SectionId;
use thiserror::Error;

/// Vertical extent of one section in page rows: `[top, top + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRange {
    /// Row offset of the section's first line.
    pub top: usize,
    /// Number of rows the section occupies.
    pub height: usize,
}

impl SectionRange {
    /// Create a range from top offset and height.
    pub fn new(top: usize, height: usize) -> Self {
        Self { top, height }
    }

    /// Whether `probe` falls inside `[top, top + height)`.
    ///
    /// Zero-height ranges contain nothing, so empty sections are
    /// effectively skipped during matching.
    pub fn contains(&self, probe: usize) -> bool {
        probe >= self.top && probe < self.top.saturating_add(self.height)
    }
}

/// Error returned when constructing a tracker with no sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Section tracker requires at least one section")]
pub struct EmptySections;

/// Tracks which section is active for a given scroll offset.
///
/// The probe point is `scroll_offset + lookahead`: a fixed look-ahead
/// below the top of the viewport that compensates for the pinned
/// navigation bar. Sections are scanned in declaration order and the
/// first range containing the probe wins, which is also the tie-break
/// for overlapping ranges. When no range matches (gap in the layout,
/// past the last section, or missing layout data) the previously active
/// section is retained so the highlight never flickers to an undefined
/// state.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<SectionId>,
    lookahead: usize,
    active: usize,
}

impl SectionTracker {
    /// Create a tracker over sections in declaration order.
    ///
    /// The first section starts active. Fails fast on an empty list.
    pub fn new(sections: Vec<SectionId>, lookahead: usize) -> Result<Self, EmptySections> {
        if sections.is_empty() {
            return Err(EmptySections);
        }
        Ok(Self {
            sections,
            lookahead,
            active: 0,
        })
    }

    /// The currently active section.
    pub fn active(&self) -> SectionId {
        self.sections[self.active]
    }

    /// Sections in declaration order.
    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    /// The fixed probe look-ahead in rows.
    pub fn lookahead(&self) -> usize {
        self.lookahead
    }

    /// Re-evaluate the active section for a new scroll offset.
    ///
    /// `layout` supplies the current range for a section id, or `None`
    /// when the section has no layout data (treated as "does not
    /// match"). Returns the active section after the update.
    pub fn on_scroll<F>(&mut self, scroll_offset: usize, mut layout: F) -> SectionId
    where
        F: FnMut(SectionId) -> Option<SectionRange>,
    {
        let probe = scroll_offset.saturating_add(self.lookahead);
        for (index, id) in self.sections.iter().enumerate() {
            if let Some(range) = layout(*id) {
                if range.contains(probe) {
                    self.active = index;
                    break;
                }
            }
        }
        self.active()
    }
}
