//! Page construction.
//!
//! Builds the whole portfolio page as a column of pre-wrapped rows and
//! records each section's `[top, height)` range while doing so. Those
//! ranges are the section layout the tracker consumes, so measurement
//! and rendering can never disagree. The page is rebuilt on every draw
//! (the typed headline changes between draws and width changes on
//! resize); nothing here is cached.

use crate::model::{Content, SectionId};
use crate::state::{AppState, SectionLayout};
use crate::track::SectionRange;
use crate::view::styles::Styles;
use crate::view::text::wrap;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Cursor glyph appended to the typed headline while the blink phase is
/// on.
const CURSOR_GLYPH: &str = "▌";

/// A fully built page: rows to render plus the measured section layout.
#[derive(Debug, Clone)]
pub struct Page {
    /// All page rows, top to bottom.
    pub lines: Vec<Line<'static>>,
    /// Measured section ranges for the tracker.
    pub layout: SectionLayout,
}

/// Build the page for the current animation state at the given width.
pub fn build(state: &AppState, styles: &Styles, width: u16) -> Page {
    let mut builder = PageBuilder {
        width: usize::from(width.max(1)),
        styles,
        lines: Vec::new(),
        entries: Vec::new(),
    };

    let content = &state.content;
    builder.section(SectionId::Hero, |b| b.hero(state));
    builder.section(SectionId::About, |b| b.about(content));
    builder.section(SectionId::Technologies, |b| b.technologies(content));
    builder.section(SectionId::Experience, |b| b.experience(content));
    builder.section(SectionId::Projects, |b| b.projects(content));
    builder.section(SectionId::Certifications, |b| b.certifications(content));
    builder.section(SectionId::Leadership, |b| b.leadership(content));
    builder.section(SectionId::Message, |b| b.message(content));
    builder.section(SectionId::Contact, |b| b.contact(content));

    let total_height = builder.lines.len();
    Page {
        lines: builder.lines,
        layout: SectionLayout::new(builder.entries, total_height),
    }
}

struct PageBuilder<'a> {
    width: usize,
    styles: &'a Styles,
    lines: Vec<Line<'static>>,
    entries: Vec<(SectionId, SectionRange)>,
}

impl PageBuilder<'_> {
    /// Run `build` and record the rows it produced as `id`'s range.
    /// Sections that produce no rows get a zero-height range, which the
    /// tracker skips.
    fn section(&mut self, id: SectionId, build: impl FnOnce(&mut Self)) {
        let top = self.lines.len();
        build(self);
        let height = self.lines.len() - top;
        self.entries.push((id, SectionRange::new(top, height)));
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn heading(&mut self, title: &str) {
        self.push(Line::from(Span::styled(
            format!("── {title} "),
            self.styles.heading,
        )));
        self.blank();
    }

    /// Wrapped body text, one styled row per wrapped line.
    fn text(&mut self, text: &str, style: Style) {
        for row in wrap(text, self.width) {
            self.push(Line::from(Span::styled(row, style)));
        }
    }

    fn bullet(&mut self, text: &str, style: Style) {
        let rows = wrap(text, self.width.saturating_sub(2).max(1));
        for (i, row) in rows.into_iter().enumerate() {
            let prefix = if i == 0 { "• " } else { "  " };
            self.push(Line::from(vec![
                Span::styled(prefix.to_string(), self.styles.dim),
                Span::styled(row, style),
            ]));
        }
    }

    fn hero(&mut self, state: &AppState) {
        let styles = *self.styles;
        self.blank();
        self.text(&state.content.profile.name, styles.heading);
        self.blank();

        let cursor = if state.cursor_visible {
            CURSOR_GLYPH
        } else {
            " "
        };
        self.push(Line::from(vec![
            Span::styled("> ".to_string(), styles.dim),
            Span::styled(state.typewriter.visible().to_string(), styles.accent),
            Span::styled(cursor.to_string(), styles.accent),
        ]));
        self.blank();

        if let Some(quote) = state.quotes.current() {
            self.text(&format!("\u{201c}{quote}\u{201d}"), styles.dim);
            self.blank();
        }
    }

    fn about(&mut self, content: &Content) {
        let styles = *self.styles;
        self.heading("About");
        self.text(&content.profile.about, styles.text);
        self.blank();
    }

    fn technologies(&mut self, content: &Content) {
        let styles = *self.styles;
        if content.technologies.is_empty() {
            return;
        }
        self.heading("Technologies");
        for category in &content.technologies {
            let items = category.items.join(", ");
            self.text(&format!("{}: {items}", category.name), styles.text);
        }
        self.blank();
    }

    fn experience(&mut self, content: &Content) {
        let styles = *self.styles;
        if content.experience.is_empty() {
            return;
        }
        self.heading("Experience");
        for entry in &content.experience {
            self.text(
                &format!("{} — {}", entry.position, entry.company),
                styles.accent,
            );
            self.text(&entry.duration, styles.dim);
            self.text(&entry.description, styles.text);
            for achievement in &entry.achievements {
                self.bullet(achievement, styles.text);
            }
            if !entry.technologies.is_empty() {
                self.text(&entry.technologies.join(" · "), styles.dim);
            }
            self.blank();
        }
    }

    fn projects(&mut self, content: &Content) {
        let styles = *self.styles;
        if content.projects.is_empty() {
            return;
        }
        self.heading("Projects");
        for project in &content.projects {
            self.text(&project.title, styles.accent);
            self.text(&project.description, styles.text);
            for highlight in &project.highlights {
                self.bullet(highlight, styles.text);
            }
            if !project.technologies.is_empty() {
                self.text(&project.technologies.join(" · "), styles.dim);
            }
            self.blank();
        }
    }

    fn certifications(&mut self, content: &Content) {
        let styles = *self.styles;
        if content.certifications.is_empty() {
            return;
        }
        self.heading("Certifications");
        for cert in &content.certifications {
            let line = match &cert.year {
                Some(year) => format!("{} — {} ({year})", cert.name, cert.issuer),
                None => format!("{} — {}", cert.name, cert.issuer),
            };
            self.bullet(&line, styles.text);
        }
        self.blank();
    }

    fn leadership(&mut self, content: &Content) {
        let styles = *self.styles;
        if content.leadership.is_empty() {
            return;
        }
        self.heading("Leadership");
        for role in &content.leadership {
            self.text(
                &format!("{} — {}", role.role, role.organization),
                styles.accent,
            );
            self.text(&role.description, styles.text);
            self.blank();
        }
    }

    fn message(&mut self, content: &Content) {
        let styles = *self.styles;
        if content.message.is_empty() {
            return;
        }
        self.heading("Message");
        for paragraph in &content.message {
            self.text(paragraph, styles.text);
            self.blank();
        }
    }

    fn contact(&mut self, content: &Content) {
        let styles = *self.styles;
        self.heading("Contact");
        let contact = &content.contact;
        self.text(&format!("email     {}", contact.email), styles.text);
        if let Some(phone) = &contact.phone {
            self.text(&format!("phone     {phone}"), styles.text);
        }
        if let Some(linkedin) = &contact.linkedin {
            self.text(&format!("linkedin  {linkedin}"), styles.text);
        }
        if let Some(github) = &contact.github {
            self.text(&format!("github    {github}"), styles.text);
        }
        self.blank();
    }
}
