//! Pinned navigation bar.
//!
//! Two rows at the top of the screen: the name with a quit hint, and
//! the section labels with the active section highlighted. The
//! highlight is driven entirely by the tracker; this module only
//! renders it.

use crate::model::SectionId;
use crate::view::styles::Styles;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Nav bar height in rows.
pub const NAV_HEIGHT: u16 = 2;

/// Build the title row: name on the left, quit hint.
pub fn title_line(name: &str, styles: &Styles) -> Line<'static> {
    Line::from(vec![
        Span::styled(name.to_string(), styles.heading),
        Span::styled("  ·  q to quit, tab to jump sections", styles.dim),
    ])
}

/// Build the section label row with the active label highlighted.
pub fn label_line(sections: &[SectionId], active: SectionId, styles: &Styles) -> Line<'static> {
    let mut spans = Vec::with_capacity(sections.len() * 2);
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", styles.dim));
        }
        let style = if *section == active {
            styles.accent.add_modifier(Modifier::UNDERLINED)
        } else {
            styles.dim
        };
        spans.push(Span::styled(section.label().to_string(), style));
    }
    Line::from(spans)
}

/// Render the nav bar into `area`.
pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    name: &str,
    sections: &[SectionId],
    active: SectionId,
    styles: &Styles,
) {
    let nav = Paragraph::new(vec![title_line(name, styles), label_line(sections, active, styles)]);
    frame.render_widget(nav, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn title_line_contains_name_and_hint() {
        let styles = Styles::for_theme("mono");
        let line = title_line("Ada Lovelace", &styles);
        let text = line_text(&line);
        assert!(text.contains("Ada Lovelace"));
        assert!(text.contains("q to quit"));
    }

    #[test]
    fn label_line_contains_every_section_label() {
        let styles = Styles::for_theme("mono");
        let line = label_line(&SectionId::ALL, SectionId::Hero, &styles);
        let text = line_text(&line);
        for section in SectionId::ALL {
            assert!(text.contains(section.label()), "missing {}", section.label());
        }
    }

    #[test]
    fn active_label_is_underlined() {
        let styles = Styles::for_theme("mono");
        let line = label_line(&SectionId::ALL, SectionId::Projects, &styles);
        let active_span = line
            .spans
            .iter()
            .find(|s| s.content.as_ref() == SectionId::Projects.label())
            .expect("active label span");
        assert!(active_span.style.add_modifier.contains(Modifier::UNDERLINED));

        let inactive_span = line
            .spans
            .iter()
            .find(|s| s.content.as_ref() == SectionId::About.label())
            .expect("inactive label span");
        assert!(!inactive_span
            .style
            .add_modifier
            .contains(Modifier::UNDERLINED));
    }
}
