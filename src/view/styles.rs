//! Accent theme styles.

use ratatui::style::{Color, Modifier, Style};

/// Styles derived from the configured accent theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styles {
    /// Accent color for headings, the typed headline, and the active
    /// nav label.
    pub accent: Style,
    /// Section heading style.
    pub heading: Style,
    /// Body text style.
    pub text: Style,
    /// De-emphasized text (durations, hints, separators).
    pub dim: Style,
}

impl Styles {
    /// Resolve styles for a theme name.
    ///
    /// Unknown names fall back to the default amber theme. When the
    /// `NO_COLOR` environment variable is set, all color is stripped
    /// and only modifiers remain.
    pub fn for_theme(name: &str) -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            return Self::mono();
        }

        let accent_color = match name {
            "blue" => Color::Blue,
            "green" => Color::Green,
            "mono" => return Self::mono(),
            _ => Color::Yellow, // "amber" and unknown themes
        };

        Self {
            accent: Style::default().fg(accent_color),
            heading: Style::default()
                .fg(accent_color)
                .add_modifier(Modifier::BOLD),
            text: Style::default(),
            dim: Style::default().add_modifier(Modifier::DIM),
        }
    }

    /// Colorless styles: modifiers only.
    fn mono() -> Self {
        Self {
            accent: Style::default().add_modifier(Modifier::BOLD),
            heading: Style::default().add_modifier(Modifier::BOLD),
            text: Style::default(),
            dim: Style::default().add_modifier(Modifier::DIM),
        }
    }

    /// Theme names accepted by the CLI.
    pub const KNOWN_THEMES: [&'static str; 4] = ["amber", "blue", "green", "mono"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(folio_env)]
    fn amber_is_yellow_accent() {
        std::env::remove_var("NO_COLOR");
        let styles = Styles::for_theme("amber");
        assert_eq!(styles.accent, Style::default().fg(Color::Yellow));
    }

    #[test]
    #[serial(folio_env)]
    fn unknown_theme_falls_back_to_amber() {
        std::env::remove_var("NO_COLOR");
        assert_eq!(Styles::for_theme("no-such-theme"), Styles::for_theme("amber"));
    }

    #[test]
    #[serial(folio_env)]
    fn mono_theme_has_no_colors() {
        std::env::remove_var("NO_COLOR");
        let styles = Styles::for_theme("mono");
        assert_eq!(styles.accent.fg, None);
    }

    #[test]
    #[serial(folio_env)]
    fn no_color_env_strips_color_from_any_theme() {
        std::env::set_var("NO_COLOR", "1");
        let styles = Styles::for_theme("blue");
        assert_eq!(styles.accent.fg, None);
        std::env::remove_var("NO_COLOR");
    }
}
