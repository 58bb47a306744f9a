//! Page section identifiers.
//!
//! The portfolio page is a fixed, ordered stack of named sections. The
//! order here is the declaration order used everywhere: rendering, the
//! navigation bar, and active-section matching (first match wins on
//! overlapping ranges).

use std::fmt;
use std::str::FromStr;

/// Identifier for one vertically-bounded region of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    /// Landing block with the typewriter headline.
    Hero,
    /// Biography paragraph.
    About,
    /// Technology categories.
    Technologies,
    /// Work experience entries.
    Experience,
    /// Featured projects.
    Projects,
    /// Certifications list.
    Certifications,
    /// Leadership roles.
    Leadership,
    /// Closing message paragraphs.
    Message,
    /// Contact links.
    Contact,
}

impl SectionId {
    /// All sections in page declaration order.
    pub const ALL: [SectionId; 9] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Technologies,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Certifications,
        SectionId::Leadership,
        SectionId::Message,
        SectionId::Contact,
    ];

    /// Stable lowercase identifier, used in CLI flags and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Technologies => "technologies",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Certifications => "certifications",
            SectionId::Leadership => "leadership",
            SectionId::Message => "message",
            SectionId::Contact => "contact",
        }
    }

    /// Short label for the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Technologies => "Tech",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Certifications => "Certs",
            SectionId::Leadership => "Leadership",
            SectionId::Message => "Message",
            SectionId::Contact => "Contact",
        }
    }

    /// Position of this section in declaration order.
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|s| s == self)
            .unwrap_or(0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown section name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown section '{0}' (expected one of: hero, about, technologies, experience, projects, certifications, leadership, message, contact)")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}
