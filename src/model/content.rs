//! Portfolio content data model.
//!
//! All page content is a static document deserialized once at startup.
//! A default document is embedded in the binary; `--content` loads an
//! alternative from disk. Content is read-only after load: the view
//! layer borrows it, nothing writes back.

use crate::model::error::ContentError;
use serde::Deserialize;
use std::path::Path;

/// Embedded default content document.
const DEFAULT_CONTENT: &str = include_str!("../../content/default.json");

/// Root of the portfolio content document.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Content {
    /// Name, typed titles, and biography.
    pub profile: Profile,
    /// Rotating hero quotes. May be empty (the quote line is omitted).
    #[serde(default)]
    pub quotes: Vec<String>,
    /// Technology categories in display order.
    #[serde(default)]
    pub technologies: Vec<TechCategory>,
    /// Work experience entries, most recent first.
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    /// Featured projects.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Certifications.
    #[serde(default)]
    pub certifications: Vec<Certification>,
    /// Leadership roles.
    #[serde(default)]
    pub leadership: Vec<LeadershipRole>,
    /// Closing message paragraphs.
    #[serde(default)]
    pub message: Vec<String>,
    /// Contact links.
    pub contact: Contact,
}

/// Identity block for the hero and about sections.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Titles cycled by the typewriter. Must be non-empty.
    pub titles: Vec<String>,
    /// Biography paragraph.
    pub about: String,
}

/// Named group of technologies.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TechCategory {
    /// Category heading (e.g. "Cloud", "Languages").
    pub name: String,
    /// Technology names within the category.
    pub items: Vec<String>,
}

/// One work experience entry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ExperienceEntry {
    /// Job title.
    pub position: String,
    /// Employer name.
    pub company: String,
    /// Opaque display string, e.g. "Apr 2024 – Present".
    pub duration: String,
    /// Role summary.
    pub description: String,
    /// Bullet-point achievements.
    #[serde(default)]
    pub achievements: Vec<String>,
    /// Technologies used in the role.
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// One featured project.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Project title.
    pub title: String,
    /// One-line description.
    pub description: String,
    /// Bullet-point highlights.
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Technologies used.
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// One certification.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Certification {
    /// Certification name.
    pub name: String,
    /// Issuing organization.
    pub issuer: String,
    /// Year obtained, if known.
    #[serde(default)]
    pub year: Option<String>,
}

/// One leadership role.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LeadershipRole {
    /// Role title.
    pub role: String,
    /// Organization name.
    pub organization: String,
    /// Role summary.
    pub description: String,
}

/// Contact links for the final section.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    /// Email address.
    pub email: String,
    /// Phone number, if published.
    #[serde(default)]
    pub phone: Option<String>,
    /// LinkedIn profile URL.
    #[serde(default)]
    pub linkedin: Option<String>,
    /// GitHub profile URL.
    #[serde(default)]
    pub github: Option<String>,
}

impl Content {
    /// Parse the embedded default content document.
    pub fn embedded() -> Result<Self, ContentError> {
        serde_json::from_str(DEFAULT_CONTENT).map_err(|e| ContentError::Parse {
            path: "<embedded>".into(),
            message: e.to_string(),
        })
    }

    /// Load a content document from a file.
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|e| ContentError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
