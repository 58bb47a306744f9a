//! Domain model: content data, section identifiers, key actions, errors.

pub mod content;
pub mod error;
pub mod key_action;
pub mod section;

pub use content::Content;
pub use error::{AppError, ContentError};
pub use key_action::KeyAction;
pub use section::{SectionId, UnknownSection};
