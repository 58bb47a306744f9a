//! Error types for the folio application.
//!
//! A small hierarchical taxonomy built on `thiserror`. All startup
//! failures (content, config, logging, terminal) are fatal and compose
//! into [`AppError`] via `From` so `?` propagates cleanly. The animation
//! cores have no runtime error surface at all: their only failure modes
//! are construction-time precondition violations, which carry their own
//! dedicated error types next to the machines.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Content document could not be loaded or parsed. Fatal: there is
    /// nothing to render without content.
    #[error("Failed to load content: {0}")]
    Content(#[from] ContentError),

    /// Configuration file could not be loaded or parsed.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing initialization failed.
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal setup or rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The content document violates a core precondition (e.g. no
    /// typewriter titles). Caught at startup, never at runtime.
    #[error("Invalid content: {0}")]
    InvalidContent(String),
}

/// Errors loading the portfolio content document.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content file could not be read.
    #[error("Failed to read content file {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON for the content schema.
    #[error("Invalid content document {path}: {message}")]
    Parse {
        /// Path with invalid content (`<embedded>` for the built-in
        /// document).
        path: PathBuf,
        /// Parser error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn content_read_error_display_includes_path() {
        let err = ContentError::Read {
            path: PathBuf::from("/tmp/content.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/content.json"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn content_parse_error_display_includes_message() {
        let err = ContentError::Parse {
            path: PathBuf::from("<embedded>"),
            message: "missing field `profile`".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("<embedded>"));
        assert!(msg.contains("missing field"));
    }

    #[test]
    fn app_error_from_content_error() {
        let err: AppError = ContentError::Parse {
            path: PathBuf::from("x.json"),
            message: "bad".to_string(),
        }
        .into();
        assert!(err.to_string().contains("Failed to load content"));
    }

    #[test]
    fn app_error_from_io_error() {
        let err: AppError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(err.to_string().contains("Terminal error"));
    }
}
