//! Error types for launchdeck.
//!
//! Navigation, tree queries and expansion toggles never fail: invalid input is
//! ignored. Errors only come from loading configuration, validating the static
//! org data, terminal I/O and the fullscreen collaborator.

use thiserror::Error;

/// The main error type for launchdeck operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Terminal or file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// The org member list does not form a single rooted tree.
    #[error("invalid org chart: {message}")]
    OrgStructure {
        /// Description of the structural problem.
        message: String,
    },

    /// A slide name or number did not match any slide.
    #[error("unknown slide '{0}'; use hero, figures, orgchart, credits or 1-4")]
    UnknownSlide(String),

    /// The fullscreen collaborator refused the request.
    #[error("fullscreen request failed: {0}")]
    Fullscreen(String),
}

/// A specialized Result type for launchdeck operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an org structure error.
    #[must_use]
    pub fn org(message: impl Into<String>) -> Self {
        Self::OrgStructure {
            message: message.into(),
        }
    }

    /// Create a config validation error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_error.rs"]
mod tests;
