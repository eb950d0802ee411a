//! Error types for the Learner's Point site

use thiserror::Error;

/// Main error type for site operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// A text cycler needs at least one phrase
    #[error("Typewriter needs at least one phrase")]
    EmptyPhrases,

    /// A carousel needs at least one slide
    #[error("Carousel needs at least one item")]
    EmptyCarousel,

    /// A required form field was left blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The email field does not look like an address
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Site content file could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport failure talking to the mail relay
    #[error("Relay error: {0}")]
    Relay(#[from] reqwest::Error),

    /// The mail relay answered but refused the submission
    #[error("Relay rejected submission ({status}): {message}")]
    RelayRejected { status: u16, message: String },

    /// Clipboard access failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::MissingField("fullName");
        assert_eq!(format!("{}", err), "Missing required field: fullName");

        let err = SiteError::RelayRejected {
            status: 422,
            message: "bad form".to_string(),
        };
        assert_eq!(format!("{}", err), "Relay rejected submission (422): bad form");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let site_err: SiteError = io_err.into();
        assert!(matches!(site_err, SiteError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let site_err: SiteError = json_err.into();
        assert!(matches!(site_err, SiteError::Config(_)));
    }
}
