//! Error types for the portfolio page controller
//!
//! Form-validation failures are not errors; they are reported through
//! [`crate::validation::SubmitOutcome`]. These variants cover faults outside
//! the handled domain: bad configuration and a broken host environment.

use thiserror::Error;

/// Result type alias for portfolio page operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the portfolio page controller
#[derive(Debug, Error)]
pub enum Error {
    // ==========================================================================
    // Configuration Errors
    // ==========================================================================
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // ==========================================================================
    // Host Environment Errors
    // ==========================================================================
    #[error("DOM error: {0}")]
    Dom(String),
}

impl Error {
    /// Returns the error type string (for the JS boundary)
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Serialization(_) => "TYPE_ERROR",
            Self::Dom(_) => "DOM_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_type_mapping() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let cases: Vec<(Error, &str)> = vec![
            (Error::InvalidConfig("palette".into()), "INVALID_CONFIG"),
            (Error::Serialization(bad_json), "TYPE_ERROR"),
            (Error::Dom("no window".into()), "DOM_ERROR"),
        ];
        for (err, expected) in cases {
            assert_eq!(err.error_type(), expected, "wrong type for {err}");
        }
    }

    #[test]
    fn display_includes_detail() {
        let err = Error::InvalidConfig("palette must not be empty".into());
        assert_eq!(err.to_string(), "Invalid config: palette must not be empty");
    }
}
