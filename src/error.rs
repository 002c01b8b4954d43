use thiserror::Error;

use crate::domain::VersionField;

/// Unified error type for release-tag-version operations
#[derive(Error, Debug)]
pub enum ReleaseVersionError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Couldn't find a {field}: every version source is empty and inference is enabled")]
    Unresolved { field: VersionField },

    #[error("Output error: {0}")]
    Output(String),
}

/// Convenience type alias for Results in release-tag-version
pub type Result<T> = std::result::Result<T, ReleaseVersionError>;

impl ReleaseVersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseVersionError::Config(msg.into())
    }

    /// Create an output error with context
    pub fn output(msg: impl Into<String>) -> Self {
        ReleaseVersionError::Output(msg.into())
    }

    /// Create the fatal error reported when a field cannot be resolved
    pub fn unresolved(field: VersionField) -> Self {
        ReleaseVersionError::Unresolved { field }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseVersionError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_unresolved_names_the_field() {
        let code = ReleaseVersionError::unresolved(VersionField::Code).to_string();
        let name = ReleaseVersionError::unresolved(VersionField::Name).to_string();

        assert!(code.starts_with("Couldn't find a versionCode"), "{}", code);
        assert!(name.starts_with("Couldn't find a versionName"), "{}", name);
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseVersionError::config("x"), "Configuration error"),
            (ReleaseVersionError::output("x"), "Output error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
