use std::fmt;

/// Non-fatal conditions met while gathering version candidates.
/// None of these change resolution; they explain why a tier was skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No git repository could be opened, so there are no tags
    NoRepository { path: String, reason: String },
    /// Tag carries the configured prefix but is not a semantic version
    UnparsableTag { tag: String },
    /// Override value (property or file) is not a semantic version
    UnparsableOverride { origin: String, value: String },
    /// Build metadata is present but is not an integer version code
    NonNumericBuildMetadata { origin: String, metadata: String },
    /// The override file exists but could not be read
    OverrideFileUnreadable { path: String, reason: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoRepository { path, reason } => {
                write!(f, "No git repository at '{}' ({}); tags are ignored", path, reason)
            }
            BoundaryWarning::UnparsableTag { tag } => {
                write!(f, "Skipping tag '{}': not a semantic version", tag)
            }
            BoundaryWarning::UnparsableOverride { origin, value } => {
                write!(
                    f,
                    "Ignoring {} '{}': not a semantic version",
                    origin, value
                )
            }
            BoundaryWarning::NonNumericBuildMetadata { origin, metadata } => {
                write!(
                    f,
                    "Build metadata '{}' from {} is not a version code",
                    metadata, origin
                )
            }
            BoundaryWarning::OverrideFileUnreadable { path, reason } => {
                write!(f, "Cannot read override file '{}': {}", path, reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_repository_display() {
        let warning = BoundaryWarning::NoRepository {
            path: "/tmp/app".to_string(),
            reason: "could not find repository".to_string(),
        };
        let msg = warning.to_string();
        assert!(msg.contains("/tmp/app"));
        assert!(msg.contains("could not find repository"));
    }

    #[test]
    fn test_non_numeric_metadata_display() {
        let warning = BoundaryWarning::NonNumericBuildMetadata {
            origin: "override file".to_string(),
            metadata: "abc".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "Build metadata 'abc' from override file is not a version code"
        );
    }
}
