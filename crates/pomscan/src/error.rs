//! Error types for the pomscan crate

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort a scan
///
/// Recoverable findings (unparseable descriptors, missing or mismatched
/// comparison files) are never returned as errors; they are collected in
/// [`crate::RunReport`] instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Scan root does not exist
    #[error("path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    /// Target file pattern is not a valid regex
    #[error("invalid target pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A leaf directory was classified as a target but could not be listed
    #[error("failed to read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A leaf directory has no POM descriptor next to its artifacts
    #[error("POM not found under {}", .0.display())]
    DescriptorNotFound(PathBuf),

    /// The descriptor file exists but could not be read
    #[error("failed to read descriptor {}: {source}", .path.display())]
    DescriptorRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required coordinate is empty in both the project and its parent
    #[error("can not find {field} of {}", .descriptor.display())]
    UnresolvedCoordinate {
        field: &'static str,
        descriptor: PathBuf,
    },

    /// The artifact locator has no rule for this packaging
    #[error("unsupported packaging '{packaging}' in {}", .descriptor.display())]
    UnsupportedPackaging {
        packaging: String,
        descriptor: PathBuf,
    },

    /// The reference side of a size comparison is missing
    #[error("expected file {} is missing: {source}", .path.display())]
    ExpectedMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for pomscan operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_coordinate_message() {
        let err = Error::UnresolvedCoordinate {
            field: "groupId",
            descriptor: PathBuf::from("/out/mod1/mod1.pom"),
        };
        assert_eq!(err.to_string(), "can not find groupId of /out/mod1/mod1.pom");
    }

    #[test]
    fn test_invalid_pattern_from_regex() {
        let err: Error = regex::Regex::new("(").unwrap_err().into();
        assert!(matches!(err, Error::InvalidPattern(_)));
    }
}
