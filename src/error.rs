//! Error types for the propel front controller.
//!
//! This module defines [`PropelError`], the error type returned when an
//! invocation must be aborted before dispatch, and a [`Result`] alias.
//!
//! # Error Handling Strategy
//!
//! - Conflicting or incomplete profile flags are hard failures and get their
//!   own variants so callers can match on them
//! - Cosmetic input variance (bad numeric flag values, unknown launcher names,
//!   missing home directory) never produces an error; those paths fall back
//!   to a default instead
//! - `anyhow::Error` (via `PropelError::Other`) covers binary glue

use thiserror::Error;

/// Core error type for front-controller operations.
#[derive(Debug, Error)]
pub enum PropelError {
    /// `--dev` and `--profile` were both given in the global region.
    #[error("Cannot combine --dev with --profile")]
    ProfileConflict,

    /// `--profile` was given without a usable value.
    #[error("--profile requires a value")]
    MissingProfileValue,

    /// `--profile` value contains characters outside the allowed set.
    #[error("Invalid --profile '{name}' (use letters, numbers, \"_\", \"-\" only)")]
    InvalidProfileName { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PropelError {
    /// Whether this error came from argv parsing (the caller must abort
    /// before any dispatch happens).
    pub fn is_parse_conflict(&self) -> bool {
        matches!(
            self,
            Self::ProfileConflict | Self::MissingProfileValue | Self::InvalidProfileName { .. }
        )
    }
}

/// Result type alias for front-controller operations.
pub type Result<T> = std::result::Result<T, PropelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_conflict_names_both_flags() {
        let msg = PropelError::ProfileConflict.to_string();
        assert!(msg.contains("--dev"));
        assert!(msg.contains("--profile"));
    }

    #[test]
    fn missing_profile_value_displays_flag() {
        assert_eq!(
            PropelError::MissingProfileValue.to_string(),
            "--profile requires a value"
        );
    }

    #[test]
    fn invalid_profile_name_displays_name() {
        let err = PropelError::InvalidProfileName {
            name: "bad name".into(),
        };
        assert!(err.to_string().contains("bad name"));
    }

    #[test]
    fn parse_conflicts_are_classified() {
        assert!(PropelError::ProfileConflict.is_parse_conflict());
        assert!(PropelError::MissingProfileValue.is_parse_conflict());
        assert!(PropelError::InvalidProfileName { name: "x y".into() }.is_parse_conflict());

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        assert!(!PropelError::from(io_err).is_parse_conflict());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PropelError = io_err.into();
        assert!(matches!(err, PropelError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(PropelError::ProfileConflict)
        }
        assert!(returns_error().is_err());
    }
}
