//! Error types for ExtFS path handling and navigation.

/// Navigation error type with contextual variants.
///
/// Path variants carry the offending path so the UI can report which value
/// was rejected. Uses `#[non_exhaustive]` for forward compatibility.
///
/// # Examples
///
/// ```rust
/// use extfs_nav::NavError;
///
/// let err = NavError::UnknownRoot { path: "relative/dir".into() };
/// assert_eq!(err.to_string(), "unknown path root: relative/dir");
/// assert!(err.is_invalid_path());
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    // Path Errors
    /// No `/` anywhere and no `\` past the first character.
    #[error("unknown path separator: {path}")]
    UnknownSeparator {
        /// The path without a detectable separator.
        path: String,
    },

    /// None of the supported root forms matched.
    #[error("unknown path root: {path}")]
    UnknownRoot {
        /// The path without a detectable root.
        path: String,
    },

    /// The path cannot be decomposed against its root.
    #[error("invalid path: {path} ({reason})")]
    InvalidPath {
        /// The malformed path.
        path: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    // Navigation Errors
    /// Breadcrumb index past the end of the parent stack.
    #[error("breadcrumb index {index} out of range (depth {len})")]
    IndexOutOfRange {
        /// The requested stack index.
        index: usize,
        /// The stack depth at the time of the request.
        len: usize,
    },

    // Collaborator Errors
    /// Failure reported by an item source.
    #[error("backend error: {0}")]
    Backend(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl NavError {
    /// Returns `true` for the malformed-path variants.
    ///
    /// Callers use this to render a path as inert instead of failing the
    /// whole view.
    pub fn is_invalid_path(&self) -> bool {
        matches!(
            self,
            NavError::UnknownSeparator { .. }
                | NavError::UnknownRoot { .. }
                | NavError::InvalidPath { .. }
        )
    }

    pub(crate) fn invalid_path(path: &str, reason: &'static str) -> Self {
        NavError::InvalidPath {
            path: path.to_owned(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_error_unknown_separator_display() {
        let err = NavError::UnknownSeparator {
            path: "plain".into(),
        };
        assert_eq!(err.to_string(), "unknown path separator: plain");
    }

    #[test]
    fn nav_error_invalid_path_display() {
        let err = NavError::invalid_path("/a", "not under root");
        assert_eq!(err.to_string(), "invalid path: /a (not under root)");
    }

    #[test]
    fn nav_error_index_out_of_range_display() {
        let err = NavError::IndexOutOfRange { index: 4, len: 2 };
        assert!(err.to_string().contains('4'));
        assert!(err.to_string().contains('2'));
    }

    #[test]
    fn nav_error_path_classification() {
        assert!(NavError::invalid_path("x", "y").is_invalid_path());
        assert!(
            NavError::UnknownSeparator { path: "x".into() }.is_invalid_path()
        );
        assert!(!NavError::IndexOutOfRange { index: 0, len: 0 }.is_invalid_path());
        assert!(!NavError::Backend("down".into()).is_invalid_path());
    }
}
