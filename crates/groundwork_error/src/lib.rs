//! Error types for the groundwork scaffolding crates.
//!
//! The central type is [`AnnotatedError`], which wraps any displayable error
//! value together with the source location at which the wrapping happened.
//! [`ConfigError`] covers configuration failures detected during startup.
//! Both fold into the workspace-level [`GroundworkError`].

mod annotated;
mod config;

pub use annotated::{AnnotatedError, SourceLocation};
pub use config::ConfigError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum GroundworkErrorKind {
    /// An error enriched with its annotation site
    Annotated(AnnotatedError),
    /// Configuration error
    Config(ConfigError),
}

impl std::fmt::Display for GroundworkErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroundworkErrorKind::Annotated(e) => write!(f, "{}", e),
            GroundworkErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// Groundwork error with kind discrimination.
#[derive(Debug)]
pub struct GroundworkError(Box<GroundworkErrorKind>);

impl GroundworkError {
    /// Create a new error from a kind.
    pub fn new(kind: GroundworkErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GroundworkErrorKind {
        &self.0
    }
}

impl std::fmt::Display for GroundworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GroundworkError {}

// Generic From implementation for any type that converts to GroundworkErrorKind
impl<T> From<T> for GroundworkError
where
    T: Into<GroundworkErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for groundwork operations.
pub type GroundworkResult<T> = std::result::Result<T, GroundworkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_discrimination() {
        let err: GroundworkError = ConfigError::new("APP_PORT must be an integer").into();
        assert!(matches!(err.kind(), GroundworkErrorKind::Config(_)));

        let err: GroundworkError = AnnotatedError::without_location("boom").into();
        assert!(matches!(err.kind(), GroundworkErrorKind::Annotated(_)));
    }

    #[test]
    fn test_display_passes_through_kind() {
        let err: GroundworkError = AnnotatedError::without_location("boom").into();
        assert_eq!(format!("{}", err), "boom");
    }
}
