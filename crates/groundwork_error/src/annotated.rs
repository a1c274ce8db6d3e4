//! Error annotation with call-site location capture.

use tracing::error;

/// Source location recorded at the moment an error was annotated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// File path of the annotating frame
    pub file: String,
    /// Line number of the annotating frame
    pub line: u32,
}

impl SourceLocation {
    /// Create a new SourceLocation.
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

/// An error value enriched with the source location at which it was wrapped.
///
/// The wrapped value is stringified once at construction; the location, when
/// present, is embedded in the `Display` output. Construction also emits the
/// formatted message at error severity, so annotating an error is enough to
/// get it into the log stream.
///
/// Annotating an `AnnotatedError` re-stringifies its formatted message; there
/// is no unwrapping or chaining.
///
/// # Examples
///
/// ```
/// use groundwork_error::AnnotatedError;
///
/// let err = AnnotatedError::new("connection refused");
/// assert!(err.message.contains("connection refused"));
/// assert!(err.location.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedError {
    /// Stringified form of the underlying error
    pub message: String,
    /// Where the annotation happened, when known
    pub location: Option<SourceLocation>,
}

impl AnnotatedError {
    /// Wrap an error, capturing the caller's file and line.
    #[track_caller]
    pub fn new(err: impl std::fmt::Display) -> Self {
        let location = std::panic::Location::caller();
        Self::with_location(err, SourceLocation::new(location.file(), location.line()))
    }

    /// Wrap an error at an explicitly supplied location.
    pub fn with_location(err: impl std::fmt::Display, location: SourceLocation) -> Self {
        Self::build(err.to_string(), Some(location))
    }

    /// Wrap an error when no location information is available.
    ///
    /// The `Display` output is the original message unchanged, with no
    /// location prefix.
    pub fn without_location(err: impl std::fmt::Display) -> Self {
        Self::build(err.to_string(), None)
    }

    fn build(message: String, location: Option<SourceLocation>) -> Self {
        let annotated = Self { message, location };
        error!("{}", annotated);
        annotated
    }

    /// The diagnostic message, identical to the `Display` output.
    pub fn formatted(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for AnnotatedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.location {
            Some(location) => write!(
                f,
                "Error occurred in script: [{}] at line number [{}]: {}",
                location.file, location.line, self.message
            ),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for AnnotatedError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_captures_caller_location() {
        let err = AnnotatedError::new("boom");
        let location = err.location.as_ref().expect("location captured");
        assert!(location.file.ends_with("annotated.rs"));
        assert!(location.line > 0);
    }

    #[test]
    fn test_with_location_format() {
        let err = AnnotatedError::with_location("boom", SourceLocation::new("a.txt", 42));
        assert_eq!(
            format!("{}", err),
            "Error occurred in script: [a.txt] at line number [42]: boom"
        );
        assert_eq!(err.formatted(), format!("{}", err));
    }

    #[test]
    fn test_without_location_passes_message_through() {
        let err = AnnotatedError::without_location("boom");
        assert_eq!(format!("{}", err), "boom");
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let location = SourceLocation::new("a.txt", 42);
        let first = AnnotatedError::with_location("boom", location.clone());
        let second = AnnotatedError::with_location("boom", location);
        assert_eq!(first.formatted(), second.formatted());
    }

    #[test]
    fn test_structured_error_is_stringified() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
        let err = AnnotatedError::without_location(&io_err);
        assert_eq!(err.message, io_err.to_string());
        assert_eq!(format!("{}", err), io_err.to_string());
    }

    #[test]
    fn test_annotating_an_annotated_error_restringifies() {
        let inner = AnnotatedError::with_location("boom", SourceLocation::new("a.txt", 42));
        let outer = AnnotatedError::without_location(&inner);
        assert_eq!(outer.message, inner.formatted());
    }

    #[test]
    fn test_empty_file_path_is_embedded_verbatim() {
        let err = AnnotatedError::with_location("boom", SourceLocation::new("", 7));
        assert_eq!(
            format!("{}", err),
            "Error occurred in script: [] at line number [7]: boom"
        );
    }
}
