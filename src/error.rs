use thiserror::Error;

/// Main error type for gedchart
#[derive(Error, Debug)]
pub enum GedError {
    /// A line whose level or tag cannot be extracted
    #[error("Malformed line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// A record or cross-reference without an `@ID@` pointer
    #[error("Malformed pointer on line {line}: {tag} carries no @ID@ pointer")]
    MalformedPointer { line: usize, tag: String },

    /// End of input reached while a record was still open
    #[error("Truncated record: input ended on line {line} inside {record} record")]
    TruncatedRecord { line: usize, record: String },

    /// Person id not present in the registry
    #[error("Person not found: {0}")]
    UnknownPerson(String),

    /// Family id not present in the registry
    #[error("Family not found: {0}")]
    UnknownFamily(String),

    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenient Result type using GedError
pub type Result<T> = std::result::Result<T, GedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GedError::MalformedPointer { line: 7, tag: "INDI".to_string() };
        assert!(err.to_string().contains("line 7"));
        assert!(err.to_string().contains("INDI"));
    }

    #[test]
    fn test_unknown_reference_names_id() {
        let err = GedError::UnknownPerson("I42".to_string());
        assert_eq!(err.to_string(), "Person not found: I42");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ged_err: GedError = io_err.into();
        assert!(matches!(ged_err, GedError::Io(_)));
    }
}
