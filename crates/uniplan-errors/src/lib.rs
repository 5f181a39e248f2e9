//! Error facility for the uniplan service.
//!
//! A single structured error type with a stable kind taxonomy. The three
//! kinds every transport must keep distinct are `NotFound`, `Ambiguous`
//! (the only kind carrying a payload, the candidate list) and
//! `Unavailable`. Classification happens once, in the retrieval engine and
//! the storage boundary; transports map kinds to their own status
//! conventions and never inspect message text.

use std::fmt;

use uniplan_core_types::Employee;

/// Result type alias using UniError
pub type Result<T> = std::result::Result<T, UniError>;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// testing, and external API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The identifier does not resolve to any current record. Terminal;
    /// no retry helps.
    NotFound,
    /// The identifier matches more than one entity. Actionable: re-submit
    /// with one of the returned candidate slugs.
    Ambiguous,
    /// Persistent storage cannot be reached. Transient; safe to retry with
    /// backoff at the transport layer.
    Unavailable,
    /// Malformed caller input (bad time format, bad query parameter).
    InvalidInput,
    /// A value could not be serialized or deserialized.
    Serialization,
    /// Invariant breakage inside the service.
    Internal,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "ERR_NOT_FOUND",
            ErrorKind::Ambiguous => "ERR_AMBIGUOUS",
            ErrorKind::Unavailable => "ERR_UNAVAILABLE",
            ErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ErrorKind::Serialization => "ERR_SERIALIZATION",
            ErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the kind, the operation that failed, a human-readable message,
/// and, for `Ambiguous` only, the candidate records the caller needs to
/// disambiguate.
#[derive(Debug, Clone)]
pub struct UniError {
    kind: ErrorKind,
    op: Option<String>,
    message: String,
    candidates: Option<Vec<Employee>>,
}

impl UniError {
    /// Create a new error with the specified kind
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            op: None,
            message: String::new(),
            candidates: None,
        }
    }

    /// Attach the name of the failing operation
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Attach a human-readable message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the ambiguity candidate list
    pub fn with_candidates(mut self, candidates: Vec<Employee>) -> Self {
        self.candidates = Some(candidates);
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Stable code for the kind
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn candidates(&self) -> Option<&[Employee]> {
        self.candidates.as_deref()
    }

    /// Transport body for an ambiguous resolution: the message plus the
    /// full candidate records.
    pub fn ambiguous_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "message": if self.message.is_empty() {
                "Ambiguous identifier"
            } else {
                self.message.as_str()
            },
            "matches": self.candidates.as_deref().unwrap_or(&[]),
        })
    }
}

impl fmt::Display for UniError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " {}:", op)?;
        }
        if !self.message.is_empty() {
            write!(f, " {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for UniError {}

/// Schedule-not-found for an entity reference
pub fn schedule_not_found(kind: &str, identifier: &str) -> UniError {
    UniError::new(ErrorKind::NotFound)
        .with_op("schedule_get")
        .with_message(format!("Schedule not found for {}:{}", kind, identifier))
}

/// Ambiguous identifier carrying the candidate list (must be non-empty)
pub fn ambiguous_identifier(identifier: &str, candidates: Vec<Employee>) -> UniError {
    debug_assert!(candidates.len() > 1);
    UniError::new(ErrorKind::Ambiguous)
        .with_op("resolve_identifier")
        .with_message(format!("Ambiguous identifier: {}", identifier))
        .with_candidates(candidates)
}

/// Create a storage error from a database driver failure
pub fn storage_unavailable(op: &str, err: impl fmt::Display) -> UniError {
    UniError::new(ErrorKind::Unavailable)
        .with_op(op.to_string())
        .with_message(err.to_string())
}

/// Malformed caller input
pub fn invalid_input(reason: impl Into<String>) -> UniError {
    UniError::new(ErrorKind::InvalidInput).with_message(reason)
}

/// A value failed to serialize or deserialize
pub fn serialization(op: &str, err: impl fmt::Display) -> UniError {
    UniError::new(ErrorKind::Serialization)
        .with_op(op.to_string())
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: i64, slug: &str) -> Employee {
        Employee {
            id,
            first_name: "A".into(),
            last_name: "B".into(),
            middle_name: None,
            degree: None,
            rank: None,
            photo_link: None,
            calendar_id: None,
            url_id: slug.into(),
        }
    }

    #[test]
    fn test_kind_code_mapping_is_stable() {
        let kinds = vec![
            (ErrorKind::NotFound, "ERR_NOT_FOUND"),
            (ErrorKind::Ambiguous, "ERR_AMBIGUOUS"),
            (ErrorKind::Unavailable, "ERR_UNAVAILABLE"),
            (ErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
            (ErrorKind::Serialization, "ERR_SERIALIZATION"),
            (ErrorKind::Internal, "ERR_INTERNAL"),
        ];
        for (kind, expected) in kinds {
            assert_eq!(kind.code(), expected);
        }
    }

    #[test]
    fn test_ambiguous_is_structurally_distinct_from_not_found() {
        let err = ambiguous_identifier("Ivanov", vec![candidate(1, "a"), candidate(2, "b")]);
        assert_eq!(err.kind(), ErrorKind::Ambiguous);
        assert_ne!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.candidates().map(<[Employee]>::len), Some(2));

        let plain = schedule_not_found("group", "999");
        assert!(plain.candidates().is_none());
    }

    #[test]
    fn test_ambiguous_payload_shape() {
        let err = ambiguous_identifier("Ivanov", vec![candidate(1, "a"), candidate(2, "b")]);
        let payload = err.ambiguous_payload();
        assert_eq!(payload["message"], "Ambiguous identifier: Ivanov");
        assert_eq!(payload["matches"].as_array().unwrap().len(), 2);
        assert_eq!(payload["matches"][0]["url_id"], "a");
    }

    #[test]
    fn test_storage_unavailable_keeps_op() {
        let err = storage_unavailable("fetch_current", "connection refused");
        assert_eq!(err.kind(), ErrorKind::Unavailable);
        assert_eq!(err.op(), Some("fetch_current"));
        assert_eq!(
            err.to_string(),
            "[ERR_UNAVAILABLE] fetch_current: connection refused"
        );
    }
}
